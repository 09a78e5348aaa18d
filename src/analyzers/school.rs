//! Per-school summary and the ranking views built from it.

use std::collections::{BTreeMap, HashSet};
use tracing::warn;

use crate::analyzers::types::{CombinedRecord, SchoolSummary};
use crate::error::{ReportError, Result};
use crate::records::School;
use crate::stats::ScoreTally;
use crate::table::Table;

/// Summarizes each school that has at least one student, sorted by school name.
///
/// Averages are over the school's students; passing rates and the per-student
/// budget divide by the school's recorded `size`.
pub fn summarize_schools(combined: &[CombinedRecord<'_>]) -> Result<Table<SchoolSummary>> {
    let mut groups: BTreeMap<&str, (&School, ScoreTally)> = BTreeMap::new();

    for row in combined {
        groups
            .entry(row.school.school_name.as_str())
            .or_insert_with(|| (row.school, ScoreTally::default()))
            .1
            .observe(row.student);
    }

    let mut rows = Vec::with_capacity(groups.len());

    for (name, (school, tally)) in groups {
        if tally.students != school.size as usize {
            warn!(
                school = name,
                size = school.size,
                counted = tally.students,
                "Enrollment does not match the number of students"
            );
        }

        let empty = || ReportError::EmptyDenominator {
            scope: format!("school `{name}`"),
            denominator: "enrollment",
        };

        let size = school.size as usize;
        if size == 0 {
            return Err(empty());
        }

        let (pct_passing_math, pct_passing_reading, pct_overall_passing) =
            tally.passing_rates(size).ok_or_else(empty)?;

        rows.push(SchoolSummary {
            school_name: name.to_string(),
            school_type: school.school_type,
            total_students: school.size,
            total_budget: school.budget,
            per_student_budget: school.budget / school.size as f64,
            avg_math: tally.avg_math().ok_or_else(empty)?,
            avg_reading: tally.avg_reading().ok_or_else(empty)?,
            pct_passing_math,
            pct_passing_reading,
            pct_overall_passing,
        });
    }

    Table::new(rows)
}

/// Logs schools from the schools file that no student attends.
pub fn warn_unattended(schools: &Table<School>, summary: &Table<SchoolSummary>) {
    let attended: HashSet<&str> = summary.iter().map(|s| s.school_name.as_str()).collect();
    for school in schools.iter() {
        if !attended.contains(school.school_name.as_str()) {
            warn!(school = %school.school_name, "School has no students and is left out of the summary");
        }
    }
}

/// The `n` schools with the highest overall passing rate.
///
/// Ties keep their order in `summary`.
pub fn top_performers(summary: &Table<SchoolSummary>, n: usize) -> Vec<SchoolSummary> {
    let mut ranked: Vec<_> = summary.iter().cloned().collect();
    ranked.sort_by(|a, b| b.pct_overall_passing.total_cmp(&a.pct_overall_passing));
    ranked.truncate(n);
    ranked
}

/// The `n` schools with the lowest overall passing rate.
///
/// Ties keep their order in `summary`.
pub fn bottom_performers(summary: &Table<SchoolSummary>, n: usize) -> Vec<SchoolSummary> {
    let mut ranked: Vec<_> = summary.iter().cloned().collect();
    ranked.sort_by(|a, b| a.pct_overall_passing.total_cmp(&b.pct_overall_passing));
    ranked.truncate(n);
    ranked
}
