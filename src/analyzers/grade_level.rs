use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::analyzers::types::{CombinedRecord, GradeScores};
use crate::error::Result;
use crate::records::{GradeLevel, Student};
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subject {
    Math,
    Reading,
}

impl Subject {
    pub fn score(self, student: &Student) -> f64 {
        match self {
            Subject::Math => student.math_score,
            Subject::Reading => student.reading_score,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Math => f.write_str("Math"),
            Subject::Reading => f.write_str("Reading"),
        }
    }
}

/// Mean `subject` score for every school and grade, one row per school
/// sorted by school name.
pub fn scores_by_grade(combined: &[CombinedRecord<'_>], subject: Subject) -> Result<Table<GradeScores>> {
    // per school: (sum, count) for each grade in canonical order
    let mut cells: BTreeMap<&str, [(f64, usize); 4]> = BTreeMap::new();

    for row in combined {
        let cell = &mut cells.entry(row.school.school_name.as_str()).or_default()[row.student.grade.index()];
        cell.0 += subject.score(row.student);
        cell.1 += 1;
    }

    let rows = cells
        .into_iter()
        .map(|(name, grades)| {
            let avg = |grade: GradeLevel| {
                let (sum, count) = grades[grade.index()];
                (count > 0).then(|| sum / count as f64)
            };
            GradeScores {
                school_name: name.to_string(),
                ninth: avg(GradeLevel::Ninth),
                tenth: avg(GradeLevel::Tenth),
                eleventh: avg(GradeLevel::Eleventh),
                twelfth: avg(GradeLevel::Twelfth),
            }
        })
        .collect();

    Table::new(rows)
}
