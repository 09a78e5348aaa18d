use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::analyzers::buckets::{summarize_by_size, summarize_by_spending, summarize_by_type};
use crate::analyzers::district::summarize_district;
use crate::analyzers::grade_level::{Subject, scores_by_grade};
use crate::analyzers::join::join;
use crate::analyzers::school::{bottom_performers, summarize_schools, top_performers, warn_unattended};
use crate::analyzers::types::{BucketSummary, DistrictSummary, GradeScores, SchoolSummary};
use crate::error::Result;
use crate::loader::{load_schools, load_students};
use crate::records::{School, Student};
use crate::table::Table;

/// Every summary view produced by one reporting pass.
#[derive(Debug, Serialize)]
pub struct DistrictReport {
    pub generated_at: DateTime<Utc>,
    pub district: DistrictSummary,
    pub schools: Table<SchoolSummary>,
    pub top_schools: Vec<SchoolSummary>,
    pub bottom_schools: Vec<SchoolSummary>,
    pub math_by_grade: Table<GradeScores>,
    pub reading_by_grade: Table<GradeScores>,
    pub by_spending: Vec<BucketSummary>,
    pub by_size: Vec<BucketSummary>,
    pub by_type: Vec<BucketSummary>,
}

/// Loads both CSV files and builds the report.
#[tracing::instrument(skip_all, fields(schools = %schools_path.display(), students = %students_path.display(), top_n = top_n))]
pub fn analyze(schools_path: &Path, students_path: &Path, top_n: usize) -> Result<DistrictReport> {
    let schools = load_schools(schools_path)?;
    let students = load_students(students_path)?;
    build_report(&schools, &students, top_n)
}

/// Joins students to schools and computes every summary view.
///
/// `top_n` sets the length of the top and bottom performer lists.
pub fn build_report(schools: &Table<School>, students: &[Student], top_n: usize) -> Result<DistrictReport> {
    let combined = join(schools, students)?;

    let district = summarize_district(schools, &combined)?;
    let summary = summarize_schools(&combined)?;
    warn_unattended(schools, &summary);

    let report = DistrictReport {
        generated_at: Utc::now(),
        district,
        top_schools: top_performers(&summary, top_n),
        bottom_schools: bottom_performers(&summary, top_n),
        math_by_grade: scores_by_grade(&combined, Subject::Math)?,
        reading_by_grade: scores_by_grade(&combined, Subject::Reading)?,
        by_spending: summarize_by_spending(&summary),
        by_size: summarize_by_size(&summary),
        by_type: summarize_by_type(&summary),
        schools: summary,
    };

    info!(
        schools = report.schools.len(),
        students = report.district.total_students,
        overall_passing = report.district.pct_overall_passing,
        "Report built"
    );

    Ok(report)
}
