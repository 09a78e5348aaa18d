//! Data types produced by the aggregation pipeline.

use serde::Serialize;

use crate::records::{GradeLevel, School, SchoolType, Student};
use crate::table::Keyed;

/// A student joined with the school they attend.
#[derive(Debug, Clone, Copy)]
pub struct CombinedRecord<'a> {
    pub student: &'a Student,
    pub school: &'a School,
}

/// District-wide figures, computed over every student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictSummary {
    pub total_schools: usize,
    pub total_students: usize,
    pub total_budget: f64,
    pub avg_math: f64,
    pub avg_reading: f64,
    pub pct_passing_math: f64,
    pub pct_passing_reading: f64,
    pub pct_overall_passing: f64,
}

/// Per-school figures. Rates use the school's enrollment as denominator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchoolSummary {
    pub school_name: String,
    pub school_type: SchoolType,
    pub total_students: u32,
    pub total_budget: f64,
    pub per_student_budget: f64,
    pub avg_math: f64,
    pub avg_reading: f64,
    pub pct_passing_math: f64,
    pub pct_passing_reading: f64,
    pub pct_overall_passing: f64,
}

impl Keyed for SchoolSummary {
    fn key(&self) -> &str {
        &self.school_name
    }
}

/// Mean score of one subject per grade for a single school.
/// A grade with no students at the school is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeScores {
    pub school_name: String,
    #[serde(rename = "9th")]
    pub ninth: Option<f64>,
    #[serde(rename = "10th")]
    pub tenth: Option<f64>,
    #[serde(rename = "11th")]
    pub eleventh: Option<f64>,
    #[serde(rename = "12th")]
    pub twelfth: Option<f64>,
}

impl GradeScores {
    pub fn score(&self, grade: GradeLevel) -> Option<f64> {
        match grade {
            GradeLevel::Ninth => self.ninth,
            GradeLevel::Tenth => self.tenth,
            GradeLevel::Eleventh => self.eleventh,
            GradeLevel::Twelfth => self.twelfth,
        }
    }
}

impl Keyed for GradeScores {
    fn key(&self) -> &str {
        &self.school_name
    }
}

/// Unweighted mean of per-school figures across the schools in one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    pub label: String,
    pub schools: usize,
    pub avg_math: f64,
    pub avg_reading: f64,
    pub pct_passing_math: f64,
    pub pct_passing_reading: f64,
    pub pct_overall_passing: f64,
}

impl Keyed for BucketSummary {
    fn key(&self) -> &str {
        &self.label
    }
}
