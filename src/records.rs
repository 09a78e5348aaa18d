//! Input records read from the school and student CSV files.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

use crate::table::Keyed;

/// Minimum score (inclusive) counted as passing a subject.
pub const PASSING_SCORE: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum SchoolType {
    Charter,
    District,
}

impl fmt::Display for SchoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchoolType::Charter => f.write_str("Charter"),
            SchoolType::District => f.write_str("District"),
        }
    }
}

/// High school grade level, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum GradeLevel {
    #[serde(rename = "9th")]
    Ninth,
    #[serde(rename = "10th")]
    Tenth,
    #[serde(rename = "11th")]
    Eleventh,
    #[serde(rename = "12th")]
    Twelfth,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 4] = [
        GradeLevel::Ninth,
        GradeLevel::Tenth,
        GradeLevel::Eleventh,
        GradeLevel::Twelfth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GradeLevel::Ninth => "9th",
            GradeLevel::Tenth => "10th",
            GradeLevel::Eleventh => "11th",
            GradeLevel::Twelfth => "12th",
        }
    }

    /// Position of this grade in [`GradeLevel::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Rejects `NaN` and infinities, which `f64` parsing otherwise accepts.
fn finite<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom(format!("expected a finite number, found `{value}`")))
    }
}

/// One row of the schools file. `school_name` is the join key.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct School {
    #[serde(rename = "School ID")]
    pub school_id: u32,
    pub school_name: String,
    #[serde(rename = "type")]
    pub school_type: SchoolType,
    pub size: u32,
    #[serde(deserialize_with = "finite")]
    pub budget: f64,
}

impl Keyed for School {
    fn key(&self) -> &str {
        &self.school_name
    }
}

/// One row of the students file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Student {
    #[serde(rename = "Student ID")]
    pub student_id: u32,
    pub student_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    pub grade: GradeLevel,
    pub school_name: String,
    #[serde(deserialize_with = "finite")]
    pub reading_score: f64,
    #[serde(deserialize_with = "finite")]
    pub math_score: f64,
}

impl Student {
    pub fn passes_math(&self) -> bool {
        self.math_score >= PASSING_SCORE
    }

    pub fn passes_reading(&self) -> bool {
        self.reading_score >= PASSING_SCORE
    }

    /// Passing both subjects at once.
    pub fn passes_overall(&self) -> bool {
        self.passes_math() && self.passes_reading()
    }
}
