use std::collections::HashSet;

use crate::analyzers::types::{CombinedRecord, DistrictSummary};
use crate::error::{ReportError, Result};
use crate::records::School;
use crate::stats::ScoreTally;
use crate::table::Table;

/// Computes district-wide counts, averages and passing rates.
///
/// School counts and the budget total come from `schools`, so each budget is
/// summed once. Student figures come from `combined`; passing rates divide by
/// the number of distinct student IDs.
///
/// `total_schools` includes schools no student attends, unlike a count over
/// the joined rows; the two agree when every school has students.
pub fn summarize_district(
    schools: &Table<School>,
    combined: &[CombinedRecord<'_>],
) -> Result<DistrictSummary> {
    let total_schools = schools
        .iter()
        .map(|s| s.school_id)
        .collect::<HashSet<_>>()
        .len();
    let total_students = combined
        .iter()
        .map(|r| r.student.student_id)
        .collect::<HashSet<_>>()
        .len();
    let total_budget = schools.iter().map(|s| s.budget).sum::<f64>();

    let tally = ScoreTally::from_students(combined.iter().map(|r| r.student));

    let empty = || ReportError::EmptyDenominator {
        scope: "district".to_string(),
        denominator: "students",
    };
    let avg_math = tally.avg_math().ok_or_else(empty)?;
    let avg_reading = tally.avg_reading().ok_or_else(empty)?;
    let (pct_passing_math, pct_passing_reading, pct_overall_passing) =
        tally.passing_rates(total_students).ok_or_else(empty)?;

    Ok(DistrictSummary {
        total_schools,
        total_students,
        total_budget,
        avg_math,
        avg_reading,
        pct_passing_math,
        pct_passing_reading,
        pct_overall_passing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::join::join;
    use crate::records::{GradeLevel, SchoolType, Student};

    fn schools() -> Table<School> {
        Table::new(vec![
            School {
                school_id: 0,
                school_name: "A".to_string(),
                school_type: SchoolType::District,
                size: 2,
                budget: 1000.0,
            },
            School {
                school_id: 1,
                school_name: "B".to_string(),
                school_type: SchoolType::Charter,
                size: 1,
                budget: 500.0,
            },
        ])
        .unwrap()
    }

    fn student(id: u32, school: &str, math: f64, reading: f64) -> Student {
        Student {
            student_id: id,
            student_name: format!("Student {id}"),
            gender: None,
            grade: GradeLevel::Eleventh,
            school_name: school.to_string(),
            reading_score: reading,
            math_score: math,
        }
    }

    #[test]
    fn test_two_school_district() {
        let schools = schools();
        let students = vec![
            student(0, "A", 80.0, 75.0),
            student(1, "A", 60.0, 65.0),
            student(2, "B", 70.0, 70.0),
        ];
        let combined = join(&schools, &students).unwrap();

        let d = summarize_district(&schools, &combined).unwrap();

        assert_eq!(d.total_schools, 2);
        assert_eq!(d.total_students, 3);
        assert_eq!(d.total_budget, 1500.0);
        assert_eq!(d.avg_math, 70.0);
        assert!((d.pct_passing_math - 200.0 / 3.0).abs() < 1e-9);
        assert!((d.pct_passing_reading - 200.0 / 3.0).abs() < 1e-9);
        assert!((d.pct_overall_passing - 200.0 / 3.0).abs() < 1e-9);
        assert!(d.pct_overall_passing <= d.pct_passing_math.min(d.pct_passing_reading));
    }

    #[test]
    fn test_unattended_school_still_counted() {
        let schools = schools();
        let students = vec![student(0, "A", 80.0, 75.0), student(1, "A", 60.0, 65.0)];
        let combined = join(&schools, &students).unwrap();

        let d = summarize_district(&schools, &combined).unwrap();

        assert_eq!(d.total_schools, 2);
        assert_eq!(d.total_students, 2);
        assert_eq!(d.total_budget, 1500.0);
    }

    #[test]
    fn test_empty_district_is_fatal() {
        let schools = schools();
        let err = summarize_district(&schools, &[]).unwrap_err();
        assert!(matches!(err, ReportError::EmptyDenominator { .. }));
    }
}
