use serde::Serialize;

use crate::records::Student;

/// Running counters over a group of students.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreTally {
    pub students: usize,

    // score sums
    pub math_total: f64,
    pub reading_total: f64,

    // passing counts
    pub passing_math: usize,
    pub passing_reading: usize,
    pub passing_overall: usize,
}

impl ScoreTally {
    pub fn from_students<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        let mut t = ScoreTally::default();
        for s in students {
            t.observe(s);
        }
        t
    }

    pub fn observe(&mut self, s: &Student) {
        self.students += 1;
        self.math_total += s.math_score;
        self.reading_total += s.reading_score;

        if s.passes_math() {
            self.passing_math += 1;
        }

        if s.passes_reading() {
            self.passing_reading += 1;
        }

        if s.passes_overall() {
            self.passing_overall += 1;
        }
    }

    /// `part / total * 100`, or `None` when `total` is zero.
    pub fn pct(part: usize, total: usize) -> Option<f64> {
        if total == 0 {
            None
        } else {
            Some((part as f64 / total as f64) * 100.0)
        }
    }

    pub fn avg_math(&self) -> Option<f64> {
        self.average(self.math_total)
    }

    pub fn avg_reading(&self) -> Option<f64> {
        self.average(self.reading_total)
    }

    fn average(&self, total: f64) -> Option<f64> {
        if self.students == 0 {
            None
        } else {
            Some(total / self.students as f64)
        }
    }

    /// Passing rates against an explicit denominator, as
    /// `(math, reading, overall)` percentages.
    pub fn passing_rates(&self, denominator: usize) -> Option<(f64, f64, f64)> {
        Some((
            Self::pct(self.passing_math, denominator)?,
            Self::pct(self.passing_reading, denominator)?,
            Self::pct(self.passing_overall, denominator)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::GradeLevel;

    fn student(math: f64, reading: f64) -> Student {
        Student {
            student_id: 0,
            student_name: "Test".to_string(),
            gender: None,
            grade: GradeLevel::Tenth,
            school_name: "A".to_string(),
            reading_score: reading,
            math_score: math,
        }
    }

    #[test]
    fn test_pct_with_zero_total() {
        assert_eq!(ScoreTally::pct(10, 0), None);
    }

    #[test]
    fn test_pct_normal_values() {
        assert_eq!(ScoreTally::pct(50, 100), Some(50.0));
        assert_eq!(ScoreTally::pct(1, 4), Some(25.0));
    }

    #[test]
    fn test_empty_tally() {
        let t = ScoreTally::from_students(std::iter::empty());
        assert_eq!(t.students, 0);
        assert_eq!(t.avg_math(), None);
        assert_eq!(t.passing_rates(0), None);
    }

    #[test]
    fn test_counts_and_averages() {
        let students = [student(80.0, 75.0), student(60.0, 65.0), student(70.0, 69.0)];
        let t = ScoreTally::from_students(&students);

        assert_eq!(t.students, 3);
        assert_eq!(t.passing_math, 2);
        assert_eq!(t.passing_reading, 1);
        assert_eq!(t.passing_overall, 1);
        assert_eq!(t.avg_math(), Some(70.0));
        assert!((t.avg_reading().unwrap() - 209.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_never_exceeds_either_subject() {
        let students = [student(90.0, 10.0), student(10.0, 90.0), student(90.0, 90.0)];
        let t = ScoreTally::from_students(&students);
        assert!(t.passing_overall <= t.passing_math.min(t.passing_reading));
    }
}
