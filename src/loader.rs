//! CSV loading for the school and student files.
//!
//! Both files carry a header row; columns are matched by name so their order
//! does not matter. Any row that fails to deserialize aborts the load.

use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::records::{School, Student};
use crate::table::Table;

/// Loads the schools file into a table keyed by school name.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_schools(path: &Path) -> Result<Table<School>> {
    let rows = read_rows(path)?;
    info!(rows = rows.len(), "Schools loaded");
    Table::new(rows)
}

/// Loads the students file in file order.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_students(path: &Path) -> Result<Vec<Student>> {
    let rows = read_rows(path)?;
    info!(rows = rows.len(), "Students loaded");
    Ok(rows)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let origin = path.display().to_string();
    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| ReportError::Csv {
            origin: origin.clone(),
            source,
        })?;
    collect_rows(rdr, &origin)
}

/// Deserializes every record from an in-memory or streamed CSV source.
///
/// `origin` names the source in error messages.
pub fn read_rows_from<T: DeserializeOwned, R: Read>(reader: R, origin: &str) -> Result<Vec<T>> {
    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    collect_rows(rdr, origin)
}

fn collect_rows<T: DeserializeOwned, R: Read>(mut rdr: csv::Reader<R>, origin: &str) -> Result<Vec<T>> {
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: T = result.map_err(|source| ReportError::Csv {
            origin: origin.to_string(),
            source,
        })?;
        rows.push(record);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{GradeLevel, SchoolType};

    const SCHOOLS: &str = "\
School ID,school_name,type,size,budget
0,Huang High School,District,2917,1910635
1,Figueroa High School, District ,2949,1884411
";

    const STUDENTS: &str = "\
Student ID,student_name,gender,grade,school_name,reading_score,math_score
0,Paul Bradley,M,9th,Huang High School,66,79
1,Victor Smith,M,12th,Huang High School,94,61
";

    #[test]
    fn test_reads_schools_by_header_name() {
        let rows: Vec<School> = read_rows_from(SCHOOLS.as_bytes(), "schools").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].school_name, "Huang High School");
        assert_eq!(rows[0].school_type, SchoolType::District);
        assert_eq!(rows[1].school_type, SchoolType::District);
        assert_eq!(rows[1].size, 2949);
        assert_eq!(rows[1].budget, 1884411.0);
    }

    #[test]
    fn test_reads_students() {
        let rows: Vec<Student> = read_rows_from(STUDENTS.as_bytes(), "students").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].grade, GradeLevel::Twelfth);
        assert_eq!(rows[1].gender.as_deref(), Some("M"));
        assert_eq!(rows[1].math_score, 61.0);
    }

    #[test]
    fn test_gender_column_is_optional() {
        let csv = "Student ID,student_name,grade,school_name,reading_score,math_score\n\
                   3,Amy Lee,10th,Huang High School,80,90\n";
        let rows: Vec<Student> = read_rows_from(csv.as_bytes(), "students").unwrap();
        assert_eq!(rows[0].gender, None);
    }

    #[test]
    fn test_non_numeric_score_is_fatal() {
        let csv = "Student ID,student_name,grade,school_name,reading_score,math_score\n\
                   3,Amy Lee,10th,Huang High School,eighty,90\n";
        let err = read_rows_from::<Student, _>(csv.as_bytes(), "students").unwrap_err();
        assert!(matches!(err, ReportError::Csv { ref origin, .. } if origin == "students"));
    }

    #[test]
    fn test_non_finite_score_is_fatal() {
        for value in ["NaN", "inf", "-infinity"] {
            let csv = format!(
                "Student ID,student_name,grade,school_name,reading_score,math_score\n\
                 3,Amy Lee,10th,Huang High School,80,{value}\n"
            );
            let err = read_rows_from::<Student, _>(csv.as_bytes(), "students").unwrap_err();
            assert!(matches!(err, ReportError::Csv { .. }), "{value} accepted");
        }
    }

    #[test]
    fn test_non_finite_budget_is_fatal() {
        let csv = "School ID,school_name,type,size,budget\n0,Huang High School,District,2917,inf\n";
        assert!(read_rows_from::<School, _>(csv.as_bytes(), "schools").is_err());
    }

    #[test]
    fn test_unknown_grade_is_fatal() {
        let csv = "Student ID,student_name,grade,school_name,reading_score,math_score\n\
                   3,Amy Lee,8th,Huang High School,80,90\n";
        assert!(read_rows_from::<Student, _>(csv.as_bytes(), "students").is_err());
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "School ID,school_name,type,size\n0,Huang High School,District,2917\n";
        assert!(read_rows_from::<School, _>(csv.as_bytes(), "schools").is_err());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_schools(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, ReportError::Csv { .. }));
    }
}
