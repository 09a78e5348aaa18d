use tracing::debug;

use crate::analyzers::types::CombinedRecord;
use crate::error::{ReportError, Result};
use crate::records::{School, Student};
use crate::table::Table;

/// Pairs every student with the school named by its `school_name`.
///
/// Output keeps the order of `students`. A student naming a school that is
/// not in `schools` fails the whole join with [`ReportError::UnknownSchool`].
pub fn join<'a>(
    schools: &'a Table<School>,
    students: &'a [Student],
) -> Result<Vec<CombinedRecord<'a>>> {
    let combined = students
        .iter()
        .map(|student| {
            let school = schools.get(&student.school_name).ok_or_else(|| {
                ReportError::UnknownSchool {
                    student_id: student.student_id,
                    school_name: student.school_name.clone(),
                }
            })?;
            Ok(CombinedRecord { student, school })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(rows = combined.len(), "Students joined to schools");
    Ok(combined)
}
