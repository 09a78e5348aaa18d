//! Error taxonomy for a reporting pass.
//!
//! Every variant is fatal: the run stops at the first one and no partial
//! report is produced.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// Unreadable file, missing column or a value that does not parse.
    #[error("malformed input in {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    #[error("student {student_id} references unknown school `{school_name}`")]
    UnknownSchool { student_id: u32, school_name: String },

    #[error("{scope} has no {denominator}; rates are undefined")]
    EmptyDenominator {
        scope: String,
        denominator: &'static str,
    },
}

pub type Result<T> = core::result::Result<T, ReportError>;
