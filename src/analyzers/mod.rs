//! School performance aggregation.
//!
//! Students are joined to their schools, then summarized district-wide,
//! per school, per grade, and per bucket of spending, size and school type.
//! Every step takes its input by reference and returns new tables.

pub mod buckets;
pub mod district;
pub mod grade_level;
pub mod join;
pub mod report;
pub mod school;
pub mod types;
pub mod utility;
