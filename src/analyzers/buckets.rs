//! Groups school summaries into named buckets and averages each bucket.
//!
//! Bins are tested in order and the first match wins. Each bin includes its
//! lower bound and excludes its upper bound unless `upper_inclusive` is set.
//! A school outside every bin belongs to no bucket.

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::analyzers::types::{BucketSummary, SchoolSummary};
use crate::analyzers::utility::mean;
use crate::records::SchoolType;
use crate::table::Table;

/// A labelled numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub label: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub upper_inclusive: bool,
}

impl Bin {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && (value < self.upper || (self.upper_inclusive && value == self.upper))
    }
}

/// Per-student budget ranges.
pub static SPENDING_BINS: &[Bin] = &[
    Bin { label: "<$584", lower: 0.0, upper: 585.0, upper_inclusive: false },
    Bin { label: "$585-629", lower: 585.0, upper: 630.0, upper_inclusive: false },
    Bin { label: "$630-644", lower: 630.0, upper: 645.0, upper_inclusive: false },
    Bin { label: "$645-675", lower: 645.0, upper: 675.0, upper_inclusive: true },
];

/// Enrollment ranges.
pub static SIZE_BINS: &[Bin] = &[
    Bin { label: "Small(<1000)", lower: 0.0, upper: 1000.0, upper_inclusive: false },
    Bin { label: "Medium (1000-2000)", lower: 1000.0, upper: 2000.0, upper_inclusive: false },
    Bin { label: "Large(2000-5000)", lower: 2000.0, upper: 5000.0, upper_inclusive: false },
];

/// Returns the first bin containing `value`.
pub fn assign(bins: &[Bin], value: f64) -> Option<&Bin> {
    bins.iter().find(|b| b.contains(value))
}

pub fn summarize_by_spending(summary: &Table<SchoolSummary>) -> Vec<BucketSummary> {
    summarize_binned(summary, SPENDING_BINS, "per_student_budget", |s| s.per_student_budget)
}

pub fn summarize_by_size(summary: &Table<SchoolSummary>) -> Vec<BucketSummary> {
    summarize_binned(summary, SIZE_BINS, "size", |s| s.total_students as f64)
}

/// One bucket per school type present, ordered by type.
pub fn summarize_by_type(summary: &Table<SchoolSummary>) -> Vec<BucketSummary> {
    let mut groups: BTreeMap<SchoolType, Vec<&SchoolSummary>> = BTreeMap::new();
    for school in summary.iter() {
        groups.entry(school.school_type).or_default().push(school);
    }

    groups
        .into_iter()
        .filter_map(|(school_type, members)| average_bucket(&school_type.to_string(), &members))
        .collect()
}

fn summarize_binned(
    summary: &Table<SchoolSummary>,
    bins: &[Bin],
    dimension: &str,
    metric: impl Fn(&SchoolSummary) -> f64,
) -> Vec<BucketSummary> {
    let mut members: Vec<Vec<&SchoolSummary>> = vec![Vec::new(); bins.len()];

    for school in summary.iter() {
        let value = metric(school);
        match bins.iter().position(|b| b.contains(value)) {
            Some(i) => members[i].push(school),
            None => warn!(
                school = %school.school_name,
                dimension,
                value,
                "Value outside every bin, school left out of bucketing"
            ),
        }
    }

    bins.iter()
        .zip(members)
        .filter_map(|(bin, schools)| {
            let bucket = average_bucket(bin.label, &schools);
            if bucket.is_none() {
                debug!(dimension, bin = bin.label, "Empty bucket omitted");
            }
            bucket
        })
        .collect()
}

/// Averages per-school figures across `members`; `None` when there are no members.
fn average_bucket(label: &str, members: &[&SchoolSummary]) -> Option<BucketSummary> {
    let column = |f: fn(&SchoolSummary) -> f64| mean(&members.iter().map(|&s| f(s)).collect::<Vec<_>>());

    Some(BucketSummary {
        label: label.to_string(),
        schools: members.len(),
        avg_math: column(|s| s.avg_math)?,
        avg_reading: column(|s| s.avg_reading)?,
        pct_passing_math: column(|s| s.pct_passing_math)?,
        pct_passing_reading: column(|s| s.pct_passing_reading)?,
        pct_overall_passing: column(|s| s.pct_overall_passing)?,
    })
}
