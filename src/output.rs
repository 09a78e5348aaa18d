//! Presentation of a [`DistrictReport`]: ASCII tables and JSON export.
//!
//! Numbers are formatted here and nowhere else; the report itself only
//! carries raw values.

use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tabled::{Table, Tabled};
use tracing::info;

use crate::analyzers::report::DistrictReport;
use crate::analyzers::types::{BucketSummary, DistrictSummary, GradeScores, SchoolSummary};
use crate::records::GradeLevel;

/// A single view of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    District,
    Schools,
    Top,
    Bottom,
    MathByGrade,
    ReadingByGrade,
    Spending,
    Size,
    Type,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::District,
        Section::Schools,
        Section::Top,
        Section::Bottom,
        Section::MathByGrade,
        Section::ReadingByGrade,
        Section::Spending,
        Section::Size,
        Section::Type,
    ];
}

#[derive(Tabled)]
struct DistrictRow {
    #[tabled(rename = "Total Schools")]
    total_schools: String,
    #[tabled(rename = "Total Students")]
    total_students: String,
    #[tabled(rename = "Total Budget")]
    total_budget: String,
    #[tabled(rename = "Average Math Score")]
    avg_math: String,
    #[tabled(rename = "Average Reading Score")]
    avg_reading: String,
    #[tabled(rename = "% Passing Math")]
    pct_passing_math: String,
    #[tabled(rename = "% Passing Reading")]
    pct_passing_reading: String,
    #[tabled(rename = "% Overall Passing")]
    pct_overall_passing: String,
}

#[derive(Tabled)]
struct SchoolRow {
    #[tabled(rename = "School")]
    name: String,
    #[tabled(rename = "School Type")]
    school_type: String,
    #[tabled(rename = "Total Students")]
    total_students: String,
    #[tabled(rename = "Total School Budget")]
    total_budget: String,
    #[tabled(rename = "Per Student Budget")]
    per_student_budget: String,
    #[tabled(rename = "Average Math Score")]
    avg_math: String,
    #[tabled(rename = "Average Reading Score")]
    avg_reading: String,
    #[tabled(rename = "% Passing Math")]
    pct_passing_math: String,
    #[tabled(rename = "% Passing Reading")]
    pct_passing_reading: String,
    #[tabled(rename = "% Overall Passing")]
    pct_overall_passing: String,
}

#[derive(Tabled)]
struct GradeRow {
    #[tabled(rename = "School")]
    name: String,
    #[tabled(rename = "9th")]
    ninth: String,
    #[tabled(rename = "10th")]
    tenth: String,
    #[tabled(rename = "11th")]
    eleventh: String,
    #[tabled(rename = "12th")]
    twelfth: String,
}

#[derive(Tabled)]
struct BucketRow {
    #[tabled(rename = "Range")]
    label: String,
    #[tabled(rename = "Schools")]
    schools: usize,
    #[tabled(rename = "Average Math Score")]
    avg_math: String,
    #[tabled(rename = "Average Reading Score")]
    avg_reading: String,
    #[tabled(rename = "% Passing Math")]
    pct_passing_math: String,
    #[tabled(rename = "% Passing Reading")]
    pct_passing_reading: String,
    #[tabled(rename = "% Overall Passing")]
    pct_overall_passing: String,
}

/// Inserts `,` between groups of three digits.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Dollar amount rounded to cents, e.g. `$24,649,428.00`.
pub fn currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", thousands(cents / 100), cents % 100)
}

pub fn fixed(value: f64) -> String {
    format!("{value:.2}")
}

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn titled(title: &str, table: String) -> String {
    format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
}

pub fn render_district(d: &DistrictSummary) -> String {
    let row = DistrictRow {
        total_schools: thousands(d.total_schools as u64),
        total_students: thousands(d.total_students as u64),
        total_budget: currency(d.total_budget),
        avg_math: fixed(d.avg_math),
        avg_reading: fixed(d.avg_reading),
        pct_passing_math: percent(d.pct_passing_math),
        pct_passing_reading: percent(d.pct_passing_reading),
        pct_overall_passing: percent(d.pct_overall_passing),
    };
    titled("District Summary", Table::new([row]).to_string())
}

pub fn render_schools(title: &str, schools: &[SchoolSummary]) -> String {
    if schools.is_empty() {
        return titled(title, "No data available".to_string());
    }

    let rows = schools.iter().map(|s| SchoolRow {
        name: s.school_name.clone(),
        school_type: s.school_type.to_string(),
        total_students: thousands(s.total_students as u64),
        total_budget: currency(s.total_budget),
        per_student_budget: currency(s.per_student_budget),
        avg_math: fixed(s.avg_math),
        avg_reading: fixed(s.avg_reading),
        pct_passing_math: percent(s.pct_passing_math),
        pct_passing_reading: percent(s.pct_passing_reading),
        pct_overall_passing: percent(s.pct_overall_passing),
    });
    titled(title, Table::new(rows).to_string())
}

pub fn render_grades(title: &str, scores: &[GradeScores]) -> String {
    if scores.is_empty() {
        return titled(title, "No data available".to_string());
    }

    let cell = |s: &GradeScores, grade| s.score(grade).map(fixed).unwrap_or_else(|| "-".to_string());
    let rows = scores.iter().map(|s| GradeRow {
        name: s.school_name.clone(),
        ninth: cell(s, GradeLevel::Ninth),
        tenth: cell(s, GradeLevel::Tenth),
        eleventh: cell(s, GradeLevel::Eleventh),
        twelfth: cell(s, GradeLevel::Twelfth),
    });
    titled(title, Table::new(rows).to_string())
}

pub fn render_buckets(title: &str, buckets: &[BucketSummary]) -> String {
    if buckets.is_empty() {
        return titled(title, "No data available".to_string());
    }

    let rows = buckets.iter().map(|b| BucketRow {
        label: b.label.clone(),
        schools: b.schools,
        avg_math: fixed(b.avg_math),
        avg_reading: fixed(b.avg_reading),
        pct_passing_math: percent(b.pct_passing_math),
        pct_passing_reading: percent(b.pct_passing_reading),
        pct_overall_passing: percent(b.pct_overall_passing),
    });
    titled(title, Table::new(rows).to_string())
}

pub fn render_section(report: &DistrictReport, section: Section) -> String {
    match section {
        Section::District => render_district(&report.district),
        Section::Schools => render_schools("School Summary", report.schools.rows()),
        Section::Top => render_schools("Top Performing Schools (By % Overall Passing)", &report.top_schools),
        Section::Bottom => render_schools(
            "Bottom Performing Schools (By % Overall Passing)",
            &report.bottom_schools,
        ),
        Section::MathByGrade => render_grades("Math Scores by Grade", report.math_by_grade.rows()),
        Section::ReadingByGrade => render_grades("Reading Scores by Grade", report.reading_by_grade.rows()),
        Section::Spending => render_buckets("Scores by School Spending (Per Student)", &report.by_spending),
        Section::Size => render_buckets("Scores by School Size", &report.by_size),
        Section::Type => render_buckets("Scores by School Type", &report.by_type),
    }
}

/// Renders the requested sections, or all of them, separated by blank lines.
pub fn render_report(report: &DistrictReport, sections: &[Section]) -> String {
    let sections = if sections.is_empty() { &Section::ALL[..] } else { sections };
    sections
        .iter()
        .map(|&s| render_section(report, s))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Writes the report as pretty-printed JSON, replacing any existing file.
pub fn write_json(path: &Path, report: &DistrictReport) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    info!(path = %path.display(), "Report written");
    Ok(())
}
