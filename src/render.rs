#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    constants::{CGPA_PRECISION, GRADE_SCALE},
    ledger::Subject,
};

#[derive(Tabled)]
/// One row of the recorded-subjects table
struct SubjectRow {
    #[tabled(rename = "#")]
    /// * `index`: 1-based position in insertion order
    index:   usize,
    #[tabled(rename = "Subject")]
    /// * `name`: the subject name as entered
    name:    String,
    #[tabled(rename = "Grade")]
    /// * `grade`: the letter-grade symbol
    grade:   String,
    #[tabled(rename = "Credits")]
    /// * `credits`: credit hours
    credits: u32,
}

#[derive(Tabled)]
/// One row of the grade-scale table
struct ScaleRow {
    #[tabled(rename = "Grade")]
    /// * `grade`: the letter-grade symbol
    grade:  &'static str,
    #[tabled(rename = "Points")]
    /// * `points`: point value per credit hour
    points: u32,
}

/// Renders the recorded subjects as a numbered table, with a footer totaling
/// entries and credits.
pub fn subject_table(subjects: &[Subject]) -> String {
    let total_credits: u32 = subjects.iter().map(|s| s.credits).sum();
    let rows = subjects.iter().enumerate().map(|(i, s)| SubjectRow {
        index:   i + 1,
        name:    s.name.clone(),
        grade:   s.grade.to_string(),
        credits: s.credits,
    });

    Table::new(rows)
        .with(Panel::header("Recorded Subjects"))
        .with(Panel::footer(format!(
            "{} subject(s), {total_credits} credit(s)",
            subjects.len()
        )))
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Rows::last()).with(Alignment::center()))
        .with(Style::modern())
        .to_string()
}

/// Renders the fixed grade scale as a table.
pub fn scale_table() -> String {
    let rows = GRADE_SCALE.iter().map(|&(grade, points)| ScaleRow { grade, points });

    Table::new(rows)
        .with(Panel::header("Grade Scale"))
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Style::modern())
        .to_string()
}

/// Formats a computed CGPA to two decimals, colored for the terminal.
pub fn cgpa_line(cgpa: f64) -> String {
    let prec = CGPA_PRECISION;
    format!("CGPA: {}", format!("{cgpa:.prec$}").green().bold())
}

/// Formats a recoverable error for the terminal.
pub fn error_line(err: &impl Display) -> String {
    format!("{} {err}", "error:".red().bold())
}
