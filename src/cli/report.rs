//! Console output for CLI commands.
//!
//! The CSV file is the real report; this is the human-readable digest printed
//! to stdout. Separate from core logic to allow lidcheck to be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ReportRow;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of flagged rows shown on the console.
const MAX_ROWS_DISPLAY: usize = 10;

/// Maximum display width of the text column.
const MAX_TEXT_WIDTH: usize = 48;

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check_to(summary, &mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print the outcome of `check` to a custom writer.
pub fn print_check_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let audit = &summary.audit;
    let units = audit.units_checked;

    if audit.rows.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - all in {}",
                units,
                plural(units, "string", "strings"),
                summary.expected_language
            )
            .green()
        );
    } else {
        print_rows(&audit.rows, writer);
        let _ = writeln!(
            writer,
            "\n{} {} of {} {} not detected as {}",
            FAILURE_MARK.red(),
            audit.rows.len().to_string().red().bold(),
            units,
            plural(units, "string", "strings"),
            summary.expected_language
        );
    }

    let _ = writeln!(
        writer,
        "Report written to {}",
        audit.output_path.display().to_string().cyan()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_rows<W: Write>(rows: &[ReportRow], writer: &mut W) {
    let shown = &rows[..rows.len().min(MAX_ROWS_DISPLAY)];

    let language_width = column_width(shown.iter().map(|r| r.language_name.as_str()));
    let name_width = column_width(shown.iter().map(|r| r.identifier.as_str()));

    for row in shown {
        let confidence = format!("{:>7}", row.confidence.to_string());
        let language = pad(&row.language_name, language_width);
        let name = pad(&row.identifier, name_width);
        let _ = writeln!(
            writer,
            "{}  {}  {}  {}",
            confidence.yellow(),
            language.bold(),
            name.cyan(),
            truncate(&row.text, MAX_TEXT_WIDTH).dimmed()
        );
    }

    let remaining = rows.len() - shown.len();
    if remaining > 0 {
        let _ = writeln!(
            writer,
            "{}",
            format!("... and {} more (see the CSV report)", remaining).dimmed()
        );
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Right-pad `s` with spaces to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Cut `s` to at most `max_width` display columns, marking the cut with `…`.
fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('\u{2026}');
    out
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
