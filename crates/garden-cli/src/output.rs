//! Output management and formatting.

use std::io::{self, IsTerminal};

use chrono::{DateTime, Utc};
use console::{Alignment, Term, measure_text_width, pad_str};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Display format for dates, e.g. `Apr 20, 2025`.
const DATE_FORMAT: &str = "%b %-d, %Y";

const COLUMN_GAP: &str = "  ";

/// `Apr 20, 2025`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Human label for the publication flag.
pub fn status_label(is_published: bool) -> &'static str {
    if is_published { "Published" } else { "Draft" }
}

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        let no_color =
            args.no_color || config.output.no_color || resolved_format != OutputFormat::Human;

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable output; never suppressed.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Raw data line (list/CSV rows); never suppressed.
    pub fn data(&self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `  Label      value` with labels padded to `width`.
    pub fn field(&self, label: &str, value: &str, width: usize) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let padded = pad_str(label, width, Alignment::Left, None);
        let label = if self.no_color {
            padded.into_owned()
        } else {
            padded.dimmed().to_string()
        };
        self.term.write_line(&format!("  {label}{COLUMN_GAP}{value}"))
    }

    /// Left-aligned table; column widths follow the widest cell.
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        for line in render_table(headers, rows) {
            let line = match line {
                TableLine::Header(text) if !self.no_color => text.bold().to_string(),
                TableLine::Header(text) | TableLine::Row(text) => text,
            };
            self.term.write_line(line.trim_end())?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── table rendering ───────────────────────────────────────────────────────────

enum TableLine {
    Header(String),
    Row(String),
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<TableLine> {
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(TableLine::Header(join_cells(headers.iter().copied(), &widths)));
    for row in rows {
        lines.push(TableLine::Row(join_cells(row.iter().map(String::as_str), &widths)));
    }
    lines
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &w)| pad_str(cell, w, Alignment::Left, None).into_owned())
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

/// Quote a CSV field when it contains a separator, quote or newline.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;
    use chrono::TimeZone;

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn text(lines: Vec<TableLine>) -> Vec<String> {
        lines
            .into_iter()
            .map(|l| match l {
                TableLine::Header(t) | TableLine::Row(t) => t.trim_end().to_owned(),
            })
            .collect()
    }

    #[test]
    fn dates_use_short_month() {
        let at = Utc.with_ymd_and_hms(2025, 4, 20, 14, 20, 0).unwrap();
        assert_eq!(format_date(&at), "Apr 20, 2025");
        let at = Utc.with_ymd_and_hms(2025, 4, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&at), "Apr 5, 2025");
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(true), "Published");
        assert_eq!(status_label(false), "Draft");
    }

    #[test]
    fn table_pads_by_display_width() {
        let rows = vec![
            vec!["1".to_string(), "Grün".to_string()],
            vec!["10".to_string(), "Blog".to_string()],
        ];
        let lines = text(render_table(&["ID", "NAME"], &rows));
        assert_eq!(lines, ["ID  NAME", "1   Grün", "10  Blog"]);
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(csv_field("Tech Blog"), "Tech Blog");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn plain_format_disables_color() {
        let out = make_manager(false, OutputFormat::Plain);
        assert!(out.no_color);
        assert_eq!(out.resolved_format, OutputFormat::Plain);
    }

    #[test]
    fn json_format_is_detected() {
        let out = make_manager(false, OutputFormat::Json);
        assert!(out.is_json());
        assert!(out.no_color);
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }
}
