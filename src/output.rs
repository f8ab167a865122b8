//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{AvoidRecord, ResultTable};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a check run
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// When the report was produced (RFC 3339)
    pub generated_at: String,
    /// Number of names screened
    pub names_checked: usize,
    /// Whether no name hit any avoid
    pub clear: bool,
    /// The report table
    pub table: ResultTable,
}

impl CheckReport {
    /// Wrap a result table
    #[must_use]
    pub fn new(table: ResultTable, names_checked: usize) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            names_checked,
            clear: table.is_no_conflicts(),
            table,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.format_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering: one block per name, one line per hit
    #[must_use]
    pub fn format_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Checked {} name(s).\n", self.names_checked);

        if self.clear {
            let _ = writeln!(out, "{}", self.table.rows[0][0].green());
            return out;
        }

        let width = self.table.columns.iter().skip(1).map(String::len).max().unwrap_or(0);
        for row in &self.table.rows {
            let _ = writeln!(out, "{}", row[0].bold());
            for (heading, cell) in self.table.columns.iter().zip(row).skip(1) {
                for (i, line) in cell.lines().enumerate() {
                    let label = if i == 0 { heading.as_str() } else { "" };
                    let _ = writeln!(out, "  {label:<width$}  {}", line.yellow());
                }
            }
            out.push('\n');
        }
        let _ = writeln!(out, "{} name(s) with conflicts", self.table.rows.len());
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of listing avoids
#[derive(Debug, Serialize)]
pub struct AvoidListResult {
    /// Whether curated avoids were available
    pub master_loaded: bool,
    /// Matching avoids
    pub avoids: Vec<AvoidRecord>,
}

impl AvoidListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.master_loaded {
            println!("{}", "Master avoid list not found; showing user avoids only.\n".yellow());
        }
        if self.avoids.is_empty() {
            println!("No avoids found.");
            return;
        }

        for a in &self.avoids {
            println!("  [{}] {} ({})", a.category, a.value, a.rule_type);
            if !a.description.is_empty() {
                println!("          {}", a.description);
            }
        }
        println!("\n{} avoid(s)", self.avoids.len());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
