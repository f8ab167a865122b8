//! Result table
//!
//! The report produced by a check run: a Name column followed by one
//! column per category that produced at least one hit.

use serde::{Deserialize, Serialize};

use super::NameCase;

/// Heading of the first column
pub const NAME_COLUMN: &str = "Name";

/// Heading of the single column of the no-conflict table
pub const RESULT_COLUMN: &str = "Result";

/// Marker shown when a run produced no hits at all
pub const NO_CONFLICTS: &str = "No Conflicts!";

/// Tabular check-run report
///
/// Every row has exactly `columns.len()` cells. Cells hold newline-joined
/// hit annotations, or the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Column headings, `Name` first
    pub columns: Vec<String>,
    /// Rows of cells, name first
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// The single-cell table reporting that nothing matched
    #[must_use]
    pub fn no_conflicts() -> Self {
        Self {
            columns: vec![RESULT_COLUMN.to_string()],
            rows: vec![vec![NO_CONFLICTS.to_string()]],
        }
    }

    /// Whether this is the no-conflict marker table
    #[must_use]
    pub fn is_no_conflicts(&self) -> bool {
        self.columns.len() == 1
            && self.columns[0] == RESULT_COLUMN
            && self.rows.len() == 1
            && self.rows[0].first().map(String::as_str) == Some(NO_CONFLICTS)
    }

    /// Index of a column by heading
    #[must_use]
    pub fn column_index(&self, heading: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == heading)
    }

    /// Cell for a name under a column heading
    #[must_use]
    pub fn cell(&self, name: &str, heading: &str) -> Option<&str> {
        let col = self.column_index(heading)?;
        self.rows
            .iter()
            .find(|row| row.first().is_some_and(|n| n == name))
            .and_then(|row| row.get(col))
            .map(String::as_str)
    }

    /// Names of the rows, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(|row| row.first().map(String::as_str))
    }

    /// Re-case the Name column for display
    #[must_use]
    pub fn with_name_case(mut self, case: NameCase) -> Self {
        if self.is_no_conflicts() {
            return self;
        }
        for row in &mut self.rows {
            if let Some(name) = row.first_mut() {
                *name = case.apply(name);
            }
        }
        self
    }
}
