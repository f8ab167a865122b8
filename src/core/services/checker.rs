//! Name-check service - screens a batch of names and builds the report
//!
//! Each name is matched independently; the report is pruned only after
//! every row has been built.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use log::{debug, info};

use super::matcher::Matcher;
use crate::core::error::{Result, ScreenError};
use crate::core::models::{AvoidCollection, Category, IgnoreList, NAME_COLUMN, ResultTable};

/// Runs check batches with a configured matcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameChecker {
    matcher: Matcher,
}

/// Hits of one name, grouped by category in avoid order
type NameHits = BTreeMap<Category, Vec<String>>;

impl NameChecker {
    /// Create a checker around a matcher
    #[must_use]
    pub const fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    /// Screen `names` against the enabled categories of `avoids`
    ///
    /// The table has a Name column and one column per enabled category that
    /// produced at least one hit. Names without hits are dropped. When
    /// nothing matched at all, [`ResultTable::no_conflicts`] is returned.
    ///
    /// # Errors
    ///
    /// Returns a user input error if there are no names or no enabled
    /// categories.
    pub fn check_names<S: AsRef<str>>(
        &self,
        names: &[S],
        ignore: &IgnoreList,
        avoids: &AvoidCollection,
        enabled: &[Category],
    ) -> Result<ResultTable> {
        let names: Vec<&str> =
            names.iter().map(|n| n.as_ref().trim()).filter(|n| !n.is_empty()).collect();
        if names.is_empty() {
            return Err(ScreenError::user_input(
                "No names entered. Enter at least one name to check.",
            ));
        }

        let categories: Vec<Category> =
            enabled.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        if categories.is_empty() {
            return Err(ScreenError::user_input(
                "No avoid categories selected. Select at least one category to check against.",
            ));
        }

        let started = Instant::now();
        info!("Started | checking {} name(s) against {} categories", names.len(), categories.len());

        let filtered = avoids.filter_by_category(&categories);
        debug!("{} of {} avoids in enabled categories", filtered.len(), avoids.len());

        let per_name: Vec<(&str, NameHits)> =
            names.iter().map(|&name| (name, self.check_name(name, &filtered, ignore))).collect();

        let table = build_table(&per_name, &categories);

        info!(
            "Finished | {} name(s) with conflicts after {}ms",
            if table.is_no_conflicts() { 0 } else { table.rows.len() },
            started.elapsed().as_millis()
        );
        Ok(table)
    }

    fn check_name(&self, name: &str, avoids: &AvoidCollection, ignore: &IgnoreList) -> NameHits {
        let mut grouped = NameHits::new();
        for hit in self.matcher.hits(name, avoids, ignore) {
            grouped.entry(hit.category).or_default().push(hit.annotation);
        }
        grouped
    }
}

/// Pivot grouped hits into a table, pruning empty columns and rows
fn build_table(per_name: &[(&str, NameHits)], categories: &[Category]) -> ResultTable {
    let kept: Vec<Category> = categories
        .iter()
        .copied()
        .filter(|c| per_name.iter().any(|(_, hits)| hits.contains_key(c)))
        .collect();

    let rows: Vec<Vec<String>> = per_name
        .iter()
        .filter(|(_, hits)| kept.iter().any(|c| hits.contains_key(c)))
        .map(|(name, hits)| {
            let mut row = vec![(*name).to_string()];
            row.extend(kept.iter().map(|c| hits.get(c).map(|a| a.join("\n")).unwrap_or_default()));
            row
        })
        .collect();

    if rows.is_empty() {
        return ResultTable::no_conflicts();
    }

    let mut columns = vec![NAME_COLUMN.to_string()];
    columns.extend(kept.iter().map(|c| c.label().to_string()));
    ResultTable { columns, rows }
}
