//! Avoid categories
//!
//! Provenance grouping of avoids. Categories drive filtering and report
//! columns only; they never change how a name is matched.

use serde::{Deserialize, Serialize};

/// Where an avoid came from
///
/// The derived ordering is the report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// INN / USAN regulatory stems
    InnUsan,
    /// Linguistic conflicts
    Linguistic,
    /// Market research hits
    MarketResearch,
    /// Project-specific avoids entered by the user
    Project,
    /// Competitor names entered by the user
    Competitor,
}

impl Category {
    /// All categories in report column order
    pub const ALL: [Self; 5] = [
        Self::InnUsan,
        Self::Linguistic,
        Self::MarketResearch,
        Self::Project,
        Self::Competitor,
    ];

    /// Categories supplied by the curated master source
    pub const CURATED: [Self; 3] = [Self::InnUsan, Self::Linguistic, Self::MarketResearch];

    /// Column heading shown in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InnUsan => "INN - USAN",
            Self::Linguistic => "Linguistic",
            Self::MarketResearch => "Market Research",
            Self::Project => "Project",
            Self::Competitor => "Competitor",
        }
    }

    /// Snake-case key used in data files and on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InnUsan => "inn_usan",
            Self::Linguistic => "linguistic",
            Self::MarketResearch => "market_research",
            Self::Project => "project",
            Self::Competitor => "competitor",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|c| {
                c.key() == wanted || c.label().to_lowercase().replace(['-', ' '], "_") == wanted
            })
            .ok_or_else(|| {
                format!(
                    "Invalid category: {s}. Use: inn_usan, linguistic, market_research, project, competitor"
                )
            })
    }
}
