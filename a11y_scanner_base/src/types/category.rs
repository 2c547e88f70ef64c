//! Result categories and their string form on the keyword surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four partitions of evaluated rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Violations,
    Incomplete,
    Passes,
    Inapplicable,
}

impl RuleCategory {
    /// All categories, in reporting order
    pub const ALL: [RuleCategory; 4] = [
        RuleCategory::Violations,
        RuleCategory::Incomplete,
        RuleCategory::Passes,
        RuleCategory::Inapplicable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Violations => "violations",
            RuleCategory::Incomplete => "incomplete",
            RuleCategory::Passes => "passes",
            RuleCategory::Inapplicable => "inapplicable",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleCategory {
    type Err = UnsupportedCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "violations" => Ok(RuleCategory::Violations),
            "incomplete" => Ok(RuleCategory::Incomplete),
            "passes" => Ok(RuleCategory::Passes),
            "inapplicable" => Ok(RuleCategory::Inapplicable),
            other => Err(UnsupportedCategory {
                requested: other.to_string(),
            }),
        }
    }
}

/// Requested category is not one of the four supported partitions
#[derive(Debug, Clone, thiserror::Error)]
#[error(
    "Unsupported result category '{requested}'. Supported categories: \
     [violations, incomplete, passes, inapplicable]"
)]
pub struct UnsupportedCategory {
    pub requested: String,
}
