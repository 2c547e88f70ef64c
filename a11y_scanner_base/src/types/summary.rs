//! Numeric summary of a scan result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::result::ScanResult;

/// Per-category rule counts for one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub inapplicable: usize,
    pub incomplete: usize,
    pub passes: usize,
    pub violations: usize,
}

impl Summary {
    /// Compute the summary of a scan result. Pure; does not touch the result.
    pub fn of(result: &ScanResult) -> Self {
        Self {
            inapplicable: result.inapplicable.len(),
            incomplete: result.incomplete.len(),
            passes: result.passes.len(),
            violations: result.violations.len(),
        }
    }

    /// Total number of rules the engine evaluated
    pub fn total(&self) -> usize {
        self.inapplicable + self.incomplete + self.passes + self.violations
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "violations: {}, incomplete: {}, passes: {}, inapplicable: {}",
            self.violations, self.incomplete, self.passes, self.inapplicable
        )
    }
}
