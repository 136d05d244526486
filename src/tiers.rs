//! Percentile-to-letter grade tiers.
//!
//! A tier's threshold is the upper bound of its band: a percentile grade maps
//! to the tier with the smallest threshold that is still at or above it.
//!
//! | Threshold | Grade |
//! |-----------|-------|
//! | 59        | F     |
//! | 62        | D-    |
//! | 65        | D     |
//! | 69        | D+    |
//! | 72        | C-    |
//! | 75        | C     |
//! | 79        | C+    |
//! | 82        | B-    |
//! | 85        | B     |
//! | 89        | B+    |
//! | 92        | A-    |
//! | 100       | A     |

use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use tracing::debug;

use crate::error::{GradeError, Result};

static STANDARD_TIERS: &[(f64, &str)] = &[
    (59.0, "F"),
    (62.0, "D-"),
    (65.0, "D"),
    (69.0, "D+"),
    (72.0, "C-"),
    (75.0, "C"),
    (79.0, "C+"),
    (82.0, "B-"),
    (85.0, "B"),
    (89.0, "B+"),
    (92.0, "A-"),
    (100.0, "A"),
];

/// A single band of the grade table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub threshold: f64,
    pub letter: String,
}

impl Tier {
    pub fn new(threshold: f64, letter: impl Into<String>) -> Self {
        Self {
            threshold,
            letter: letter.into(),
        }
    }
}

impl<S: Into<String>> From<(f64, S)> for Tier {
    fn from((threshold, letter): (f64, S)) -> Self {
        Tier::new(threshold, letter)
    }
}

/// A validated grade table. Tiers are kept in the order given and sorted by
/// threshold the first time a lookup needs them.
#[derive(Debug, Clone)]
pub struct GradeTiers {
    tiers: Vec<Tier>,
    sorted: OnceCell<Vec<Tier>>,
}

impl GradeTiers {
    /// Builds a table from tiers in any order.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::Config`] if the table is empty, a threshold is
    /// not a finite value in `[0, 100]`, a letter is blank, or two tiers share
    /// a threshold.
    pub fn new<I, T>(tiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Tier>,
    {
        let tiers: Vec<Tier> = tiers.into_iter().map(Into::into).collect();

        if tiers.is_empty() {
            return Err(GradeError::config("grade tier table is empty"));
        }

        for tier in &tiers {
            if !tier.threshold.is_finite() || !(0.0..=100.0).contains(&tier.threshold) {
                return Err(GradeError::config(format!(
                    "threshold {} for '{}' is outside 0..=100",
                    tier.threshold, tier.letter
                )));
            }
            if tier.letter.trim().is_empty() {
                return Err(GradeError::config(format!(
                    "threshold {} has a blank letter",
                    tier.threshold
                )));
            }
        }

        for (i, tier) in tiers.iter().enumerate() {
            if let Some(dup) = tiers[i + 1..].iter().find(|t| t.threshold == tier.threshold) {
                return Err(GradeError::config(format!(
                    "duplicate threshold {} ('{}' and '{}')",
                    tier.threshold, tier.letter, dup.letter
                )));
            }
        }

        Ok(Self {
            tiers,
            sorted: OnceCell::new(),
        })
    }

    /// The built-in A through F table.
    pub fn standard() -> Self {
        Self {
            tiers: STANDARD_TIERS.iter().map(|&(t, l)| Tier::new(t, l)).collect(),
            sorted: OnceCell::new(),
        }
    }

    /// Tiers ordered by ascending threshold.
    pub fn tiers(&self) -> &[Tier] {
        self.sorted.get_or_init(|| {
            let mut tiers = self.tiers.clone();
            tiers.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
            debug!(count = tiers.len(), "Sorted grade tiers");
            tiers
        })
    }

    /// Returns the letter for a percentile grade.
    ///
    /// Picks the tier with the smallest threshold at or above `percentile`.
    /// Grades above every threshold fall into the top tier.
    pub fn letter(&self, percentile: f64) -> &str {
        let tiers = self.tiers();
        let pos = tiers.partition_point(|t| t.threshold < percentile);
        let tier = tiers.get(pos).unwrap_or(&tiers[tiers.len() - 1]);
        &tier.letter
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for GradeTiers {
    fn default() -> Self {
        Self::standard()
    }
}
