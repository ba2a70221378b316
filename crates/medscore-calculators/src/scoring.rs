//! Shared scoring vocabulary: inclusive field domains, ordered band
//! tables, and the yes/no token used by the weighted-sum calculators.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use medscore_core::{Interpretation, ScoreError};

/// Inclusive numeric domain for one input field, with the unit used in
/// rejection messages.
#[derive(Debug, Clone, Copy)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64, unit: &'static str) -> Self {
        Self { min, max, unit }
    }

    /// Reject `value` when it falls outside `[min, max]`. Values exactly
    /// at either bound are accepted.
    pub fn check(&self, field: &str, value: f64) -> Result<(), ScoreError> {
        if value < self.min || value > self.max {
            return Err(ScoreError::out_of_range(
                field, value, self.min, self.max, self.unit,
            ));
        }
        Ok(())
    }
}

/// One contiguous interpretation band. `upper` is the inclusive upper
/// edge; bands are listed in ascending order and the first band whose
/// edge is not exceeded wins, so every boundary belongs to exactly one
/// band.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub upper: f64,
    pub stage: &'static str,
    pub description: &'static str,
    pub guidance: &'static str,
}

impl Band {
    pub const fn new(
        upper: f64,
        stage: &'static str,
        description: &'static str,
        guidance: &'static str,
    ) -> Self {
        Self {
            upper,
            stage,
            description,
            guidance,
        }
    }
}

/// First-match-wins band lookup. The final band's edge is the documented
/// maximum of the score range, so falling off the table means the
/// computer produced an out-of-range value — an internal defect, not a
/// caller error.
pub fn classify(calculator: &str, bands: &[Band], score: f64) -> Result<Interpretation, ScoreError> {
    bands
        .iter()
        .find(|band| score <= band.upper)
        .map(|band| Interpretation::new(band.stage, band.description, band.guidance))
        .ok_or_else(|| ScoreError::BandGap {
            calculator: calculator.to_string(),
            score,
        })
}

/// Binary clinical finding, serialized as the "yes"/"no" tokens the
/// request schemas use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }

    /// Weighted-sum contribution: `points` when present, zero otherwise.
    pub fn points(self, points: i64) -> i64 {
        if self.is_yes() { points } else { 0 }
    }
}
