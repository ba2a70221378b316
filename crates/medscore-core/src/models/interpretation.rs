use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One interpretation band's prose triple: a short stage label, a
/// one-line description, and the full clinical guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub stage: String,
    pub stage_description: String,
    pub interpretation: String,
}

impl Interpretation {
    pub fn new(
        stage: impl Into<String>,
        stage_description: impl Into<String>,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            stage: stage.into(),
            stage_description: stage_description.into(),
            interpretation: interpretation.into(),
        }
    }
}
