use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::models::interpretation::Interpretation;

/// A computed score: a whole number of points, a continuous value, or a
/// categorical label (e.g. a staging grade).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ScoreValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ScoreValue {
    /// Numeric view of the score, for band lookup and range assertions.
    /// Categorical scores have no numeric view.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScoreValue::Integer(v) => Some(*v as f64),
            ScoreValue::Float(v) => Some(*v),
            ScoreValue::Text(_) => None,
        }
    }
}

impl From<i64> for ScoreValue {
    fn from(v: i64) -> Self {
        ScoreValue::Integer(v)
    }
}

impl From<f64> for ScoreValue {
    fn from(v: f64) -> Self {
        ScoreValue::Float(v)
    }
}

/// The assembled response of one calculator invocation.
///
/// The five named fields are present for every calculator; `extra`
/// carries calculator-specific derived fields (component breakdowns,
/// expected ranges) and flattens into the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorReport {
    pub result: ScoreValue,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl CalculatorReport {
    pub fn new(result: impl Into<ScoreValue>, unit: &str, interpretation: Interpretation) -> Self {
        Self {
            result: result.into(),
            unit: unit.to_string(),
            interpretation: interpretation.interpretation,
            stage: interpretation.stage,
            stage_description: interpretation.stage_description,
            extra: Map::new(),
        }
    }

    /// Attach a calculator-specific field to the response body.
    pub fn with_extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}
