use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical specialty a calculator is filed under in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Specialty {
    Cardiology,
    Emergency,
    Gastroenterology,
    Hematology,
    Nephrology,
    Pulmonology,
    Rheumatology,
}

impl Specialty {
    /// Catalog token, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Cardiology => "cardiology",
            Specialty::Emergency => "emergency",
            Specialty::Gastroenterology => "gastroenterology",
            Specialty::Hematology => "hematology",
            Specialty::Nephrology => "nephrology",
            Specialty::Pulmonology => "pulmonology",
            Specialty::Rheumatology => "rheumatology",
        }
    }
}
