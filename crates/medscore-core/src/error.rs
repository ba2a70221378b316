use thiserror::Error;

/// Every way a calculator invocation can fail.
///
/// `Validation` and `CrossField` are caller errors and abort before any
/// computation. `BandGap` means the interpreter found no band for a
/// computed score; band tables are required to cover the full score
/// range, so this is an internal defect, never a caller error.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("{message}")]
    Validation {
        field: String,
        constraint: String,
        message: String,
    },

    #[error("{message}")]
    CrossField { fields: Vec<String>, message: String },

    #[error("no interpretation band covers score {score} for '{calculator}'")]
    BandGap { calculator: String, score: f64 },

    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),
}

impl ScoreError {
    /// Malformed or missing field in the request payload.
    pub fn invalid_payload(field: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        let field = field.into();
        ScoreError::Validation {
            message: format!("invalid request body: {detail}"),
            constraint: "well-formed request body".to_string(),
            field,
        }
    }

    /// Numeric field outside its documented inclusive range.
    pub fn out_of_range(
        field: impl Into<String>,
        value: f64,
        min: f64,
        max: f64,
        unit: &str,
    ) -> Self {
        let field = field.into();
        let unit_suffix = if unit.is_empty() {
            String::new()
        } else {
            format!(" {unit}")
        };
        ScoreError::Validation {
            message: format!("{field} must be between {min} and {max}{unit_suffix}, got {value}"),
            constraint: format!("{min} <= {field} <= {max}"),
            field,
        }
    }

    /// Relationship between two otherwise-valid fields violated.
    pub fn cross_field(fields: &[&str], message: impl Into<String>) -> Self {
        ScoreError::CrossField {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            message: message.into(),
        }
    }
}
