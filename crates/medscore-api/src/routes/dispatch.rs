use axum::Json;
use axum::extract::Path;
use serde_json::Value;

use medscore_calculators::get_calculator;
use medscore_core::{CalculatorReport, ScoreError};

use crate::error::ApiError;

/// Run one calculator against a JSON payload. The calculator id is the
/// endpoint path; the body is its input schema.
pub async fn evaluate_calculator(
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<CalculatorReport>, ApiError> {
    let calculator = get_calculator(&id)
        .ok_or_else(|| ApiError::from(ScoreError::UnknownCalculator(id.clone())))?;

    let report = calculator.evaluate(&payload)?;

    tracing::info!(
        calculator = %id,
        stage = %report.stage,
        "calculator_evaluated"
    );

    Ok(Json(report))
}
