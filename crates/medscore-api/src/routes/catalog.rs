use axum::Json;
use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};

use medscore_calculators::{all_calculators, get_calculator};
use medscore_core::Specialty;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct CalculatorSummary {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
}

#[derive(Serialize)]
pub struct CalculatorDetail {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Filter by specialty token (e.g. "cardiology").
    pub specialty: Option<String>,
    /// Case-insensitive substring over id, name, and description.
    pub search: Option<String>,
}

pub async fn list_calculators(
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<CalculatorSummary>> {
    let search = query.search.as_deref().map(str::to_lowercase);

    let calculators: Vec<CalculatorSummary> = all_calculators()
        .iter()
        .filter(|c| {
            query
                .specialty
                .as_deref()
                .is_none_or(|s| c.specialty().as_str() == s)
        })
        .filter(|c| {
            search.as_deref().is_none_or(|needle| {
                c.id().contains(needle)
                    || c.name().to_lowercase().contains(needle)
                    || c.description().to_lowercase().contains(needle)
            })
        })
        .map(|c| CalculatorSummary {
            id: c.id().to_string(),
            name: c.name().to_string(),
            specialty: c.specialty(),
        })
        .collect();

    Json(calculators)
}

pub async fn get_calculator_detail(
    Path(id): Path<String>,
) -> Result<Json<CalculatorDetail>, ApiError> {
    let calculator = get_calculator(&id)
        .ok_or_else(|| ApiError::not_found(format!("unknown calculator: {id}")))?;

    Ok(Json(CalculatorDetail {
        id: calculator.id().to_string(),
        name: calculator.name().to_string(),
        specialty: calculator.specialty(),
        description: calculator.description().to_string(),
    }))
}
