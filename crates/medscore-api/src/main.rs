use std::env;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for log aggregation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let addr = env::var("MEDSCORE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app()).await?;
    Ok(())
}

fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Catalog (public schema data)
        .route("/calculators", get(routes::catalog::list_calculators))
        .route(
            "/calculators/{id}",
            get(routes::catalog::get_calculator_detail),
        )
        // One endpoint per calculator, keyed by id
        .route("/{id}", post(routes::dispatch::evaluate_calculator))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, Query};
    use axum::response::IntoResponse;
    use serde_json::json;

    use crate::routes::catalog::{CatalogQuery, get_calculator_detail, list_calculators};
    use crate::routes::dispatch::evaluate_calculator;

    #[tokio::test]
    async fn dispatch_runs_a_calculator() {
        let payload = json!({
            "hepatic_or_renal_disease": "no",
            "ethanol_abuse": "no",
            "malignancy": "no",
            "age_over_75": "no",
            "reduced_platelet_count_or_function": "no",
            "rebleeding": "yes",
            "uncontrolled_hypertension": "no",
            "anemia": "no",
            "genetic_factors": "no",
            "excessive_fall_risk": "no",
            "stroke": "no",
        });

        let response =
            evaluate_calculator(Path("hemorr2hages".to_string()), axum::Json(payload)).await;
        let report = response.expect("evaluation should succeed").0;
        assert_eq!(report.stage, "Intermediate Risk");
    }

    #[tokio::test]
    async fn dispatch_unknown_id_is_not_found() {
        let response =
            evaluate_calculator(Path("no_such_score".to_string()), axum::Json(json!({}))).await;
        let status = response
            .expect_err("unknown id should fail")
            .into_response()
            .status();
        assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dispatch_validation_failure_is_unprocessable() {
        let payload = json!({
            "age": 17,
            "weight_kg": 70.0,
            "sex": "male",
            "serum_creatinine": 1.0,
        });

        let response =
            evaluate_calculator(Path("cockcroft_gault".to_string()), axum::Json(payload)).await;
        let status = response
            .expect_err("under-age input should fail")
            .into_response()
            .status();
        assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn catalog_filters_by_specialty() {
        let query = CatalogQuery {
            specialty: Some("rheumatology".to_string()),
            search: None,
        };
        let listing = list_calculators(Query(query)).await.0;
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, "itas2010");
    }

    #[tokio::test]
    async fn catalog_search_matches_description() {
        let query = CatalogQuery {
            specialty: None,
            search: Some("ventilation".to_string()),
        };
        let listing = list_calculators(Query(query)).await.0;
        assert!(listing.iter().any(|c| c.id == "hacor_score"));
    }

    #[tokio::test]
    async fn detail_round_trips_registry_metadata() {
        let detail = get_calculator_detail(Path("news2".to_string()))
            .await
            .expect("news2 is registered")
            .0;
        assert_eq!(detail.name, "NEWS2");
    }
}
