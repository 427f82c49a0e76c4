use crate::infra::{validate_asking_price, AppState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use mot_valuation::error::AppError;
use mot_valuation::history::{DefectItem, VehicleHistory};
use mot_valuation::repair_costs::{
    catalog, history_summary, total_cost, CategoryView, CostBreakdown, HistorySummary, CURRENCY,
    DISCLAIMER, LAST_UPDATED,
};
use mot_valuation::valuation::{ValuationEngine, ValuationReport};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ValuationRequest {
    pub(crate) asking_price: f64,
    pub(crate) history: VehicleHistory,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValuationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) registration: Option<String>,
    pub(crate) asking_price: f64,
    pub(crate) valuation: ValuationReport,
    pub(crate) processed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepairEstimateRequest {
    #[serde(default)]
    pub(crate) defects: Vec<DefectItem>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RepairCatalogResponse {
    pub(crate) repair_costs: Vec<CategoryView>,
    pub(crate) currency: &'static str,
    pub(crate) last_updated: &'static str,
    pub(crate) disclaimer: &'static str,
}

pub(crate) fn valuation_router(engine: Arc<ValuationEngine>) -> Router {
    Router::new()
        .route("/api/v1/valuation", post(valuation_endpoint))
        .route("/api/v1/repair-costs", get(repair_catalog_endpoint))
        .route("/api/v1/repair-costs/estimate", post(repair_estimate_endpoint))
        .route("/api/v1/repair-costs/history", post(repair_history_endpoint))
        .with_state(engine)
}

pub(crate) fn with_valuation_routes(engine: Arc<ValuationEngine>) -> Router {
    valuation_router(engine)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn valuation_endpoint(
    State(engine): State<Arc<ValuationEngine>>,
    Json(payload): Json<ValuationRequest>,
) -> Result<Json<ValuationResponse>, AppError> {
    let ValuationRequest {
        asking_price,
        history,
    } = payload;
    let asking_price = validate_asking_price(asking_price).map_err(AppError::InvalidRequest)?;

    let valuation = engine.calculate_valuation(&history.tests, asking_price);
    info!(
        registration = history.registration.as_deref().unwrap_or("unknown"),
        recommendation = valuation.recommendation().label(),
        "valuation request served"
    );

    Ok(Json(ValuationResponse {
        registration: history.registration,
        asking_price,
        valuation,
        processed_at: Utc::now(),
    }))
}

pub(crate) async fn repair_catalog_endpoint() -> Json<RepairCatalogResponse> {
    Json(RepairCatalogResponse {
        repair_costs: catalog(),
        currency: CURRENCY,
        last_updated: LAST_UPDATED,
        disclaimer: DISCLAIMER,
    })
}

pub(crate) async fn repair_estimate_endpoint(
    Json(payload): Json<RepairEstimateRequest>,
) -> Json<CostBreakdown> {
    Json(total_cost(&payload.defects))
}

pub(crate) async fn repair_history_endpoint(
    Json(history): Json<VehicleHistory>,
) -> Json<HistorySummary> {
    Json(history_summary(&history.tests))
}
