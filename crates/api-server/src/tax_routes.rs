//! Tax Report API Routes
//!
//! Endpoint for the combined capital-gains / liability / harvesting
//! report.

use axum::routing::post;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tax_engine::{compute_tax_summary, Holding, TaxReport};
use tracing::debug;

use crate::{ApiResponse, AppError};

/// Request body for a tax summary computation.
#[derive(Debug, Deserialize)]
pub struct TaxSummaryRequest {
    pub investments: Vec<Holding>,
    /// Optional valuation date; defaults to today. Tests and document
    /// regeneration pass a fixed date for reproducible output.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

pub fn tax_routes() -> Router {
    Router::new().route("/api/tax/summary", post(tax_summary))
}

/// Compute the full tax report for the submitted holdings.
async fn tax_summary(
    Json(request): Json<TaxSummaryRequest>,
) -> Result<Json<ApiResponse<TaxReport>>, AppError> {
    for holding in &request.investments {
        holding
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
    }

    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    debug!(holdings = request.investments.len(), %as_of, "tax summary requested");

    let report = compute_tax_summary(&request.investments, as_of);
    Ok(Json(ApiResponse::success(report)))
}
