//! Projection API Routes
//!
//! Endpoints for scenario value curves and Monte Carlo outcome
//! distributions.

use axum::routing::post;
use axum::{Json, Router};
use projection_engine::{
    project_returns, sample_outcomes, OutcomeDistribution, ProjectionPoint, ScenarioConfig,
    DEFAULT_BINS, DEFAULT_ITERATIONS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::debug;

use crate::{ApiResponse, AppError};

const MAX_TIMELINE_YEARS: u32 = 50;

/// Request body for outcome sampling.
#[derive(Debug, Deserialize)]
pub struct MonteCarloRequest {
    pub final_expected_value: f64,
    pub volatility_fraction: f64,
    #[serde(default)]
    pub iterations: Option<u32>,
    #[serde(default)]
    pub num_bins: Option<usize>,
    /// Fixed seed for reproducible distributions.
    #[serde(default)]
    pub seed: Option<u64>,
}

pub fn projection_routes() -> Router {
    Router::new()
        .route("/api/projections/returns", post(returns))
        .route("/api/projections/monte-carlo", post(monte_carlo))
}

/// Project best/expected/worst value curves for a scenario.
async fn returns(
    Json(config): Json<ScenarioConfig>,
) -> Result<Json<ApiResponse<Vec<ProjectionPoint>>>, AppError> {
    if config.timeline_years == 0 || config.timeline_years > MAX_TIMELINE_YEARS {
        return Err(AppError::BadRequest(format!(
            "timeline_years must be between 1 and {MAX_TIMELINE_YEARS}"
        )));
    }
    if !config.principal.is_finite() || config.principal <= 0.0 {
        return Err(AppError::BadRequest(format!(
            "principal must be positive, got {}",
            config.principal
        )));
    }

    debug!(
        principal = config.principal,
        years = config.timeline_years,
        "projection requested"
    );
    Ok(Json(ApiResponse::success(project_returns(&config))))
}

/// Sample the outcome distribution around a projected final value.
async fn monte_carlo(
    Json(request): Json<MonteCarloRequest>,
) -> Result<Json<ApiResponse<OutcomeDistribution>>, AppError> {
    if !request.final_expected_value.is_finite() || request.final_expected_value <= 0.0 {
        return Err(AppError::BadRequest(format!(
            "final_expected_value must be positive, got {}",
            request.final_expected_value
        )));
    }
    if !request.volatility_fraction.is_finite() || request.volatility_fraction < 0.0 {
        return Err(AppError::BadRequest(format!(
            "volatility_fraction must be non-negative, got {}",
            request.volatility_fraction
        )));
    }

    let iterations = request.iterations.unwrap_or(DEFAULT_ITERATIONS);
    let num_bins = request.num_bins.unwrap_or(DEFAULT_BINS);

    let distribution = match request.seed {
        Some(seed) => sample_outcomes(
            request.final_expected_value,
            request.volatility_fraction,
            iterations,
            num_bins,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => sample_outcomes(
            request.final_expected_value,
            request.volatility_fraction,
            iterations,
            num_bins,
            &mut rand::thread_rng(),
        ),
    };

    Ok(Json(ApiResponse::success(distribution)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monte_carlo_request_defaults() {
        let json = r#"{"final_expected_value": 12111.4, "volatility_fraction": 0.05}"#;
        let request: MonteCarloRequest = serde_json::from_str(json).unwrap();
        assert!(request.iterations.is_none());
        assert!(request.num_bins.is_none());
        assert!(request.seed.is_none());
    }

    #[test]
    fn test_scenario_body_parses() {
        let json = r#"{
            "principal": 25000.0,
            "timeline_years": 10,
            "risk_tolerance": "conservative",
            "reinvestment_strategy": "withdraw",
            "geo_diversification": "global"
        }"#;
        let config: ScenarioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.timeline_years, 10);
    }
}
