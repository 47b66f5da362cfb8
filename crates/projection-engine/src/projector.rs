//! Return projection.
//!
//! Builds the monthly best/expected/worst value curves for a scenario.

use tracing::debug;

use crate::models::{ProjectionPoint, ScenarioConfig};

/// Project portfolio value month by month.
///
/// Produces `timeline_years * 12 + 1` points inclusive of month 0, where
/// all three series equal the principal exactly. The best and worst
/// series compound at the effective yield shifted by the scenario's
/// volatility.
pub fn project_returns(config: &ScenarioConfig) -> Vec<ProjectionPoint> {
    let effective = config.effective_apy();
    let volatility = config.volatility();
    let months = config.timeline_years * 12;
    debug!(effective, volatility, months, "projecting value curves");

    (0..=months)
        .map(|month_index| {
            let years_fraction = f64::from(month_index) / 12.0;
            ProjectionPoint {
                month_index,
                expected: config.principal * (1.0 + effective).powf(years_fraction),
                best: config.principal * (1.0 + effective + volatility).powf(years_fraction),
                worst: config.principal * (1.0 + effective - volatility).powf(years_fraction),
            }
        })
        .collect()
}
