//! Projection Engine
//!
//! Forward-return projection (best/expected/worst value curves) and
//! Monte Carlo outcome distributions for scenario analysis. All
//! computation is synchronous and pure; randomness is injected so
//! sampling is reproducible under a fixed seed.

pub mod models;
pub mod monte_carlo;
pub mod projector;

pub use models::{
    GeoDiversification, MonteCarloBin, OutcomeDistribution, ProjectionPoint,
    ReinvestmentStrategy, RiskTolerance, ScenarioConfig,
};
pub use monte_carlo::{sample_outcomes, sample_outcomes_default, DEFAULT_BINS, DEFAULT_ITERATIONS};
pub use projector::project_returns;
