//! Scenario configuration and projection outputs.
//!
//! The coefficient tables live on the enums as exhaustive matches, so an
//! unknown scenario key cannot reach the math.

use serde::{Deserialize, Serialize};

/// Risk tolerance bucket selecting base yield and volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    /// Base annual yield, as a fraction.
    pub fn base_apy(self) -> f64 {
        match self {
            RiskTolerance::Conservative => 0.14,
            RiskTolerance::Moderate => 0.17,
            RiskTolerance::Aggressive => 0.21,
        }
    }

    /// Annual volatility, as a fraction.
    pub fn volatility(self) -> f64 {
        match self {
            RiskTolerance::Conservative => 0.03,
            RiskTolerance::Moderate => 0.05,
            RiskTolerance::Aggressive => 0.08,
        }
    }
}

/// Whether yields are reinvested or paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReinvestmentStrategy {
    Compound,
    Withdraw,
}

impl ReinvestmentStrategy {
    pub fn multiplier(self) -> f64 {
        match self {
            ReinvestmentStrategy::Compound => 1.15,
            ReinvestmentStrategy::Withdraw => 1.0,
        }
    }
}

/// Geographic spread of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoDiversification {
    Single,
    Multi,
    Global,
}

impl GeoDiversification {
    pub fn multiplier(self) -> f64 {
        match self {
            GeoDiversification::Single => 1.0,
            GeoDiversification::Multi => 1.04,
            GeoDiversification::Global => 1.08,
        }
    }
}

/// A projection scenario supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub principal: f64,
    pub timeline_years: u32,
    pub risk_tolerance: RiskTolerance,
    pub reinvestment_strategy: ReinvestmentStrategy,
    pub geo_diversification: GeoDiversification,
}

impl ScenarioConfig {
    /// Effective annual yield after reinvestment and diversification
    /// multipliers.
    pub fn effective_apy(&self) -> f64 {
        self.risk_tolerance.base_apy()
            * self.reinvestment_strategy.multiplier()
            * self.geo_diversification.multiplier()
    }

    pub fn volatility(&self) -> f64 {
        self.risk_tolerance.volatility()
    }
}

/// One monthly point of the projected value curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month_index: u32,
    pub expected: f64,
    pub best: f64,
    pub worst: f64,
}

/// One bucket of the outcome histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloBin {
    pub value_range_midpoint: f64,
    pub occurrence_count: u32,
    pub probability_percent: f64,
}

/// Monte Carlo outcome distribution around a projected final value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    pub final_expected_value: f64,
    pub std_deviation: f64,
    pub iterations: u32,
    pub bins: Vec<MonteCarloBin>,
}
