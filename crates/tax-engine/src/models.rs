//! Data model for the tax engine.
//!
//! All monetary values are f64 dollars; fields named `*_rate` hold
//! fractions (0.24 = 24%) while `applicable_rate` on a lot record is
//! reported in percent units for consumers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for caller-supplied holdings.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid holding {id}: {reason}")]
    InvalidHolding { id: String, reason: String },
}

/// A single investment position as supplied by the holdings provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    /// Amount originally invested. The wire format calls this `amount`.
    #[serde(alias = "amount")]
    pub principal: f64,
    pub investment_date: NaiveDate,
    /// Expected annual percentage yield, in percent (15.0 = 15%).
    pub expected_apy: f64,
}

impl Holding {
    /// Reject holdings that violate the input invariants before any
    /// computation sees them. Malformed dates never get this far; serde
    /// rejects them at deserialization.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(EngineError::InvalidHolding {
                id: self.id.clone(),
                reason: format!("principal must be positive, got {}", self.principal),
            });
        }
        if !self.expected_apy.is_finite() || self.expected_apy < 0.0 {
            return Err(EngineError::InvalidHolding {
                id: self.id.clone(),
                reason: format!("expected_apy must be non-negative, got {}", self.expected_apy),
            });
        }
        Ok(())
    }
}

/// A holding with its compounded current value as of a given date.
/// Recomputed on every request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuedHolding {
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub principal: f64,
    pub investment_date: NaiveDate,
    pub expected_apy: f64,
    pub days_held: i64,
    pub current_value: f64,
    pub gain_loss: f64,
}

/// Per-lot tax classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxLotRecord {
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub principal: f64,
    pub investment_date: NaiveDate,
    pub days_held: i64,
    pub current_value: f64,
    pub gain_loss: f64,
    /// Gain/loss relative to principal, in percent. 0 when principal is 0.
    pub return_percent: f64,
    pub is_long_term: bool,
    pub days_until_long_term: i64,
    /// Tax rate applied to this lot, in percent. Losses carry 0.
    pub applicable_rate: f64,
    pub tax_amount: f64,
    pub estimated_dividends: f64,
}

/// Flat-rate tax coefficients. These are simplified percentages, not
/// real tax law.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRates {
    /// Days to qualify for long-term treatment.
    pub long_term_threshold_days: i64,
    /// Short-term capital gains rate (fraction).
    pub short_term_rate: f64,
    /// Long-term capital gains rate (fraction).
    pub long_term_rate: f64,
    /// Rate applied to estimated dividends (fraction).
    pub dividend_rate: f64,
    /// State liability as a fraction of federal.
    pub state_tax_ratio: f64,
    /// Estimated dividends as a fraction of realized gains.
    pub dividend_yield_ratio: f64,
    /// Platform fee deduction as a fraction of each principal.
    pub platform_fee_rate: f64,
    /// Flat advisory fee deduction per lot, in dollars.
    pub advisory_fee_flat: f64,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            long_term_threshold_days: 365,
            short_term_rate: 0.24,
            long_term_rate: 0.15,
            dividend_rate: 0.15,
            state_tax_ratio: 0.23,
            dividend_yield_ratio: 0.66,
            platform_fee_rate: 0.012,
            advisory_fee_flat: 220.0,
        }
    }
}

/// Portfolio-wide tax totals. Gains and losses are summed as positive
/// magnitudes within their bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioTaxSummary {
    pub has_investments: bool,
    pub total_dividends: f64,
    pub total_short_term_gains: f64,
    pub total_long_term_gains: f64,
    pub total_losses: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    /// Combined liability, clamped at zero.
    pub estimated_tax_owed: f64,
    pub deductions: f64,
}

/// Tax-loss harvesting potential across the portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarvestingOpportunity {
    pub available: bool,
    /// Sum of loss magnitudes over losing lots.
    pub harvestable_losses: f64,
    /// Savings from realizing those losses at the short-term rate.
    pub tax_savings: f64,
    /// Savings from holding short-term winners until long-term treatment.
    pub hold_longer_savings: f64,
    pub total_savings_opportunities: f64,
}

/// Estimated-payment quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quarter::Q1 => write!(f, "Q1"),
            Quarter::Q2 => write!(f, "Q2"),
            Quarter::Q3 => write!(f, "Q3"),
            Quarter::Q4 => write!(f, "Q4"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Due,
}

/// One installment of the estimated annual liability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlyPayment {
    pub quarter: Quarter,
    pub due_date: NaiveDate,
    pub amount: f64,
    pub status: PaymentStatus,
    /// Days from the reference date to the due date; None once paid.
    pub days_until: Option<i64>,
}

/// Full tax report returned to document-generation and UI consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxReport {
    #[serde(flatten)]
    pub summary: PortfolioTaxSummary,
    pub capital_gains: Vec<TaxLotRecord>,
    pub quarterly_payments: Vec<QuarterlyPayment>,
    pub harvesting_opportunity: HarvestingOpportunity,
}
