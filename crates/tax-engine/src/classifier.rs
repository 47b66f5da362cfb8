//! Tax-lot classification.
//!
//! Turns a holding into a per-lot tax record: holding-period term,
//! applicable rate, tax amount, and estimated dividends.

use chrono::NaiveDate;

use crate::models::{Holding, TaxLotRecord, TaxRates, ValuedHolding};
use crate::valuation;

/// Classifies holdings under a fixed rate table.
pub struct LotClassifier {
    rates: TaxRates,
}

impl Default for LotClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LotClassifier {
    pub fn new() -> Self {
        Self {
            rates: TaxRates::default(),
        }
    }

    pub fn with_rates(rates: TaxRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }

    /// Classify a holding as of a given date.
    ///
    /// `days_held == threshold` counts as long-term. Losing lots always
    /// carry a zero rate, so their tax amount is exactly zero; loss value
    /// is surfaced separately by harvesting detection.
    pub fn classify(&self, holding: &Holding, as_of: NaiveDate) -> TaxLotRecord {
        self.classify_valued(&valuation::value_holding(holding, as_of))
    }

    /// Classify an already-valued holding.
    pub fn classify_valued(&self, valued: &ValuedHolding) -> TaxLotRecord {
        let threshold = self.rates.long_term_threshold_days;
        let is_long_term = valued.days_held >= threshold;
        let days_until_long_term = (threshold - valued.days_held).max(0);

        let rate_fraction = if valued.gain_loss < 0.0 {
            0.0
        } else if is_long_term {
            self.rates.long_term_rate
        } else {
            self.rates.short_term_rate
        };

        // Guard the percentage against zero-principal lots
        let return_percent = if valued.principal > 0.0 {
            valued.gain_loss / valued.principal * 100.0
        } else {
            0.0
        };

        TaxLotRecord {
            id: valued.id.clone(),
            project_id: valued.project_id.clone(),
            project_name: valued.project_name.clone(),
            principal: valued.principal,
            investment_date: valued.investment_date,
            days_held: valued.days_held,
            current_value: valued.current_value,
            gain_loss: valued.gain_loss,
            return_percent,
            is_long_term,
            days_until_long_term,
            applicable_rate: rate_fraction * 100.0,
            tax_amount: valued.gain_loss * rate_fraction,
            estimated_dividends: valued.gain_loss.max(0.0) * self.rates.dividend_yield_ratio,
        }
    }
}
