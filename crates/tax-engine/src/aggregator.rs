//! Portfolio-level aggregation.
//!
//! Rolls per-lot records into bucketed totals, a flat-rate liability
//! estimate, and the tax-loss harvesting opportunity.

use crate::models::{HarvestingOpportunity, PortfolioTaxSummary, TaxLotRecord, TaxRates};

/// Aggregate lot records into a portfolio tax summary.
///
/// Each record lands in exactly one of {short-term gain, long-term gain,
/// loss} based on its term and the sign of its gain. An empty slice is a
/// first-class success: an all-zero summary with `has_investments = false`.
pub fn aggregate(records: &[TaxLotRecord], rates: &TaxRates) -> PortfolioTaxSummary {
    let mut summary = PortfolioTaxSummary {
        has_investments: !records.is_empty(),
        ..PortfolioTaxSummary::default()
    };

    for record in records {
        summary.total_dividends += record.estimated_dividends;

        if record.gain_loss >= 0.0 {
            if record.is_long_term {
                summary.total_long_term_gains += record.gain_loss;
            } else {
                summary.total_short_term_gains += record.gain_loss;
            }
        } else {
            summary.total_losses += record.gain_loss.abs();
        }

        summary.deductions += record.principal * rates.platform_fee_rate;
    }
    summary.deductions += rates.advisory_fee_flat * records.len() as f64;

    summary.federal_tax = summary.total_short_term_gains * rates.short_term_rate
        + summary.total_long_term_gains * rates.long_term_rate
        + summary.total_dividends * rates.dividend_rate
        - summary.total_losses * rates.short_term_rate;
    summary.state_tax = summary.federal_tax * rates.state_tax_ratio;
    summary.estimated_tax_owed = (summary.federal_tax + summary.state_tax).max(0.0);

    summary
}

/// Detect harvestable losses and hold-longer savings.
///
/// Losses are valued at the short-term rate here even though the
/// classifier taxes losing lots at zero; the two views are reported
/// side by side, not netted against each other.
pub fn find_harvesting_opportunity(
    records: &[TaxLotRecord],
    rates: &TaxRates,
) -> HarvestingOpportunity {
    let harvestable_losses: f64 = records
        .iter()
        .filter(|r| r.gain_loss < 0.0)
        .map(|r| r.gain_loss.abs())
        .sum();

    let rate_spread = rates.short_term_rate - rates.long_term_rate;
    let hold_longer_savings: f64 = records
        .iter()
        .filter(|r| !r.is_long_term && r.gain_loss > 0.0)
        .map(|r| r.gain_loss * rate_spread)
        .sum();

    let tax_savings = harvestable_losses * rates.short_term_rate;

    HarvestingOpportunity {
        available: harvestable_losses > 0.0,
        harvestable_losses,
        tax_savings,
        hold_longer_savings,
        total_savings_opportunities: tax_savings + hold_longer_savings,
    }
}
