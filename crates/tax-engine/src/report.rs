//! Combined tax report.
//!
//! The external contract consumed by document generation and the
//! dashboard UI: per-lot records, portfolio summary, quarterly schedule,
//! and harvesting opportunity in one response.

use chrono::NaiveDate;
use tracing::debug;

use crate::aggregator;
use crate::classifier::LotClassifier;
use crate::models::{Holding, TaxReport};
use crate::schedule;

/// Compute the full tax report for a set of holdings as of a given date.
///
/// Total over validated inputs; an empty holdings list yields an all-zero
/// summary with the four quarterly entries still present.
pub fn compute_tax_summary(holdings: &[Holding], as_of: NaiveDate) -> TaxReport {
    let classifier = LotClassifier::new();
    let rates = classifier.rates().clone();

    let capital_gains: Vec<_> = holdings
        .iter()
        .map(|h| classifier.classify(h, as_of))
        .collect();

    let summary = aggregator::aggregate(&capital_gains, &rates);
    let harvesting_opportunity = aggregator::find_harvesting_opportunity(&capital_gains, &rates);
    let quarterly_payments = schedule::quarterly_schedule(summary.estimated_tax_owed, as_of);

    debug!(
        lots = capital_gains.len(),
        estimated_tax_owed = summary.estimated_tax_owed,
        "computed tax summary"
    );

    TaxReport {
        summary,
        capital_gains,
        quarterly_payments,
        harvesting_opportunity,
    }
}
