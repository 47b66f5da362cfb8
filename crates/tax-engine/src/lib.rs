//! Tax Engine
//!
//! Capital-gains classification, portfolio tax aggregation, tax-loss
//! harvesting detection, and quarterly estimated-payment scheduling.
//! Every function takes an explicit "as of" date; nothing reads the
//! wall clock, so results are reproducible.

pub mod aggregator;
pub mod classifier;
pub mod models;
pub mod report;
pub mod schedule;
pub mod valuation;

pub use aggregator::{aggregate, find_harvesting_opportunity};
pub use classifier::LotClassifier;
pub use models::{
    EngineError, HarvestingOpportunity, Holding, PaymentStatus, PortfolioTaxSummary, Quarter,
    QuarterlyPayment, TaxLotRecord, TaxRates, TaxReport, ValuedHolding,
};
pub use report::compute_tax_summary;
pub use schedule::quarterly_schedule;
pub use valuation::{current_value, days_held, value_holding};
