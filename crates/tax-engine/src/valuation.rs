//! Valuation model.
//!
//! Daily-compounding growth from principal, APY, and elapsed days.
//! Pure stateless functions; no clock access.

use chrono::NaiveDate;

use crate::models::{Holding, ValuedHolding};

const DAYS_PER_YEAR: f64 = 365.0;

/// Calendar days between the investment date and `as_of`, floored at zero
/// for future-dated holdings.
pub fn days_held(investment_date: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - investment_date).num_days().max(0)
}

/// Current value under daily compounding: principal × (1 + apy/100/365)^days.
///
/// Total over the whole input domain. Negative principal or APY is clamped
/// to zero rather than letting NaN leak into downstream aggregates; there is
/// no upper bound on APY, the caller is trusted to supply sane configuration.
pub fn current_value(principal: f64, apy_percent: f64, days_held: i64) -> f64 {
    let principal = principal.max(0.0);
    if days_held <= 0 {
        return principal;
    }
    let daily_rate = apy_percent.max(0.0) / 100.0 / DAYS_PER_YEAR;
    principal * (1.0 + daily_rate).powf(days_held as f64)
}

/// Derive a [`ValuedHolding`] from a holding as of a given date.
pub fn value_holding(holding: &Holding, as_of: NaiveDate) -> ValuedHolding {
    let days = days_held(holding.investment_date, as_of);
    let value = current_value(holding.principal, holding.expected_apy, days);

    ValuedHolding {
        id: holding.id.clone(),
        project_id: holding.project_id.clone(),
        project_name: holding.project_name.clone(),
        principal: holding.principal,
        investment_date: holding.investment_date,
        expected_apy: holding.expected_apy,
        days_held: days,
        current_value: value,
        gain_loss: value - holding.principal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_holding(principal: f64, apy: f64, date: NaiveDate) -> Holding {
        Holding {
            id: "h1".to_string(),
            project_id: "p1".to_string(),
            project_name: "Wind Farm".to_string(),
            principal,
            investment_date: date,
            expected_apy: apy,
        }
    }

    #[test]
    fn test_zero_days_returns_principal() {
        assert!((current_value(10000.0, 15.0, 0) - 10000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compounding_matches_formula() {
        // 10000 at 15% APY for 400 days: 10000 * (1 + 0.15/365)^400
        let value = current_value(10000.0, 15.0, 400);
        assert!((value - 11786.265188).abs() < 0.01);
    }

    #[test]
    fn test_compounding_monotonic_in_days() {
        let mut prev = current_value(10000.0, 8.0, 0);
        for days in [1, 30, 180, 365, 1000] {
            let next = current_value(10000.0, 8.0, days);
            assert!(next > prev, "value must grow with days held");
            prev = next;
        }
    }

    #[test]
    fn test_negative_inputs_clamped() {
        assert_eq!(current_value(-500.0, 10.0, 100), 0.0);
        // Negative APY treated as 0% growth
        assert!((current_value(1000.0, -10.0, 100) - 1000.0).abs() < f64::EPSILON);
        assert!(current_value(1000.0, -10.0, 100).is_finite());
    }

    #[test]
    fn test_future_dated_holding_floors_at_zero_days() {
        let holding = make_holding(
            1000.0,
            10.0,
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        );
        let valued = value_holding(&holding, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(valued.days_held, 0);
        assert!((valued.current_value - 1000.0).abs() < f64::EPSILON);
        assert!((valued.gain_loss - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_value_holding_gain_loss() {
        let holding = make_holding(
            10000.0,
            15.0,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        // 2025-02-05 is 401 days after 2024-01-01 (2024 is a leap year);
        // use 2025-02-04 for exactly 400.
        let as_of = NaiveDate::from_ymd_opt(2025, 2, 4).unwrap();
        let valued = value_holding(&holding, as_of);
        assert_eq!(valued.days_held, 400);
        assert!((valued.gain_loss - 1786.265188).abs() < 0.01);
    }
}
