//! Quarterly estimated-payment schedule.
//!
//! Splits the annual liability into four calendar-anchored installments.
//! Status is computed against an injected reference date, never the wall
//! clock.

use chrono::{Datelike, NaiveDate};

use crate::models::{PaymentStatus, Quarter, QuarterlyPayment};

/// Build the four estimated payments for the tax year containing
/// `reference_date`.
///
/// Due dates are Apr 15, Jun 15, Sep 15 of the reference year and Jan 15
/// of the following year. A payment is `paid` only once the reference
/// date is strictly past its due date; a payment due today is still `due`
/// with `days_until = 0`. Always returns four entries, even for a zero
/// liability.
pub fn quarterly_schedule(
    estimated_tax_owed: f64,
    reference_date: NaiveDate,
) -> Vec<QuarterlyPayment> {
    let year = reference_date.year();
    let amount = estimated_tax_owed / 4.0;

    let due_dates = [
        (Quarter::Q1, ymd(year, 4, 15)),
        (Quarter::Q2, ymd(year, 6, 15)),
        (Quarter::Q3, ymd(year, 9, 15)),
        (Quarter::Q4, ymd(year + 1, 1, 15)),
    ];

    due_dates
        .into_iter()
        .map(|(quarter, due_date)| {
            let paid = reference_date > due_date;
            QuarterlyPayment {
                quarter,
                due_date,
                amount,
                status: if paid {
                    PaymentStatus::Paid
                } else {
                    PaymentStatus::Due
                },
                days_until: if paid {
                    None
                } else {
                    Some((due_date - reference_date).num_days())
                },
            }
        })
        .collect()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed due date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_four_payments() {
        let schedule = quarterly_schedule(0.0, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(schedule.len(), 4);
        for payment in &schedule {
            assert_eq!(payment.amount, 0.0);
        }
    }

    #[test]
    fn test_due_dates_anchor_to_reference_year() {
        let schedule = quarterly_schedule(4000.0, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(schedule[0].due_date, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
        assert_eq!(schedule[1].due_date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(schedule[2].due_date, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
        // Q4 rolls into the next calendar year
        assert_eq!(schedule[3].due_date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(schedule[3].quarter, Quarter::Q4);
    }

    #[test]
    fn test_amounts_sum_to_liability() {
        let owed = 12345.67;
        let schedule = quarterly_schedule(owed, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        let total: f64 = schedule.iter().map(|p| p.amount).sum();
        assert!((total - owed).abs() < 1e-9);
    }

    #[test]
    fn test_status_relative_to_reference_date() {
        // Mid-July: Q1 and Q2 past due, Q3 and Q4 ahead
        let reference = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        let schedule = quarterly_schedule(8000.0, reference);

        assert_eq!(schedule[0].status, PaymentStatus::Paid);
        assert_eq!(schedule[0].days_until, None);
        assert_eq!(schedule[1].status, PaymentStatus::Paid);
        assert_eq!(schedule[2].status, PaymentStatus::Due);
        assert_eq!(schedule[2].days_until, Some(57));
        assert_eq!(schedule[3].status, PaymentStatus::Due);
        assert_eq!(schedule[3].days_until, Some(179));
    }

    #[test]
    fn test_payment_due_today_is_still_due() {
        let reference = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        let schedule = quarterly_schedule(1000.0, reference);
        assert_eq!(schedule[0].status, PaymentStatus::Due);
        assert_eq!(schedule[0].days_until, Some(0));
    }
}
