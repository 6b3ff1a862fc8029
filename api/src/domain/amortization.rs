//! Amortization engine
//!
//! Turns (principal, annual rate, term) into a level monthly payment and a
//! month-by-month schedule. Every function here is pure: same input, same
//! output, no shared state, safe to call from any thread.
//!
//! Invalid input is signalled with a payment of `0` and an empty schedule.
//! [`monthly_payment`] offers the same check as a `Result`.

use crate::domain::entities::{
    AmortizationEntry, LoanParameters, Schedule, SummaryFigures, MAX_TERM_MONTHS,
};
use crate::error::CalculationError;

/// Level monthly payment for a fixed-rate amortizing loan
///
/// PMT = P * r * (1 + r)^n / ((1 + r)^n - 1), with r = annual% / 100 / 12.
/// A zero rate falls back to straight-line repayment.
///
/// Returns `0` when `principal <= 0`, `annual_rate_percent < 0` or
/// `term_in_months <= 0`. Callers must also reject a result that is `NaN`,
/// infinite or `<= 0` before building a schedule.
pub fn compute_monthly_payment(principal: f64, annual_rate_percent: f64, term_in_months: i64) -> f64 {
    if principal <= 0.0 || annual_rate_percent < 0.0 || term_in_months <= 0 {
        return 0.0;
    }

    let monthly_rate =
        LoanParameters::new(principal, annual_rate_percent, term_in_months).periodic_rate();
    let periods = term_in_months as f64;

    if monthly_rate == 0.0 {
        return principal / periods;
    }

    let growth = (1.0 + monthly_rate).powf(periods);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Typed variant of [`compute_monthly_payment`]
pub fn monthly_payment(params: &LoanParameters) -> Result<f64, CalculationError> {
    if params.principal <= 0.0 {
        return Err(CalculationError::InvalidInput(
            "principal must be positive".to_string(),
        ));
    }
    if params.annual_rate_percent < 0.0 {
        return Err(CalculationError::InvalidInput(
            "annual rate cannot be negative".to_string(),
        ));
    }
    if params.term_in_months <= 0 {
        return Err(CalculationError::InvalidInput(
            "term must be at least one month".to_string(),
        ));
    }

    let payment = compute_monthly_payment(
        params.principal,
        params.annual_rate_percent,
        params.term_in_months,
    );
    if is_valid_payment(payment) {
        Ok(payment)
    } else {
        Err(CalculationError::NonFinitePayment)
    }
}

/// Whether a payment figure can drive a schedule
pub fn is_valid_payment(payment: f64) -> bool {
    payment.is_finite() && payment > 0.0
}

/// Full amortization schedule
///
/// The last entry always ends at a balance of exactly `0`. Each row keeps
/// `payment == principal_paid + interest_paid`. An invalid payment yields
/// an empty schedule, as does a term whose month numbers would not fit a
/// `u32`.
pub fn compute_schedule(principal: f64, annual_rate_percent: f64, term_in_months: i64) -> Schedule {
    let payment = compute_monthly_payment(principal, annual_rate_percent, term_in_months);
    if !is_valid_payment(payment) {
        return Vec::new();
    }
    let Ok(periods) = u32::try_from(term_in_months) else {
        tracing::debug!(term_in_months, "Term too long for a schedule");
        return Vec::new();
    };

    let monthly_rate =
        LoanParameters::new(principal, annual_rate_percent, term_in_months).periodic_rate();
    let mut schedule = Vec::with_capacity(periods.min(MAX_TERM_MONTHS as u32) as usize);
    let mut balance = principal;

    for month in 1..=periods {
        let interest_paid = balance * monthly_rate;
        // With extreme rate/term pairs the level split can round below zero.
        let mut principal_paid = (payment - interest_paid).max(0.0);

        if balance < payment {
            principal_paid = balance;
        }

        balance -= principal_paid;

        schedule.push(AmortizationEntry {
            month,
            payment: interest_paid + principal_paid,
            principal_paid,
            interest_paid,
            remaining_balance: balance.max(0.0),
        });

        if balance <= 0.0 {
            break;
        }
    }

    settle_final_entry(&mut schedule);
    schedule
}

/// Fold any residual balance left by floating-point drift into the last payment
fn settle_final_entry(schedule: &mut Schedule) {
    let Some(last) = schedule.last_mut() else {
        return;
    };

    if last.remaining_balance != 0.0 {
        let residual = last.remaining_balance;
        tracing::trace!(month = last.month, residual, "Settling residual balance");
        last.principal_paid += residual;
        last.payment = last.interest_paid + last.principal_paid;
        last.remaining_balance = 0.0;
    }
}

/// Schedule for a [`LoanParameters`] value
pub fn schedule_for(params: &LoanParameters) -> Schedule {
    compute_schedule(
        params.principal,
        params.annual_rate_percent,
        params.term_in_months,
    )
}

/// Reduce a schedule to its summary figures
pub fn summarize(principal: f64, monthly_payment: f64, schedule: &[AmortizationEntry]) -> SummaryFigures {
    let total_interest: f64 = schedule.iter().map(|e| e.interest_paid).sum();

    SummaryFigures {
        monthly_payment,
        total_interest,
        total_payment: principal + total_interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    fn principal_sum(schedule: &[AmortizationEntry]) -> f64 {
        schedule.iter().map(|e| e.principal_paid).sum()
    }

    const SCENARIOS: &[(f64, f64, i64)] = &[
        (100_000.0, 5.0, 12),
        (1_200.0, 0.0, 12),
        (10_000.0, 5.0, 60),
        (250_000.0, 3.75, 360),
        (12_345.67, 17.9, 37),
        (5_000_000.0, 100.0, 600),
        (999.99, 0.01, 7),
        (50.0, 24.0, 1),
        (75_000.0, 0.0, 600),
    ];

    // --- Monthly payment ---

    #[test]
    fn zero_rate_payment_is_straight_line() {
        assert_eq!(compute_monthly_payment(1200.0, 0.0, 12), 100.0);
        assert_eq!(compute_monthly_payment(1000.0, 0.0, 3), 1000.0 / 3.0);
    }

    #[test]
    fn concrete_payment_five_percent_one_year() {
        let payment = compute_monthly_payment(100_000.0, 5.0, 12);
        assert_close(payment, 8560.75, 0.005);
    }

    #[test]
    fn invalid_inputs_return_sentinel() {
        assert_eq!(compute_monthly_payment(-100.0, 5.0, 12), 0.0);
        assert_eq!(compute_monthly_payment(0.0, 5.0, 12), 0.0);
        assert_eq!(compute_monthly_payment(1000.0, 5.0, 0), 0.0);
        assert_eq!(compute_monthly_payment(1000.0, 5.0, -3), 0.0);
        assert_eq!(compute_monthly_payment(1000.0, -1.0, 12), 0.0);
    }

    #[test]
    fn valid_calculation_never_returns_zero() {
        for &(principal, rate, term) in SCENARIOS {
            let payment = compute_monthly_payment(principal, rate, term);
            assert!(payment > 0.0, "payment for {:?}", (principal, rate, term));
            assert!(is_valid_payment(payment));
        }
    }

    #[test]
    fn typed_payment_distinguishes_invalid_input() {
        let bad_principal = LoanParameters::new(-100.0, 5.0, 12);
        let bad_term = LoanParameters::new(1000.0, 5.0, 0);
        let bad_rate = LoanParameters::new(1000.0, -2.0, 12);

        assert!(matches!(
            monthly_payment(&bad_principal),
            Err(CalculationError::InvalidInput(_))
        ));
        assert!(matches!(
            monthly_payment(&bad_term),
            Err(CalculationError::InvalidInput(_))
        ));
        assert!(matches!(
            monthly_payment(&bad_rate),
            Err(CalculationError::InvalidInput(_))
        ));
    }

    #[test]
    fn typed_payment_rejects_non_finite() {
        let params = LoanParameters::new(f64::INFINITY, 5.0, 12);
        assert_eq!(
            monthly_payment(&params),
            Err(CalculationError::NonFinitePayment)
        );

        let params = LoanParameters::new(f64::NAN, 5.0, 12);
        // NaN fails neither sentinel comparison, so it surfaces as non-finite
        assert_eq!(
            monthly_payment(&params),
            Err(CalculationError::NonFinitePayment)
        );
    }

    #[test]
    fn typed_payment_matches_sentinel_function() {
        let params = LoanParameters::new(100_000.0, 5.0, 12);
        assert_eq!(
            monthly_payment(&params).unwrap(),
            compute_monthly_payment(100_000.0, 5.0, 12)
        );
    }

    // --- Schedule ---

    #[test]
    fn zero_rate_schedule_has_no_interest() {
        let schedule = compute_schedule(1200.0, 0.0, 12);

        assert_eq!(schedule.len(), 12);
        for entry in &schedule {
            assert_eq!(entry.interest_paid, 0.0);
            assert_eq!(entry.principal_paid, 100.0);
            assert_eq!(entry.payment, 100.0);
        }

        let balances: Vec<f64> = schedule.iter().map(|e| e.remaining_balance).collect();
        let expected: Vec<f64> = (0..12).rev().map(|k| k as f64 * 100.0).collect();
        assert_eq!(balances, expected);
        assert_eq!(principal_sum(&schedule), 1200.0);
    }

    #[test]
    fn concrete_schedule_five_percent_one_year() {
        let principal = 100_000.0;
        let schedule = compute_schedule(principal, 5.0, 12);
        let payment = compute_monthly_payment(principal, 5.0, 12);
        let summary = summarize(principal, payment, &schedule);

        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule.last().unwrap().remaining_balance, 0.0);
        assert_close(summary.monthly_payment, 8560.75, 0.005);
        assert_close(summary.total_interest, 2728.98, 0.01);
        assert_eq!(principal_sum(&schedule), principal);
    }

    #[test]
    fn months_are_sequential_from_one() {
        for &(principal, rate, term) in SCENARIOS {
            let schedule = compute_schedule(principal, rate, term);
            for (index, entry) in schedule.iter().enumerate() {
                assert_eq!(entry.month as usize, index + 1);
            }
            assert!(schedule.len() as i64 <= term);
        }
    }

    #[test]
    fn final_balance_is_exactly_zero() {
        for &(principal, rate, term) in SCENARIOS {
            let schedule = compute_schedule(principal, rate, term);
            assert!(!schedule.is_empty());
            assert_eq!(
                schedule.last().unwrap().remaining_balance,
                0.0,
                "scenario {:?}",
                (principal, rate, term)
            );
        }
    }

    #[test]
    fn principal_is_conserved() {
        for &(principal, rate, term) in SCENARIOS {
            let schedule = compute_schedule(principal, rate, term);
            let paid = principal_sum(&schedule);
            assert!(
                (paid - principal).abs() <= principal * 1e-9,
                "scenario {:?}: paid {} of {}",
                (principal, rate, term),
                paid,
                principal
            );
        }
    }

    #[test]
    fn each_row_payment_is_principal_plus_interest() {
        for &(principal, rate, term) in SCENARIOS {
            for entry in compute_schedule(principal, rate, term) {
                assert_eq!(entry.payment, entry.principal_paid + entry.interest_paid);
                assert!(entry.principal_paid >= 0.0);
                assert!(entry.interest_paid >= 0.0);
            }
        }
    }

    #[test]
    fn balance_is_monotonic_and_non_negative() {
        for &(principal, rate, term) in SCENARIOS {
            let schedule = compute_schedule(principal, rate, term);
            let mut previous = principal;
            for entry in &schedule {
                assert!(entry.remaining_balance >= 0.0);
                assert!(entry.remaining_balance <= previous);
                previous = entry.remaining_balance;
            }
        }
    }

    #[test]
    fn extreme_rate_and_term_still_settles() {
        let principal = 5_069_806.54;
        let schedule = compute_schedule(principal, 93.654078771981, 521);

        assert!(!schedule.is_empty());
        assert_eq!(schedule.last().unwrap().remaining_balance, 0.0);
        for entry in &schedule {
            assert!(entry.principal_paid >= 0.0);
        }
        assert!((principal_sum(&schedule) - principal).abs() <= principal * 1e-9);
    }

    #[test]
    fn oversized_term_yields_empty_schedule() {
        assert!(is_valid_payment(compute_monthly_payment(1.0, 0.0, i64::MAX)));

        assert!(compute_schedule(1.0, 0.0, i64::MAX).is_empty());
        assert!(compute_schedule(1.0, 5.0, u32::MAX as i64 + 1).is_empty());
    }

    #[test]
    fn long_term_beyond_form_limit_still_settles() {
        let schedule = compute_schedule(10_000.0, 5.0, 1_200);

        assert_eq!(schedule.len(), 1_200);
        assert_eq!(schedule.last().unwrap().month, 1_200);
        assert_eq!(schedule.last().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn single_period_pays_everything_at_once() {
        let schedule = compute_schedule(50.0, 24.0, 1);

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].principal_paid, 50.0);
        assert_close(schedule[0].interest_paid, 1.0, 1e-12);
        assert_eq!(schedule[0].remaining_balance, 0.0);
    }

    #[test]
    fn invalid_inputs_yield_empty_schedule() {
        assert!(compute_schedule(-100.0, 5.0, 12).is_empty());
        assert!(compute_schedule(1000.0, 5.0, 0).is_empty());
        assert!(compute_schedule(1000.0, -5.0, 12).is_empty());
        assert!(compute_schedule(f64::NAN, 5.0, 12).is_empty());
        assert!(compute_schedule(f64::INFINITY, 5.0, 12).is_empty());
    }

    #[test]
    fn schedule_is_idempotent() {
        for &(principal, rate, term) in SCENARIOS {
            let first = compute_schedule(principal, rate, term);
            let second = compute_schedule(principal, rate, term);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn schedule_for_matches_free_function() {
        let params = LoanParameters::new(10_000.0, 5.0, 60);
        assert_eq!(schedule_for(&params), compute_schedule(10_000.0, 5.0, 60));
    }

    #[test]
    fn concurrent_calculations_are_independent() {
        let handles: Vec<_> = SCENARIOS
            .iter()
            .map(|&(principal, rate, term)| {
                std::thread::spawn(move || compute_schedule(principal, rate, term))
            })
            .collect();

        for (handle, &(principal, rate, term)) in handles.into_iter().zip(SCENARIOS) {
            let threaded = handle.join().unwrap();
            assert_eq!(threaded, compute_schedule(principal, rate, term));
        }
    }

    // --- Summary ---

    #[test]
    fn summary_totals_match_schedule() {
        let principal = 10_000.0;
        let payment = compute_monthly_payment(principal, 5.0, 60);
        let schedule = compute_schedule(principal, 5.0, 60);
        let summary = summarize(principal, payment, &schedule);

        let payments: f64 = schedule.iter().map(|e| e.payment).sum();
        assert_eq!(summary.monthly_payment, payment);
        assert_close(summary.total_payment, payments, 1e-6);
        assert_eq!(summary.total_payment, principal + summary.total_interest);
    }

    #[test]
    fn summary_of_zero_rate_has_no_interest() {
        let schedule = compute_schedule(1200.0, 0.0, 12);
        let summary = summarize(1200.0, 100.0, &schedule);

        assert_eq!(summary.total_interest, 0.0);
        assert_eq!(summary.total_payment, 1200.0);
    }

    #[test]
    fn summary_of_empty_schedule() {
        let summary = summarize(0.0, 0.0, &[]);
        assert_eq!(summary.total_interest, 0.0);
        assert_eq!(summary.total_payment, 0.0);
    }
}
