//! Loan quotes
//!
//! Turns raw form values into a summary and schedule. This is where the
//! caller-side payment check lives: a payment that is not a finite positive
//! number stops the calculation before any schedule is built.

use crate::domain::amortization::{monthly_payment, schedule_for, summarize};
use crate::domain::entities::{LoanFormValues, LoanQuote};
use crate::error::{AppError, CalculationError};

/// Validate a form and calculate its quote
pub fn quote_loan(form: &LoanFormValues) -> Result<LoanQuote, AppError> {
    form.validate()?;

    let params = form.to_parameters();
    let payment = monthly_payment(&params).map_err(|e| {
        tracing::warn!(
            error = %e,
            principal = params.principal,
            rate = params.annual_rate_percent,
            term_in_months = params.term_in_months,
            "Refusing to build schedule"
        );
        CalculationError::CannotCalculate
    })?;

    let schedule = schedule_for(&params);
    let summary = summarize(params.principal, payment, &schedule);

    tracing::debug!(
        principal = params.principal,
        term_in_months = params.term_in_months,
        monthly_payment = payment,
        periods = schedule.len(),
        "Loan quoted"
    );

    Ok(LoanQuote {
        loan_amount: params.principal,
        interest_rate: params.annual_rate_percent,
        term_in_months: params.term_in_months,
        loan_term_in_years: form.term_in_years(),
        summary,
        schedule,
    })
}
