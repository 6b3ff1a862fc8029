//! Loan domain entities
//!
//! Value objects exchanged with the amortization engine. All of them are
//! created fresh per calculation and owned by the caller.

use serde::{Deserialize, Serialize};

/// Inputs to a single amortization calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanParameters {
    /// Amount financed
    pub principal: f64,
    /// Annual interest rate as a percentage (5.0 for 5%)
    pub annual_rate_percent: f64,
    /// Number of monthly payment periods
    pub term_in_months: i64,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, term_in_months: i64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_in_months,
        }
    }

    /// Annual percentage rate converted to a monthly fraction
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }
}

/// One period of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationEntry {
    /// 1-based period number
    pub month: u32,
    /// Always `principal_paid + interest_paid`
    pub payment: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    /// Outstanding principal after this period's payment
    pub remaining_balance: f64,
}

/// Full ordered schedule for one set of loan parameters
pub type Schedule = Vec<AmortizationEntry>;

/// Aggregate figures derived from a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryFigures {
    /// Nominal level payment, not any clamped row's payment
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

/// A calculated loan: the parameters it was derived from, its summary and schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanQuote {
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub term_in_months: i64,
    pub loan_term_in_years: f64,
    pub summary: SummaryFigures,
    pub schedule: Schedule,
}
