//! Loan form entity
//!
//! The raw values a user enters. Plans persist these, never the computed schedule.

use serde::{Deserialize, Serialize};

use super::loan::LoanParameters;
use crate::error::DomainError;

/// Longest supported term, in monthly periods
pub const MAX_TERM_MONTHS: i64 = 600;

/// Largest course fee accepted by the calculator
pub const MAX_COURSE_FEE: f64 = 100_000_000.0;

/// Highest accepted annual rate, in percent
pub const MAX_RATE_PERCENT: f64 = 100.0;

/// Unit the term was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermUnit {
    #[default]
    Years,
    Months,
}

impl std::fmt::Display for TermUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermUnit::Years => write!(f, "years"),
            TermUnit::Months => write!(f, "months"),
        }
    }
}

impl std::str::FromStr for TermUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "years" | "year" => Ok(TermUnit::Years),
            "months" | "month" => Ok(TermUnit::Months),
            _ => Err(format!("Unknown term unit: {}", s)),
        }
    }
}

/// Form input for one loan scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanFormValues {
    pub total_course_fee: f64,
    #[serde(default)]
    pub personal_funds: f64,
    /// Annual interest rate in percent
    pub rate: f64,
    pub term: i64,
    #[serde(default)]
    pub term_unit: TermUnit,
}

impl LoanFormValues {
    /// Amount to finance after personal funds
    pub fn principal(&self) -> f64 {
        self.total_course_fee - self.personal_funds
    }

    pub fn term_in_months(&self) -> i64 {
        match self.term_unit {
            TermUnit::Years => self.term.saturating_mul(12),
            TermUnit::Months => self.term,
        }
    }

    pub fn term_in_years(&self) -> f64 {
        match self.term_unit {
            TermUnit::Years => self.term as f64,
            TermUnit::Months => self.term as f64 / 12.0,
        }
    }

    pub fn to_parameters(&self) -> LoanParameters {
        LoanParameters::new(self.principal(), self.rate, self.term_in_months())
    }

    /// Check the form against the calculator's input rules
    ///
    /// Personal funds must be strictly below the course fee, so a valid form
    /// always has a positive principal.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.total_course_fee.is_finite() || self.total_course_fee <= 0.0 {
            return Err(DomainError::Validation(
                "Total course fee must be a positive number".to_string(),
            ));
        }
        if self.total_course_fee > MAX_COURSE_FEE {
            return Err(DomainError::Validation(
                "Total course fee is too large".to_string(),
            ));
        }
        if !self.personal_funds.is_finite() || self.personal_funds < 0.0 {
            return Err(DomainError::Validation(
                "Personal funds cannot be negative".to_string(),
            ));
        }
        if self.personal_funds >= self.total_course_fee {
            return Err(DomainError::Validation(
                "Personal funds must be less than the total course fee".to_string(),
            ));
        }
        if !self.rate.is_finite() || self.rate < 0.0 {
            return Err(DomainError::Validation(
                "Interest rate cannot be negative".to_string(),
            ));
        }
        if self.rate > MAX_RATE_PERCENT {
            return Err(DomainError::Validation(
                "Interest rate cannot exceed 100%".to_string(),
            ));
        }
        if self.term <= 0 {
            return Err(DomainError::Validation(
                "Term must be a positive whole number".to_string(),
            ));
        }
        if self.term_in_months() > MAX_TERM_MONTHS {
            return Err(DomainError::Validation(format!(
                "Term cannot exceed {} months",
                MAX_TERM_MONTHS
            )));
        }
        Ok(())
    }
}
