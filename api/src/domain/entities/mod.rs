//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod loan;
pub mod loan_form;
pub mod plan;

pub use loan::{AmortizationEntry, LoanParameters, LoanQuote, Schedule, SummaryFigures};
pub use loan_form::{LoanFormValues, TermUnit, MAX_TERM_MONTHS};
pub use plan::{NewPlan, Plan, PlanId};
