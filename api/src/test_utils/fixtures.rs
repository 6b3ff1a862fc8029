//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{LoanFormValues, Plan, PlanId, TermUnit};

/// Form values for a 10,000 loan at 5% over 5 years
pub fn test_form_values() -> LoanFormValues {
    LoanFormValues {
        total_course_fee: 12000.0,
        personal_funds: 2000.0,
        rate: 5.0,
        term: 5,
        term_unit: TermUnit::Years,
    }
}

/// Create a test plan with default values
pub fn test_plan() -> Plan {
    test_plan_named("test-plan")
}

/// Create a test plan with a specific name
pub fn test_plan_named(name: &str) -> Plan {
    let now = Utc::now();
    Plan {
        id: PlanId::new(),
        name: name.to_string(),
        form_data: test_form_values(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a test plan with specific form values
pub fn test_plan_with_form(form_data: LoanFormValues) -> Plan {
    Plan {
        form_data,
        ..test_plan()
    }
}
