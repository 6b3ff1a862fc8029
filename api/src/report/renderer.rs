//! Quote renderer
//!
//! Renders a calculated loan to a Markdown report.

use crate::domain::entities::{AmortizationEntry, LoanQuote};

use super::currency::{format_currency, format_fixed, Locale};

/// Render a quote to markdown format
pub fn render_quote(quote: &LoanQuote, locale: Locale) -> String {
    let mut buf = String::new();

    buf.push_str("# Loan Summary\n\n");
    buf.push_str(&format!(
        "- **Monthly payment:** {}\n",
        format_currency(quote.summary.monthly_payment, locale)
    ));
    buf.push_str(&format!(
        "- **Total interest:** {}\n",
        format_currency(quote.summary.total_interest, locale)
    ));
    buf.push_str(&format!(
        "- **Total cost:** {}\n\n",
        format_currency(quote.summary.total_payment, locale)
    ));

    buf.push_str(&format!(
        "Based on a loan of {} at {}% over {} years ({} payments).\n\n",
        format_currency(quote.loan_amount, locale),
        format_fixed(quote.interest_rate),
        format_fixed(quote.loan_term_in_years),
        quote.schedule.len()
    ));
    buf.push_str(&format!("All amounts in {}.\n\n", locale.currency_code()));

    buf.push_str("## Payment Schedule\n\n");
    if quote.schedule.is_empty() {
        buf.push_str("_No payments._\n");
        return buf;
    }

    buf.push_str("| Month | Payment | Principal | Interest | Balance |\n");
    buf.push_str("|---:|---:|---:|---:|---:|\n");
    for entry in &quote.schedule {
        buf.push_str(&render_entry(entry, locale));
    }

    buf
}

fn render_entry(entry: &AmortizationEntry, locale: Locale) -> String {
    format!(
        "| {} | {} | {} | {} | {} |\n",
        entry.month,
        format_currency(entry.payment, locale),
        format_currency(entry.principal_paid, locale),
        format_currency(entry.interest_paid, locale),
        format_currency(entry.remaining_balance, locale),
    )
}
