//! Calculation handlers
//!
//! Endpoints that run the amortization engine on submitted form values.
//! Supports content negotiation: `?format=markdown` or `Accept: text/markdown`
//! for a rendered report, otherwise JSON.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::app::quote_loan;
use crate::domain::entities::{LoanFormValues, LoanQuote};
use crate::error::AppError;
use crate::report::{render_quote, Locale};
use crate::AppState;

/// Presentation options for a quote
#[derive(Debug, Default, Deserialize)]
pub struct QuoteQuery {
    /// `json` (default) or `markdown`
    pub format: Option<String>,
    /// Locale for currency formatting in markdown reports (`en`, `th`)
    pub locale: Option<String>,
}

impl QuoteQuery {
    fn locale_or(&self, default: Locale) -> Locale {
        self.locale
            .as_deref()
            .and_then(|l| l.parse().ok())
            .unwrap_or(default)
    }
}

/// Check if the client wants a markdown report
fn wants_markdown(query: &QuoteQuery, headers: &HeaderMap) -> bool {
    if let Some(format) = query.format.as_deref() {
        return format.eq_ignore_ascii_case("markdown") || format.eq_ignore_ascii_case("md");
    }
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/markdown"))
        .unwrap_or(false)
}

/// Render a quote in the negotiated format
pub(crate) fn quote_response(
    quote: LoanQuote,
    query: &QuoteQuery,
    headers: &HeaderMap,
    default_locale: Locale,
) -> Response {
    if wants_markdown(query, headers) {
        let locale = query.locale_or(default_locale);
        (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            render_quote(&quote, locale),
        )
            .into_response()
    } else {
        Json(quote).into_response()
    }
}

/// POST /calculate
///
/// Calculate monthly payment, totals and the full schedule for a loan form.
pub async fn calculate(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
    headers: HeaderMap,
    Json(form): Json<LoanFormValues>,
) -> Result<Response, AppError> {
    let quote = quote_loan(&form)?;
    Ok(quote_response(
        quote,
        &query,
        &headers,
        state.config.default_locale,
    ))
}
