//! Currency formatting
//!
//! The engine returns raw numbers; presentation picks the locale explicitly.

use serde::{Deserialize, Serialize};

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// en-US, amounts in USD
    #[default]
    En,
    /// th-TH, amounts in THB
    Th,
}

impl Locale {
    pub fn currency_code(&self) -> &'static str {
        match self {
            Locale::En => "USD",
            Locale::Th => "THB",
        }
    }

    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Locale::En => "$",
            Locale::Th => "฿",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Th => write!(f, "th"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            "th" | "th-th" | "th_th" => Ok(Locale::Th),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}

/// Format an amount with the locale's currency symbol, grouping and two decimals
///
/// `1234.5` in `en` renders as `$1,234.50`; negatives as `-$1,234.50`.
/// Non-finite amounts render as `-`.
pub fn format_currency(amount: f64, locale: Locale) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed != "0.00";

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        locale.currency_symbol(),
        group_thousands(whole),
        fraction
    )
}

/// Format a plain number with two decimals, for rates and year counts
pub fn format_fixed(value: f64) -> String {
    format!("{:.2}", value)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
