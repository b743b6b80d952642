// src/domain/pricing.rs

pub const DISCLAIMER: &str =
    "note: this is a statistical estimate; actual prices vary by seasonality, fees, and market shifts.";

/// A predicted nightly price. No uncertainty is computed; the disclaimer is
/// the only caveat shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub price: f64,
}

impl PredictionResult {
    pub fn new(price: f64) -> Self {
        Self { price }
    }

    pub fn display_price(&self) -> String {
        format_currency(self.price)
    }

    pub fn disclaimer(&self) -> &'static str {
        DISCLAIMER
    }
}

/// `$` + thousands separators + two decimals, e.g. `$1,234.56`. A negative
/// amount keeps its sign after the dollar: `$-12.00`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("${sign}{grouped}.{cents}")
}
