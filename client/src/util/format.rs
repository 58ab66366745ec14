//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder for missing values.
pub const EMPTY_CELL: &str = "—";

/// `1234.5` → `"$1,234.50"`.
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{frac}")
}

/// Date part of an ISO-8601 timestamp.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(ts) if !ts.is_empty() => ts.split('T').next().unwrap_or(ts).to_owned(),
        _ => EMPTY_CELL.to_owned(),
    }
}

/// Text or the empty-cell placeholder.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => EMPTY_CELL.to_owned(),
    }
}
