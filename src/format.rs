//! Display formatting for indicator values.

use num_format::{Locale, ToFormattedString};

/// Compact human form with magnitude suffixes: 1.2T, 3.4B, 5.6M, 7.8K.
/// Missing or non-finite values render as "N/A".
pub fn format_number(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return "N/A".to_string();
    };
    let a = v.abs();
    if a >= 1e12 {
        format!("{:.1}T", v / 1e12)
    } else if a >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if a >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if a >= 1e3 {
        format!("{:.1}K", v / 1e3)
    } else if a >= 1.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.3}")
    }
}

/// Percentage with a fixed number of decimals, "N/A" when missing.
pub fn format_percentage(value: Option<f64>, decimals: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.decimals$}%"),
        None => "N/A".to_string(),
    }
}

/// Compact value with a currency tag, e.g. "63.0K USD".
pub fn format_currency(value: Option<f64>, currency: &str) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{} {}", format_number(Some(v)), currency),
        None => "N/A".to_string(),
    }
}

/// Exact integer with thousands separators, for counts like population.
pub fn format_count(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => (v.round() as i64).to_formatted_string(&Locale::en),
        None => "N/A".to_string(),
    }
}

/// Normalize common entity-name aliases to their canonical display form.
pub fn clean_entity_name(name: &str) -> String {
    let cleaned = name.trim();
    match cleaned {
        "United States of America" | "USA" => "United States".to_string(),
        "UK" => "United Kingdom".to_string(),
        "Russian Federation" => "Russia".to_string(),
        other => other.to_string(),
    }
}
