//! Cell-value formatting shared by the display tables.
//!
//! Missing, non-numeric, and in-band-error values all render as the
//! [`INVALID_CELL_TEXT`] sentinel. Substitution happens here, at display
//! time; the raw optional values stay on the domain objects so programmatic
//! comparisons never see the sentinel.

use std::cmp::Ordering;

use chrono::DateTime;

/// Display text for a value the table cannot render.
pub const INVALID_CELL_TEXT: &str = "Unknown";

/// In-band error code reported for rectilinearity and emergence angle.
const MEASUREMENT_ERROR_CODE: f64 = -1.0;

/// Returns the string itself, or the sentinel for absent/empty input.
pub fn table_cell_string(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => INVALID_CELL_TEXT.to_string(),
    }
}

/// Formats a number to exactly three decimal places with thousands grouping.
///
/// Absent and non-finite values render as the sentinel.
///
/// # Examples
///
/// ```
/// use sia_rust::formatting::format_number_fixed_three_decimals;
///
/// assert_eq!(format_number_fixed_three_decimals(Some(1.0)), "1.000");
/// assert_eq!(format_number_fixed_three_decimals(Some(893403452.0)), "893,403,452.000");
/// assert_eq!(format_number_fixed_three_decimals(None), "Unknown");
/// ```
pub fn format_number_fixed_three_decimals(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => group_thousands(&format!("{v:.3}")),
        None => INVALID_CELL_TEXT.to_string(),
    }
}

/// Formats a number to at most three decimal places, trimming trailing
/// zeros, with thousands grouping.
pub fn format_number_max_three_decimals(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => {
            let fixed = format!("{v:.3}");
            let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
            group_thousands(trimmed)
        }
        None => INVALID_CELL_TEXT.to_string(),
    }
}

/// Formats rectilinearity or emergence angle, mapping the upstream `-1`
/// error code to the sentinel.
pub fn format_rectilinearity_or_emergence(value: Option<f64>) -> String {
    match value {
        Some(v) if v == MEASUREMENT_ERROR_CODE => INVALID_CELL_TEXT.to_string(),
        other => format_number_fixed_three_decimals(other),
    }
}

/// Formats an epoch-seconds timestamp as `YYYY-MM-DD HH:MM:SS` UTC.
///
/// Absent, non-finite, and out-of-range timestamps render as the sentinel.
pub fn format_time_for_display(epoch_secs: Option<f64>) -> String {
    let Some(secs) = epoch_secs.filter(|s| s.is_finite()) else {
        return INVALID_CELL_TEXT.to_string();
    };
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    match DateTime::from_timestamp(whole as i64, nanos) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => INVALID_CELL_TEXT.to_string(),
    }
}

/// Orders formatted numeric cells, ranking unparseable values lowest.
///
/// The sentinel, empty strings, and absent values compare equal to each
/// other and below every real number, so unknown cells sink to one end of a
/// sorted column instead of interleaving.
pub fn numeric_string_comparator(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (parse_numeric_cell(a), parse_numeric_cell(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn parse_numeric_cell(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if value.is_empty() || value == INVALID_CELL_TEXT {
        return None;
    }
    value.replace(',', "").parse::<f64>().ok()
}

/// Inserts thousands separators into the integer part of a formatted number.
fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
