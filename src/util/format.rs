//! Shared display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count as a human-readable size, e.g. `1.5 KB`.
///
/// Uses 1024-based units up to GB, rounds to two decimal places, and drops
/// trailing zeros (`1 KB`, not `1.00 KB`). Zero, negative, and non-finite
/// inputs all map to `0 Bytes`.
pub fn format_file_size(bytes: f64) -> String {
    if !bytes.is_finite() || bytes <= 0.0 {
        return "0 Bytes".to_owned();
    }
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_trailing_zeros(value), SIZE_UNITS[unit])
}

/// Render a value rounded to two decimals without trailing zeros.
///
/// Ties round away from zero, so `1.125` renders as `1.13`.
fn trim_trailing_zeros(value: f64) -> String {
    // `{:.2}` alone rounds ties to even.
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{rounded:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}
