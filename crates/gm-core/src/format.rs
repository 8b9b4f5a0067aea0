//! Fixed formatters for the extra info view. None of them depend on the
//! runtime locale or time zone.

use chrono::{DateTime, Utc};

/// `2021-03-04 05:06`, always in UTC.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Byte count with a unit prefix, e.g. `1.5 MB` (`si`, base 1000) or
/// `1.4 MiB` (binary, base 1024). Counts below one unit print as `n B`.
pub fn human_readable_byte_count(bytes: u64, si: bool) -> String {
    let unit: u64 = if si { 1000 } else { 1024 };
    if bytes < unit {
        return format!("{bytes} B");
    }

    let mut exp = 0usize;
    let mut rest = bytes;
    while rest >= unit {
        rest /= unit;
        exp += 1;
    }

    // Rounded in integer tenths so 999_950 becomes "1.0 MB", not "1000.0 kB"
    let tenths_at = |exp: usize| {
        let divisor = u128::from(unit).pow(exp as u32);
        (u128::from(bytes) * 10 + divisor / 2) / divisor
    };
    let mut tenths = tenths_at(exp);
    if tenths >= u128::from(unit) * 10 && exp < 6 {
        exp += 1;
        tenths = tenths_at(exp);
    }

    let prefixes = if si { "kMGTPE" } else { "KMGTPE" };
    let prefix = &prefixes[exp - 1..exp];
    let binary = if si { "" } else { "i" };
    format!("{}.{} {prefix}{binary}B", tenths / 10, tenths % 10)
}

/// Gallery sizes are always shown in decimal units.
pub fn format_size(bytes: u64) -> String {
    human_readable_byte_count(bytes, true)
}

pub fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Always shows at least one decimal (`4.0`, `4.53`).
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        rating.to_string()
    }
}
