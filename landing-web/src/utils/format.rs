//! # Formatting Utilities
//!
//! Number formatting for statistics and price cards, following Russian typographic
//! conventions (narrow no-break space as the thousands separator).
//!
//! ## Functions
//!
//! - [`group_thousands`] - Insert a separator every three digits
//! - [`format_price_from`] - "от 45 000 ₽" price labels
//! - [`format_stat`] - Compact headline figures ("48 млн+")

/// Narrow no-break space, the thousands separator in Russian typography.
pub const THIN_SPACE: char = '\u{202F}';

/// Group digits of `value` in threes.
///
/// # Examples
///
/// ```rust
/// use landing_web::utils::format::group_thousands;
///
/// assert_eq!(group_thousands(1234567, ','), "1,234,567");
/// assert_eq!(group_thousands(999, ','), "999");
/// ```
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();

    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }

    result.chars().rev().collect()
}

/// Price label for a work format card.
pub fn format_price_from(rubles: u64) -> String {
    format!("от {} ₽", group_thousands(rubles, THIN_SPACE))
}

/// Compact headline figure with its suffix.
///
/// Millions collapse to "млн", thousands to "тыс"; smaller values are grouped as-is.
///
/// ```rust
/// use landing_web::utils::format::format_stat;
///
/// assert_eq!(format_stat(48_000_000, "+"), "48 млн+");
/// assert_eq!(format_stat(350, "+"), "350+");
/// ```
pub fn format_stat(value: u64, suffix: &str) -> String {
    let body = if value >= 1_000_000 {
        compact(value, 1_000_000, "млн")
    } else if value >= 10_000 {
        compact(value, 1_000, "тыс")
    } else {
        group_thousands(value, THIN_SPACE)
    };
    format!("{}{}", body, suffix)
}

fn compact(value: u64, unit: u64, label: &str) -> String {
    let whole = value / unit;
    let tenth = (value % unit) * 10 / unit;
    if tenth == 0 {
        format!("{} {}", whole, label)
    } else {
        format!("{},{} {}", whole, tenth, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ' '), "0");
        assert_eq!(group_thousands(1000, ' '), "1 000");
        assert_eq!(group_thousands(250000, ' '), "250 000");
    }

    #[test]
    fn test_format_price_from() {
        assert_eq!(format_price_from(45000), "от 45\u{202F}000 ₽");
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(7, " лет"), "7 лет");
        assert_eq!(format_stat(12_500, ""), "12,5 тыс");
        assert_eq!(format_stat(1_250_000, "+"), "1,2 млн+");
    }
}
