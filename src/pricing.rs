//! Price and rating display helpers.

use crate::config::SITE;

/// Number of star glyphs on every product card
pub const MAX_STARS: usize = 5;

/// Render an amount as `"PKR 12,500"`
pub fn format_price(amount: u32) -> String {
    format!("{} {}", SITE.currency_code, group_digits(amount, SITE.group_separator))
}

/// Insert `separator` between every group of three digits
fn group_digits(amount: u32, separator: char) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// How many of the five stars render filled for `rating`
pub fn filled_stars(rating: f32) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.floor() as usize).min(MAX_STARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12500), "PKR 12,500");
        assert_eq!(format_price(8500), "PKR 8,500");
        assert_eq!(format_price(0), "PKR 0");
    }

    #[test]
    fn test_group_digits_boundaries() {
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1000, ','), "1,000");
        assert_eq!(group_digits(100000, ','), "100,000");
        assert_eq!(group_digits(1234567, ','), "1,234,567");
        assert_eq!(group_digits(u32::MAX, ','), "4,294,967,295");
    }

    #[test]
    fn test_filled_stars() {
        assert_eq!(filled_stars(4.8), 4);
        assert_eq!(filled_stars(4.0), 4);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(0.9), 0);
        assert_eq!(filled_stars(7.5), 5);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(f32::NAN), 0);
    }
}
