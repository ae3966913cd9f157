/// Shared formatting utilities for the UI layer.
///
/// All functions accept ISO-8601 date strings (e.g. "2024-02-15") and
/// produce human-readable output without external crate dependencies.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Feb 15, 2024" (date-only, human-readable).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

/// Format two ISO date strings as "Feb 15, 2024 - Feb 22, 2024".
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_date_human(start), format_date_human(end))
}

/// Format a price as whole US dollars, e.g. "$1299".
pub fn format_price(price: f64) -> String {
    format!("${price:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_date_with_abbreviated_month() {
        assert_eq!(format_date_human("2024-02-15"), "Feb 15, 2024");
        assert_eq!(format_date_human("2024-12-01"), "Dec 1, 2024");
    }

    #[test]
    fn falls_back_for_unparseable_month() {
        assert_eq!(format_date_human("2024-xx-15"), "2024-xx-15");
    }

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(format_date_human("someday"), "someday");
    }

    #[test]
    fn formats_a_date_range() {
        assert_eq!(
            format_date_range("2024-03-10", "2024-03-17"),
            "Mar 10, 2024 - Mar 17, 2024"
        );
    }

    #[test]
    fn formats_whole_dollar_prices() {
        assert_eq!(format_price(1299.0), "$1299");
        assert_eq!(format_price(899.0), "$899");
    }
}
