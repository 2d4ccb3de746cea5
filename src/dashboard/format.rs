//! Number formatting helpers

/// Widest bar `bar` will draw
pub const MAX_BAR_WIDTH: usize = 200;

/// Format dollars as thousands with one decimal: `45230.0` -> `$45.2K`
pub fn format_thousands(value: f64, currency: &str) -> String {
    format!("{}{:.1}K", currency, value / 1000.0)
}

/// Format an integer with thousands separators: `12459` -> `12,459`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Horizontal bar for a value relative to `max`, at most [`MAX_BAR_WIDTH`] wide
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let width = width.min(MAX_BAR_WIDTH);
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(45230.0, "$"), "$45.2K");
        assert_eq!(format_thousands(999.0, "$"), "$1.0K");
        assert_eq!(format_thousands(127_000.0, "€"), "€127.0K");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(980), "980");
        assert_eq!(format_count(12459), "12,459");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(5.0, 10.0, 4), "██░░");
        assert_eq!(bar(20.0, 10.0, 3), "███");
        assert_eq!(bar(1.0, 0.0, 2), "░░");
        assert_eq!(bar(0.0, 10.0, 0), "");
    }

    #[test]
    fn test_bar_width_is_capped() {
        assert_eq!(bar(1.0, 1.0, usize::MAX).chars().count(), MAX_BAR_WIDTH);
        assert_eq!(bar(0.0, 1.0, MAX_BAR_WIDTH + 1).chars().count(), MAX_BAR_WIDTH);
    }
}
