//! Dollar formatting for transcript text and workbook cells.

/// Format a whole-dollar amount with thousands separators: `1234567` → `$1,234,567`.
#[must_use]
pub fn usd(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Thousands-separated count without a currency sign: `3500` → `3,500`.
#[must_use]
pub fn grouped(amount: i64) -> String {
    let formatted = usd(amount);
    formatted.replace('$', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_separators() {
        assert_eq!(usd(0), "$0");
        assert_eq!(usd(950), "$950");
        assert_eq!(usd(3500), "$3,500");
        assert_eq!(usd(647_500), "$647,500");
        assert_eq!(usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(usd(-3000), "-$3,000");
    }

    #[test]
    fn grouped_drops_the_sign() {
        assert_eq!(grouped(3500), "3,500");
    }
}
