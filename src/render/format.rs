use rust_decimal::{Decimal, RoundingStrategy};

/// Format a USD price with en-US digit grouping.
///
/// Fraction digits are capped by magnitude: none at or above 1000, two in
/// `[1, 1000)`, four below 1. Halves round away from zero and trailing
/// fractional zeros are dropped.
pub fn format_price(price: f64) -> String {
    let max_fraction = if price >= 1000.0 {
        0
    } else if price >= 1.0 {
        2
    } else {
        4
    };
    format_grouped(price, max_fraction)
}

/// Absolute percent change with two decimals, e.g. `2.35%`.
pub fn format_change(change: f64) -> String {
    format!("{:.2}%", change.abs())
}

/// Two-decimal dollar amount without grouping, e.g. `$21683.55`.
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Signed two-decimal dollar amount, e.g. `+$11683.55` or `-$12.00`.
pub fn format_signed_usd(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-{}", format_usd(amount.abs()))
    } else {
        format!("+{}", format_usd(amount))
    }
}

fn format_grouped(value: f64, max_fraction: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = round_half_away(value.abs(), max_fraction);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value.is_sign_negative() && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Rounds the exact binary value of `value`, so only true ties go up.
fn round_half_away(value: f64, max_fraction: usize) -> String {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        // outside Decimal's range; nothing that large or small is a real quote
        return format!("{:.*}", max_fraction, value);
    };

    exact
        .round_dp_with_strategy(max_fraction as u32, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_boundaries() {
        assert_eq!(format_price(999.999), "1,000");
        assert_eq!(format_price(1000.0), "1,000");
        assert_eq!(format_price(1.0), "1");
        assert_eq!(format_price(0.9999), "0.9999");
    }

    #[test]
    fn price_fraction_caps() {
        assert_eq!(format_price(67_234.56), "67,235");
        assert_eq!(format_price(1_234_567.2), "1,234,567");
        assert_eq!(format_price(142.3), "142.3");
        assert_eq!(format_price(3.14159), "3.14");
        assert_eq!(format_price(0.123_456), "0.1235");
        assert_eq!(format_price(0.5), "0.5");
        assert_eq!(format_price(0.000_01), "0");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(format_price(67_234.5), "67,235");
        assert_eq!(format_price(1_000.5), "1,001");
        assert_eq!(format_price(1.125), "1.13");
        assert_eq!(format_price(0.031_25), "0.0313");
        // 1.005 is stored just below the tie, so it rounds down
        assert_eq!(format_price(1.005), "1");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }

    #[test]
    fn change_is_absolute() {
        assert_eq!(format_change(2.3456), "2.35%");
        assert_eq!(format_change(-1.2), "1.20%");
    }

    #[test]
    fn usd_amounts() {
        assert_eq!(format_usd(Decimal::new(2_168_355, 2)), "$21683.55");
        assert_eq!(format_usd(Decimal::new(21_683, 0)), "$21683.00");
        assert_eq!(format_signed_usd(Decimal::new(1_168_355, 2)), "+$11683.55");
        assert_eq!(format_signed_usd(Decimal::new(-1_200, 2)), "-$12.00");
        assert_eq!(format_signed_usd(Decimal::ZERO), "+$0.00");
    }
}
