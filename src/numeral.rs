//! Chinese numeral rendering
//!
//! Two independent converters:
//! - [`ordinal`]: short section numbers (一, 十五, 二十一) for 0–99
//! - [`legal_amount`]: formal currency amounts (壹佰萬元) with zero
//!   suppression and 萬/億/兆 grouping

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const ORDINAL_DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const LEGAL_DIGITS: [&str; 10] = ["零", "壹", "貳", "參", "肆", "伍", "陸", "柒", "捌", "玖"];
const GROUP_POSITION_UNITS: [&str; 4] = ["", "拾", "佰", "仟"];
const GROUP_UNITS: [&str; 4] = ["", "萬", "億", "兆"];

pub const LEGAL_ZERO: &str = "零元整";
const NEGATIVE_MARKER: &str = "負";
const CURRENCY_MARKER: &str = "元";
const ZERO_MARKER: &str = "零";

/// Render `n` as a short ordinal. Values outside 0–99 fall back to decimal text.
pub fn ordinal(n: i64) -> String {
    match n {
        0..=9 => ORDINAL_DIGITS[n as usize].to_string(),
        10 => "十".to_string(),
        11..=19 => format!("十{}", ORDINAL_DIGITS[(n % 10) as usize]),
        20..=99 => {
            let ones = (n % 10) as usize;
            let mut text = format!("{}十", ORDINAL_DIGITS[(n / 10) as usize]);
            if ones != 0 {
                text.push_str(ORDINAL_DIGITS[ones]);
            }
            text
        }
        _ => n.to_string(),
    }
}

/// Render the integer part of `amount` as a legal amount in words.
///
/// Fractions are dropped. Integer parts beyond the 兆 group (16+ digits) fall
/// back to their decimal digits followed by 元.
pub fn legal_amount(amount: Decimal) -> String {
    if amount.is_zero() {
        return LEGAL_ZERO.to_string();
    }

    let prefix = if amount.is_sign_negative() {
        NEGATIVE_MARKER
    } else {
        ""
    };
    let integer_part = amount.abs().trunc();

    let body = match integer_part.to_u128() {
        Some(0) | None => format!("{}{}", ZERO_MARKER, CURRENCY_MARKER),
        Some(value) => {
            let digits: Vec<u8> = value.to_string().bytes().map(|b| b - b'0').collect();
            if digits.len() > GROUP_UNITS.len() * 4 {
                format!("{}{}", value, CURRENCY_MARKER)
            } else {
                format!("{}{}", spell_digits(&digits), CURRENCY_MARKER)
            }
        }
    };

    format!("{}{}", prefix, body)
}

/// Most-significant-first digit scan. `digits` has no leading zero.
fn spell_digits(digits: &[u8]) -> String {
    let len = digits.len();
    let mut out = String::new();

    for (i, &digit) in digits.iter().enumerate() {
        let position = len - i - 1;
        let unit_index = position % 4;
        let group_index = position / 4;

        if digit == 0 {
            // A zero speaks only when a non-zero digit follows inside the same group.
            let nonzero_follows = digits[i + 1..]
                .iter()
                .take(unit_index)
                .any(|&d| d != 0);
            if i > 0 && !out.ends_with(ZERO_MARKER) && nonzero_follows {
                out.push_str(ZERO_MARKER);
            }
        } else {
            out.push_str(LEGAL_DIGITS[digit as usize]);
            out.push_str(GROUP_POSITION_UNITS[unit_index]);
        }

        if unit_index == 0 && group_index > 0 {
            let group_start = i.saturating_sub(3);
            if digits[group_start..=i].iter().any(|&d| d != 0) {
                out.push_str(GROUP_UNITS[group_index]);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn words(text: &str) -> String {
        legal_amount(Decimal::from_str(text).unwrap())
    }

    #[test]
    fn test_ordinal_single_digits() {
        let expected = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(ordinal(n as i64), *want);
        }
    }

    #[test]
    fn test_ordinal_tens() {
        assert_eq!(ordinal(10), "十");
        assert_eq!(ordinal(15), "十五");
        assert_eq!(ordinal(19), "十九");
        assert_eq!(ordinal(20), "二十");
        assert_eq!(ordinal(21), "二十一");
        assert_eq!(ordinal(99), "九十九");
    }

    #[test]
    fn test_ordinal_fallback_to_decimal_text() {
        assert_eq!(ordinal(100), "100");
        assert_eq!(ordinal(-1), "-1");
        assert_eq!(ordinal(1234), "1234");
    }

    #[test]
    fn test_legal_zero() {
        assert_eq!(words("0"), "零元整");
        assert_eq!(words("0.00"), "零元整");
    }

    #[test]
    fn test_legal_small_values() {
        assert_eq!(words("1"), "壹元");
        assert_eq!(words("10"), "壹拾元");
        assert_eq!(words("15"), "壹拾伍元");
        assert_eq!(words("100"), "壹佰元");
        assert_eq!(words("101"), "壹佰零壹元");
        assert_eq!(words("110"), "壹佰壹拾元");
        assert_eq!(words("1001"), "壹仟零壹元");
        assert_eq!(words("1010"), "壹仟零壹拾元");
    }

    #[test]
    fn test_legal_hundred_has_no_trailing_zero() {
        let text = words("100");
        assert!(text.ends_with("佰元"));
        assert!(!text.contains('零'));
    }

    #[test]
    fn test_legal_group_units() {
        assert_eq!(words("10000"), "壹萬元");
        assert_eq!(words("1000000"), "壹佰萬元");
        assert_eq!(words("100000000"), "壹億元");
        assert_eq!(words("1000000000000"), "壹兆元");
        assert_eq!(words("123456789"), "壹億貳仟參佰肆拾伍萬陸仟柒佰捌拾玖元");
    }

    #[test]
    fn test_legal_zero_suppression_stays_inside_group() {
        // trailing zeros of a group never speak
        assert_eq!(words("10005000"), "壹仟萬伍仟元");
        assert_eq!(words("10050"), "壹萬零伍拾元");
        assert_eq!(words("100010000"), "壹億零壹萬元");
        assert_eq!(words("50000"), "伍萬元");
        assert!(!words("10005000").contains("零零"));
    }

    #[test]
    fn test_legal_single_zero_marker_for_runs() {
        assert_eq!(words("10001"), "壹萬零壹元");
        assert_eq!(words("1000100"), "壹佰萬零壹佰元");
        assert_eq!(words("20030"), "貳萬零參拾元");
        assert_eq!(words("9009"), "玖仟零玖元");
    }

    #[test]
    fn test_legal_drops_fraction() {
        assert_eq!(words("1234.99"), "壹仟貳佰參拾肆元");
        assert_eq!(words("0.5"), "零元");
    }

    #[test]
    fn test_legal_negative() {
        assert_eq!(words("-100"), "負壹佰元");
        assert_eq!(words("-0.4"), "負零元");
    }

    #[test]
    fn test_legal_beyond_trillion_falls_back() {
        assert_eq!(words("12345678901234567"), "12345678901234567元");
        assert_eq!(
            words("1234567890123456"),
            "壹仟貳佰參拾肆兆伍仟陸佰柒拾捌億玖仟零壹拾貳萬參仟肆佰伍拾陸元"
        );
    }
}
