//! Rupiah formatting following the CLDR `id` locale.
//!
//! The pattern is `¤#,##0.00` with `.` as the grouping separator and `,` as
//! the decimal separator. Because the `Rp` symbol ends in a letter, CLDR
//! currency spacing inserts a no-break space before the digits.

const SYMBOL: &str = "Rp";
const SYMBOL_SPACING: char = '\u{a0}';
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// IDR carries two minor digits; trailing zeros are dropped.
const MAX_FRACTION_DIGITS: usize = 2;

/// Format an amount as Indonesian Rupiah, e.g. `Rp 1.500.000.000`.
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}{}", SYMBOL, SYMBOL_SPACING, amount);
    }

    let negative = amount < 0.0;
    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (integer, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(rendered.len() + 8);
    // "-0" is never printed
    if negative && (integer != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(SYMBOL);
    out.push(SYMBOL_SPACING);
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
