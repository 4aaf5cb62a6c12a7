// File: crates/pricing-core/src/format.rs
// Summary: USD currency formatting with two decimals and digit grouping.

/// Format `amount` as `$1,234.50`. Negative amounts get a leading minus
/// (`-$3.10`); NaN and infinities render as `n/a`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // -0.001 rounds to 0.00; don't print "-$0.00"
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
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
