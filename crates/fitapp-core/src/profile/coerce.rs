//! Lenient text-to-number coercion shared by the questionnaire and the
//! profile edit form.
//!
//! Parsing follows prefix semantics: leading whitespace is skipped, an
//! optional sign and the longest run of digits are consumed, and anything
//! after that is ignored (`"72kg"` parses as 72). Input with no leading digits
//! does not parse.
//!
//! The `_or_zero` variants map unparsable input to zero instead of rejecting
//! it. A typo therefore silently resets a field to 0. That is the product
//! behaviour the onboarding form has always had and the tests pin it.

/// Parse the leading integer of `input`.
///
/// Values beyond the `i64` range saturate. A decimal point ends the number,
/// so `"12.7"` yields 12.
pub fn parse_int(input: &str) -> Option<i64> {
    let (negative, rest) = split_sign(input.trim_start());
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits.bytes() {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    Some(value)
}

/// Parse the leading decimal number of `input`, with optional fraction and
/// exponent.
pub fn parse_float(input: &str) -> Option<f64> {
    let (negative, rest) = split_sign(input.trim_start());

    let int_part = leading_digits(rest);
    let mut tail = &rest[int_part.len()..];

    let mut frac_part = "";
    if let Some(after_dot) = tail.strip_prefix('.') {
        frac_part = leading_digits(after_dot);
        if !int_part.is_empty() || !frac_part.is_empty() {
            tail = &after_dot[frac_part.len()..];
        }
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(rest.len() + 2);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }

    // An exponent only counts when at least one digit follows it.
    if let Some(exp) = tail.strip_prefix(|c: char| c == 'e' || c == 'E') {
        let (exp_negative, exp_rest) = split_sign(exp);
        let exp_digits = leading_digits(exp_rest);
        if !exp_digits.is_empty() {
            normalized.push('e');
            if exp_negative {
                normalized.push('-');
            }
            normalized.push_str(exp_digits);
        }
    }

    normalized.parse::<f64>().ok()
}

/// [`parse_int`] with unparsable or empty input mapped to 0.
pub fn parse_int_or_zero(input: &str) -> i64 {
    parse_int(input).unwrap_or(0)
}

/// [`parse_float`] with unparsable or empty input mapped to 0.
pub fn parse_float_or_zero(input: &str) -> f64 {
    match parse_float(input) {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Uppercase the first character for display (`"beginner"` -> `"Beginner"`).
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    &s[..end]
}
