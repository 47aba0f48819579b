use super::inspect::{DEFAULT_DEPTH, Style, float_text, inspect, number_text};
use super::join;
use serde_json::Value;

/// Substitute `%` directives in `template` from `args`, then append the rest
pub(super) fn expand(template: &str, args: &[Value], style: Style) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut consumed = 0;
    let mut last = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'%' {
            i += 1;
            let directive = bytes[i];
            if directive == b'%' {
                out.push_str(&template[last..i]);
                last = i + 1;
            } else if let Some(arg) = args.get(consumed)
                && let Some(text) = substitution(directive, arg, style)
            {
                consumed += 1;
                out.push_str(&template[last..i - 1]);
                out.push_str(&text);
                last = i + 1;
            }
        }
        i += 1;
    }

    if last == 0 {
        let mut text = template.to_string();
        if !args.is_empty() {
            text.push(' ');
            text.push_str(&join(args, style));
        }
        return text;
    }

    out.push_str(&template[last..]);
    for arg in &args[consumed..] {
        out.push(' ');
        out.push_str(&join(std::slice::from_ref(arg), style));
    }
    out
}

fn substitution(directive: u8, arg: &Value, style: Style) -> Option<String> {
    let text = match directive {
        b's' => match arg {
            Value::String(string) => string.clone(),
            Value::Number(number) => number_text(number),
            Value::Array(_) | Value::Object(_) => inspect(arg, Style::plain(), 0),
            other => other.to_string(),
        },
        b'j' => arg.to_string(),
        b'd' => float_text(to_number(arg)),
        b'i' => float_text(leading_number(&number_source(arg), false)),
        b'f' => float_text(leading_number(&number_source(arg), true)),
        b'O' => inspect(arg, style, DEFAULT_DEPTH),
        b'o' => inspect(arg, style, 4),
        b'c' => String::new(),
        _ => return None,
    };
    Some(text)
}

/// Numeric coercion used by `%d`
fn to_number(arg: &Value) -> f64 {
    match arg {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::Bool(boolean) => f64::from(u8::from(*boolean)),
        Value::Null => 0.0,
        Value::String(string) => string_to_number(string.trim()),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Whole-string numeric parse: decimal, `Infinity`, or an unsigned `0x`/`0o`/`0b` literal
fn string_to_number(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let radix = match unsigned.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &unsigned[2..];
        if unsigned.len() != text.len()
            || digits.is_empty()
            || !digits.chars().all(|c| c.is_digit(radix))
        {
            return f64::NAN;
        }
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |total, digit| total * f64::from(radix) + f64::from(digit));
    }

    if text.bytes().all(|b| b.is_ascii_digit() || b"+-.eE".contains(&b)) {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// The text `%i` and `%f` parse a number prefix from
fn number_source(arg: &Value) -> String {
    match arg {
        Value::String(string) => string.clone(),
        Value::Number(number) => number_text(number),
        _ => String::new(),
    }
}

/// Parse the longest numeric prefix, `NaN` when there is none
fn leading_number(text: &str, fraction: bool) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digit_run = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let sign_end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digit_run(sign_end);
    let mut has_digits = end > sign_end;

    if fraction {
        if bytes.get(end) == Some(&b'.') {
            let fraction_end = digit_run(end + 1);
            if has_digits || fraction_end > end + 1 {
                has_digits = true;
                end = fraction_end;
            }
        }

        if has_digits && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let exponent_start = end + 1 + usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
            let exponent_end = digit_run(exponent_start);
            if exponent_end > exponent_start {
                end = exponent_end;
            }
        }

        if !has_digits && text[sign_end..].starts_with("Infinity") {
            return if text.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
    }

    if !has_digits {
        return f64::NAN;
    }

    text[..end].parse().unwrap_or(f64::NAN)
}
