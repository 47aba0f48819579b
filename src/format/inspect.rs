use colored::Colorize;
use serde_json::{Map, Number, Value};

/// Nesting levels expanded before collapsing to `[Array]` / `[Object]`
pub(crate) const DEFAULT_DEPTH: usize = 2;

/// Whether inspected values get ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Style {
    colors: bool,
}

impl Style {
    pub(crate) fn new(colors: bool) -> Self {
        Self { colors }
    }

    pub(crate) fn plain() -> Self {
        Self { colors: false }
    }

    fn literal(self, text: String) -> String {
        if self.colors {
            text.yellow().to_string()
        } else {
            text
        }
    }

    fn string(self, text: String) -> String {
        if self.colors {
            text.green().to_string()
        } else {
            text
        }
    }

    fn null(self, text: String) -> String {
        if self.colors {
            text.bold().to_string()
        } else {
            text
        }
    }

    fn special(self, text: String) -> String {
        if self.colors {
            text.cyan().to_string()
        } else {
            text
        }
    }
}

/// Render a value for display, expanding at most `depth` nested levels
pub(crate) fn inspect(value: &Value, style: Style, depth: usize) -> String {
    let mut text = String::new();
    inspect_into(&mut text, value, style, depth, 0);
    text
}

fn inspect_into(out: &mut String, value: &Value, style: Style, depth: usize, level: usize) {
    match value {
        Value::Null => out.push_str(&style.null("null".into())),
        Value::Bool(boolean) => out.push_str(&style.literal(boolean.to_string())),
        Value::Number(number) => out.push_str(&style.literal(number_text(number))),
        Value::String(string) => out.push_str(&style.string(quote(string))),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(_) if level > depth => out.push_str(&style.special("[Array]".into())),
        Value::Array(items) => {
            out.push_str("[ ");
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                inspect_into(out, item, style, depth, level + 1);
            }
            out.push_str(" ]");
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(_) if level > depth => out.push_str(&style.special("[Object]".into())),
        Value::Object(map) => inspect_object(out, map, style, depth, level),
    }
}

fn inspect_object(
    out: &mut String,
    map: &Map<String, Value>,
    style: Style,
    depth: usize,
    level: usize,
) {
    out.push_str("{ ");
    for (index, (key, value)) in map.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        if is_identifier(key) {
            out.push_str(key);
        } else {
            out.push_str(&style.string(quote(key)));
        }
        out.push_str(": ");
        inspect_into(out, value, style, depth, level + 1);
    }
    out.push_str(" }");
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single quotes unless the text contains them, then double quotes, then backticks
fn quote(text: &str) -> String {
    let delimiter = if !text.contains('\'') {
        '\''
    } else if !text.contains('"') {
        '"'
    } else if !text.contains('`') {
        '`'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(delimiter);
    for c in text.chars() {
        match c {
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\\' => quoted.push_str("\\\\"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c.is_control() => quoted.push_str(&format!("\\x{:02X}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

pub(crate) fn number_text(number: &Number) -> String {
    if let Some(integer) = number.as_i64() {
        integer.to_string()
    } else if let Some(unsigned) = number.as_u64() {
        unsigned.to_string()
    } else {
        float_text(number.as_f64().unwrap_or(f64::NAN))
    }
}

pub(crate) fn float_text(number: f64) -> String {
    if number.is_nan() {
        "NaN".into()
    } else if number.is_infinite() {
        let text = if number > 0.0 { "Infinity" } else { "-Infinity" };
        text.into()
    } else if number.abs() >= 1e21 || (number != 0.0 && number.abs() < 1e-6) {
        let text = format!("{number:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        number.to_string()
    }
}
