use serde_json::Value;

mod directives;
mod inspect;

pub(crate) use inspect::{Style, inspect};

/// Options passed to a [`TextFormatter`] for one call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Whether non-string values may be rendered with ANSI colors
    pub colors: bool,
}

impl FormatOptions {
    pub fn plain() -> Self {
        Self { colors: false }
    }

    pub fn colored() -> Self {
        Self { colors: true }
    }
}

/// Converts a list of values into a single display string
pub trait TextFormatter {
    fn format(&self, options: FormatOptions, messages: &[Value]) -> String;
}

/// The default formatter
///
/// A string first message may carry printf-style directives (`%s`, `%d`,
/// `%i`, `%f`, `%j`, `%o`, `%O`, `%c`, `%%`) that consume the following
/// messages. Whatever is left over is appended with single spaces: strings
/// verbatim, everything else inspected.
///
/// Colors are only used when both the call asks for them and the inspector
/// allows them; `colored` additionally drops them when the terminal (or
/// `NO_COLOR`) says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspector {
    colors: bool,
}

impl Default for Inspector {
    fn default() -> Self {
        Self { colors: true }
    }
}

impl Inspector {
    /// An inspector that never emits escape codes
    pub fn plain() -> Self {
        Self { colors: false }
    }
}

impl TextFormatter for Inspector {
    fn format(&self, options: FormatOptions, messages: &[Value]) -> String {
        let style = Style::new(options.colors && self.colors);

        match messages.split_first() {
            None => String::new(),
            Some((Value::String(template), [])) => template.clone(),
            Some((Value::String(template), rest)) => directives::expand(template, rest, style),
            Some(_) => join(messages, style),
        }
    }
}

/// Space-separated rendering: strings verbatim, other values inspected
pub(crate) fn join(values: &[Value], style: Style) -> String {
    let mut text = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            text.push(' ');
        }
        match value {
            Value::String(string) => text.push_str(string),
            other => text.push_str(&inspect(other, style, inspect::DEFAULT_DEPTH)),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;

    fn plain(messages: crate::Messages) -> String {
        Inspector::plain().format(FormatOptions::plain(), messages.as_slice())
    }

    #[test]
    fn lone_string_is_verbatim() {
        assert_eq!(plain(messages!["100%% %s"]), "100%% %s");
        assert_eq!(plain(messages![]), "");
    }

    #[test]
    fn directives_consume_messages() {
        insta::assert_snapshot!(
            plain(messages!["%s scored %d (%i%%) in %f", "ana", 41.5, "97.8%", "2.5s"]),
            @"ana scored 41.5 (97%) in 2.5"
        );
        insta::assert_snapshot!(plain(messages!["%j|%O", serde_json::json!({"a": [1, "b"]}), serde_json::json!({"a": [1, "b"]})]), @r#"{"a":[1,"b"]}|{ a: [ 1, 'b' ] }"#);
        assert_eq!(plain(messages!["%cstyled", "color: red"]), "styled");
    }

    #[test]
    fn leftover_messages_are_joined() {
        assert_eq!(plain(messages!["a", "b", 3, true, ()]), "a b 3 true null");
        assert_eq!(plain(messages!["%s", "x", "y"]), "x y");
        assert_eq!(plain(messages![1, "a"]), "1 a");
    }

    #[test]
    fn missing_arguments_leave_directives() {
        assert_eq!(plain(messages!["%s and %s", "one"]), "one and %s");
        assert_eq!(plain(messages!["%d%% %q", 5]), "5% %q");
    }

    #[test]
    fn uncolored_unless_both_sides_agree() {
        let values = messages![42];
        assert_eq!(
            Inspector::plain().format(FormatOptions::colored(), values.as_slice()),
            "42"
        );
        assert_eq!(
            Inspector::default().format(FormatOptions::plain(), values.as_slice()),
            "42"
        );
    }
}
