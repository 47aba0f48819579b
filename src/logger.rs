use crate::config::LoggerConfig;
use crate::format::{FormatOptions, Inspector, TextFormatter};
use crate::indent::Indent;
use crate::messages::Messages;
use crate::method::Method;
use crate::options::LoggerOptions;
use crate::output::Output;
use crate::text_input::TextInput;
use fieldwork::Fieldwork;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::{self, Debug, Formatter};
use std::io;
use std::rc::Rc;

/// An indentation-tracking text emitter
///
/// A logger never changes its own depth when it writes. Instead every
/// line-producing call hands back the logger to use next: the receiver
/// itself (`Cow::Borrowed`) when auto-tick is off, or a derived logger one
/// `indent_size` deeper (`Cow::Owned`) when it is on.
///
/// ```
/// use stack_logger::{Buffer, LoggerOptions, Output, StackLogger};
///
/// let out = Buffer::new();
/// let root = StackLogger::new(LoggerOptions {
///     indentor: Some("-".into()),
///     ..Default::default()
/// })
/// .with_output(Output::new(out.clone(), Buffer::new()));
///
/// root.log("x")?.log("y")?;
/// assert_eq!(out.contents(), "x\n--y\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Fieldwork)]
pub struct StackLogger {
    config: LoggerConfig,

    /// Where emitted text goes
    #[field(with)]
    output: Output,

    /// Turns message lists into text
    #[field(with)]
    formatter: Rc<dyn TextFormatter>,
}

impl Debug for StackLogger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackLogger")
            .field("config", &self.config)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

impl Default for StackLogger {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl StackLogger {
    /// Create a root logger writing to the process's stdout and stderr
    pub fn new(options: LoggerOptions) -> Self {
        Self::from_config(LoggerConfig::from_options(&options))
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            output: Output::std(),
            formatter: Rc::new(Inspector::default()),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Current depth, in indentor units
    pub fn indentation(&self) -> usize {
        self.config.indent
    }

    pub fn indentor(&self) -> &str {
        &self.config.indentor
    }

    pub fn indent_size(&self) -> usize {
        self.config.indent_size
    }

    pub fn auto_tick(&self) -> bool {
        self.config.auto_tick
    }

    /// In-place access to this logger's settings
    ///
    /// This is the only way to change an existing logger; derivation always
    /// produces a new one.
    pub fn reconfigure(&mut self) -> Reconfigure<'_> {
        Reconfigure {
            config: &mut self.config,
        }
    }

    /// A new logger with `options` laid over this one's configuration
    pub fn extend(&self, options: &LoggerOptions) -> Self {
        let config = self.config.merged(options);
        log::trace!("extending logger {:?} -> {:?}", self.config, config);
        Self {
            config,
            output: self.output.clone(),
            formatter: Rc::clone(&self.formatter),
        }
    }

    /// A new logger `indent_delta` deeper, one `indent_size` when `None`
    ///
    /// `indent_size_delta` grows the derived logger's step size.
    pub fn tick(&self, indent_delta: Option<usize>, indent_size_delta: Option<usize>) -> Self {
        let indent = indent_delta.unwrap_or(self.config.indent_size);
        let indent_size = indent_size_delta.unwrap_or(0);
        self.extend(&LoggerOptions {
            indent: Some(self.config.indent.saturating_add(indent)),
            indent_size: Some(self.config.indent_size.saturating_add(indent_size)),
            ..Default::default()
        })
    }

    /// Unindented text to stdout without a line end; always returns `self`
    pub fn write(&self, messages: impl Into<Messages>) -> io::Result<Cow<'_, Self>> {
        self.emit(Method::Write, messages)
    }

    /// Indented text to stdout without a line end
    pub fn print(&self, messages: impl Into<Messages>) -> io::Result<Cow<'_, Self>> {
        self.emit(Method::Print, messages)
    }

    /// Indented line to stdout
    pub fn log(&self, messages: impl Into<Messages>) -> io::Result<Cow<'_, Self>> {
        self.emit(Method::Log, messages)
    }

    /// Indented line to stderr
    pub fn warn(&self, messages: impl Into<Messages>) -> io::Result<Cow<'_, Self>> {
        self.emit(Method::Warn, messages)
    }

    /// Same as [`StackLogger::warn`]
    pub fn error(&self, messages: impl Into<Messages>) -> io::Result<Cow<'_, Self>> {
        self.warn(messages)
    }

    /// Run one of the output methods
    pub fn emit(&self, method: Method, messages: impl Into<Messages>) -> io::Result<Cow<'_, Self>> {
        let indent = if method.is_indented() {
            self.config.indent
        } else {
            0
        };

        let mut text = self.get_text(TextInput::indented(Some(indent), messages));
        if method.is_terminated() {
            text.push('\n');
        }
        self.output.emit(method.channel(), &text)?;

        Ok(self.next(method))
    }

    fn next(&self, method: Method) -> Cow<'_, Self> {
        if method.ticks() && self.config.auto_tick {
            Cow::Owned(self.tick(Some(self.config.indent_size), None))
        } else {
            Cow::Borrowed(self)
        }
    }

    /// Build the text an output call would emit, without emitting it
    ///
    /// With a nonzero depth the pad is glued in front of the first message,
    /// which is formatted on its own first; the padded list is then formatted
    /// as a whole, with colors.
    pub fn get_text(&self, input: impl Into<TextInput>) -> String {
        let (indent, messages) = input.into().resolve();
        let indent = indent.unwrap_or(self.config.indent);
        let mut messages = messages.into_vec();

        if indent > 0 {
            let pad = Indent::new(&self.config.indentor, indent);
            let head = match messages.first() {
                Some(first) => self
                    .formatter
                    .format(FormatOptions::plain(), std::slice::from_ref(first)),
                None => String::new(),
            };
            let padded = Value::String(format!("{pad}{head}"));
            match messages.first_mut() {
                Some(first) => *first = padded,
                None => messages.push(padded),
            }
        }

        self.formatter.format(FormatOptions::colored(), &messages)
    }
}

/// Mutable view of a logger's settings
///
/// The combined accessors treat `None` and falsy values (zero, an empty
/// indentor) as "no new value" and return what is stored. The `set_*`
/// methods accept zero.
#[derive(Debug)]
pub struct Reconfigure<'a> {
    config: &'a mut LoggerConfig,
}

impl Reconfigure<'_> {
    pub fn indentation(&mut self, value: Option<usize>) -> usize {
        if let Some(value) = value.filter(|value| *value != 0) {
            self.set_indentation(value);
        }
        self.config.indent
    }

    pub fn indentor(&mut self, value: Option<&str>) -> &str {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            log::debug!("indentor {:?} -> {value:?}", self.config.indentor);
            self.config.indentor = value.to_string();
        }
        &self.config.indentor
    }

    pub fn indent_size(&mut self, value: Option<usize>) -> usize {
        if let Some(value) = value.filter(|value| *value != 0) {
            self.set_indent_size(value);
        }
        self.config.indent_size
    }

    pub fn set_indentation(&mut self, value: usize) -> &mut Self {
        log::debug!("indentation {} -> {value}", self.config.indent);
        self.config.indent = value;
        self
    }

    pub fn set_indent_size(&mut self, value: usize) -> &mut Self {
        log::debug!("indent size {} -> {value}", self.config.indent_size);
        self.config.indent_size = value;
        self
    }
}
