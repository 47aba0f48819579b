use crate::channel::Channel;
use clap::ValueEnum;
use strum::{Display, VariantArray};

/// The output operations a [`StackLogger`](crate::StackLogger) offers
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, ValueEnum, Display, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Method {
    /// Raw text: no indentation, no line end, never ticks
    Write,
    /// Indented text without a line end
    Print,
    /// Indented line on stdout
    Log,
    /// Indented line on stderr
    Warn,
    /// Same as [`Method::Warn`]
    Error,
}

impl Default for Method {
    fn default() -> Self {
        Self::Log
    }
}

impl Method {
    pub fn channel(self) -> Channel {
        match self {
            Method::Write | Method::Print | Method::Log => Channel::Stdout,
            Method::Warn | Method::Error => Channel::Stderr,
        }
    }

    /// Whether the logger's indentation is applied
    pub fn is_indented(self) -> bool {
        self != Method::Write
    }

    /// Whether a single `\n` is appended to the text
    pub fn is_terminated(self) -> bool {
        matches!(self, Method::Log | Method::Warn | Method::Error)
    }

    /// Whether an auto-ticking logger hands back a derived logger
    pub fn ticks(self) -> bool {
        self != Method::Write
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_behaves_like_warn() {
        assert_eq!(Method::Error.channel(), Method::Warn.channel());
        assert_eq!(Method::Error.is_indented(), Method::Warn.is_indented());
        assert_eq!(Method::Error.is_terminated(), Method::Warn.is_terminated());
        assert_eq!(Method::Error.ticks(), Method::Warn.ticks());
    }

    #[test]
    fn only_line_methods_terminate() {
        let terminated: Vec<_> = Method::VARIANTS
            .iter()
            .filter(|method| method.is_terminated())
            .map(ToString::to_string)
            .collect();
        assert_eq!(terminated, ["log", "warn", "error"]);
    }

    #[test]
    fn write_is_the_raw_method() {
        assert!(!Method::Write.is_indented());
        assert!(!Method::Write.ticks());
        assert_eq!(Method::from_str("write", false), Ok(Method::Write));
        assert_eq!(Method::from_str("WARN", true), Ok(Method::Warn));
        assert!(Method::from_str("shout", false).is_err());
        assert_eq!(Method::Print.channel(), Channel::Stdout);
    }
}
