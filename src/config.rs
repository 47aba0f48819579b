use crate::options::LoggerOptions;
use fieldwork::Fieldwork;

pub(crate) const DEFAULT_INDENT: usize = 0;
pub(crate) const DEFAULT_INDENT_SIZE: usize = 2;
pub(crate) const DEFAULT_INDENTOR: &str = " ";
pub(crate) const DEFAULT_AUTO_TICK: bool = true;

/// The configuration a logger was built with
#[derive(Debug, Clone, PartialEq, Eq, Fieldwork)]
#[fieldwork(get)]
pub struct LoggerConfig {
    /// Depth, in indentor units, of text emitted by this logger
    #[field(copy)]
    pub(crate) indent: usize,
    /// Depth added when deriving the next logger
    #[field(copy)]
    pub(crate) indent_size: usize,
    /// Fill repeated `indent` times in front of the first message
    pub(crate) indentor: String,
    /// Whether line-producing output hands back a deeper logger
    #[field(copy)]
    pub(crate) auto_tick: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            indent_size: DEFAULT_INDENT_SIZE,
            indentor: DEFAULT_INDENTOR.to_string(),
            auto_tick: DEFAULT_AUTO_TICK,
        }
    }
}

impl LoggerConfig {
    /// Build a configuration from overrides, defaulting whatever is absent
    pub fn from_options(options: &LoggerOptions) -> Self {
        Self {
            indent: options.indent(),
            indent_size: options.indent_size(),
            indentor: options.indentor().to_string(),
            auto_tick: options.auto_tick(),
        }
    }

    /// This configuration with every field present in `options` replaced
    pub fn merged(&self, options: &LoggerOptions) -> Self {
        Self::from_options(&LoggerOptions::from(self).merge(options.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LoggerConfig::from_options(&LoggerOptions::default());
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.indent(), 0);
        assert_eq!(config.indent_size(), 2);
        assert_eq!(config.indentor(), " ");
        assert!(config.auto_tick());
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let base = LoggerConfig::from_options(&LoggerOptions {
            indent: Some(4),
            indentor: Some("-".into()),
            auto_tick: Some(false),
            ..Default::default()
        });

        let merged = base.merged(&LoggerOptions {
            indent_size: Some(0),
            ..Default::default()
        });

        assert_eq!(merged.indent(), 4);
        assert_eq!(merged.indent_size(), 0);
        assert_eq!(merged.indentor(), "-");
        assert!(!merged.auto_tick());
        assert_eq!(base.merged(&LoggerOptions::default()), base);
    }

    #[test]
    fn empty_indentor_falls_back_to_default() {
        let base = LoggerConfig::from_options(&LoggerOptions {
            indentor: Some("*".into()),
            ..Default::default()
        });
        let merged = base.merged(&LoggerOptions {
            indentor: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(merged.indentor(), " ");
    }
}
