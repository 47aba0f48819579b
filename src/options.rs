use crate::config::{
    DEFAULT_AUTO_TICK, DEFAULT_INDENT, DEFAULT_INDENT_SIZE, DEFAULT_INDENTOR, LoggerConfig,
};
use crate::format::{Style, inspect};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::{fs, path::PathBuf};

/// Overrides for building or extending a logger
///
/// Every field is optional; `None` means "keep the default" on construction
/// and "keep the current value" when extending. Deserializing never fails
/// on a badly typed field, it is simply treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerOptions {
    /// Starting depth, in indentor units
    #[serde(default, deserialize_with = "lenient_count")]
    pub indent: Option<usize>,

    /// Fill repeated to build the pad (default: a single space)
    #[serde(default, deserialize_with = "lenient_indentor")]
    pub indentor: Option<String>,

    /// Depth added for each derived logger (default: 2)
    #[serde(default, alias = "indent_size", deserialize_with = "lenient_count")]
    pub indent_size: Option<usize>,

    /// Whether output calls hand back a deeper logger (default: true)
    #[serde(default, alias = "auto_tick", deserialize_with = "lenient_bool")]
    pub auto_tick: Option<bool>,
}

impl LoggerOptions {
    /// Get indent with default
    pub fn indent(&self) -> usize {
        self.indent.unwrap_or(DEFAULT_INDENT)
    }

    /// Get indentor with default; an empty indentor counts as absent
    pub fn indentor(&self) -> &str {
        self.indentor
            .as_deref()
            .filter(|indentor| !indentor.is_empty())
            .unwrap_or(DEFAULT_INDENTOR)
    }

    /// Get indent_size with default
    pub fn indent_size(&self) -> usize {
        self.indent_size.unwrap_or(DEFAULT_INDENT_SIZE)
    }

    /// Get auto_tick with default
    pub fn auto_tick(&self) -> bool {
        self.auto_tick.unwrap_or(DEFAULT_AUTO_TICK)
    }

    /// Overlay `other` on top of these options, field by field
    pub fn merge(self, other: Self) -> Self {
        Self {
            indent: other.indent.or(self.indent),
            indentor: other.indentor.or(self.indentor),
            indent_size: other.indent_size.or(self.indent_size),
            auto_tick: other.auto_tick.or(self.auto_tick),
        }
    }

    /// Read options from any JSON value; non-objects yield no overrides
    pub fn from_json(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load options from a JSON file, expanding a leading `~`
    pub fn load(path: &str) -> Result<Self> {
        let path = PathBuf::from(&*shellexpand::tilde(path));
        log::debug!("loading logger options from {}", path.display());

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading logger options from {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("parsing logger options in {}", path.display()))?;

        Ok(Self::from_json(value))
    }
}

impl From<&LoggerConfig> for LoggerOptions {
    fn from(config: &LoggerConfig) -> Self {
        Self {
            indent: Some(config.indent()),
            indentor: Some(config.indentor().to_string()),
            indent_size: Some(config.indent_size()),
            auto_tick: Some(config.auto_tick()),
        }
    }
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|count| usize::try_from(count).ok()))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_bool())
}

/// Any truthy value can be an indentor; non-strings are rendered as text
fn lenient_indentor<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let indentor = match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(string) if string.is_empty() => None,
        Value::String(string) => Some(string),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(inspect(&other, Style::plain(), 0)),
    };
    Ok(indentor)
}
