use anyhow::Result;
use clap::{ArgAction, Parser};
use stack_logger::{LoggerOptions, Messages, Method, StackLogger, Value};
use std::io;

/// Print messages as an indented staircase
#[derive(Debug, Parser)]
#[command(name = "stack-logger", version, about)]
pub(crate) struct Cli {
    /// JSON file with logger options (indent, indentSize, indentor, autoTick)
    #[arg(long, env = "STACK_LOGGER_CONFIG")]
    pub(crate) config: Option<String>,

    /// Starting depth, in indentor units
    #[arg(long)]
    pub(crate) indent: Option<usize>,

    /// Depth added after each message
    #[arg(long)]
    pub(crate) indent_size: Option<usize>,

    /// Fill repeated to build the pad
    #[arg(long)]
    pub(crate) indentor: Option<String>,

    /// Keep every message at the starting depth
    #[arg(long, action = ArgAction::SetTrue)]
    pub(crate) no_auto_tick: bool,

    /// Output operation used for each message
    #[arg(long, value_enum, default_value_t)]
    pub(crate) method: Method,

    /// Parse each message as JSON, falling back to plain text
    #[arg(long, action = ArgAction::SetTrue)]
    pub(crate) json: bool,

    /// Messages to emit; read from stdin, one per line, when omitted
    pub(crate) messages: Vec<String>,
}

impl Cli {
    /// Options from the config file, overridden by flags
    pub(crate) fn options(&self) -> Result<LoggerOptions> {
        let from_file = match &self.config {
            Some(path) => LoggerOptions::load(path)?,
            None => LoggerOptions::default(),
        };

        Ok(from_file.merge(LoggerOptions {
            indent: self.indent,
            indentor: self.indentor.clone(),
            indent_size: self.indent_size,
            auto_tick: self.no_auto_tick.then_some(false),
        }))
    }

    fn message(&self, text: &str) -> Messages {
        if self.json
            && let Ok(value) = serde_json::from_str::<Value>(text)
        {
            return Messages::from(value);
        }
        Messages::from(text)
    }
}

/// Emit each line through the logger the previous line handed back
pub(crate) fn run(
    cli: &Cli,
    logger: StackLogger,
    lines: impl IntoIterator<Item = io::Result<String>>,
) -> Result<()> {
    let mut current = logger;
    for line in lines {
        let line = line?;
        current = current.emit(cli.method, cli.message(&line))?.into_owned();
    }
    log::debug!("finished at depth {}", current.indentation());
    Ok(())
}
