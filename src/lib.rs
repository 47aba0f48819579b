//! Indented, stacking console output.
//!
//! A [`StackLogger`] writes formatted messages behind a pad of repeated
//! indentor units. Line-producing calls return the logger to use next, which
//! by default sits one step deeper, so chained calls form a staircase:
//!
//! ```no_run
//! use stack_logger::{StackLogger, messages};
//!
//! let root = StackLogger::default();
//! let step = root.log("building")?;
//! step.log(messages!["%d crates", 12])?;
//! root.warn("done with warnings")?;
//! # Ok::<(), std::io::Error>(())
//! ```

mod channel;
mod config;
mod format;
mod indent;
mod logger;
mod messages;
mod method;
mod options;
mod output;
mod text_input;

pub use channel::Channel;
pub use config::LoggerConfig;
pub use format::{FormatOptions, Inspector, TextFormatter};
pub use logger::{Reconfigure, StackLogger};
pub use messages::Messages;
pub use method::Method;
pub use options::LoggerOptions;
pub use output::{Buffer, Output};
pub use serde_json::Value;
pub use text_input::{TextInput, TextRequest};
