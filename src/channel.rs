use strum::Display;

/// Which process stream a line of output is written to
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Stdout,
    Stderr,
}
