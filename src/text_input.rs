use crate::messages::Messages;

/// Indentation and messages bundled as one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRequest {
    /// Depth to indent by; the logger's own depth when `None`
    pub indent: Option<usize>,
    pub messages: Messages,
}

/// The call shapes [`StackLogger::get_text`](crate::StackLogger::get_text) accepts
#[derive(Debug, Clone, PartialEq)]
pub enum TextInput {
    /// A record carrying both parts
    Record(TextRequest),
    /// Messages first, indentation second
    Messages {
        messages: Messages,
        indent: Option<usize>,
    },
    /// A single text value, indentation second
    Text { text: String, indent: Option<usize> },
    /// Indentation first, messages second
    Indented {
        indent: Option<usize>,
        messages: Messages,
    },
}

impl TextInput {
    pub fn record(request: TextRequest) -> Self {
        Self::Record(request)
    }

    pub fn messages(messages: impl Into<Messages>, indent: Option<usize>) -> Self {
        Self::Messages {
            messages: messages.into(),
            indent,
        }
    }

    pub fn text(text: impl Into<String>, indent: Option<usize>) -> Self {
        Self::Text {
            text: text.into(),
            indent,
        }
    }

    pub fn indented(indent: Option<usize>, messages: impl Into<Messages>) -> Self {
        Self::Indented {
            indent,
            messages: messages.into(),
        }
    }

    /// Flatten any shape into `(indent, messages)`
    pub(crate) fn resolve(self) -> (Option<usize>, Messages) {
        match self {
            Self::Record(TextRequest { indent, messages })
            | Self::Messages { messages, indent }
            | Self::Indented { indent, messages } => (indent, messages),
            Self::Text { text, indent } => (indent, Messages::from(text)),
        }
    }
}

impl From<TextRequest> for TextInput {
    fn from(request: TextRequest) -> Self {
        Self::Record(request)
    }
}

impl From<Messages> for TextInput {
    fn from(messages: Messages) -> Self {
        Self::Messages {
            messages,
            indent: None,
        }
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        Self::text(text, None)
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        Self::text(text, None)
    }
}

impl From<usize> for TextInput {
    fn from(indent: usize) -> Self {
        Self::indented(Some(indent), Messages::new())
    }
}
