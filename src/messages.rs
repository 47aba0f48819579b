use serde_json::Value;

/// An ordered list of values handed to the text formatter
///
/// Anything that is not already a list is coerced into a one-element list,
/// so `"hi"`, `["a", "b"]` and `messages!["%s=%d", "n", 3]` are all accepted
/// by the output methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages(Vec<Value>);

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }
}

impl From<Vec<Value>> for Messages {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl From<Value> for Messages {
    fn from(value: Value) -> Self {
        Self(vec![value])
    }
}

impl From<&str> for Messages {
    fn from(text: &str) -> Self {
        Self(vec![Value::from(text)])
    }
}

impl From<String> for Messages {
    fn from(text: String) -> Self {
        Self(vec![Value::from(text)])
    }
}

impl From<&String> for Messages {
    fn from(text: &String) -> Self {
        Self(vec![Value::from(text.as_str())])
    }
}

impl<const N: usize> From<[&str; N]> for Messages {
    fn from(texts: [&str; N]) -> Self {
        Self(texts.into_iter().map(Value::from).collect())
    }
}

impl<const N: usize> From<[Value; N]> for Messages {
    fn from(values: [Value; N]) -> Self {
        Self(values.into())
    }
}

impl FromIterator<Value> for Messages {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Messages {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Build [`Messages`] from values of mixed types
///
/// ```
/// use stack_logger::messages;
/// let msgs = messages!["%s has %d items", "cart", 3];
/// assert_eq!(msgs.len(), 3);
/// ```
#[macro_export]
macro_rules! messages {
    () => {
        $crate::Messages::new()
    };
    ($($message:expr),+ $(,)?) => {
        $crate::Messages::from(vec![$($crate::Value::from($message)),+])
    };
}
