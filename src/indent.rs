use std::fmt::{self, Formatter};

/// The leading pad: an indentor repeated `depth` times
pub(crate) struct Indent<'a>(&'a str, usize);

impl<'a> Indent<'a> {
    pub(crate) fn new(indentor: &'a str, depth: usize) -> Self {
        Self(indentor, depth)
    }
}

impl fmt::Display for Indent<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for _ in 0..self.1 {
            f.write_str(self.0)?;
        }

        Ok(())
    }
}
