use crate::channel::Channel;
use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::io::{self, Write};
use std::rc::Rc;

type Sink = Rc<RefCell<dyn Write>>;

/// The pair of writers a logger emits to
///
/// Clones share the same writers, so every logger derived from a root writes
/// to the root's streams.
#[derive(Clone)]
pub struct Output {
    stdout: Sink,
    stderr: Sink,
}

impl Debug for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("stdout", &Rc::as_ptr(&self.stdout))
            .field("stderr", &Rc::as_ptr(&self.stderr))
            .finish()
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::std()
    }
}

impl Output {
    /// The process's standard output and standard error
    pub fn std() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    pub fn new(stdout: impl Write + 'static, stderr: impl Write + 'static) -> Self {
        Self {
            stdout: Rc::new(RefCell::new(stdout)),
            stderr: Rc::new(RefCell::new(stderr)),
        }
    }

    /// Write all of `text` to the channel's writer and flush it
    pub fn emit(&self, channel: Channel, text: &str) -> io::Result<()> {
        let sink = match channel {
            Channel::Stdout => &self.stdout,
            Channel::Stderr => &self.stderr,
        };
        log::trace!("emitting {} bytes to {channel}", text.len());
        let mut sink = sink.borrow_mut();
        sink.write_all(text.as_bytes())?;
        sink.flush()
    }
}

/// A shared in-memory writer
#[derive(Debug, Clone, Default)]
pub struct Buffer(Rc<RefCell<Vec<u8>>>);

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    /// Drain the buffer, returning what it held
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
