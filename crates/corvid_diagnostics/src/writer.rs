//! Output sinks for formatted diagnostics.

use crate::kind::DiagnosticKind;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// The logical sink a line of output goes to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WriterKind {
    /// Errors.
    Error,
    /// Warnings.
    Warning,
    /// Notes and informational output.
    Notice,
}

impl WriterKind {
    /// The sink for diagnostics of `kind`.
    pub fn for_kind(kind: DiagnosticKind) -> Self {
        match kind {
            DiagnosticKind::Error => WriterKind::Error,
            DiagnosticKind::Warning => WriterKind::Warning,
            DiagnosticKind::Note | DiagnosticKind::Fragment => WriterKind::Notice,
        }
    }
}

/// The three independently flushable output streams of a log.
pub struct LogWriters {
    error: Box<dyn Write + Send>,
    warning: Box<dyn Write + Send>,
    notice: Box<dyn Write + Send>,
}

impl LogWriters {
    /// Creates writers from three streams.
    pub fn new(
        error: Box<dyn Write + Send>,
        warning: Box<dyn Write + Send>,
        notice: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            error,
            warning,
            notice,
        }
    }

    /// All three streams go to standard error.
    pub fn stderr() -> Self {
        Self::new(
            Box::new(io::stderr()),
            Box::new(io::stderr()),
            Box::new(io::stderr()),
        )
    }

    /// All three streams go to clones of one writer.
    pub fn uniform<W: Write + Clone + Send + 'static>(writer: W) -> Self {
        Self::new(
            Box::new(writer.clone()),
            Box::new(writer.clone()),
            Box::new(writer),
        )
    }

    /// The stream for `kind`.
    pub fn get(&mut self, kind: WriterKind) -> &mut dyn Write {
        match kind {
            WriterKind::Error => &mut *self.error,
            WriterKind::Warning => &mut *self.warning,
            WriterKind::Notice => &mut *self.notice,
        }
    }

    /// Flushes one stream.
    pub fn flush(&mut self, kind: WriterKind) -> io::Result<()> {
        self.get(kind).flush()
    }

    /// Flushes every stream, reporting the first failure.
    pub fn flush_all(&mut self) -> io::Result<()> {
        let results = [
            self.error.flush(),
            self.warning.flush(),
            self.notice.flush(),
        ];
        results.into_iter().collect()
    }
}

impl Default for LogWriters {
    fn default() -> Self {
        Self::stderr()
    }
}

/// An in-memory writer whose clones share one buffer.
#[derive(Clone, Debug, Default)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_kind() {
        let errors = CapturedOutput::new();
        let warnings = CapturedOutput::new();
        let notices = CapturedOutput::new();
        let mut writers = LogWriters::new(
            Box::new(errors.clone()),
            Box::new(warnings.clone()),
            Box::new(notices.clone()),
        );
        writeln!(writers.get(WriterKind::for_kind(DiagnosticKind::Error)), "e").unwrap();
        writeln!(writers.get(WriterKind::for_kind(DiagnosticKind::Warning)), "w").unwrap();
        writeln!(writers.get(WriterKind::for_kind(DiagnosticKind::Note)), "n").unwrap();
        writers.flush_all().unwrap();
        assert_eq!(errors.contents(), "e\n");
        assert_eq!(warnings.contents(), "w\n");
        assert_eq!(notices.contents(), "n\n");
    }

    #[test]
    fn uniform_shares_buffer() {
        let out = CapturedOutput::new();
        let mut writers = LogWriters::uniform(out.clone());
        write!(writers.get(WriterKind::Error), "a").unwrap();
        write!(writers.get(WriterKind::Notice), "b").unwrap();
        assert_eq!(out.contents(), "ab");
        out.clear();
        assert_eq!(out.contents(), "");
    }
}
