//! Preamble-first writer over the CGI response byte stream.

use std::io::Write;

use thiserror::Error;

/// Errors from writing the response stream.
#[derive(Error, Debug)]
pub enum SinkError {
    /// A body write was attempted before the header preamble.
    #[error("Response preamble not sent")]
    PreambleNotSent,

    /// The preamble was sent twice, or the sink was already finished.
    #[error("Response stream error: {0}")]
    Ordering(String),

    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, preamble not yet sent.
    Initial,
    /// Preamble sent, body parts can be written.
    PreambleSent,
    /// Response finished and flushed.
    Finished,
}

/// Ordered writer for one CGI response.
///
/// CGI output is a header block, a blank line, then the body. The sink
/// enforces that shape: `send_preamble` exactly once, then any number
/// of body parts, then `finish`.
pub struct ResponseSink<W: Write> {
    inner: W,
    state: SinkState,
    sections_sent: Vec<String>,
}

impl<W: Write> ResponseSink<W> {
    /// Create a sink over a writer (normally locked stdout).
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: SinkState::Initial,
            sections_sent: Vec::new(),
        }
    }

    /// Write the response header preamble. Must be called first.
    pub fn send_preamble(&mut self, content_type: &str) -> Result<(), SinkError> {
        if self.state != SinkState::Initial {
            return Err(SinkError::Ordering("Preamble already sent".to_string()));
        }
        write!(self.inner, "Content-Type: {}\r\n\r\n", content_type)?;
        self.state = SinkState::PreambleSent;
        Ok(())
    }

    /// Write a named body part. Preamble must be sent first.
    pub fn send_section(&mut self, name: &str, html: &str) -> Result<(), SinkError> {
        self.check_body_writable()?;
        self.inner.write_all(html.as_bytes())?;
        self.sections_sent.push(name.to_string());
        Ok(())
    }

    /// Write raw body bytes. Preamble must be sent first.
    pub fn send_raw(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.check_body_writable()?;
        self.inner.write_all(bytes)?;
        Ok(())
    }

    /// Flush and close out the response.
    pub fn finish(&mut self) -> Result<(), SinkError> {
        self.check_body_writable()?;
        self.inner.flush()?;
        self.state = SinkState::Finished;
        Ok(())
    }

    /// Names of the body parts written so far.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Consume the sink and return the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn check_body_writable(&self) -> Result<(), SinkError> {
        match self.state {
            SinkState::Initial => Err(SinkError::PreambleNotSent),
            SinkState::Finished => {
                Err(SinkError::Ordering("Sink already finished".to_string()))
            }
            SinkState::PreambleSent => Ok(()),
        }
    }
}
