//! Output sinks.
//!
//! An [`OutputSink`] receives the rendered body. Sinks that can also carry a
//! status line (an HTTP response under construction, for example) expose it
//! through [`OutputSink::header_writer`]; plain byte sinks keep the default
//! and only receive the body.

use std::io;

/// Capability to record a response status code.
pub trait WriteHeader {
    /// Record the status code. Called at most once per output, before the body.
    fn write_header(&mut self, status_code: u16);
}

/// Destination for a rendered response.
pub trait OutputSink: io::Write {
    /// Header capability of this sink, if any.
    fn header_writer(&mut self) -> Option<&mut dyn WriteHeader> {
        None
    }
}

impl OutputSink for Vec<u8> {}

impl OutputSink for io::Sink {}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn header_writer(&mut self) -> Option<&mut dyn WriteHeader> {
        (**self).header_writer()
    }
}

/// Adapter turning any [`io::Write`] into a body-only [`OutputSink`].
///
/// # Example
///
/// ```
/// use envelope_core::{ErrorRegistry, Response, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// Response::new(&ErrorRegistry::new())
///     .set_result(204, ())
///     .write_to(&mut sink)
///     .expect("write");
///
/// assert!(sink.into_inner().starts_with(b"{\"success\":true"));
/// ```
#[derive(Debug, Default)]
pub struct WriterSink<W> {
    inner: W,
}

impl<W: io::Write> WriterSink<W> {
    /// Wrap a writer.
    #[must_use]
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consume into the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> io::Write for WriterSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: io::Write> OutputSink for WriterSink<W> {}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        status: Option<u16>,
        body: Vec<u8>,
    }

    impl io::Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.body.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl WriteHeader for Recorder {
        fn write_header(&mut self, status_code: u16) {
            self.status = Some(status_code);
        }
    }

    impl OutputSink for Recorder {
        fn header_writer(&mut self) -> Option<&mut dyn WriteHeader> {
            Some(self)
        }
    }

    #[test]
    fn byte_sinks_have_no_header() {
        let mut buffer = Vec::new();
        assert!(buffer.header_writer().is_none());
        assert!(io::sink().header_writer().is_none());
        assert!(WriterSink::new(Vec::new()).header_writer().is_none());
    }

    #[test]
    fn header_capability_through_reference() {
        let mut recorder = Recorder::default();
        {
            let mut by_ref = &mut recorder;
            let header = <&mut Recorder as OutputSink>::header_writer(&mut by_ref)
                .expect("recorder has headers");
            header.write_header(404);
            by_ref.write_all(b"body").expect("write");
        }

        assert_eq!(recorder.status, Some(404));
        assert_eq!(recorder.body, b"body");
    }

    #[test]
    fn writer_sink_forwards_bytes() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_all(b"hello").expect("write");
        sink.flush().expect("flush");
        assert_eq!(sink.into_inner(), b"hello");
    }
}
