//! [`http::Response`] output.
//!
//! [`HttpSink`] is an [`OutputSink`] with the header capability: it records
//! the status code written by [`Response::write_to`] together with the body,
//! and converts into an `http::Response<Bytes>` ready for any server stack
//! built on the `http` crate.

use std::io;

use bytes::{BufMut, Bytes, BytesMut};
use envelope_core::{
    ContentType, DEFAULT_STATUS_CODE, Error, OutputSink, Renderer, Response, Result, WriteHeader,
};
use http::header::{CONTENT_TYPE, HeaderValue};
use http::StatusCode;
use serde::Serialize;
use tracing::debug;

/// Sink collecting a status code and body into an [`http::Response`].
#[derive(Debug, Default)]
pub struct HttpSink {
    status_code: Option<u16>,
    content_type: ContentType,
    body: BytesMut,
}

impl HttpSink {
    /// Creates an empty sink announcing `content_type`.
    #[must_use]
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            ..Self::default()
        }
    }

    /// Status code written so far.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Body written so far.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Converts into an [`http::Response`].
    ///
    /// Without a written header the status defaults to 500.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStatusCode`] if the recorded code is outside
    /// the range the `http` crate accepts (100..=999).
    pub fn into_http_response(self) -> Result<http::Response<Bytes>> {
        let status_code = self.status_code.unwrap_or(DEFAULT_STATUS_CODE);
        let status = StatusCode::from_u16(status_code)
            .map_err(|_| Error::InvalidStatusCode { status_code })?;

        let mut response = http::Response::new(self.body.freeze());
        *response.status_mut() = status;
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static(self.content_type.as_str()),
        );
        Ok(response)
    }
}

impl io::Write for HttpSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteHeader for HttpSink {
    fn write_header(&mut self, status_code: u16) {
        self.status_code = Some(status_code);
    }
}

impl OutputSink for HttpSink {
    fn header_writer(&mut self) -> Option<&mut dyn WriteHeader> {
        Some(self)
    }
}

/// Extension trait converting a [`Response`] into an [`http::Response`].
pub trait ResponseExt {
    /// Render into an `http::Response` carrying the status code and the
    /// renderer's content type.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the status code is rejected
    /// by the `http` crate.
    fn into_http_response(self) -> Result<http::Response<Bytes>>;
}

impl<C: Serialize, R: Renderer> ResponseExt for Response<C, R> {
    fn into_http_response(mut self) -> Result<http::Response<Bytes>> {
        let mut sink = HttpSink::new(self.renderer().content_type());
        self.write_to(&mut sink)?;
        debug!(
            status_code = sink.status_code(),
            bytes = sink.body().len(),
            "http response built"
        );
        sink.into_http_response()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn sink_records_header_and_body() {
        let mut sink = HttpSink::new(ContentType::Json);
        sink.header_writer()
            .expect("header capability")
            .write_header(404);
        sink.write_all(b"{}").expect("write");

        assert_eq!(sink.status_code(), Some(404));

        let response = sink.into_http_response().expect("valid status");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).map(HeaderValue::as_bytes),
            Some(b"application/json".as_slice())
        );
        assert_eq!(response.body().as_ref(), b"{}");
    }

    #[test]
    fn sink_without_header_defaults_to_500() {
        let response = HttpSink::default().into_http_response().expect("default");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body().is_empty());
    }

    #[test]
    fn sink_rejects_out_of_range_status() {
        let mut sink = HttpSink::default();
        sink.write_header(42);

        let err = sink.into_http_response().expect_err("42 is not a status");
        assert!(matches!(err, Error::InvalidStatusCode { status_code: 42 }));
    }
}
