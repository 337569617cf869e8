//! Integration tests for sink and `http` output.

use std::io;

use assert2::{check, let_assert};
use envelope::{
    ContentType, Error, ErrorRegistry, HttpSink, OutputSink, Responder, ResponderConfig,
    Response, ResponseExt, StatusCode, WriteHeader, WriterSink, decode,
};
use http::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

/// Sink recording every call in order.
#[derive(Debug, Default)]
struct CallLog {
    calls: Vec<String>,
}

impl io::Write for CallLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls.push(format!("write:{}", String::from_utf8_lossy(buf)));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteHeader for CallLog {
    fn write_header(&mut self, status_code: u16) {
        self.calls.push(format!("header:{status_code}"));
    }
}

impl OutputSink for CallLog {
    fn header_writer(&mut self) -> Option<&mut dyn WriteHeader> {
        Some(self)
    }
}

/// Sink whose writes always fail.
struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputSink for BrokenPipe {}

#[test]
fn test_header_written_before_body() {
    let mut log = CallLog::default();
    let body = Response::new(&ErrorRegistry::new())
        .set_result(202, ())
        .write_to(&mut log)
        .expect("write");

    assert_eq!(log.calls, vec!["header:202".to_string(), format!("write:{body}")]);
}

#[test]
fn test_plain_writer_receives_body_only() {
    let mut sink = WriterSink::new(Vec::new());
    let body = Response::new(&ErrorRegistry::new())
        .set_result(200, "ok")
        .write_to(&mut sink)
        .expect("write");

    assert_eq!(sink.into_inner(), body.into_bytes());
}

#[test]
fn test_nothing_written_on_render_failure() {
    let mut content = std::collections::BTreeMap::new();
    content.insert(vec![1u8], 1);

    let mut log = CallLog::default();
    let result = Response::new(&ErrorRegistry::new())
        .set_result(200, content)
        .write_to(&mut log);

    let_assert!(Err(Error::Serialization(_)) = result);
    check!(log.calls.is_empty());
}

#[test]
fn test_sink_failure_is_reported() {
    let result = Response::new(&ErrorRegistry::new()).write_to(BrokenPipe);

    let_assert!(Err(Error::Sink(err)) = result);
    check!(err.kind() == io::ErrorKind::BrokenPipe);
}

#[test]
fn test_into_http_response() {
    let registry = ErrorRegistry::from_map([(7, "Stale Cache")]);
    let user = User {
        id: 1,
        name: "Alice".to_string(),
    };

    let response = Response::new(&registry)
        .add_error_detail([7])
        .expect("registered")
        .set_result(200, user.clone())
        .into_http_response()
        .expect("http response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some(ContentType::Json.as_str())
    );

    let envelope = decode::<User>(response.body()).expect("decode");
    assert!(envelope.success);
    assert_eq!(envelope.error_codes(), vec![7]);
    assert_eq!(envelope.content, Some(user));
}

#[test]
fn test_into_http_response_rejects_invalid_status() {
    let result = Response::new(&ErrorRegistry::new())
        .set_result(1000, ())
        .into_http_response();

    let_assert!(Err(Error::InvalidStatusCode { status_code }) = result);
    check!(status_code == 1000);
}

#[test]
fn test_http_sink_direct() {
    let mut sink = HttpSink::new(ContentType::JsonUtf8);
    Response::new(&ErrorRegistry::new())
        .set_result(404, ())
        .write_to(&mut sink)
        .expect("write");

    assert_eq!(sink.status_code(), Some(404));

    let response = sink.into_http_response().expect("http response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json; charset=utf-8")
    );
}

#[test]
fn test_responder_pretty_output() {
    let registry = ErrorRegistry::from_map([(1, "Missing Auth")]);
    let responder = Responder::new(registry, ResponderConfig::builder().pretty(2).build());

    let response = responder
        .response()
        .add_error_detail([1])
        .expect("registered")
        .set_result(401, ());
    let http_response = responder.respond(response).expect("respond");

    assert_eq!(http_response.status(), StatusCode::UNAUTHORIZED);
    let body = std::str::from_utf8(http_response.body()).expect("utf8");
    insta::assert_snapshot!(body, @r#"
    {
      "success": false,
      "status_code": 401,
      "status_text": "Unauthorized",
      "error_details": [
        {
          "code": 1,
          "text": "Missing Auth"
        }
      ],
      "content": null
    }
    "#);
}
