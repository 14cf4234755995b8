//! Tests for HTTP request/response types and errors.

use super::{HttpError, HttpRequest, HttpResponse};

fn hook_url() -> url::Url {
    url::Url::parse("https://chat.example/hooks/announce").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn post_creates_bare_post_request() {
        let req = HttpRequest::post(hook_url());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, hook_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn with_header_replaces_previous_value() {
        let req = HttpRequest::post(hook_url())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            );

        let values: Vec<&str> = req
            .headers
            .get_all(http::header::CONTENT_TYPE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values, vec!["application/json"]);
    }

    #[test]
    fn body_text_reads_utf8_body() {
        let req = HttpRequest::post(hook_url()).with_body(br#"{"text":"hi"}"#.to_vec());

        assert_eq!(req.body_text(), Some(r#"{"text":"hi"}"#));
    }

    #[test]
    fn body_text_is_none_without_body() {
        assert!(HttpRequest::post(hook_url()).body_text().is_none());
    }

    #[test]
    fn body_text_is_none_for_invalid_utf8() {
        let req = HttpRequest::post(hook_url()).with_body(vec![0xFF, 0xFE]);

        assert!(req.body_text().is_none());
    }
}

mod http_response {
    use super::*;

    #[test]
    fn body_lossy_returns_text() {
        let resp = HttpResponse::new(http::StatusCode::OK, b"{\"success\":true}".to_vec());

        assert_eq!(resp.body_lossy(), "{\"success\":true}");
    }

    #[test]
    fn body_lossy_replaces_invalid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::BAD_GATEWAY, vec![b'o', b'k', 0xFF]);

        assert_eq!(resp.body_lossy(), "ok\u{FFFD}");
    }

    #[test]
    fn body_excerpt_keeps_short_bodies_whole() {
        let resp = HttpResponse::new(http::StatusCode::OK, b"boom".to_vec());

        assert_eq!(resp.body_excerpt(4), "boom");
    }

    #[test]
    fn body_excerpt_cuts_long_bodies() {
        let resp = HttpResponse::new(http::StatusCode::OK, b"abcdefgh".to_vec());

        assert_eq!(resp.body_excerpt(3), "abc... (8 bytes)");
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = HttpError::Connection(Box::new(io));

        assert_eq!(err.to_string(), "Connection error: refused");
        assert!(err.source().is_some());
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn invalid_url_displays_reason() {
        let err = HttpError::InvalidUrl("relative URL without a base".to_string());

        assert_eq!(err.to_string(), "Invalid URL: relative URL without a base");
        assert!(err.source().is_none());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}
