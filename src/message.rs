//! Minimal view of an incoming list message.
//!
//! Only header lookup and payload extraction are needed; MIME structure is
//! not interpreted.

/// Header lookup and payload extraction, as offered by the host.
pub trait MailMessage {
    /// Returns the first value of header `name` (case-insensitive).
    fn header(&self, name: &str) -> Option<&str>;

    /// Returns the message body, if the message has one.
    fn payload(&self) -> Option<&str>;
}

/// A message parsed from RFC 5322 text, as delivered to a mail pipe.
///
/// # Example
///
/// ```
/// use list_hook::message::{MailMessage, RawMessage};
///
/// let msg = RawMessage::parse("From: a@x.com\r\nSubject: Hi\r\n\r\nbody\r\n");
///
/// assert_eq!(msg.header("subject"), Some("Hi"));
/// assert_eq!(msg.payload(), Some("body"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl RawMessage {
    /// Parses a message.
    ///
    /// Headers run until the first empty line; folded continuation lines
    /// are joined with a single space. A leading mbox `From ` envelope
    /// line and header lines without a colon are skipped. Everything after
    /// the empty line is the body. Parsing never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut lines = raw.lines();
        let mut has_body = false;
        let header_lines: Vec<&str> = lines
            .by_ref()
            .take_while(|line| {
                has_body = line.is_empty();
                !has_body
            })
            .collect();
        let body = has_body.then(|| lines.collect::<Vec<_>>().join("\n"));

        let mut headers: Vec<(String, String)> = Vec::new();
        for (index, line) in header_lines.into_iter().enumerate() {
            if index == 0 && line.starts_with("From ") {
                continue;
            }

            if line.starts_with([' ', '\t']) {
                if let Some((_, value)) = headers.last_mut() {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(line.trim());
                }
                continue;
            }

            if let Some((name, value)) = line.split_once(':') {
                headers.push((name.trim().to_string(), value.trim().to_string()));
            }
        }

        Self { headers, body }
    }

    /// Creates a message from parts.
    #[must_use]
    pub fn new(headers: Vec<(String, String)>, body: Option<String>) -> Self {
        Self { headers, body }
    }
}

impl MailMessage for RawMessage {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn payload(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_body() {
        let msg = RawMessage::parse("From: a@x.com\nSubject: Hi\n\nline one\nline two\n");

        assert_eq!(msg.header("From"), Some("a@x.com"));
        assert_eq!(msg.header("subject"), Some("Hi"));
        assert_eq!(msg.payload(), Some("line one\nline two"));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let msg = RawMessage::parse("Subject: Hi\r\n\r\nbody\r\nmore\r\n");

        assert_eq!(msg.header("subject"), Some("Hi"));
        assert_eq!(msg.payload(), Some("body\nmore"));
    }

    #[test]
    fn folded_headers_are_unfolded() {
        let msg = RawMessage::parse("Subject: a very\n  long\n\tsubject\n\nbody");

        assert_eq!(msg.header("Subject"), Some("a very long subject"));
    }

    #[test]
    fn first_of_repeated_headers_wins() {
        let msg = RawMessage::parse("Received: one\nReceived: two\n\n");

        assert_eq!(msg.header("received"), Some("one"));
    }

    #[test]
    fn mbox_envelope_line_is_skipped() {
        let msg = RawMessage::parse("From a@x.com Mon Jan  1 00:00:00 2024\nFrom: a@x.com\n\nbody");

        assert_eq!(msg.header("from"), Some("a@x.com"));
    }

    #[test]
    fn missing_headers_are_none() {
        let msg = RawMessage::parse("From: a@x.com\n\nbody");

        assert_eq!(msg.header("subject"), None);
    }

    #[test]
    fn headers_only_message_has_no_payload() {
        let msg = RawMessage::parse("From: a@x.com\nSubject: Hi");

        assert_eq!(msg.payload(), None);
    }

    #[test]
    fn blank_line_then_nothing_is_empty_payload() {
        let msg = RawMessage::parse("Subject: Hi\n\n");

        assert_eq!(msg.payload(), Some(""));
    }

    #[test]
    fn garbage_header_lines_are_skipped() {
        let msg = RawMessage::parse("not a header\nSubject: Hi\n\nbody");

        assert_eq!(msg.header("subject"), Some("Hi"));
        assert_eq!(msg.header("not a header"), None);
    }

    #[test]
    fn empty_input_is_empty_message() {
        assert_eq!(RawMessage::parse(""), RawMessage::default());
    }
}
