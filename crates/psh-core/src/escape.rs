//! Unescaping of the `output` payload.
//!
//! The service double-encodes command output: the `output` field of an
//! already-parsed reply body holds a further JSON-string-escaped payload.
//! Decoding it means parsing `"<payload>"` as a JSON string.

use crate::error::{ShellError, ShellResult};

/// Decode a JSON-string-escaped payload into the text to display.
///
/// Fails if the payload contains an invalid escape or an unescaped quote;
/// the caller treats that like any other undecodable response.
pub fn unescape_output(payload: &str) -> ShellResult<String> {
    let quoted = format!("\"{payload}\"");
    serde_json::from_str(&quoted).map_err(|e| {
        ShellError::Decode(format!("output payload is not a valid JSON string: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(unescape_output("1 + 1 = 2").unwrap(), "1 + 1 = 2");
    }

    #[test]
    fn empty_payload_is_empty_text() {
        assert_eq!(unescape_output("").unwrap(), "");
    }

    #[test]
    fn newline_escape_becomes_a_newline() {
        assert_eq!(unescape_output("hello\\nworld").unwrap(), "hello\nworld");
    }

    #[test]
    fn tab_and_quote_escapes() {
        assert_eq!(unescape_output("a\\tb").unwrap(), "a\tb");
        assert_eq!(unescape_output("say \\\"hi\\\"").unwrap(), "say \"hi\"");
    }

    #[test]
    fn unicode_escape() {
        assert_eq!(unescape_output("\\u0041BC").unwrap(), "ABC");
    }

    #[test]
    fn invalid_escape_is_a_decode_error() {
        assert!(matches!(
            unescape_output("bad \\x escape"),
            Err(ShellError::Decode(_))
        ));
    }

    #[test]
    fn unescaped_quote_is_a_decode_error() {
        assert!(matches!(
            unescape_output("say \"hi\""),
            Err(ShellError::Decode(_))
        ));
    }
}
