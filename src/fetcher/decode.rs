//! Charset detection and decoding of page bodies.
//!
//! Precedence: Content-Type header charset, then a `charset=` declaration in
//! the first 4KB of markup, then chardetng's statistical guess. Decoding is
//! lossy; malformed byte sequences become replacement characters rather than
//! failing the fetch.

use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;

const SNIFF_WINDOW: usize = 4096;

static CHARSET_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;/>]+)"#).unwrap());

pub fn decode_body(content_type: &str, body: &[u8]) -> String {
    let encoding = detect_encoding(content_type, body);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(enc) = charset_from(content_type) {
        return enc;
    }

    let head = &body[..body.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(enc) = charset_from(&head_str) {
        return enc;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    detector.guess(None, true)
}

fn charset_from(haystack: &str) -> Option<&'static Encoding> {
    let label = CHARSET_DECL.captures(haystack)?.get(1)?.as_str();
    Encoding::for_label(label.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins() {
        let enc = detect_encoding("text/html; charset=shift_jis", b"<html></html>");
        assert_eq!(enc, encoding_rs::SHIFT_JIS);
    }

    #[test]
    fn meta_charset_used_when_header_silent() {
        let body = b"<html><head><meta charset=\"windows-1252\"></head></html>";
        let enc = detect_encoding("text/html", body);
        assert_eq!(enc, encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn http_equiv_declaration_is_picked_up() {
        let body = b"<html><head><meta http-equiv=\"Content-Type\" \
                     content=\"text/html; charset=iso-8859-1\"></head></html>";
        let enc = detect_encoding("text/html", body);
        // encoding_rs maps iso-8859-1 to its windows-1252 superset
        assert_eq!(enc, encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn decodes_utf8_body() {
        let body = "Hello, 世界!".as_bytes();
        assert_eq!(decode_body("text/html; charset=utf-8", body), "Hello, 世界!");
    }

    #[test]
    fn lossy_decode_never_fails() {
        let body = [0xFFu8, 0xFE, 0x00, 0x41];
        let decoded = decode_body("text/html; charset=utf-8", &body);
        assert!(!decoded.is_empty());
    }
}
