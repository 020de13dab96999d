use url::Url;

use super::item::ItemKind;

/// Decide whether submitted text is a link or a free-text note.
///
/// Only an absolute URI with an `http` or `https` scheme counts as a link
/// (`Url::parse` lowercases the scheme, so the comparison is effectively
/// case-insensitive). Scheme-less strings like `example.com` fail to parse
/// as absolute URIs and classify as notes, as does everything else. Total:
/// a parse failure is a `Note`, never an error.
pub fn classify(text: &str) -> ItemKind {
    match Url::parse(text.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => ItemKind::Url,
        _ => ItemKind::Note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_is_url() {
        assert_eq!(classify("https://example.com"), ItemKind::Url);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(classify(" http://a.b "), ItemKind::Url);
    }

    #[test]
    fn uppercase_scheme_is_url() {
        assert_eq!(classify("HTTP://EXAMPLE.COM"), ItemKind::Url);
        assert_eq!(classify("HttPs://example.com/path?q=1"), ItemKind::Url);
    }

    #[test]
    fn bare_domain_is_note() {
        assert_eq!(classify("example.com"), ItemKind::Note);
    }

    #[test]
    fn other_schemes_are_notes() {
        assert_eq!(classify("ftp://x"), ItemKind::Note);
        assert_eq!(classify("mailto:someone@example.com"), ItemKind::Note);
        assert_eq!(classify("file:///etc/hosts"), ItemKind::Note);
    }

    #[test]
    fn plain_text_is_note() {
        assert_eq!(classify(""), ItemKind::Note);
        assert_eq!(classify("   "), ItemKind::Note);
        assert_eq!(classify("Buy milk"), ItemKind::Note);
        assert_eq!(classify("see https://example.com for details"), ItemKind::Note);
    }

    #[test]
    fn classify_is_idempotent() {
        for input in ["https://example.com", "example.com", "Buy milk", ""] {
            assert_eq!(classify(input), classify(input));
        }
    }
}
