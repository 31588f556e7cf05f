//! Bibliographic citation formatting.
//!
//! Pure string functions shared by the numbering pass (pre-computing
//! bibliography xref text) and the resolver's citation path.

/// Format a document identifier according to publisher rules.
///
/// ISO-affiliated identifiers are prefixed `ISO `; bare numeric identifiers
/// from other publishers are bracketed (`12` becomes `[12]`); anything else
/// passes through untouched.
pub fn format_ref(docid: &str, iso_publisher: bool) -> String {
    if iso_publisher {
        return format!("ISO {docid}");
    }
    if !docid.is_empty() && docid.bytes().all(|b| b.is_ascii_digit()) {
        return format!("[{docid}]");
    }
    docid.to_string()
}

/// Citation text for a bibliographic entry without a document identifier,
/// derived from the entry's own rendered text.
///
/// Brackets are stripped unless the whole text is already of the exact form
/// `[digits]`.
pub fn fallback_ref(text: &str) -> String {
    if is_bracketed_number(text) {
        return text.to_string();
    }
    text.chars().filter(|c| !matches!(c, '[' | ']')).collect()
}

fn is_bracketed_number(text: &str) -> bool {
    text.strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .is_some_and(|inner| !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_identifiers_get_prefixed() {
        assert_eq!(format_ref("9001", true), "ISO 9001");
        assert_eq!(format_ref("IEC 61508-3", true), "ISO IEC 61508-3");
    }

    #[test]
    fn numeric_identifiers_get_bracketed() {
        assert_eq!(format_ref("12", false), "[12]");
        assert_eq!(format_ref("9001", false), "[9001]");
    }

    #[test]
    fn other_identifiers_pass_through() {
        assert_eq!(format_ref("RFC 2119", false), "RFC 2119");
        assert_eq!(format_ref("B.5", false), "B.5");
        assert_eq!(format_ref("", false), "");
    }

    #[test]
    fn fallback_strips_brackets() {
        assert_eq!(fallback_ref("[Aluminium]"), "Aluminium");
        assert_eq!(fallback_ref("[ISO 712]"), "ISO 712");
        assert_eq!(fallback_ref("plain"), "plain");
    }

    #[test]
    fn fallback_keeps_bracketed_numbers() {
        assert_eq!(fallback_ref("[12]"), "[12]");
        assert_eq!(fallback_ref("[12a]"), "12a");
        assert_eq!(fallback_ref("[]"), "");
    }
}
