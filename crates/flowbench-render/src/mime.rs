//! MIME type matching

/// Literal-substring MIME matcher
///
/// Renderers historically matched with patterns of the shape `.*text/.*`,
/// i.e. plain containment of a literal fragment. The XML renderer's
/// fragment is `text/xml` — deliberately stricter than its display name
/// suggests (`application/xml` does not match) — and that behavior is kept
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimePattern {
    fragment: &'static str,
}

impl MimePattern {
    /// Match any MIME type containing `fragment`
    #[inline]
    #[must_use]
    pub const fn contains(fragment: &'static str) -> Self {
        Self { fragment }
    }

    /// Whether `mime_type` matches this pattern
    #[inline]
    #[must_use]
    pub fn matches(&self, mime_type: &str) -> bool {
        mime_type.contains(self.fragment)
    }

    /// The literal fragment this pattern looks for
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> &str {
        self.fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fragment_matches_any_text_subtype() {
        let pattern = MimePattern::contains("text/");
        assert!(pattern.matches("text/plain"));
        assert!(pattern.matches("text/csv"));
        assert!(pattern.matches("text/xml"));
        assert!(!pattern.matches("image/png"));
    }

    #[test]
    fn xml_fragment_is_stricter_than_its_name() {
        let pattern = MimePattern::contains("text/xml");
        assert!(pattern.matches("text/xml"));
        assert!(pattern.matches("text/xml; charset=utf-8"));
        assert!(!pattern.matches("application/xml"));
        assert!(!pattern.matches("text/plain"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let pattern = MimePattern::contains("text/");
        assert!(!pattern.matches("TEXT/PLAIN"));
    }
}
