//! String-like view over a normalized IRI.

/// Read-only string operations over an IRI's normalized form.
///
/// Implemented by [`IriRecord`](crate::iri::IriRecord), which only provides
/// [`IriView::as_str`]; every other method follows plain `str` semantics on
/// that string.
pub trait IriView {
    /// The normalized IRI text.
    fn as_str(&self) -> &str;

    fn contains(&self, needle: &str) -> bool {
        self.as_str().contains(needle)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    fn ends_with(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    /// Length in characters, not bytes.
    fn length(&self) -> usize {
        self.as_str().chars().count()
    }

    /// The character at position `i`, counted in characters.
    fn index(&self, i: usize) -> Option<char> {
        self.as_str().chars().nth(i)
    }

    fn split(&self, separator: &str) -> Vec<String> {
        self.as_str().split(separator).map(str::to_string).collect()
    }

    fn replace(&self, from: &str, to: &str) -> String {
        self.as_str().replace(from, to)
    }

    fn to_lowercase(&self) -> String {
        self.as_str().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::IriView;
    use crate::iri::{IriRecord, ParseOptions};

    fn record(raw: &str) -> IriRecord {
        IriRecord::parse(raw, ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_view_over_record() {
        let iri = record("https://Example.com/ä/b#frag");
        assert!(iri.contains("Example"));
        assert!(!iri.contains("frag"));
        assert!(iri.starts_with("https://"));
        assert!(iri.ends_with("/b"));
        assert_eq!(iri.length(), 23);
        assert_eq!(iri.index(20), Some('ä'));
        assert_eq!(iri.index(100), None);
        assert_eq!(IriView::to_lowercase(&iri), "https://example.com/ä/b");
    }

    #[test]
    fn test_split_and_replace() {
        let iri = record("http://a/b/c");
        assert_eq!(IriView::split(&iri, "/"), vec!["http:", "", "a", "b", "c"]);
        assert_eq!(iri.replace("http", "https"), "https://a/b/c");
    }

    #[test]
    fn test_std_string_methods_unaffected() {
        let iri = record("http://a/b#c");
        let text = iri.to_string();
        assert!(!text.contains('#'));
        assert_eq!(text.split('/').count(), 4);
        assert_eq!(text.replace('/', "|"), "http:||a|b");
    }
}
