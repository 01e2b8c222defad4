//! Qualified-name parsing and classification.

/// A classified identifier or attribute key.
///
/// PROV-JSON names are either compact (`prefix:local`), blank (`_:local`),
/// or, less commonly, absolute IRIs and bare local names resolved through
/// the reserved `default` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Name<'a> {
    /// `_:local`: blank identifier, valid without any namespace lookup.
    Blank(&'a str),
    /// `prefix:local`: the prefix must resolve in the active table.
    Compact { prefix: &'a str, local: &'a str },
    /// An absolute IRI (`scheme://...`), passed through verbatim.
    Absolute(&'a str),
    /// A bare local name, resolved through the `default` prefix.
    Plain(&'a str),
}

/// Classify a raw name string.
pub fn parse(s: &str) -> Name<'_> {
    if let Some(local) = s.strip_prefix("_:") {
        return Name::Blank(local);
    }
    match s.find(':') {
        Some(pos) => {
            let prefix = &s[..pos];
            let local = &s[pos + 1..];
            // An empty prefix (":local") addresses the default namespace.
            if prefix.is_empty() {
                return Name::Plain(local);
            }
            if local.starts_with("//") && is_scheme(prefix) {
                return Name::Absolute(s);
            }
            Name::Compact { prefix, local }
        }
        None => Name::Plain(s),
    }
}

/// RFC 3986 scheme: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn is_scheme(s: &str) -> bool {
    let bytes = s.as_bytes();
    !bytes.is_empty()
        && bytes[0].is_ascii_alphabetic()
        && bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'-' || *b == b'.')
}
