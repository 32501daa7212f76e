use serde_yaml::Mapping;

/// A note split into its parsed YAML header and raw body text.
///
/// The body is borrowed from the original file content and is never
/// interpreted; reassembly copies it back byte-for-byte.
pub struct Document<'a> {
    pub header: Mapping,
    pub body: &'a str,
}

/// Split a note into its raw YAML header text and the body.
///
/// The header must start at the very first byte as a `---` line and end
/// with the next `---` line followed by a line break. The body is
/// everything after that closing line. Returns `None` when the pattern
/// is absent.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---\n")?;
    let end = rest.find("\n---\n")?;
    Some((&rest[..end], &rest[end + "\n---\n".len()..]))
}

/// Parse a note's metadata header.
///
/// Returns `None` when the delimiters are missing or the YAML does not
/// deserialize to a mapping. Malformed notes are a skip, not an error.
pub fn parse(content: &str) -> Option<Document<'_>> {
    let (header_text, body) = split(content)?;
    let header = serde_yaml::from_str::<Mapping>(header_text).ok()?;
    Some(Document { header, body })
}

/// Reassemble a note from a header mapping and the untouched body.
///
/// The header is re-serialized in block style with keys in mapping order
/// (which `serde_yaml::Mapping` keeps as insertion order) and unicode
/// left unescaped.
pub fn assemble(header: &Mapping, body: &str) -> Result<String, serde_yaml::Error> {
    let header_text = serde_yaml::to_string(header)?;
    Ok(format!("---\n{header_text}---\n{body}"))
}
