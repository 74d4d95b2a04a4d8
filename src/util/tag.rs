/// Normalizes a player or club tag to its canonical form.
///
/// The canonical form is a single `#` marker followed by the uppercased
/// identifier, e.g. `#abc 123` becomes `#ABC123` minus the space. Tags arrive
/// from command input, data attributes, and link paths in wildly different
/// shapes; everything downstream (database keys, URL building) relies on this
/// one form.
///
/// # Arguments
/// - `raw` - Tag text in any accepted shape, with or without the marker
///
/// # Returns
/// - `Some(String)` - Canonical `#`-prefixed uppercase tag
/// - `None` - Input contained no identifier characters
pub fn normalize_tag(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase();

    if cleaned.is_empty() {
        return None;
    }

    Some(format!("#{}", cleaned))
}

/// Returns the tag without its leading marker, for embedding in URL paths.
pub fn bare_tag(tag: &str) -> &str {
    tag.trim_start_matches('#')
}
