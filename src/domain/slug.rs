/// Derive a directory-safe identifier from a display name.
///
/// The input is lowercased and trimmed, every run of characters outside
/// `[a-z0-9]` collapses to a single hyphen, and leading or trailing hyphens
/// are dropped. Input without any ASCII alphanumerics yields an empty slug.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.trim().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
