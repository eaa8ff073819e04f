/// Replace quoted placeholder tokens with quoted values.
///
/// For each `(key, value)` pair, in order, every literal `"key"` in `text`
/// becomes `"value"`. Keys without a match leave the text untouched.
pub fn interpolate<K, V>(text: &str, mapping: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut content = text.to_string();
    for (key, value) in mapping {
        let token = quoted(key.as_ref());
        if content.contains(&token) {
            content = content.replace(&token, &quoted(value.as_ref()));
        }
    }
    content
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}
