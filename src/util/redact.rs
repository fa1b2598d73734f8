/// Form fields whose values must never appear in errors or logs, with the
/// shortest value worth redacting.
///
/// Redaction is a plain substring replace, so short codes are skipped.
const SECRET_PARAMETERS: &[(&str, usize)] = &[("client_secret", 1), ("code", 8)];

pub(crate) fn truncate_utf8(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Values of secret fields in `form`.
pub(crate) fn secrets(form: &[(String, String)]) -> Vec<&str> {
    form.iter()
        .filter(|(name, value)| {
            SECRET_PARAMETERS
                .iter()
                .any(|(secret, min_len)| *secret == name.as_str() && value.len() >= *min_len)
        })
        .map(|(_, value)| value.as_str())
        .collect()
}

pub(crate) fn redact_text(mut text: String, secrets: &[&str]) -> String {
    for secret in secrets {
        if !secret.is_empty() {
            text = text.replace(secret, "<redacted>");
        }
    }
    text
}
