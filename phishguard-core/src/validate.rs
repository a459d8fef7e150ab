use crate::error::ValidationError;
use url::Url;

/// Trim, add `https://` when no http(s) scheme is present, and check the
/// result parses as an absolute URL.
///
/// Returns the normalized text itself rather than `Url`'s serialization, so
/// `example.com` becomes `https://example.com` with no trailing slash.
pub fn normalize_and_validate(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let normalized = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    Url::parse(&normalized).map_err(|_| ValidationError::MalformedUrl)?;
    Ok(normalized)
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_check_ignores_case() {
        assert!(has_http_scheme("HTTPS://example.com"));
        assert!(has_http_scheme("Http://example.com"));
        assert!(!has_http_scheme("ftp://example.com"));
        assert!(!has_http_scheme("http:"));
    }

    #[test]
    fn test_scheme_check_on_multibyte_input() {
        assert!(!has_http_scheme("пример.рф"));
    }
}
