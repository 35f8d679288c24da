use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> SiteError {
    SiteError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Absolute http(s) URL, used for project links and images.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url_with_schemes(field_name, url_str, &["http", "https"])
}

/// Social links may also be `mailto:` targets.
pub fn validate_link_target(field_name: &str, url_str: &str) -> Result<()> {
    validate_url_with_schemes(field_name, url_str, &["http", "https", "mailto"])
}

fn validate_url_with_schemes(field_name: &str, url_str: &str, schemes: &[&str]) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) if schemes.contains(&url.scheme()) => Ok(()),
        Ok(url) => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", url.scheme()),
        )),
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Skill identifiers go straight into the icon-service query string.
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(invalid(
            field_name,
            value,
            "Identifier must be lowercase letters and digits only",
        ));
    }
    Ok(())
}

pub fn validate_unique_titles<'a, I>(field_name: &str, titles: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for title in titles {
        if !seen.insert(title) {
            return Err(invalid(field_name, title, "Duplicate title"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("link", "https://example.com").is_ok());
        assert!(validate_url("link", "http://example.com").is_ok());
        assert!(validate_url("link", "").is_err());
        assert!(validate_url("link", "invalid-url").is_err());
        assert!(validate_url("link", "ftp://example.com").is_err());
        assert!(validate_url("link", "mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_validate_link_target_accepts_mailto() {
        assert!(validate_link_target("href", "mailto:someone@example.com").is_ok());
        assert!(validate_link_target("href", "https://github.com/someone").is_ok());
        assert!(validate_link_target("href", "javascript:alert(1)").is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("skills.tools[0]", "vscode").is_ok());
        assert!(validate_identifier("skills.tools[0]", "c99").is_ok());
        assert!(validate_identifier("skills.tools[0]", "").is_err());
        assert!(validate_identifier("skills.tools[0]", "VS Code").is_err());
        assert!(validate_identifier("skills.tools[0]", "git,npm").is_err());
    }

    #[test]
    fn test_validate_unique_titles() {
        assert!(validate_unique_titles("projects", ["a", "b"]).is_ok());
        assert!(validate_unique_titles("projects", ["a", "b", "a"]).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./dist").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }
}
