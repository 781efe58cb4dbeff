//! Configuration validation logic.

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url(&config.api.base_url)?;
    validate_token(&config.api.access_token)?;
    validate_course_id(&config.export.course_id)?;

    Ok(())
}

/// Validate the API base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(Error::MissingConfig("base_url".to_string()));
    }

    let parsed = Url::parse(base_url).map_err(|e| Error::ConfigValidation {
        field: "base_url".to_string(),
        message: format!("Not a valid absolute URL: {}", e),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported URL scheme '{}'", parsed.scheme()),
        });
    }

    Ok(())
}

/// Validate the access token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::MissingConfig("access_token".to_string()));
    }

    // Check for placeholder values
    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_access_token") {
        return Err(Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token appears to be a placeholder. Please provide your actual Canvas token."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the course identifier.
pub fn validate_course_id(course_id: &str) -> Result<()> {
    if course_id.is_empty() {
        return Err(Error::MissingConfig(
            "course_id (the course to export)".to_string(),
        ));
    }

    Ok(())
}
