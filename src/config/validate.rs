//! Per-setting validation.
//!
//! Validators are registered by setting name and run before a value is
//! persisted; a registered validator can also normalize the value it
//! accepts. Names without a registered validator pass through unchanged, so
//! adding a validated setting means adding one registry entry.

use super::store::SettingsError;

/// A validator takes the raw value and returns the normalized form to store.
pub type Validator = fn(&str) -> Result<String, SettingsError>;

/// Registered validators, keyed by setting name.
const VALIDATORS: &[(&str, Validator)] = &[("endpoint", validate_endpoint)];

/// Look up the validator registered for a setting name.
pub fn validator_for(name: &str) -> Option<Validator> {
    VALIDATORS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|&(_, validator)| validator)
}

/// Validate and normalize a value for the given setting name.
pub fn normalize(name: &str, value: &str) -> Result<String, SettingsError> {
    match validator_for(name) {
        Some(validator) => validator(value),
        None => Ok(value.to_string()),
    }
}

/// Endpoint values must be absolute http(s) URLs with a host.
///
/// Normalization: scheme and host are lowercased and trailing slashes are
/// stripped from the path, so equivalent spellings store identically.
fn validate_endpoint(value: &str) -> Result<String, SettingsError> {
    let invalid = |reason: &str| SettingsError::InvalidValue {
        name: "endpoint".to_string(),
        reason: reason.to_string(),
    };

    let (scheme, rest) = value
        .split_once("://")
        .ok_or_else(|| invalid("expected a URL like https://example.com"))?;

    let scheme = scheme.to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(invalid("scheme must be http or https"));
    }

    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };

    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };

    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    if !host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(invalid("malformed host"));
    }
    if let Some(port) = port {
        if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("malformed port"));
        }
    }

    Ok(format!(
        "{}://{}{}",
        scheme,
        authority.to_ascii_lowercase(),
        path.trim_end_matches('/')
    ))
}
