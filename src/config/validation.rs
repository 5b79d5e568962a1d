//! Checks on configuration values that parsing alone cannot catch.

use crate::config::Config;
use crate::{LiteralGuardError, Result};

/// # Errors
/// Returns an error if an extension list is empty, `max_listed` is zero,
/// or an exclude pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if config.audit.extensions.is_empty() {
        return Err(LiteralGuardError::Config(
            "audit.extensions must list at least one extension".to_string(),
        ));
    }
    if config.yaml.extensions.is_empty() {
        return Err(LiteralGuardError::Config(
            "yaml.extensions must list at least one extension".to_string(),
        ));
    }
    if config.audit.max_listed == 0 {
        return Err(LiteralGuardError::Config(
            "audit.max_listed must be at least 1".to_string(),
        ));
    }
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| LiteralGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
