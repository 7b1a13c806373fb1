use crate::candidate::STAMP_PLACEHOLDER;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Work folder path is non-empty (presence enforced by serde)
/// - Base URL carries the `{stamp}` placeholder
/// - Window size is non-zero
/// - Scheduler interval is strictly longer than the polling quantum
/// - Transform output extension differs from the source extension
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.work_folder.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "work_folder cannot be empty".to_string(),
        ));
    }

    if !config.source.base_url.contains(STAMP_PLACEHOLDER) {
        return Err(ConfigError::ValidationError(format!(
            "source.base_url must contain the {} placeholder",
            STAMP_PLACEHOLDER
        )));
    }

    if config.source.window_size == 0 {
        return Err(ConfigError::ValidationError(
            "source.window_size cannot be 0".to_string(),
        ));
    }

    if config.scheduler.poll_quantum_ms == 0 {
        return Err(ConfigError::ValidationError(
            "scheduler.poll_quantum_ms cannot be 0".to_string(),
        ));
    }

    if config.scheduler.interval_secs.saturating_mul(1000) <= config.scheduler.poll_quantum_ms {
        return Err(ConfigError::ValidationError(
            "scheduler.interval_secs must be longer than the polling quantum".to_string(),
        ));
    }

    if config.transform.max_dimension == 0 {
        return Err(ConfigError::ValidationError(
            "transform.max_dimension cannot be 0".to_string(),
        ));
    }

    if config
        .transform
        .output_extension
        .eq_ignore_ascii_case(&config.source.extension)
    {
        return Err(ConfigError::ValidationError(
            "transform.output_extension must differ from source.extension".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;

    fn valid_config() -> Config {
        load_config_from_str(r#"work_folder = "/data/radar""#).unwrap()
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_base_url_without_placeholder_fails() {
        let mut config = valid_config();
        config.source.base_url = "http://radar.local/latest.png".to_string();
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_zero_window_fails() {
        let mut config = valid_config();
        config.source.window_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_quantum_fails() {
        let mut config = valid_config();
        config.scheduler.poll_quantum_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_interval_not_longer_than_quantum_fails() {
        let mut config = valid_config();
        config.scheduler.interval_secs = 1;
        config.scheduler.poll_quantum_ms = 1000;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_huge_interval_is_accepted() {
        let mut config = valid_config();
        config.scheduler.interval_secs = u64::MAX;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_same_extensions_fails() {
        let mut config = valid_config();
        config.transform.output_extension = "png".to_string();
        assert!(validate_config(&config).is_err());
    }
}
