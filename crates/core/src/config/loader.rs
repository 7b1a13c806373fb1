use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides.
///
/// Field names themselves contain underscores, so sections are separated
/// with a double underscore: `RADARSWEEP_WORK_FOLDER` overrides the root
/// `work_folder`, `RADARSWEEP_SCHEDULER__INTERVAL_SECS` overrides
/// `scheduler.interval_secs`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("RADARSWEEP_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Serializes the tests that read the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
work_folder = "/data/radar"

[scheduler]
interval_secs = 60
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.scheduler.interval_secs, 60);
    }

    #[test]
    fn test_load_config_from_str_missing_work_folder() {
        let toml = r#"
[source]
window_size = 10
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
work_folder = "/data/radar"

[scheduler]
interval_secs = 300
"#
        )
        .unwrap();

        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("RADARSWEEP_WORK_FOLDER", "/override/radar");
        std::env::set_var("RADARSWEEP_SCHEDULER__INTERVAL_SECS", "60");
        let config = load_config(temp_file.path());
        std::env::remove_var("RADARSWEEP_WORK_FOLDER");
        std::env::remove_var("RADARSWEEP_SCHEDULER__INTERVAL_SECS");

        let config = config.unwrap();
        assert_eq!(config.work_folder.to_str().unwrap(), "/override/radar");
        assert_eq!(config.scheduler.interval_secs, 60);
    }

    #[test]
    fn test_load_config_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
work_folder = "/data/radar"

[source]
window_size = 30
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.work_folder.to_str().unwrap(), "/data/radar");
        assert_eq!(config.source.window_size, 30);
    }
}
