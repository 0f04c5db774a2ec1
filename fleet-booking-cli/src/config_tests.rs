//! Configuration tests for defaults, file layering and environment overrides

#[cfg(test)]
mod tests {
    use super::super::config::Config;
    use crate::{Error, LogFormat};
    use serial_test::serial;
    use std::env;
    use std::fs;

    const HORIZON_VAR: &str = "FLEET_BOOKING_PLANNER__HORIZON_DAYS";
    const LEVEL_VAR: &str = "FLEET_BOOKING_LOGGING__LEVEL";

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.planner.horizon_days, 14);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.catalog.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_loaded_config_uses_defaults() {
        let config = Config::load().expect("Should load config successfully");
        assert_eq!(config.planner.horizon_days, 14);
        assert_eq!(config.logging.level, "info");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    #[serial]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.toml");
        fs::write(
            &path,
            r#"
[catalog]
path = "config/catalog.toml"

[planner]
horizon_days = 7

[logging]
format = "json"
"#,
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("config/catalog.toml"));
        assert_eq!(config.planner.horizon_days, 7);
        assert_eq!(config.planner_settings().horizon_days, 7);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    #[serial]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::ConfigFile(_))));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        env::set_var(HORIZON_VAR, "30");
        env::set_var(LEVEL_VAR, "debug");

        let result = Config::load();

        env::remove_var(HORIZON_VAR);
        env::remove_var(LEVEL_VAR);

        let config = result.unwrap();
        assert_eq!(config.planner.horizon_days, 30);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    #[serial]
    fn test_zero_horizon_is_rejected() {
        env::set_var(HORIZON_VAR, "0");
        let result = Config::load();
        env::remove_var(HORIZON_VAR);

        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    #[serial]
    fn test_oversized_horizon_is_rejected() {
        env::set_var(HORIZON_VAR, "100000000");
        let result = Config::load();
        env::remove_var(HORIZON_VAR);

        assert!(matches!(result, Err(Error::Configuration(_))));

        let mut config = Config::default();
        config.planner.horizon_days = 366;
        assert!(config.validate().is_ok());
        config.planner.horizon_days = 367;
        assert!(config.validate().is_err());
    }
}
