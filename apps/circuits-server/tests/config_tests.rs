//! Layered configuration tests

use circuits_server::logging::LogFormat;
use circuits_server::AppConfig;
use figment::Jail;
use std::path::Path;
use std::time::Duration;

#[test]
fn defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = AppConfig::load(None).map_err(|e| e.to_string())?;

        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:8000");
        assert_eq!(config.server.request_timeout, Duration::from_secs(30));
        assert_eq!(config.database.url, "sqlite://circuits.db?mode=rwc");
        assert!(config.database.auto_migrate);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.modules.levels.default_difficulty, 1);
        assert_eq!(config.modules.retail.default_business_hours_start, 8);
        assert_eq!(config.modules.retail.default_business_hours_end, 17);
        Ok(())
    });
}

#[test]
fn yaml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "circuits.yaml",
            r#"
server:
  bind_addr: "0.0.0.0:9000"
  request_timeout: 5s
logging:
  format: json
modules:
  levels:
    default_difficulty: 3
"#,
        )?;

        let config =
            AppConfig::load(Some(Path::new("circuits.yaml"))).map_err(|e| e.to_string())?;

        assert_eq!(config.server.bind_addr.port(), 9000);
        assert_eq!(config.server.request_timeout, Duration::from_secs(5));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.modules.levels.default_difficulty, 3);
        // Untouched keys keep their defaults
        assert_eq!(config.modules.levels.max_page_size, 100);
        assert_eq!(config.database.max_connections, 10);
        Ok(())
    });
}

#[test]
fn env_beats_yaml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "circuits.yaml",
            "modules:\n  retail:\n    default_business_hours_start: 9\n",
        )?;
        jail.set_env("CIRCUITS__MODULES__RETAIL__DEFAULT_BUSINESS_HOURS_START", "10");
        jail.set_env("CIRCUITS__DATABASE__URL", "sqlite::memory:");

        let config =
            AppConfig::load(Some(Path::new("circuits.yaml"))).map_err(|e| e.to_string())?;

        assert_eq!(config.modules.retail.default_business_hours_start, 10);
        assert_eq!(config.database.url, "sqlite::memory:");
        Ok(())
    });
}

#[test]
fn out_of_range_default_hours_fail_loading() {
    Jail::expect_with(|jail| {
        jail.set_env("CIRCUITS__MODULES__RETAIL__DEFAULT_BUSINESS_HOURS_END", "24");

        let err = AppConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("default_business_hours_end"));
        Ok(())
    });
}

#[test]
fn unknown_module_keys_are_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("circuits.yaml", "modules:\n  levels:\n    difficulty: 2\n")?;

        assert!(AppConfig::load(Some(Path::new("circuits.yaml"))).is_err());
        Ok(())
    });
}

#[test]
fn missing_config_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = AppConfig::load(Some(Path::new("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
        Ok(())
    });
}

#[test]
fn zero_levels_page_size_fails_loading() {
    Jail::expect_with(|jail| {
        jail.set_env("CIRCUITS__MODULES__LEVELS__MAX_PAGE_SIZE", "0");

        let err = AppConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("max_page_size"));
        Ok(())
    });
}
