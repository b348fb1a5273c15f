#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use turnos::libs::config::{ApiConfig, BackendKind, Config, RulesConfig, CONFIG_FILE_NAME, DEFAULT_API_URL, ENV_API_URL, ENV_BACKEND};
    use turnos::libs::data_storage::DataStorage;

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend, BackendKind::Http);
        assert_eq!(config.api().api_url, DEFAULT_API_URL);
        assert_eq!(config.weekly_hours_limit(), 48.0);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_save_round_trip(_ctx: &mut ConfigTestContext) {
        // Nothing saved yet.
        assert_eq!(Config::read().unwrap(), Config::default());

        let config = Config {
            backend: BackendKind::Local,
            api: Some(ApiConfig {
                api_url: "http://turnos.example:9000".to_string(),
            }),
            rules: Some(RulesConfig { weekly_hours_limit: 44.0 }),
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"backend\": \"local\""));

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.weekly_hours_limit(), 44.0);

        fs::write(&path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test]
    fn test_environment_overrides() {
        let mut config = Config::default();
        std::env::set_var(ENV_BACKEND, "LOCAL");
        std::env::set_var(ENV_API_URL, "http://10.0.0.5:8080");
        config.apply_env().unwrap();
        assert_eq!(config.backend, BackendKind::Local);
        assert_eq!(config.api().api_url, "http://10.0.0.5:8080");

        std::env::set_var(ENV_BACKEND, "ftp");
        assert!(Config::default().apply_env().is_err());

        std::env::remove_var(ENV_BACKEND);
        std::env::remove_var(ENV_API_URL);
        let mut untouched = Config::default();
        untouched.apply_env().unwrap();
        assert_eq!(untouched, Config::default());
    }
}
