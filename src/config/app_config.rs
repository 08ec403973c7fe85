use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

/// Token authority settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared HMAC secret
    pub secret: String,
    /// Lifetime of issued tokens
    pub expiry_seconds: i64,
    /// Clock skew tolerated when checking expiry
    pub leeway_seconds: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"[hidden]")
            .field("expiry_seconds", &self.expiry_seconds)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiry_seconds: 86_400,
            leeway_seconds: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load from an inline TOML document
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.auth.expiry_seconds, 86_400);
        assert_eq!(config.auth.leeway_seconds, 0);
        assert!(config.auth.secret.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            [auth]
            secret = "098f6bcd4621d373cade4e832627b4f6"
            expiry_seconds = 2592000
            leeway_seconds = 30

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.secret, "098f6bcd4621d373cade4e832627b4f6");
        assert_eq!(config.auth.expiry_seconds, 2_592_000);
        assert_eq!(config.auth.leeway_seconds, 30);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [auth]
            secret = "s3cret"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.secret, "s3cret");
        assert_eq!(config.auth.expiry_seconds, 86_400);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = AuthConfig {
            secret: "s3cret".to_string(),
            ..AuthConfig::default()
        };
        assert!(!format!("{:?}", config).contains("s3cret"));
    }
}
