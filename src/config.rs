use serde::{Deserialize, Serialize};
use std::fs;

/// Environment variable that overrides `backend.base_url`.
///
/// This is the one deployment-specific value: the root of the private
/// sheet-data API the gateway forwards to.
pub const PRIVATE_API_URL_ENV: &str = "PRIVATE_API_URL";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// Downstream sheet-data API settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    /// Base URL of the private API, e.g. `http://127.0.0.1:8000`.
    /// `PRIVATE_API_URL` takes precedence when set.
    pub base_url: String,
    /// Per-request timeout applied on the HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Replace `base_url` with the value of the override variable, if any.
    ///
    /// Takes the variable content as a parameter so the precedence rule can
    /// be tested without touching the process environment.
    pub fn apply_base_url_override(&mut self, var: Option<String>) {
        if let Some(url) = var {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        let mut config = Self::from_yaml_str(&content);
        config
            .backend
            .apply_base_url_override(std::env::var(PRIVATE_API_URL_ENV).ok());
        config
    }

    pub fn from_yaml_str(content: &str) -> Self {
        serde_yaml::from_str(content).expect("Failed to parse config yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_YAML: &str = r#"
log_level: "info"
log_dir: "./logs"
log_file: "syncgate.log"
use_json: false
rotation: "daily"
enable_tracing: true
gateway:
  host: "127.0.0.1"
  port: 3000
backend:
  base_url: "http://127.0.0.1:8000"
  timeout_secs: 10
"#;

    #[test]
    fn test_config_deserialize() {
        let config = AppConfig::from_yaml_str(DEV_YAML);

        assert_eq!(config.log_level, "info");
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.gateway.port, 3000);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.backend.timeout_secs, 10);
    }

    #[test]
    fn test_backend_section_is_optional() {
        let yaml = r#"
log_level: "info"
log_dir: "./logs"
log_file: "syncgate.log"
use_json: false
rotation: "never"
enable_tracing: false
gateway:
  host: "0.0.0.0"
  port: 8080
"#;
        let config = AppConfig::from_yaml_str(yaml);

        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.backend.timeout_secs, 30);
    }

    #[test]
    fn test_env_override_takes_precedence() {
        let mut backend = BackendConfig::default();
        backend.apply_base_url_override(Some("http://10.0.0.5:9000".to_string()));
        assert_eq!(backend.base_url, "http://10.0.0.5:9000");
    }

    #[test]
    fn test_env_override_ignores_unset_and_blank() {
        let mut backend = BackendConfig::default();
        backend.apply_base_url_override(None);
        assert_eq!(backend.base_url, "http://127.0.0.1:8000");

        backend.apply_base_url_override(Some("   ".to_string()));
        assert_eq!(backend.base_url, "http://127.0.0.1:8000");
    }
}
