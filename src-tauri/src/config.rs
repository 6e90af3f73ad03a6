use std::env;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8000;

/// Scanner backend endpoint. Fixed local default, overridable through the
/// environment for non-standard deployments.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub host: String,
    pub port: u16,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl BackendConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = env::var("VULNORA_BACKEND_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Ok(port) = env::var("VULNORA_BACKEND_PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => log::warn!(
                    "invalid VULNORA_BACKEND_PORT {:?}, keeping {}",
                    port,
                    config.port
                ),
            }
        }
        config
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn base_url_is_stable_across_calls() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url(), config.base_url());
    }

    // Single test mutates the environment so parallel tests never race on it.
    #[test]
    fn env_overrides_apply_and_bad_port_is_ignored() {
        env::set_var("VULNORA_BACKEND_HOST", "scanner.internal");
        env::set_var("VULNORA_BACKEND_PORT", "9001");
        let config = BackendConfig::from_env();
        assert_eq!(config.base_url(), "http://scanner.internal:9001");

        env::set_var("VULNORA_BACKEND_PORT", "not-a-port");
        let config = BackendConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);

        env::remove_var("VULNORA_BACKEND_HOST");
        env::remove_var("VULNORA_BACKEND_PORT");
    }
}
