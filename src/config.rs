#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the upstream bank data service. When unset the server
    /// falls back to the in-memory demo store.
    pub bank_data_url: Option<String>,
    pub bank_data_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("BFF_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);
        let bank_data_timeout_secs = std::env::var("BANK_DATA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.bank_data_timeout_secs);

        Self {
            host: std::env::var("BFF_HOST").unwrap_or(defaults.host),
            port,
            bank_data_url: std::env::var("BANK_DATA_URL").ok(),
            bank_data_timeout_secs,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            bank_data_url: None,
            bank_data_timeout_secs: 10,
        }
    }
}
