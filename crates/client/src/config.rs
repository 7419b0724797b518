/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local Strapi instance. In
/// production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL without the `/api` prefix
    /// (default: `http://localhost:1337`).
    pub base_url: String,
    /// Outbound request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `XTRAWRKX_API_URL`     | `http://localhost:1337` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("XTRAWRKX_API_URL").unwrap_or_else(|_| "http://localhost:1337".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            request_timeout_secs,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337".to_string(),
            request_timeout_secs: 30,
        }
    }
}
