//! Service configuration
//!
//! Reads config from env vars:
//!   GITHUB_TOKEN    — contents API credential (optional; absent skips sync)
//!   GITHUB_API_URL  — API base URL (default: https://api.github.com)
//!   THEME_CSS_PATH  — stylesheet holding the @theme block (default: app/globals.css)
//!   PORT            — listen port (default: 3000)

use std::path::PathBuf;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_THEME_CSS_PATH: &str = "app/globals.css";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub theme_css_path: PathBuf,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            github_token: None,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            theme_css_path: PathBuf::from(DEFAULT_THEME_CSS_PATH),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let github_token = lookup("GITHUB_TOKEN").filter(|t| !t.trim().is_empty());
        let github_api_url = lookup("GITHUB_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.github_api_url);
        let theme_css_path = lookup("THEME_CSS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.theme_css_path);
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        Self {
            github_token,
            github_api_url,
            theme_css_path,
            port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
