pub const BACKEND_URL_ENV: &str = "ART_TUTOR_BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }
}

impl BackendConfig {
    /// Reads `ART_TUTOR_BACKEND_URL`, ignoring blank values.
    pub fn from_env() -> Self {
        std::env::var(BACKEND_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|url| Self::with_base_url(&url))
            .unwrap_or_default()
    }

    pub fn with_base_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Joins the base URL and `path` with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
