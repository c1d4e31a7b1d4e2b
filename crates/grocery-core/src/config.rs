//! App Configuration
//!
//! Built once at startup from build-time values and handed to components
//! through context. A missing Gemini key is a supported mode: recipe import
//! stays visible but explains why it cannot run.

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
pub const DEFAULT_LINK_STAGGER_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub gemini: Option<GeminiConfig>,
    pub toast_duration_ms: u32,
    pub link_stagger_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini: None,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            link_stagger_ms: DEFAULT_LINK_STAGGER_MS,
        }
    }
}

impl AppConfig {
    /// Build config from raw values (normally `option_env!` results).
    ///
    /// - `api_key`: blank or absent disables recipe import
    /// - `model`: defaults to `gemini-1.5-flash`
    /// - `endpoint`: defaults to the public v1beta endpoint, trailing `/` trimmed
    pub fn from_values(api_key: Option<&str>, model: Option<&str>, endpoint: Option<&str>) -> Self {
        let gemini = non_blank(api_key).map(|key| GeminiConfig {
            api_key: key.to_string(),
            model: non_blank(model).unwrap_or(DEFAULT_GEMINI_MODEL).to_string(),
            endpoint: non_blank(endpoint)
                .unwrap_or(DEFAULT_GEMINI_ENDPOINT)
                .trim_end_matches('/')
                .to_string(),
        });

        Self {
            gemini,
            ..Self::default()
        }
    }

    pub fn import_enabled(&self) -> bool {
        self.gemini.is_some()
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_key_disables_import() {
        assert!(!AppConfig::from_values(None, Some("m"), None).import_enabled());
        assert!(!AppConfig::from_values(Some("   "), None, None).import_enabled());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(Some(" key "), None, Some(""));
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "key");
        assert_eq!(gemini.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(gemini.endpoint, DEFAULT_GEMINI_ENDPOINT);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.link_stagger_ms, 300);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("k"), Some("gemini-2.0-flash"), Some("http://localhost:8080/v1/"));
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.model, "gemini-2.0-flash");
        assert_eq!(gemini.endpoint, "http://localhost:8080/v1");
    }
}
