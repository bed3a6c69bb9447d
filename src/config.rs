use std::env;

/// Default backend host for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::new(env::var("MARKAZ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Paths are joined with a leading slash
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Config { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = Config::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_plain_base_url_unchanged() {
        let config = Config::new("https://api.nustmarkaz.com");
        assert_eq!(config.base_url, "https://api.nustmarkaz.com");
    }
}
