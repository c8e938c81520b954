use anyhow::{Context, Result};

/// Browser origins allowed by default: the local Vite dev server and the hosted UI.
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,https://sentic-face-ui.onrender.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub cors_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let raw_origins =
            std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string());

        Ok(Config {
            cors_origins: parse_origins(&raw_origins),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Splits a comma-separated origin list.
///
/// Browsers never send a trailing slash in `Origin`, so one is stripped here.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins() {
        assert_eq!(
            parse_origins(DEFAULT_CORS_ORIGINS),
            vec![
                "http://localhost:5173".to_string(),
                "https://sentic-face-ui.onrender.com".to_string()
            ]
        );
    }

    #[test]
    fn test_trailing_slash_and_whitespace_stripped() {
        assert_eq!(
            parse_origins(" https://sentic-face-ui.onrender.com/ , ,http://localhost:5173"),
            vec![
                "https://sentic-face-ui.onrender.com".to_string(),
                "http://localhost:5173".to_string()
            ]
        );
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_origins("").is_empty());
    }
}
