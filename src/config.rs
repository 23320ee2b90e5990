use thiserror::Error;

use crate::constants::LIKED_VIDEOS_PLAYLIST_ID;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Content platform (articles)
    pub content_api_url: String,
    pub content_api_token: String,
    pub featured_article_slug: String,

    // Video platform (YouTube Data API)
    pub youtube_api_url: String,
    pub youtube_api_key: String,
    pub youtube_channel_id: String,
    pub liked_playlist_id: String,

    // Social platform (Bluesky / AT Protocol)
    pub bluesky_service: String,
    pub bluesky_handle: String,
    pub bluesky_app_password: String,

    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Site identity
    pub site_title: String,
    pub site_author: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Content platform
            content_api_url: required_env("CONTENT_API_URL")?,
            content_api_token: required_env("CONTENT_API_TOKEN")?,
            featured_article_slug: env_or_default("FEATURED_ARTICLE_SLUG", ""),

            // Video platform
            youtube_api_url: env_or_default(
                "YOUTUBE_API_URL",
                "https://www.googleapis.com/youtube/v3",
            ),
            youtube_api_key: required_env("YOUTUBE_API_KEY")?,
            youtube_channel_id: required_env("YOUTUBE_CHANNEL_ID")?,
            liked_playlist_id: env_or_default("LIKED_PLAYLIST_ID", LIKED_VIDEOS_PLAYLIST_ID),

            // Social platform
            bluesky_service: env_or_default("BLUESKY_SERVICE", "https://bsky.social"),
            bluesky_handle: required_env("BLUESKY_HANDLE")?,
            bluesky_app_password: required_env("BLUESKY_APP_PASSWORD")?,

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            // Site identity
            site_title: env_or_default("SITE_TITLE", "Portfolio"),
            site_author: env_or_default("SITE_AUTHOR", ""),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("CONTENT_API_URL", &self.content_api_url),
            ("YOUTUBE_API_URL", &self.youtube_api_url),
            ("BLUESKY_SERVICE", &self.bluesky_service),
        ] {
            if url::Url::parse(value).is_err() {
                return Err(ConfigError::InvalidValue {
                    name: name.to_string(),
                    message: format!("must be a valid URL, got '{value}'"),
                });
            }
        }
        if self.youtube_channel_id.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "YOUTUBE_CHANNEL_ID".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.bluesky_handle.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "BLUESKY_HANDLE".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.liked_playlist_id.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "LIKED_PLAYLIST_ID".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
