//! Clients for the three external content platforms.
//!
//! Each client wraps a [`reqwest::Client`], decodes the platform's wire
//! format with locally-defined serde structs, and converts into the domain
//! types in [`crate::content::models`]. Base URLs come from configuration so
//! tests can point a client at a mock server.

pub mod bluesky;
pub mod cms;
pub mod youtube;

use thiserror::Error;

pub use bluesky::BlueskyClient;
pub use cms::CmsClient;
pub use youtube::YouTubeClient;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {platform} failed: {source}")]
    Request {
        platform: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{platform} returned status {status}")]
    Status {
        platform: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("malformed {platform} response: {message}")]
    Shape {
        platform: &'static str,
        message: String,
    },
}

impl SourceError {
    pub(crate) fn request(platform: &'static str, source: reqwest::Error) -> Self {
        Self::Request { platform, source }
    }

    pub(crate) fn shape(platform: &'static str, message: impl Into<String>) -> Self {
        Self::Shape {
            platform,
            message: message.into(),
        }
    }
}

/// Build the shared HTTP client used by all platform clients.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(crate::constants::API_USER_AGENT)
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
}

/// Check a response status, mapping non-success to [`SourceError::Status`].
pub(crate) fn check_status(
    platform: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SourceError::Status { platform, status })
    }
}
