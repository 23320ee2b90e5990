//! Client for the content-management platform (articles).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{check_status, http_client, SourceError};
use crate::content::models::{Article, Tag, TagColor};

const PLATFORM: &str = "content API";

pub struct CmsClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Wire shape of the article listing response.
#[derive(Debug, Deserialize)]
struct ArticlesResponse {
    articles: Vec<WireArticle>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    id: String,
    slug: String,
    title: String,
    description: String,
    #[serde(rename = "coverImage")]
    cover_image: Option<WireImage>,
    icon: Option<String>,
    url: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
    body: Option<String>,
    #[serde(default)]
    tags: Vec<WireTag>,
}

#[derive(Debug, Deserialize)]
struct WireImage {
    url: String,
}

/// Tags decode strictly: a missing name or an unknown palette color is a
/// data-shape error, not something to coerce.
#[derive(Debug, Deserialize)]
struct WireTag {
    id: String,
    name: String,
    color: TagColor,
}

impl CmsClient {
    #[must_use]
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Fetch all articles from the content platform.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// response that does not match the expected shape.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>, SourceError> {
        let url = format!("{}/articles", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| SourceError::request(PLATFORM, e))?;

        let body: ArticlesResponse = check_status(PLATFORM, response)?
            .json()
            .await
            .map_err(|e| SourceError::shape(PLATFORM, e.to_string()))?;

        Ok(body.articles.into_iter().map(WireArticle::into_article).collect())
    }
}

impl WireArticle {
    fn into_article(self) -> Article {
        Article {
            id: self.id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            cover_image: self.cover_image.map(|img| img.url),
            icon: self.icon,
            canonical_url: self.url,
            published_at: self.published_at,
            body_html: self.body,
            tags: self
                .tags
                .into_iter()
                .map(|t| Tag {
                    id: t.id,
                    name: t.name,
                    color: t.color,
                })
                .collect(),
        }
    }
}
