//! Client for the Bluesky (AT Protocol) social platform.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{check_status, http_client, SourceError};
use crate::content::models::{SocialAuthor, SocialPost, SocialProfile};

const PLATFORM: &str = "Bluesky API";

// Extracts the record key from an AT post URI.
static AT_URI_PARSER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^at://[^/]+/app\.bsky\.feed\.post/([a-zA-Z0-9]+)$").unwrap());

pub struct BlueskyClient {
    client: reqwest::Client,
    base_url: String,
}

/// An authenticated session from `com.atproto.server.createSession`.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_jwt: String,
    pub did: String,
}

#[derive(Debug, Serialize)]
struct CreateSessionRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateSessionResponse {
    #[serde(rename = "accessJwt")]
    access_jwt: String,
    did: String,
}

#[derive(Debug, Deserialize)]
struct WireProfile {
    did: String,
    handle: String,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    avatar: Option<String>,
    description: Option<String>,
    #[serde(rename = "followersCount", default)]
    followers_count: u64,
    #[serde(rename = "followsCount", default)]
    follows_count: u64,
    #[serde(rename = "postsCount", default)]
    posts_count: u64,
    #[serde(rename = "pinnedPost")]
    pinned_post: Option<WireStrongRef>,
}

#[derive(Debug, Deserialize)]
struct WireStrongRef {
    uri: String,
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    feed: Vec<WireFeedItem>,
}

#[derive(Debug, Deserialize)]
struct WireFeedItem {
    post: WirePost,
}

#[derive(Debug, Deserialize)]
struct PostsResponse {
    posts: Vec<WirePost>,
}

#[derive(Debug, Deserialize)]
struct WirePost {
    uri: String,
    cid: String,
    author: WireAuthor,
    record: WireRecord,
    #[serde(default)]
    embed: Option<serde_json::Value>,
    #[serde(rename = "replyCount", default)]
    reply_count: u64,
    #[serde(rename = "repostCount", default)]
    repost_count: u64,
    #[serde(rename = "likeCount", default)]
    like_count: u64,
}

#[derive(Debug, Deserialize)]
struct WireAuthor {
    did: String,
    handle: String,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    avatar: Option<String>,
}

/// Parsed record body of a post. The record may carry its own embed copy;
/// only the text and timestamp are meaningful here.
#[derive(Debug, Deserialize)]
struct WireRecord {
    #[serde(default)]
    text: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

/// Build the public web URL for a post from its AT URI and author handle.
///
/// Returns `None` when the URI is not a post URI.
#[must_use]
pub fn post_web_url(uri: &str, handle: &str) -> Option<String> {
    AT_URI_PARSER
        .captures(uri)
        .map(|caps| format!("https://bsky.app/profile/{handle}/post/{}", &caps[1]))
}

impl BlueskyClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn xrpc(&self, method: &str) -> String {
        format!("{}/xrpc/{method}", self.base_url)
    }

    /// Authenticate with an identifier and app password.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, rejected credentials, or a
    /// malformed response.
    pub async fn create_session(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Session, SourceError> {
        let response = self
            .client
            .post(self.xrpc("com.atproto.server.createSession"))
            .json(&CreateSessionRequest {
                identifier,
                password,
            })
            .send()
            .await
            .map_err(|e| SourceError::request(PLATFORM, e))?;

        let body: CreateSessionResponse = check_status(PLATFORM, response)?
            .json()
            .await
            .map_err(|e| SourceError::shape(PLATFORM, e.to_string()))?;

        Ok(Session {
            access_jwt: body.access_jwt,
            did: body.did,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        session: Option<&Session>,
    ) -> Result<T, SourceError> {
        let mut request = self.client.get(url);
        if let Some(session) = session {
            request = request.bearer_auth(&session.access_jwt);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SourceError::request(PLATFORM, e))?;

        check_status(PLATFORM, response)?
            .json()
            .await
            .map_err(|e| SourceError::shape(PLATFORM, e.to_string()))
    }

    /// Fetch an actor's profile summary.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed response.
    pub async fn get_profile(&self, actor: &str) -> Result<SocialProfile, SourceError> {
        let url = format!(
            "{}?actor={}",
            self.xrpc("app.bsky.actor.getProfile"),
            urlencoding::encode(actor)
        );

        let profile: WireProfile = self.get_json(&url, None).await?;
        Ok(profile.into_profile())
    }

    /// Fetch the actor's own posts feed.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed response.
    pub async fn get_author_feed(
        &self,
        actor: &str,
        limit: u32,
    ) -> Result<Vec<SocialPost>, SourceError> {
        let url = format!(
            "{}?actor={}&limit={limit}",
            self.xrpc("app.bsky.feed.getAuthorFeed"),
            urlencoding::encode(actor)
        );

        let body: FeedResponse = self.get_json(&url, None).await?;
        Ok(body
            .feed
            .into_iter()
            .map(|item| item.post.into_post())
            .collect())
    }

    /// Fetch the followed-accounts timeline for the authenticated session.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed response.
    pub async fn get_timeline(
        &self,
        session: &Session,
        limit: u32,
    ) -> Result<Vec<SocialPost>, SourceError> {
        let url = format!("{}?limit={limit}", self.xrpc("app.bsky.feed.getTimeline"));

        let body: FeedResponse = self.get_json(&url, Some(session)).await?;
        Ok(body
            .feed
            .into_iter()
            .map(|item| item.post.into_post())
            .collect())
    }

    /// Resolve a single post by AT URI (used for the pinned post).
    ///
    /// Returns `None` when the platform no longer has the post.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed response.
    pub async fn get_post(&self, uri: &str) -> Result<Option<SocialPost>, SourceError> {
        let url = format!(
            "{}?uris={}",
            self.xrpc("app.bsky.feed.getPosts"),
            urlencoding::encode(uri)
        );

        let body: PostsResponse = self.get_json(&url, None).await?;
        Ok(body.posts.into_iter().next().map(WirePost::into_post))
    }
}

impl WireProfile {
    fn into_profile(self) -> SocialProfile {
        SocialProfile {
            did: self.did,
            handle: self.handle,
            display_name: self.display_name,
            avatar: self.avatar,
            description: self.description,
            followers_count: self.followers_count,
            follows_count: self.follows_count,
            posts_count: self.posts_count,
            pinned_post_uri: self.pinned_post.map(|r| r.uri),
        }
    }
}

impl WirePost {
    fn into_post(self) -> SocialPost {
        SocialPost {
            uri: self.uri,
            cid: self.cid,
            author: SocialAuthor {
                did: self.author.did,
                handle: self.author.handle,
                display_name: self.author.display_name,
                avatar: self.author.avatar,
            },
            text: self.record.text,
            reply_count: self.reply_count,
            repost_count: self.repost_count,
            like_count: self.like_count,
            embed: self.embed,
            created_at: self.record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_web_url() {
        let url = post_web_url(
            "at://did:plc:abc123/app.bsky.feed.post/3kxyz",
            "alice.bsky.social",
        );
        assert_eq!(
            url.as_deref(),
            Some("https://bsky.app/profile/alice.bsky.social/post/3kxyz")
        );

        assert!(post_web_url("at://did:plc:abc123/app.bsky.feed.like/3kxyz", "alice").is_none());
        assert!(post_web_url("https://bsky.app/profile/alice", "alice").is_none());
    }

    #[test]
    fn test_wire_post_decodes_with_embed() {
        let json = r#"{
            "uri": "at://did:plc:abc/app.bsky.feed.post/3k1",
            "cid": "bafyabc",
            "author": {"did": "did:plc:abc", "handle": "alice.bsky.social"},
            "record": {"text": "hello", "createdAt": "2024-03-01T12:00:00Z"},
            "embed": {"$type": "app.bsky.embed.external#view",
                      "external": {"uri": "https://example.com", "title": "t", "description": "d"}},
            "replyCount": 1,
            "repostCount": 2,
            "likeCount": 3
        }"#;

        let post = serde_json::from_str::<WirePost>(json).unwrap().into_post();
        assert_eq!(post.cid, "bafyabc");
        assert_eq!(post.like_count, 3);
        assert!(post.embed.is_some());
    }

    #[test]
    fn test_wire_post_counters_default_to_zero() {
        let json = r#"{
            "uri": "at://did:plc:abc/app.bsky.feed.post/3k1",
            "cid": "bafyabc",
            "author": {"did": "did:plc:abc", "handle": "alice.bsky.social"},
            "record": {"text": "hello", "createdAt": "2024-03-01T12:00:00Z"}
        }"#;

        let post = serde_json::from_str::<WirePost>(json).unwrap().into_post();
        assert_eq!(post.reply_count, 0);
        assert!(post.embed.is_none());
    }
}
