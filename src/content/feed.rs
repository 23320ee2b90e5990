//! Social feed normalization: merge, sanitize, de-duplicate, and order.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::content::models::SocialPost;

/// Embeds nested deeper than this are rejected as malformed rather than
/// round-tripped.
const MAX_EMBED_DEPTH: usize = 32;

#[derive(Debug, Error)]
pub enum FeedShapeError {
    #[error("embed nesting exceeds {MAX_EMBED_DEPTH} levels")]
    EmbedTooDeep,
    #[error("embed failed serialization round trip: {0}")]
    EmbedNotSerializable(#[from] serde_json::Error),
}

/// Merge the own-posts feed and the followed-accounts feed into one
/// chronological timeline.
///
/// Posts without a text body are discarded. Every surviving embed is
/// deep-copied through a serialization round trip ([`sanitize_embed`]) so
/// only plain data reaches the render boundary; a post whose embed fails
/// sanitization is dropped with a warning rather than failing the whole
/// feed. Duplicates (same content id) are kept once, first occurrence wins.
/// The result is sorted by creation time ascending, oldest first - the
/// inverse of article ordering.
///
/// Normalizing an already-normalized feed yields an identical result.
#[must_use]
pub fn normalize_feed(own: Vec<SocialPost>, following: Vec<SocialPost>) -> Vec<SocialPost> {
    let mut seen_cids: HashSet<String> = HashSet::new();
    let mut posts: Vec<SocialPost> = Vec::with_capacity(own.len() + following.len());

    for mut post in own.into_iter().chain(following) {
        if post.text.trim().is_empty() {
            continue;
        }
        if !seen_cids.insert(post.cid.clone()) {
            continue;
        }

        if let Some(embed) = post.embed.take() {
            match sanitize_embed(&embed) {
                Ok(clean) => post.embed = Some(clean),
                Err(e) => {
                    warn!(cid = %post.cid, error = %e, "Dropping post with malformed embed");
                    continue;
                }
            }
        }

        posts.push(post);
    }

    posts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    posts
}

/// Deep-copy an embed value through a serialization round trip.
///
/// The returned value contains only plain data (objects, arrays, strings,
/// numbers, booleans, nulls) and is guaranteed to survive further JSON
/// round trips unchanged. Plain-data input is a fixed point of this
/// function.
///
/// # Errors
///
/// Returns an error if the embed nests beyond [`MAX_EMBED_DEPTH`] or fails
/// to serialize.
pub fn sanitize_embed(embed: &Value) -> Result<Value, FeedShapeError> {
    if depth_of(embed) > MAX_EMBED_DEPTH {
        return Err(FeedShapeError::EmbedTooDeep);
    }

    let text = serde_json::to_string(embed)?;
    Ok(serde_json::from_str(&text)?)
}

fn depth_of(value: &Value) -> usize {
    match value {
        Value::Object(map) => 1 + map.values().map(depth_of).max().unwrap_or(0),
        Value::Array(items) => 1 + items.iter().map(depth_of).max().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::content::models::SocialAuthor;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn post(cid: &str, text: &str, day: u32) -> SocialPost {
        SocialPost {
            cid: cid.to_string(),
            uri: format!("at://did:plc:abc/app.bsky.feed.post/{cid}"),
            author: SocialAuthor {
                did: "did:plc:abc".to_string(),
                handle: "alice.bsky.social".to_string(),
                display_name: Some("Alice".to_string()),
                avatar: None,
            },
            text: text.to_string(),
            reply_count: 0,
            repost_count: 0,
            like_count: 0,
            embed: None,
            created_at: date(day),
        }
    }

    #[test]
    fn test_merges_and_sorts_ascending() {
        let own = vec![post("c", "third", 3), post("a", "first", 1)];
        let following = vec![post("b", "second", 2)];

        let feed = normalize_feed(own, following);
        let cids: Vec<&str> = feed.iter().map(|p| p.cid.as_str()).collect();
        assert_eq!(cids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_drops_textless_posts() {
        let own = vec![post("a", "", 1), post("b", "   ", 2), post("c", "hello", 3)];
        let feed = normalize_feed(own, vec![]);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].cid, "c");
    }

    #[test]
    fn test_deduplicates_by_cid() {
        let own = vec![post("a", "mine", 1)];
        let following = vec![post("a", "mine", 1), post("b", "theirs", 2)];

        let feed = normalize_feed(own, following);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_embed_survives_round_trip() {
        let embed = json!({
            "$type": "app.bsky.embed.external#view",
            "external": {
                "uri": "https://example.com",
                "title": "Example",
                "description": "An example link",
            },
        });

        let mut p = post("a", "with embed", 1);
        p.embed = Some(embed.clone());

        let feed = normalize_feed(vec![p], vec![]);
        assert_eq!(feed[0].embed, Some(embed));
    }

    #[test]
    fn test_sanitize_is_fixed_point_for_plain_data() {
        let embed = json!({"images": [{"thumb": "t", "fullsize": "f", "alt": null}], "n": 1.5});
        let once = sanitize_embed(&embed).unwrap();
        let twice = sanitize_embed(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, embed);
    }

    #[test]
    fn test_overly_deep_embed_is_rejected() {
        let mut value = json!("leaf");
        for _ in 0..40 {
            value = json!({ "inner": value });
        }

        let err = sanitize_embed(&value).unwrap_err();
        assert!(matches!(err, FeedShapeError::EmbedTooDeep));
    }

    #[test]
    fn test_post_with_malformed_embed_is_dropped() {
        let mut value = json!("leaf");
        for _ in 0..40 {
            value = json!([value]);
        }

        let mut bad = post("bad", "deep embed", 1);
        bad.embed = Some(value);
        let good = post("good", "fine", 2);

        let feed = normalize_feed(vec![bad, good], vec![]);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].cid, "good");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let mut with_embed = post("a", "embedded", 1);
        with_embed.embed = Some(json!({"external": {"uri": "https://example.com"}}));
        let own = vec![with_embed, post("b", "plain", 2)];

        let once = normalize_feed(own, vec![]);
        let twice = normalize_feed(once.clone(), vec![]);
        assert_eq!(once, twice);
    }
}
