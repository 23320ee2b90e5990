//! Tag extraction: derive the global tag set (with counts) from articles.

use crate::content::models::{Article, Tag, TagSummary};

/// Extract the de-duplicated set of tags across all articles.
///
/// Each distinct tag (structural equality over id, name, and color) appears
/// exactly once, with `count` equal to the number of articles carrying a
/// structurally equal tag. Counting happens against the tags exactly as
/// fetched; the display name is lowercased only in the returned summaries.
/// Two source tags differing only by casing therefore count separately and
/// both appear in the output.
///
/// Output order follows first occurrence across the input; callers treat the
/// result as a set.
#[must_use]
pub fn extract_tags(articles: &[Article]) -> Vec<TagSummary> {
    let mut seen: Vec<&Tag> = Vec::new();
    let mut summaries: Vec<TagSummary> = Vec::new();

    for article in articles {
        for tag in &article.tags {
            if seen.contains(&tag) {
                continue;
            }
            seen.push(tag);

            let count = articles
                .iter()
                .flat_map(|a| &a.tags)
                .filter(|t| *t == tag)
                .count();

            summaries.push(TagSummary {
                id: tag.id.clone(),
                name: tag.name.to_lowercase(),
                color: tag.color,
                count,
            });
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::content::models::TagColor;

    fn article(id: &str, tags: Vec<Tag>) -> Article {
        Article {
            id: id.to_string(),
            slug: format!("article-{id}"),
            title: format!("Article {id}"),
            description: String::new(),
            cover_image: None,
            icon: None,
            canonical_url: format!("https://example.com/blog/article-{id}"),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            body_html: None,
            tags,
        }
    }

    fn tag(id: &str, name: &str, color: TagColor) -> Tag {
        Tag {
            id: id.to_string(),
            name: name.to_string(),
            color,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_tags(&[]).is_empty());
    }

    #[test]
    fn test_article_without_tags_contributes_nothing() {
        let articles = vec![article("1", vec![])];
        assert!(extract_tags(&articles).is_empty());
    }

    #[test]
    fn test_counts_and_uniqueness() {
        let rust = tag("a", "rust", TagColor::Orange);
        let web = tag("b", "web", TagColor::Blue);
        let articles = vec![
            article("1", vec![rust.clone(), web.clone()]),
            article("2", vec![rust.clone()]),
            article("3", vec![web.clone()]),
        ];

        let summaries = extract_tags(&articles);
        assert_eq!(summaries.len(), 2);

        let rust_summary = summaries.iter().find(|s| s.name == "rust").unwrap();
        assert_eq!(rust_summary.count, 2);
        assert_eq!(rust_summary.color, TagColor::Orange);

        let web_summary = summaries.iter().find(|s| s.name == "web").unwrap();
        assert_eq!(web_summary.count, 2);
    }

    #[test]
    fn test_names_lowercased_for_display() {
        let articles = vec![article("1", vec![tag("a", "React", TagColor::Blue)])];
        let summaries = extract_tags(&articles);
        assert_eq!(summaries[0].name, "react");
    }

    #[test]
    fn test_counting_uses_raw_identity() {
        // Tags differing only by casing are distinct before normalization:
        // each counts separately even though their display names collide.
        let articles = vec![
            article("1", vec![tag("a", "React", TagColor::Blue)]),
            article("2", vec![tag("a", "react", TagColor::Blue)]),
        ];

        let summaries = extract_tags(&articles);
        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().all(|s| s.name == "react"));
        assert!(summaries.iter().all(|s| s.count == 1));
    }

    #[test]
    fn test_identical_raw_tags_count_together() {
        let articles = vec![
            article("1", vec![tag("a", "react", TagColor::Blue)]),
            article("2", vec![tag("a", "react", TagColor::Blue)]),
        ];

        let summaries = extract_tags(&articles);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].count, 2);
    }

    #[test]
    fn test_no_structurally_equal_duplicates_in_output() {
        let rust = tag("a", "rust", TagColor::Orange);
        let articles = vec![
            article("1", vec![rust.clone()]),
            article("2", vec![rust.clone()]),
            article("3", vec![rust.clone()]),
        ];

        let summaries = extract_tags(&articles);
        for (i, a) in summaries.iter().enumerate() {
            for b in &summaries[i + 1..] {
                assert!(!(a.id == b.id && a.name == b.name && a.color == b.color));
            }
        }
    }
}
