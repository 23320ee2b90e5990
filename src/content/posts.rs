//! Article filtering, ordering, featured selection, and list windowing.

use crate::constants::PARTIAL_WINDOW_SIZE;
use crate::content::models::Article;

/// Select articles matching the active tag query.
///
/// With no active tag every article is returned. Otherwise an article
/// matches when it carries a tag whose lowercased name equals the query;
/// callers are responsible for lowercasing the query first.
#[must_use]
pub fn filter_by_tag<'a>(articles: &'a [Article], active_tag: Option<&str>) -> Vec<&'a Article> {
    match active_tag {
        None | Some("") => articles.iter().collect(),
        Some(query) => articles
            .iter()
            .filter(|article| article.tags.iter().any(|t| t.name.to_lowercase() == query))
            .collect(),
    }
}

/// Sort articles by publish date, most recent first.
///
/// The sort is stable: articles sharing a publish date keep their relative
/// input order.
pub fn sort_by_date_desc(articles: &mut [&Article]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

/// Split off the featured article by slug.
///
/// Returns the featured article (if any slug matches) and the remaining
/// articles in input order. A slug that matches nothing featured nothing;
/// the full input comes back as the general list.
#[must_use]
pub fn split_featured<'a>(
    articles: &'a [Article],
    featured_slug: &str,
) -> (Option<&'a Article>, Vec<&'a Article>) {
    if featured_slug.is_empty() {
        return (None, articles.iter().collect());
    }

    let featured = articles.iter().find(|a| a.slug == featured_slug);
    let rest = articles
        .iter()
        .filter(|a| a.slug != featured_slug)
        .collect();

    (featured, rest)
}

/// How much of the filtered list is currently revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Show only the first [`PARTIAL_WINDOW_SIZE`] articles.
    #[default]
    Partial,
    /// Show the full filtered list.
    All,
}

/// Explicit state machine for the blog listing:
/// `{no-filter, filtered(tag)} x {partial, all}`.
///
/// Owned by the page controller; the filtering and sorting functions stay
/// pure given this state as input. Changing the active filter always resets
/// the display back to the partial window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogListState {
    active_tag: Option<String>,
    mode: DisplayMode,
}

impl BlogListState {
    /// Initial state: no filter, partial window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tag query, already lowercased.
    #[must_use]
    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Transition to the given tag filter (or clear it with `None`).
    ///
    /// Resets the display mode to partial. The tag is lowercased here so the
    /// pure filter function can match on normalized names.
    pub fn set_filter(&mut self, tag: Option<&str>) {
        self.active_tag = tag.filter(|t| !t.is_empty()).map(str::to_lowercase);
        self.mode = DisplayMode::Partial;
    }

    /// Transition to showing the full filtered list.
    pub fn show_all(&mut self) {
        self.mode = DisplayMode::All;
    }

    /// The visible slice of an already-filtered list under this state.
    #[must_use]
    pub fn visible<'a, 'b>(&self, filtered: &'a [&'b Article]) -> &'a [&'b Article] {
        match self.mode {
            DisplayMode::Partial => &filtered[..filtered.len().min(PARTIAL_WINDOW_SIZE)],
            DisplayMode::All => filtered,
        }
    }

    /// Whether the "show more" control should render.
    ///
    /// Only when the partial window is active and the filtered list actually
    /// exceeds it.
    #[must_use]
    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.mode == DisplayMode::Partial && filtered_len > PARTIAL_WINDOW_SIZE
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::content::models::{Tag, TagColor};

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
    }

    fn article(slug: &str, day: u32, tag_names: &[&str]) -> Article {
        Article {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: slug.to_string(),
            description: String::new(),
            cover_image: None,
            icon: None,
            canonical_url: format!("https://example.com/blog/{slug}"),
            published_at: date(day),
            body_html: None,
            tags: tag_names
                .iter()
                .map(|name| Tag {
                    id: (*name).to_string(),
                    name: (*name).to_string(),
                    color: TagColor::Blue,
                })
                .collect(),
        }
    }

    #[test]
    fn test_filter_without_query_returns_everything() {
        let articles = vec![article("a", 1, &["rust"]), article("b", 2, &[])];
        let filtered = filter_by_tag(&articles, None);
        assert_eq!(filtered.len(), 2);

        let filtered = filter_by_tag(&articles, Some(""));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_matches_normalized_tag_name() {
        let articles = vec![
            article("a", 1, &["Rust"]),
            article("b", 2, &["web"]),
            article("c", 3, &["rust", "web"]),
        ];

        let filtered = filter_by_tag(&articles, Some("rust"));
        let slugs: Vec<&str> = filtered.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c"]);
    }

    #[test]
    fn test_sort_descending() {
        let articles = vec![article("old", 1, &[]), article("new", 3, &[]), article("mid", 2, &[])];
        let mut refs: Vec<&Article> = articles.iter().collect();
        sort_by_date_desc(&mut refs);

        let slugs: Vec<&str> = refs.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let articles = vec![
            article("first", 2, &[]),
            article("second", 2, &[]),
            article("third", 2, &[]),
            article("newest", 5, &[]),
        ];
        let mut refs: Vec<&Article> = articles.iter().collect();
        sort_by_date_desc(&mut refs);

        let slugs: Vec<&str> = refs.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "first", "second", "third"]);
    }

    #[test]
    fn test_split_featured() {
        let articles = vec![article("a", 1, &[]), article("b", 2, &[]), article("c", 3, &[])];
        let (featured, rest) = split_featured(&articles, "b");

        assert_eq!(featured.unwrap().slug, "b");
        let slugs: Vec<&str> = rest.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c"]);
    }

    #[test]
    fn test_split_featured_no_match_excludes_nothing() {
        let articles = vec![article("a", 1, &[]), article("b", 2, &[])];
        let (featured, rest) = split_featured(&articles, "missing");

        assert!(featured.is_none());
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn test_windowing_partial_then_all() {
        let articles: Vec<Article> =
            (1..=10).map(|day| article(&format!("a{day}"), day, &[])).collect();
        let refs: Vec<&Article> = articles.iter().collect();

        let mut state = BlogListState::new();
        assert_eq!(state.visible(&refs).len(), 7);
        assert!(state.has_more(refs.len()));

        state.show_all();
        assert_eq!(state.visible(&refs).len(), 10);
        assert!(!state.has_more(refs.len()));
    }

    #[test]
    fn test_windowing_no_show_more_for_short_lists() {
        let articles: Vec<Article> =
            (1..=7).map(|day| article(&format!("a{day}"), day, &[])).collect();
        let refs: Vec<&Article> = articles.iter().collect();

        let state = BlogListState::new();
        assert_eq!(state.visible(&refs).len(), 7);
        assert!(!state.has_more(refs.len()));
    }

    #[test]
    fn test_changing_filter_resets_window() {
        let mut state = BlogListState::new();
        state.show_all();
        assert_eq!(state.mode(), DisplayMode::All);

        state.set_filter(Some("Rust"));
        assert_eq!(state.mode(), DisplayMode::Partial);
        assert_eq!(state.active_tag(), Some("rust"));

        state.show_all();
        state.set_filter(None);
        assert_eq!(state.mode(), DisplayMode::Partial);
        assert_eq!(state.active_tag(), None);
    }
}
