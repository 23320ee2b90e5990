//! Tag badge components.

use maud::{html, Markup, Render};
use urlencoding::encode;

use crate::content::models::TagSummary;

/// A clickable tag badge linking to the filtered blog listing.
///
/// Shows the tag's display name and occurrence count, colored by the tag's
/// palette key. The active tag renders highlighted and links back to the
/// unfiltered listing so clicking it clears the filter.
#[derive(Debug, Clone)]
pub struct TagBadge<'a> {
    pub tag: &'a TagSummary,
    pub active: bool,
}

impl<'a> TagBadge<'a> {
    #[must_use]
    pub const fn new(tag: &'a TagSummary) -> Self {
        Self { tag, active: false }
    }

    /// Mark this badge as the active filter.
    #[must_use]
    pub const fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }
}

impl Render for TagBadge<'_> {
    fn render(&self) -> Markup {
        let href = if self.active {
            "/blog".to_string()
        } else {
            format!("/blog?tag={}", encode(&self.tag.name))
        };
        let class = if self.active {
            format!("tag {} active", self.tag.color.css_class())
        } else {
            format!("tag {}", self.tag.color.css_class())
        };

        html! {
            a href=(href) class=(class) {
                (self.tag.name) " (" (self.tag.count) ")"
            }
        }
    }
}
