//! Maud HTML components for the web UI.
//!
//! Reusable building blocks for the portfolio pages:
//!
//! - `layout`: base page skeleton, navigation, and footer
//! - `badge`: tag badges with palette colors and counts
//! - `button`: buttons, link buttons, and the show-more control
//! - `card`: article, video, playlist, feed post, and stats cards
//! - `metadata`: Open Graph metadata tags

pub mod badge;
pub mod button;
pub mod card;
pub mod layout;
pub mod metadata;

pub use badge::TagBadge;
pub use button::{Button, ButtonVariant, ShowMoreLink};
pub use card::{
    format_count, ArticleCard, EmptyState, FeedPostCard, PlaylistCard, StatsCard, VideoCard,
};
pub use layout::BaseLayout;
pub use metadata::{truncate_text, OpenGraphMetadata};
