//! Maud page templates.
//!
//! Each page module exports a `render_*` function producing the complete
//! page markup. Handlers in [`super::routes`] fetch and aggregate the data;
//! these functions only present it.

pub mod about;
pub mod article;
pub mod blog;
pub mod feed;
pub mod home;
pub mod learning;

pub use about::render_about;
pub use article::render_article;
pub use blog::{render_blog, BlogPageParams};
pub use feed::render_feed;
pub use home::render_home;
pub use learning::render_learning;
