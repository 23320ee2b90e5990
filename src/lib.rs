//! Portfolio site library.
//!
//! A personal portfolio and blog server that aggregates content from three
//! external platforms (a content-management API for articles, the YouTube
//! Data API for videos, and the Bluesky API for social posts) and renders
//! it with maud. The aggregation layer in [`content`] is pure; fetching
//! lives in [`sources`] and presentation in [`web`] and [`components`].

pub mod components;
pub mod config;
pub mod constants;
pub mod content;
pub mod sources;
pub mod theme;
pub mod web;
