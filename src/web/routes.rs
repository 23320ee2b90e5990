use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use super::pages;
use super::AppState;
use crate::content::{
    extract_tags, filter_by_tag, group_by_playlist, move_liked_playlist_last, normalize_feed,
    sort_by_date_desc, split_featured, BlogListState,
};
use crate::theme::Theme;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/blog", get(blog))
        .route("/blog/:slug", get(article))
        .route("/learning", get(learning))
        .route("/feed", get(feed))
        .route("/theme", post(toggle_theme))
        .route("/healthz", get(health))
}

fn theme_from(headers: &HeaderMap) -> Theme {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());
    Theme::from_cookie_header(cookie)
}

/// Render a platform fetch failure as a 502 without leaking details.
fn bad_gateway(what: &str, error: &impl std::fmt::Display) -> Response {
    tracing::error!("Failed to fetch {what}: {error}");
    (StatusCode::BAD_GATEWAY, format!("Upstream error fetching {what}")).into_response()
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let theme = theme_from(&headers);

    // Articles and video data live on unrelated platforms; fetch in parallel.
    let (articles, latest_video) =
        tokio::join!(state.cms.fetch_articles(), state.youtube.latest_video());

    let articles = match articles {
        Ok(a) => a,
        Err(e) => return bad_gateway("articles", &e),
    };
    let latest_video = match latest_video {
        Ok(v) => v,
        Err(e) => return bad_gateway("latest video", &e),
    };

    let mut recent: Vec<_> = articles.iter().collect();
    sort_by_date_desc(&mut recent);
    recent.truncate(3);

    let html = pages::render_home(&state.config, theme, &recent, latest_video.as_ref());
    Html(html.into_string()).into_response()
}

async fn about(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let theme = theme_from(&headers);
    let html = pages::render_about(&state.config, theme);
    Html(html.into_string()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct BlogParams {
    tag: Option<String>,
    show: Option<String>,
}

async fn blog(
    State(state): State<AppState>,
    Query(params): Query<BlogParams>,
    headers: HeaderMap,
) -> Response {
    let theme = theme_from(&headers);

    let articles = match state.cms.fetch_articles().await {
        Ok(a) => a,
        Err(e) => return bad_gateway("articles", &e),
    };

    // Map the query string onto the explicit listing state machine. Setting
    // the filter resets the window, so `show=all` is applied afterwards.
    let mut list_state = BlogListState::new();
    list_state.set_filter(params.tag.as_deref());
    if params.show.as_deref() == Some("all") {
        list_state.show_all();
    }

    let tags = extract_tags(&articles);
    let (featured, rest) = split_featured(&articles, &state.config.featured_article_slug);

    let rest_owned: Vec<_> = rest.into_iter().cloned().collect();
    let mut filtered = filter_by_tag(&rest_owned, list_state.active_tag());
    sort_by_date_desc(&mut filtered);

    let visible = list_state.visible(&filtered);
    let show_more = list_state.has_more(filtered.len());

    let html = pages::render_blog(pages::BlogPageParams {
        config: &state.config,
        theme,
        tags: &tags,
        featured: featured.filter(|_| list_state.active_tag().is_none()),
        articles: visible,
        list_state: &list_state,
        show_more,
    });
    Html(html.into_string()).into_response()
}

async fn article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let theme = theme_from(&headers);

    let articles = match state.cms.fetch_articles().await {
        Ok(a) => a,
        Err(e) => return bad_gateway("articles", &e),
    };

    let Some(article) = articles.iter().find(|a| a.slug == slug) else {
        return (StatusCode::NOT_FOUND, "Article not found").into_response();
    };

    let html = pages::render_article(&state.config, theme, article);
    Html(html.into_string()).into_response()
}

async fn learning(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let theme = theme_from(&headers);

    let (playlists, stats) =
        tokio::join!(state.youtube.fetch_playlists(), state.youtube.channel_stats());

    let mut playlists = match playlists {
        Ok(p) => p,
        Err(e) => return bad_gateway("playlists", &e),
    };
    let stats = match stats {
        Ok(s) => s,
        Err(e) => return bad_gateway("channel stats", &e),
    };

    let mut pages_of_videos = Vec::with_capacity(playlists.len());
    for playlist in &playlists {
        match state.youtube.fetch_playlist_items(&playlist.id).await {
            Ok(videos) => pages_of_videos.push(videos),
            Err(e) => return bad_gateway("playlist videos", &e),
        }
    }

    let videos_by_playlist = group_by_playlist(pages_of_videos);
    move_liked_playlist_last(&mut playlists, &state.config.liked_playlist_id);

    let html = pages::render_learning(&state.config, theme, &playlists, &videos_by_playlist, stats);
    Html(html.into_string()).into_response()
}

async fn feed(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let theme = theme_from(&headers);
    let config = &state.config;

    let session = match state
        .bluesky
        .create_session(&config.bluesky_handle, &config.bluesky_app_password)
        .await
    {
        Ok(s) => s,
        Err(e) => return bad_gateway("social session", &e),
    };

    // Profile, own posts, and the followed-accounts timeline are independent;
    // only the pinned post depends on the profile result.
    let (profile, own_posts, timeline) = tokio::join!(
        state.bluesky.get_profile(&config.bluesky_handle),
        state.bluesky.get_author_feed(&config.bluesky_handle, 50),
        state.bluesky.get_timeline(&session, 50),
    );

    let profile = match profile {
        Ok(p) => p,
        Err(e) => return bad_gateway("social profile", &e),
    };
    let own_posts = match own_posts {
        Ok(p) => p,
        Err(e) => return bad_gateway("own posts", &e),
    };
    let timeline = match timeline {
        Ok(p) => p,
        Err(e) => return bad_gateway("timeline", &e),
    };

    let pinned = match &profile.pinned_post_uri {
        Some(uri) => match state.bluesky.get_post(uri).await {
            Ok(post) => post,
            Err(e) => return bad_gateway("pinned post", &e),
        },
        None => None,
    };

    let posts = normalize_feed(own_posts, timeline);

    let html = pages::render_feed(config, theme, &profile, pinned.as_ref(), &posts);
    Html(html.into_string()).into_response()
}

// ========== Actions ==========

async fn toggle_theme(headers: HeaderMap) -> Response {
    let next = theme_from(&headers).toggled();

    let back = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/")
        .to_string();

    (
        [(header::SET_COOKIE, next.set_cookie_value())],
        Redirect::to(&back),
    )
        .into_response()
}

async fn health() -> &'static str {
    "OK"
}
