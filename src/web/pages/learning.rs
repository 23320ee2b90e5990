//! Learning page: channel stats and playlists with their videos.

use std::collections::HashMap;

use maud::{html, Markup};

use crate::components::{
    BaseLayout, EmptyState, OpenGraphMetadata, PlaylistCard, StatsCard, VideoCard,
};
use crate::config::Config;
use crate::content::models::{ChannelStats, PlaylistPreview, VideoPreview};
use crate::content::videos::watch_all_url;
use crate::theme::Theme;

pub fn render_learning(
    config: &Config,
    theme: Theme,
    playlists: &[PlaylistPreview],
    videos_by_playlist: &HashMap<String, Vec<VideoPreview>>,
    stats: ChannelStats,
) -> Markup {
    let content = html! {
        section .learning {
            h1 { "Learning" }
            p { "Playlists and videos from the channel, grouped by topic." }

            .stats-grid {
                (StatsCard::new("views", stats.view_count))
                (StatsCard::new("subscribers", stats.subscriber_count))
                (StatsCard::new("videos", stats.video_count))
            }

            @if playlists.is_empty() {
                (EmptyState::new("No playlists yet."))
            }

            @for playlist in playlists {
                @let videos = videos_by_playlist
                    .get(&playlist.id)
                    .map_or(&[] as &[VideoPreview], Vec::as_slice);
                section .playlist {
                    (PlaylistCard {
                        playlist,
                        watch_all_url: &watch_all_url(playlist, videos),
                        video_count: videos.len(),
                    })
                    @if videos.is_empty() {
                        (EmptyState::new("Nothing in this playlist yet."))
                    } @else {
                        .video-grid {
                            @for video in videos {
                                (VideoCard::new(video))
                            }
                        }
                    }
                }
            }
        }
    };

    BaseLayout::new("Learning", &config.site_title, theme)
        .with_active_nav("/learning")
        .with_og_metadata(OpenGraphMetadata::new(
            &format!("Learning - {}", config.site_title),
            "Video playlists and channel stats",
        ))
        .render(content)
}
