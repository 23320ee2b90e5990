//! Integration tests for playlist/video grouping and playlist ordering.

use chrono::{TimeZone, Utc};
use portfolio_site::content::models::{PlaylistPreview, Thumbnail, VideoPreview};
use portfolio_site::content::videos::{
    group_by_playlist, move_liked_playlist_last, playlist_url, watch_all_url, watch_url,
};

fn thumbnail() -> Thumbnail {
    Thumbnail {
        url: "https://i.ytimg.com/vi/x/hqdefault.jpg".to_string(),
        width: 480,
        height: 360,
        alt: "thumb".to_string(),
    }
}

fn video(id: &str, playlist_id: &str) -> VideoPreview {
    VideoPreview {
        id: id.to_string(),
        playlist_id: playlist_id.to_string(),
        title: format!("Video {id}"),
        description: String::new(),
        published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        thumbnail: thumbnail(),
        watch_url: watch_url(id, playlist_id),
    }
}

fn playlist(id: &str, day: u32) -> PlaylistPreview {
    PlaylistPreview {
        id: id.to_string(),
        title: format!("Playlist {id}"),
        description: String::new(),
        thumbnail: thumbnail(),
        url: playlist_url(id),
        published_at: Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap(),
    }
}

#[test]
fn grouping_preserves_per_playlist_order_and_keys() {
    let pages = vec![
        vec![video("a1", "PL-A"), video("a2", "PL-A"), video("a3", "PL-A")],
        vec![],
        vec![video("b1", "PL-B")],
    ];

    let grouped = group_by_playlist(pages);

    // Empty sub-collections contribute no key.
    assert_eq!(grouped.len(), 2);

    // Key integrity: every video under a key carries that playlist id.
    for (key, videos) in &grouped {
        assert!(videos.iter().all(|v| &v.playlist_id == key));
    }

    // Original per-playlist ordering survives, no re-sort.
    let ids: Vec<&str> = grouped["PL-A"].iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
}

#[test]
fn liked_playlist_always_ends_up_last() {
    // Reserved id in the middle of natural order.
    let mut playlists = vec![playlist("PL-A", 9), playlist("LL-liked", 5), playlist("PL-B", 1)];
    move_liked_playlist_last(&mut playlists, "LL-liked");
    assert_eq!(playlists.last().unwrap().id, "LL-liked");

    // Applying twice equals applying once.
    let once = playlists.clone();
    move_liked_playlist_last(&mut playlists, "LL-liked");
    assert_eq!(playlists, once);
}

#[test]
fn absent_liked_playlist_leaves_natural_order() {
    let mut playlists = vec![playlist("UU-uploads", 9), playlist("PL123", 5)];
    let before = playlists.clone();
    move_liked_playlist_last(&mut playlists, "PL7_TxhAbsent");
    assert_eq!(playlists, before);
}

#[test]
fn watch_all_url_composes_video_and_playlist() {
    let pl = playlist("PL-A", 1);
    let videos = vec![video("first", "PL-A"), video("second", "PL-A")];

    assert_eq!(
        watch_all_url(&pl, &videos),
        "https://www.youtube.com/watch?v=first&list=PL-A"
    );

    // Zero videos degrades to the plain playlist URL.
    assert_eq!(
        watch_all_url(&pl, &[]),
        "https://www.youtube.com/playlist?list=PL-A"
    );
}
