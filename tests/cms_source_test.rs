//! Tests for the content platform client against a mock server.

use portfolio_site::content::models::TagColor;
use portfolio_site::sources::{CmsClient, SourceError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn articles_body() -> serde_json::Value {
    json!({
        "articles": [
            {
                "id": "1",
                "slug": "hello-world",
                "title": "Hello World",
                "description": "First post",
                "coverImage": {"url": "https://cdn.example.com/cover.png"},
                "icon": "👋",
                "url": "https://example.com/blog/hello-world",
                "publishedAt": "2024-01-01T00:00:00Z",
                "body": "<p>hi</p>",
                "tags": [{"id": "rust", "name": "Rust", "color": "orange"}]
            },
            {
                "id": "2",
                "slug": "no-tags",
                "title": "No Tags",
                "description": "Untagged",
                "coverImage": null,
                "icon": null,
                "url": "https://example.com/blog/no-tags",
                "publishedAt": "2024-02-01T00:00:00Z",
                "body": null
            }
        ]
    })
}

#[tokio::test]
async fn fetches_and_decodes_articles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
        .mount(&server)
        .await;

    let client = CmsClient::new(&server.uri(), "secret-token");
    let articles = client.fetch_articles().await.unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].slug, "hello-world");
    assert_eq!(articles[0].tags[0].name, "Rust");
    assert_eq!(articles[0].tags[0].color, TagColor::Orange);
    assert!(articles[1].tags.is_empty());
    assert!(articles[1].cover_image.is_none());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = CmsClient::new(&server.uri(), "token");
    let err = client.fetch_articles().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { .. }));
}

#[tokio::test]
async fn tag_missing_name_is_a_shape_error() {
    let server = MockServer::start().await;

    let body = json!({
        "articles": [{
            "id": "1",
            "slug": "bad",
            "title": "Bad",
            "description": "",
            "url": "https://example.com/blog/bad",
            "publishedAt": "2024-01-01T00:00:00Z",
            "tags": [{"id": "x", "color": "blue"}]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = CmsClient::new(&server.uri(), "token");
    let err = client.fetch_articles().await.unwrap_err();
    assert!(matches!(err, SourceError::Shape { .. }));
}
