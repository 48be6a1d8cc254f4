//! Runs the real `reqwest` transport against a local axum server.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use rt_client::prelude::*;
use serde_json::{json, Value};

const FETCH: &str = "/pf/api/v3/content/fetch";

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn header_text(headers: &HeaderMap, name: header::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn echo_request(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    Json(json!({
        "statusCode": 200,
        "result": {
            "title": header_text(&headers, header::COOKIE),
            "description": header_text(&headers, header::REFERER),
            "subtype": params.get("query").cloned().unwrap_or_default(),
            "canonical_url": "/world/echo/",
            "published_time": header_text(&headers, header::USER_AGENT)
        }
    }))
}

async fn moved() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/foo")])
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({"statusCode": 200, "result": {"name": "late", "id": "0"}}))
}

async fn hierarchy() -> Json<Value> {
    Json(json!({
        "statusCode": 200,
        "result": {
            "name": "Root",
            "id": "/",
            "children": [
                {
                    "name": "World",
                    "id": "/world/",
                    "children": [{"name": "Asia", "id": "/world/asia/"}]
                },
                {"name": "Business", "id": "/business/"}
            ]
        }
    }))
}

fn route(endpoint: &str) -> String {
    format!("{}/{}", FETCH, endpoint)
}

fn config(base_url: &str) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(base_url)
        .with_cookie("session=abc; consent=yes")
}

#[tokio::test]
async fn test_default_headers_and_cookie_are_sent() {
    let app = Router::new().route(&route("article-by-id-or-url-v1"), get(echo_request));
    let base = serve(app).await;
    let client = ReutersClient::with_config(config(&base)).unwrap();

    let article = client.fetch_article_by_url("/world/echo/").await.unwrap();

    assert_eq!(article.title, "session=abc; consent=yes");
    assert_eq!(article.description, format!("{}/", base));
    assert_eq!(
        article.subtype.as_deref(),
        Some(r#"{"website_url":"/world/echo/","website":"reuters"}"#)
    );
    assert_eq!(article.canonical_url, format!("{}/world/echo/", base));
    assert!(article.published_time.starts_with("Mozilla/5.0"));
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let base = serve(Router::new().route(&route("articles-by-search-v2"), get(moved))).await;
    let client = ReutersClient::with_config(config(&base)).unwrap();

    match client.search_articles("x", PageRequest::default()).await {
        Err(ApiError::Redirect { status, location }) => {
            assert_eq!(status, 301);
            assert_eq!(location, "/foo");
        }
        other => panic!("expected redirect, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_route_404() {
    let base = serve(Router::new()).await;
    let client = ReutersClient::with_config(config(&base)).unwrap();

    assert!(client.fetch_articles_by_stock_symbol(".DJI").await.unwrap().is_empty());

    let err = client
        .fetch_articles_by_section("/business/", PageRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_timeout_is_internal() {
    let base = serve(Router::new().route(&route("site-hierarchy-by-name-v1"), get(slow))).await;
    let config = config(&base).with_timeout(Duration::from_millis(200));
    let client = ReutersClient::with_config(config).unwrap();

    let err = client.fetch_site_hierarchy().await.unwrap_err();
    assert!(err.is_internal());
    assert!(err.to_string().contains("Request failed"));
}

#[tokio::test]
async fn test_connection_refused_is_internal() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ReutersClient::with_config(config(&format!("http://{}", addr))).unwrap();
    let err = client.fetch_site_hierarchy().await.unwrap_err();
    assert!(err.is_internal());
}

#[tokio::test]
async fn test_site_hierarchy_over_http() {
    let app = Router::new().route(&route("site-hierarchy-by-name-v1"), get(hierarchy));
    let base = serve(app).await;
    let client = ReutersClient::with_config(config(&base)).unwrap();

    let root = client.fetch_site_hierarchy().await.unwrap();
    let names: Vec<&str> = root.walk().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Root", "World", "Asia", "Business"]);
    assert_eq!(root.find_by_id("/business/").and_then(|s| s.children.as_ref()), None);
}
