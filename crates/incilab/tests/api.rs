//! API surface tests against a local mock server

use std::sync::Arc;

use mockito::Matcher;
use serde_json::json;

use incilab::{ApiClient, Environment, Error};
use incilab_common::{KVStore, MemoryStore, ServerConfigStore, ServerConfigUpdate};

const OK_BODY: &str = r#"{"success":true,"code":200,"message":"ok","data":null}"#;

/// Point a production client at the mock server through the persisted
/// server configuration.
async fn client_for(server: &mockito::ServerGuard) -> ApiClient {
    let url = url::Url::parse(&server.url()).expect("server url");
    let store: Arc<dyn KVStore> = Arc::new(MemoryStore::new());

    ServerConfigStore::new(store.clone())
        .set(ServerConfigUpdate {
            host: url.host_str().map(str::to_string),
            port: Some(url.port().map(|p| p.to_string()).unwrap_or_default()),
            prefix: Some(String::new()),
            ..Default::default()
        })
        .await
        .expect("config");

    ApiClient::new(Environment::Production, store)
        .await
        .expect("client")
}

#[tokio::test]
async fn test_brand_list_sends_paging_and_keyword() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/brand/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("size".into(), "10".into()),
            Matcher::UrlEncoded("keyword".into(), "cerave".into()),
        ]))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let envelope = client
        .brand_list(1, 10, Some("cerave"))
        .await
        .expect("brand list");

    assert!(envelope.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ingredient_list_omits_absent_filters() {
    let mut server = mockito::Server::new_async().await;
    // Exact match proves name/riskLevel/suitableSkin never hit the wire.
    let mock = server
        .mock("GET", "/ingredient/list")
        .match_query(Matcher::Exact("page=2&size=20".into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = client_for(&server).await;
    client
        .ingredient_list(2, 20, None, None, None)
        .await
        .expect("ingredient list");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_credential_reaches_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/brand/all")
        .match_header("authorization", "Bearer tok-123")
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = client_for(&server).await;
    client
        .session()
        .set_credential("tok-123")
        .await
        .expect("set credential");
    client.all_brands().await.expect("all brands");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_like_review_post_posts_with_user_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/review-post/like/7")
        .match_query(Matcher::UrlEncoded("userId".into(), "3".into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = client_for(&server).await;
    client.like_review_post(7, 3).await.expect("like");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_ingredient_review_sends_owner_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/ingredient-review/delete/42")
        .match_query(Matcher::UrlEncoded("userId".into(), "3".into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = client_for(&server).await;
    client
        .delete_ingredient_review(42, 3)
        .await
        .expect("delete review");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_favorite_sends_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/favorite/add")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "userId": 3,
            "favoriteType": "product",
            "favoriteId": 9,
        })))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = client_for(&server).await;
    client
        .add_favorite(&json!({
            "userId": 3,
            "favoriteType": "product",
            "favoriteId": 9,
        }))
        .await
        .expect("add favorite");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_clear_history_by_type_uses_delete() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/search-history/clearByType")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("userId".into(), "3".into()),
            Matcher::UrlEncoded("searchType".into(), "ingredient".into()),
        ]))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = client_for(&server).await;
    client
        .clear_history_by_type(3, "ingredient")
        .await
        .expect("clear history");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_domain_failure_surfaces_as_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/ingredient-knowledge/9")
        .with_status(200)
        .with_body(r#"{"success":false,"code":500,"message":"article unavailable","data":null}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let err = client.knowledge_detail(9).await.expect_err("must fail");

    match err {
        Error::Api { code, message } => {
            assert_eq!(code, Some(500));
            assert_eq!(message, "article unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_base_url_switches_servers() {
    let mut first = mockito::Server::new_async().await;
    let mut second = mockito::Server::new_async().await;

    let on_first = first
        .mock("GET", "/brand/all")
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;
    let on_second = second
        .mock("GET", "/brand/all")
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = client_for(&first).await;
    client.all_brands().await.expect("first server");
    on_first.assert_async().await;

    let url = url::Url::parse(&second.url()).expect("server url");
    client
        .server_config()
        .set(ServerConfigUpdate {
            host: url.host_str().map(str::to_string),
            port: Some(url.port().map(|p| p.to_string()).unwrap_or_default()),
            prefix: Some(String::new()),
            ..Default::default()
        })
        .await
        .expect("reconfigure");
    client.update_base_url().await.expect("update");

    client.all_brands().await.expect("second server");
    on_second.assert_async().await;
}
