//! Integration tests for bulk feed submission.

use national_catalog_api::feed::{Entry, Feed};
use national_catalog_api::{
    ApiKey, CatalogClient, CatalogConfig, EndpointUrl, ResponseKind,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> CatalogClient {
    let config = CatalogConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .endpoint(EndpointUrl::new(server.uri()))
        .build()
        .unwrap();
    CatalogClient::new(config)
}

fn accepted_body() -> &'static str {
    r#"{"apiversion": 3, "result": {"feed_id": 4242}}"#
}

#[tokio::test]
async fn test_raw_json_feed_goes_in_the_body_with_query_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/feed"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("party_id", "77"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(accepted_body()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let content = r#"[{"good_id": 1}]"#;
    let response = client.post_feed_raw(content, 77).await.unwrap();

    assert_eq!(response.envelope.kind(), ResponseKind::Feed);
    assert_eq!(response.envelope.feed_id(), Some(4242));

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(String::from_utf8(request.body.clone()).unwrap(), content);
    assert_eq!(
        request.headers.get("content-type").unwrap().to_str().unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_xml_payload_is_sniffed_from_first_character() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(accepted_body()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .post_feed_raw("<feed><good/></feed>", 77)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0]
            .headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap(),
        "application/xml"
    );
}

#[tokio::test]
async fn test_post_feed_serializes_entries_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/feed"))
        .and(query_param("party_id", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_string(accepted_body()))
        .mount(&server)
        .await;

    let mut entry = Entry::new();
    entry.set_internal_id("row-1");
    entry.add_attr(10, "red", None, None);
    entry.add_attr(11, 250, None, None);
    entry.delete_category(7);

    let mut feed = Feed::new(1234);
    feed.push(entry);

    let client = test_client(&server);
    let response = client.post_feed(&feed).await.unwrap();
    assert_eq!(response.envelope.feed_id(), Some(4242));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!([{
            "@id": "row-1",
            "good_attrs": [
                {"attr_id": 10, "attr_value": "red"},
                {"attr_id": 11, "attr_value": 250},
            ],
            "categories": [{"cat_id": 7, "delete": 1}],
        }])
    );
}

#[tokio::test]
async fn test_feed_status_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/feed-status"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"apiversion": 3, "result": [{"feed_id": 4242, "status": "done"}]}"#,
        ))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client.feed_status(4242).await.unwrap();

    assert_eq!(response.envelope.kind(), ResponseKind::FeedStatus);
    assert_eq!(response.envelope.records().len(), 1);

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.contains("feed_id=4242"));
}
