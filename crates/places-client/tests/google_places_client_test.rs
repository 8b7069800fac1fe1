//! Integration tests for [`places_client::GooglePlacesClient`] against a mockito server.
//!
//! Covers: query parameters, result parsing, empty results, HTTP failures, provider status errors,
//! malformed bodies, and API key masking.

use mockito::Matcher;
use places_client::{mask_token, GooglePlacesClient, LatLng, PlacesClient, QueryError};

const PATH: &str = "/maps/api/place/nearbysearch/json";

fn client_for(server: &mockito::ServerGuard) -> GooglePlacesClient {
    GooglePlacesClient::with_base_url("test-places-key".to_string(), format!("{}{}", server.url(), PATH))
}

fn tashkent() -> LatLng {
    LatLng {
        lat: 41.3111,
        lng: 69.2797,
    }
}

/// **Test: Request carries location, radius, type and key; results parse in provider order.**
#[tokio::test]
async fn test_search_nearby_sends_query_and_parses_results() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("location".into(), "41.3111,69.2797".into()),
            Matcher::UrlEncoded("radius".into(), "2000".into()),
            Matcher::UrlEncoded("type".into(), "restaurant".into()),
            Matcher::UrlEncoded("key".into(), "test-places-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "status": "OK",
                "results": [
                    {
                        "name": "Afsona",
                        "vicinity": "Taras Shevchenko ko'chasi 30",
                        "geometry": { "location": { "lat": 41.3005, "lng": 69.2721 } },
                        "rating": 4.6,
                        "opening_hours": { "open_now": true }
                    },
                    {
                        "name": "Caravan",
                        "vicinity": "Abdulla Qahhor 22",
                        "geometry": { "location": { "lat": 41.2950, "lng": 69.2680 } }
                    }
                ]
            }"#,
        )
        .create_async()
        .await;

    let places = client_for(&server)
        .search_nearby(tashkent(), "restaurant", 2000)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Afsona");
    assert_eq!(places[0].rating, Some(4.6));
    assert_eq!(places[1].name, "Caravan");
    assert!(places[1].opening_hours.is_none());
}

/// **Test: ZERO_RESULTS is an empty list, not an error.**
#[tokio::test]
async fn test_search_nearby_zero_results() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"ZERO_RESULTS","results":[]}"#)
        .create_async()
        .await;

    let places = client_for(&server)
        .search_nearby(tashkent(), "gym", 2000)
        .await
        .unwrap();
    assert!(places.is_empty());
}

/// **Test: Non-2xx HTTP status surfaces as QueryError::Status with the body.**
#[tokio::test]
async fn test_search_nearby_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream down")
        .create_async()
        .await;

    let err = client_for(&server)
        .search_nearby(tashkent(), "park", 2000)
        .await
        .unwrap_err();
    match err {
        QueryError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// **Test: Provider-level rejection (REQUEST_DENIED) surfaces as QueryError::Api.**
#[tokio::test]
async fn test_search_nearby_request_denied() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"REQUEST_DENIED","error_message":"The provided API key is invalid.","results":[]}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .search_nearby(tashkent(), "hospital", 2000)
        .await
        .unwrap_err();
    match err {
        QueryError::Api { status, message } => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// **Test: A body that is not JSON surfaces as QueryError::Decode.**
#[tokio::test]
async fn test_search_nearby_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .search_nearby(tashkent(), "lodging", 2000)
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::Decode(_)));
}

/// **Test: Unreachable endpoint surfaces as QueryError::Http.**
#[tokio::test]
async fn test_search_nearby_connection_refused() {
    let client = GooglePlacesClient::with_base_url(
        "test-places-key".to_string(),
        "http://127.0.0.1:9/nearbysearch/json".to_string(),
    );
    let err = client
        .search_nearby(tashkent(), "park", 2000)
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::Http(_)));
}

/// **Test: Keys of length ≤ 11 are fully masked; longer keys show first 7 and last 4.**
#[test]
fn test_mask_token() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("AIzaSy1234"), "***");
    assert_eq!(mask_token("AIzaSyD-abcdefghijklmnop"), "AIzaSyD***mnop");
}
