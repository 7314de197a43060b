//! Integration tests for the weather client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample OpenWeatherMap response for testing
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 2.0, "lat": 46.0 },
        "weather": [
            { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
        ],
        "base": "stations",
        "main": {
            "temp": 18.0,
            "feels_like": 17.2,
            "temp_min": 15.8,
            "temp_max": 19.6,
            "pressure": 1021,
            "humidity": 55
        },
        "visibility": 10000,
        "wind": { "speed": 3.1, "deg": 240 },
        "clouds": { "all": 0 },
        "dt": 1_716_900_000,
        "sys": { "country": "FR", "sunrise": 1_716_869_000, "sunset": 1_716_925_000 },
        "timezone": 7200,
        "id": 3_017_382,
        "name": "France",
        "cod": 200
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherMapClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenWeatherMapClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /weather endpoint with the given response
async fn setup_weather_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_current_weather_success() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_weather_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("France").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let weather = result.unwrap();
    assert_eq!(weather.location_name, "France");
    assert_eq!(weather.country_code, "FR");
    assert!((weather.temperature - 18.0).abs() < 0.01);
    assert!((weather.temperature_max - 19.6).abs() < 0.01);
    assert!((weather.temperature_min - 15.8).abs() < 0.01);
    assert_eq!(weather.humidity, 55);
    assert_eq!(weather.description, "clear sky");
    assert_eq!(weather.observed_at.timestamp(), 1_716_900_000);
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_unknown_location_returns_not_found() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Atlantis").await;

    match result {
        Err(WeatherError::NotFound(message)) => assert_eq!(message, "city not found"),
        other => unreachable!("Expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_api_key_returns_unauthorized() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("France").await;

    assert!(
        matches!(result, Err(WeatherError::Unauthorized(ref m)) if m.starts_with("Invalid API key")),
        "Expected Unauthorized, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(502).set_body_string("Bad Gateway"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("France").await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(ref m)) if m.contains("502")),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("France").await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_other_client_error_returns_request_failed() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(400)
            .set_body_json(serde_json::json!({ "cod": "400", "message": "Nothing to geocode" })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(ref m)) if m == "Nothing to geocode"),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("France").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server_returns_connection_failed() {
    // Non-pooled server so that dropping it actually shuts it down.
    let mock_server = MockServer::builder().start().await;
    let client = create_test_client(&mock_server);
    drop(mock_server);

    let result = client.get_current("France").await;

    assert!(
        matches!(result, Err(WeatherError::ConnectionFailed(_))),
        "Expected ConnectionFailed, got: {result:?}"
    );
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_request_contains_correct_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "United Kingdom"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("United Kingdom").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}
