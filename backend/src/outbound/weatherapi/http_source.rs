//! Reqwest-backed WeatherAPI adapter.
//!
//! The configured base URL already ends in the `key=` query parameter, so the
//! request URL is assembled by concatenation: `{base}{api_key}&q={city}`.
//! The city is form-encoded; the key is appended as configured.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::form_urlencoded;

use super::dto::WeatherApiResponseDto;
use crate::domain::WeatherReading;
use crate::domain::ports::{WeatherLookup, WeatherLookupError};

/// Weather lookup adapter for `current.json`.
pub struct WeatherApiHttpSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Build an adapter around an existing client.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

fn weather_url(base_url: &str, api_key: &str, city: &str) -> String {
    let query: String = form_urlencoded::byte_serialize(city.as_bytes()).collect();
    format!("{base_url}{api_key}&q={query}")
}

#[async_trait]
impl WeatherLookup for WeatherApiHttpSource {
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, WeatherLookupError> {
        let response = self
            .client
            .get(weather_url(&self.base_url, &self.api_key, city))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WeatherLookupError::status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_reading(body.as_ref())
    }
}

fn parse_reading(body: &[u8]) -> Result<WeatherReading, WeatherLookupError> {
    let decoded: WeatherApiResponseDto = serde_json::from_slice(body).map_err(|error| {
        WeatherLookupError::decode(format!("invalid WeatherAPI JSON payload: {error}"))
    })?;
    Ok(decoded.into_domain_reading())
}

fn map_transport_error(error: reqwest::Error) -> WeatherLookupError {
    if error.is_timeout() {
        WeatherLookupError::timeout(error.to_string())
    } else {
        WeatherLookupError::transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    //! Adapter coverage against a stubbed WeatherAPI server.

    use super::*;
    use httpmock::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    const API_KEY: &str = "test-key";

    fn source_for(server: &MockServer, timeout: Duration) -> WeatherApiHttpSource {
        WeatherApiHttpSource::new(
            format!("{}/v1/current.json?key=", server.base_url()),
            API_KEY,
            timeout,
        )
        .expect("client should build")
    }

    #[rstest]
    #[case::plain("Curitiba", "Curitiba")]
    #[case::spaces_and_accents("São Paulo", "S%C3%A3o+Paulo")]
    #[case::reserved_characters("a&b=c", "a%26b%3Dc")]
    fn city_is_form_encoded(#[case] city: &str, #[case] encoded: &str) {
        assert_eq!(
            weather_url("http://api.weatherapi.com/v1/current.json?key=", "abc", city),
            format!("http://api.weatherapi.com/v1/current.json?key=abc&q={encoded}")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn decodes_current_conditions() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/current.json")
                    .query_param("key", API_KEY);
                then.status(200).json_body(json!({
                    "location": { "name": "Sao Paulo", "region": "Sao Paulo", "country": "Brazil" },
                    "current": {
                        "temp_c": 25.5,
                        "temp_f": 77.9,
                        "condition": { "text": "Partly cloudy" }
                    }
                }));
            })
            .await;

        let reading = source_for(&server, Duration::from_secs(5))
            .current_weather("São Paulo")
            .await
            .expect("lookup should succeed");

        mock.assert_async().await;
        assert_eq!(reading.temp_c, 25.5);
        assert_eq!(reading.temp_f, 77.9);
        assert_eq!(reading.condition.as_deref(), Some("Partly cloudy"));
        assert_eq!(
            reading.location.as_deref(),
            Some("Sao Paulo, Sao Paulo, Brazil")
        );
    }

    #[rstest]
    #[case::unauthorised(401)]
    #[case::bad_request(400)]
    #[case::server_error(500)]
    #[tokio::test]
    async fn non_ok_status_maps_to_status_error(#[case] status: u16) {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json");
                then.status(status)
                    .json_body(json!({ "error": { "code": 1006, "message": "No matching location found." } }));
            })
            .await;

        let error = source_for(&server, Duration::from_secs(5))
            .current_weather("Nowhere")
            .await
            .expect_err("lookup should fail");
        assert_eq!(error, WeatherLookupError::Status { status });
    }

    #[rstest]
    #[case::not_json(b"not json".as_slice())]
    #[case::missing_current(br#"{ "location": { "name": "Recife" } }"#.as_slice())]
    #[case::non_numeric_temperature(br#"{ "current": { "temp_c": "hot", "temp_f": 1.0 } }"#.as_slice())]
    fn malformed_payload_maps_to_decode_error(#[case] body: &[u8]) {
        let error = parse_reading(body).expect_err("decode should fail");
        assert!(
            matches!(error, WeatherLookupError::Decode { .. }),
            "expected decode error, got {error:?}"
        );
    }

    #[rstest]
    fn optional_fields_may_be_absent() {
        let reading = parse_reading(br#"{ "current": { "temp_c": -3.0, "temp_f": 26.6 } }"#)
            .expect("decode should succeed");
        assert_eq!(reading, WeatherReading::new(-3.0, 26.6));
    }

    #[rstest]
    #[tokio::test]
    async fn slow_upstream_maps_to_timeout_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .json_body(json!({ "current": { "temp_c": 1.0, "temp_f": 33.8 } }));
            })
            .await;

        let error = source_for(&server, Duration::from_millis(200))
            .current_weather("Recife")
            .await
            .expect_err("lookup should time out");
        assert!(
            matches!(error, WeatherLookupError::Timeout { .. }),
            "expected timeout error, got {error:?}"
        );
    }
}
