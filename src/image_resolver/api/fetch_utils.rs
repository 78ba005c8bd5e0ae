//! Generic JSON fetching with status classification

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::AppError;

/// Fetches `url` and parses the body as JSON.
///
/// No retries happen here: a failed lookup simply moves the portrait chain on
/// to its next candidate. Errors are classified so callers can log a plain 404
/// differently from a broken connection.
#[instrument(skip(client))]
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    debug!("Fetching JSON from URL: {url}");

    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            }
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await?;
    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            let trimmed = response_text.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_resolver::api::http_client::create_test_http_client;
    use serde::Deserialize;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u32,
    }

    #[tokio::test]
    async fn test_fetch_json_success_sends_accept_header() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 7}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/probe", mock_server.uri());
        let probe: Probe = fetch_json(&client, &url).await.unwrap();
        assert_eq!(probe.value, 7);
    }

    #[tokio::test]
    async fn test_fetch_json_status_classification() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/limited"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/down"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let base = mock_server.uri();

        let missing = fetch_json::<Probe>(&client, &format!("{base}/missing")).await;
        assert!(matches!(missing, Err(AppError::ApiNotFound { .. })));

        let limited = fetch_json::<Probe>(&client, &format!("{base}/limited")).await;
        assert!(matches!(limited, Err(AppError::ApiRateLimit { .. })));

        let down = fetch_json::<Probe>(&client, &format!("{base}/down")).await;
        assert!(matches!(
            down,
            Err(AppError::ApiServiceUnavailable { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_json_body_classification() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/shape"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"other": 1}"#))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let base = mock_server.uri();

        let empty = fetch_json::<Probe>(&client, &format!("{base}/empty")).await;
        assert!(matches!(empty, Err(AppError::ApiNoData { .. })));

        let html = fetch_json::<Probe>(&client, &format!("{base}/html")).await;
        assert!(matches!(html, Err(AppError::ApiMalformedJson { .. })));

        let shape = fetch_json::<Probe>(&client, &format!("{base}/shape")).await;
        assert!(matches!(shape, Err(AppError::ApiUnexpectedStructure { .. })));
    }

    #[tokio::test]
    async fn test_fetch_json_connection_refused() {
        let client = create_test_http_client();
        // Port 9 (discard) is not listening in test environments
        let result = fetch_json::<Probe>(&client, "http://127.0.0.1:9/probe").await;
        assert!(result.is_err());
    }
}
