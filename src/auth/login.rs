//! Login check against the admin API.

use crate::auth::AdminCredentials;
use crate::config::AdminConfig;
use crate::error::{AdminResult, AuthError, NetworkError};
use crate::traits::{Headers, HttpClient};

/// Ask the API whether `login` / `password` are valid admin credentials.
///
/// Sends `GET {api_root}/test-admin-auth` with the pair as `login` / `auth`
/// headers. Only a 200 counts as success; every other status is reported as
/// invalid credentials. Transport failures surface as network errors.
pub async fn verify_credentials<C: HttpClient + ?Sized>(
    client: &C,
    config: &AdminConfig,
    login: &str,
    password: &str,
) -> AdminResult<AdminCredentials> {
    let login = login.trim();
    if login.is_empty() {
        return Err(AuthError::MissingInput { field: "login" }.into());
    }
    if password.is_empty() {
        return Err(AuthError::MissingInput { field: "password" }.into());
    }

    let credentials = AdminCredentials::new(login, password);
    let url = config.auth_check_url();
    let mut headers = Headers::new();
    headers.insert("accept".to_string(), "application/json".to_string());
    credentials.apply(&mut headers);

    tracing::debug!("GET {}", url);
    let response = client
        .get(&url, &headers)
        .await
        .map_err(|e| NetworkError::from_http(e, &url))?;

    if response.status == 200 {
        tracing::info!("Admin login accepted for '{}'", credentials.login);
        Ok(credentials)
    } else {
        tracing::warn!(
            "Admin login rejected for '{}' (HTTP {})",
            credentials.login,
            response.status
        );
        Err(AuthError::InvalidCredentials {
            status: response.status,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::error::AdminError;
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    const CHECK_URL: &str = "http://api.test/test-admin-auth";

    fn config() -> AdminConfig {
        AdminConfig::new().with_api_root("http://api.test")
    }

    #[tokio::test]
    async fn test_accepts_200() {
        let client = MockHttpClient::new();
        client.set_response(CHECK_URL, MockResponse::Success(Response::new(200, Bytes::new())));

        let creds = verify_credentials(&client, &config(), " admin ", "abcd-1234")
            .await
            .unwrap();
        assert_eq!(creds.login, "admin");

        let request = &client.get_requests()[0];
        assert_eq!(request.headers.get("login").map(String::as_str), Some("admin"));
        assert_eq!(request.headers.get("auth").map(String::as_str), Some("abcd-1234"));
    }

    #[tokio::test]
    async fn test_rejects_any_other_status() {
        for status in [201, 401, 403, 500] {
            let client = MockHttpClient::new();
            client.set_response(
                CHECK_URL,
                MockResponse::Success(Response::new(status, Bytes::new())),
            );
            let err = verify_credentials(&client, &config(), "admin", "wrong")
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                AdminError::Auth(AuthError::InvalidCredentials { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let client = MockHttpClient::new();
        client.set_response(
            CHECK_URL,
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        let err = verify_credentials(&client, &config(), "admin", "x")
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Network(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_empty_input_sends_nothing() {
        let client = MockHttpClient::new();
        assert!(verify_credentials(&client, &config(), "  ", "x").await.is_err());
        assert!(verify_credentials(&client, &config(), "admin", "").await.is_err());
        assert!(client.get_requests().is_empty());
    }
}
