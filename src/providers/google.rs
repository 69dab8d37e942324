use bytes::Bytes;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::TokenError;

/// Google OAuth 2.0 token endpoint client.
///
/// Both grants return the provider's raw response body. The HTTP status is
/// logged but not acted on: a non-2xx body is handed back like any other.
pub struct GoogleProvider {
    client_id: String,
    client_secret: String,
    token_endpoint: Url,
    http: reqwest::Client,
}

impl GoogleProvider {
    pub fn new(client_id: String, client_secret: String, token_endpoint: Url) -> Self {
        Self {
            client_id,
            client_secret,
            token_endpoint,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.google_client_id.clone(),
            config.google_client_secret.clone(),
            config.token_endpoint.clone(),
        )
    }

    /// Exchange an authorization code for a token (`grant_type=authorization_code`).
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<Bytes, TokenError> {
        self.post_grant(&[
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ])
        .await
    }

    /// Exchange a refresh token for a new access token (`grant_type=refresh_token`).
    pub async fn refresh_token(
        &self,
        refresh_token: &str,
        redirect_uri: &str,
    ) -> Result<Bytes, TokenError> {
        self.post_grant(&[
            ("refresh_token", refresh_token),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("grant_type", "refresh_token"),
        ])
        .await
    }

    async fn post_grant(&self, form: &[(&str, &str)]) -> Result<Bytes, TokenError> {
        let resp = self
            .http
            .post(self.token_endpoint.clone())
            .form(form)
            .send()
            .await
            .map_err(TokenError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            warn!("Token endpoint returned {status}; passing the body through unchanged");
        }

        let body = resp.bytes().await.map_err(TokenError::ResponseRead)?;
        debug!("Token endpoint responded {status} with {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> GoogleProvider {
        GoogleProvider::new(
            "client-123".into(),
            "secret-456".into(),
            format!("{}/token", server.uri()).parse().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_exchange_code_posts_authorization_code_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("code=4%2F0Ab"))
            .and(body_string_contains("client_id=client-123"))
            .and(body_string_contains("client_secret=secret-456"))
            .and(body_string_contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080"))
            .and(body_string_contains("grant_type=authorization_code"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"access_token":"a1"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let body = provider_for(&server)
            .exchange_code("4/0Ab", "http://localhost:8080")
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"access_token":"a1"}"#);
    }

    #[tokio::test]
    async fn test_refresh_posts_refresh_token_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("refresh_token=r1"))
            .and(body_string_contains("grant_type=refresh_token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"access_token":"a2"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let body = provider_for(&server)
            .refresh_token("r1", "http://localhost:8080")
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"access_token":"a2"}"#);
    }

    #[tokio::test]
    async fn test_error_status_body_is_passed_through() {
        let server = MockServer::start().await;
        let error_body = r#"{"error":"invalid_grant","error_description":"Bad Request"}"#;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_string(error_body))
            .mount(&server)
            .await;

        let body = provider_for(&server)
            .exchange_code("stale", "http://localhost:8080")
            .await
            .unwrap();
        assert_eq!(&body[..], error_body.as_bytes());
    }

    /// Serve one connection: read the whole request, then answer with a body
    /// shorter than its declared `Content-Length` and hang up.
    async fn truncated_body_server() -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"access_token\":")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/token")
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    #[tokio::test]
    async fn test_truncated_body_is_response_read_error() {
        let endpoint = truncated_body_server().await;
        let provider = GoogleProvider::new(
            "client-123".into(),
            "secret-456".into(),
            endpoint.parse().unwrap(),
        );

        let err = provider
            .exchange_code("code", "http://localhost:8080")
            .await
            .unwrap_err();
        assert!(matches!(err, TokenError::ResponseRead(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let provider = GoogleProvider::new(
            "client-123".into(),
            "secret-456".into(),
            "http://127.0.0.1:1/token".parse().unwrap(),
        );

        let err = provider
            .exchange_code("code", "http://localhost:8080")
            .await
            .unwrap_err();
        assert!(matches!(err, TokenError::Request(_)));
    }
}
