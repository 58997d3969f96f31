use async_trait::async_trait;

use crate::core::error::{AppError, Result};

/// Interface for retrieving remote image bytes.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Perform a single GET against `url` and return the response body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// reqwest-backed fetcher for remote images
pub struct RemoteImageClient {
    client: reqwest::Client,
}

impl RemoteImageClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("ImagemarkCore/1.0 (image-bookmark-service)")
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for RemoteImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcher for RemoteImageClient {
    /// The body is returned for any HTTP status; only a failed request
    /// (unreachable host, connection error) surfaces as an error.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Image download failed: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to download image: {}", e))
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read image body: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to read image body: {}", e))
        })?;

        if !status.is_success() {
            tracing::warn!("Image host returned status {} for {}", status, url);
        }

        tracing::debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{routing::get, Router};

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_returns_body_bytes() {
        let router = Router::new().route("/pic.jpg", get(|| async { &b"fake-image-bytes"[..] }));
        let base = spawn_server(router).await;

        let client = RemoteImageClient::new();
        let bytes = client.fetch(&format!("{}/pic.jpg", base)).await.unwrap();

        assert_eq!(bytes, b"fake-image-bytes");
    }

    #[tokio::test]
    async fn test_fetch_keeps_body_on_error_status() {
        // No status-code check: a non-success response still yields
        // whatever body the host returned.
        let router = Router::new().route(
            "/gone.png",
            get(|| async { (StatusCode::NOT_FOUND, "not here") }),
        );
        let base = spawn_server(router).await;

        let client = RemoteImageClient::new();
        let bytes = client.fetch(&format!("{}/gone.png", base)).await.unwrap();

        assert_eq!(bytes, b"not here");
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_an_error() {
        let client = RemoteImageClient::new();
        // Port 1 on loopback has nothing listening.
        let result = client.fetch("http://127.0.0.1:1/pic.jpg").await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}
