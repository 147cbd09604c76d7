use reqwest::Url;

use crate::types::RecommendResponse;
use crate::{RecommendError, RecommendRequest, Recommendation};

/// Connection settings for the recommendation service.
///
/// The base URL is injected by the caller; the engine never reads ambient
/// configuration. No explicit timeout is set: the transport default applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
pub trait RecommendClient: Send + Sync {
    async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>, RecommendError>;
}

#[derive(Debug, Clone)]
pub struct HttpRecommendClient {
    settings: ClientSettings,
}

impl HttpRecommendClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn endpoint(&self) -> Result<Url, RecommendError> {
        let base = self.settings.base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/recommend"))
            .map_err(|err| RecommendError::InvalidBaseUrl(err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, RecommendError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| RecommendError::Transport(err.to_string()))
    }
}

#[async_trait::async_trait]
impl RecommendClient for HttpRecommendClient {
    async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let endpoint = self.endpoint()?;
        let client = self.build_client()?;

        log::debug!(
            "POST {} top_k={} pantry_len={}",
            endpoint,
            request.top_k,
            request.pantry.len()
        );

        // `json` also sets the Content-Type: application/json header.
        let response = client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendError::Api(status.as_u16()));
        }

        let body: RecommendResponse = response.json().await.map_err(map_reqwest_error)?;
        Ok(body.results)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RecommendError {
    RecommendError::Transport(err.to_string())
}
