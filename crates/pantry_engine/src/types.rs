use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type DispatchId = u64;

/// Body of `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendRequest {
    pub pantry: String,
    pub top_k: u32,
}

/// One recipe entry from the service's `results` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    pub recipe_name: String,
    pub ingredients: String,
    pub similarity: f64,
}

/// Success body. A missing `results` key is a valid empty response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RecommendResponse {
    #[serde(default)]
    pub results: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    /// Any non-2xx status, undifferentiated by code.
    #[error("API {0}")]
    Api(u16),
    /// Network or body-decode failure from the transport.
    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    DispatchCompleted {
        dispatch_id: DispatchId,
        result: Result<Vec<Recommendation>, RecommendError>,
    },
}
