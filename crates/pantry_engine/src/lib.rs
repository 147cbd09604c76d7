//! Pantry engine: recommendation requests and dispatch plumbing.
mod client;
mod engine;
mod types;

pub use client::{ClientSettings, HttpRecommendClient, RecommendClient};
pub use engine::EngineHandle;
pub use types::{DispatchId, EngineEvent, RecommendError, RecommendRequest, Recommendation};
