use crate::state::DispatchId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRecommendations {
        dispatch_id: DispatchId,
        pantry: String,
        top_k: u32,
    },
}
