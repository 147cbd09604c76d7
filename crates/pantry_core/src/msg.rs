use crate::state::{DispatchId, RecipeHit};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the pantry ingredient list.
    PantryChanged(String),
    /// User edited the top-K count field.
    TopKChanged(String),
    /// User triggered a recommendation request.
    RecommendClicked,
    /// A dispatch resolved; `Err` carries the failure message.
    RecommendFinished {
        dispatch_id: DispatchId,
        outcome: Result<Vec<RecipeHit>, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
