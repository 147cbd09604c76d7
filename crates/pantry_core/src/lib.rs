//! Pantry core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, DispatchId, RecipeHit, RequestPhase, DEFAULT_PANTRY, DEFAULT_TOP_K, ERROR_PREFIX,
};
pub use update::update;
pub use view_model::{AppViewModel, RecipeRowView};
