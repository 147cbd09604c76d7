use crate::view_model::{AppViewModel, RecipeRowView};

/// Pantry contents pre-filled on first launch.
pub const DEFAULT_PANTRY: &str = "tomato, pasta, garlic";

/// Top-K used when the input does not coerce to a positive integer.
pub const DEFAULT_TOP_K: u32 = 5;

/// Prefix for every user-visible request failure.
pub const ERROR_PREFIX: &str = "Could not get recommendations. ";

pub type DispatchId = u64;

/// One recommended recipe as held by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeHit {
    pub recipe_name: String,
    pub ingredients: String,
    pub similarity: f64,
}

/// Lifecycle of the current recommendation request.
///
/// A single tagged value instead of separate loading/error/results fields:
/// no variant carries both results and an error, so the two can never be
/// populated at once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<RecipeHit>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pantry_input: String,
    top_k_input: String,
    phase: RequestPhase,
    issued: DispatchId,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            pantry_input: DEFAULT_PANTRY.to_string(),
            top_k_input: DEFAULT_TOP_K.to_string(),
            phase: RequestPhase::Idle,
            issued: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pantry_input(&self) -> &str {
        &self.pantry_input
    }

    pub fn top_k_input(&self) -> &str {
        &self.top_k_input
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    pub(crate) fn set_pantry_input(&mut self, text: String) {
        self.pantry_input = text;
    }

    pub(crate) fn set_top_k_input(&mut self, text: String) {
        self.top_k_input = text;
    }

    /// Allocate the next dispatch id and enter `Loading`, clearing any
    /// previous results or error.
    pub(crate) fn begin_dispatch(&mut self) -> DispatchId {
        self.issued += 1;
        self.phase = RequestPhase::Loading;
        self.issued
    }

    /// Apply a dispatch completion.
    ///
    /// Completions for superseded dispatch ids are discarded: the most
    /// recently triggered dispatch wins, not the last one to resolve.
    pub(crate) fn finish_dispatch(
        &mut self,
        dispatch_id: DispatchId,
        outcome: Result<Vec<RecipeHit>, String>,
    ) {
        if dispatch_id != self.issued || !matches!(self.phase, RequestPhase::Loading) {
            return;
        }
        self.phase = match outcome {
            Ok(hits) => RequestPhase::Loaded(hits),
            Err(message) => RequestPhase::Failed(format!("{ERROR_PREFIX}{message}")),
        };
    }

    pub fn view(&self) -> AppViewModel {
        let (busy, error, rows) = match &self.phase {
            RequestPhase::Idle => (false, None, Vec::new()),
            RequestPhase::Loading => (true, None, Vec::new()),
            RequestPhase::Loaded(hits) => {
                (false, None, hits.iter().map(RecipeRowView::from_hit).collect())
            }
            RequestPhase::Failed(message) => (false, Some(message.clone()), Vec::new()),
        };
        AppViewModel {
            pantry_input: self.pantry_input.clone(),
            top_k_input: self.top_k_input.clone(),
            busy,
            error,
            rows,
        }
    }
}
