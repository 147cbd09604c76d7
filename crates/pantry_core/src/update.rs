use crate::{AppState, Effect, Msg, DEFAULT_TOP_K};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PantryChanged(text) => {
            state.set_pantry_input(text);
            Vec::new()
        }
        Msg::TopKChanged(text) => {
            state.set_top_k_input(text);
            Vec::new()
        }
        Msg::RecommendClicked => {
            let top_k = coerce_top_k(state.top_k_input());
            let pantry = state.pantry_input().to_string();
            let dispatch_id = state.begin_dispatch();
            vec![Effect::FetchRecommendations {
                dispatch_id,
                pantry,
                top_k,
            }]
        }
        Msg::RecommendFinished {
            dispatch_id,
            outcome,
        } => {
            state.finish_dispatch(dispatch_id, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

// The wire type is an integer: empty, non-numeric, or zero input falls back
// to the default.
fn coerce_top_k(input: &str) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|k| *k > 0)
        .unwrap_or(DEFAULT_TOP_K)
}
