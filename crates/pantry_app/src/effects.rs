use pantry_core::{Effect, Msg, RecipeHit};
use pantry_engine::{ClientSettings, EngineEvent, EngineHandle, RecommendRequest, Recommendation};
use pantry_logging::{ui_info, ui_warn};

use crate::config::ApiConfig;

/// Executes core effects against the engine and turns engine completions
/// back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: &ApiConfig) -> Self {
        let engine = EngineHandle::new(ClientSettings::new(config.base_url.clone()));
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchRecommendations {
                    dispatch_id,
                    pantry,
                    top_k,
                } => {
                    ui_info!(
                        "dispatch {} top_k={} pantry_len={}",
                        dispatch_id,
                        top_k,
                        pantry.len()
                    );
                    self.engine
                        .dispatch(dispatch_id, RecommendRequest { pantry, top_k });
                }
            }
        }
    }

    /// Drain one pending engine event, if any. The app loop calls this
    /// until it returns `None` each frame.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DispatchCompleted {
            dispatch_id,
            result,
        } => {
            let outcome = match result {
                Ok(recommendations) => {
                    Ok(recommendations.into_iter().map(map_hit).collect())
                }
                Err(err) => {
                    ui_warn!("dispatch {} failed: {}", dispatch_id, err);
                    Err(err.to_string())
                }
            };
            Msg::RecommendFinished {
                dispatch_id,
                outcome,
            }
        }
    }
}

fn map_hit(rec: Recommendation) -> RecipeHit {
    RecipeHit {
        recipe_name: rec.recipe_name,
        ingredients: rec.ingredients,
        similarity: rec.similarity,
    }
}
