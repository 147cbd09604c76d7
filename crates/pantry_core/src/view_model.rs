use crate::state::RecipeHit;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub pantry_input: String,
    pub top_k_input: String,
    pub busy: bool,
    pub error: Option<String>,
    pub rows: Vec<RecipeRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRowView {
    pub recipe_name: String,
    pub ingredients: String,
    /// Similarity score pre-formatted to exactly three decimal places.
    pub similarity: String,
}

impl RecipeRowView {
    pub(crate) fn from_hit(hit: &RecipeHit) -> Self {
        Self {
            recipe_name: hit.recipe_name.clone(),
            ingredients: hit.ingredients.clone(),
            similarity: format!("{:.3}", hit.similarity),
        }
    }
}
