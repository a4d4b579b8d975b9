//! Prompt for proposing recipes from a list of available ingredients.

/// Prompt name for recipe suggestions.
pub const SUGGEST_RECIPES_PROMPT_NAME: &str = "suggest_recipes";

/// Maximum number of suggestions kept from one call.
pub const MAX_SUGGESTIONS: usize = 3;

pub fn render_suggest_recipes_prompt(ingredients: &[String]) -> String {
    let ingredients_list = ingredients.join(", ");

    format!(
        r#"You are an expert chef. Propose {count} creative and varied recipe ideas that mainly use these ingredients: {ingredients_list}.

Each recipe should have a short estimated preparation time (e.g. "15 min") and approximate nutrition information per serving.

Respond with JSON only, no other text, using exactly this structure:
{{
  "recipes": [
    {{
      "title": "string",
      "description": "string",
      "ingredients": ["string"],
      "steps": ["string"],
      "prepTime": "string, e.g. \"20 min\"",
      "nutrition": {{"calories": number, "protein": number, "carbs": number, "fat": number, "advice": "string"}}
    }}
  ]
}}

All fields are required. Protein, carbs and fat are in grams."#,
        count = MAX_SUGGESTIONS,
        ingredients_list = ingredients_list
    )
}
