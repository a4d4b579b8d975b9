//! Prompt for estimating a dish's nutrition facts.

/// Prompt name for nutrition estimates.
pub const NUTRITION_PROMPT_NAME: &str = "estimate_nutrition";

pub fn render_nutrition_prompt(title: &str, ingredients: &[String]) -> String {
    format!(
        r#"Estimate the nutrition facts per serving for the recipe "{title}" made with these ingredients: {ingredients}.

Respond with JSON only, no other text: {{"calories": number, "protein": number, "carbs": number, "fat": number, "advice": "one or two sentences of dietary advice"}}

Protein, carbs and fat are in grams."#,
        title = title,
        ingredients = ingredients.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_nutrition_prompt(
            "Pasta Carbonara",
            &["pasta".to_string(), "eggs".to_string()],
        );
        assert!(prompt.contains("\"Pasta Carbonara\""));
        assert!(prompt.contains("pasta, eggs"));
        assert!(prompt.contains("\"calories\""));
    }
}
