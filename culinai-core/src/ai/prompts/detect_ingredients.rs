//! Prompt for listing the ingredients visible in a photo.

/// Prompt name for ingredient detection.
pub const DETECT_INGREDIENTS_PROMPT_NAME: &str = "detect_ingredients";

pub fn render_detect_ingredients_prompt() -> String {
    "Look at this photo of the inside of a fridge or cupboard and list every edible \
     ingredient you can see. Answer with only a comma-separated list of ingredient names, \
     no other text."
        .to_string()
}
