//! Prompts for drawing and retouching dish photos.

/// Prompt name for generating a dish photo.
pub const GENERATE_IMAGE_PROMPT_NAME: &str = "generate_dish_image";

/// Prompt name for editing an existing dish photo.
pub const EDIT_IMAGE_PROMPT_NAME: &str = "edit_dish_image";

pub fn render_generate_image_prompt(title: &str) -> String {
    format!(
        "A professional, appetizing, high-resolution food photograph, tightly framed on the dish, \
         natural light, neutral and elegant background, of: {title}",
        title = title
    )
}

pub fn render_edit_image_prompt(instruction: &str) -> String {
    format!(
        "Edit this photo of a dish according to the following instruction: {instruction}. \
         Keep the result professional and appetizing.",
        instruction = instruction
    )
}
