//! Prompt for finding a tutorial video.

/// Prompt name for video lookup.
pub const FIND_VIDEO_PROMPT_NAME: &str = "find_video";

pub fn render_find_video_prompt(title: &str) -> String {
    format!(
        "Find a YouTube video tutorial for the recipe \"{title}\". Return ONLY the YouTube URL \
         (e.g., https://www.youtube.com/watch?v=...) and nothing else. If you can't find one, \
         return an empty string.",
        title = title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_find_video_prompt("Crêpes");
        assert!(prompt.contains("\"Crêpes\""));
        assert!(prompt.contains("ONLY the YouTube URL"));
    }
}
