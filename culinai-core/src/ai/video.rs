//! Tutorial video lookup.

use reqwest::Url;

use crate::ai::parse::strip_code_fence;
use crate::ai::prompts::find_video::{render_find_video_prompt, FIND_VIDEO_PROMPT_NAME};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest};

/// Ask for a YouTube tutorial for the named dish.
///
/// Returns `None` on error or when the answer is not a YouTube link.
pub async fn find_tutorial_video(ai_client: &dyn AiClient, title: &str) -> Option<String> {
    match request_video(ai_client, title).await {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(title = title, error = %e, "Video lookup failed");
            None
        }
    }
}

async fn request_video(ai_client: &dyn AiClient, title: &str) -> Result<Option<String>, AiError> {
    let request = ChatRequest {
        messages: vec![ChatMessage::user(render_find_video_prompt(title))],
        max_tokens: Some(256),
        temperature: Some(0.0),
        ..Default::default()
    };

    let response = ai_client.complete(FIND_VIDEO_PROMPT_NAME, request).await?;
    let url = extract_youtube_url(&response.content);
    if url.is_none() {
        tracing::debug!(title = title, "No YouTube link in video answer");
    }
    Ok(url)
}

/// First token of `text` that is an http(s) URL on a YouTube host.
pub fn extract_youtube_url(text: &str) -> Option<String> {
    strip_code_fence(text)
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| matches!(c, '"' | '\'' | '<' | '>' | '(' | ')' | ',')))
        .filter_map(|token| Url::parse(token).ok())
        .find(is_youtube_url)
        .map(String::from)
}

fn is_youtube_url(url: &Url) -> bool {
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    match url.host_str() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            host == "youtube.com" || host.ends_with(".youtube.com") || host == "youtu.be"
        }
        None => false,
    }
}
