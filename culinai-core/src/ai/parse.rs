//! Helpers for reading structured model output.

use serde::de::DeserializeOwned;

use super::client::AiError;

/// Strip a surrounding markdown code fence (```json ... ```), if present.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the info string ("json") on the opening fence line
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a JSON response body, tolerating a code fence around it.
pub fn parse_json<T: DeserializeOwned>(text: &str, what: &str) -> Result<T, AiError> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|e| AiError::ParseError(format!("Failed to parse {} response: {}", what, e)))
}
