use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::{AppError, EMPTY_MESSAGE, MISSING_MESSAGE},
    message::{ChatRequest, ChatResponse},
    services::persona::compose_prompt,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Any body that isn't a JSON object with a string `message` counts as missing.
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected chat request body");
        AppError::BadRequest(MISSING_MESSAGE)
    })?;

    let message = payload
        .message
        .ok_or(AppError::BadRequest(MISSING_MESSAGE))?;

    if is_blank(&message) {
        return Err(AppError::BadRequest(EMPTY_MESSAGE));
    }

    let prompt = compose_prompt(&message);
    let response = state.provider.generate(&prompt).await?;

    Ok(Json(ChatResponse { response }))
}

/// Also counts the ASCII separators U+001C..=U+001F as whitespace, which
/// `char::is_whitespace` does not.
fn is_blank(message: &str) -> bool {
    message
        .chars()
        .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::is_blank;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n"));
        assert!(is_blank("\u{1c}\u{1d}\u{1e}\u{1f}"));
        assert!(is_blank("\u{a0}\u{3000}"));
        assert!(!is_blank(" hi "));
        assert!(!is_blank("\u{1b}"));
    }
}
