//! Handlers exposing the text effects: highlight partitioning and the hero typing stream.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures_util::stream::{self, Stream};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::effects::TypingReveal;
use crate::errors::AppError;
use crate::highlight::{HighlightMatcher, HighlightSpan};
use crate::state::AppState;

/// Upper bound on highlight input, in bytes.
pub const MAX_HIGHLIGHT_TEXT: usize = 20_000;

#[derive(Debug, Deserialize)]
pub struct HighlightRequest {
    pub text: String,
    #[serde(default)]
    pub terms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HighlightResponse {
    pub spans: Vec<HighlightSpan>,
}

/// POST /api/v1/highlight
pub async fn handle_highlight(
    Json(request): Json<HighlightRequest>,
) -> Result<Json<HighlightResponse>, AppError> {
    if request.text.len() > MAX_HIGHLIGHT_TEXT {
        return Err(AppError::Validation(format!(
            "text exceeds {MAX_HIGHLIGHT_TEXT} bytes"
        )));
    }
    let spans = HighlightMatcher::new(&request.terms).highlight(&request.text);
    Ok(Json(HighlightResponse { spans }))
}

/// GET /api/v1/hero/typing
///
/// Streams the hero line's typing states as SSE `message` events, ending after `done`.
/// The reveal lives inside the stream: a client disconnect drops it and stops the timer.
pub async fn handle_hero_typing(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut reveal = TypingReveal::new();
    reveal.start(state.hero_typing());
    let rx = reveal.subscribe();
    debug!("Hero typing stream opened");

    let events = stream::unfold(Some((reveal, rx, true)), |slot| async move {
        let Some((reveal, mut rx, first)) = slot else {
            return None;
        };
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let current = rx.borrow_and_update().clone();
        let event = match Event::default().json_data(&current) {
            Ok(event) => event,
            Err(e) => {
                tracing::error!("Failed to encode typing state: {e}");
                return None;
            }
        };
        let next = (!current.done).then_some((reveal, rx, false));
        Some((Ok::<_, Infallible>(event), next))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
