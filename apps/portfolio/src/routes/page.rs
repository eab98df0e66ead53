use axum::{extract::State, response::Html};

use crate::effects::PointerTracker;
use crate::render::{self, PageContext};
use crate::state::AppState;

/// GET /
///
/// Renders the portfolio with the current theme and the default accordion state.
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    let accordion = state.experience_accordion();
    let typing = state.hero_typing();
    let ctx = PageContext {
        portfolio: &state.portfolio,
        theme: state.theme.current(),
        accordion: &accordion,
        typing: &typing,
        reveal_threshold: state.config.reveal_threshold,
        glow: state.config.glow,
        pointer: PointerTracker::new().state(),
        year: PageContext::current_year(),
    };
    Html(render::page(&ctx).into_string())
}
