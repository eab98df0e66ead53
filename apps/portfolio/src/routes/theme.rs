use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::theme::Theme;

#[derive(Debug, Deserialize)]
pub struct SetThemeRequest {
    pub theme: String,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        theme: state.theme.current(),
    })
}

/// PUT /api/v1/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(request): Json<SetThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme: Theme = request.theme.parse()?;
    let theme = state.theme.set(theme).await?;
    info!(%theme, "Theme set");
    Ok(Json(ThemeResponse { theme }))
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = state.theme.toggle().await?;
    info!(%theme, "Theme toggled");
    Ok(Json(ThemeResponse { theme }))
}
