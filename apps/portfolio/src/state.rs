use std::sync::Arc;

use crate::config::Config;
use crate::content::Portfolio;
use crate::effects::{Accordion, TypingParams};
use crate::theme::ThemeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page content, loaded once at startup.
    pub portfolio: Arc<Portfolio>,
    /// The one theme preference for this process. Built in `main`, dropped on shutdown.
    pub theme: Arc<ThemeStore>,
}

impl AppState {
    /// Typing parameters for the hero line.
    pub fn hero_typing(&self) -> TypingParams {
        TypingParams::from_millis(
            self.portfolio.profile.tagline.clone(),
            self.config.typing_char_interval_ms,
            self.config.typing_initial_delay_ms,
        )
    }

    /// Fresh accordion over the experience list with the configured items open.
    pub fn experience_accordion(&self) -> Accordion {
        Accordion::new(self.portfolio.experience.len(), &self.config.accordion_expanded)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::theme::MemorySlot;

    pub async fn test_state(config: Config) -> AppState {
        let theme = ThemeStore::init(Arc::new(MemorySlot::new(None))).await.unwrap();
        AppState {
            config,
            portfolio: Arc::new(Portfolio::sample().unwrap()),
            theme: Arc::new(theme),
        }
    }
}
