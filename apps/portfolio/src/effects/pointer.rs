//! Pointer tracker for the cursor-follow glow.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

/// Last known pointer position. Hidden until the first move, and again after leaving the page.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_move(&mut self, x: f64, y: f64) {
        self.state = PointerState {
            x,
            y,
            visible: true,
        };
    }

    /// Keeps the last position so the glow fades out in place.
    pub fn on_leave(&mut self) {
        self.state.visible = false;
    }

    pub fn state(&self) -> PointerState {
        self.state
    }
}

/// Glow opacity per theme while the pointer is on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlowOpacity {
    pub dark: f64,
    pub light: f64,
}

impl Default for GlowOpacity {
    fn default() -> Self {
        Self {
            dark: 0.6,
            light: 0.3,
        }
    }
}

impl GlowOpacity {
    pub fn opacity(&self, theme: Theme, visible: bool) -> f64 {
        if !visible {
            return 0.0;
        }
        match theme {
            Theme::Dark => self.dark,
            Theme::Light => self.light,
        }
    }

    /// Inline style for the glow element.
    pub fn glow_style(&self, pointer: PointerState, theme: Theme) -> String {
        format!(
            "left:{}px;top:{}px;opacity:{}",
            pointer.x,
            pointer.y,
            self.opacity(theme, pointer.visible)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_first_move() {
        let tracker = PointerTracker::new();
        assert!(!tracker.state().visible);
        assert_eq!(GlowOpacity::default().opacity(Theme::Dark, false), 0.0);
    }

    #[test]
    fn test_move_then_leave_keeps_position() {
        let mut tracker = PointerTracker::new();
        tracker.on_move(120.0, 48.5);
        assert!(tracker.state().visible);
        tracker.on_leave();
        let state = tracker.state();
        assert!(!state.visible);
        assert_eq!((state.x, state.y), (120.0, 48.5));
    }

    #[test]
    fn test_opacity_depends_on_theme() {
        let glow = GlowOpacity::default();
        assert_eq!(glow.opacity(Theme::Dark, true), 0.6);
        assert_eq!(glow.opacity(Theme::Light, true), 0.3);
    }

    #[test]
    fn test_glow_style() {
        let mut tracker = PointerTracker::new();
        tracker.on_move(10.0, 20.0);
        let style = GlowOpacity::default().glow_style(tracker.state(), Theme::Light);
        assert_eq!(style, "left:10px;top:20px;opacity:0.3");
    }
}
