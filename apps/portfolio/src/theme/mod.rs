//! Theme preference: light/dark, initialized from a persisted slot and broadcast to subscribers.
//!
//! `ThemeStore` is built once in `main` and shared through `AppState`; there is no global.

pub mod slot;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

use crate::errors::AppError;

pub use slot::{FileSlot, MemorySlot, PreferenceSlot};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(AppError::Validation(format!(
                "unknown theme '{other}', expected 'dark' or 'light'"
            ))),
        }
    }
}

/// Current theme plus change notification. Every change is written back to the slot.
pub struct ThemeStore {
    slot: Arc<dyn PreferenceSlot>,
    tx: watch::Sender<Theme>,
    /// Serializes slot writes so the file always ends with the latest value.
    write_lock: Mutex<()>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.current())
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Reads the persisted value once. Missing or unrecognized values fall back to dark.
    pub async fn init(slot: Arc<dyn PreferenceSlot>) -> Result<Self, AppError> {
        let theme = match slot.read().await? {
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|e| {
                warn!("Ignoring stored theme: {e}");
                Theme::default()
            }),
            None => Theme::default(),
        };
        info!(%theme, "Theme store initialized");

        let (tx, _rx) = watch::channel(theme);
        Ok(Self {
            slot,
            tx,
            write_lock: Mutex::new(()),
        })
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }

    /// Persists the theme, then notifies subscribers if it changed.
    ///
    /// A failed write leaves the current theme untouched.
    pub async fn set(&self, theme: Theme) -> Result<Theme, AppError> {
        let _guard = self.write_lock.lock().await;
        self.slot.write(theme.as_str()).await?;
        self.tx.send_if_modified(|current| {
            let changed = *current != theme;
            *current = theme;
            changed
        });
        Ok(theme)
    }

    pub async fn toggle(&self) -> Result<Theme, AppError> {
        let _guard = self.write_lock.lock().await;
        let next = self.current().toggled();
        self.slot.write(next.as_str()).await?;
        self.tx.send_replace(next);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Slot whose reads succeed and whose writes always fail.
    struct ReadOnlySlot(Option<&'static str>);

    #[async_trait]
    impl PreferenceSlot for ReadOnlySlot {
        async fn read(&self) -> Result<Option<String>, AppError> {
            Ok(self.0.map(str::to_string))
        }

        async fn write(&self, _value: &str) -> Result<(), AppError> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    async fn store_with(initial: Option<&str>) -> (ThemeStore, Arc<MemorySlot>) {
        let slot = Arc::new(MemorySlot::new(initial));
        let store = ThemeStore::init(slot.clone()).await.unwrap();
        (store, slot)
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), r#""light""#);
        let theme: Theme = serde_json::from_str(r#""dark""#).unwrap();
        assert_eq!(theme, Theme::Dark);
    }

    #[tokio::test]
    async fn test_init_defaults_to_dark() {
        let (store, _) = store_with(None).await;
        assert_eq!(store.current(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_init_reads_persisted_value() {
        let (store, _) = store_with(Some("light")).await;
        assert_eq!(store.current(), Theme::Light);
    }

    #[tokio::test]
    async fn test_init_ignores_garbage() {
        let (store, _) = store_with(Some("neon")).await;
        assert_eq!(store.current(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_toggle_persists_and_notifies() {
        let (store, slot) = store_with(None).await;
        let mut rx = store.subscribe();

        assert_eq!(store.toggle().await.unwrap(), Theme::Light);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Theme::Light);
        assert_eq!(slot.read().await.unwrap().as_deref(), Some("light"));

        assert_eq!(store.toggle().await.unwrap(), Theme::Dark);
        assert_eq!(slot.read().await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_set_same_value_still_writes_without_notifying() {
        let (store, slot) = store_with(None).await;
        let rx = store.subscribe();
        store.set(Theme::Dark).await.unwrap();
        assert!(!rx.has_changed().unwrap());
        assert_eq!(slot.read().await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_failed_write_keeps_current_theme() {
        let store = ThemeStore::init(Arc::new(ReadOnlySlot(Some("dark")))).await.unwrap();
        let rx = store.subscribe();

        assert!(matches!(store.toggle().await, Err(AppError::Persistence(_))));
        assert_eq!(store.current(), Theme::Dark);
        assert!(!rx.has_changed().unwrap());

        assert!(store.set(Theme::Light).await.is_err());
        assert_eq!(store.current(), Theme::Dark);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_file_backed_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");

        let store = ThemeStore::init(Arc::new(FileSlot::new(&path))).await.unwrap();
        store.set(Theme::Light).await.unwrap();
        drop(store);

        let store = ThemeStore::init(Arc::new(FileSlot::new(&path))).await.unwrap();
        assert_eq!(store.current(), Theme::Light);
    }
}
