//! Persistence slots for the theme preference: a single string value.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;

/// Key-value slot holding one string. Read once at startup, written on every change.
#[async_trait]
pub trait PreferenceSlot: Send + Sync {
    async fn read(&self) -> Result<Option<String>, AppError>;
    async fn write(&self, value: &str) -> Result<(), AppError>;
}

/// Stores the value as the whole content of a text file.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PreferenceSlot for FileSlot {
    async fn read(&self) -> Result<Option<String>, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let value = raw.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored preference");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, value: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, value).await?;
        Ok(())
    }
}

/// Process-local slot. Used when no store path is configured.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            value: Mutex::new(initial.map(str::to_string)),
        }
    }
}

#[async_trait]
impl PreferenceSlot for MemorySlot {
    async fn read(&self) -> Result<Option<String>, AppError> {
        Ok(self
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn write(&self, value: &str) -> Result<(), AppError> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());
        Ok(())
    }
}
