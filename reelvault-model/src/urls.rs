use crate::error::{ModelError, Result};
use std::fmt;

/// Locator for an asset's streamable preview.
///
/// Stored as an opaque path or absolute URL; the serving layer resolves it
/// against its own base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ModelError::Validation(
                "preview url cannot be empty".to_string(),
            ));
        }
        Ok(PreviewUrl(raw))
    }

    /// Infallible constructor for locators assembled by the platform
    /// itself (demo seeds, generated assets).
    pub fn from_string(raw: String) -> Self {
        PreviewUrl(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locator for an asset's downloadable payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DownloadUrl(String);

impl DownloadUrl {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ModelError::Validation(
                "download url cannot be empty".to_string(),
            ));
        }
        Ok(DownloadUrl(raw))
    }

    /// Infallible constructor for locators assembled by the platform
    /// itself (demo seeds, generated assets).
    pub fn from_string(raw: String) -> Self {
        DownloadUrl(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DownloadUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
