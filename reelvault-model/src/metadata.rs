use crate::error::{ModelError, Result};
use crate::urls::{DownloadUrl, PreviewUrl};
use std::fmt;

/// Pixel dimensions parsed from a `1920x1080`-style string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ModelError::InvalidResolution(format!(
                "{width}x{height}"
            )));
        }
        Ok(Resolution { width, height })
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for Resolution {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        let (w, h) = raw
            .split_once(['x', 'X'])
            .ok_or_else(|| ModelError::InvalidResolution(raw.to_string()))?;
        let width = w
            .trim()
            .parse()
            .map_err(|_| ModelError::InvalidResolution(raw.to_string()))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| ModelError::InvalidResolution(raw.to_string()))?;
        Resolution::new(width, height)
    }
}

/// Descriptive metadata carried by every marketplace asset.
///
/// `tags` is an ordered sequence; duplicates are allowed and preserved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub duration_secs: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub resolution: Option<Resolution>,
    /// Payload size in bytes.
    pub file_size: u64,
    pub preview_url: PreviewUrl,
    pub download_url: DownloadUrl,
}

impl AssetMetadata {
    /// Reject values the filter pipeline must never see.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::Validation(
                "asset title cannot be empty".to_string(),
            ));
        }
        if let Some(duration) = self.duration_secs {
            if !duration.is_finite() || duration < 0.0 {
                return Err(ModelError::Validation(format!(
                    "duration must be finite and non-negative, got {duration}"
                )));
            }
        }
        Ok(())
    }

    /// Case-sensitive tag membership, matching the listing UI's tag chips.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn resolution_parses_standard_forms() {
        let res = Resolution::from_str("1920x1080").unwrap();
        assert_eq!(res.width, 1920);
        assert_eq!(res.height, 1080);
        assert_eq!(res.to_string(), "1920x1080");

        assert!(Resolution::from_str("3840X2160").is_ok());
    }

    #[test]
    fn resolution_rejects_garbage() {
        assert!(Resolution::from_str("1080p").is_err());
        assert!(Resolution::from_str("x1080").is_err());
        assert!(Resolution::from_str("0x1080").is_err());
        assert!(Resolution::from_str("").is_err());
    }
}
