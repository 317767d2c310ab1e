use crate::error::{ModelError, Result};
use crate::ids::UserID;
use std::fmt;

/// Kinds of assets the AI studio can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GenerationType {
    Footage,
    Audio,
    Effect,
}

impl GenerationType {
    pub fn all() -> &'static [GenerationType] {
        use GenerationType::*;
        &[Footage, Audio, Effect]
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenerationType::Footage => "Video Footage",
            GenerationType::Audio => "Background Audio",
            GenerationType::Effect => "Visual Effect",
        }
    }

    /// Longest clip the studio will render for this kind.
    pub fn max_duration_secs(&self) -> u32 {
        match self {
            GenerationType::Audio => 120,
            GenerationType::Footage | GenerationType::Effect => 30,
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for GenerationType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "footage" => Ok(GenerationType::Footage),
            "audio" => Ok(GenerationType::Audio),
            "effect" => Ok(GenerationType::Effect),
            other => Err(ModelError::Validation(format!(
                "unknown generation type: {other}"
            ))),
        }
    }
}

/// Output quality tier, priced in credits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QualityTier {
    #[default]
    Standard,
    Premium,
}

impl QualityTier {
    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::Standard => "Standard",
            QualityTier::Premium => "Premium",
        }
    }

    pub fn credits(&self) -> u32 {
        match self {
            QualityTier::Standard => 1,
            QualityTier::Premium => 3,
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A user's request for AI-generated media.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRequest {
    pub generation_type: GenerationType,
    pub prompt: String,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub style: Option<String>,
    pub duration_secs: u32,
    pub quality: QualityTier,
    pub user: UserID,
}

impl GenerationRequest {
    /// Enforce the studio's form rules before a job is queued.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(ModelError::Validation(
                "generation prompt cannot be empty".to_string(),
            ));
        }
        let cap = self.generation_type.max_duration_secs();
        if self.duration_secs == 0 || self.duration_secs > cap {
            return Err(ModelError::Validation(format!(
                "duration must be 1-{cap}s for {}, got {}s",
                self.generation_type, self.duration_secs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(generation_type: GenerationType, duration_secs: u32) -> GenerationRequest {
        GenerationRequest {
            generation_type,
            prompt: "city skyline at dusk".to_string(),
            style: Some("cinematic".to_string()),
            duration_secs,
            quality: QualityTier::Standard,
            user: UserID::new(),
        }
    }

    #[test]
    fn audio_allows_longer_clips_than_footage() {
        assert!(request(GenerationType::Audio, 120).validate().is_ok());
        assert!(request(GenerationType::Footage, 120).validate().is_err());
        assert!(request(GenerationType::Footage, 30).validate().is_ok());
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let mut req = request(GenerationType::Effect, 5);
        req.prompt = "  ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn premium_costs_more_credits() {
        assert_eq!(QualityTier::Standard.credits(), 1);
        assert_eq!(QualityTier::Premium.credits(), 3);
    }
}
