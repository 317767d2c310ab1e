use std::fmt;

/// Closed set of purchasable asset categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AssetType {
    Template,
    Music,
    Effect,
    Footage,
    Plugin,
}

impl AssetType {
    pub fn all() -> &'static [AssetType] {
        use AssetType::*;
        &[Template, Music, Effect, Footage, Plugin]
    }

    /// Human-facing label used by listing surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Template => "Video Template",
            AssetType::Music => "Background Music",
            AssetType::Effect => "Visual Effect",
            AssetType::Footage => "Stock Footage",
            AssetType::Plugin => "Plugin/Tool",
        }
    }

    /// Stable lowercase name used in query strings and CLI arguments.
    pub fn api_name(&self) -> &'static str {
        match self {
            AssetType::Template => "template",
            AssetType::Music => "music",
            AssetType::Effect => "effect",
            AssetType::Footage => "footage",
            AssetType::Plugin => "plugin",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for AssetType {
    type Err = crate::error::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(AssetType::Template),
            "music" => Ok(AssetType::Music),
            "effect" => Ok(AssetType::Effect),
            "footage" => Ok(AssetType::Footage),
            "plugin" => Ok(AssetType::Plugin),
            other => Err(crate::error::ModelError::Validation(format!(
                "unknown asset type: {other}"
            ))),
        }
    }
}
