use crate::chrono::{DateTime, Utc};
use crate::ids::{AssetID, ProjectID, UserID};
use std::fmt;

/// Lifecycle of a video project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProjectStatus {
    Draft,
    Generating,
    Completed,
    Published,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Generating => "Generating",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Published => "Published",
        }
    }

    /// Projects still being worked on, as counted by the dashboard.
    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::Draft | ProjectStatus::Generating)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Creative choices applied on top of a template.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectCustomizations {
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub style: Option<String>,
    pub keywords: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub duration_secs: Option<u32>,
    pub colors: Vec<String>,
}

/// A user's video project assembled from marketplace and generated assets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoProject {
    pub id: ProjectID,
    pub owner: UserID,
    pub title: String,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub template: Option<AssetID>,
    pub customizations: ProjectCustomizations,
    pub generated_assets: Vec<AssetID>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl VideoProject {
    pub fn new(owner: UserID, title: impl Into<String>) -> Self {
        VideoProject {
            id: ProjectID::new(),
            owner,
            title: title.into(),
            description: None,
            template: None,
            customizations: ProjectCustomizations::default(),
            generated_assets: Vec::new(),
            status: ProjectStatus::Draft,
            created_at: Utc::now(),
        }
    }
}
