use crate::ids::UserID;

/// Public-facing profile details.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileInfo {
    pub display_name: String,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub avatar: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub bio: Option<String>,
}

/// A platform user.
///
/// `wallet_address` is display-only; no signing or settlement happens
/// against it anywhere in the system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserID,
    pub wallet_address: String,
    pub profile: ProfileInfo,
    pub reputation_score: f32,
}

impl User {
    pub fn new(display_name: impl Into<String>, wallet_address: impl Into<String>) -> Self {
        User {
            id: UserID::new(),
            wallet_address: wallet_address.into(),
            profile: ProfileInfo {
                display_name: display_name.into(),
                avatar: None,
                bio: None,
            },
            reputation_score: 0.0,
        }
    }
}
