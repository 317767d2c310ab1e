use std::fmt;

/// Sort orderings offered by the marketplace listing UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UiSortOption {
    Newest,
    Popular,
    PriceLowToHigh,
    PriceHighToLow,
}

impl UiSortOption {
    pub fn all() -> &'static [UiSortOption] {
        use UiSortOption::*;
        &[Newest, Popular, PriceLowToHigh, PriceHighToLow]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiSortOption::Newest => "Newest",
            UiSortOption::Popular => "Popular",
            UiSortOption::PriceLowToHigh => "Price: Low to High",
            UiSortOption::PriceHighToLow => "Price: High to Low",
        }
    }

    /// Stable name used in query strings and CLI arguments.
    pub fn api_name(&self) -> &'static str {
        match self {
            UiSortOption::Newest => "newest",
            UiSortOption::Popular => "popular",
            UiSortOption::PriceLowToHigh => "price_low",
            UiSortOption::PriceHighToLow => "price_high",
        }
    }
}

impl fmt::Display for UiSortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for UiSortOption {
    type Err = crate::error::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(UiSortOption::Newest),
            "popular" => Ok(UiSortOption::Popular),
            "price_low" => Ok(UiSortOption::PriceLowToHigh),
            "price_high" => Ok(UiSortOption::PriceHighToLow),
            other => Err(crate::error::ModelError::Validation(format!(
                "unknown sort option: {other}"
            ))),
        }
    }
}

/// Curated tag vocabulary surfaced as quick filters in the sidebar.
pub fn popular_tags() -> &'static [&'static str] {
    &[
        "business",
        "corporate",
        "modern",
        "cinematic",
        "upbeat",
        "professional",
    ]
}
