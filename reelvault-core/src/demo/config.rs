use serde::{Deserialize, Serialize};

/// High-level options describing how the demo catalog should be generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoCatalogOptions {
    /// Synthetic assets generated on top of the canonical fixtures.
    pub asset_count: usize,
    /// RNG seed; the same seed always produces the same catalog.
    pub seed: u64,
    /// Include the three canonical marketplace fixtures.
    pub include_fixtures: bool,
    /// Credits granted to the demo user for studio runs.
    pub starter_credits: u32,
}

impl Default for DemoCatalogOptions {
    fn default() -> Self {
        Self {
            asset_count: 12,
            seed: 7,
            include_fixtures: true,
            starter_credits: 10,
        }
    }
}

impl DemoCatalogOptions {
    /// Load options from a JSON encoded environment variable. Falls back to
    /// per-field environment overrides and finally defaults.
    pub fn from_env() -> Self {
        if let Ok(raw) = std::env::var("REELVAULT_DEMO_OPTIONS")
            && let Ok(parsed) = serde_json::from_str::<DemoCatalogOptions>(&raw)
        {
            return parsed;
        }

        let mut opts = DemoCatalogOptions::default();

        if let Ok(count) = std::env::var("REELVAULT_DEMO_ASSET_COUNT")
            && let Ok(parsed) = count.parse::<usize>()
        {
            opts.asset_count = parsed;
        }

        if let Ok(seed) = std::env::var("REELVAULT_DEMO_SEED")
            && let Ok(parsed) = seed.parse::<u64>()
        {
            opts.seed = parsed;
        }

        if let Ok(flag) = std::env::var("REELVAULT_DEMO_FIXTURES") {
            opts.include_fixtures =
                matches_ignore_ascii_case(&flag, ["1", "true", "yes"]);
        }

        if let Ok(credits) = std::env::var("REELVAULT_DEMO_CREDITS")
            && let Ok(parsed) = credits.parse::<u32>()
        {
            opts.starter_credits = parsed;
        }

        opts
    }
}

fn matches_ignore_ascii_case(
    value: &str,
    options: impl IntoIterator<Item = &'static str>,
) -> bool {
    let value_lower = value.trim().to_ascii_lowercase();
    options
        .into_iter()
        .any(|candidate| value_lower == candidate)
}
