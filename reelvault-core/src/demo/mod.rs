//! Demo-mode utilities for generating a fake marketplace catalog. Every
//! generated record flows through normal validation, so demo data behaves
//! exactly like user uploads; only its origin is synthetic.

use crate::catalog::AssetCatalog;
use crate::error::Result;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reelvault_model::{
    Asset, AssetID, AssetMetadata, AssetStats, AssetType, DownloadUrl,
    PreviewUrl, Price, ProjectCustomizations, ProjectID, ProjectStatus,
    Resolution, RoyaltyPercentage, UserID, VideoProject, popular_tags,
};
use uuid::Uuid;

pub mod config;

pub use config::DemoCatalogOptions;

#[cfg(test)]
mod tests;

// 2024-01-13T00:00:00Z, the oldest fixture listing date.
const FIXTURE_EPOCH: i64 = 1_705_104_000;
const SECS_PER_DAY: i64 = 86_400;

/// Vocabulary the synthetic generator draws tags from: the sidebar's quick
/// filters plus a handful of demo-only extras.
static DEMO_TAGS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    popular_tags()
        .iter()
        .copied()
        .chain(["intro", "transition", "dramatic", "energetic", "minimal"])
        .collect()
});

const DEMO_ADJECTIVES: &[&str] = &[
    "Modern", "Dynamic", "Clean", "Vintage", "Bold", "Subtle", "Neon",
    "Golden",
];

const DEMO_NOUNS: &[&str] = &[
    "Opener", "Lower Third", "Soundtrack", "Transition", "Montage", "Loop",
    "Overlay", "Bumper",
];

fn day(offset: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(FIXTURE_EPOCH + offset * SECS_PER_DAY, 0)
        .unwrap_or_default()
}

fn fixture_user(tag: u128) -> UserID {
    UserID(Uuid::from_u128(0xA000 + tag))
}

/// The interactive demo account used by CLI sessions.
pub fn demo_user() -> UserID {
    UserID(Uuid::from_u128(0xD001))
}

/// The three canonical marketplace fixtures. Ids, dates, and counters are
/// fixed so demo runs and documentation screenshots agree.
pub fn fixture_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: AssetID(Uuid::from_u128(1)),
            uploader: fixture_user(1),
            asset_type: AssetType::Template,
            metadata: AssetMetadata {
                title: "Modern Business Intro".to_string(),
                description:
                    "Professional business introduction template with clean animations"
                        .to_string(),
                tags: ["business", "corporate", "intro", "professional"]
                    .map(String::from)
                    .to_vec(),
                duration_secs: Some(15.0),
                resolution: Some(Resolution {
                    width: 1920,
                    height: 1080,
                }),
                file_size: 25_600_000,
                preview_url: preview_locator(1),
                download_url: download_locator(1),
            },
            price: Price::new(0.05).expect("fixture price is valid"),
            royalty: RoyaltyPercentage::new(10).expect("fixture royalty is valid"),
            stats: AssetStats {
                views: 342,
                purchases: 17,
            },
            created_at: day(2),
            updated_at: day(2),
            is_active: true,
        },
        Asset {
            id: AssetID(Uuid::from_u128(2)),
            uploader: fixture_user(2),
            asset_type: AssetType::Music,
            metadata: AssetMetadata {
                title: "Upbeat Corporate".to_string(),
                description:
                    "Energetic background music perfect for business presentations"
                        .to_string(),
                tags: ["upbeat", "corporate", "energetic", "background"]
                    .map(String::from)
                    .to_vec(),
                duration_secs: Some(120.0),
                resolution: None,
                file_size: 8_400_000,
                preview_url: preview_locator(2),
                download_url: download_locator(2),
            },
            price: Price::new(0.03).expect("fixture price is valid"),
            royalty: RoyaltyPercentage::new(15).expect("fixture royalty is valid"),
            stats: AssetStats {
                views: 198,
                purchases: 9,
            },
            created_at: day(1),
            updated_at: day(1),
            is_active: true,
        },
        Asset {
            id: AssetID(Uuid::from_u128(3)),
            uploader: fixture_user(3),
            asset_type: AssetType::Effect,
            metadata: AssetMetadata {
                title: "Particle Explosion".to_string(),
                description:
                    "Dynamic particle explosion effect for dramatic transitions"
                        .to_string(),
                tags: ["particles", "explosion", "transition", "dramatic"]
                    .map(String::from)
                    .to_vec(),
                duration_secs: Some(3.0),
                resolution: Some(Resolution {
                    width: 1920,
                    height: 1080,
                }),
                file_size: 15_200_000,
                preview_url: preview_locator(3),
                download_url: download_locator(3),
            },
            price: Price::new(0.02).expect("fixture price is valid"),
            royalty: RoyaltyPercentage::new(20).expect("fixture royalty is valid"),
            stats: AssetStats {
                views: 587,
                purchases: 31,
            },
            created_at: day(0),
            updated_at: day(0),
            is_active: true,
        },
    ]
}

/// The demo user's two starter projects.
pub fn fixture_projects(owner: UserID) -> Vec<VideoProject> {
    vec![
        VideoProject {
            id: ProjectID(Uuid::from_u128(0xB001)),
            owner,
            title: "Product Launch Video".to_string(),
            description: Some(
                "Marketing video for new product launch".to_string(),
            ),
            template: Some(AssetID(Uuid::from_u128(1))),
            customizations: ProjectCustomizations {
                style: Some("modern".to_string()),
                keywords: ["product", "launch", "innovation"]
                    .map(String::from)
                    .to_vec(),
                duration_secs: Some(30),
                colors: ["#ffd700", "#1e293b"].map(String::from).to_vec(),
            },
            generated_assets: vec![
                AssetID(Uuid::from_u128(0xC001)),
                AssetID(Uuid::from_u128(0xC002)),
            ],
            status: ProjectStatus::Completed,
            created_at: day(3),
        },
        VideoProject {
            id: ProjectID(Uuid::from_u128(0xB002)),
            owner,
            title: "Social Media Promo".to_string(),
            description: Some(
                "Short promotional video for social media".to_string(),
            ),
            template: None,
            customizations: ProjectCustomizations {
                style: Some("vibrant".to_string()),
                keywords: ["social", "promo", "engaging"]
                    .map(String::from)
                    .to_vec(),
                duration_secs: Some(15),
                colors: ["#ffd700", "#6366f1"].map(String::from).to_vec(),
            },
            generated_assets: vec![],
            status: ProjectStatus::Generating,
            created_at: day(4),
        },
    ]
}

/// Build a catalog from the options. The same options always produce the
/// same catalog, byte for byte.
pub fn seed_catalog(options: &DemoCatalogOptions) -> Result<AssetCatalog> {
    let mut catalog = AssetCatalog::new();

    if options.include_fixtures {
        for asset in fixture_assets() {
            catalog.insert(asset)?;
        }
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    for ordinal in 0..options.asset_count {
        catalog.insert(synthetic_asset(&mut rng, ordinal)?)?;
    }

    Ok(catalog)
}

fn synthetic_asset(rng: &mut StdRng, ordinal: usize) -> Result<Asset> {
    let asset_type = AssetType::all()[rng.random_range(0..AssetType::all().len())];
    let adjective = DEMO_ADJECTIVES[rng.random_range(0..DEMO_ADJECTIVES.len())];
    let noun = DEMO_NOUNS[rng.random_range(0..DEMO_NOUNS.len())];
    let title = format!("{adjective} {noun}");

    let mut tags = Vec::with_capacity(3);
    for _ in 0..rng.random_range(2..=3) {
        tags.push(DEMO_TAGS[rng.random_range(0..DEMO_TAGS.len())].to_string());
    }

    let duration_secs = match asset_type {
        AssetType::Music => Some(f64::from(rng.random_range(30..=180))),
        AssetType::Plugin => None,
        _ => Some(f64::from(rng.random_range(3..=60))),
    };
    let resolution = match asset_type {
        AssetType::Music | AssetType::Plugin => None,
        _ => Some(if rng.random_bool(0.3) {
            Resolution {
                width: 3840,
                height: 2160,
            }
        } else {
            Resolution {
                width: 1920,
                height: 1080,
            }
        }),
    };

    let price_milli = rng.random_range(1..=250);
    let views = rng.random_range(0..1_000);
    let id = AssetID(Uuid::from_u128(rng.random()));
    let listed = day(-rng.random_range(0..90i64));

    Ok(Asset {
        id,
        uploader: fixture_user(rng.random_range(1..=3)),
        asset_type,
        metadata: AssetMetadata {
            title,
            description: format!(
                "Demo {} listing #{ordinal}",
                asset_type.label().to_lowercase()
            ),
            tags,
            duration_secs,
            resolution,
            file_size: rng.random_range(500_000..50_000_000),
            preview_url: preview_locator(id.to_uuid().as_u128()),
            download_url: download_locator(id.to_uuid().as_u128()),
        },
        price: Price::new(f64::from(price_milli) / 1_000.0)?,
        royalty: RoyaltyPercentage::new(rng.random_range(0..=25))?,
        stats: AssetStats {
            views,
            purchases: views / 20,
        },
        created_at: listed,
        updated_at: listed,
        is_active: true,
    })
}

fn preview_locator(key: u128) -> PreviewUrl {
    PreviewUrl::from_string(format!("/api/preview/{key}"))
}

fn download_locator(key: u128) -> DownloadUrl {
    DownloadUrl::from_string(format!("/api/download/{key}"))
}
