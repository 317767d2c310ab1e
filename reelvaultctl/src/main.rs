//! Demo driver for the Reelvault marketplace core.
//!
//! Seeds a reproducible in-memory catalog and exposes the listing, purchase,
//! and generation flows from the command line. Everything here is
//! presentation: the behavior lives in `reelvault-core`.

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use reelvault_core::demo::{
    DemoCatalogOptions, demo_user, fixture_projects, seed_catalog,
};
use reelvault_core::market::{SettlementEvent, TransactionLedger};
use reelvault_core::query::MarketplaceFilterParams;
use reelvault_core::studio::{GenerationEvent, Studio};
use reelvault_core::{AssetCatalog, DashboardStats};
use reelvault_model::{
    Asset, AssetID, AssetType, GenerationRequest, GenerationType,
    QualityTier, UiSortOption,
};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "reelvaultctl",
    about = "Browse and drive a demo Reelvault marketplace",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List marketplace assets with filters and sorting
    Browse(BrowseArgs),
    /// Show the demo creator's dashboard tiles
    Dashboard {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Simulate purchasing an asset from the demo catalog
    Purchase(PurchaseArgs),
    /// Submit a generation request to the demo studio
    Generate(GenerateArgs),
}

#[derive(Args)]
struct BrowseArgs {
    /// Restrict to one category (template|music|effect|footage|plugin)
    #[arg(long)]
    asset_type: Option<String>,
    /// Lower price bound, inclusive
    #[arg(long)]
    price_min: Option<f64>,
    /// Upper price bound, inclusive
    #[arg(long)]
    price_max: Option<f64>,
    /// Require at least one matching tag (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Case-insensitive text search over title, description, and tags
    #[arg(long)]
    search: Option<String>,
    /// Ordering (newest|popular|price_low|price_high)
    #[arg(long)]
    sort: Option<String>,
    /// Truncate the listing
    #[arg(long)]
    limit: Option<usize>,
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PurchaseArgs {
    /// Asset id to buy; defaults to the cheapest listed asset
    #[arg(long)]
    asset: Option<String>,
    /// Report the settlement as failed instead of confirmed
    #[arg(long)]
    fail: bool,
}

#[derive(Args)]
struct GenerateArgs {
    /// What to generate (footage|audio|effect)
    #[arg(long = "type")]
    generation_type: String,
    /// Prompt describing the desired output
    #[arg(long)]
    prompt: String,
    /// Optional style hint
    #[arg(long)]
    style: Option<String>,
    /// Clip length in seconds
    #[arg(long, default_value_t = 10)]
    duration: u32,
    /// Quality tier (standard|premium)
    #[arg(long, default_value = "standard")]
    quality: String,
    /// Report the render as failed instead of completed
    #[arg(long)]
    fail: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = DemoCatalogOptions::from_env();

    match cli.command {
        Command::Browse(args) => browse(&options, args),
        Command::Dashboard { json } => dashboard(&options, json),
        Command::Purchase(args) => purchase(&options, args),
        Command::Generate(args) => generate(&options, args),
    }
}

fn browse(options: &DemoCatalogOptions, args: BrowseArgs) -> anyhow::Result<()> {
    let catalog = seed_catalog(options)?;
    tracing::debug!(total = catalog.len(), seed = options.seed, "demo catalog ready");

    let asset_type = args
        .asset_type
        .as_deref()
        .map(AssetType::from_str)
        .transpose()?;
    let sort = args
        .sort
        .as_deref()
        .map(UiSortOption::from_str)
        .transpose()?;
    let price_range = match (args.price_min, args.price_max) {
        (None, None) => None,
        (min, max) => Some((min.unwrap_or(0.0), max.unwrap_or(f64::MAX))),
    };

    let mut query = MarketplaceFilterParams {
        asset_type,
        price_range,
        tags: &args.tags,
        search: args.search.as_deref(),
        sort,
        uploader: None,
    }
    .into_query();
    if let Some(limit) = args.limit {
        query.pagination = Some(reelvault_core::query::Pagination {
            offset: 0,
            limit,
        });
    }

    let hits = catalog.query(&query);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No assets found matching your criteria.");
        return Ok(());
    }
    println!(
        "{:<38} {:<18} {:<28} {:>8} {:>8}",
        "ID", "TYPE", "TITLE", "PRICE", "VIEWS"
    );
    for asset in &hits {
        println!(
            "{:<38} {:<18} {:<28} {:>8} {:>8}",
            asset.id,
            asset.asset_type.label(),
            asset.title(),
            asset.price.to_string(),
            asset.stats.views,
        );
    }
    Ok(())
}

fn dashboard(options: &DemoCatalogOptions, json: bool) -> anyhow::Result<()> {
    let mut catalog = seed_catalog(options)?;
    let mut ledger = TransactionLedger::new();

    // Give the dashboard something to show: the demo user buys every
    // fixture listing and every sale settles successfully.
    let listed: Vec<Asset> = catalog.active_assets().cloned().collect();
    for asset in listed.iter().take(3) {
        let tx = ledger.begin_purchase(demo_user(), asset)?;
        ledger.apply(&mut catalog, SettlementEvent::Confirmed {
            transaction: tx,
        })?;
    }

    let creator = listed
        .first()
        .map(|asset| asset.uploader)
        .unwrap_or_else(demo_user);
    let projects = fixture_projects(creator);
    let stats = DashboardStats::collect(&creator, &catalog, &projects, &ledger);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }
    println!("Total Earnings   {:.3}", stats.total_earnings);
    println!("Total Views      {}", stats.total_views);
    println!("Active Projects  {}", stats.active_projects);
    println!("Assets Owned     {}", stats.assets_owned);
    Ok(())
}

fn purchase(options: &DemoCatalogOptions, args: PurchaseArgs) -> anyhow::Result<()> {
    let mut catalog = seed_catalog(options)?;
    let asset = resolve_asset(&catalog, args.asset.as_deref())?;

    let mut ledger = TransactionLedger::new();
    let tx = ledger.begin_purchase(demo_user(), &asset)?;
    let event = if args.fail {
        SettlementEvent::Failed {
            transaction: tx,
            reason: "settlement declined".to_string(),
        }
    } else {
        SettlementEvent::Confirmed { transaction: tx }
    };
    let settled = ledger.apply(&mut catalog, event)?;
    println!("{}", serde_json::to_string_pretty(settled)?);
    Ok(())
}

fn generate(options: &DemoCatalogOptions, args: GenerateArgs) -> anyhow::Result<()> {
    let generation_type = GenerationType::from_str(&args.generation_type)?;
    let quality = match args.quality.trim().to_ascii_lowercase().as_str() {
        "standard" => QualityTier::Standard,
        "premium" => QualityTier::Premium,
        other => bail!("unknown quality tier: {other}"),
    };

    let mut studio = Studio::new();
    studio.grant_credits(demo_user(), options.starter_credits);
    let job = studio.submit(GenerationRequest {
        generation_type,
        prompt: args.prompt,
        style: args.style,
        duration_secs: args.duration,
        quality,
        user: demo_user(),
    })?;

    studio.apply(GenerationEvent::Started { job })?;
    let event = if args.fail {
        GenerationEvent::Failed {
            job,
            reason: "render farm unavailable".to_string(),
        }
    } else {
        GenerationEvent::Completed {
            job,
            asset: AssetID::new(),
        }
    };
    studio.apply(event)?;

    let finished = studio
        .job(&job)
        .context("submitted job disappeared from the studio")?;
    println!("job       {}", finished.id);
    println!("kind      {}", finished.request.generation_type);
    println!("credits   {}", finished.credits_charged);
    println!("state     {}", serde_json::to_string(&finished.state)?);
    println!(
        "remaining {}",
        studio.credits_for(&finished.request.user)
    );
    Ok(())
}

fn resolve_asset(
    catalog: &AssetCatalog,
    requested: Option<&str>,
) -> anyhow::Result<Asset> {
    match requested {
        Some(raw) => {
            let id = AssetID(
                Uuid::parse_str(raw.trim())
                    .with_context(|| format!("invalid asset id: {raw}"))?,
            );
            catalog
                .get(&id)
                .cloned()
                .with_context(|| format!("asset not in catalog: {id}"))
        }
        None => catalog
            .active_assets()
            .min_by(|a, b| {
                a.price
                    .value()
                    .partial_cmp(&b.price.value())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .cloned()
            .context("catalog has no active assets"),
    }
}
