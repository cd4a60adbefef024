use anyhow::{Context, Result};
use catalog::{AddonId, Application, CatalogIndex};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use featured::{FeaturedRegistry, RotatingFeatured};
use listing::orderings::{created, name, popular, rating, updated};
use listing::{FilterSpec, ListingFilter};
use server::{HomepageService, UpdateService, BROWSE_PARAM};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Add-on Shelf - marketplace listing engine
#[derive(Parser)]
#[command(name = "addon-shelf")]
#[command(about = "Add-on marketplace listings, featured rotation and update checks", long_about = None)]
struct Cli {
    /// Path to the catalog data directory
    #[arg(short, long, default_value = "data/catalog")]
    data_dir: PathBuf,

    /// Rotation seed for featured/gallery sampling (defaults to the
    /// current day number, i.e. a daily rotation)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Application selector mirroring catalog::Application for clap.
#[derive(Clone, Copy, ValueEnum)]
enum AppArg {
    Firefox,
    Thunderbird,
    Seamonkey,
    Sunbird,
    Mobile,
}

impl From<AppArg> for Application {
    fn from(arg: AppArg) -> Self {
        match arg {
            AppArg::Firefox => Application::Firefox,
            AppArg::Thunderbird => Application::Thunderbird,
            AppArg::Seamonkey => Application::Seamonkey,
            AppArg::Sunbird => Application::Sunbird,
            AppArg::Mobile => Application::Mobile,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the homepage tabs for an application
    Home {
        #[arg(long, value_enum, default_value = "firefox")]
        app: AppArg,

        #[arg(long, default_value = "en-US")]
        locale: String,

        /// Requested tab key (unknown values fall back to featured)
        #[arg(long = BROWSE_PARAM)]
        browse: Option<String>,
    },

    /// Show one add-on's detail record by slug
    Addon {
        #[arg(long)]
        slug: String,
    },

    /// Browse all listed add-ons under one ordering
    Browse {
        #[arg(long, value_enum, default_value = "firefox")]
        app: AppArg,

        /// Ordering key: popular, created, updated, rating or name
        #[arg(long, default_value = "popular")]
        sort: String,

        #[arg(long, default_value = "20")]
        limit: usize,

        /// Emit the rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the featured rotation for an application and locale
    Featured {
        #[arg(long, value_enum, default_value = "firefox")]
        app: AppArg,

        #[arg(long, default_value = "en-US")]
        locale: String,
    },

    /// Resolve an update check for a client
    UpdateCheck {
        #[arg(long)]
        addon_id: AddonId,

        #[arg(long, value_enum, default_value = "firefox")]
        app: AppArg,

        /// The client's application version, e.g. 3.6.12
        #[arg(long)]
        app_version: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(day_number);

    println!("Loading catalog from {}...", cli.data_dir.display());
    let start = Instant::now();
    let index = Arc::new(
        CatalogIndex::load_from_files(&cli.data_dir).context("Failed to load catalog data")?,
    );
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    match cli.command {
        Commands::Home {
            app,
            locale,
            browse,
        } => handle_home(index, seed, app.into(), &locale, browse.as_deref()),
        Commands::Addon { slug } => handle_addon(index, &slug),
        Commands::Browse {
            app,
            sort,
            limit,
            json,
        } => handle_browse(index, app.into(), &sort, limit, json),
        Commands::Featured { app, locale } => handle_featured(index, seed, app.into(), &locale),
        Commands::UpdateCheck {
            addon_id,
            app,
            app_version,
        } => handle_update_check(index, addon_id, app.into(), &app_version),
    }
}

/// Days since the Unix epoch; the default daily rotation seed.
fn day_number() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / 86_400)
        .unwrap_or(0)
}

fn rotation(index: &CatalogIndex, seed: u64) -> RotatingFeatured {
    RotatingFeatured::new(FeaturedRegistry::from_entries(index.featured_entries()), seed)
}

fn handle_home(
    index: Arc<CatalogIndex>,
    seed: u64,
    app: Application,
    locale: &str,
    browse: Option<&str>,
) -> Result<()> {
    let provider = Arc::new(rotation(&index, seed));
    let service = HomepageService::new(index, provider);
    let page = service.home(app, locale, browse)?;

    // Tabs in homepage order, not map order.
    for key in ["featured", "popular", "new", "updated"] {
        let marker = if key == page.selected_key { "▶" } else { " " };
        let heading = format!("{marker} [{key}]");
        if key == page.selected_key {
            println!("{}", heading.bold());
        } else {
            println!("{heading}");
        }
        for addon in &page.tabs[key] {
            println!(
                "    {:>6}  {}  ({} weekly downloads)",
                addon.id,
                addon.name.cyan(),
                addon.weekly_downloads
            );
        }
    }
    Ok(())
}

fn handle_addon(index: Arc<CatalogIndex>, slug: &str) -> Result<()> {
    let addon = index
        .get_addon_by_slug(slug)
        .with_context(|| format!("No add-on with slug '{slug}'"))?;

    println!("{}  [{}]  id {}", addon.name.cyan().bold(), addon.slug, addon.id);
    println!(
        "  type {:?}, status {:?}, listed {}",
        addon.addon_type, addon.status, addon.listed
    );
    println!(
        "  apps {:?}, ↓{} weekly, ★{:.1}",
        addon.apps, addon.weekly_downloads, addon.bayesian_rating
    );

    let versions = index.get_versions(addon.id);
    println!("  {} version(s):", versions.len());
    for v in versions {
        println!(
            "    {}  {:?} {} - {}",
            v.version.bold(),
            v.app,
            v.min_app_version,
            v.max_app_version
        );
    }
    Ok(())
}

fn handle_browse(
    index: Arc<CatalogIndex>,
    app: Application,
    sort: &str,
    limit: usize,
    json: bool,
) -> Result<()> {
    let spec = FilterSpec::new(
        vec![popular(), created(), updated(), rating(), name()],
        "popular",
    )?;
    let filter = ListingFilter::new(&spec);

    let base = index.listed(app);
    let selection = filter.selection(Some(sort), &base);
    let mut rows = selection.addons;
    rows.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} listed add-ons, showing {} by {}",
        base.len(),
        rows.len(),
        selection.option.label().bold()
    );
    for (i, addon) in rows.iter().enumerate() {
        println!(
            "{:>3}. {} [{}]  ↓{} ★{:.1}",
            i + 1,
            addon.name.cyan(),
            addon.slug,
            addon.weekly_downloads,
            addon.bayesian_rating
        );
    }
    Ok(())
}

fn handle_featured(
    index: Arc<CatalogIndex>,
    seed: u64,
    app: Application,
    locale: &str,
) -> Result<()> {
    use listing::FeaturedSetProvider;

    let provider = rotation(&index, seed);
    let ids = provider.featured_ids(app, locale);
    println!(
        "Featured rotation for {:?}/{} (seed {}): {} add-ons",
        app,
        locale,
        seed,
        ids.len()
    );
    for id in ids {
        match index.get_addon(id) {
            Some(addon) => println!("  {:>6}  {}", id, addon.name.cyan()),
            None => println!("  {:>6}  {}", id, "(stale featured id)".yellow()),
        }
    }
    Ok(())
}

fn handle_update_check(
    index: Arc<CatalogIndex>,
    addon_id: AddonId,
    app: Application,
    app_version: &str,
) -> Result<()> {
    let service = UpdateService::new(index);
    match service.check(addon_id, app, app_version) {
        Some(hit) => {
            println!(
                "{} update available: version {} (compatible {} - {})",
                "✓".green(),
                hit.version.bold(),
                hit.min_app_version,
                hit.max_app_version
            );
            println!("  {}", hit.url);
        }
        None => println!("{} no compatible update", "✗".red()),
    }
    Ok(())
}
