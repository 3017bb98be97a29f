use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use bti_catalog::client::BtiCatalogApi;
use bti_catalog::model::{Card, PatternStyle};
use bti_catalog::BtiCatalog;
use clap::{Parser, Subcommand};
use home_feed::client::HomeFeedApi;
use home_feed::model::{FeedTab, FoodItem};
use home_feed::HomeFeed;
use mimalloc::MiMalloc;
use modkit::{ModuleCtx, ModuleCtxBuilder, ModuleRegistry, TracedClient};
use runtime::{default_logging_config, AppConfig, CliArgs};
use tokio_util::sync::CancellationToken;
use user_fetch::client::UserFetchApi;
use user_fetch::error::UserFetchError;
use user_fetch::model::UserResponse;
use user_fetch::UserFetch;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

// Adapter to make AppConfig implement modkit::ConfigProvider
struct ModkitConfigAdapter(AppConfig);

impl modkit::ConfigProvider for ModkitConfigAdapter {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.0.module_section(module_name)
    }
}

/// UMai - food discovery core
#[derive(Parser)]
#[command(name = "umai")]
#[command(about = "UMai - user lookup, BTI taste cards and the home feed")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch users by id (concurrently)
    User {
        #[arg(required = true)]
        ids: Vec<u64>,
    },
    /// List BTI cards
    Cards {
        /// Show a single card by type code, e.g. CTSP
        #[arg(long = "type", value_name = "CODE")]
        type_code: Option<String>,
        /// Only cards with this pattern style (dynamic, elegant, minimal, classic)
        #[arg(long, value_name = "STYLE")]
        pattern: Option<String>,
    },
    /// Show the featured banner and recommendations of a tab
    Feed {
        /// MSFP, Local or Popular
        #[arg(long)]
        tab: Option<String>,
    },
    /// Check configuration and the card catalog
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.clone().unwrap_or_else(default_logging_config);
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.app.home_dir));
    tracing::debug!(config = ?args.config, "umai starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let ctx = ModuleCtxBuilder::new(CancellationToken::new())
        .with_config_provider(Arc::new(ModkitConfigAdapter(config.clone())))
        .build();

    tokio::spawn({
        let cancel = ctx.cancellation_token().clone();
        async move {
            if let Err(e) = modkit::wait_for_shutdown().await {
                tracing::warn!(error = %e, "signal handler unavailable");
                return;
            }
            tracing::info!("shutdown requested");
            cancel.cancel();
        }
    });

    build_registry()?.init_all(&ctx).await?;

    let command = cli.command.unwrap_or(Commands::Check);
    tokio::select! {
        res = run_command(command, &ctx, &config) => res,
        _ = ctx.cancellation_token().cancelled() => {
            eprintln!("interrupted");
            Ok(ExitCode::from(130))
        }
    }
}

fn build_registry() -> Result<ModuleRegistry> {
    // one connection pool for the whole process
    let transport = TracedClient::default();

    let mut registry = ModuleRegistry::new();
    registry.register(Arc::new(UserFetch::new(transport)))?;
    registry.register(Arc::new(BtiCatalog))?;
    registry.register(Arc::new(HomeFeed))?;
    Ok(registry)
}

async fn run_command(command: Commands, ctx: &ModuleCtx, config: &AppConfig) -> Result<ExitCode> {
    let hub = ctx.client_hub();
    match command {
        Commands::User { ids } => fetch_users(hub.get::<dyn UserFetchApi>()?, &ids).await,
        Commands::Cards { type_code, pattern } => list_cards(
            hub.get::<dyn BtiCatalogApi>()?.as_ref(),
            type_code.as_deref(),
            pattern.as_deref(),
        ),
        Commands::Feed { tab } => show_feed(
            hub.get::<dyn HomeFeedApi>()?.as_ref(),
            hub.get::<dyn BtiCatalogApi>()?.as_ref(),
            tab.as_deref(),
        ),
        Commands::Check => check(hub.get::<dyn BtiCatalogApi>()?.as_ref(), config),
    }
}

async fn fetch_users(api: Arc<dyn UserFetchApi>, ids: &[u64]) -> Result<ExitCode> {
    let results = futures::future::join_all(ids.iter().map(|&id| {
        let api = api.clone();
        async move { (id, api.fetch_user(id).await) }
    }))
    .await;

    let mut failed = 0usize;
    for (id, res) in &results {
        if res.is_err() {
            failed += 1;
        }
        println!("{}", format_user_result(*id, res));
    }

    if failed > 0 {
        tracing::warn!(failed, total = ids.len(), "some user requests failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn format_user_result(id: u64, res: &Result<UserResponse, UserFetchError>) -> String {
    match res {
        Ok(resp) => format!(
            "#{} {} <{}> avatar={}",
            resp.user.id,
            resp.user.full_name(),
            resp.user.email,
            resp.user.avatar_url
        ),
        Err(e) => format!("#{id} error[{}]: {e}", e.kind()),
    }
}

fn list_cards(
    api: &dyn BtiCatalogApi,
    type_code: Option<&str>,
    pattern: Option<&str>,
) -> Result<ExitCode> {
    let pattern: Option<PatternStyle> = pattern.map(str::parse::<PatternStyle>).transpose()?;

    let cards = match type_code {
        Some(code) => vec![api.find_card(code)?],
        None => match pattern {
            Some(style) => api.cards_by_pattern(style),
            None => api.list_cards(),
        },
    };

    for card in cards
        .iter()
        .filter(|c| pattern.map_or(true, |p| c.pattern_style == p))
    {
        println!("{}", format_card(card));
    }
    Ok(ExitCode::SUCCESS)
}

fn format_card(card: &Card) -> String {
    format!(
        "{}  {:<8} {} | {} | {} | {} -> {}",
        card.type_code,
        card.pattern_style,
        card.title,
        card.description,
        card.tags.join(", "),
        card.gradient[0].to_rgba_hex(),
        card.gradient[1].to_rgba_hex(),
    )
}

fn show_feed(
    feed: &dyn HomeFeedApi,
    catalog: &dyn BtiCatalogApi,
    tab: Option<&str>,
) -> Result<ExitCode> {
    let tab: FeedTab = match tab {
        Some(t) => t.parse()?,
        None => feed.default_tab(),
    };

    let banner = feed.featured();
    let card = catalog
        .get_card(banner.type_code)
        .with_context(|| format!("featured card {} is not in the catalog", banner.type_code))?;
    println!("Featured: {} {}", banner.type_code, card.title);
    println!("  {}", banner.tagline);
    println!("  image: {}", banner.image);
    println!();

    let tabs: Vec<String> = feed
        .tabs()
        .into_iter()
        .map(|t| if t == tab { format!("[{t}]") } else { t.to_string() })
        .collect();
    println!("{}", tabs.join("  "));
    for item in feed.recommendations(tab) {
        println!("{}", format_food_item(&item));
    }
    Ok(ExitCode::SUCCESS)
}

fn format_food_item(item: &FoodItem) -> String {
    format!(
        "  {:<10} {:>7}  ★{}",
        item.title,
        item.price_label(),
        item.rating_label()
    )
}

fn check(catalog: &dyn BtiCatalogApi, config: &AppConfig) -> Result<ExitCode> {
    // module init already validated the catalog
    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Catalog: {} cards", catalog.list_cards().len());
    println!("{}", config.to_yaml()?);
    Ok(ExitCode::SUCCESS)
}
