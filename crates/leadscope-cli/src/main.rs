mod export;
mod report;
mod searches;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use leadscope_core::{AppConfig, BusinessLead, SearchContext};
use leadscope_quality::{FreemiumPolicy, LeadFilter, ScoringPolicy, SortKey, Tier, TierThresholds};
use tracing_subscriber::EnvFilter;

use crate::searches::SearchesCommands;

#[derive(Debug, Parser)]
#[command(name = "leadscope-cli")]
#[command(about = "Score, tier, preview and export business leads")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Group leads into quality tiers for a search location
    Score {
        #[command(flatten)]
        input: LeadsInput,
        #[command(flatten)]
        filter: FilterArgs,
        /// Only show one tier (excellent, okay, poor)
        #[arg(long)]
        tier: Option<Tier>,
        /// Print the grouped result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summary counts and average score for a result set
    Stats {
        #[command(flatten)]
        input: LeadsInput,
        #[arg(long)]
        json: bool,
    },
    /// Show the free preview slice and the unlock price
    Preview {
        #[command(flatten)]
        input: LeadsInput,
    },
    /// List leads with their selection keys
    List {
        #[command(flatten)]
        input: LeadsInput,
        #[command(flatten)]
        filter: FilterArgs,
        /// Sort order (name, rating, completeness)
        #[arg(long, default_value = "name")]
        sort: SortKey,
    },
    /// Export selected (or all displayed) leads to a JSON file
    Export {
        #[command(flatten)]
        input: LeadsInput,
        #[command(flatten)]
        filter: FilterArgs,
        /// Restrict the displayed rows to one tier
        #[arg(long)]
        tier: Option<Tier>,
        /// Selection key (or unique key prefix) of a lead to export; repeatable
        #[arg(long = "select")]
        select: Vec<String>,
        /// Output file name inside the export directory
        #[arg(long)]
        filename: Option<String>,
    },
    /// Manage saved searches
    Searches {
        #[command(subcommand)]
        command: SearchesCommands,
    },
}

#[derive(Debug, Clone, Args)]
pub(crate) struct LeadsInput {
    /// Path to a JSON array of leads
    #[arg(long)]
    pub leads: PathBuf,
    /// Location the leads were searched for
    #[arg(long, default_value = "")]
    pub location: String,
    /// Business type the leads were searched for
    #[arg(long)]
    pub business_type: Option<String>,
}

impl LeadsInput {
    pub(crate) fn search(&self) -> SearchContext {
        SearchContext {
            location: self.location.clone(),
            business_type: self.business_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArgs {
    /// Text matched against name, category and address
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long)]
    pub with_email: bool,
    #[arg(long)]
    pub with_phone: bool,
    #[arg(long)]
    pub with_website: bool,
    #[arg(long)]
    pub min_rating: Option<f64>,
    /// Source directory name
    #[arg(long)]
    pub source: Option<String>,
}

impl From<&FilterArgs> for LeadFilter {
    fn from(args: &FilterArgs) -> Self {
        LeadFilter {
            query: args.query.clone(),
            require_email: args.with_email,
            require_phone: args.with_phone,
            require_website: args.with_website,
            min_rating: args.min_rating,
            source: args.source.clone(),
        }
    }
}

/// Read and validate a leads file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid lead array.
pub(crate) fn load_leads(path: &Path) -> anyhow::Result<Vec<BusinessLead>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read leads file {}: {e}", path.display()))?;
    let leads = leadscope_core::parse_leads(&content)?;
    tracing::debug!(path = %path.display(), count = leads.len(), "loaded leads");
    Ok(leads)
}

/// Scoring policy with the configured tier thresholds.
///
/// # Errors
///
/// Returns an error if the configured thresholds are inconsistent.
pub(crate) fn scoring_policy(config: &AppConfig) -> anyhow::Result<ScoringPolicy> {
    let thresholds = TierThresholds::new(config.tier_excellent_min, config.tier_okay_min)?;
    Ok(ScoringPolicy {
        thresholds,
        ..ScoringPolicy::default()
    })
}

pub(crate) fn freemium_policy(config: &AppConfig) -> FreemiumPolicy {
    FreemiumPolicy {
        min_preview: config.preview_min,
        max_preview: config.preview_max,
        price_units_per_block: config.price_units_per_block,
        ..FreemiumPolicy::default()
    }
}

fn main() -> anyhow::Result<()> {
    let config = leadscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(env = %config.env, "leadscope-cli starting");

    match cli.command {
        Some(Commands::Score {
            input,
            filter,
            tier,
            json,
        }) => report::run_score(&config, &input, &filter, tier, json)?,
        Some(Commands::Stats { input, json }) => report::run_stats(&config, &input, json)?,
        Some(Commands::Preview { input }) => report::run_preview(&config, &input)?,
        Some(Commands::List {
            input,
            filter,
            sort,
        }) => report::run_list(&input, &filter, sort)?,
        Some(Commands::Export {
            input,
            filter,
            tier,
            select,
            filename,
        }) => export::run_export(&config, &input, &filter, tier, &select, filename.as_deref())?,
        Some(Commands::Searches { command }) => searches::run_searches(&config, command)?,
        None => println!("no command given; run `leadscope-cli --help`"),
    }

    Ok(())
}
