use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{OutputFormat, ProfileDraft};
use crate::catalog::domain::{Platform, SortKey};
use crate::performance::domain::{CpuTier, StorageKind, Usage};

/// Analyze PC performance and compare product prices across shopping platforms
#[derive(Parser, Debug)]
#[command(name = "rigcheck")]
#[command(version)]
#[command(
    about = "Analyze PC performance and compare product prices across shopping platforms",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./rigcheck.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a hardware configuration for an intended usage
    Analyze(AnalyzeArgs),
    /// Compare mock listings for a product across platforms
    Search(SearchArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct AnalyzeArgs {
    /// Installed RAM in GB
    #[arg(long, value_name = "GB")]
    pub ram: Option<u32>,

    /// CPU tier: low, medium or high
    #[arg(long)]
    pub cpu: Option<CpuTier>,

    /// Storage kind: ssd or hdd
    #[arg(long)]
    pub storage: Option<StorageKind>,

    /// Intended usage: browsing, coding, gaming or videoediting
    #[arg(long)]
    pub usage: Option<Usage>,
}

impl AnalyzeArgs {
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft::new(self.ram, self.cpu, self.storage, self.usage)
    }
}

#[derive(ClapArgs, Debug, Default)]
pub struct SearchArgs {
    /// Product to search for; an empty query shows the start prompt
    #[arg(default_value = "")]
    pub query: String,

    /// Restrict results to a platform. Can be specified multiple times:
    /// -p amazon -p myntra
    #[arg(short, long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<Platform>,

    /// Lowest price to show
    #[arg(long, value_name = "PRICE")]
    pub min_price: Option<f64>,

    /// Highest price to show
    #[arg(long, value_name = "PRICE")]
    pub max_price: Option<f64>,

    /// Sort order: none, price-low, price-high or discount
    #[arg(short, long)]
    pub sort: Option<SortKey>,

    /// Seed for reproducible listings
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Parses process arguments, leaving the exit decision to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
