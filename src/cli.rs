use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::dataset::SeriesOrder;

/// Series ordering applied before charting
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Keep dataset order
    AsGiven,
    /// Sort by label
    Label,
    /// Sort by series id
    Id,
    /// Highest latest value first
    LatestCentral,
}

impl From<OrderArg> for SeriesOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::AsGiven => Self::AsGiven,
            OrderArg::Label => Self::Label,
            OrderArg::Id => Self::Id,
            OrderArg::LatestCentral => Self::LatestCentral,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bandchart")]
#[command(author, version, about = "Render small-multiples band charts as SVG")]
#[command(long_about = "Render one line-and-band chart per series of a dataset, laid out as a grid of small multiples.\n\n\
    Exit codes:\n  \
    0 - All series rendered\n  \
    1 - One or more series omitted\n  \
    2 - Configuration or input error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a dataset file to SVG
    Render(RenderArgs),

    /// Print nice tick values for a numeric domain
    Ticks(TicksArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Dataset file (JSON)
    pub dataset: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pointer column in plot pixels; adds a tooltip to every panel
    #[arg(long, allow_negative_numbers = true)]
    pub pointer: Option<f64>,

    /// Panels per row (overrides config)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Series ordering (overrides config)
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,
}

#[derive(Parser, Debug)]
pub struct TicksArgs {
    /// Domain start
    #[arg(long, allow_negative_numbers = true)]
    pub min: f64,

    /// Domain end
    #[arg(long, allow_negative_numbers = true)]
    pub max: f64,

    /// Approximate number of ticks
    #[arg(long, default_value_t = 5)]
    pub count: usize,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
