use std::path::PathBuf;

use clap::{Parser, Subcommand};
use esgboard::NewsRequest;

#[derive(Parser, Debug)]
#[command(
    name = "esgboard",
    version,
    author = env!("CARGO_PKG_AUTHORS"),
    about = "ESG scoring dashboard",
    help_template = "{name} {version}\n{author-with-newline}{about-with-newline}\n{usage-heading} {usage}\n\n{all-args}"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Print the report as JSON instead of tables")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Skip rows with a missing pillar instead of counting it as zero"
    )]
    pub skip_partial: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score, rank, and grade a CSV table.
    Score {
        csv: PathBuf,
        #[arg(long, short, env = "ESGBOARD_OUTPUT", help = "Write the augmented CSV here")]
        output: Option<PathBuf>,
        #[arg(long, help = "Show pillar detail for one company")]
        company: Option<String>,
    },
    /// Score the built-in demo table.
    Sample {
        #[arg(long, short, env = "ESGBOARD_OUTPUT")]
        output: Option<PathBuf>,
        #[arg(long)]
        company: Option<String>,
    },
    /// Build a leaderboard for a comma-separated ticker list.
    Tickers {
        list: String,
        #[arg(long, env = "ESGBOARD_SOURCE", help = "CSV providing scores per ticker")]
        source: PathBuf,
        #[arg(long, help = "Substitute random scores for tickers that cannot be found")]
        placeholder: bool,
        #[arg(long, env = "ESGBOARD_SEED")]
        seed: Option<u64>,
        #[arg(long, short, env = "ESGBOARD_OUTPUT")]
        output: Option<PathBuf>,
    },
    /// Score archived news articles matching a query.
    News {
        archive: PathBuf,
        #[arg(long)]
        query: String,
        #[arg(long, help = "Derive sentiment from headline words instead of tone")]
        heuristic: bool,
        #[arg(
            long,
            env = "ESGBOARD_NEWS_MAX",
            default_value_t = NewsRequest::DEFAULT_MAX_RECORDS
        )]
        max: u32,
    },
}
