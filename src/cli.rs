use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assetcat")]
#[command(about = "Bundles a source tree's web assets into a single delimited dump file", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a tree and concatenate matching files into one artifact
    Dump {
        /// Root directory to scan (default: current directory)
        path: Option<PathBuf>,

        /// Output file (created fresh, truncating any prior content)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extensions to include (comma-separated, leading dot optional)
        #[arg(short, long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,

        /// Glob pattern to exclude (repeatable)
        #[arg(long = "ignore", value_name = "PATTERN")]
        ignore_patterns: Vec<String>,

        /// Follow symbolic links during traversal
        #[arg(long = "follow-links")]
        follow_links: bool,

        /// Honor .gitignore files during traversal
        #[arg(long = "use-gitignore")]
        use_gitignore: bool,

        /// Emit records in raw filesystem order instead of sorted
        #[arg(long = "no-sort")]
        no_sort: bool,

        /// Explicit config file (default: discover .assetcat.toml upward)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Increase verbosity (-v: run summary, -vv: per-file skips)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Suppress everything but fatal errors
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write a default .assetcat.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
