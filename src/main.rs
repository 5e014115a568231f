use anyhow::Result;
use assetcat::cli::{Cli, Commands};
use assetcat::config::{self, ConfigOverrides, DumpConfig};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump {
            path,
            output,
            extensions,
            ignore_patterns,
            follow_links,
            use_gitignore,
            no_sort,
            config: config_path,
            verbosity,
            quiet,
        } => {
            init_logging(verbosity, quiet);

            let file_config = config::load_file_config(config_path.as_deref())?;
            let overrides = ConfigOverrides {
                root: path,
                output,
                extensions,
                ignore_patterns,
                follow_links: follow_links.then_some(true),
                respect_gitignore: use_gitignore.then_some(true),
                sort: no_sort.then_some(false),
            };
            let dump_config = DumpConfig::resolve(file_config, overrides);

            assetcat::dump_tree(&dump_config)?;
            Ok(())
        }
        Commands::Init { force } => assetcat::commands::init::init_config(force),
    }
}

/// Map CLI verbosity to log levels. Diagnostics go to stderr through the
/// logger; stdout and the artifact stay clean.
fn init_logging(verbosity: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
