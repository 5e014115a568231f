use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# assetcat configuration

# Directory to scan (default: current directory)
# root = "."

# Output artifact (created fresh each run)
output = "dump.txt"

# Extensions to include; a leading dot is optional
extensions = ["js", "html", "css"]

# Glob patterns to exclude from the walk
ignore = [
    "node_modules/**",
    "dist/**",
]

# Sort paths for reproducible artifacts
sort = true

# follow_links = false
# use_gitignore = false
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
