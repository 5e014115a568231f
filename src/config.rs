use serde::Deserialize;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Default output artifact path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "dump.txt";

/// Default extension allow-set: the conventional web-asset extensions.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["js", "html", "css"];

/// Name of the optional configuration file searched for in the directory
/// hierarchy.
pub const CONFIG_FILE_NAME: &str = ".assetcat.toml";

/// Fully resolved configuration for one dump run.
///
/// Built once from defaults, an optional `.assetcat.toml`, and CLI flags,
/// then passed into the pipeline entry point. There is no ambient or global
/// configuration state.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Directory the traversal starts from.
    pub root: PathBuf,
    /// Path of the output artifact; created fresh (truncated) each run.
    pub output: PathBuf,
    /// Accepted extensions, normalized to lowercase without a leading dot.
    pub extensions: Vec<String>,
    /// Glob patterns; a candidate whose path matches any of them is dropped.
    pub ignore_patterns: Vec<String>,
    /// Follow symbolic links while walking. Cyclic link graphs are the
    /// caller's problem when this is enabled.
    pub follow_links: bool,
    /// Honor .gitignore / .git/info/exclude files during the walk.
    pub respect_gitignore: bool,
    /// Sort accepted paths lexicographically so repeated runs over an
    /// unchanged tree produce byte-identical artifacts.
    pub sort: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: default_extensions(),
            ignore_patterns: vec![],
            follow_links: false,
            respect_gitignore: false,
            sort: true,
        }
    }
}

impl DumpConfig {
    /// Merge an optional file config under this one. Fields already set by
    /// the caller (CLI) win; file values fill the rest; defaults remain for
    /// anything neither source names.
    pub fn resolve(file: FileConfig, overrides: ConfigOverrides) -> Self {
        let defaults = Self::default();
        let extensions = overrides
            .extensions
            .or(file.extensions)
            .map(|exts| normalize_extensions(&exts))
            .unwrap_or(defaults.extensions);

        let mut ignore_patterns = file.ignore;
        ignore_patterns.extend(overrides.ignore_patterns);

        Self {
            root: overrides.root.or(file.root).unwrap_or(defaults.root),
            output: overrides.output.or(file.output).unwrap_or(defaults.output),
            extensions,
            ignore_patterns,
            follow_links: overrides
                .follow_links
                .or(file.follow_links)
                .unwrap_or(defaults.follow_links),
            respect_gitignore: overrides
                .respect_gitignore
                .or(file.use_gitignore)
                .unwrap_or(defaults.respect_gitignore),
            sort: overrides.sort.or(file.sort).unwrap_or(defaults.sort),
        }
    }
}

/// Values a caller (typically the CLI) wants to force over file config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub ignore_patterns: Vec<String>,
    pub follow_links: Option<bool>,
    pub respect_gitignore: Option<bool>,
    pub sort: Option<bool>,
}

/// Shape of `.assetcat.toml`. Every field is optional; missing fields fall
/// through to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub ignore: Vec<String>,
    pub follow_links: Option<bool>,
    pub use_gitignore: Option<bool>,
    pub sort: Option<bool>,
}

pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

/// Normalize one extension: strip whitespace and a leading dot, lowercase.
/// Accepts both `js` and `.js` spellings in config and flags.
pub fn normalize_extension(raw: &str) -> String {
    raw.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn normalize_extensions(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|e| normalize_extension(e))
        .filter(|e| !e.is_empty())
        .collect()
}

/// Pure function to read config file contents
fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

fn parse_file_config(contents: &str) -> Result<FileConfig, String> {
    toml::from_str::<FileConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Try loading config from a specific path, warning (not failing) on
/// malformed content so a broken config file never aborts a dump.
fn try_load_config_from_path(config_path: &Path) -> Option<FileConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_file_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load config from an explicit path, or discover `.assetcat.toml` by
/// walking up from the current directory. An explicit path that cannot be
/// read or parsed is an error; a discovered file is best-effort.
pub fn load_file_config(explicit: Option<&Path>) -> anyhow::Result<FileConfig> {
    if let Some(path) = explicit {
        let contents = read_config_file(path)
            .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", path.display(), e))?;
        return parse_file_config(&contents).map_err(|e| anyhow::anyhow!(e));
    }

    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return Ok(FileConfig::default());
        }
    };

    Ok(directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default())
}
