use crate::config::DumpConfig;
use crate::errors::DumpError;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Recursive file enumerator for the dump pipeline.
///
/// Walks every regular file under the root (hidden files included, no
/// gitignore semantics unless opted in) and keeps those whose extension is
/// in the allow-set and whose path matches no ignore pattern. Filesystem
/// order is not stable across platforms, so results are sorted by default.
pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
    ignore_patterns: Vec<String>,
    follow_links: bool,
    respect_gitignore: bool,
    sort: bool,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: crate::config::default_extensions(),
            ignore_patterns: vec![],
            follow_links: false,
            respect_gitignore: false,
            sort: true,
        }
    }

    /// Build a walker from a resolved dump configuration.
    pub fn from_config(config: &DumpConfig) -> Self {
        Self {
            root: config.root.clone(),
            extensions: config.extensions.clone(),
            ignore_patterns: config.ignore_patterns.clone(),
            follow_links: config.follow_links,
            respect_gitignore: config.respect_gitignore,
            sort: config.sort,
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.respect_gitignore = yes;
        self
    }

    pub fn sorted(mut self, yes: bool) -> Self {
        self.sort = yes;
        self
    }

    /// Enumerate accepted files under the root.
    ///
    /// A missing or non-directory root is fatal. Errors on individual
    /// entries during the walk (an unreadable subdirectory, a file removed
    /// mid-walk) skip that entry and continue, matching the per-file
    /// failure isolation of the rest of the pipeline.
    pub fn walk(&self) -> Result<Vec<PathBuf>, DumpError> {
        let metadata = fs::metadata(&self.root).map_err(|source| DumpError::RootNotAccessible {
            path: self.root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(DumpError::RootNotDirectory {
                path: self.root.clone(),
            });
        }

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(self.follow_links)
            .git_ignore(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .require_git(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("walk error under {}: {}", self.root.display(), err);
                    continue;
                }
            };
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        if self.sort {
            files.sort();
        }
        Ok(files)
    }

    /// Extension rule: the substring after the last `.` of the file name,
    /// lowercased, must be in the allow-set. Names with no dot (including
    /// bare dotfiles like `.gitignore`) have no extension and are rejected.
    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy().to_lowercase();
        if !self.extensions.iter().any(|allowed| *allowed == ext) {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walker_with(exts: &[&str]) -> FileWalker {
        FileWalker::new(PathBuf::from("."))
            .with_extensions(exts.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn accepts_allowed_extension() {
        let walker = walker_with(&["js", "html", "css"]);
        assert!(walker.should_process(Path::new("app.js")));
        assert!(walker.should_process(Path::new("sub/index.html")));
        assert!(!walker.should_process(Path::new("notes.txt")));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let walker = walker_with(&["js"]);
        assert!(walker.should_process(Path::new("APP.JS")));
        assert!(walker.should_process(Path::new("mixed.Js")));
    }

    #[test]
    fn last_dot_wins_for_multi_dot_names() {
        let walker = walker_with(&["js"]);
        assert!(walker.should_process(Path::new("archive.tar.js")));
        assert!(!walker.should_process(Path::new("bundle.js.map")));
    }

    #[test]
    fn no_extension_is_rejected() {
        let walker = walker_with(&["js", "html", "css"]);
        assert!(!walker.should_process(Path::new("Makefile")));
        assert!(!walker.should_process(Path::new(".gitignore")));
    }

    #[test]
    fn ignore_patterns_drop_matching_paths() {
        let walker =
            walker_with(&["js"]).with_ignore_patterns(vec!["*/vendor/*".to_string()]);
        assert!(!walker.should_process(Path::new("lib/vendor/jquery.js")));
        assert!(walker.should_process(Path::new("lib/app.js")));
    }
}
