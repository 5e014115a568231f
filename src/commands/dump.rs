//! The dump pipeline: traverse, filter, read, frame, write.
//!
//! One linear single-threaded pass. The walk completes before the output
//! artifact is created, so a bad root never leaves a truncated artifact
//! behind. At most one file's content is held in memory at a time.

use crate::config::DumpConfig;
use crate::errors::DumpError;
use crate::io::record;
use crate::io::walker::FileWalker;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// What happened to each accepted file during a run.
///
/// Per-file read failures are data, not errors: one unreadable file must
/// never abort the whole dump. Skips are invisible by default but the
/// reasons are kept here (and logged at debug) for callers that care.
#[derive(Debug, Default)]
pub struct DumpReport {
    /// Files whose record was written, in artifact order.
    pub written: Vec<PathBuf>,
    /// Files that matched the filter but could not be read.
    pub skipped: Vec<SkippedFile>,
}

impl DumpReport {
    pub fn records_written(&self) -> usize {
        self.written.len()
    }
}

/// One file that was accepted by the filter but produced no record.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

enum FileOutcome {
    Read(String),
    Skip(String),
}

fn read_candidate(path: &Path) -> FileOutcome {
    // Any failure here (permissions, vanished file, invalid UTF-8) skips
    // exactly this file.
    match crate::io::read_file(path) {
        Ok(content) => FileOutcome::Read(content),
        Err(err) => FileOutcome::Skip(err.to_string()),
    }
}

/// Run the full pipeline described by `config`.
///
/// Fatal errors are exactly two: the root cannot be opened for traversal,
/// and the output artifact cannot be created. Everything else is recorded
/// in the returned [`DumpReport`].
pub fn dump_tree(config: &DumpConfig) -> Result<DumpReport> {
    let files = FileWalker::from_config(config).walk()?;
    log::info!(
        "found {} candidate file(s) under {}",
        files.len(),
        config.root.display()
    );

    let out_file = File::create(&config.output).map_err(|source| DumpError::OutputCreate {
        path: config.output.clone(),
        source,
    })?;
    let mut out = BufWriter::new(out_file);

    let mut report = DumpReport::default();
    for path in files {
        match read_candidate(&path) {
            FileOutcome::Read(content) => {
                record::write_record(&mut out, &path, &content)
                    .with_context(|| format!("writing record for {}", path.display()))?;
                report.written.push(path);
            }
            FileOutcome::Skip(reason) => {
                log::debug!("skipping {}: {}", path.display(), reason);
                report.skipped.push(SkippedFile { path, reason });
            }
        }
    }
    out.flush()
        .with_context(|| format!("flushing {}", config.output.display()))?;

    log::info!(
        "wrote {} record(s) to {} ({} skipped)",
        report.records_written(),
        config.output.display(),
        report.skipped.len()
    );
    Ok(report)
}
