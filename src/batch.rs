//! Parallel outline extraction over many files.
//!
//! Every file is an independent invocation: a failure in one entry never
//! affects the others.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::Result;
use crate::model::OutlineResult;
use crate::outline::OutlineExtractor;
use crate::source::SourceRegistry;

/// Outcome for one file of a batch.
#[derive(Debug)]
pub struct BatchEntry {
    /// Input path
    pub path: PathBuf,

    /// Outline, or the error that stopped this file
    pub result: Result<OutlineResult>,
}

impl BatchEntry {
    /// Check if this entry produced an outline.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summary counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Count the outcomes of a batch.
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let succeeded = entries.iter().filter(|e| e.is_ok()).count();
        Self {
            succeeded,
            failed: entries.len() - succeeded,
        }
    }
}

/// Extract the outline of a single file.
pub fn extract_one(
    path: &Path,
    registry: &SourceRegistry,
    extractor: &OutlineExtractor,
) -> Result<OutlineResult> {
    let text = registry.extract_text(path)?;
    Ok(extractor.extract(&text))
}

/// Extract outlines for many files in parallel.
///
/// Entries are returned in input order.
pub fn extract_batch<P>(
    paths: &[P],
    registry: &SourceRegistry,
    extractor: &OutlineExtractor,
) -> Vec<BatchEntry>
where
    P: AsRef<Path> + Sync,
{
    extract_batch_with(paths, registry, extractor, |_| {})
}

/// Like [`extract_batch`], calling `on_done` as each file finishes.
///
/// `on_done` runs on worker threads, in completion order.
pub fn extract_batch_with<P, F>(
    paths: &[P],
    registry: &SourceRegistry,
    extractor: &OutlineExtractor,
    on_done: F,
) -> Vec<BatchEntry>
where
    P: AsRef<Path> + Sync,
    F: Fn(&BatchEntry) + Sync,
{
    let entries: Vec<BatchEntry> = paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let result = extract_one(path, registry, extractor);
            if let Err(ref e) = result {
                log::warn!("Failed to extract outline from {}: {}", path.display(), e);
            }
            let entry = BatchEntry {
                path: path.to_path_buf(),
                result,
            };
            on_done(&entry);
            entry
        })
        .collect();

    let summary = BatchSummary::from_entries(&entries);
    log::debug!(
        "Batch finished: {} succeeded, {} failed",
        summary.succeeded,
        summary.failed
    );
    entries
}
