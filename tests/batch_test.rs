//! Integration tests for batch extraction.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use pdf_outline::batch::{extract_batch_with, BatchSummary};
use pdf_outline::{Error, HeadingLevel, OutlineExtractor, Outliner, SourceRegistry};

fn write_fixtures(dir: &std::path::Path) -> Vec<PathBuf> {
    let files = [
        ("a.txt", "Chapter 1\nbody\n"),
        ("b.md", "Overview\nSECTION TWO\n"),
        ("c.docx", "unsupported"),
        ("d.txt", ""),
    ];

    files
        .iter()
        .map(|(name, content)| {
            let path = dir.join(name);
            std::fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

#[test]
fn test_batch_keeps_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixtures(dir.path());

    let entries = Outliner::new().batch(&paths);

    assert_eq!(entries.len(), paths.len());
    for (entry, path) in entries.iter().zip(&paths) {
        assert_eq!(&entry.path, path);
    }
}

#[test]
fn test_batch_failures_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixtures(dir.path());

    let entries = Outliner::new().batch(&paths);

    let a = entries[0].result.as_ref().unwrap();
    assert_eq!(a.title, "Chapter 1");
    assert_eq!(a.outline[0].level, HeadingLevel::H1);

    let b = entries[1].result.as_ref().unwrap();
    assert_eq!(b.outline.len(), 1);
    assert_eq!(b.outline[0].text, "SECTION TWO");

    assert!(matches!(entries[2].result, Err(Error::UnsupportedSource(_))));

    let d = entries[3].result.as_ref().unwrap();
    assert_eq!(d.title, "Untitled Document");

    assert_eq!(
        BatchSummary::from_entries(&entries),
        BatchSummary {
            succeeded: 3,
            failed: 1
        }
    );
}

#[test]
fn test_batch_progress_callback() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixtures(dir.path());
    let done = AtomicUsize::new(0);

    let entries = extract_batch_with(
        &paths,
        &SourceRegistry::with_defaults(),
        &OutlineExtractor::default(),
        |_| {
            done.fetch_add(1, Ordering::SeqCst);
        },
    );

    assert_eq!(done.load(Ordering::SeqCst), entries.len());
}
