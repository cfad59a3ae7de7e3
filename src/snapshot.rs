use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::summary::BookSummaries;
use crate::types::{BibleDict, Concordance};

// Snapshot file names, shared by the writer and the lookup loader.
pub const BIBLE_SNAPSHOT: &str = "kjv_bible.json";
pub const SUMMARY_SNAPSHOT: &str = "book_summary.json";
pub const CONCORDANCE_SNAPSHOT: &str = "concordance.json";

pub fn write_bible(path: &Path, bible: &BibleDict) -> Result<()> {
    write_json(path, bible)
}

pub fn read_bible(path: &Path) -> Result<BibleDict> {
    read_json(path)
}

pub fn write_summaries(path: &Path, summaries: &BookSummaries) -> Result<()> {
    write_json(path, summaries)
}

pub fn read_summaries(path: &Path) -> Result<BookSummaries> {
    read_json(path)
}

pub fn write_concordance(path: &Path, concordance: &Concordance) -> Result<()> {
    write_json(path, concordance)
}

pub fn read_concordance(path: &Path) -> Result<Concordance> {
    read_json(path)
}

// JSON objects keep insertion order here because every mapping in the data
// model is an IndexMap; downstream consumers rely on ordered iteration.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).map_err(|e| Error::SnapshotIo {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| Error::SnapshotIo {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "snapshot written");
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path).map_err(|e| Error::SnapshotIo {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&json).map_err(|e| Error::CorruptSnapshot {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

// ── Tests ──
