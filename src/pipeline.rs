use std::path::Path;

use tracing::info;

use crate::concordance::build_concordance;
use crate::error::Result;
use crate::scrape::{self, Source};
use crate::snapshot;
use crate::summary::{self, BookSummaries};
use crate::types::{BibleDict, Concordance};

/// Everything one extraction run produces. Built once, immutable after.
pub struct PipelineOutput {
    pub bible: BibleDict,
    pub summaries: BookSummaries,
    pub concordance: Concordance,
}

/// Run the whole batch in one sequential pass: read markup, extract books,
/// summarize each, fold the summaries into the concordance. Any structural
/// failure aborts the run; there is no partial output.
pub fn run(source: &Source) -> Result<PipelineOutput> {
    let html = scrape::load_markup(source)?;
    let bible = scrape::scrape_bible(&html)?;
    let summaries = summary::summarize_all(&bible);
    let concordance = build_concordance(&summaries);
    info!(
        books = bible.len(),
        words = concordance.len(),
        "pipeline complete"
    );
    Ok(PipelineOutput {
        bible,
        summaries,
        concordance,
    })
}

impl PipelineOutput {
    /// Write the three snapshot files into `dir` under their default names.
    pub fn write_snapshots(&self, dir: &Path) -> Result<()> {
        snapshot::write_bible(&dir.join(snapshot::BIBLE_SNAPSHOT), &self.bible)?;
        snapshot::write_summaries(&dir.join(snapshot::SUMMARY_SNAPSHOT), &self.summaries)?;
        snapshot::write_concordance(&dir.join(snapshot::CONCORDANCE_SNAPSHOT), &self.concordance)?;
        Ok(())
    }

    pub fn verse_total(&self) -> usize {
        self.bible.values().map(|verses| verses.len()).sum()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn fixture_source() -> Source {
        Source::File(PathBuf::from("tests/fixtures/kjv_sample.html"))
    }

    #[test]
    fn fixture_runs_end_to_end() {
        let output = run(&fixture_source()).unwrap();
        assert_eq!(output.bible.len(), 4);
        assert_eq!(output.summaries.len(), 4);
        assert_eq!(output.bible.keys().collect::<Vec<_>>(), output.summaries.keys().collect::<Vec<_>>());
        assert!(output.concordance.contains_key("beginning"));
    }

    #[test]
    fn repeated_runs_write_identical_snapshots() {
        let dir_a = std::env::temp_dir().join(format!("kjv_run_a_{}", std::process::id()));
        let dir_b = std::env::temp_dir().join(format!("kjv_run_b_{}", std::process::id()));
        fs::create_dir_all(&dir_a).unwrap();
        fs::create_dir_all(&dir_b).unwrap();

        run(&fixture_source()).unwrap().write_snapshots(&dir_a).unwrap();
        run(&fixture_source()).unwrap().write_snapshots(&dir_b).unwrap();

        for name in [
            snapshot::BIBLE_SNAPSHOT,
            snapshot::SUMMARY_SNAPSHOT,
            snapshot::CONCORDANCE_SNAPSHOT,
        ] {
            let a = fs::read(dir_a.join(name)).unwrap();
            let b = fs::read(dir_b.join(name)).unwrap();
            assert_eq!(a, b, "snapshot {name} differs between runs");
        }

        let _ = fs::remove_dir_all(&dir_a);
        let _ = fs::remove_dir_all(&dir_b);
    }
}
