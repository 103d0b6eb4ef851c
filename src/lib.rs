pub mod error;
pub mod ingest;
pub mod merge;
pub mod output;
pub mod record;

use std::path::PathBuf;

use tracing::info;
use vocab_morphy::Morphy;

pub use error::BuildError;
pub use ingest::{Group, IngestReport, ingest_dir};
pub use merge::{merge_group, merge_groups};
pub use output::{LOOKUP_FILE, VOCABULARY_FILE, build_lookup, write_outputs};
pub use record::{LookupEntry, Metadata, RawEntry, Variants, Vocabulary, VocabularyEntry};

/// Where to read word lists from and where to write the two JSON files.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub assets_dir: PathBuf,
    pub out_dir: PathBuf,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub vocabulary_entries: usize,
    pub lookup_entries: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
}

/// Ingest, merge and serialize in one pass.
///
/// Nothing is written when the assets directory is missing.
pub fn run(config: &BuildConfig) -> Result<Summary, BuildError> {
    if !config.assets_dir.is_dir() {
        return Err(BuildError::MissingAssets(config.assets_dir.clone()));
    }

    let morph = Morphy::new();
    let report = ingest_dir(&config.assets_dir, &morph)?;
    info!(
        "read {} rows from {} files into {} groups",
        report.rows_read,
        report.files_processed,
        report.groups.len()
    );

    let entries = merge_groups(&report.groups, &morph);
    let vocabulary_entries = entries.len();
    let lookup_entries = write_outputs(&config.out_dir, entries)?;

    Ok(Summary {
        vocabulary_entries,
        lookup_entries,
        files_processed: report.files_processed,
        files_skipped: report.files_skipped,
    })
}
