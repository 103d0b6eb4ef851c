use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};
use vocab_morphy::Morphy;
use vocab_types::Pos;

use crate::error::BuildError;
use crate::record::{Metadata, RawEntry};

/// Leading columns every word list must declare, in this order.
pub const REQUIRED_HEADERS: [&str; 3] = ["headword", "pos", "CEFR"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Raw entries sharing one `(base_form, pos)` key, in the order they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub base_form: String,
    pub pos: String,
    pub entries: Vec<RawEntry>,
}

/// Accumulates raw entries by `(base_form, pos)`, keeping first-seen key order.
#[derive(Debug, Default)]
pub struct Grouper {
    slots: HashMap<(String, String), usize>,
    groups: Vec<Group>,
}

impl Grouper {
    pub fn push(&mut self, entry: RawEntry) {
        let key = (entry.base_form.clone(), entry.pos.clone());
        let slot = *self.slots.entry(key).or_insert_with(|| {
            self.groups.push(Group {
                base_form: entry.base_form.clone(),
                pos: entry.pos.clone(),
                entries: Vec::new(),
            });
            self.groups.len() - 1
        });
        self.groups[slot].entries.push(entry);
    }

    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }
}

/// Outcome of reading one word list.
#[derive(Debug)]
pub enum ListFile {
    /// No data rows (the header alone does not count).
    Empty,
    /// The first three headers are not [`REQUIRED_HEADERS`].
    BadHeaders(Vec<String>),
    Rows(Vec<Row>),
}

/// The columns of one CSV row this tool cares about, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub headword: String,
    pub pos: String,
    pub cefr: String,
    pub metadata: Metadata,
}

#[derive(Debug, Default)]
pub struct IngestReport {
    pub groups: Vec<Group>,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub rows_read: usize,
}

/// `*.csv` files directly inside `dir`, sorted by file name.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| BuildError::io(dir, e))? {
        let path = entry.map_err(|e| BuildError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse word-list bytes. A leading UTF-8 byte-order mark is ignored.
pub fn parse_list(bytes: &[u8]) -> Result<ListFile, csv::Error> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Ok(ListFile::Empty);
    }
    if !has_required_headers(&headers) {
        return Ok(ListFile::BadHeaders(
            headers.iter().map(str::to_string).collect(),
        ));
    }

    let columns = Columns::locate(&headers);
    Ok(ListFile::Rows(
        records.iter().map(|record| columns.row(record)).collect(),
    ))
}

pub fn read_list(path: &Path) -> Result<ListFile, BuildError> {
    let bytes = fs::read(path).map_err(|e| BuildError::io(path, e))?;
    parse_list(&bytes).map_err(|e| BuildError::csv(path, e))
}

fn has_required_headers(headers: &StringRecord) -> bool {
    headers.len() >= REQUIRED_HEADERS.len()
        && headers.iter().zip(REQUIRED_HEADERS).all(|(h, r)| h == r)
}

/// Column positions by header name; repeated names resolve to the last one.
struct Columns {
    headword: Option<usize>,
    pos: Option<usize>,
    cefr: Option<usize>,
    metadata: [Option<usize>; 4],
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
        };
        Self {
            headword: find("headword"),
            pos: find("pos"),
            cefr: find("CEFR"),
            metadata: Metadata::COLUMNS.map(find),
        }
    }

    fn row(&self, record: &StringRecord) -> Row {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        let [core_inventory_1, core_inventory_2, threshold, notes] = self.metadata.map(field);
        Row {
            headword: field(self.headword),
            pos: field(self.pos),
            cefr: field(self.cefr),
            metadata: Metadata {
                core_inventory_1,
                core_inventory_2,
                threshold,
                notes,
            },
        }
    }
}

/// Split a row into one raw entry per `/`-separated headword alternative.
///
/// Blank headwords yield nothing, as do blank alternatives such as the
/// trailing side of `"colour/"`.
pub fn raw_entries(row: &Row, morph: &Morphy) -> Vec<RawEntry> {
    let headword = row.headword.trim();
    if headword.is_empty() {
        return Vec::new();
    }

    let pos = row.pos.trim();
    let metadata = Metadata {
        core_inventory_1: row.metadata.core_inventory_1.trim().to_string(),
        core_inventory_2: row.metadata.core_inventory_2.trim().to_string(),
        threshold: row.metadata.threshold.trim().to_string(),
        notes: row.metadata.notes.trim().to_string(),
    };

    headword
        .split('/')
        .map(str::trim)
        .filter(|variant| !variant.is_empty())
        .map(|variant| RawEntry {
            word: variant.to_string(),
            pos: pos.to_string(),
            cefr: row.cefr.trim().to_string(),
            metadata: metadata.clone(),
            base_form: morph.lemma_key(variant, Pos::parse(pos)),
        })
        .collect()
}

/// Read every word list in `dir` and group the resulting raw entries.
///
/// Empty lists and lists with the wrong leading headers are skipped with a
/// warning; unreadable or malformed CSV aborts the run.
pub fn ingest_dir(dir: &Path, morph: &Morphy) -> Result<IngestReport, BuildError> {
    let mut report = IngestReport::default();
    let mut grouper = Grouper::default();

    for path in csv_files(dir)? {
        info!("checking {}", path.display());
        let rows = match read_list(&path)? {
            ListFile::Empty => {
                warn!("skipping {}: empty file", path.display());
                report.files_skipped += 1;
                continue;
            }
            ListFile::BadHeaders(found) => {
                warn!(
                    "skipping {}: headers do not match required format (expected {:?}, found {:?})",
                    path.display(),
                    REQUIRED_HEADERS,
                    found
                );
                report.files_skipped += 1;
                continue;
            }
            ListFile::Rows(rows) => rows,
        };

        info!("processing {} ({} rows)", path.display(), rows.len());
        report.files_processed += 1;
        report.rows_read += rows.len();
        for row in &rows {
            for entry in raw_entries(row, morph) {
                grouper.push(entry);
            }
        }
    }

    report.groups = grouper.into_groups();
    debug!("grouped into {} lemmas", report.groups.len());
    Ok(report)
}
