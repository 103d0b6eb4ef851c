//! JSON artifacts: the merged vocabulary and the flat word lookup.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;
use vocab_types::compare_levels;

use crate::error::BuildError;
use crate::record::{LookupEntry, Vocabulary, VocabularyEntry};

pub const VOCABULARY_FILE: &str = "vocabulary.json";
pub const LOOKUP_FILE: &str = "word_lookup.json";

/// Map every word-family form to the entry it belongs to.
///
/// When a form belongs to several entries, the easiest CEFR level wins; on a
/// tie the entry listed first keeps it.
pub fn build_lookup(entries: &[VocabularyEntry]) -> BTreeMap<String, LookupEntry> {
    let mut lookup = BTreeMap::new();
    for entry in entries {
        for form in &entry.word_family {
            match lookup.entry(form.to_lowercase()) {
                Entry::Vacant(slot) => {
                    slot.insert(LookupEntry::from(entry));
                }
                Entry::Occupied(mut slot) => {
                    if compare_levels(&entry.cefr, &slot.get().cefr).is_lt() {
                        debug!(
                            "lookup {}: {} ({}) replaces {} ({})",
                            slot.key(),
                            entry.base_form,
                            entry.cefr,
                            slot.get().base_form,
                            slot.get().cefr
                        );
                        slot.insert(LookupEntry::from(entry));
                    }
                }
            }
        }
    }
    lookup
}

/// Pretty-print `value` as UTF-8 JSON with two-space indentation.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), BuildError> {
    let file = File::create(path).map_err(|e| BuildError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| BuildError::io(path, e))?;
    Ok(())
}

/// Write both artifacts into `out_dir`; returns the number of lookup keys.
pub fn write_outputs(out_dir: &Path, entries: Vec<VocabularyEntry>) -> Result<usize, BuildError> {
    let lookup = build_lookup(&entries);
    write_json(
        &out_dir.join(VOCABULARY_FILE),
        &Vocabulary {
            vocabulary: entries,
        },
    )?;
    write_json(&out_dir.join(LOOKUP_FILE), &lookup)?;
    Ok(lookup.len())
}
