use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Optional word-list columns carried through to the output untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "CoreInventory 1", default)]
    pub core_inventory_1: String,
    #[serde(rename = "CoreInventory 2", default)]
    pub core_inventory_2: String,
    #[serde(rename = "Threshold", default)]
    pub threshold: String,
    #[serde(default)]
    pub notes: String,
}

impl Metadata {
    pub const COLUMNS: [&'static str; 4] =
        ["CoreInventory 1", "CoreInventory 2", "Threshold", "notes"];

    /// Combine several rows' metadata: per column, the distinct non-empty
    /// values sorted and joined with `", "`.
    pub fn merge<'a>(items: impl IntoIterator<Item = &'a Metadata>) -> Metadata {
        let mut sets: [BTreeSet<&str>; 4] = Default::default();
        for item in items {
            let values = [
                &item.core_inventory_1,
                &item.core_inventory_2,
                &item.threshold,
                &item.notes,
            ];
            for (set, value) in sets.iter_mut().zip(values) {
                if !value.is_empty() {
                    set.insert(value.as_str());
                }
            }
        }
        let [core_inventory_1, core_inventory_2, threshold, notes] =
            sets.map(|set| set.into_iter().collect::<Vec<_>>().join(", "));
        Metadata {
            core_inventory_1,
            core_inventory_2,
            threshold,
            notes,
        }
    }
}

/// One headword alternative read from a single CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub word: String,
    pub pos: String,
    pub cefr: String,
    pub metadata: Metadata,
    /// Grouping key: irregular base for verbs, else the lowercased word.
    pub base_form: String,
}

/// Spelling variants attached to a merged entry. Empty lists are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variants {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub american: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub british: Vec<String>,
}

/// Merged output record, one per `(base_form, pos)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub pos: String,
    #[serde(rename = "CEFR")]
    pub cefr: String,
    #[serde(flatten)]
    pub metadata: Metadata,
    pub base_form: String,
    pub word_family: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Variants>,
}

/// Top-level shape of `vocabulary.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub vocabulary: Vec<VocabularyEntry>,
}

/// Value side of `word_lookup.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub base_form: String,
    pub pos: String,
    #[serde(rename = "CEFR")]
    pub cefr: String,
}

impl From<&VocabularyEntry> for LookupEntry {
    fn from(entry: &VocabularyEntry) -> Self {
        Self {
            base_form: entry.base_form.clone(),
            pos: entry.pos.clone(),
            cefr: entry.cefr.clone(),
        }
    }
}
