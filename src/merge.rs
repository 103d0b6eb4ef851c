use std::collections::BTreeSet;

use vocab_morphy::Morphy;
use vocab_types::{Pos, compare_levels};

use crate::ingest::Group;
use crate::record::{Metadata, RawEntry, Variants, VocabularyEntry};

/// Collapse one group into a single entry.
///
/// The easiest CEFR level wins (unrecognized levels lose to any real one),
/// word families and spellings are unioned, and metadata columns are joined.
/// Returns `None` for a group with no entries.
pub fn merge_group(group: &Group, morph: &Morphy) -> Option<VocabularyEntry> {
    let template = group.entries.first()?;
    let pos = Pos::parse(&group.pos);

    let cefr = lowest_level(&group.entries).unwrap_or(&template.cefr);

    let mut family = BTreeSet::new();
    for entry in &group.entries {
        family.insert(entry.word.to_lowercase());
        family.extend(morph.family(&entry.word, pos));
    }

    let mut american = BTreeSet::new();
    let mut british = BTreeSet::new();
    for form in &family {
        let spelled = morph.variants(form);
        american.extend(spelled.american);
        british.extend(spelled.british);
    }
    let variants = Variants {
        american: american.into_iter().collect(),
        british: british.into_iter().collect(),
    };

    Some(VocabularyEntry {
        word: template.word.clone(),
        pos: template.pos.clone(),
        cefr: cefr.clone(),
        metadata: Metadata::merge(group.entries.iter().map(|e| &e.metadata)),
        base_form: group.base_form.clone(),
        word_family: family.into_iter().collect(),
        variants: (!variants.american.is_empty() || !variants.british.is_empty())
            .then_some(variants),
    })
}

/// Merge every group, preserving group order.
pub fn merge_groups(groups: &[Group], morph: &Morphy) -> Vec<VocabularyEntry> {
    groups
        .iter()
        .filter_map(|group| merge_group(group, morph))
        .collect()
}

/// The first entry holding the minimum level.
fn lowest_level(entries: &[RawEntry]) -> Option<&String> {
    entries
        .iter()
        .map(|e| &e.cefr)
        .min_by(|a, b| compare_levels(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(word: &str, pos: &str, cefr: &str, notes: &str) -> RawEntry {
        RawEntry {
            word: word.to_string(),
            pos: pos.to_string(),
            cefr: cefr.to_string(),
            metadata: Metadata {
                notes: notes.to_string(),
                ..Metadata::default()
            },
            base_form: Morphy::new().lemma_key(word, Pos::parse(pos)),
        }
    }

    fn group(entries: Vec<RawEntry>) -> Group {
        Group {
            base_form: entries[0].base_form.clone(),
            pos: entries[0].pos.clone(),
            entries,
        }
    }

    #[test]
    fn picks_lowest_cefr() {
        let morph = Morphy::new();
        let g = group(vec![
            raw("cat", "noun", "B2", ""),
            raw("cat", "noun", "A1", ""),
            raw("cat", "noun", "C1", ""),
        ]);
        assert_eq!(merge_group(&g, &morph).unwrap().cefr, "A1");
    }

    #[test]
    fn unranked_level_loses_to_ranked() {
        let morph = Morphy::new();
        let g = group(vec![raw("cat", "noun", "X9", ""), raw("cat", "noun", "B1", "")]);
        assert_eq!(merge_group(&g, &morph).unwrap().cefr, "B1");

        let g = group(vec![raw("cat", "noun", "foo", ""), raw("cat", "noun", "bar", "")]);
        assert_eq!(merge_group(&g, &morph).unwrap().cefr, "foo");
    }

    #[test]
    fn duplicates_merge_like_a_single_entry() {
        let morph = Morphy::new();
        let single = merge_group(&group(vec![raw("walk", "verb", "A1", "n")]), &morph).unwrap();
        let doubled = merge_group(
            &group(vec![raw("walk", "verb", "A1", "n"), raw("walk", "verb", "A1", "n")]),
            &morph,
        )
        .unwrap();
        assert_eq!(single, doubled);
        assert_eq!(doubled.metadata.notes, "n");
    }

    #[test]
    fn unions_irregular_headword_variants() {
        let morph = Morphy::new();
        let g = group(vec![raw("go", "verb", "A2", ""), raw("goes", "verb", "A1", "")]);
        let entry = merge_group(&g, &morph).unwrap();
        assert_eq!(entry.base_form, "go");
        assert_eq!(entry.word, "go");
        assert_eq!(entry.cefr, "A1");
        for form in ["go", "goes", "went", "gone", "going"] {
            assert!(entry.word_family.iter().any(|w| w == form), "missing {form}");
        }
        assert!(entry.variants.is_none());
    }

    #[test]
    fn collects_spelling_variants_sorted() {
        let morph = Morphy::new();
        let entry = merge_group(&group(vec![raw("colour", "noun", "B1", "")]), &morph).unwrap();
        let variants = entry.variants.expect("variants present");
        assert_eq!(variants.american, vec!["color", "colors"]);
        assert_eq!(variants.british, vec!["colour", "colours"]);
        assert_eq!(
            entry.word_family,
            vec!["color", "colors", "colour", "colours"]
        );
    }

    #[test]
    fn word_family_is_sorted_and_lowercase() {
        let morph = Morphy::new();
        let entry = merge_group(&group(vec![raw("Jog", "verb", "B1", "")]), &morph).unwrap();
        assert_eq!(entry.word, "Jog");
        assert_eq!(entry.word_family, vec!["jog", "jogged", "jogging", "jogs"]);
    }

    #[test]
    fn empty_group_yields_nothing() {
        let morph = Morphy::new();
        let g = Group {
            base_form: "x".into(),
            pos: "noun".into(),
            entries: Vec::new(),
        };
        assert!(merge_group(&g, &morph).is_none());
        assert!(merge_groups(&[g], &morph).is_empty());
    }
}
