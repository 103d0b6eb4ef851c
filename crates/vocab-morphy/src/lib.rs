//! Word-family generation for English headwords.
//!
//! Given a headword and its part of speech, [`Morphy::family`] produces every
//! surface form a learner might meet: irregular verb forms from a built-in
//! table, regular suffixation for verbs, nouns and adjectives, and
//! American/British spellings of each of those forms.
//!
//! # How it works
//! 1. Start from the lowercased word.
//! 2. Verbs: use the irregular table if the word is any known form,
//!    otherwise apply suffix rules. Nouns get a plural, adjectives get
//!    comparative and superlative forms.
//! 3. Expand every form through the spelling table.
//! 4. Lowercase and drop empties.
//!
//! # Example
//! ```
//! use vocab_morphy::Morphy;
//! use vocab_types::Pos;
//!
//! let morph = Morphy::new();
//! let forms = morph.family("go", Pos::Verb);
//! assert!(forms.contains("went"));
//! assert_eq!(morph.lemma_key("Went", Pos::Verb), "go");
//! ```
//!
//! For a runnable demo, see `cargo run -p vocab-morphy --example family -- verb --demo`.

mod irregular;
mod spelling;

use std::collections::{BTreeSet, HashMap};

use vocab_types::{Pos, VerbForms};

pub use irregular::IRREGULAR_VERBS;
pub use spelling::{SPELLING_VARIANTS, SpellingVariants, VARIANT_SUFFIXES};

use spelling::SpellingTable;

const VOWELS: &str = "aeiou";
const SIBILANT_ENDINGS: [&str; 5] = ["s", "x", "z", "ch", "sh"];
/// Final consonants doubled before `-ed`/`-ing` after a short vowel.
const DOUBLING_CONSONANTS: &str = "bdgklmnprt";

/// Lookup tables for irregular verbs and spelling variants, built once.
pub struct Morphy {
    verbs: HashMap<&'static str, &'static VerbForms>,
    /// Every known irregular form (and each base) mapped to its base verb.
    reverse: HashMap<&'static str, &'static str>,
    spelling: SpellingTable,
}

impl Morphy {
    pub fn new() -> Self {
        let mut verbs = HashMap::with_capacity(IRREGULAR_VERBS.len());
        let mut reverse = HashMap::new();
        for forms in IRREGULAR_VERBS {
            verbs.insert(forms.base, forms);
            reverse.insert(forms.base, forms.base);
            for form in forms.inflections() {
                reverse.insert(form, forms.base);
            }
        }
        Self {
            verbs,
            reverse,
            spelling: SpellingTable::new(),
        }
    }

    /// Base verb for any known irregular form, including the base itself.
    pub fn base_verb(&self, form: &str) -> Option<&'static str> {
        self.reverse.get(form.to_lowercase().as_str()).copied()
    }

    /// Table entry for an irregular base verb.
    pub fn verb_forms(&self, base: &str) -> Option<&'static VerbForms> {
        self.verbs.get(base).copied()
    }

    /// Key a headword is grouped under: the irregular base for verbs,
    /// otherwise the lowercased word.
    pub fn lemma_key(&self, word: &str, pos: Pos) -> String {
        let lower = word.to_lowercase();
        if pos == Pos::Verb
            && let Some(base) = self.base_verb(&lower)
        {
            return base.to_string();
        }
        lower
    }

    /// American and British spellings of `word` (see [`SpellingVariants`]).
    pub fn variants(&self, word: &str) -> SpellingVariants {
        self.spelling.variants(word)
    }

    /// Every surface form of `word` for the given part of speech.
    ///
    /// The result always contains the lowercased input and never contains
    /// an empty string.
    pub fn family(&self, word: &str, pos: Pos) -> BTreeSet<String> {
        let lower = word.to_lowercase();
        let mut forms = vec![lower.clone()];

        match pos {
            Pos::Verb => {
                match self.base_verb(&lower).and_then(|base| self.verb_forms(base)) {
                    Some(irregular) => forms.extend(irregular.all_forms().map(str::to_string)),
                    None => forms.extend(regular_verb_forms(&lower)),
                }
            }
            // Noun and adjective rules see the word as written; the final
            // pass lowercases.
            Pos::Noun => forms.push(plural(word)),
            Pos::Adjective => forms.extend(comparatives(word)),
            Pos::Other => {}
        }

        let mut spelled = Vec::new();
        for form in &forms {
            spelled.extend(self.variants(form).iter().map(str::to_string));
        }
        forms.extend(spelled);

        forms
            .into_iter()
            .filter(|form| !form.is_empty())
            .map(|form| form.to_lowercase())
            .collect()
    }
}

impl Default for Morphy {
    fn default() -> Self {
        Self::new()
    }
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn without_last(word: &str) -> &str {
    let mut chars = word.chars();
    chars.next_back();
    chars.as_str()
}

fn ends_in_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    word.chars().count() > 2
        && chars.next() == Some('y')
        && chars.next().is_some_and(|c| !is_vowel(c))
}

fn ends_in_sibilant(word: &str) -> bool {
    SIBILANT_ENDINGS.iter().any(|ending| word.ends_with(ending))
}

/// Short closed syllable such as `jog` or `stop`: consonant, vowel, then a
/// doubling consonant.
fn doubles_final_consonant(word: &str) -> bool {
    let mut chars = word.chars().rev();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(last), Some(vowel), Some(before)) => {
            DOUBLING_CONSONANTS.contains(last) && is_vowel(vowel) && !is_vowel(before)
        }
        _ => false,
    }
}

/// Past, participle, `-ing` and third-person forms for a regular verb.
fn regular_verb_forms(verb: &str) -> Vec<String> {
    if verb.ends_with('e') {
        vec![format!("{verb}d"), format!("{}ing", without_last(verb))]
    } else if ends_in_consonant_y(verb) {
        let stem = without_last(verb);
        vec![
            format!("{stem}ied"),
            format!("{stem}ies"),
            format!("{verb}ing"),
        ]
    } else if ends_in_sibilant(verb) {
        vec![
            format!("{verb}ed"),
            format!("{verb}es"),
            format!("{verb}ing"),
        ]
    } else if doubles_final_consonant(verb) {
        let last = verb.chars().next_back().unwrap_or_default();
        vec![
            format!("{verb}{last}ed"),
            format!("{verb}{last}ing"),
            format!("{verb}s"),
        ]
    } else {
        vec![
            format!("{verb}ed"),
            format!("{verb}ing"),
            format!("{verb}s"),
        ]
    }
}

fn plural(noun: &str) -> String {
    if ends_in_consonant_y(noun) {
        format!("{}ies", without_last(noun))
    } else if ends_in_sibilant(noun) {
        format!("{noun}es")
    } else {
        format!("{noun}s")
    }
}

fn comparatives(adjective: &str) -> [String; 2] {
    if let Some(stem) = adjective.strip_suffix('y') {
        [format!("{stem}ier"), format!("{stem}iest")]
    } else if adjective.ends_with('e') {
        [format!("{adjective}r"), format!("{adjective}st")]
    } else {
        [format!("{adjective}er"), format!("{adjective}est")]
    }
}
