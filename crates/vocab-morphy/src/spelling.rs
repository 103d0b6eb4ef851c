//! American/British spelling pairs and the variant resolver.

use std::collections::HashMap;

/// American spelling paired with its British counterpart.
pub static SPELLING_VARIANTS: &[(&str, &str)] = &[
    ("color", "colour"),
    ("analyze", "analyse"),
    ("realize", "realise"),
    ("organize", "organise"),
    ("recognize", "recognise"),
    ("apologize", "apologise"),
    ("emphasize", "emphasise"),
    ("criticize", "criticise"),
    ("memorize", "memorise"),
    ("minimize", "minimise"),
    ("maximize", "maximise"),
    ("optimize", "optimise"),
    ("utilize", "utilise"),
    ("center", "centre"),
    ("meter", "metre"),
    ("theater", "theatre"),
    ("fiber", "fibre"),
    ("neighbor", "neighbour"),
    ("favor", "favour"),
    ("labor", "labour"),
    ("honor", "honour"),
    ("humor", "humour"),
    ("behavior", "behaviour"),
    ("flavor", "flavour"),
    ("endeavor", "endeavour"),
    ("defense", "defence"),
    ("offense", "offence"),
    ("license", "licence"),
    ("practice", "practise"),
    ("traveled", "travelled"),
    ("traveling", "travelling"),
    ("traveler", "traveller"),
    ("canceled", "cancelled"),
    ("canceling", "cancelling"),
    ("modeled", "modelled"),
    ("modeling", "modelling"),
    ("fueled", "fuelled"),
    ("fueling", "fuelling"),
    ("labeled", "labelled"),
    ("labeling", "labelling"),
];

/// Suffixes that may be stripped to reach a known spelling pair.
pub const VARIANT_SUFFIXES: [&str; 10] = [
    "s", "ed", "ing", "er", "est", "ly", "ness", "ment", "tion", "sion",
];

/// American and British spellings found for one surface form.
///
/// Lists are in discovery order and may repeat; callers dedup.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpellingVariants {
    pub american: Vec<String>,
    pub british: Vec<String>,
}

impl SpellingVariants {
    pub fn is_empty(&self) -> bool {
        self.american.is_empty() && self.british.is_empty()
    }

    /// All spellings, American first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.american
            .iter()
            .chain(self.british.iter())
            .map(String::as_str)
    }

    fn push(&mut self, american: String, british: String) {
        self.american.push(american);
        self.british.push(british);
    }
}

/// Bidirectional lookup over [`SPELLING_VARIANTS`].
pub(crate) struct SpellingTable {
    to_british: HashMap<&'static str, &'static str>,
    to_american: HashMap<&'static str, &'static str>,
}

impl SpellingTable {
    pub(crate) fn new() -> Self {
        let mut to_british = HashMap::with_capacity(SPELLING_VARIANTS.len());
        let mut to_american = HashMap::with_capacity(SPELLING_VARIANTS.len());
        for &(american, british) in SPELLING_VARIANTS {
            to_british.insert(american, british);
            // First American spelling in table order wins.
            to_american.entry(british).or_insert(american);
        }
        Self {
            to_british,
            to_american,
        }
    }

    pub(crate) fn british_for(&self, american: &str) -> Option<&'static str> {
        self.to_british.get(american).copied()
    }

    pub(crate) fn american_for(&self, british: &str) -> Option<&'static str> {
        self.to_american.get(british).copied()
    }

    /// Resolve a word directly, then through every matching suffix.
    ///
    /// Matching is case-sensitive; the table is lowercase.
    pub(crate) fn variants(&self, word: &str) -> SpellingVariants {
        let mut out = SpellingVariants::default();

        if let Some(british) = self.british_for(word) {
            out.push(word.to_string(), british.to_string());
        } else if let Some(american) = self.american_for(word) {
            out.push(american.to_string(), word.to_string());
        }

        for suffix in VARIANT_SUFFIXES {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if let Some(british) = self.british_for(stem) {
                out.push(word.to_string(), format!("{british}{suffix}"));
            } else if let Some(american) = self.american_for(stem) {
                out.push(format!("{american}{suffix}"), word.to_string());
            }
        }

        out
    }
}
