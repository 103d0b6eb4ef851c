//! Shared types for CEFR-ranked vocabulary data.
//!
//! The CSV word lists this workspace consumes carry free-form part-of-speech
//! and CEFR strings. These types give those strings a small, closed model
//! without losing the raw text: callers keep the original string for output
//! and use [`Pos`] / [`CefrLevel`] only to decide behavior.
//!
//! ```rust
//! use std::cmp::Ordering;
//! use vocab_types::{CefrLevel, Pos, compare_levels};
//!
//! assert_eq!(Pos::parse("verb"), Pos::Verb);
//! assert_eq!(CefrLevel::parse("B1"), Some(CefrLevel::B1));
//! assert_eq!(compare_levels("A2", "unknown"), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Part of speech as written in the word lists (`noun`, `verb`, `adjective`).
///
/// Every other label (`adverb`, `determiner`, `phrase`, ...) is [`Pos::Other`];
/// those words get no inflections.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Other,
}

impl Pos {
    /// Classify a raw POS label. Matching is exact, as in the source lists.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "noun" => Pos::Noun,
            "verb" => Pos::Verb,
            "adjective" => Pos::Adjective,
            _ => Pos::Other,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adjective => "adjective",
            Pos::Other => "other",
        })
    }
}

/// Common European Framework of Reference level, easiest first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

/// Rank given to any level string that is not one of `A1`..`C2`.
pub const UNRANKED: u8 = 6;

impl CefrLevel {
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::C2,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "A1" => Some(CefrLevel::A1),
            "A2" => Some(CefrLevel::A2),
            "B1" => Some(CefrLevel::B1),
            "B2" => Some(CefrLevel::B2),
            "C1" => Some(CefrLevel::C1),
            "C2" => Some(CefrLevel::C2),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }

    /// Zero-based position in the A1..C2 scale.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank of a raw level string; unrecognized strings sort after `C2`.
pub fn level_rank(raw: &str) -> u8 {
    CefrLevel::parse(raw).map_or(UNRANKED, CefrLevel::rank)
}

/// Order two raw level strings. Lower means easier (higher priority).
pub fn compare_levels(a: &str, b: &str) -> Ordering {
    level_rank(a).cmp(&level_rank(b))
}

/// Fixed inflection record for one irregular verb.
///
/// Slot order matches the tables it is built from; `other_forms` holds
/// leftovers such as `am`/`are` for `be`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerbForms {
    pub base: &'static str,
    pub past: &'static [&'static str],
    pub past_participle: &'static [&'static str],
    pub present_participle: &'static [&'static str],
    pub third_person: &'static [&'static str],
    pub other_forms: &'static [&'static str],
}

impl VerbForms {
    /// Every inflected form across all slots, base excluded.
    pub fn inflections(&self) -> impl Iterator<Item = &'static str> + '_ {
        let slots = [
            self.past,
            self.past_participle,
            self.present_participle,
            self.third_person,
            self.other_forms,
        ];
        slots.into_iter().flatten().copied()
    }

    /// The base followed by every inflected form.
    pub fn all_forms(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.base).chain(self.inflections())
    }
}
