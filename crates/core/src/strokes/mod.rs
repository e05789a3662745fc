//! Character stroke counts for name readings.
//!
//! Lookups go through a process-wide table built once on first use. Characters
//! missing from the table get a deterministic estimate from their Unicode
//! block, so counting never fails.

mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

static STROKE_TABLE: LazyLock<StrokeTable> = LazyLock::new(StrokeTable::builtin);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Kanji,
    Hiragana,
    Katakana,
    Other,
}

pub fn classify(c: char) -> CharClass {
    match c as u32 {
        0x4E00..=0x9FFF => CharClass::Kanji,
        0x3040..=0x309F => CharClass::Hiragana,
        0x30A0..=0x30FF => CharClass::Katakana,
        _ => CharClass::Other,
    }
}

/// Fallback for characters without a table entry.
///
/// Kanji are bucketed into four code-point bands (4/8/12/16 strokes); kana
/// count as 3 and anything else as 1.
pub fn estimate_strokes(c: char) -> u32 {
    match classify(c) {
        CharClass::Kanji => match c as u32 {
            cp if cp < 0x5E00 => 4,
            cp if cp < 0x6E00 => 8,
            cp if cp < 0x7E00 => 12,
            _ => 16,
        },
        CharClass::Hiragana | CharClass::Katakana => 3,
        CharClass::Other => 1,
    }
}

#[derive(Debug, Clone)]
pub struct StrokeTable {
    counts: HashMap<char, u32>,
}

impl StrokeTable {
    pub fn global() -> &'static StrokeTable {
        &STROKE_TABLE
    }

    pub fn builtin() -> Self {
        Self::from_entries(table::KNOWN_STROKES.iter().copied())
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (char, u32)>) -> Self {
        let counts: HashMap<char, u32> = entries.into_iter().collect();
        tracing::debug!(entries = counts.len(), "stroke table initialised");
        Self { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, c: char) -> Option<u32> {
        self.counts.get(&c).copied()
    }

    pub fn lookup(&self, c: char) -> u32 {
        self.get(c).unwrap_or_else(|| estimate_strokes(c))
    }

    pub fn count(&self, s: &str) -> u32 {
        s.chars().map(|c| self.lookup(c)).sum()
    }
}
