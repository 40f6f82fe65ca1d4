//! Multi-word phrase matching
//!
//! Builds, for one scan range, the index of where configured phrases
//! (`New York`, `New Jersey`) occur as whole words. The index maps the
//! absolute start of each match to its length in characters.

use std::collections::HashMap;

use super::rules::is_word_char;

/// Phrase matches for one range, keyed by absolute start offset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseIndex {
    matches: HashMap<usize, usize>,
}

impl PhraseIndex {
    /// Length of the phrase starting at `pos`, if any
    pub fn match_at(&self, pos: usize) -> Option<usize> {
        self.matches.get(&pos).copied()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Find every whole-word occurrence of `phrases` in `text`.
///
/// `range_start` is the absolute offset of `text` in the buffer. When two
/// matches overlap, the one starting first wins; at the same start the
/// longer phrase wins. Accepted matches never overlap.
pub fn index(phrases: &[String], text: &str, range_start: usize) -> PhraseIndex {
    if phrases.is_empty() {
        return PhraseIndex::default();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut candidates: Vec<(usize, usize)> = Vec::new();

    for phrase in phrases {
        let needle: Vec<char> = phrase.chars().collect();
        if needle.is_empty() || needle.len() > chars.len() {
            continue;
        }
        for at in 0..=chars.len() - needle.len() {
            if chars[at..at + needle.len()] == needle[..]
                && is_boundary(&chars, at)
                && is_boundary(&chars, at + needle.len())
            {
                candidates.push((at, needle.len()));
            }
        }
    }

    candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut matches = HashMap::new();
    let mut taken_until = 0;
    for (at, len) in candidates {
        if at < taken_until {
            continue;
        }
        matches.insert(range_start + at, len);
        taken_until = at + len;
    }

    PhraseIndex { matches }
}

/// Word boundary at `pos`: a word character on exactly one side.
/// Positions outside the text count as non-word.
fn is_boundary(chars: &[char], pos: usize) -> bool {
    let before = pos > 0 && is_word_char(chars[pos - 1]);
    let after = pos < chars.len() && is_word_char(chars[pos]);
    before != after
}
