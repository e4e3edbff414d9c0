// src/analysis/frequency.rs
//
// Token filter + counter. Ranking is count descending; equal counts keep the
// order in which the token first appeared in the stream, so the table is the
// same on every run for the same input.

use std::collections::HashMap;

use super::segment::Segmenter;
use crate::config::options::AnalysisOptions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub token: String,
    pub count: u32,
}

impl FrequencyEntry {
    pub fn new(token: impl Into<String>, count: u32) -> Self {
        Self { token: token.into(), count }
    }
}

/// Ranked, de-duplicated, capped at `top_n`. Built only by [`frequency`]
/// or [`FrequencyTable::from_ranked`], which both uphold the ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    /// Qualifying occurrences before the top-N cut.
    total_tokens: u64,
}

impl FrequencyTable {
    /// Build from `(token, count)` pairs that may be in any order.
    /// Duplicates are merged (first position wins) and zero counts dropped.
    pub fn from_ranked<I, S>(pairs: I, top_n: usize) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<FrequencyEntry> = Vec::new();
        let mut total = 0u64;
        for (tok, count) in pairs {
            if count == 0 { continue; }
            let tok = tok.into();
            total += count as u64;
            match index.get(&tok) {
                Some(&i) => entries[i].count = entries[i].count.saturating_add(count),
                None => {
                    index.insert(tok.clone(), entries.len());
                    entries.push(FrequencyEntry { token: tok, count });
                }
            }
        }
        rank(&mut entries, top_n);
        Self { entries, total_tokens: total }
    }

    pub fn entries(&self) -> &[FrequencyEntry] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn total_tokens(&self) -> u64 { self.total_tokens }

    /// Highest count; `None` for an empty table.
    pub fn max_count(&self) -> Option<u32> {
        self.entries.first().map(|e| e.count)
    }

    /// Lowest count; `None` for an empty table.
    pub fn min_count(&self) -> Option<u32> {
        self.entries.last().map(|e| e.count)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;
    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

/// Stable sort keeps first-appearance order among equal counts.
fn rank(entries: &mut Vec<FrequencyEntry>, top_n: usize) {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenFilter {
    pub min_len: usize,
    pub strict: bool,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self { min_len: 2, strict: true }
    }
}

impl From<&AnalysisOptions> for TokenFilter {
    fn from(o: &AnalysisOptions) -> Self {
        Self { min_len: o.min_token_len.max(1), strict: o.strict }
    }
}

/// Han ideograph (CJK unified, extensions A-F, compatibility).
pub fn is_han(c: char) -> bool {
    matches!(c as u32,
        0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xF900..=0xFAFF
        | 0x20000..=0x2EBEF
        | 0x2F800..=0x2FA1F
        | 0x30000..=0x3134F)
}

impl TokenFilter {
    /// Whether a raw segment counts as a word.
    pub fn accepts(&self, token: &str) -> bool {
        let token = token.trim();
        if token.chars().count() < self.min_len {
            return false;
        }
        if self.strict {
            token.chars().all(|c| is_han(c) || c.is_ascii_alphanumeric())
        } else {
            !token.is_empty()
        }
    }
}

/// Count qualifying tokens of already-cleaned text.
pub fn frequency(
    text: &str,
    segmenter: &dyn Segmenter,
    filter: TokenFilter,
    top_n: usize,
) -> FrequencyTable {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();
    let mut total = 0u64;

    for raw in segmenter.segment(text) {
        if !filter.accepts(raw) { continue; }
        let tok = raw.trim();
        total += 1;
        match index.get(tok) {
            Some(&i) => counts[i].1 = counts[i].1.saturating_add(1),
            None => {
                index.insert(tok, counts.len());
                counts.push((tok, 1));
            }
        }
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(t, c)| FrequencyEntry::new(t, c))
        .collect();
    rank(&mut entries, top_n);

    logd!("Frequency: {} qualifying tokens, {} kept (top {})", total, entries.len(), top_n);
    FrequencyTable { entries, total_tokens: total }
}
