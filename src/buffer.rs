//! In-memory document implementation
//!
//! [`TextBuffer`] implements [`DocumentView`] over a plain `String`. It is
//! the document double every test drives, and it is a real implementation:
//! an embedder that keeps document text in memory can use it directly and
//! read registered buckets back out of [`TextBuffer::regions`] for
//! rendering.
//!
//! Search is backed by the `regex` crate. Patterns produced by
//! [`crate::pattern`] always compile; if a caller hands `find_all` a broken
//! pattern anyway, the failure is logged and degrades to "no matches".

use std::collections::HashMap;
use std::ops::Range;

use regex::Regex;

use crate::document::{DocumentView, RegionFlags};
use crate::selection::SelRange;
use crate::settings::{self, SettingsStore};

/// A registered highlight bucket, as the host would render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionBucket {
    pub ranges: Vec<Range<usize>>,
    pub scope: String,
    pub flags: RegionFlags,
}

/// Plain-text document with selection, region buckets, and settings.
#[derive(Debug, Default)]
pub struct TextBuffer {
    text: String,
    selection: Vec<SelRange>,
    regions: HashMap<String, RegionBucket>,
    settings: SettingsStore,
}

impl TextBuffer {
    /// Create a buffer over `text` with a caret at offset 0.
    pub fn from_str(text: &str) -> Self {
        Self {
            text: text.to_string(),
            selection: vec![SelRange::caret(0)],
            regions: HashMap::new(),
            settings: SettingsStore::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the selection with a single caret at `pos`.
    pub fn place_caret(&mut self, pos: usize) {
        self.selection = vec![SelRange::caret(pos)];
    }

    /// Replace the selection with a single anchor..active range.
    pub fn select(&mut self, anchor: usize, active: usize) {
        self.selection = vec![SelRange::new(anchor, active)];
    }

    /// Replace the selection with an arbitrary set of ranges.
    pub fn set_selection(&mut self, ranges: Vec<SelRange>) {
        self.selection = ranges;
    }

    /// The bucket registered under `key`, if any.
    pub fn regions(&self, key: &str) -> Option<&RegionBucket> {
        self.regions.get(key)
    }

    /// Keys of all currently registered buckets, in no particular order.
    pub fn region_keys(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Walk `offset` back to the nearest char boundary at or before it.
    fn clamp_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn is_word_char(c: char, separators: &str) -> bool {
        !c.is_whitespace() && !separators.contains(c)
    }
}

impl DocumentView for TextBuffer {
    fn selection(&self) -> &[SelRange] {
        &self.selection
    }

    fn text_for(&self, range: Range<usize>) -> String {
        let start = self.clamp_boundary(range.start);
        let end = self.clamp_boundary(range.end.max(range.start));
        self.text[start..end].to_string()
    }

    fn word_at(&self, range: &SelRange) -> Range<usize> {
        let separators = self.word_separators();
        let mut start = self.clamp_boundary(range.begin());
        let mut end = self.clamp_boundary(range.end());

        while let Some(prev) = self.text[..start].chars().next_back() {
            if !Self::is_word_char(prev, &separators) {
                break;
            }
            start -= prev.len_utf8();
        }
        while let Some(next) = self.text[end..].chars().next() {
            if !Self::is_word_char(next, &separators) {
                break;
            }
            end += next.len_utf8();
        }
        start..end
    }

    fn word_separators(&self) -> String {
        self.settings
            .get_str(settings::WORD_SEPARATORS)
            .unwrap_or(settings::DEFAULT_WORD_SEPARATORS)
            .to_string()
    }

    fn find_all(&self, pattern: &str) -> Vec<Range<usize>> {
        match Regex::new(pattern) {
            Ok(re) => re.find_iter(&self.text).map(|m| m.range()).collect(),
            Err(err) => {
                tracing::warn!("unsearchable pattern: {err}");
                Vec::new()
            }
        }
    }

    fn add_regions(
        &mut self,
        key: &str,
        ranges: Vec<Range<usize>>,
        scope: &str,
        flags: RegionFlags,
    ) {
        self.regions.insert(
            key.to_string(),
            RegionBucket {
                ranges,
                scope: scope.to_string(),
                flags,
            },
        );
    }

    fn erase_regions(&mut self, key: &str) {
        self.regions.remove(key);
    }

    fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }
}
