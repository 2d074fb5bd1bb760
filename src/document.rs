//! Host editor capability surface
//!
//! The highlighter never talks to a concrete editor. It consumes the
//! [`DocumentView`] trait, which bundles exactly the capabilities it needs:
//! selection enumeration, substring extraction, word-span lookup, pattern
//! search, named region buckets, and the per-document settings store.
//! [`crate::buffer::TextBuffer`] is the in-memory implementation used by
//! tests and by embedders that keep plain text in memory.

use std::ops::Range;

use bitflags::bitflags;

use crate::selection::SelRange;
use crate::settings::SettingsStore;

bitflags! {
    /// Draw-mode flags attached to a registered region bucket.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RegionFlags: u8 {
        /// Render the regions outlined instead of filled.
        const DRAW_OUTLINED = 1 << 0;
        /// Ask the host to keep the bucket across sessions.
        const PERSISTENT = 1 << 1;
    }
}

/// The document capabilities the highlighter depends on.
pub trait DocumentView {
    /// Current selection as an ordered sequence of disjoint ranges.
    fn selection(&self) -> &[SelRange];

    /// Extract the text covered by `range`.
    ///
    /// Out-of-bounds ranges are clamped; never fails.
    fn text_for(&self, range: Range<usize>) -> String;

    /// Span of the word touching or containing `range`, per the configured
    /// word separators. A caret touching no word character yields an empty
    /// span at the caret.
    fn word_at(&self, range: &SelRange) -> Range<usize>;

    /// The configured word-separator character set.
    fn word_separators(&self) -> String;

    /// All non-overlapping matches of `pattern` in the full document.
    ///
    /// The pattern language must support single-character bracket classes
    /// and `\b` word-boundary anchors.
    fn find_all(&self, pattern: &str) -> Vec<Range<usize>>;

    /// Register (or replace) the named region bucket `key`.
    fn add_regions(
        &mut self,
        key: &str,
        ranges: Vec<Range<usize>>,
        scope: &str,
        flags: RegionFlags,
    );

    /// Remove the named region bucket `key`, if present.
    fn erase_regions(&mut self, key: &str);

    /// Per-document settings store.
    fn settings(&self) -> &SettingsStore;

    /// Per-document settings store, mutable.
    fn settings_mut(&mut self) -> &mut SettingsStore;
}
