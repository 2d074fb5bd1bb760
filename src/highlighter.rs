//! Selection-driven highlight resolution
//!
//! # Design
//! - **Stateless per event**: every selection change recomputes the full
//!   highlight set from scratch; there is no incremental diffing to get out
//!   of sync.
//! - **Word vs. fragment**: a selection that exactly covers a word is
//!   matched with word boundaries; anything else is matched as a literal
//!   fragment that may land inside other words.
//! - **Explicit registry**: the set of scope names with live buckets is an
//!   object the caller owns and passes in, so multiple documents share one
//!   reset path without hidden globals.

use std::ops::Range;

use crate::document::{DocumentView, RegionFlags};
use crate::pattern;
use crate::selection::SelRange;
use crate::settings;

/// Style scope applied when the caller does not pick one.
pub const DEFAULT_SCOPE: &str = "comment";

const REGION_KEY_PREFIX: &str = "word_highlights_";

/// Bucket key a scope's highlights are registered under on a document.
pub fn region_key(scope: &str) -> String {
    format!("{REGION_KEY_PREFIX}{scope}")
}

/// Scope names with live highlight buckets, across all documents.
///
/// Append-only between resets. Owned by whichever component manages
/// document lifecycles and handed to [`highlight`] and [`reset`]
/// explicitly.
#[derive(Debug, Default)]
pub struct ScopeRegistry {
    names: Vec<String>,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `name`. Already-tracked names are not duplicated.
    pub fn add(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    /// All tracked scope names, in first-use order.
    pub fn all(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Forget every tracked name.
    pub fn clear(&mut self) {
        self.names.clear();
    }
}

/// Decide which ranges of `doc` should be highlighted for its current
/// selection.
///
/// With more than one selection range, the user has already picked exact
/// ranges and they are returned verbatim. With a single range, the
/// selected word or fragment is searched for across the whole document;
/// `when_selection_is_empty` controls whether a bare caret highlights the
/// word under it.
pub fn resolve_highlight_ranges(
    doc: &impl DocumentView,
    when_selection_is_empty: bool,
) -> Vec<Range<usize>> {
    let selection = doc.selection();
    if selection.len() > 1 {
        return selection.iter().map(SelRange::range).collect();
    }

    let mut ranges = Vec::new();
    for sel in selection {
        if sel.is_empty() {
            if !when_selection_is_empty {
                continue;
            }
            let text = doc.text_for(doc.word_at(sel));
            let trimmed = text.trim();
            let separators = doc.word_separators();
            if !trimmed.is_empty() && trimmed.chars().any(|c| !separators.contains(c)) {
                ranges.extend(doc.find_all(&pattern::word_bounded(trimmed)));
            }
        } else {
            let text = doc.text_for(sel.range());
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            // Compare lengths, not endpoints: a reversed selection never
            // has the same endpoints as its word span but still covers it.
            let pattern = if sel.len() == doc.word_at(sel).len() {
                pattern::word_bounded(trimmed)
            } else {
                pattern::escape_literal(trimmed)
            };
            ranges.extend(doc.find_all(&pattern));
        }
    }
    ranges
}

/// Run one highlight pass over `doc` and register the result under `scope`.
///
/// Exactly one bucket (`word_highlights_<scope>`) is replaced per call;
/// buckets for other scopes are left alone. The scope is recorded in
/// `registry` so [`reset`] can find it later.
pub fn highlight(
    doc: &mut impl DocumentView,
    registry: &mut ScopeRegistry,
    scope: &str,
    when_selection_is_empty: bool,
) {
    let ranges = resolve_highlight_ranges(doc, when_selection_is_empty);

    let mut flags = RegionFlags::PERSISTENT;
    if doc.settings().get_bool(settings::DRAW_OUTLINED, false) {
        flags |= RegionFlags::DRAW_OUTLINED;
    }

    tracing::debug!(scope, matches = ranges.len(), "registering selection highlights");
    registry.add(scope);
    doc.add_regions(&region_key(scope), ranges, scope, flags);
}

/// Erase every tracked bucket on `doc` and forget the tracked scopes.
///
/// Idempotent: resetting with nothing registered is a no-op.
pub fn reset(doc: &mut impl DocumentView, registry: &mut ScopeRegistry) {
    for scope in registry.all() {
        doc.erase_regions(&region_key(scope));
    }
    registry.clear();
}
