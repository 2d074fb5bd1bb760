//! Selection-driven word and fragment highlighting for editor views
//!
//! On every selection change, this crate decides which ranges of a document
//! should be highlighted: a selection that exactly covers a word highlights
//! every whole-word occurrence of it, any other selection highlights every
//! literal occurrence of the selected fragment, and a bare caret can
//! optionally highlight the word under it. The host editor is abstracted
//! behind [`DocumentView`]; [`TextBuffer`] is an in-memory implementation
//! suitable for tests and plain-text embedders.
//!
//! ```
//! use word_highlights::{highlight, region_key, ScopeRegistry, TextBuffer, DEFAULT_SCOPE};
//!
//! let mut doc = TextBuffer::from_str("cat catalog cat");
//! doc.place_caret(1); // caret inside the first "cat"
//!
//! let mut registry = ScopeRegistry::new();
//! highlight(&mut doc, &mut registry, DEFAULT_SCOPE, true);
//!
//! let bucket = doc.regions(&region_key(DEFAULT_SCOPE)).unwrap();
//! assert_eq!(bucket.ranges, vec![0..3, 12..15]); // not the one in "catalog"
//! ```

pub mod buffer;
pub mod document;
pub mod highlighter;
pub mod pattern;
pub mod selection;
pub mod settings;
pub mod toggle;

pub use buffer::{RegionBucket, TextBuffer};
pub use document::{DocumentView, RegionFlags};
pub use highlighter::{
    highlight, region_key, reset, resolve_highlight_ranges, ScopeRegistry, DEFAULT_SCOPE,
};
pub use selection::SelRange;
pub use settings::{GlobalConfig, SettingsStore};
pub use toggle::{on_selection_modified, HighlightToggle, ToggleState};
