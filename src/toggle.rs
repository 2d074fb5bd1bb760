//! Suppress/restore toggle and the selection-change entry point
//!
//! Consumers wire two things to the host editor: every selection-change
//! notification goes to [`on_selection_modified`], and a user-facing
//! toggle command goes to [`HighlightToggle::toggle`]. The toggle is one
//! state object shared by every document the consumer manages, matching a
//! command class whose state is process-wide rather than per document.

use crate::document::DocumentView;
use crate::highlighter::{self, ScopeRegistry, DEFAULT_SCOPE};
use crate::settings::{ENABLED, WHEN_SELECTION_IS_EMPTY};

/// Whether selection-change highlighting currently runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    /// Highlighting runs on every selection change.
    #[default]
    Active,
    /// Highlighting is disabled and existing highlights are cleared.
    Suppressed,
}

/// Two-state toggle with remembered preferences.
///
/// The preferences in force before the first suppression are captured once
/// and written back on reactivation, so toggling twice leaves the
/// document's settings the way the user had them.
#[derive(Debug, Default)]
pub struct HighlightToggle {
    state: ToggleState,
    remembered_enabled: Option<bool>,
    remembered_when_empty: Option<bool>,
}

impl HighlightToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Flip between active and suppressed.
    ///
    /// Active → suppressed clears every tracked bucket and disables
    /// highlighting in the document's settings. Suppressed → active
    /// restores the remembered preferences and runs an immediate
    /// highlight pass that includes the word under a bare caret.
    pub fn toggle(&mut self, doc: &mut impl DocumentView, registry: &mut ScopeRegistry) {
        match self.state {
            ToggleState::Active => {
                let settings = doc.settings();
                if self.remembered_enabled.is_none() {
                    self.remembered_enabled = Some(settings.get_bool(ENABLED, true));
                }
                if self.remembered_when_empty.is_none() {
                    self.remembered_when_empty =
                        Some(settings.get_bool(WHEN_SELECTION_IS_EMPTY, true));
                }

                highlighter::reset(doc, registry);
                doc.settings_mut().set(ENABLED, false);
                doc.settings_mut().set(WHEN_SELECTION_IS_EMPTY, false);
                self.state = ToggleState::Suppressed;
                tracing::debug!("selection highlighting suppressed");
            }
            ToggleState::Suppressed => {
                doc.settings_mut()
                    .set(ENABLED, self.remembered_enabled.unwrap_or(true));
                doc.settings_mut().set(
                    WHEN_SELECTION_IS_EMPTY,
                    self.remembered_when_empty.unwrap_or(true),
                );

                highlighter::highlight(doc, registry, DEFAULT_SCOPE, true);
                self.state = ToggleState::Active;
                tracing::debug!("selection highlighting restored");
            }
        }
    }
}

/// Selection-change entry point.
///
/// Honors the document's enabled flag (default on) and its
/// caret-highlighting preference (default off), then runs one highlight
/// pass under the default scope.
pub fn on_selection_modified(doc: &mut impl DocumentView, registry: &mut ScopeRegistry) {
    let settings = doc.settings();
    if !settings.get_bool(ENABLED, true) {
        return;
    }
    let when_empty = settings.get_bool(WHEN_SELECTION_IS_EMPTY, false);
    highlighter::highlight(doc, registry, DEFAULT_SCOPE, when_empty);
}
