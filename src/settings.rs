//! Per-document settings with change notification
//!
//! Documents carry a small key-value settings store. The highlighter owns
//! three keys (`word_highlights`, `word_highlights_when_selection_is_empty`,
//! `word_highlights_draw_outlined`) and reads the host-owned
//! `word_separators`. Host-level defaults arrive as a [`GlobalConfig`]
//! deserialized from whatever config blob the embedder maintains; where the
//! config comes from (file, registry, hardcoded) is the embedder's business.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Settings key: is selection-change highlighting enabled for the document.
pub const ENABLED: &str = "word_highlights";
/// Settings key: highlight the word under a bare caret.
pub const WHEN_SELECTION_IS_EMPTY: &str = "word_highlights_when_selection_is_empty";
/// Settings key: draw highlight regions outlined instead of filled.
pub const DRAW_OUTLINED: &str = "word_highlights_draw_outlined";
/// Settings key: the document's word-separator character set.
pub const WORD_SEPARATORS: &str = "word_separators";

/// Separator set used when a document does not configure its own.
pub const DEFAULT_WORD_SEPARATORS: &str = "./\\()\"'-:,.;<>~!@#$%^&*|+=[]{}`~?";

type ChangeCallback = Box<dyn FnMut()>;

/// String-keyed settings store with change-notification callbacks.
///
/// Callbacks are registered under a tag so a component can replace its own
/// subscription without disturbing others. Every `set` that actually changes
/// a value fires all registered callbacks; no-op sets fire nothing.
///
/// Single-threaded by design: documents are expected to be touched only from
/// the host's event-dispatch thread.
#[derive(Default)]
pub struct SettingsStore {
    values: HashMap<String, Value>,
    observers: Vec<(String, ChangeCallback)>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Boolean value for `key`, or `default` when unset or not a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// String value for `key`, when set to a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Set `key` to `value`, notifying observers if the value changed.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        if self.values.get(key) == Some(&value) {
            return;
        }
        self.values.insert(key.to_string(), value);
        for (_, callback) in &mut self.observers {
            callback();
        }
    }

    /// Register a change callback under `tag`, replacing any previous
    /// callback with the same tag.
    pub fn add_on_change(&mut self, tag: &str, callback: impl FnMut() + 'static) {
        self.clear_on_change(tag);
        self.observers.push((tag.to_string(), Box::new(callback)));
    }

    /// Drop the change callback registered under `tag`, if any.
    pub fn clear_on_change(&mut self, tag: &str) {
        self.observers.retain(|(t, _)| t != tag);
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("values", &self.values)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Highlighter-owned settings as they appear in a host-level config blob.
///
/// All fields are optional: only keys the user actually configured are
/// copied onto documents, so per-document overrides survive a re-apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub word_highlights: Option<bool>,
    pub word_highlights_draw_outlined: Option<bool>,
    pub word_highlights_when_selection_is_empty: Option<bool>,
}

impl GlobalConfig {
    /// Parse from a JSON config blob. Unknown keys are ignored so the
    /// highlighter's section can live inside a larger host config.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Copy configured values into a document's settings store and default
    /// the enabled flag to `true` when nothing set it.
    pub fn apply_to(&self, settings: &mut SettingsStore) {
        if let Some(enabled) = self.word_highlights {
            settings.set(ENABLED, enabled);
        }
        if let Some(outlined) = self.word_highlights_draw_outlined {
            settings.set(DRAW_OUTLINED, outlined);
        }
        if let Some(when_empty) = self.word_highlights_when_selection_is_empty {
            settings.set(WHEN_SELECTION_IS_EMPTY, when_empty);
        }
        if settings.get(ENABLED).is_none() {
            settings.set(ENABLED, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn set_fires_observers_only_on_change() {
        let fired = Rc::new(Cell::new(0));
        let mut store = SettingsStore::new();

        let counter = Rc::clone(&fired);
        store.add_on_change("test", move || counter.set(counter.get() + 1));

        store.set(ENABLED, true);
        assert_eq!(fired.get(), 1);

        // Same value again: no notification
        store.set(ENABLED, true);
        assert_eq!(fired.get(), 1);

        store.set(ENABLED, false);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn add_on_change_replaces_same_tag() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut store = SettingsStore::new();

        let counter = Rc::clone(&first);
        store.add_on_change("tag", move || counter.set(counter.get() + 1));
        let counter = Rc::clone(&second);
        store.add_on_change("tag", move || counter.set(counter.get() + 1));

        store.set(DRAW_OUTLINED, true);
        assert_eq!(first.get(), 0, "replaced callback must not fire");
        assert_eq!(second.get(), 1);

        store.clear_on_change("tag");
        store.set(DRAW_OUTLINED, false);
        assert_eq!(second.get(), 1, "cleared callback must not fire");
    }

    #[test]
    fn global_config_applies_only_configured_keys() {
        let config = GlobalConfig::from_json(r#"{ "word_highlights_draw_outlined": true }"#)
            .expect("valid config");
        let mut settings = SettingsStore::new();
        settings.set(WHEN_SELECTION_IS_EMPTY, true);

        config.apply_to(&mut settings);

        assert!(settings.get_bool(DRAW_OUTLINED, false));
        // Untouched by the config: keeps its per-document value
        assert!(settings.get_bool(WHEN_SELECTION_IS_EMPTY, false));
        // Enabled defaults to true when nothing configured it
        assert!(settings.get_bool(ENABLED, false));
    }

    #[test]
    fn global_config_ignores_unknown_keys() {
        let config = GlobalConfig::from_json(
            r#"{ "word_highlights": false, "theme": "monokai", "tab_size": 4 }"#,
        )
        .expect("host config with extra keys");
        assert_eq!(config.word_highlights, Some(false));

        let mut settings = SettingsStore::new();
        config.apply_to(&mut settings);
        assert!(!settings.get_bool(ENABLED, true));
    }
}
