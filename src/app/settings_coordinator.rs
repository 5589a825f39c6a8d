//! Generic settings persistence coordination.
//!
//! Type-safe loading and saving of serializable settings through eframe's
//! persistent storage; values are stored as JSON strings. The GUI uses it
//! for the editor buffer, the preferred split axis, and the word-wrap
//! flag.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to the provided default when the key
    /// is absent or fails to deserialize.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning `None` if absent or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotdeck::SplitAxis;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_axis() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "axis", &SplitAxis::Row);
        let loaded: SplitAxis =
            SettingsCoordinator::load_setting_or(Some(&storage), "axis", SplitAxis::Column);
        assert_eq!(loaded, SplitAxis::Row);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let storage = MockStorage::new();
        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), "word_wrap", true);
        assert!(loaded);
        let loaded: Option<String> =
            SettingsCoordinator::try_load_setting(Some(&storage), "editor_buffer");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let mut storage = MockStorage::new();
        storage.set_string("word_wrap", "not json at all {".to_string());
        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), "word_wrap", false);
        assert!(!loaded);
    }
}
