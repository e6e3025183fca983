use std::collections::BTreeMap;

use crate::error::PadError;
use crate::models::ClipRef;

/// File name suggested when saving mappings
pub const MAPPINGS_FILE_NAME: &str = "tileMappings.json";

/// Pad → clip table.
///
/// Keys are kept sorted so the saved JSON lists pads in ascending numeric
/// order, which is also how `JSON.stringify` orders integer keys. Loading a
/// saved file and saving it again is therefore byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingStore {
    mappings: BTreeMap<u8, ClipRef>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pad: u8) -> Option<&ClipRef> {
        self.mappings.get(&pad)
    }

    /// Bind `clip` to `pad`, returning the clip it replaced
    pub fn set(&mut self, pad: u8, clip: ClipRef) -> Option<ClipRef> {
        self.mappings.insert(pad, clip)
    }

    pub fn remove(&mut self, pad: u8) -> Option<ClipRef> {
        self.mappings.remove(&pad)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Mappings in ascending pad order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &ClipRef)> {
        self.mappings.iter().map(|(&pad, clip)| (pad, clip))
    }

    /// Replace the whole table with the JSON object in `json`.
    ///
    /// Keys must be integers 0..=255 written as strings and values must be
    /// strings. On error the current table is left untouched.
    pub fn load(&mut self, json: &str) -> Result<(), PadError> {
        self.load_slice(json.as_bytes())
    }

    /// Like [`load`](Self::load) for raw file bytes.
    pub fn load_slice(&mut self, json: &[u8]) -> Result<(), PadError> {
        let mappings: BTreeMap<u8, ClipRef> = serde_json::from_slice(json)?;
        tracing::debug!(count = mappings.len(), "Loaded pad mappings");
        self.mappings = mappings;
        Ok(())
    }

    /// Serialize as a pretty-printed JSON object with 2-space indent.
    pub fn save(&self) -> String {
        // BTreeMap<u8, String> always serializes
        serde_json::to_string_pretty(&self.mappings).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clip(s: &str) -> ClipRef {
        ClipRef::new(s)
    }

    #[test]
    fn test_set_get_remove() {
        let mut store = MappingStore::new();
        assert!(store.is_empty());

        assert_eq!(store.set(36, clip("a")), None);
        assert_eq!(store.set(36, clip("b")), Some(clip("a")));
        assert_eq!(store.get(36), Some(&clip("b")));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove(36), Some(clip("b")));
        assert_eq!(store.get(36), None);
    }

    #[test]
    fn test_save_format() {
        let mut store = MappingStore::new();
        store.set(100, clip("data:,c"));
        store.set(36, clip("data:,a"));
        store.set(9, clip("data:,b"));

        assert_eq!(
            store.save(),
            "{\n  \"9\": \"data:,b\",\n  \"36\": \"data:,a\",\n  \"100\": \"data:,c\"\n}"
        );
    }

    #[test]
    fn test_save_empty() {
        assert_eq!(MappingStore::new().save(), "{}");
    }

    #[test]
    fn test_load_save_is_byte_identical() {
        let saved = "{\n  \"36\": \"data:audio/mpeg;base64,SUQz\",\n  \"99\": \"data:audio/wav;base64,UklGRg==\"\n}";
        let mut store = MappingStore::new();
        store.load(saved).unwrap();
        assert_eq!(store.save(), saved);
    }

    #[test]
    fn test_load_replaces_wholesale() {
        let mut store = MappingStore::new();
        store.set(40, clip("old"));
        store.load(r#"{"41": "new"}"#).unwrap();
        assert_eq!(store.get(40), None);
        assert_eq!(store.get(41), Some(&clip("new")));
    }

    #[test]
    fn test_load_failure_leaves_store_untouched() {
        let mut store = MappingStore::new();
        store.set(40, clip("keep"));
        let before = store.clone();

        for bad in [
            "not json",
            r#"["a"]"#,
            r#"{"pad": "x"}"#,
            r#"{"300": "x"}"#,
            r#"{"36": 5}"#,
        ] {
            assert!(matches!(store.load(bad), Err(PadError::Mapping(_))), "{bad}");
            assert_eq!(store, before, "{bad}");
        }
    }

    #[test]
    fn test_load_accepts_off_grid_keys() {
        let mut store = MappingStore::new();
        store.load(r#"{"0": "a", "255": "b"}"#).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_iter_ascending() {
        let mut store = MappingStore::new();
        store.set(70, clip("b"));
        store.set(50, clip("a"));
        let pads: Vec<u8> = store.iter().map(|(pad, _)| pad).collect();
        assert_eq!(pads, vec![50, 70]);
    }
}
