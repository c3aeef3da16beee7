//! Persistent per-sprite outline storage

use crate::error::{AssetError, Result};
use shape_outline::Polygon;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Named physics outlines per sprite.
///
/// Outlines are stored relative to the sprite centre.
pub trait OutlineStore {
    /// Usable outlines (3+ vertices) currently stored for `sprite`
    fn outlines(&self, sprite: &str) -> Vec<Polygon>;

    /// Replace the outlines of `sprite`; an empty list clears it
    fn set_outlines(&mut self, sprite: &str, outlines: Vec<Polygon>);

    /// Clear `sprite`, returning whether it had any outline
    fn clear(&mut self, sprite: &str) -> bool;

    /// Persist pending changes
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn has_outlines(&self, sprite: &str) -> bool {
        !self.outlines(sprite).is_empty()
    }
}

/// In-memory store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryOutlineStore {
    entries: BTreeMap<String, Vec<Polygon>>,
}

impl MemoryOutlineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprite names with stored outlines
    pub fn sprite_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OutlineStore for MemoryOutlineStore {
    fn outlines(&self, sprite: &str) -> Vec<Polygon> {
        self.entries
            .get(sprite)
            .map(|outlines| {
                outlines
                    .iter()
                    .filter(|outline| outline.is_usable())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn set_outlines(&mut self, sprite: &str, outlines: Vec<Polygon>) {
        if outlines.is_empty() {
            self.entries.remove(sprite);
        } else {
            self.entries.insert(sprite.to_string(), outlines);
        }
    }

    fn clear(&mut self, sprite: &str) -> bool {
        self.entries
            .remove(sprite)
            .map_or(false, |outlines| !outlines.is_empty())
    }
}

/// Store backed by a JSON file mapping sprite names to outline lists.
///
/// Changes are kept in memory until [`OutlineStore::flush`].
#[derive(Debug)]
pub struct JsonOutlineStore {
    path: PathBuf,
    memory: MemoryOutlineStore,
    dirty: bool,
}

impl JsonOutlineStore {
    /// Open the store at `path`; a missing file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let bytes = fs::read(&path)?;
            serde_json::from_slice(&bytes)
                .map_err(|e| AssetError::Deserialization(format!("{:?}: {}", path, e)))?
        } else {
            BTreeMap::new()
        };

        log::debug!("Opened outline store {:?} ({} sprites)", path, entries.len());

        Ok(Self {
            path,
            memory: MemoryOutlineStore { entries },
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn memory(&self) -> &MemoryOutlineStore {
        &self.memory
    }

    /// Unflushed changes exist
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl OutlineStore for JsonOutlineStore {
    fn outlines(&self, sprite: &str) -> Vec<Polygon> {
        self.memory.outlines(sprite)
    }

    fn set_outlines(&mut self, sprite: &str, outlines: Vec<Polygon>) {
        self.memory.set_outlines(sprite, outlines);
        self.dirty = true;
    }

    fn clear(&mut self, sprite: &str) -> bool {
        let removed = self.memory.clear(sprite);
        self.dirty |= removed;
        removed
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec_pretty(&self.memory.entries)
            .map_err(|e| AssetError::Serialization(e.to_string()))?;
        fs::write(&self.path, bytes)?;
        self.dirty = false;

        log::info!("Saved outline store {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_outline::Vec2;

    fn triangle() -> Polygon {
        Polygon::new(vec![Vec2::ZERO, Vec2::X, Vec2::Y])
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryOutlineStore::new();
        assert!(!store.has_outlines("idle"));

        store.set_outlines("idle", vec![triangle()]);
        assert_eq!(store.outlines("idle"), vec![triangle()]);

        assert!(store.clear("idle"));
        assert!(!store.clear("idle"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_degenerate_outlines_are_hidden() {
        let mut store = MemoryOutlineStore::new();
        store.set_outlines("run", vec![Polygon::new(vec![Vec2::ZERO, Vec2::X]), triangle()]);
        assert_eq!(store.outlines("run"), vec![triangle()]);

        store.set_outlines("jump", vec![Polygon::new(vec![Vec2::ZERO])]);
        assert!(!store.has_outlines("jump"));
    }

    #[test]
    fn test_empty_list_clears() {
        let mut store = MemoryOutlineStore::new();
        store.set_outlines("idle", vec![triangle()]);
        store.set_outlines("idle", Vec::new());
        assert_eq!(store.sprite_names().count(), 0);
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("outlines.json");

        let mut store = JsonOutlineStore::open(&path).unwrap();
        store.set_outlines("idle", vec![triangle()]);
        assert!(store.is_dirty());
        store.flush().unwrap();
        assert!(!store.is_dirty());

        let reopened = JsonOutlineStore::open(&path).unwrap();
        assert_eq!(reopened.outlines("idle"), vec![triangle()]);
        assert_eq!(reopened.memory().len(), 1);
    }

    #[test]
    fn test_json_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outlines.json");
        fs::write(&path, "not json").unwrap();

        let result = JsonOutlineStore::open(&path);
        assert!(matches!(result, Err(AssetError::Deserialization(_))));
    }
}
