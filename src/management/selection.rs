use std::path::PathBuf;

use crate::{
    config,
    error::ChangeError,
    utils::{DENOMINATION_CATALOG, Denomination},
};

/// Persisted denomination selection, kept ascending and duplicate-free by
/// construction: select is a sorted-set insert, never an append.
pub struct SelectionManager {
    selected: Vec<Denomination>,
}

impl SelectionManager {
    pub fn new(selected: Option<Vec<Denomination>>) -> Self {
        let mut manager = Self {
            selected: Vec::new(),
        };
        for denomination in selected.unwrap_or_default() {
            manager.select(denomination);
        }
        manager
    }

    pub async fn load() -> Result<Self, ChangeError> {
        let path = Self::cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| ChangeError::Selection(e.to_string()))?;
        let selected: Vec<Denomination> =
            serde_json::from_str(&content).map_err(|e| ChangeError::Selection(e.to_string()))?;
        Ok(Self::new(Some(selected)))
    }

    pub async fn persist(&self) -> Result<(), ChangeError> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| ChangeError::Selection(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&self.selected)
            .map_err(|e| ChangeError::Selection(e.to_string()))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| ChangeError::Selection(e.to_string()))
    }

    pub fn select(&mut self, denomination: Denomination) -> &mut Self {
        if let Err(position) = self.selected.binary_search(&denomination) {
            self.selected.insert(position, denomination);
        }
        self
    }

    pub fn deselect(&mut self, denomination: Denomination) -> &mut Self {
        if let Ok(position) = self.selected.binary_search(&denomination) {
            self.selected.remove(position);
        }
        self
    }

    pub fn select_all(&mut self) -> &mut Self {
        self.selected = DENOMINATION_CATALOG.to_vec();
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.selected.clear();
        self
    }

    pub fn is_selected(&self, denomination: Denomination) -> bool {
        self.selected.binary_search(&denomination).is_ok()
    }

    pub fn selected(&self) -> Vec<Denomination> {
        self.selected.clone()
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    fn cache_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/selection.json");
        path
    }
}
