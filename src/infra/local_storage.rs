//! File-backed guest cart storage.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::domain::cart::{CartLine, GUEST_CART_STORAGE_KEY, GuestCartStorage};

use super::config::GuestCartSettings;

/// Serializes the guest cart's lines to a JSON file under the configured
/// directory. The engine owns the `cart-storage` key; nothing else in the
/// directory is touched.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            path: directory
                .as_ref()
                .join(format!("{GUEST_CART_STORAGE_KEY}.json")),
        }
    }

    pub fn from_settings(settings: &GuestCartSettings) -> Self {
        Self::new(&settings.directory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GuestCartStorage for JsonFileStorage {
    fn load(&self) -> anyhow::Result<Vec<CartLine>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn save(&self, lines: &[CartLine]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let bytes = serde_json::to_vec(lines).context("Failed to serialize guest cart lines.")?;
        fs::write(&self.path, bytes)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}
