//! Symbol persistence.
//!
//! Normalized symbols are immutable once created, so storage is a flat
//! directory of `{id}.json` files. Listing skips entries that fail to
//! parse (logged, never fatal) so one corrupt file cannot hide the rest.

use std::fs;
use std::path::{Path, PathBuf};

use super::{NormalizedSymbol, SymbolMeta};
use crate::error::{Error, Result};

/// Directory-backed store of normalized symbols.
pub struct SymbolStore {
    dir: PathBuf,
}

impl SymbolStore {
    /// Open a store at a directory, creating it if missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Persist a symbol as `{id}.json`, overwriting any previous entry.
    pub fn save(&self, symbol: &NormalizedSymbol) -> Result<()> {
        let path = self.path_for(&symbol.meta.id);
        let json = serde_json::to_string_pretty(symbol)?;
        fs::write(&path, json)?;
        log::debug!("saved symbol '{}' to {}", symbol.meta.id, path.display());
        Ok(())
    }

    /// Load a symbol by id.
    pub fn load(&self, id: &str) -> Result<NormalizedSymbol> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(Error::SymbolNotFound(id.to_string()));
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// List metadata for all stored symbols.
    ///
    /// Unreadable or unparsable entries are skipped with a warning.
    pub fn list(&self) -> Result<Vec<SymbolMeta>> {
        let mut symbols = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match read_meta(&path) {
                Ok(meta) => symbols.push(meta),
                Err(e) => log::warn!("skipping symbol file {}: {}", path.display(), e),
            }
        }
        // Stable listing order regardless of directory iteration order
        symbols.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(symbols)
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

fn read_meta(path: &Path) -> Result<SymbolMeta> {
    let content = fs::read_to_string(path)?;
    let symbol: NormalizedSymbol = serde_json::from_str(&content)?;
    Ok(symbol.meta)
}
