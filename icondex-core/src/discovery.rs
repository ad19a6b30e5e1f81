//! Asset folder discovery for icondex-core

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// One icon asset folder: a directory named by its icon identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFolder {
    pub path: PathBuf,
    pub id: String,
}

impl AssetFolder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, id }
    }

    pub fn metadata_file(&self) -> PathBuf {
        self.path.join("metadata.json")
    }

    pub fn svg_dir(&self) -> PathBuf {
        self.path.join("SVG")
    }
}

/// Trait for enumerating asset folders from some backing store.
pub trait FolderDiscovery {
    fn discover(&self) -> Result<Vec<AssetFolder>>;
}

/// Lists the immediate subdirectories of an assets root, sorted by name.
#[derive(Debug, Clone)]
pub struct AssetDirDiscovery {
    root: PathBuf,
}

impl AssetDirDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }
}

impl FolderDiscovery for AssetDirDiscovery {
    fn discover(&self) -> Result<Vec<AssetFolder>> {
        if !self.root_exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("listing assets root {}", self.root.display()))?;

        let mut folders = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("listing assets root {}", self.root.display()))?;
            let path = entry.path();
            // `is_dir` follows symlinks, so linked icon folders count too.
            if path.is_dir() {
                folders.push(AssetFolder::new(path));
            }
        }

        folders.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(folders)
    }
}
