//! Icon search index: per-folder entries grouped by style

use std::fmt;
use std::io::Write;

use anyhow::Result;
use chrono::Local;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::discovery::AssetFolder;
use crate::metadata::IconMetadata;
use crate::progress::Progress;
use crate::style::{list_svg_files, Style, StyleMatcher};

/// Format of the `lastUpdated` stamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One icon in one style. `name` and `metaphor` are copied from the
/// folder's metadata as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: Value,
    pub icon: String,
    pub metaphor: Value,
    pub folder: String,
}

/// The aggregated index consumed by the icon picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    #[serde(rename = "Regular")]
    pub regular: Vec<IndexEntry>,
    #[serde(rename = "Filled")]
    pub filled: Vec<IndexEntry>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

impl IndexDocument {
    pub fn new(last_updated: impl Into<String>) -> Self {
        Self {
            regular: Vec::new(),
            filled: Vec::new(),
            last_updated: last_updated.into(),
        }
    }

    /// Empty document stamped with the current local time.
    pub fn stamped_now() -> Self {
        Self::new(Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn entries(&self, style: Style) -> &[IndexEntry] {
        match style {
            Style::Regular => &self.regular,
            Style::Filled => &self.filled,
        }
    }

    pub fn push(&mut self, style: Style, entry: IndexEntry) {
        match style {
            Style::Regular => self.regular.push(entry),
            Style::Filled => self.filled.push(entry),
        }
    }

    /// Entry count across both styles.
    pub fn len(&self) -> usize {
        self.regular.len() + self.filled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Why a folder contributed nothing to the index.
#[derive(Debug)]
pub enum SkipReason {
    MissingMetadata,
    MissingSvgDir,
    UnreadableMetadata(anyhow::Error),
    UnreadableSvgDir(anyhow::Error),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingMetadata => write!(f, "no metadata.json"),
            SkipReason::MissingSvgDir => write!(f, "no SVG directory"),
            SkipReason::UnreadableMetadata(err) => write!(f, "bad metadata: {err:#}"),
            SkipReason::UnreadableSvgDir(err) => write!(f, "unreadable SVG directory: {err:#}"),
        }
    }
}

/// Result of indexing a single folder.
#[derive(Debug)]
pub enum FolderOutcome {
    Indexed(Vec<(Style, IndexEntry)>),
    Skipped(SkipReason),
}

/// Compiled filename patterns for every style.
pub fn style_matchers() -> Result<Vec<StyleMatcher>> {
    Style::ALL.into_iter().map(StyleMatcher::new).collect()
}

/// Index one folder. Failures become [`FolderOutcome::Skipped`], never errors.
pub fn index_folder(folder: &AssetFolder, matchers: &[StyleMatcher]) -> FolderOutcome {
    let meta_file = folder.metadata_file();
    let svg_dir = folder.svg_dir();

    if !meta_file.is_file() {
        return FolderOutcome::Skipped(SkipReason::MissingMetadata);
    }
    if !svg_dir.is_dir() {
        return FolderOutcome::Skipped(SkipReason::MissingSvgDir);
    }

    let meta = match IconMetadata::load(&meta_file) {
        Ok(meta) => meta,
        Err(err) => return FolderOutcome::Skipped(SkipReason::UnreadableMetadata(err)),
    };
    let svg_files = match list_svg_files(&svg_dir) {
        Ok(files) => files,
        Err(err) => return FolderOutcome::Skipped(SkipReason::UnreadableSvgDir(err)),
    };

    let entries = matchers
        .iter()
        .filter_map(|matcher| {
            matcher.smallest(&svg_files).map(|icon| {
                (
                    matcher.style(),
                    IndexEntry {
                        name: meta.name.clone(),
                        icon: icon.to_string(),
                        metaphor: meta.metaphor.clone(),
                        folder: folder.id.clone(),
                    },
                )
            })
        })
        .collect();

    FolderOutcome::Indexed(entries)
}

/// Build the index over `folders` in the order given.
pub fn build_index<W: Write>(
    folders: &[AssetFolder],
    mut doc: IndexDocument,
    progress: &mut Progress<W>,
) -> Result<IndexDocument> {
    let matchers = style_matchers()?;

    for folder in folders {
        match index_folder(folder, &matchers) {
            FolderOutcome::Indexed(entries) => {
                for (style, entry) in entries {
                    doc.push(style, entry);
                }
            }
            FolderOutcome::Skipped(reason) => {
                debug!("skipping {}: {reason}", folder.path.display());
            }
        }
        progress.tick()?;
    }

    Ok(doc)
}
