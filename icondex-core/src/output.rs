//! Index serialization helpers

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::index::IndexDocument;

/// Write the index as compact JSON. Non-ASCII text is written verbatim.
pub fn write_index(doc: &IndexDocument, mut w: impl Write) -> Result<()> {
    serde_json::to_writer(&mut w, doc)?;
    w.flush()?;
    Ok(())
}

/// Write the index to `path`, creating parent directories as needed.
pub fn write_index_file(doc: &IndexDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_index(doc, BufWriter::new(file)).with_context(|| format!("writing {}", path.display()))
}

/// Read an index back from disk.
pub fn read_index_file(path: &Path) -> Result<IndexDocument> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))
}
