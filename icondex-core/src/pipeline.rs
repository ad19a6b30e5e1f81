//! The two-phase build: index first, then publish

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use crate::discovery::{AssetDirDiscovery, FolderDiscovery};
use crate::index::{build_index, IndexDocument};
use crate::layout::ProjectLayout;
use crate::output::write_index_file;
use crate::progress::Progress;
use crate::publish::publish;
use crate::style::Style;

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub folders: usize,
    pub regular: usize,
    pub filled: usize,
}

/// Index `assets_dir` into `layout.index_file`, then mirror it into
/// `layout.publish_dir`. Step and progress text goes to `out`.
///
/// Returns `Ok(None)` without touching anything when `assets_dir` is not a
/// directory.
pub fn run<W: Write>(
    assets_dir: &Path,
    layout: &ProjectLayout,
    mut out: W,
) -> Result<Option<RunSummary>> {
    let discovery = AssetDirDiscovery::new(assets_dir);
    if !discovery.root_exists() {
        debug!("{} is not a directory; nothing to do", assets_dir.display());
        return Ok(None);
    }

    let doc = IndexDocument::stamped_now();
    let folders = discovery.discover()?;

    writeln!(out, "Step 1: Scanning folders and building index...")?;
    let mut progress = Progress::new(folders.len(), &mut out);
    let doc = build_index(&folders, doc, &mut progress)?;
    write_index_file(&doc, &layout.index_file)?;
    info!(
        "wrote {} entries for {} folders to {}",
        doc.len(),
        folders.len(),
        layout.index_file.display()
    );

    writeln!(
        out,
        "\n\nStep 2: Copying all folders to {}...",
        layout.publish_dir.display()
    )?;
    let mut progress = Progress::new(folders.len(), &mut out);
    publish(&folders, &layout.publish_dir, &mut progress)?;

    writeln!(out, "\nDone!")?;
    out.flush()?;

    Ok(Some(RunSummary {
        folders: folders.len(),
        regular: doc.entries(Style::Regular).len(),
        filled: doc.entries(Style::Filled).len(),
    }))
}
