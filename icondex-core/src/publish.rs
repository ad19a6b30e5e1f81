//! Mirror asset folders into the publish directory

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use walkdir::WalkDir;

use crate::discovery::AssetFolder;
use crate::progress::Progress;

/// Remove `dest` if present, then recreate it empty.
pub fn reset_dir(dest: &Path) -> Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest).with_context(|| format!("removing {}", dest.display()))?;
    }
    fs::create_dir_all(dest).with_context(|| format!("creating {}", dest.display()))?;
    Ok(())
}

/// Recursively copy `src` into `dest`, overwriting files that already exist.
/// Symlinks are followed and their targets copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.with_context(|| format!("walking {}", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("{} is outside {}", entry.path().display(), src.display()))?;
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("copying {} to {}", entry.path().display(), target.display())
            })?;
        }
    }
    Ok(())
}

/// Replace `dest` with a fresh copy of every folder, in order.
pub fn publish<W: Write>(
    folders: &[AssetFolder],
    dest: &Path,
    progress: &mut Progress<W>,
) -> Result<()> {
    reset_dir(dest)?;

    for folder in folders {
        copy_tree(&folder.path, &dest.join(&folder.id))?;
        progress.tick()?;
    }

    info!("published {} folders to {}", folders.len(), dest.display());
    Ok(())
}
