//! Output locations relative to the project root

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Index file location under the project root.
pub const INDEX_FILE: &str = "src/data/icons-index.json";
/// Publish directory under the project root.
pub const PUBLISH_DIR: &str = "public/icons";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub index_file: PathBuf,
    pub publish_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            index_file: root.join(INDEX_FILE),
            publish_dir: root.join(PUBLISH_DIR),
        }
    }

    /// Layout rooted at the directory holding the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = env::current_exe().context("locating the running executable")?;
        let root = exe
            .parent()
            .with_context(|| format!("{} has no parent directory", exe.display()))?;
        Ok(Self::new(root))
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectLayout;
    use std::path::Path;

    #[test]
    fn derives_fixed_locations() {
        let layout = ProjectLayout::new("/site");
        assert_eq!(layout.index_file, Path::new("/site/src/data/icons-index.json"));
        assert_eq!(layout.publish_dir, Path::new("/site/public/icons"));
    }

    #[test]
    fn executable_layout_is_absolute() {
        let layout = ProjectLayout::beside_executable().expect("layout");
        assert!(layout.index_file.is_absolute());
        assert!(layout.publish_dir.ends_with("public/icons"));
    }
}
