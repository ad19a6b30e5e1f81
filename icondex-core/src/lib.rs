//! icondex-core: the icon librarian of a design-system build
//!
//! Give it a directory full of icon folders and it comes back with two
//! things: a compact search index the icon picker can load in one request,
//! and a clean published copy of every folder for the web server to hand out.
//!
//! ## Two Phases, One Pass
//!
//! **Indexing**: reading every folder's story
//! - Reads `metadata.json` for the icon's name and metaphors
//! - Looks through `SVG/` for `<icon>_<size>_<style>.svg` renders
//! - Keeps only the smallest size per style, the one a picker shows first
//! - Quietly passes over folders that are incomplete or unreadable
//!
//! **Publishing**: a fresh shelf every time
//! - Clears the publish directory so removed icons really disappear
//! - Copies each folder whole: metadata, SVGs and anything else inside
//! - Stops at the first I/O failure instead of guessing
//!
//! ## A Sample Run
//!
//! ```rust,no_run
//! use std::io;
//! use std::path::Path;
//! use icondex_core::layout::ProjectLayout;
//! use icondex_core::pipeline::run;
//!
//! let layout = ProjectLayout::new("/srv/design-site");
//! if let Some(summary) = run(Path::new("/srv/icon-assets"), &layout, io::stdout())? {
//!     println!(
//!         "{} folders, {} regular, {} filled",
//!         summary.folders, summary.regular, summary.filled
//!     );
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## The Cast of Characters
//!
//! - [`discovery::AssetFolder`]: one icon's folder on disk
//! - [`style::StyleMatcher`]: picks the smallest render of a style
//! - [`index::IndexDocument`]: the finished index, ready for JSON
//! - [`layout::ProjectLayout`]: where the index and published tree land

pub mod discovery;
pub mod index;
pub mod layout;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod publish;
pub mod style;
