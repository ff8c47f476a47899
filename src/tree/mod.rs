//! Colorized, indented rendering of a directory tree.
//!
//! Entries are listed one directory at a time, dotfiles dropped and the rest
//! sorted by name. Directories recurse unless their name is in the exclusion
//! set, in which case they are listed like plain files.

mod node;
mod renderer;
mod style;

use std::path::PathBuf;

use snafu::Snafu;

use crate::ext::BestEffortPathExt;

pub use node::{DirectoryNode, EntryKind};
pub use renderer::TreeRenderer;
pub use style::DisplayStyle;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RenderError {
    #[snafu(display("Failed to list directory {}", path.best_effort_path_display()))]
    ReadDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read an entry of directory {}", path.best_effort_path_display()))]
    ReadEntryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write the rendered tree"))]
    WriteError { source: std::io::Error },
}
