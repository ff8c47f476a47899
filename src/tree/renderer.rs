use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use snafu::ResultExt;
use tracing::debug;

use super::node::is_hidden;
use super::{
    DirectoryNode, DisplayStyle, EntryKind, ReadDirSnafu, ReadEntrySnafu, RenderError, WriteSnafu,
};

/// Directories that are listed but never descended into.
const EXCLUDED_DIRS: [&str; 3] = [".git", "node_modules", "__pycache__"];

pub struct TreeRenderer {
    root_dir: PathBuf,
    excluded_dirs: HashSet<&'static str>,
    style: DisplayStyle,
}

impl TreeRenderer {
    pub fn new(root_dir: impl Into<PathBuf>, style: DisplayStyle) -> Self {
        let root_dir: PathBuf = root_dir.into();
        let root_dir = root_dir.canonicalize().unwrap_or(root_dir);

        Self {
            root_dir,
            excluded_dirs: EXCLUDED_DIRS.into_iter().collect(),
            style,
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Prints the root's own name followed by everything beneath it.
    ///
    /// An unreadable directory aborts the walk; lines already written stay
    /// in `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), RenderError> {
        let root_name = self
            .root_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(
            out,
            "{}",
            self.style.paint(EntryKind::Directory, &format!("{root_name}/"))
        )
        .context(WriteSnafu)?;

        self.render_dir(out, &self.root_dir, "")
    }

    pub fn render_legend<W: Write>(&self, out: &mut W) -> Result<(), RenderError> {
        writeln!(out, "Legend:").context(WriteSnafu)?;
        writeln!(out, "{}", self.style.paint(EntryKind::Directory, "Directory"))
            .context(WriteSnafu)?;
        writeln!(out, "{}", self.style.paint(EntryKind::File, "File")).context(WriteSnafu)?;
        Ok(())
    }

    fn render_dir<W: Write>(
        &self,
        out: &mut W,
        path: &Path,
        prefix: &str,
    ) -> Result<(), RenderError> {
        for node in self.list_entries(path)? {
            let connector = node.connector();

            if node.kind == EntryKind::Directory && !self.is_excluded(&node.name) {
                let label = format!("{}/", node.name);
                writeln!(
                    out,
                    "{prefix}{connector}{}",
                    self.style.paint(EntryKind::Directory, &label)
                )
                .context(WriteSnafu)?;

                let child_prefix = format!("{prefix}{}", node.continuation());
                self.render_dir(out, &node.path, &child_prefix)?;
            } else {
                if node.kind == EntryKind::Directory {
                    debug!("Not descending into excluded {}: {}", node.kind, node.name);
                }
                writeln!(
                    out,
                    "{prefix}{connector}{}",
                    self.style.paint(EntryKind::File, &node.name)
                )
                .context(WriteSnafu)?;
            }
        }

        Ok(())
    }

    /// Lists the visible entries of `path` in ascending name order, with only
    /// the final one marked as last.
    pub fn list_entries(&self, path: &Path) -> Result<Vec<DirectoryNode>, RenderError> {
        debug!("Listing directory: {}", path.display());

        let mut names = fs::read_dir(path)
            .context(ReadDirSnafu { path })?
            .map(|entry| entry.map(|e| e.file_name()).context(ReadEntrySnafu { path }))
            .filter(|name| !matches!(name, Ok(name) if is_hidden(name)))
            .collect::<Result<Vec<OsString>, _>>()?;
        names.sort();

        let count = names.len();
        Ok(names
            .into_iter()
            .enumerate()
            .map(|(index, name)| DirectoryNode::new(path.join(name), index + 1 == count))
            .collect())
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }
}
