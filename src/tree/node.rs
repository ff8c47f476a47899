use std::ffi::OsStr;
use std::path::PathBuf;

use derive_more::Display;

const MID_CONNECTOR: &str = "├── ";
const LAST_CONNECTOR: &str = "└── ";
const MID_CONTINUATION: &str = "│   ";
const LAST_CONTINUATION: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

/// A single listed entry, built fresh for every directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    pub is_last: bool,
}

impl DirectoryNode {
    /// Symlinks are followed when deciding the kind, so a link to a
    /// directory renders as a directory.
    pub fn new(path: PathBuf, is_last: bool) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        Self {
            path,
            name,
            kind,
            is_last,
        }
    }

    pub fn connector(&self) -> &'static str {
        if self.is_last {
            LAST_CONNECTOR
        } else {
            MID_CONNECTOR
        }
    }

    /// Indentation appended to the prefix for this entry's children.
    pub fn continuation(&self) -> &'static str {
        if self.is_last {
            LAST_CONTINUATION
        } else {
            MID_CONTINUATION
        }
    }
}

pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case(".env", true)]
    #[case(".git", true)]
    #[case("..", true)]
    #[case("env", false)]
    #[case("file.txt", false)]
    #[case("", false)]
    fn hidden_names_start_with_a_dot(#[case] name: &str, #[case] hidden: bool) {
        assert_eq!(is_hidden(OsStr::new(name)), hidden);
    }

    #[rstest]
    #[case(false, "├── ", "│   ")]
    #[case(true, "└── ", "    ")]
    fn glyphs_follow_sibling_position(
        #[case] is_last: bool,
        #[case] connector: &str,
        #[case] continuation: &str,
    ) {
        let node = DirectoryNode::new(PathBuf::from("whatever"), is_last);
        assert_eq!(node.connector(), connector);
        assert_eq!(node.continuation(), continuation);
    }

    #[test]
    fn kind_is_read_from_the_filesystem() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir(temp_dir.path().join("sub")).expect("Failed to create dir");
        std::fs::write(temp_dir.path().join("a.txt"), "a").expect("Failed to write file");

        let dir = DirectoryNode::new(temp_dir.path().join("sub"), false);
        let file = DirectoryNode::new(temp_dir.path().join("a.txt"), true);

        assert_eq!(dir.kind, EntryKind::Directory);
        assert_eq!(dir.name, "sub");
        assert_eq!(file.kind, EntryKind::File);
        assert_eq!(file.name, "a.txt");
        assert!(file.is_last);
    }

    #[test]
    #[cfg(unix)]
    fn symlink_to_directory_is_a_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target = temp_dir.path().join("target");
        let link = temp_dir.path().join("link");
        std::fs::create_dir(&target).expect("Failed to create dir");
        std::os::unix::fs::symlink(&target, &link).expect("Failed to create symlink");

        assert_eq!(DirectoryNode::new(link, true).kind, EntryKind::Directory);
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(EntryKind::Directory.to_string(), "directory");
        assert_eq!(EntryKind::File.to_string(), "file");
    }
}
