use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::tree::DisplayStyle;

/// Name of the directory rendered when no root is given.
const SOURCE_DIR_NAME: &str = "src";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: Option<PathBuf>,
    pub color: bool,
}

impl RuntimeConfig {
    /// The `--root` override, or `src` inside the project directory.
    pub fn target_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(default_target_dir)
    }

    pub fn display_style(&self) -> DisplayStyle {
        DisplayStyle::detect(self.color)
    }
}

fn default_target_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(SOURCE_DIR_NAME)
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            color: !cli.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_defaults_to_project_src() {
        let config = RuntimeConfig {
            root: None,
            color: true,
        };

        let target = config.target_dir();
        assert!(target.ends_with("src"));
        assert_eq!(target.parent(), Some(Path::new(env!("CARGO_MANIFEST_DIR"))));
    }

    #[test]
    fn root_override_wins() {
        let config = RuntimeConfig {
            root: Some(PathBuf::from("/somewhere/else")),
            color: true,
        };

        assert_eq!(config.target_dir(), PathBuf::from("/somewhere/else"));
    }

    #[test]
    fn disabled_color_is_plain() {
        let config = RuntimeConfig {
            root: None,
            color: false,
        };

        assert_eq!(config.display_style(), DisplayStyle::plain());
    }
}
