use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Print a colorized tree of the project's source directory")]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Directory to render instead of the project's `src` directory
    #[clap(long, short)]
    pub root: Option<PathBuf>,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,
}
