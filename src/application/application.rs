use std::io::Write;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::application::RuntimeConfig;
use crate::ext::BestEffortPathExt;
use crate::tree::{RenderError, TreeRenderer};

const HEADER_RULE_WIDTH: usize = 50;

pub struct Application;

impl Application {
    /// Renders the target directory, framed by a header and a legend.
    ///
    /// A missing target is reported on `out` and is not an error.
    pub fn run<W: Write>(
        app_config: impl Into<RuntimeConfig>,
        out: &mut W,
    ) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let target = app_config.target_dir();
        let target_display = target.best_effort_path_display();

        if !target.exists() {
            warn!("Target directory is missing: {}", target_display);
            writeln!(out, "Error: the directory {target_display} does not exist.")
                .context(OutputSnafu)?;
            return Ok(());
        }

        writeln!(out, "Project tree: {target_display}").context(OutputSnafu)?;
        writeln!(out, "{}", "-".repeat(HEADER_RULE_WIDTH)).context(OutputSnafu)?;

        let renderer = TreeRenderer::new(target, app_config.display_style());
        debug!("Rendering tree from {}", renderer.root_dir().display());
        renderer.render(out).context(RenderSnafu)?;

        writeln!(out).context(OutputSnafu)?;
        renderer.render_legend(out).context(RenderSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while rendering the tree"))]
    RenderError { source: RenderError },
    #[snafu(display("Critical failure encountered while writing output"))]
    OutputError { source: std::io::Error },
}
