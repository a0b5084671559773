//! Builds the PDF preview from assets prepared by the generator.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{GlyError, Result};

/// Runs gregorio on every gabc file, then lualatex on the main document.
#[derive(Debug, Clone)]
pub struct PreviewBuilder {
    gabcs: Vec<PathBuf>,
    main_tex: Option<PathBuf>,
    working_directory: PathBuf,
    gregorio: String,
    lualatex: String,
}

impl PreviewBuilder {
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self {
            gabcs: Vec::new(),
            main_tex: None,
            working_directory: working_directory.into(),
            gregorio: "gregorio".to_string(),
            lualatex: "lualatex".to_string(),
        }
    }

    /// Use other executables (e.g. absolute paths).
    pub fn with_programs(mut self, gregorio: impl Into<String>, lualatex: impl Into<String>) -> Self {
        self.gregorio = gregorio.into();
        self.lualatex = lualatex.into();
        self
    }

    pub fn add_gabc(&mut self, path: impl Into<PathBuf>) {
        self.gabcs.push(path.into());
    }

    pub fn gabcs(&self) -> &[PathBuf] {
        &self.gabcs
    }

    pub fn set_main_tex(&mut self, path: impl Into<PathBuf>) {
        self.main_tex = Some(path.into());
    }

    pub fn main_tex(&self) -> Option<&Path> {
        self.main_tex.as_deref()
    }

    /// Compile scores and the main document.
    ///
    /// A failing gregorio run is only a warning (lualatex may still manage
    /// with gregoriotex autocompile); a failing lualatex run is an error.
    pub fn build(&self) -> Result<()> {
        let main_tex = self.main_tex.as_ref().ok_or_else(|| GlyError::Build {
            message: "No main LaTeX document to build".to_string(),
            help: None,
        })?;

        for gabc in &self.gabcs {
            let gtex = gabc.with_extension("gtex");
            let args = [OsStr::new("-o"), gtex.as_os_str(), gabc.as_os_str()];
            if let Err(e) = self.run(&self.gregorio, &args) {
                warn!("{} Let's continue and see what happens ...", e);
            }
        }

        self.run(
            &self.lualatex,
            &[OsStr::new("--interaction=nonstopmode"), main_tex.as_os_str()],
        )
    }

    fn run(&self, program: &str, args: &[&OsStr]) -> Result<()> {
        debug!(program, ?args, dir = %self.working_directory.display(), "running");
        let status = Command::new(program)
            .args(args)
            .current_dir(&self.working_directory)
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => GlyError::Build {
                    message: format!(
                        "'{}' is required for this gly command to work, but it was not found.",
                        program
                    ),
                    help: Some(format!(
                        "Ensure that '{}' is installed in one of the directories listed in your PATH and try again.",
                        program
                    )),
                },
                _ => GlyError::Build {
                    message: format!("Failed to run '{}': {}", program, e),
                    help: None,
                },
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(GlyError::Build {
                message: format!(
                    "'{}' exited with exit code {}.",
                    program,
                    status.code().map_or("unknown".to_string(), |c| c.to_string())
                ),
                help: None,
            })
        }
    }
}
