//! Project configuration and source file discovery.
//!
//! # Example
//!
//! ```ignore
//! use gly::discovery::{expand_paths, load_config};
//!
//! let config = load_config(".")?;
//! let files = expand_paths(&args.files, true, &config);
//! ```

mod config;
mod scanner;

use std::path::Path;

use crate::error::Result;

pub use config::Config;
pub use scanner::{expand_paths, is_gly_file, scan_directory, GLY_EXTENSION};

/// The name of the project config file.
pub const CONFIG_FILENAME: &str = "gly.yaml";

/// Load `gly.yaml` from a directory, or defaults if there is none.
pub fn load_config(dir: impl AsRef<Path>) -> Result<Config> {
    let path = dir.as_ref().join(CONFIG_FILENAME);
    if path.exists() {
        tracing::debug!(path = %path.display(), "loading config");
        Config::load(&path)
    } else {
        Ok(Config::default())
    }
}
