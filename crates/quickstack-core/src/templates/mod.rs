//! Static template bundles shipped with the tool
//!
//! Bundles are plain directories of files copied verbatim into the project:
//! one of `typed`/`untyped` for the base scaffold, plus one bundle per extra.

pub mod copier;

pub use copier::copy_template;

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Locate the template bundle root: CLI override first, then the product's
/// env var, then the `templates` directory next to the running executable.
pub fn template_root<C: ProductConfig>(
    config: &C,
    override_dir: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(config.template_dir_env()) {
        return Ok(PathBuf::from(dir));
    }
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .map(|parent| parent.join("templates"))
        .unwrap_or_else(|| PathBuf::from("templates"));
    Ok(dir)
}
