// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Output cleaning and asset copying.
//!
//! The output directory may be the site root itself (the default), so
//! cleaning is name-scoped: only entries this tool generates are removed,
//! never sources or config.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::content::Catalog;
use crate::error::Result;

/// Remove previously generated entries from the output directory.
///
/// Removes `index.html`, `styles.css`, the `assets/` tree, and any other
/// top-level `.html` file. Everything else is left alone. A missing output
/// directory is not an error. Returns the removed paths.
pub fn clean_output(output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    if !output_dir.is_dir() {
        return Ok(removed);
    }
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let generated = if path.is_dir() {
            name == "assets"
        } else {
            name == "styles.css" || name.ends_with(".html")
        };
        if !generated {
            continue;
        }
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        diagnostics::log_debug!("Removed {path}", path: path.display().to_string());
        removed.push(path);
    }
    removed.sort();
    Ok(removed)
}

/// Copy the stylesheet, global assets, and per-project assets into the
/// output directory. Returns the number of files copied.
///
/// A missing stylesheet or global-assets directory is reported as a warning
/// rather than failing the build; a failed project copy skips that project.
pub fn copy_assets(
    config: &SiteConfig,
    site_dir: &Path,
    output_dir: &Path,
    catalog: &Catalog,
) -> Result<usize> {
    fs::create_dir_all(output_dir)?;
    let mut copied = 0;

    let stylesheet = config.stylesheet_path(site_dir);
    if stylesheet.is_file() {
        fs::copy(&stylesheet, output_dir.join("styles.css"))?;
        copied += 1;
    } else {
        diagnostics::log_warn!(
            "Stylesheet not found at {path}",
            path: stylesheet.display().to_string()
        );
    }

    let global = config.global_assets_dir(site_dir);
    if global.is_dir() {
        copied += copy_dir_recursive(&global, &output_dir.join("assets").join("global"))?;
    } else {
        diagnostics::log_warn!(
            "Global assets directory not found at {path}",
            path: global.display().to_string()
        );
    }

    let projects_root = output_dir.join("assets").join("projects");
    for project in catalog.visible.iter().chain(&catalog.hidden) {
        let Some(source) = &project.assets_dir else {
            continue;
        };
        let dest = projects_root.join(&project.id);
        match copy_dir_recursive(source, &dest) {
            Ok(count) => {
                diagnostics::log_debug!(
                    "Copied {count} assets for {id}",
                    count: count,
                    id: project.id.as_str()
                );
                copied += count;
            }
            Err(err) => {
                diagnostics::log_warn!(
                    "Skipping assets for {id}: {error}",
                    id: project.id.as_str(),
                    error: err.to_string()
                );
            }
        }
    }

    Ok(copied)
}

/// Recursively copy a directory, skipping `index.md` entries. Returns the
/// number of files copied.
fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if path.is_dir() {
            copied += copy_dir_recursive(&path, &target)?;
        } else if entry.file_name() != "index.md" {
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
