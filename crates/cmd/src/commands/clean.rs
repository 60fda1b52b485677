//! Clean command - removes generated files from the output directory
//!
//! Only entries the build writes are removed: index.html, styles.css, the
//! assets tree, and other top-level HTML pages. Sources and site.yaml are
//! never touched, so cleaning an output that is the site root is safe.
//!
//! Example:
//!   folio clean

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio::clean_output;

use crate::common::{load_site_config, resolve_output_dir, resolve_site_dir};

#[allow(clippy::print_stdout)]
pub fn clean_command(dir: Option<PathBuf>, output: Option<&Path>, vars: &[String]) -> Result<()> {
    let site_dir = resolve_site_dir(dir);
    let config = load_site_config(&site_dir, vars)?;
    let output_dir = resolve_output_dir(&site_dir, &config, output);

    let removed = clean_output(&output_dir)?;
    if removed.is_empty() {
        println!("Nothing to clean in {}", output_dir.display());
    } else {
        for path in &removed {
            println!("  removed {}", path.display());
        }
        println!("✅ Removed {} generated entries", removed.len());
    }
    Ok(())
}
