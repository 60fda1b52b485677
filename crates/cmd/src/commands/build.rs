//! Build command - renders the whole site into the output directory
//!
//! Example:
//!   folio build --dir ~/my-site ./dist

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio::build_site;

use crate::common::{load_site_config, resolve_output_dir, resolve_site_dir};

#[allow(clippy::print_stdout)]
pub fn build_command(
    dir: Option<PathBuf>,
    output: Option<&Path>,
    vars: &[String],
    verbose: bool,
) -> Result<()> {
    let site_dir = resolve_site_dir(dir);
    let config = load_site_config(&site_dir, vars)?;
    let output_dir = resolve_output_dir(&site_dir, &config, output);

    println!(
        "Building {} into {}",
        config.site.title,
        output_dir.display()
    );
    let summary = build_site(&config, &site_dir, &output_dir)?;

    if verbose {
        for skipped in &summary.skipped {
            println!("  ⚠️ skipped {}: {}", skipped.id, skipped.reason);
        }
    }
    println!(
        "✅ Built {} pages ({} gallery, {} hidden), copied {} assets",
        summary.pages, summary.gallery, summary.hidden, summary.assets
    );
    if !verbose && !summary.skipped.is_empty() {
        println!(
            "⚠️ {} projects skipped (run with --verbose for details)",
            summary.skipped.len()
        );
    }
    Ok(())
}
