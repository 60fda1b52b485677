// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Full site builds: clean, load, render, write, copy.

use std::fs;
use std::path::Path;

use crate::assets::{clean_output, copy_assets};
use crate::config::SiteConfig;
use crate::content::{Skipped, load_catalog};
use crate::error::{Error, Result};
use crate::layouts::{self, DetailContext, GalleryContext};
use crate::markdown::{self, MediaContext};

/// What a build produced.
#[derive(Debug)]
pub struct BuildSummary {
    /// Projects listed on the gallery page
    pub gallery: usize,
    /// Pages built but kept off the gallery
    pub hidden: usize,
    /// Total HTML pages written, gallery included
    pub pages: usize,
    /// Asset files copied into the output
    pub assets: usize,
    /// Projects that produced no page, with reasons
    pub skipped: Vec<Skipped>,
}

/// Build the whole site into `output_dir`.
///
/// Cleans previously generated output, loads the content catalog, writes
/// the gallery page and one detail page per visible or hidden project,
/// then copies assets.
pub fn build_site(
    config: &SiteConfig,
    site_dir: &Path,
    output_dir: &Path,
) -> Result<BuildSummary> {
    let content_dir = config.content_dir(site_dir);
    diagnostics::log_info!(
        "Building site from {content}",
        content: content_dir.display().to_string()
    );

    clean_output(output_dir)?;
    let catalog = load_catalog(&content_dir)?;

    let intro_html = match config.partial_path(site_dir, "intro") {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|source| Error::ReadPage {
                path: path.clone(),
                source,
            })?;
            Some(markdown::render(&text, &MediaContext::site()))
        }
        None => None,
    };

    fs::create_dir_all(output_dir)?;
    let gallery_html = layouts::gallery_page(&GalleryContext {
        site: &config.site,
        intro_html: intro_html.as_deref(),
        last_updated: catalog.last_updated,
        projects: &catalog.visible,
    });
    write_page(&output_dir.join("index.html"), &gallery_html)?;

    let mut pages = 1;
    for project in catalog.visible.iter().chain(&catalog.hidden) {
        let media = MediaContext::for_project(&project.id);
        let body_html = markdown::render(&project.body, &media);
        let html = layouts::detail_page(&DetailContext {
            site: &config.site,
            project,
            body_html: &body_html,
        });
        let path = output_dir.join(format!("{}.html", project.id));
        write_page(&path, &html)?;
        diagnostics::log_debug!("Wrote {path}", path: path.display().to_string());
        pages += 1;
    }

    let assets = copy_assets(config, site_dir, output_dir, &catalog)?;
    diagnostics::log_info!(
        "Wrote {pages} pages ({gallery} gallery, {hidden} hidden) and copied {assets} assets",
        pages: pages,
        gallery: catalog.visible.len(),
        hidden: catalog.hidden.len(),
        assets: assets
    );

    Ok(BuildSummary {
        gallery: catalog.visible.len(),
        hidden: catalog.hidden.len(),
        pages,
        assets,
        skipped: catalog.skipped,
    })
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| Error::WritePage {
        path: path.to_path_buf(),
        source,
    })
}
