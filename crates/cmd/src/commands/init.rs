//! Init command - scaffolds a new site directory
//!
//! Creates site.yaml, a starter stylesheet, the global assets folder, and
//! one example project so that `folio build` works immediately.
//!
//! Example:
//!   folio init --dir ~/my-site

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::common::resolve_site_dir;

const SITE_YAML: &str = r#"# Folio site configuration
site:
  title: My Portfolio
  description: Selected work
  # headshot: headshot.webp

# Optional path overrides (defaults shown)
# paths:
#   content: src/content
#   global_assets: src/global-assets
#   stylesheet: src/styles.css
#   output: .

# Optional markdown partials rendered into the gallery page
# partials:
#   intro: src/partials/intro.md
"#;

const STYLES_CSS: &str = r#":root {
  --bg: #faf8f5;
  --ink: #222;
  --accent: #8a6d4a;
}

* { box-sizing: border-box; }

body {
  margin: 0 auto;
  max-width: 960px;
  padding: 0 1rem 3rem;
  font-family: Georgia, serif;
  background: var(--bg);
  color: var(--ink);
}

header { text-align: center; padding: 2rem 0 1rem; }
.headshot { width: 120px; border-radius: 50%; }
.date { color: #777; font-size: 0.85rem; }

.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

.art-item {
  display: block;
  color: inherit;
  text-decoration: none;
  border: 1px solid #e2ddd4;
  border-radius: 6px;
  overflow: hidden;
  background: #fff;
}
.art-item img { width: 100%; aspect-ratio: 4 / 3; object-fit: cover; display: block; }
.art-item .description { padding: 0.75rem 1rem; }

.project-page { max-width: 720px; margin: 0 auto; }
.image-container img, .text-content img { max-width: 100%; }
.video-container { position: relative; padding-bottom: 56.25%; height: 0; }
.video-container iframe { position: absolute; top: 0; left: 0; width: 100%; height: 100%; }

.back-btn { display: inline-block; margin-top: 2rem; color: var(--accent); }
figcaption { color: #777; font-size: 0.85rem; text-align: center; }
"#;

const EXAMPLE_PROJECT: &str = r#"---
title: Example Project
description: A starter project to replace with your own work
publishedDate: 20240101
---
# Example Project

## About

This page was generated from src/content/example-project/index.md. Each
folder under src/content with an index.md becomes a page, and any other
files in the folder are copied alongside it as project assets.

Write **bold**, *italic*, and [links](https://example.com). Paste a
YouTube link with image syntax to embed a player.

- Edit site.yaml to set your own title
- Replace this project with your own work
- Run folio build
"#;

// 1x1 transparent GIF, the gallery's fallback cover image
const DEFAULT_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x21, 0xF9, 0x04, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x2C, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
    0x00, 0x02, 0x02, 0x44, 0x01, 0x00, 0x3B,
];

#[allow(clippy::print_stdout)]
pub fn init_command(dir: Option<PathBuf>) -> Result<()> {
    let site_dir = resolve_site_dir(dir);

    println!("Initializing site at: {}", site_dir.display());

    // Refuse to clobber an existing site
    if site_dir.join("site.yaml").exists() {
        return Err(anyhow!(
            "site.yaml already exists at {}",
            site_dir.display()
        ));
    }

    write_file(&site_dir.join("site.yaml"), SITE_YAML.as_bytes())?;
    write_file(&site_dir.join("src").join("styles.css"), STYLES_CSS.as_bytes())?;
    write_file(
        &site_dir
            .join("src")
            .join("global-assets")
            .join("default.gif"),
        DEFAULT_GIF,
    )?;
    write_file(
        &site_dir
            .join("src")
            .join("content")
            .join("example-project")
            .join("index.md"),
        EXAMPLE_PROJECT.as_bytes(),
    )?;

    println!("✅ Site initialized successfully");
    println!("Edit site.yaml, add projects under src/content/, then run 'folio build'");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_scaffolds_a_buildable_site() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let site = tmp.path().join("portfolio");

        init_command(Some(site.clone())).expect("init");

        assert!(site.join("site.yaml").is_file());
        assert!(site.join("src").join("styles.css").is_file());
        assert!(
            site.join("src")
                .join("global-assets")
                .join("default.gif")
                .is_file()
        );
        assert!(
            site.join("src")
                .join("content")
                .join("example-project")
                .join("index.md")
                .is_file()
        );
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let site = tmp.path().to_path_buf();

        init_command(Some(site.clone())).expect("first init");
        let err = init_command(Some(site)).expect_err("second init should fail");
        assert!(err.to_string().contains("already exists"));
    }
}
