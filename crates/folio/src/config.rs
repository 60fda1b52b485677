// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration, parsed from `site.yaml` in the site directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "My Portfolio"
///   description: "Projects from school and personal work"
///   headshot: "headshot.webp"
///
/// paths:
///   content: "src/content"
///   global_assets: "src/global-assets"
///   stylesheet: "src/styles.css"
///   output: "."
///
/// partials:
///   intro: "src/intro.md"
/// ```
///
/// Every `paths` entry is optional and defaults to the values above. All
/// paths are relative to the directory containing `site.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub partials: std::collections::BTreeMap<String, String>,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Header portrait, a file name inside the global assets directory.
    #[serde(default)]
    pub headshot: Option<String>,
}

/// Input and output locations, relative to the site directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_content")]
    pub content: String,
    #[serde(default = "default_global_assets")]
    pub global_assets: String,
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            content: default_content(),
            global_assets: default_global_assets(),
            stylesheet: default_stylesheet(),
            output: default_output(),
        }
    }
}

fn default_content() -> String {
    "src/content".to_string()
}

fn default_global_assets() -> String {
    "src/global-assets".to_string()
}

fn default_stylesheet() -> String {
    "src/styles.css".to_string()
}

fn default_output() -> String {
    ".".to_string()
}

impl SiteConfig {
    /// Parse a configuration from YAML text.
    pub fn parse(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read and parse `site.yaml` from a site directory.
    pub fn load(site_dir: &Path) -> Result<Self> {
        let path = site_dir.join("site.yaml");
        let yaml = std::fs::read_to_string(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound { path: path.clone() }
            } else {
                Error::Io(err)
            }
        })?;
        Self::parse(&yaml)
    }

    pub fn content_dir(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.paths.content)
    }

    pub fn global_assets_dir(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.paths.global_assets)
    }

    pub fn stylesheet_path(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.paths.stylesheet)
    }

    pub fn output_dir(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.paths.output)
    }

    /// Path of a named partial (e.g. "intro"), if configured.
    pub fn partial_path(&self, site_dir: &Path, name: &str) -> Option<PathBuf> {
        self.partials.get(name).map(|p| site_dir.join(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let yaml = r#"
site:
  title: "Test Site"
"#;
        let config = SiteConfig::parse(yaml).expect("parse config");
        assert_eq!(config.site.title, "Test Site");
        assert_eq!(config.site.description, "");
        assert!(config.site.headshot.is_none());
        assert_eq!(config.paths.content, "src/content");
        assert_eq!(config.paths.output, ".");
        assert!(config.partials.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
site:
  title: "My Portfolio"
  description: "Projects from school and personal work"
  headshot: "headshot.webp"

paths:
  content: "pages"
  output: "dist"

partials:
  intro: "src/intro.md"
"#;
        let config = SiteConfig::parse(yaml).expect("parse config");
        assert_eq!(config.site.headshot.as_deref(), Some("headshot.webp"));
        assert_eq!(config.paths.content, "pages");
        // Unspecified paths keep their defaults
        assert_eq!(config.paths.stylesheet, "src/styles.css");
        assert_eq!(config.paths.output, "dist");
        assert_eq!(config.partials.get("intro").map(String::as_str), Some("src/intro.md"));
    }

    #[test]
    fn paths_resolve_against_site_dir() {
        let yaml = "site:\n  title: T\n";
        let config = SiteConfig::parse(yaml).expect("parse config");
        let site_dir = Path::new("/srv/site");
        assert_eq!(config.content_dir(site_dir), Path::new("/srv/site/src/content"));
        assert_eq!(config.output_dir(site_dir), Path::new("/srv/site/."));
        assert_eq!(config.partial_path(site_dir, "intro"), None);
    }

    #[test]
    fn missing_title_is_an_error() {
        let yaml = "site:\n  description: no title\n";
        assert!(SiteConfig::parse(yaml).is_err());
    }

    #[test]
    fn load_reads_site_yaml_from_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("site.yaml"), "site:\n  title: Loaded\n")
            .expect("write config");
        let config = SiteConfig::load(dir.path()).expect("load config");
        assert_eq!(config.site.title, "Loaded");

        let err = SiteConfig::load(&dir.path().join("nowhere")).expect_err("should fail");
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }
}
