// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Project discovery: turns the content directory into a [`Catalog`].
//!
//! A project is either a folder `<id>/index.md` (with its assets beside it)
//! or a flat `<id>.md` file from the older layout. Folders win when both
//! exist. The scan is lexicographic so builds are reproducible.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::dates::CompactDate;
use crate::error::{Error, Result};
use crate::frontmatter;

/// One portfolio project, parsed from its markdown page.
#[derive(Debug, Clone)]
pub struct Project {
    /// Folder or file stem; also the output page name (`<id>.html`)
    pub id: String,
    /// Display title. Default: "Untitled"
    pub title: String,
    /// Gallery card blurb. Default: empty
    pub description: String,
    /// Cover image (frontmatter `image`). Default: "default.gif"
    pub image: String,
    /// Cover alt text. Default: the title
    pub alt: String,
    /// Frontmatter `publishedDate`; absent means the project never
    /// reaches the gallery
    pub published: Option<CompactDate>,
    /// Frontmatter `lastUpdated`
    pub updated: Option<CompactDate>,
    /// Frontmatter `externalLink`, which replaces the detail-page link on
    /// the gallery card
    pub external_link: Option<String>,
    /// Frontmatter `youtube`: detail-page hero video (URL or bare id)
    pub youtube: Option<String>,
    /// Detail-page layout selector
    pub layout: ProjectLayout,
    /// Frontmatter `hidden: true`; the page is generated but never listed
    pub hidden: bool,
    /// Markdown body (everything after the frontmatter block)
    pub body: String,
    /// The full raw frontmatter map
    pub meta: BTreeMap<String, String>,
    /// Asset folder for folder-based projects (None for flat files)
    pub assets_dir: Option<PathBuf>,
}

/// Detail-page layout, selected by frontmatter `layout:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLayout {
    /// Hero media above the body
    Default,
    /// No hero section (resume-style pages)
    Plain,
}

impl Project {
    /// Where the cover image lands in the output tree.
    ///
    /// `../global-assets/<name>` covers come from the shared pool; anything
    /// else is looked up in the project's own asset directory.
    pub fn cover_path(&self) -> String {
        match self.image.strip_prefix("../global-assets/") {
            Some(rest) => format!("assets/global/{rest}"),
            None => format!("assets/projects/{}/{}", self.id, self.image),
        }
    }
}

/// A document the scan found but will not render.
#[derive(Debug, Clone)]
pub struct Skipped {
    pub id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Not hidden and no `publishedDate`
    Unpublished,
    /// A date field failed to parse
    BadDate { value: String },
    /// The markdown file could not be read
    Unreadable { message: String },
    /// Flat `<id>.md` shadowed by a folder with the same id
    DuplicateId,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unpublished => write!(f, "no publishedDate"),
            SkipReason::BadDate { value } => write!(f, "invalid date '{value}'"),
            SkipReason::Unreadable { message } => write!(f, "unreadable: {message}"),
            SkipReason::DuplicateId => write!(f, "shadowed by folder with same id"),
        }
    }
}

/// Everything the content directory produced, classified.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Gallery projects, sorted by publish date descending (ties by id)
    pub visible: Vec<Project>,
    /// Pages rendered but never listed
    pub hidden: Vec<Project>,
    /// Documents dropped from the build, with reasons
    pub skipped: Vec<Skipped>,
    /// Freshest `lastUpdated`-or-`publishedDate` across every parsed
    /// project, including hidden and skipped ones
    pub last_updated: Option<CompactDate>,
}

/// Scan the content directory and classify every project.
///
/// Per-project failures (unreadable file, bad date) are logged and recorded
/// in [`Catalog::skipped`]; they never abort the scan.
pub fn load_catalog(content_dir: &Path) -> Result<Catalog> {
    if !content_dir.is_dir() {
        return Err(Error::ContentDirNotFound { path: content_dir.to_path_buf() });
    }

    let mut names: Vec<String> = std::fs::read_dir(content_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    // Folder ids are known up front so flat duplicates can be shadowed.
    let folder_ids: BTreeSet<String> = names
        .iter()
        .filter(|name| content_dir.join(name).join("index.md").is_file())
        .cloned()
        .collect();

    let mut catalog = Catalog::default();

    for name in &names {
        let path = content_dir.join(name);
        let (id, md_path, assets_dir) = if path.is_dir() {
            if !folder_ids.contains(name) {
                continue; // folder without index.md
            }
            (name.clone(), path.join("index.md"), Some(path.clone()))
        } else if let Some(stem) = name.strip_suffix(".md") {
            if folder_ids.contains(stem) {
                diagnostics::log_warn!(
                    "Flat page {name} shadowed by folder project with the same id",
                    name: name.as_str()
                );
                catalog.skipped.push(Skipped {
                    id: stem.to_string(),
                    reason: SkipReason::DuplicateId,
                });
                continue;
            }
            (stem.to_string(), path.clone(), None)
        } else {
            continue; // stray non-markdown file
        };

        match load_project(&id, &md_path, assets_dir) {
            Ok(project) => classify(project, &mut catalog),
            Err(reason) => {
                diagnostics::log_warn!(
                    "Skipping {id}: {reason}",
                    id: id.as_str(),
                    reason: reason.to_string()
                );
                catalog.skipped.push(Skipped { id, reason });
            }
        }
    }

    catalog
        .visible
        .sort_by(|a, b| b.published.cmp(&a.published).then_with(|| a.id.cmp(&b.id)));

    Ok(catalog)
}

/// Parse one markdown file into a [`Project`].
fn load_project(
    id: &str,
    md_path: &Path,
    assets_dir: Option<PathBuf>,
) -> std::result::Result<Project, SkipReason> {
    let raw = std::fs::read_to_string(md_path)
        .map_err(|e| SkipReason::Unreadable { message: e.to_string() })?;
    let doc = frontmatter::parse_document(&raw);
    let meta = doc.meta;

    let get = |key: &str| meta.get(key).filter(|v| !v.is_empty()).cloned();

    let title = get("title").unwrap_or_else(|| "Untitled".to_string());
    let layout = match meta.get("layout").map(String::as_str) {
        Some("plain") => ProjectLayout::Plain,
        _ => ProjectLayout::Default,
    };

    Ok(Project {
        id: id.to_string(),
        title: title.clone(),
        description: get("description").unwrap_or_default(),
        image: get("image").unwrap_or_else(|| "default.gif".to_string()),
        alt: get("alt").unwrap_or(title),
        published: parse_date(get("publishedDate"))?,
        updated: parse_date(get("lastUpdated"))?,
        external_link: get("externalLink"),
        youtube: get("youtube"),
        layout,
        hidden: meta.get("hidden").map(String::as_str) == Some("true"),
        body: doc.body,
        meta,
        assets_dir,
    })
}

fn parse_date(value: Option<String>) -> std::result::Result<Option<CompactDate>, SkipReason> {
    match value {
        Some(s) => s
            .parse::<CompactDate>()
            .map(Some)
            .map_err(|_| SkipReason::BadDate { value: s }),
        None => Ok(None),
    }
}

/// Route a parsed project into the catalog and fold its freshness date.
fn classify(project: Project, catalog: &mut Catalog) {
    // Hidden and unpublished pages still count toward site freshness.
    if let Some(date) = project.updated.or(project.published) {
        catalog.last_updated = Some(catalog.last_updated.map_or(date, |cur| cur.max(date)));
    }

    if project.hidden {
        diagnostics::log_debug!("Project {id} is hidden", id: project.id.as_str());
        catalog.hidden.push(project);
    } else if project.published.is_none() {
        diagnostics::log_info!(
            "Skipping {id} (no publishedDate)",
            id: project.id.as_str()
        );
        catalog.skipped.push(Skipped {
            id: project.id,
            reason: SkipReason::Unpublished,
        });
    } else {
        catalog.visible.push(project);
    }
}
