//! List command - shows the content catalog without building
//!
//! Useful for checking what a build would produce: which projects are
//! visible, which are hidden pages, and which were skipped and why.
//!
//! Example:
//!   folio list --json

use std::path::PathBuf;

use anyhow::Result;
use folio::{Catalog, Project, ProjectLayout, load_catalog};
use serde_json::json;

use crate::common::{load_site_config, resolve_site_dir};

#[allow(clippy::print_stdout)]
pub fn list_command(dir: Option<PathBuf>, vars: &[String], json: bool, verbose: bool) -> Result<()> {
    let site_dir = resolve_site_dir(dir);
    let config = load_site_config(&site_dir, vars)?;
    let content_dir = config.content_dir(&site_dir);
    let catalog = load_catalog(&content_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&manifest(&catalog))?);
        return Ok(());
    }

    println!("Projects in {}:", content_dir.display());
    for project in &catalog.visible {
        let date = project
            .published
            .map(|d| format!(" (published {})", d.full()))
            .unwrap_or_default();
        println!("  📄 {:<20} {}{}", project.id, project.title, date);
        if verbose {
            print_detail(project);
        }
    }

    if !catalog.hidden.is_empty() {
        println!("Hidden pages:");
        for project in &catalog.hidden {
            println!("  🔒 {:<20} {}", project.id, project.title);
            if verbose {
                print_detail(project);
            }
        }
    }

    if !catalog.skipped.is_empty() {
        println!("Skipped:");
        for skipped in &catalog.skipped {
            println!("  ⚠️ {}: {}", skipped.id, skipped.reason);
        }
    }

    if let Some(date) = catalog.last_updated {
        println!("Last updated: {}", date.full());
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_detail(project: &Project) {
    if let Some(updated) = project.updated {
        println!("       updated {}", updated.full());
    }
    if let Some(link) = &project.external_link {
        println!("       links to {}", link);
    }
    if project.layout == ProjectLayout::Plain {
        println!("       plain layout (no hero)");
    }
    if project.assets_dir.is_some() {
        println!("       has project assets");
    }
}

/// JSON manifest of the catalog, pages first, skip records after.
fn manifest(catalog: &Catalog) -> serde_json::Value {
    let project_entry = |project: &Project| {
        json!({
            "id": project.id,
            "title": project.title,
            "page": format!("{}.html", project.id),
            "published": project.published.map(|d| d.compact()),
            "updated": project.updated.map(|d| d.compact()),
            "hidden": project.hidden,
            "externalLink": project.external_link,
        })
    };
    json!({
        "lastUpdated": catalog.last_updated.map(|d| d.compact()),
        "projects": catalog
            .visible
            .iter()
            .chain(&catalog.hidden)
            .map(project_entry)
            .collect::<Vec<_>>(),
        "skipped": catalog
            .skipped
            .iter()
            .map(|s| json!({ "id": s.id, "reason": s.reason.to_string() }))
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_project(id: &str, hidden: bool) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            image: "default.gif".to_string(),
            alt: id.to_string(),
            published: Some("20240307".parse().expect("date")),
            updated: None,
            external_link: None,
            youtube: None,
            layout: ProjectLayout::Default,
            hidden,
            body: String::new(),
            meta: BTreeMap::new(),
            assets_dir: None,
        }
    }

    #[test]
    fn test_manifest_shape() {
        let catalog = Catalog {
            visible: vec![sample_project("clay-bust", false)],
            hidden: vec![sample_project("resume", true)],
            last_updated: Some("20240307".parse().expect("date")),
            ..Catalog::default()
        };

        let value = manifest(&catalog);
        assert_eq!(value["lastUpdated"], "20240307");
        assert_eq!(value["projects"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["projects"][0]["id"], "clay-bust");
        assert_eq!(value["projects"][0]["page"], "clay-bust.html");
        assert_eq!(value["projects"][0]["published"], "20240307");
        assert_eq!(value["projects"][1]["hidden"], true);
        assert_eq!(value["skipped"].as_array().map(Vec::len), Some(0));
    }
}
