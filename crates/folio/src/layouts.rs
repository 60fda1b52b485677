// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Maud HTML layouts for the generated pages.
//!
//! Two full-document layouts: the gallery index and the per-project detail
//! page. Rendered markdown is injected pre-escaped; plain metadata fields
//! (titles, descriptions, alt text) go through maud's escaping.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::config::SiteMeta;
use crate::content::{Project, ProjectLayout};
use crate::dates::CompactDate;
use crate::markdown;

/// Folio version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Context for the gallery index page.
pub struct GalleryContext<'a> {
    /// Site metadata (title, description, headshot)
    pub site: &'a SiteMeta,
    /// Rendered intro partial, if configured
    pub intro_html: Option<&'a str>,
    /// Freshest content date across the whole site
    pub last_updated: Option<CompactDate>,
    /// Visible projects, already sorted newest first
    pub projects: &'a [Project],
}

/// Context for one project detail page.
pub struct DetailContext<'a> {
    pub site: &'a SiteMeta,
    pub project: &'a Project,
    /// Rendered markdown body
    pub body_html: &'a str,
}

/// Render the gallery index (`index.html`).
pub fn gallery_page(ctx: &GalleryContext) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("Folio v{}", VERSION));
                meta name="description" content=(ctx.site.description);
                title { (ctx.site.title) }
                link rel="preload" href="styles.css" as="style";
                link rel="stylesheet" href="styles.css";
            }
            body {
                header {
                    @if let Some(headshot) = &ctx.site.headshot {
                        img src=(format!("assets/global/{headshot}")) alt=(ctx.site.title)
                            class="headshot" loading="eager";
                    }
                    a href="index.html" { h1 { (ctx.site.title) } }
                    @if let Some(intro) = ctx.intro_html {
                        div class="intro" { (PreEscaped(intro)) }
                    }
                    @if let Some(date) = ctx.last_updated {
                        p id="last-updated" class="date" { "Last updated " (date.full()) }
                    } @else {
                        p id="last-updated" {}
                    }
                }
                main {
                    div class="gallery" {
                        @for project in ctx.projects {
                            (gallery_item(project))
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

/// One gallery card. External links open in a new tab; everything else goes
/// to the project's own page.
fn gallery_item(project: &Project) -> Markup {
    let external = project.external_link.is_some();
    let href = project
        .external_link
        .clone()
        .unwrap_or_else(|| format!("{}.html", project.id));
    html! {
        a href=(href)
            target=[external.then_some("_blank")]
            rel=[external.then_some("noopener noreferrer")]
            class="art-item" {
            img src=(project.cover_path()) alt=(project.alt) loading="lazy"
                onerror="this.src='./assets/global/default.gif'";
            div class="description" {
                h3 { (project.title) }
                p { (project.description) }
                @if let Some(date) = project.published {
                    div class="date" { "Published " (date.month_year()) }
                }
            }
        }
    }
}

/// Render a project detail page (`<id>.html`).
pub fn detail_page(ctx: &DetailContext) -> String {
    let project = ctx.project;
    let description = if project.description.is_empty() {
        &project.title
    } else {
        &project.description
    };
    let date_line = match (project.published, project.updated) {
        (Some(p), Some(u)) => Some(format!("Published {} • Updated {}", p.full(), u.full())),
        (Some(p), None) => Some(format!("Published {}", p.full())),
        (None, Some(u)) => Some(format!("Updated {}", u.full())),
        (None, None) => None,
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("Folio v{}", VERSION));
                meta name="description" content=(description);
                title { (project.title) " - " (ctx.site.title) }
                link rel="preload" href="styles.css" as="style";
                link rel="stylesheet" href="styles.css";
            }
            body {
                header {
                    a href="index.html" { h1 { (ctx.site.title) } }
                }
                main class="project-page" {
                    h2 { (project.title) }
                    @if let Some(line) = &date_line {
                        p class="date" { (line) }
                    }
                    @if project.layout == ProjectLayout::Default {
                        (hero(project))
                    }
                    div class="text-content" {
                        (PreEscaped(ctx.body_html))
                    }
                    div style="text-align: center;" {
                        a href="index.html" class="back-btn" { "← Back to Projects" }
                    }
                }
            }
        }
    }
    .into_string()
}

/// Hero media above the body: the frontmatter video when set, else the
/// cover image.
fn hero(project: &Project) -> Markup {
    html! {
        @if let Some(youtube) = &project.youtube {
            div class="video-container" {
                iframe src=(markdown::hero_embed_url(youtube))
                    frameborder="0"
                    allowfullscreen
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" {}
            }
        } @else {
            div class="image-container" {
                img src=(project.cover_path()) alt=(project.alt) loading="lazy"
                    onerror="this.src='./assets/global/default.gif'";
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn site() -> SiteMeta {
        SiteMeta {
            title: "Test Portfolio".to_string(),
            description: "Things I made".to_string(),
            headshot: Some("headshot.webp".to_string()),
        }
    }

    fn sample_project() -> Project {
        Project {
            id: "clay-bust".to_string(),
            title: "Clay Bust".to_string(),
            description: "A sculpture study".to_string(),
            image: "cover.webp".to_string(),
            alt: "Clay Bust".to_string(),
            published: Some("20240307".parse().expect("date")),
            updated: None,
            external_link: None,
            youtube: None,
            layout: ProjectLayout::Default,
            hidden: false,
            body: String::new(),
            meta: BTreeMap::new(),
            assets_dir: None,
        }
    }

    #[test]
    fn test_gallery_page() {
        let site = site();
        let projects = vec![sample_project()];
        let html = gallery_page(&GalleryContext {
            site: &site,
            intro_html: Some("<p>Hi, I make things.</p>"),
            last_updated: Some("20240615".parse().expect("date")),
            projects: &projects,
        });

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>Test Portfolio</title>"));
        assert!(html.contains(r#"<a href="index.html"><h1>Test Portfolio</h1></a>"#));
        assert!(html.contains(r#"meta name="description" content="Things I made""#));
        assert!(html.contains(r#"link rel="preload" href="styles.css" as="style""#));
        assert!(html.contains(r#"src="assets/global/headshot.webp""#));
        assert!(html.contains(r#"loading="eager""#));
        assert!(html.contains("<p>Hi, I make things.</p>")); // intro not escaped
        assert!(html.contains("Last updated Jun 15, 2024"));
        assert!(html.contains(r#"a href="clay-bust.html" class="art-item""#));
        assert!(html.contains("<h3>Clay Bust</h3>"));
        assert!(html.contains("Published Mar 2024"));
        assert!(html.contains("onerror=\"this.src='./assets/global/default.gif'\""));
        assert!(html.contains(&format!("Folio v{}", VERSION)));
    }

    #[test]
    fn test_gallery_external_link_card() {
        let site = site();
        let mut project = sample_project();
        project.external_link = Some("https://itch.example/game".to_string());
        let projects = vec![project];
        let html = gallery_page(&GalleryContext {
            site: &site,
            intro_html: None,
            last_updated: None,
            projects: &projects,
        });

        assert!(html.contains(r#"a href="https://itch.example/game""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        // No date known site-wide: the placeholder stays, without text
        assert!(html.contains(r#"<p id="last-updated"></p>"#));
        assert!(!html.contains("Last updated"));
    }

    #[test]
    fn test_detail_page_with_update() {
        let site = site();
        let mut project = sample_project();
        project.updated = Some("20240901".parse().expect("date"));
        let html = detail_page(&DetailContext {
            site: &site,
            project: &project,
            body_html: "<p>Body here.</p>",
        });

        assert!(html.contains("<title>Clay Bust - Test Portfolio</title>"));
        assert!(html.contains("<h2>Clay Bust</h2>"));
        assert!(html.contains("Published Mar 7, 2024 • Updated Sep 1, 2024"));
        assert!(html.contains(r#"<div class="image-container">"#));
        assert!(html.contains(r#"src="assets/projects/clay-bust/cover.webp""#));
        assert!(html.contains(r#"<div class="text-content"><p>Body here.</p></div>"#));
        assert!(html.contains(r#"class="back-btn""#));
        assert!(html.contains("← Back to Projects"));
    }

    #[test]
    fn test_detail_page_youtube_hero() {
        let site = site();
        let mut project = sample_project();
        project.youtube = Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string());
        let html = detail_page(&DetailContext {
            site: &site,
            project: &project,
            body_html: "",
        });

        assert!(html.contains(r#"<div class="video-container">"#));
        assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
        assert!(!html.contains("image-container"));
    }

    #[test]
    fn test_plain_layout_has_no_hero() {
        let site = site();
        let mut project = sample_project();
        project.layout = ProjectLayout::Plain;
        let html = detail_page(&DetailContext {
            site: &site,
            project: &project,
            body_html: "<p>Resume text.</p>",
        });

        assert!(!html.contains("image-container"));
        assert!(!html.contains("video-container"));
        assert!(html.contains("<p>Resume text.</p>"));
    }

    #[test]
    fn test_metadata_is_escaped_but_body_is_not() {
        let site = SiteMeta {
            title: "Art & Code".to_string(),
            description: String::new(),
            headshot: None,
        };
        let mut project = sample_project();
        project.title = "Pots & Pans".to_string();
        let html = detail_page(&DetailContext {
            site: &site,
            project: &project,
            body_html: "<p>raw <em>html</em></p>",
        });

        assert!(html.contains("Pots &amp; Pans - Art &amp; Code"));
        assert!(html.contains("<p>raw <em>html</em></p>"));
    }

    #[test]
    fn test_detail_description_falls_back_to_title() {
        let site = site();
        let mut project = sample_project();
        project.description = String::new();
        let html = detail_page(&DetailContext {
            site: &site,
            project: &project,
            body_html: "",
        });
        assert!(html.contains(r#"meta name="description" content="Clay Bust""#));
    }
}
