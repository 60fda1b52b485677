// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The markdown dialect used by project pages.
//!
//! A fixed chain of substitution passes turns page bodies into HTML:
//! media embeds first, then the `#` title strip, shifted headers, inline
//! emphasis, links, list items, list runs, and finally paragraph wrapping.
//!
//! ## Why not a CommonMark parser?
//!
//! The content files were written against this exact dialect, quirks
//! included: headers shift down one level because the layout owns `<h2>`,
//! every link opens in a new tab, `![...]` can embed a YouTube player, and
//! an optional `{caption}` suffix wraps media in `<figure>`. A real
//! markdown parser would render those pages differently. The chain is
//! small, stateless, and does no HTML escaping; page authors write
//! trusted content.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// ─── Media context ───────────────────────────────────────────────────────────

/// Where media paths resolve to. Project pages rewrite relative paths into
/// the per-project assets tree; site partials (no project id) only get the
/// shared `global-assets` rewrite.
#[derive(Debug, Clone, Copy)]
pub struct MediaContext<'a> {
    pub project: Option<&'a str>,
}

impl<'a> MediaContext<'a> {
    /// Media belongs to one project's asset directory.
    pub fn for_project(id: &'a str) -> Self {
        MediaContext { project: Some(id) }
    }

    /// Media for site-level partials such as the gallery intro.
    pub fn site() -> Self {
        MediaContext { project: None }
    }
}

// ─── Patterns ────────────────────────────────────────────────────────────────

static MEDIA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)(?:\s*\{([^}]+)\})?").expect("media pattern")
});

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|playlist\?list=)|youtu\.be/)([A-Za-z0-9_-]+)")
        .expect("youtube pattern")
});

static HERO_YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([A-Za-z0-9_-]+)")
        .expect("hero youtube pattern")
});

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# .*$").expect("title pattern"));

static H3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").expect("h3 pattern"));

static H4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").expect("h4 pattern"));

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));

static EM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("emphasis pattern"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.*?)`").expect("code pattern"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern"));

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- (.+)$").expect("list item pattern"));

// Runs joined by single newlines only. A blank line ends the list, so a
// paragraph after a list keeps its own block.
static LIST_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^<li>.*</li>(?:\n<li>.*</li>)*").expect("list run pattern")
});

// Blocks that stand on their own; everything else becomes a paragraph.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<(?:h\d|ul|figure|div class="video)"#).expect("block pattern")
});

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Render a page body to HTML.
///
/// Pass order matters: media runs first so image syntax never reaches the
/// link pass, and list items are wrapped before paragraph splitting.
pub fn render(text: &str, media: &MediaContext) -> String {
    let html = MEDIA_RE.replace_all(text, |caps: &Captures| render_media(caps, media));
    let html = TITLE_RE.replace_all(&html, "");
    let html = H3_RE.replace_all(&html, "<h3>${1}</h3>");
    let html = H4_RE.replace_all(&html, "<h4>${1}</h4>");
    let html = BOLD_RE.replace_all(&html, "<strong>${1}</strong>");
    let html = EM_RE.replace_all(&html, "<em>${1}</em>");
    let html = CODE_RE.replace_all(&html, "<code>${1}</code>");
    let html = LINK_RE.replace_all(
        &html,
        r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
    );
    let html = LIST_ITEM_RE.replace_all(&html, "<li>${1}</li>");
    let html = LIST_RUN_RE.replace_all(&html, |caps: &Captures| {
        format!("<ul>{}</ul>", &caps[0])
    });
    wrap_paragraphs(&html)
}

/// Expand one `![alt](src)` match, with optional `{caption}` suffix.
fn render_media(caps: &Captures, media: &MediaContext) -> String {
    let alt = caps.get(1).map_or("", |m| m.as_str());
    let src = &caps[2];
    let caption = caps.get(3).map(|m| m.as_str());

    let rendered = if let Some(yt) = YOUTUBE_RE.captures(src) {
        let embed = body_embed_url(&yt[1], src.contains("playlist"));
        format!(
            r#"<div class="video-container"><iframe src="{embed}" frameborder="0" allowfullscreen allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"></iframe></div>"#
        )
    } else {
        let resolved = resolve_media_src(src, media);
        format!(r#"<img src="{resolved}" alt="{alt}" loading="lazy">"#)
    };

    match caption {
        Some(c) => format!("<figure>{rendered}<figcaption>{c}</figcaption></figure>"),
        None => rendered,
    }
}

fn body_embed_url(id: &str, playlist: bool) -> String {
    if playlist {
        format!("https://www.youtube.com/embed/videoseries?list={id}")
    } else {
        format!("https://www.youtube.com/embed/{id}")
    }
}

/// Embed URL for the detail-page hero, from the `youtube` frontmatter key.
///
/// Accepts a watch / embed / youtu.be URL, or a bare video id.
pub fn hero_embed_url(value: &str) -> String {
    let id = HERO_YOUTUBE_RE
        .captures(value)
        .map_or(value, |caps| caps.get(1).map_or(value, |m| m.as_str()));
    format!("https://www.youtube.com/embed/{id}")
}

/// Rewrite a media source path into the generated assets tree.
fn resolve_media_src(src: &str, media: &MediaContext) -> String {
    match media.project {
        Some(id) => {
            if let Some(rest) = src.strip_prefix("./") {
                format!("assets/projects/{id}/{rest}")
            } else if let Some(rest) = src.strip_prefix("../global-assets/") {
                format!("assets/global/{rest}")
            } else if !src.starts_with("http") {
                format!("assets/projects/{id}/{src}")
            } else {
                src.to_string()
            }
        }
        None => match src.strip_prefix("../global-assets/") {
            Some(rest) => format!("assets/global/{rest}"),
            None => src.to_string(),
        },
    }
}

/// Split on blank lines and wrap prose blocks in `<p>`.
fn wrap_paragraphs(html: &str) -> String {
    html.split("\n\n")
        .filter_map(|block| {
            let block = block.trim();
            if block.is_empty() {
                None
            } else if BLOCK_RE.is_match(block) {
                Some(block.to_string())
            } else {
                Some(format!("<p>{block}</p>"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
