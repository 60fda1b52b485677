// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! # Folio: portfolio static site generator
//!
//! Reads Markdown project pages with frontmatter metadata and renders a
//! complete portfolio site: a gallery index, one detail page per project,
//! and a populated `assets/` tree.
//!
//! ## Usage
//!
//! ```bash
//! folio build ./dist
//! ```
//!
//! The pipeline lives in [`build_site`]: clean the output directory, load
//! projects from the content directory, render each page through the
//! markdown dialect and the maud layouts, then copy assets.

mod assets;
mod config;
mod content;
mod dates;
mod error;
mod frontmatter;
pub mod layouts;
pub mod markdown;
mod site;

pub use assets::{clean_output, copy_assets};
pub use config::{PathsConfig, SiteConfig, SiteMeta};
pub use content::{Catalog, Project, ProjectLayout, Skipped, SkipReason, load_catalog};
pub use dates::CompactDate;
pub use error::{Error, Result};
pub use frontmatter::{Document, parse_document};
pub use site::{BuildSummary, build_site};
