// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for folio operations

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    #[error("Site config not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Content directory not found: {path}")]
    ContentDirNotFound { path: PathBuf },

    #[error("Invalid date '{value}': expected YYYYMMDD")]
    InvalidDate { value: String },

    #[error("Cannot read '{path}': {source}")]
    ReadPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write '{path}': {source}")]
    WritePage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
