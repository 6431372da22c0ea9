//! Word catalog loading.
//!
//! Catalogs are JSON, either a bare array of words or the legacy resource
//! layout that wraps the array as `{"items": [...]}`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use kanatype_core::word::Word;

pub const DEFAULT_CATALOG_JSON: &str = include_str!("default_words.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDoc {
    List(Vec<Word>),
    Wrapped { items: Vec<Word> },
}

pub fn parse_catalog(json: &str) -> Result<Vec<Word>, CatalogError> {
    let words = match serde_json::from_str::<CatalogDoc>(json)? {
        CatalogDoc::List(words) | CatalogDoc::Wrapped { items: words } => words,
    };
    debug!(word_count = words.len(), "parsed catalog");
    Ok(words)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Word>, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&json)
}

/// The embedded sample catalog.
pub fn default_catalog() -> Vec<Word> {
    parse_catalog(DEFAULT_CATALOG_JSON).expect("embedded catalog must be valid")
}
