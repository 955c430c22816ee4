use std::path::Path;

use crate::{
    domain::letter::Letter,
    infrastructure::source::{FetchError, LetterSource, Query, LETTER_COLUMNS},
};

/// Rows held in memory, filtered like the backend would
///
/// Fixture files are JSON5, so plain JSON exports work as well as
/// hand-written files with comments.
#[derive(Debug, Clone, Default)]
pub struct MemoryLetterSource {
    rows: Vec<Letter>,
    failure: Option<String>,
}

impl MemoryLetterSource {
    pub fn new(rows: Vec<Letter>) -> Self {
        Self {
            rows,
            failure: None,
        }
    }

    /// A source whose every query fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            rows: vec![],
            failure: Some(reason.into()),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, FetchError> {
        let rows: Vec<Letter> = json5::from_str(json)?;
        Ok(Self::new(rows))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn rows(&self) -> &[Letter] {
        &self.rows
    }
}

impl LetterSource for MemoryLetterSource {
    async fn select(&self, query: &Query) -> Result<Vec<Letter>, FetchError> {
        if let Some(reason) = &self.failure {
            return Err(FetchError::Unavailable(reason.clone()));
        }
        // Fixture rows only carry the gallery columns
        if let Some(filter) = query
            .filters
            .iter()
            .find(|filter| !LETTER_COLUMNS.contains(&filter.column.as_str()))
        {
            log::warn!("Cannot filter fixture rows on `{}`", filter.column);
            return Err(FetchError::UnknownColumn(filter.column.clone()));
        }
        Ok(self
            .rows
            .iter()
            .filter(|letter| query.matches(letter))
            .cloned()
            .collect())
    }
}
