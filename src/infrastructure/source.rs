//! Data sources for letters
//!
//! A [`LetterSource`] answers a [`Query`]: a table, the columns to select and
//! a list of column equality filters. The hosted backend is reached through
//! [`RestLetterSource`]; [`MemoryLetterSource`] serves fixture rows for
//! offline use and tests.

use std::future::Future;

use thiserror::Error;

use crate::domain::letter::Letter;

mod memory;
mod rest;

pub use memory::MemoryLetterSource;
pub use rest::RestLetterSource;

/// Columns the gallery reads from the letters table
pub const LETTER_COLUMNS: [&str; 3] = ["id", "created_at", "receiver"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed fixture: {0}")]
    Fixture(#[from] json5::Error),

    #[error("could not read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture rows have no column `{0}`")]
    UnknownColumn(String),

    #[error("{0}")]
    Unavailable(String),
}

/// `column = value` filter, compared on the column's string form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub table: String,
    pub columns: Vec<String>,
    pub filters: Vec<Filter>,
}

impl Query {
    pub fn select<I, S>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            filters: vec![],
        }
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// `select` query parameter, e.g. `id,created_at,receiver`
    pub fn select_param(&self) -> String {
        self.columns.join(",")
    }

    /// Whether a row passes every filter; unknown columns never match
    pub fn matches(&self, letter: &Letter) -> bool {
        self.filters
            .iter()
            .all(|filter| letter.column(&filter.column).as_deref() == Some(filter.value.as_str()))
    }
}

/// Something that can answer letter queries
pub trait LetterSource: Send + Sync {
    fn select(&self, query: &Query) -> impl Future<Output = Result<Vec<Letter>, FetchError>> + Send;
}
