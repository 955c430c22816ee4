use crate::{
    domain::collections::LetterCollection,
    infrastructure::source::{FetchError, LetterSource, Query, LETTER_COLUMNS},
};

/// Fetches the viewer's letters and orders them for display
#[derive(Debug, Clone)]
pub struct CollectionLoader<S> {
    source: S,
    query: Query,
}

impl<S: LetterSource> CollectionLoader<S> {
    /// Loader for rows of `table` whose `recipient_column` equals `viewer`
    pub fn new(
        source: S,
        table: impl Into<String>,
        recipient_column: impl Into<String>,
        viewer: impl Into<String>,
    ) -> Self {
        let query = Query::select(table, LETTER_COLUMNS).eq(recipient_column, viewer);
        Self { source, query }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// One fetch, no retry; the result is sorted newest first
    pub async fn load(&self) -> Result<LetterCollection, FetchError> {
        let rows = self.source.select(&self.query).await?;
        let fetched = rows.len();
        let letters = LetterCollection::from(rows);

        if letters.len() < fetched {
            log::warn!(
                "Dropped {} duplicate letter ids from {}",
                fetched - letters.len(),
                self.query.table
            );
        }
        let unparsable = letters
            .iter()
            .filter(|letter| letter.created_at_utc().is_none())
            .count();
        if unparsable > 0 {
            log::warn!("{unparsable} letters have an unreadable created_at and sort last");
        }
        log::info!("Fetched {} letters from {}", letters.len(), self.query.table);
        Ok(letters)
    }
}
