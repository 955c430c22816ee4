use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use std::ops::{Deref, Index};
use std::slice::Iter;
use std::vec::IntoIter;

use serde::{Deserialize, Serialize};

use crate::domain::letter::{Letter, LetterId, SortableLetter};

/// Letters ordered newest first, deduplicated by id
///
/// Ordering follows [`SortableLetter`] in reverse: most recent `created_at`
/// first, unparsable timestamps last. Letters sharing a timestamp fall back
/// to the higher id first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Letter>", into = "Vec<Letter>")]
pub struct LetterCollection {
    letters: Vec<Letter>,
    letter_ids: HashSet<LetterId>,
}

impl LetterCollection {
    /// Creates a new empty collection
    pub fn new() -> Self {
        Self {
            letters: Vec::new(),
            letter_ids: HashSet::new(),
        }
    }

    /// Checks if a letter id is contained in the collection
    pub fn contains(&self, id: &LetterId) -> bool {
        self.letter_ids.contains(id)
    }

    /// Finds a letter by id
    pub fn find(&self, id: LetterId) -> Option<&Letter> {
        if !self.contains(&id) {
            return None;
        }
        self.letters.iter().find(|letter| letter.id == id)
    }

    /// Returns the letters in display order
    pub fn as_slice(&self) -> &[Letter] {
        &self.letters
    }

    pub fn into_vec(self) -> Vec<Letter> {
        self.letters
    }

    /// Appends letters, dropping ids already present, and restores the order
    fn absorb<I: IntoIterator<Item = Letter>>(&mut self, iter: I) {
        for letter in iter {
            if self.letter_ids.insert(letter.id) {
                self.letters.push(letter);
            }
        }
        self.letters
            .sort_by_cached_key(|letter| Reverse(SortableLetter::from_letter(letter)));
        debug_assert_eq!(self.letters.len(), self.letter_ids.len());
    }
}

// === Standard library trait implementations ===

impl Default for LetterCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for LetterCollection {
    type Target = [Letter];

    fn deref(&self) -> &Self::Target {
        &self.letters
    }
}

impl Index<usize> for LetterCollection {
    type Output = Letter;

    fn index(&self, index: usize) -> &Self::Output {
        &self.letters[index]
    }
}

impl AsRef<[Letter]> for LetterCollection {
    fn as_ref(&self) -> &[Letter] {
        &self.letters
    }
}

impl IntoIterator for LetterCollection {
    type Item = Letter;
    type IntoIter = IntoIter<Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.into_iter()
    }
}

impl<'a> IntoIterator for &'a LetterCollection {
    type Item = &'a Letter;
    type IntoIter = Iter<'a, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl FromIterator<Letter> for LetterCollection {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        let mut letters = Self::new();
        letters.absorb(iter);
        letters
    }
}

impl Extend<Letter> for LetterCollection {
    fn extend<T: IntoIterator<Item = Letter>>(&mut self, iter: T) {
        self.absorb(iter);
    }
}

impl From<Vec<Letter>> for LetterCollection {
    fn from(letters: Vec<Letter>) -> Self {
        letters.into_iter().collect()
    }
}

impl From<LetterCollection> for Vec<Letter> {
    fn from(collection: LetterCollection) -> Self {
        collection.letters
    }
}

impl fmt::Display for LetterCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterCollection[{} letters]", self.len())
    }
}
