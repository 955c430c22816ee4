//! Domain layer
//!
//! Letters, their ordering, and the pure pagination arithmetic. Nothing in
//! here performs I/O.

pub mod collections;
pub mod letter;
pub mod pagination;
pub mod text;

pub use collections::LetterCollection;
pub use letter::{Letter, LetterId};
pub use pagination::{paginate, Page, PageSize, Slot};
