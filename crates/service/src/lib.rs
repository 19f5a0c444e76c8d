//! Service layer providing the book operations on top of models.
//! - Separates business rules (not-found policy, partial-update merge) from data access.
//! - Reuses the entity definition in the `models` crate.

pub mod errors;
pub mod book;
#[cfg(test)]
pub mod test_support;

pub use book::BookService;
