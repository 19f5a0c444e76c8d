use async_trait::async_trait;
use models::book;

use super::domain::NewBook;
use crate::errors::ServiceError;

/// Persistence operations behind the book service. Each method is one statement.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn insert(&self, input: NewBook) -> Result<book::Model, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<book::Model>, ServiceError>;
    /// First row whose title matches exactly; which one is unspecified when titles repeat.
    async fn find_by_title(&self, title: &str) -> Result<Option<book::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<book::Model>, ServiceError>;
    /// Overwrite title, description and rating of row `book.id`. Returns rows affected.
    async fn update(&self, book: book::Model) -> Result<u64, ServiceError>;
    /// Returns rows affected; zero when the id does not exist.
    async fn delete_by_id(&self, id: i32) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, book::Model>,
        last_id: i32,
    }

    /// Ids start at 1 and are never reused, like an auto-increment column.
    /// `failing()` builds a repository whose every call returns a database error.
    #[derive(Default)]
    pub struct MockBookRepository {
        table: Mutex<Table>,
        fail: bool,
    }

    impl MockBookRepository {
        pub fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        fn table(&self) -> MutexGuard<'_, Table> {
            self.table.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.fail {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl BookRepository for MockBookRepository {
        async fn insert(&self, input: NewBook) -> Result<book::Model, ServiceError> {
            self.check()?;
            let mut t = self.table();
            t.last_id += 1;
            let row = book::Model { id: t.last_id, title: input.title, description: input.description, rating: input.rating };
            t.rows.insert(row.id, row.clone());
            Ok(row)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<book::Model>, ServiceError> {
            self.check()?;
            Ok(self.table().rows.get(&id).cloned())
        }

        async fn find_by_title(&self, title: &str) -> Result<Option<book::Model>, ServiceError> {
            self.check()?;
            Ok(self.table().rows.values().find(|b| b.title == title).cloned())
        }

        async fn find_all(&self) -> Result<Vec<book::Model>, ServiceError> {
            self.check()?;
            Ok(self.table().rows.values().cloned().collect())
        }

        async fn update(&self, book: book::Model) -> Result<u64, ServiceError> {
            self.check()?;
            let mut t = self.table();
            match t.rows.get_mut(&book.id) {
                Some(row) => { *row = book; Ok(1) }
                None => Ok(0),
            }
        }

        async fn delete_by_id(&self, id: i32) -> Result<u64, ServiceError> {
            self.check()?;
            Ok(self.table().rows.remove(&id).map_or(0, |_| 1))
        }
    }
}
