use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::book::{repo::seaorm::SeaOrmBookRepository, repository::BookRepository, BookService};

/// Shared handler state. Cloning is cheap: the service sits behind an `Arc`
/// and the pool inside the repository is itself a handle.
#[derive(Clone)]
pub struct ServerState {
    pub books: Arc<BookService<dyn BookRepository>>,
}

impl ServerState {
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmBookRepository::new(db)))
    }

    pub fn with_repository(repo: Arc<dyn BookRepository>) -> Self {
        Self { books: Arc::new(BookService::new(repo)) }
    }
}
