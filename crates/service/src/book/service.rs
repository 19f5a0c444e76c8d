use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use models::book;

use super::domain::{BookPatch, NewBook};
use super::repository::BookRepository;
use crate::errors::ServiceError;

/// Book business service independent of web framework.
///
/// Owns the not-found policy and the partial-update merge; the repository
/// only runs single statements.
pub struct BookService<R: BookRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: BookRepository + ?Sized> BookService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Insert a book and return it with its store-assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::book::{service::BookService, repository::mock::MockBookRepository, domain::NewBook};
    /// use std::sync::Arc;
    /// let svc = BookService::new(Arc::new(MockBookRepository::default()));
    /// let input = NewBook { title: "Dune".into(), description: "A desert planet saga".into(), rating: 5 };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.title, "Dune");
    /// ```
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: NewBook) -> Result<book::Model, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(book_id = created.id, "book_created");
        Ok(created)
    }

    /// Ids that do not fit the `integer` column cannot name a row: NotFound.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<book::Model, ServiceError> {
        let Some(id) = row_id(id) else { return Err(ServiceError::not_found("book")) };
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("book"))
    }

    #[instrument(skip(self))]
    pub async fn get_by_title(&self, title: &str) -> Result<book::Model, ServiceError> {
        self.repo
            .find_by_title(title)
            .await?
            .ok_or_else(|| ServiceError::not_found("book"))
    }

    pub async fn list_all(&self) -> Result<Vec<book::Model>, ServiceError> {
        let books = self.repo.find_all().await?;
        debug!(count = books.len(), "books_listed");
        Ok(books)
    }

    /// Merge `patch` over the stored record and write the full row back.
    ///
    /// The read and the write are separate statements with no lock between
    /// them, so two concurrent updates of one id resolve as last writer wins.
    ///
    /// # Examples
    /// ```
    /// use service::book::{service::BookService, repository::mock::MockBookRepository, domain::{NewBook, BookPatch}};
    /// use std::sync::Arc;
    /// let svc = BookService::new(Arc::new(MockBookRepository::default()));
    /// let b = tokio_test::block_on(svc.create(NewBook { title: "Dune".into(), description: "Arrakis".into(), rating: 5 })).unwrap();
    /// tokio_test::block_on(svc.update(b.id.into(), BookPatch { rating: Some(4), ..Default::default() })).unwrap();
    /// let after = tokio_test::block_on(svc.get_by_id(b.id.into())).unwrap();
    /// assert_eq!((after.title.as_str(), after.rating), ("Dune", 4));
    /// ```
    #[instrument(skip(self, patch), fields(empty_patch = patch.is_empty()))]
    pub async fn update(&self, id: i64, patch: BookPatch) -> Result<(), ServiceError> {
        let existing = self.get_by_id(id).await?;
        let merged = patch.merge_into(existing);
        let affected = self.repo.update(merged).await?;
        if affected == 0 {
            // deleted between the read and the write
            warn!(book_id = id, "book_update_matched_no_rows");
        } else {
            info!(book_id = id, "book_updated");
        }
        Ok(())
    }

    /// Delete by id. Succeeds whether or not the row existed; an id outside
    /// the column range runs no statement.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let Some(id) = row_id(id) else {
            info!(book_id = id, rows_affected = 0, "book_deleted");
            return Ok(());
        };
        let affected = self.repo.delete_by_id(id).await?;
        info!(book_id = id, rows_affected = affected, "book_deleted");
        Ok(())
    }
}

/// Primary keys are `integer`; anything wider matches no row.
fn row_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
