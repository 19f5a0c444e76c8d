use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use models::book;

use crate::book::domain::NewBook;
use crate::book::repository::BookRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation. Each call checks a connection
/// out of the pool and returns it when the statement completes or fails.
#[derive(Clone)]
pub struct SeaOrmBookRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn insert(&self, input: NewBook) -> Result<book::Model, ServiceError> {
        let am = book::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            rating: Set(input.rating),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<book::Model>, ServiceError> {
        book::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<book::Model>, ServiceError> {
        book::Entity::find()
            .filter(book::Column::Title.eq(title))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_all(&self) -> Result<Vec<book::Model>, ServiceError> {
        book::Entity::find()
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn update(&self, b: book::Model) -> Result<u64, ServiceError> {
        // UPDATE books SET title, description, rating WHERE id; zero rows is not an error here
        let res = book::Entity::update_many()
            .set(book::ActiveModel {
                title: Set(b.title),
                description: Set(b.description),
                rating: Set(b.rating),
                ..Default::default()
            })
            .filter(book::Column::Id.eq(b.id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, ServiceError> {
        let res = book::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn dune() -> NewBook {
        NewBook { title: "Dune".into(), description: "A desert planet saga".into(), rating: 5 }
    }

    #[tokio::test]
    async fn update_overwrites_all_columns_of_one_row() -> anyhow::Result<()> {
        let repo = SeaOrmBookRepository::new(get_db().await?);
        let a = repo.insert(dune()).await?;
        let b = repo.insert(NewBook { title: "Emma".into(), description: "Highbury".into(), rating: 3 }).await?;

        let affected = repo
            .update(book::Model { id: a.id, title: "Dune Messiah".into(), description: "Sequel".into(), rating: 4 })
            .await?;
        assert_eq!(affected, 1);

        let a2 = repo.find_by_id(a.id).await?.expect("row a");
        assert_eq!((a2.title.as_str(), a2.description.as_str(), a2.rating), ("Dune Messiah", "Sequel", 4));
        assert_eq!(repo.find_by_id(b.id).await?, Some(b));
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_row_affect_nothing() -> anyhow::Result<()> {
        let repo = SeaOrmBookRepository::new(get_db().await?);
        let ghost = book::Model { id: 42, title: "t".into(), description: "d".into(), rating: 1 };
        assert_eq!(repo.update(ghost).await?, 0);
        assert_eq!(repo.delete_by_id(42).await?, 0);
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn find_by_title_is_exact_match() -> anyhow::Result<()> {
        let repo = SeaOrmBookRepository::new(get_db().await?);
        repo.insert(dune()).await?;
        assert!(repo.find_by_title("Dune").await?.is_some());
        assert!(repo.find_by_title("dune").await?.is_none());
        assert!(repo.find_by_title("Dun").await?.is_none());
        Ok(())
    }
}
