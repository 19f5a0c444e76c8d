use crate::book;
use super::setup_test_db;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use anyhow::Result;

fn new_book(title: &str, description: &str, rating: i32) -> book::ActiveModel {
    book::ActiveModel {
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        rating: Set(rating),
        ..Default::default()
    }
}

#[tokio::test]
async fn insert_assigns_increasing_ids() -> Result<()> {
    let db = setup_test_db().await?;

    let first = new_book("Dune", "A desert planet saga", 5).insert(&db).await?;
    let second = new_book("Emma", "Matchmaking in Highbury", 3).insert(&db).await?;

    assert_eq!(first.id, 1);
    assert!(second.id > first.id);
    assert_eq!(first.title, "Dune");
    assert_eq!(first.rating, 5);
    Ok(())
}

#[tokio::test]
async fn find_by_id_and_title() -> Result<()> {
    let db = setup_test_db().await?;
    let created = new_book("Dune", "A desert planet saga", 5).insert(&db).await?;

    let by_id = book::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(by_id.as_ref(), Some(&created));

    let by_title = book::Entity::find()
        .filter(book::Column::Title.eq("Dune"))
        .one(&db)
        .await?;
    assert_eq!(by_title, Some(created));

    let missing = book::Entity::find_by_id(999).one(&db).await?;
    assert!(missing.is_none());
    Ok(())
}

#[tokio::test]
async fn update_and_delete_rows() -> Result<()> {
    let db = setup_test_db().await?;
    let created = new_book("Dune", "A desert planet saga", 5).insert(&db).await?;

    let mut am: book::ActiveModel = created.clone().into();
    am.rating = Set(4);
    let updated = am.update(&db).await?;
    assert_eq!(updated.rating, 4);
    assert_eq!(updated.title, created.title);

    let res = book::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    let res = book::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 0);
    assert!(book::Entity::find().all(&db).await?.is_empty());
    Ok(())
}
