use axum::{extract::{Path, State}, Json};
use common::types::Message;
use models::book;
use service::book::domain::{BookPatch, NewBook};
use tracing::info;

use crate::{errors::JsonApiError, metrics, state::ServerState};

#[utoipa::path(
    post, path = "/books/", tag = "books",
    request_body = crate::openapi::NewBookDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::BookDoc),
        (status = 422, description = "Malformed body"),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_book(
    State(state): State<ServerState>,
    Json(input): Json<NewBook>,
) -> Result<Json<book::Model>, JsonApiError> {
    let _timer = metrics::observe("create");
    let created = state.books.create(input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/books/{id}", tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BookDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_book(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<book::Model>, JsonApiError> {
    let _timer = metrics::observe("get_by_id");
    let found = state.books.get_by_id(id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/books/title/{title}", tag = "books",
    params(("title" = String, Path, description = "Exact title")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BookDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_book_by_title(
    State(state): State<ServerState>,
    Path(title): Path<String>,
) -> Result<Json<book::Model>, JsonApiError> {
    let _timer = metrics::observe("get_by_title");
    let found = state.books.get_by_title(&title).await?;
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/books/", tag = "books",
    responses(
        (status = 200, description = "All books, possibly empty", body = [crate::openapi::BookDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_books(State(state): State<ServerState>) -> Result<Json<Vec<book::Model>>, JsonApiError> {
    let _timer = metrics::observe("list");
    let list = state.books.list_all().await?;
    info!(count = list.len(), "list books");
    Ok(Json(list))
}

#[utoipa::path(
    patch, path = "/books/{id}", tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = crate::openapi::BookPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_book(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Message>, JsonApiError> {
    let _timer = metrics::observe("update");
    state.books.update(id, patch).await?;
    Ok(Json(Message::new("Book updated successfully")))
}

#[utoipa::path(
    delete, path = "/books/{id}", tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = crate::openapi::MessageDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_book(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, JsonApiError> {
    let _timer = metrics::observe("delete");
    state.books.delete(id).await?;
    Ok(Json(Message::new("Book deleted successfully")))
}
