use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct BookDoc {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub rating: i32,
}

#[derive(ToSchema)]
pub struct NewBookDoc {
    pub title: String,
    pub description: String,
    pub rating: i32,
}

/// Omitted fields keep their stored value.
#[derive(ToSchema)]
pub struct BookPatchDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i32>,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::books::create_book,
        crate::routes::books::get_book,
        crate::routes::books::get_book_by_title,
        crate::routes::books::list_books,
        crate::routes::books::update_book,
        crate::routes::books::delete_book,
    ),
    components(
        schemas(
            HealthResponse,
            BookDoc,
            NewBookDoc,
            BookPatchDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "books")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn document_lists_every_book_path() {
        let doc = ApiDoc::openapi();
        for p in ["/health", "/books/", "/books/{id}", "/books/title/{title}"] {
            assert!(doc.paths.paths.contains_key(p), "missing path {p}");
        }
        let item = &doc.paths.paths["/books/{id}"];
        assert!(item.operations.len() >= 3);
    }
}
