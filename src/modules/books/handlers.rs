use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use shelf_authz::Claims;
use shelf_http::{AppError, JsonPayload, LenientJson};

use super::models::{Book, BookPatch};
use super::store::{BookStore, StoreError};

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingId => AppError::bad_request(err.to_string()),
            StoreError::Duplicate(_) => AppError::conflict(err.to_string()),
            StoreError::NotFound(_) => AppError::not_found(err.to_string()),
        }
    }
}

/// GET /books
pub async fn list_books(State(store): State<Arc<BookStore>>) -> Json<HashMap<String, Book>> {
    Json(store.list())
}

/// GET /books/{id}
///
/// A JSON body, if present, is merged onto the record exactly like PUT.
pub async fn get_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
    LenientJson(patch): LenientJson<BookPatch>,
) -> Result<Json<Book>, AppError> {
    if patch.is_empty() {
        return Ok(Json(store.get(&id)?));
    }

    tracing::debug!(book_id = %id, "book detail request carried an update body");
    Ok(Json(store.replace(&id, patch)?))
}

/// POST /books
pub async fn create_book(
    State(store): State<Arc<BookStore>>,
    Extension(claims): Extension<Claims>,
    JsonPayload(book): JsonPayload<Book>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let book = store.create(book)?;
    tracing::debug!(book_id = %book.id, username = %claims.username, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /books/{id}
pub async fn update_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
    LenientJson(patch): LenientJson<BookPatch>,
) -> Result<Json<Book>, AppError> {
    Ok(Json(store.replace(&id, patch)?))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
