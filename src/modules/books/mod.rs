pub mod handlers;
pub mod models;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use serde_json::json;
use shelf_authz::TokenService;
use shelf_http::middleware::require_bearer;
use shelf_kernel::{InitCtx, Module};

use store::BookStore;

/// Book catalogue: public reads, bearer-guarded writes.
pub struct BooksModule {
    store: Arc<BookStore>,
    tokens: Arc<TokenService>,
}

impl BooksModule {
    pub fn new(store: Arc<BookStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = self.store.len(),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        let public = Router::new()
            .route("/books", get(handlers::list_books))
            .route("/books/{id}", get(handlers::get_book))
            .with_state(self.store.clone());

        let protected = Router::new()
            .route("/books", post(handlers::create_book))
            .route(
                "/books/{id}",
                put(handlers::update_book).delete(handlers::delete_book),
            )
            .route_layer(middleware::from_fn_with_state(
                self.tokens.clone(),
                require_bearer,
            ))
            .with_state(self.store.clone());

        public.merge(protected)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let not_found = json!({
            "description": "Book not found",
            "content": { "text/plain": { "schema": { "type": "string" } } }
        });
        let unauthorized = json!({
            "description": "Missing, malformed or invalid bearer token",
            "content": { "text/plain": { "schema": { "type": "string" } } }
        });
        let book = json!({
            "description": "The book",
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Book" } } }
        });
        let id_param = json!([{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "string" }
        }]);
        let patch_body = json!({
            "required": false,
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/BookPatch" } } }
        });

        Some(json!({
            "paths": {
                "/books": {
                    "get": {
                        "summary": "List books keyed by id",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Every book, keyed by id",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "additionalProperties": { "$ref": "#/components/schemas/Book" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "security": [{ "bearer_auth": [] }],
                        "requestBody": {
                            "required": true,
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Book" } } }
                        },
                        "responses": {
                            "201": book,
                            "400": { "description": "Malformed body or missing id" },
                            "401": unauthorized,
                            "409": { "description": "Book id already exists" }
                        }
                    }
                },
                "/books/{id}": {
                    "get": {
                        "summary": "Get a book (a body, if sent, is applied as an update)",
                        "tags": ["Books"],
                        "parameters": id_param,
                        "requestBody": patch_body,
                        "responses": { "200": book, "404": not_found }
                    },
                    "put": {
                        "summary": "Update a book",
                        "tags": ["Books"],
                        "security": [{ "bearer_auth": [] }],
                        "parameters": id_param,
                        "requestBody": patch_body,
                        "responses": { "200": book, "401": unauthorized, "404": not_found }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "security": [{ "bearer_auth": [] }],
                        "parameters": id_param,
                        "responses": {
                            "204": { "description": "Deleted" },
                            "401": unauthorized,
                            "404": not_found
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Unique identifier for the book" },
                            "title": { "type": "string" },
                            "author": { "type": "string" }
                        },
                        "required": ["id"]
                    },
                    "BookPatch": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "author": { "type": "string" }
                        }
                    }
                }
            }
        }))
    }
}
