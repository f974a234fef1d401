pub mod handlers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::post, Router};
use serde_json::json;
use shelf_authz::{CredentialStore, TokenService};
use shelf_kernel::{InitCtx, Module};

/// Shared handles for the login handler.
#[derive(Clone)]
pub struct AuthState {
    pub credentials: Arc<dyn CredentialStore>,
    pub tokens: Arc<TokenService>,
}

/// Exchanges username/password for a bearer token.
pub struct AuthModule {
    state: AuthState,
}

impl AuthModule {
    pub fn new(credentials: Arc<dyn CredentialStore>, tokens: Arc<TokenService>) -> Self {
        Self {
            state: AuthState {
                credentials,
                tokens,
            },
        }
    }
}

#[async_trait]
impl Module for AuthModule {
    fn name(&self) -> &'static str {
        "auth"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.auth.jwt_secret.is_empty() {
            tracing::warn!(
                module = self.name(),
                "JWT secret is empty; issued tokens can be forged by anyone"
            );
        }

        tracing::info!(
            module = self.name(),
            token_ttl_secs = ctx.settings.auth.token_ttl_secs,
            "auth module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/login", post(handlers::login))
            .with_state(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let plain = json!({ "text/plain": { "schema": { "type": "string" } } });

        Some(json!({
            "paths": {
                "/login": {
                    "post": {
                        "summary": "Exchange credentials for a bearer token",
                        "tags": ["Auth"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/LoginRequest" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Signed token, valid for the configured lifetime",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/LoginResponse" }
                                    }
                                }
                            },
                            "400": { "description": "Invalid request payload", "content": plain },
                            "401": { "description": "Invalid username or password", "content": plain },
                            "500": { "description": "Error generating token", "content": plain }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "LoginRequest": {
                        "type": "object",
                        "properties": {
                            "username": { "type": "string" },
                            "password": { "type": "string" }
                        },
                        "required": ["username", "password"]
                    },
                    "LoginResponse": {
                        "type": "object",
                        "properties": { "token": { "type": "string" } },
                        "required": ["token"]
                    }
                }
            }
        }))
    }
}
