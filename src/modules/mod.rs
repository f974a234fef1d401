pub mod auth;
pub mod books;

use std::sync::Arc;

use shelf_authz::{CredentialStore, TokenService};
use shelf_kernel::ModuleRegistry;

use books::store::BookStore;

/// Register the application modules. Both share one token service so the
/// books guard accepts exactly what `/login` issues.
pub fn register_all(
    registry: &mut ModuleRegistry,
    credentials: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
    books: Arc<BookStore>,
) {
    registry.register_core(Arc::new(auth::AuthModule::new(credentials, tokens.clone())));
    registry.register_custom(Arc::new(books::BooksModule::new(books, tokens)));
}
