//! Request middlewares: access logging for every route, bearer auth for
//! protected ones.

pub mod access_log;
pub mod auth;

pub use access_log::log_requests;
pub use auth::require_bearer;
