//! Credential lookup and bearer token issuing.
//!
//! Credentials are static seed data looked up through [`CredentialStore`];
//! tokens are HS256 JWTs carrying the username and an expiry.

pub mod credentials;
pub mod token;

pub use credentials::{CredentialStore, StaticCredentialStore, User};
pub use token::{Claims, Clock, SystemClock, TokenError, TokenService};
