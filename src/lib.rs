//! Shelf application library
//!
//! A small book catalogue served over HTTP: anyone may read, writes need a
//! bearer token obtained from `/login`.

pub mod bootstrap;
pub mod modules;

pub use bootstrap::{build_registry, credentials, run, token_service};
