//! E&S Decorations API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, site
//! pages) so integration tests and the binary entrypoint share them.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod site;
pub mod state;
