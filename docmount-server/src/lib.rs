//! docmount Server Library
//!
//! Mounts an embedded API documentation UI into an axum router, wired to the
//! route that serves the schema document.

pub mod config;
pub mod mount;
pub mod routes;
pub mod schema;
pub mod web_ui;

pub use mount::{DocsUi, MountPaths};
pub use schema::{SchemaDocument, SchemaError};
