//! Schema document helpers
//!
//! Any axum handler can serve the schema. [`SchemaDocument`] covers the
//! common case of a fixed JSON document known at startup.

use axum::{
    body::Bytes,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::future::{ready, Ready};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A JSON schema document serialised once and served on every request
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    body: Bytes,
}

impl SchemaDocument {
    /// Serialise `value` as the schema document
    pub fn json<T: Serialize>(value: &T) -> Result<Self, SchemaError> {
        let body = serde_json::to_vec(value)?;
        Ok(Self { body: body.into() })
    }

    /// Use raw JSON bytes as the schema document
    ///
    /// The bytes are checked to be well-formed JSON and served untouched.
    pub fn from_json_bytes(bytes: impl Into<Bytes>) -> Result<Self, SchemaError> {
        let body = bytes.into();
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;
        Ok(Self { body })
    }

    /// Load a JSON schema document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_bytes(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Turn the document into a handler for [`DocsUi::router`]
    ///
    /// [`DocsUi::router`]: crate::mount::DocsUi::router
    pub fn into_handler(self) -> impl Fn() -> Ready<SchemaDocument> + Clone + Send + Sync + 'static {
        move || ready(self.clone())
    }
}

impl IntoResponse for SchemaDocument {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

/// A minimal OpenAPI document describing the schema endpoint at `schema_path`
pub fn sample_schema(schema_path: &str) -> serde_json::Value {
    let mut paths = serde_json::Map::new();
    paths.insert(
        schema_path.to_string(),
        serde_json::json!({
            "get": {
                "summary": "This document",
                "responses": {
                    "200": {
                        "description": "OpenAPI document",
                        "content": { "application/json": {} }
                    }
                }
            }
        }),
    );

    serde_json::json!({
        "openapi": "3.0.3",
        "info": {
            "title": "docmount",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Pass --schema-file to serve your own API description."
        },
        "paths": paths
    })
}
