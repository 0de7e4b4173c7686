//! Command-line configuration for the docmount binary

use crate::mount::DocsUi;
use crate::schema::{sample_schema, SchemaDocument, SchemaError};
use clap::Parser;
use docmount_bundles::Flavor;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve an API schema together with an embedded documentation UI
#[derive(Debug, Clone, Parser)]
#[command(name = "docmount", version)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "DOCMOUNT_LISTEN", default_value = "0.0.0.0:9100")]
    pub listen: SocketAddr,

    /// Directory segment the UI is served under
    #[arg(long, env = "DOCMOUNT_DIR", default_value = "docs")]
    pub dir: String,

    /// Route of the schema document, relative to the prefix
    #[arg(long, env = "DOCMOUNT_SCHEMA_ROUTE", default_value = "/docs.json")]
    pub schema_route: String,

    /// Path prefix for both the UI and the schema
    #[arg(long, env = "DOCMOUNT_PREFIX", default_value = "/")]
    pub prefix: String,

    /// UI bundle: swagger or redoc
    #[arg(long, env = "DOCMOUNT_UI", default_value = "swagger")]
    pub ui: Flavor,

    /// JSON schema to serve; a built-in sample document is used when absent
    #[arg(long, env = "DOCMOUNT_SCHEMA_FILE")]
    pub schema_file: Option<PathBuf>,
}

impl Config {
    pub fn docs_ui(&self) -> DocsUi {
        DocsUi::new(self.ui.bundle())
            .dir(&self.dir)
            .schema_route(&self.schema_route)
            .prefix(&self.prefix)
    }

    /// Load the configured schema document
    ///
    /// `schema_path` is the resolved schema route, used by the sample
    /// document to describe itself.
    pub fn schema(&self, schema_path: &str) -> Result<SchemaDocument, SchemaError> {
        match &self.schema_file {
            Some(path) => SchemaDocument::from_file(path),
            None => SchemaDocument::json(&sample_schema(schema_path)),
        }
    }
}
