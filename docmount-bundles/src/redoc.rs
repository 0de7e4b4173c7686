//! ReDoc bundle
//!
//! Read-only three-panel reference docs rendered from the same schema
//! endpoint as Swagger UI.

use crate::embedded::embedded_store;
use docmount_core::{AssetStore, UiBundle};
use rust_embed::RustEmbed;
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "assets/redoc/"]
struct RedocAssets;

const INDEX_TEMPLATE: &str = include_str!("../templates/redoc.html");

pub struct Redoc {
    assets: AssetStore,
}

impl Redoc {
    /// Upstream files the index loads, fetched by `scripts/vendor-ui.sh`
    pub const UPSTREAM_FILES: &'static [&'static str] = &["redoc.standalone.js"];

    pub fn new() -> Self {
        let assets = embedded_store::<RedocAssets>();
        debug!("Loaded {} ReDoc assets", assets.len());
        Self { assets }
    }
}

impl Default for Redoc {
    fn default() -> Self {
        Self::new()
    }
}

impl UiBundle for Redoc {
    fn name(&self) -> &str {
        "ReDoc"
    }

    fn index_template(&self) -> &str {
        INDEX_TEMPLATE
    }

    fn assets(&self) -> &AssetStore {
        &self.assets
    }
}
