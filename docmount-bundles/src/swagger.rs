//! Swagger UI bundle

use crate::embedded::embedded_store;
use docmount_core::{AssetStore, UiBundle};
use rust_embed::RustEmbed;
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "assets/swagger-ui/"]
struct SwaggerUiAssets;

const INDEX_TEMPLATE: &str = include_str!("../templates/swagger-ui.html");

/// The Swagger UI interactive explorer
pub struct SwaggerUi {
    assets: AssetStore,
}

impl SwaggerUi {
    /// Upstream files the index loads, fetched by `scripts/vendor-ui.sh`
    pub const UPSTREAM_FILES: &'static [&'static str] = &[
        "swagger-ui.css",
        "swagger-ui-bundle.js",
        "swagger-ui-standalone-preset.js",
    ];

    pub fn new() -> Self {
        let assets = embedded_store::<SwaggerUiAssets>();
        debug!("Loaded {} Swagger UI assets", assets.len());
        Self { assets }
    }
}

impl Default for SwaggerUi {
    fn default() -> Self {
        Self::new()
    }
}

impl UiBundle for SwaggerUi {
    fn name(&self) -> &str {
        "Swagger UI"
    }

    fn index_template(&self) -> &str {
        INDEX_TEMPLATE
    }

    fn assets(&self) -> &AssetStore {
        &self.assets
    }
}
