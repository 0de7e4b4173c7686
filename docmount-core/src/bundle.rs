//! Documentation UI bundle trait definition

use crate::assets::AssetStore;
use crate::template;

/// Trait for a documentation UI flavour (Swagger UI, ReDoc, ...)
///
/// A bundle supplies:
/// - An index template carrying the schema and directory placeholder tokens
/// - The static files the index page loads, keyed by path relative to the
///   mount directory
pub trait UiBundle: Send + Sync {
    /// Get the name of this bundle (e.g., "Swagger UI", "ReDoc")
    fn name(&self) -> &str;

    /// The HTML index template, rendered once per mount
    fn index_template(&self) -> &str;

    /// Static files served below the mount directory
    fn assets(&self) -> &AssetStore;

    /// Files the index template loads that the asset store does not hold
    fn missing_assets(&self) -> Vec<&str> {
        template::asset_references(self.index_template())
            .into_iter()
            .filter(|file| !self.assets().contains(file))
            .collect()
    }
}

/// A bundle assembled from a caller-supplied template and asset store
#[derive(Debug, Clone)]
pub struct CustomBundle {
    name: String,
    template: String,
    assets: AssetStore,
}

impl CustomBundle {
    pub fn new(name: impl Into<String>, template: impl Into<String>, assets: AssetStore) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            assets,
        }
    }
}

impl UiBundle for CustomBundle {
    fn name(&self) -> &str {
        &self.name
    }

    fn index_template(&self) -> &str {
        &self.template
    }

    fn assets(&self) -> &AssetStore {
        &self.assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_bundle_exposes_parts() {
        let assets = AssetStore::from_pairs([("app.js", b"console.log(1)".as_slice())]);
        let bundle = CustomBundle::new("Plain", "<p>SERVANT_SWAGGER_UI_SCHEMA</p>", assets);

        assert_eq!(bundle.name(), "Plain");
        assert_eq!(bundle.index_template(), "<p>SERVANT_SWAGGER_UI_SCHEMA</p>");
        assert!(bundle.assets().contains("app.js"));
    }

    #[test]
    fn test_missing_assets_lists_unresolved_references() {
        let template = r#"<link href="../SERVANT_SWAGGER_UI_DIR/app.css">
            <script src="../SERVANT_SWAGGER_UI_DIR/app.js"></script>"#;
        let assets = AssetStore::from_pairs([("app.js", b"1".as_slice())]);
        let bundle = CustomBundle::new("Partial", template, assets);

        assert_eq!(bundle.missing_assets(), vec!["app.css"]);
    }

    #[test]
    fn test_custom_bundle_as_trait_object() {
        let bundle: Box<dyn UiBundle> =
            Box::new(CustomBundle::new("Empty", "", AssetStore::default()));
        assert!(bundle.assets().is_empty());
    }
}
