//! Route binding for a mounted documentation UI

use crate::mount::DocsUi;
use crate::schema::SchemaDocument;
use crate::web_ui::{self, UiState};
use axum::{handler::Handler, routing::get, Router};
use docmount_core::{render, template, MountError};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use tracing::{info, warn};

impl DocsUi {
    /// Build the routes of this mount
    ///
    /// `schema` is any axum handler producing the schema document; it is
    /// served unchanged at the resolved schema path. The returned router
    /// carries absolute paths and is meant to be merged into the host
    /// application, not nested.
    ///
    /// Routes:
    /// - `GET <schema>` -> `schema`
    /// - `GET <dir>` -> redirect to `<dir>/`
    /// - `GET <dir>/` and `GET <dir>/index.html` -> rendered index
    /// - `GET <dir>/*path` -> embedded asset or 404
    pub fn router<H, T, S>(self, schema: H) -> Result<Router<S>, MountError>
    where
        H: Handler<T, S>,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        let paths = self.resolve()?;
        let bundle = self.bundle();
        let index_template = bundle.index_template();

        let missing = template::missing_tokens(index_template);
        if !missing.is_empty() {
            warn!(
                "{} index template lacks {:?}, those links will not be substituted",
                bundle.name(),
                missing
            );
        }

        let unresolved = bundle.missing_assets();
        if !unresolved.is_empty() {
            warn!(
                "{} index loads {:?} from {} but they are not embedded and will 404",
                bundle.name(),
                unresolved,
                paths.dir_path.as_dir()
            );
        }

        let schema_path = paths.schema_path.to_string();
        let dir = paths.dir_path.to_string();
        let ui = UiState {
            index: render(index_template, &paths.dir, &schema_path).into(),
            dir_url: paths.dir_path.as_dir(),
            assets: bundle.assets().clone(),
        };

        let ui_routes: Router<S> = Router::new()
            .route(&dir, get(web_ui::redirect_to_dir))
            .route(&format!("{}/", dir), get(web_ui::serve_index))
            .route(&format!("{}/index.html", dir), get(web_ui::serve_index))
            .route(&format!("{}/*path", dir), get(web_ui::serve_asset))
            .with_state(ui);

        info!(
            "Mounted {} at {} with schema at {}",
            bundle.name(),
            paths.dir_path.as_dir(),
            schema_path
        );

        Ok(Router::new()
            .route(&schema_path, get(schema))
            .merge(ui_routes))
    }

    /// Merge this mount into `host`
    pub fn mount<H, T, S>(self, host: Router<S>, schema: H) -> Result<Router<S>, MountError>
    where
        H: Handler<T, S>,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        Ok(host.merge(self.router(schema)?))
    }
}

/// Create the standalone application router serving `schema` through `docs`
pub fn create_app(docs: DocsUi, schema: SchemaDocument) -> Result<Router, MountError> {
    let app = docs
        .router(schema.into_handler())?
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());
    Ok(app)
}
