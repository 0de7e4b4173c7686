//! Mount configuration
//!
//! A [`DocsUi`] is the single source of truth for where the documentation UI
//! and its schema endpoint live. The router serves exactly the paths that
//! [`DocsUi::resolve`] computes, and the index page links to the same values.

use docmount_bundles::{Redoc, SwaggerUi};
use docmount_core::{MountError, RoutePath, UiBundle};
use std::fmt;
use std::sync::Arc;

const DEFAULT_DIR: &str = "docs";
const DEFAULT_SCHEMA_ROUTE: &str = "/docs.json";

/// Configuration for one mounted documentation UI
#[derive(Clone)]
pub struct DocsUi {
    bundle: Arc<dyn UiBundle>,

    /// Directory segment the UI is served under, e.g. `docs`
    dir: String,

    /// Route of the schema document, relative to `prefix`
    schema_route: String,

    /// Outer path the whole mount lives under, `/` by default
    prefix: String,
}

/// Concrete paths of a mount, computed once from a [`DocsUi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPaths {
    /// The directory name substituted into the index template
    pub dir: String,

    /// Absolute path of the UI directory, e.g. `/api/docs`
    pub dir_path: RoutePath,

    /// Absolute path of the schema endpoint, e.g. `/api/docs.json`
    pub schema_path: RoutePath,
}

impl DocsUi {
    /// Mount `bundle` at `/docs/` with the schema at `/docs.json`
    pub fn new(bundle: Arc<dyn UiBundle>) -> Self {
        Self {
            bundle,
            dir: DEFAULT_DIR.to_string(),
            schema_route: DEFAULT_SCHEMA_ROUTE.to_string(),
            prefix: "/".to_string(),
        }
    }

    pub fn with_bundle(bundle: impl UiBundle + 'static) -> Self {
        Self::new(Arc::new(bundle))
    }

    pub fn swagger() -> Self {
        Self::with_bundle(SwaggerUi::new())
    }

    pub fn redoc() -> Self {
        Self::with_bundle(Redoc::new())
    }

    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn schema_route(mut self, route: impl Into<String>) -> Self {
        self.schema_route = route.into();
        self
    }

    /// Place the whole mount below `prefix`
    ///
    /// Both the UI directory and the schema route move, and the rendered
    /// index links to the prefixed schema path.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn bundle(&self) -> &dyn UiBundle {
        self.bundle.as_ref()
    }

    /// Validate the configuration and compute the served paths
    pub fn resolve(&self) -> Result<MountPaths, MountError> {
        let prefix = RoutePath::parse(&self.prefix)?;
        let dir_path = prefix.join(&RoutePath::segment(&self.dir)?);
        let schema_path = prefix.join(&RoutePath::parse(&self.schema_route)?);

        if schema_path.starts_with(&dir_path) {
            return Err(MountError::SchemaCollision {
                schema: schema_path.to_string(),
                dir: dir_path.to_string(),
            });
        }

        Ok(MountPaths {
            dir: self.dir.clone(),
            dir_path,
            schema_path,
        })
    }
}

impl fmt::Debug for DocsUi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsUi")
            .field("bundle", &self.bundle.name())
            .field("dir", &self.dir)
            .field("schema_route", &self.schema_route)
            .field("prefix", &self.prefix)
            .finish()
    }
}
