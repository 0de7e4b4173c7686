//! docmount Core Library
//!
//! This crate provides the framework-independent pieces of docmount: the
//! immutable asset store, route path composition, index template rendering
//! and the bundle trait that every documentation UI flavour implements.

pub mod assets;
pub mod bundle;
pub mod path;
pub mod template;

pub use assets::AssetStore;
pub use bundle::{CustomBundle, UiBundle};
pub use path::{MountError, RoutePath};
pub use template::{render, DIR_TOKEN, SCHEMA_TOKEN};
