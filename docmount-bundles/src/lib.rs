//! Embedded documentation UI bundles for docmount

pub mod embedded;
pub mod flavor;
pub mod redoc;
pub mod swagger;

pub use flavor::{Flavor, UnknownFlavor};
pub use redoc::Redoc;
pub use swagger::SwaggerUi;
