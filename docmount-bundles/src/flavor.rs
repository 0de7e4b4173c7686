//! Selecting a bundle by name

use crate::{Redoc, SwaggerUi};
use docmount_core::UiBundle;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// The built-in UI bundles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flavor {
    #[default]
    Swagger,
    Redoc,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown UI flavor {0:?}, expected \"swagger\" or \"redoc\"")]
pub struct UnknownFlavor(pub String);

impl Flavor {
    /// Load the embedded bundle for this flavor
    pub fn bundle(self) -> Arc<dyn UiBundle> {
        match self {
            Flavor::Swagger => Arc::new(SwaggerUi::new()),
            Flavor::Redoc => Arc::new(Redoc::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Swagger => "swagger",
            Flavor::Redoc => "redoc",
        }
    }
}

impl FromStr for Flavor {
    type Err = UnknownFlavor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "swagger" | "swagger-ui" => Ok(Flavor::Swagger),
            "redoc" => Ok(Flavor::Redoc),
            _ => Err(UnknownFlavor(s.to_string())),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flavor_names() {
        assert_eq!("swagger".parse::<Flavor>().unwrap(), Flavor::Swagger);
        assert_eq!("Swagger-UI".parse::<Flavor>().unwrap(), Flavor::Swagger);
        assert_eq!("redoc".parse::<Flavor>().unwrap(), Flavor::Redoc);
        assert_eq!(
            "rapidoc".parse::<Flavor>().unwrap_err(),
            UnknownFlavor("rapidoc".to_string())
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for flavor in [Flavor::Swagger, Flavor::Redoc] {
            assert_eq!(flavor.to_string().parse::<Flavor>().unwrap(), flavor);
        }
    }

    #[test]
    fn test_bundle_names() {
        assert_eq!(Flavor::Swagger.bundle().name(), "Swagger UI");
        assert_eq!(Flavor::Redoc.bundle().name(), "ReDoc");
        assert_eq!(Flavor::default(), Flavor::Swagger);
    }
}
