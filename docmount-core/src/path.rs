//! Route path composition
//!
//! A [`RoutePath`] is an absolute URL path made of validated segments. The
//! schema route, the UI directory and any outer prefix are all expressed as
//! `RoutePath`s and joined once when routes are registered, so the path the
//! index page links to is the same value the router serves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while validating a mount configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("route path {path:?} must start with '/'")]
    NotAbsolute { path: String },

    #[error("route path {path:?} contains an empty segment")]
    EmptySegment { path: String },

    #[error("route path {path:?} contains the relative segment {segment:?}")]
    RelativeSegment { path: String, segment: String },

    #[error("route path {path:?} contains {ch:?}, only URL-unreserved characters are allowed")]
    InvalidCharacter { path: String, ch: char },

    #[error("mount directory {dir:?} must be a single non-empty path segment")]
    InvalidDirectory { dir: String },

    #[error("schema route {schema} is shadowed by the UI directory {dir}")]
    SchemaCollision { schema: String, dir: String },
}

/// An absolute, normalised URL path such as `/api/docs.json`
///
/// The root path `/` has no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath {
    segments: Vec<String>,
}

impl RoutePath {
    /// The root path `/`
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse an absolute path
    ///
    /// A single trailing `/` is accepted and dropped. Every segment must be
    /// non-empty, must not be `.` or `..`, and may only contain the
    /// unreserved URL characters `A-Z a-z 0-9 - . _ ~`.
    pub fn parse(path: &str) -> Result<Self, MountError> {
        let rest = path.strip_prefix('/').ok_or_else(|| MountError::NotAbsolute {
            path: path.to_string(),
        })?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.is_empty() {
            return Ok(Self::root());
        }

        let segments = rest
            .split('/')
            .map(|segment| validate_segment(path, segment).map(|_| segment.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    /// Build a path holding a single segment, e.g. the UI directory `docs`
    pub fn segment(name: &str) -> Result<Self, MountError> {
        if name.is_empty() || name.contains('/') {
            return Err(MountError::InvalidDirectory {
                dir: name.to_string(),
            });
        }
        validate_segment(name, name)?;
        Ok(Self {
            segments: vec![name.to_string()],
        })
    }

    /// Append `other` below this path
    pub fn join(&self, other: &RoutePath) -> RoutePath {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        RoutePath { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this path equals `ancestor` or lies below it
    pub fn starts_with(&self, ancestor: &RoutePath) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }

    /// Render the path with a trailing slash, e.g. `/api/docs/`
    pub fn as_dir(&self) -> String {
        if self.is_root() {
            "/".to_string()
        } else {
            format!("{}/", self)
        }
    }
}

fn validate_segment(path: &str, segment: &str) -> Result<(), MountError> {
    if segment.is_empty() {
        return Err(MountError::EmptySegment {
            path: path.to_string(),
        });
    }
    if segment == "." || segment == ".." {
        return Err(MountError::RelativeSegment {
            path: path.to_string(),
            segment: segment.to_string(),
        });
    }
    if let Some(ch) = segment.chars().find(|c| !is_unreserved(*c)) {
        return Err(MountError::InvalidCharacter {
            path: path.to_string(),
            ch,
        });
    }
    Ok(())
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for RoutePath {
    type Err = MountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = MountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.to_string()
    }
}
