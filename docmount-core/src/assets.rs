//! Immutable in-memory asset store
//!
//! Holds the files of a documentation UI bundle keyed by their path relative
//! to the bundle root (e.g. `swagger-ui.css`). Built once, then shared
//! read-only; cloning only bumps a reference count.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only mapping from relative file path to file bytes
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    files: Arc<HashMap<String, Cow<'static, [u8]>>>,
}

impl AssetStore {
    /// Build a store from `(path, bytes)` pairs
    ///
    /// A later pair with the same path replaces an earlier one.
    pub fn from_pairs<P, B>(pairs: impl IntoIterator<Item = (P, B)>) -> Self
    where
        P: Into<String>,
        B: Into<Cow<'static, [u8]>>,
    {
        let files = pairs
            .into_iter()
            .map(|(path, bytes)| (path.into(), bytes.into()))
            .collect();

        Self {
            files: Arc::new(files),
        }
    }

    /// Look up a file by path
    ///
    /// A single leading `/` is ignored so both `favicon.png` and
    /// `/favicon.png` resolve to the same entry.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(key(path)).map(|bytes| bytes.as_ref())
    }

    /// Like [`AssetStore::get`], but hands out the stored bytes as a `Cow`
    ///
    /// Bytes embedded in the binary come back borrowed, so response bodies
    /// can be built without copying.
    pub fn get_cow(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        self.files.get(key(path)).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over stored paths in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

/// Map a request path to its store key by dropping one leading `/`
fn key(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

impl<P, B> FromIterator<(P, B)> for AssetStore
where
    P: Into<String>,
    B: Into<Cow<'static, [u8]>>,
{
    fn from_iter<I: IntoIterator<Item = (P, B)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];

    #[test]
    fn test_get_returns_exact_bytes() {
        let store = AssetStore::from_pairs([
            ("favicon.png", PNG_HEADER),
            ("swagger-ui.css", b"body { margin: 0 }".as_slice()),
        ]);

        assert_eq!(store.get("favicon.png"), Some(PNG_HEADER));
        assert_eq!(store.get("swagger-ui.css"), Some(b"body { margin: 0 }".as_slice()));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_owned_bytes_are_preserved() {
        let owned: Vec<u8> = (0..=255).collect();
        let store = AssetStore::from_pairs([("blob.bin".to_string(), owned.clone())]);

        assert_eq!(store.get("blob.bin"), Some(owned.as_slice()));
    }

    #[test]
    fn test_get_cow_keeps_static_bytes_borrowed() {
        let store = AssetStore::from_pairs([("favicon.png", PNG_HEADER)]);

        let bytes = store.get_cow("/favicon.png").unwrap();
        assert!(matches!(bytes, Cow::Borrowed(_)));
        assert_eq!(bytes.as_ref(), PNG_HEADER);
        assert!(store.get_cow("missing.png").is_none());
    }

    #[test]
    fn test_missing_path_is_none() {
        let store = AssetStore::from_pairs([("favicon.png", PNG_HEADER)]);

        assert!(store.get("missing.png").is_none());
        assert!(store.get("").is_none());
        assert!(!store.contains("FAVICON.PNG"), "lookup is case-sensitive");
    }

    #[test]
    fn test_leading_slash_is_ignored() {
        let store = AssetStore::from_pairs([("css/app.css", b"a".as_slice())]);

        assert_eq!(store.get("/css/app.css"), Some(b"a".as_slice()));
        assert!(store.get("//css/app.css").is_none());
    }

    #[test]
    fn test_get_and_get_cow_agree_on_keys() {
        let store = AssetStore::from_pairs([("css/app.css", b"a".as_slice())]);

        for path in ["css/app.css", "/css/app.css", "//css/app.css", "app.css", ""] {
            assert_eq!(
                store.get(path),
                store.get_cow(path).as_deref(),
                "lookups disagree for {:?}",
                path
            );
        }
    }

    #[test]
    fn test_collect_and_clone_share_contents() {
        let store: AssetStore = vec![("a.js", b"1".as_slice()), ("b.js", b"2".as_slice())]
            .into_iter()
            .collect();
        let copy = store.clone();

        let mut paths: Vec<&str> = copy.paths().collect();
        paths.sort_unstable();
        assert_eq!(paths, vec!["a.js", "b.js"]);
        assert!(!copy.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let store = AssetStore::default();
        assert!(store.is_empty());
        assert!(store.get("index.html").is_none());
    }
}
