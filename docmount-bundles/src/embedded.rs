//! Bridge from `rust-embed` folders to [`AssetStore`]

use docmount_core::AssetStore;
use rust_embed::RustEmbed;

/// Collect every file of an embedded folder into an [`AssetStore`]
///
/// In release builds the bytes are borrowed from the binary; debug builds
/// read the folder from disk once, here.
pub fn embedded_store<E: RustEmbed>() -> AssetStore {
    E::iter()
        .filter_map(|path| E::get(&path).map(|file| (path.into_owned(), file.data)))
        .collect()
}
