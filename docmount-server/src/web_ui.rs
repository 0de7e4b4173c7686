//! Embedded web UI responses

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use docmount_core::AssetStore;
use tracing::debug;

const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";

/// Shared state of one mounted UI
#[derive(Clone)]
pub(crate) struct UiState {
    /// Index page, rendered once when the routes are built
    pub index: Bytes,

    /// Canonical directory URL with trailing slash, e.g. `/api/docs/`
    pub dir_url: String,

    pub assets: AssetStore,
}

/// Serve the rendered index page
pub(crate) async fn serve_index(State(ui): State<UiState>) -> Response {
    ([(header::CACHE_CONTROL, "no-cache")], Html(ui.index)).into_response()
}

/// Redirect the bare directory to its trailing-slash form so relative asset
/// links resolve below it
pub(crate) async fn redirect_to_dir(State(ui): State<UiState>) -> Redirect {
    Redirect::permanent(&ui.dir_url)
}

/// Serve an embedded asset at `<dir>/*path`
pub(crate) async fn serve_asset(
    State(ui): State<UiState>,
    Path(path): Path<String>,
) -> Response {
    asset_response(&ui.assets, &path)
}

/// Build the response for `path` in `assets`
///
/// The content type is guessed from the file extension. Unknown paths are a
/// plain 404.
pub fn asset_response(assets: &AssetStore, path: &str) -> Response {
    match assets.get_cow(path) {
        Some(bytes) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime.as_ref()),
                    (header::CACHE_CONTROL, ASSET_CACHE_CONTROL),
                ],
                bytes,
            )
                .into_response()
        }
        None => {
            debug!("Asset not found: {}", path);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}
