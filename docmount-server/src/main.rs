//! docmount Server
//!
//! Serves a schema document and an embedded documentation UI for it

use anyhow::Result;
use clap::Parser;
use docmount_server::{config::Config, routes};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    info!("Starting docmount with the {} UI", config.ui);

    let docs = config.docs_ui();
    let paths = docs.resolve()?;
    let schema = config.schema(&paths.schema_path.to_string())?;

    let app = routes::create_app(docs, schema)?;

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!(
        "Docs available at http://{}{}",
        config.listen,
        paths.dir_path.as_dir()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
