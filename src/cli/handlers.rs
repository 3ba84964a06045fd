use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Result;
use crate::http;

pub fn handle_serve(
    port: Option<u16>,
    data_dir: Option<PathBuf>,
    uploads_dir: Option<PathBuf>,
    public_dir: Option<PathBuf>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pressroom=info")),
        )
        .init();

    let config = Config::load(port, data_dir, uploads_dir, public_dir);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(http::serve(config))
}
