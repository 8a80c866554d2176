use crate::fintrack;
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dist: PathBuf,
}

/// Execute the serve action.
/// # Errors
/// Returns an error if the bundle is missing or the listener cannot bind.
pub async fn execute(args: Args) -> Result<()> {
    info!(port = args.port, dist = %args.dist.display(), "serving web bundle");
    fintrack::new(args.port, args.dist).await
}
