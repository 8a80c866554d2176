//! Session component wired for the command line: tokio timers for the
//! simulated latency and the file store for the durable slot.

use super::store::FileStore;
use fintrack_core::{
    auth::{Delay, SimulatedAuthService},
    session::SessionStore,
    Error,
};
use std::{future::Future, path::Path, time::Duration};

/// Sleeps on the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

pub type Sessions = SessionStore<SimulatedAuthService<TokioDelay>, FileStore>;

/// Opens the session component over `data_dir`, hydrating it from disk.
/// `latency` overrides both simulated round trips when set.
/// # Errors
/// Returns [`Error::StorageUnavailable`] when the session slot cannot be read.
pub fn open(data_dir: &Path, latency: Option<Duration>) -> Result<Sessions, Error> {
    let mut auth = SimulatedAuthService::new(TokioDelay);
    if let Some(latency) = latency {
        auth = auth.with_latency(latency, latency);
    }
    let sessions = SessionStore::new(auth, FileStore::new(data_dir));
    sessions.hydrate()?;
    Ok(sessions)
}
