use fintrack_core::{auth::Delay, store::DurableStore, Error};
use std::{future::Future, time::Duration};

/// `window.localStorage`, looked up on every access so the handle stays `Send`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

fn local_storage() -> Result<web_sys::Storage, Error> {
    web_sys::window()
        .ok_or_else(|| Error::StorageUnavailable("no window".to_string()))?
        .local_storage()
        .map_err(|_| Error::StorageUnavailable("localStorage access denied".to_string()))?
        .ok_or_else(|| Error::StorageUnavailable("localStorage disabled".to_string()))
}

fn unavailable(action: &str, key: &str) -> Error {
    Error::StorageUnavailable(format!("failed to {action} {key} in localStorage"))
}

impl DurableStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        local_storage()?
            .get_item(key)
            .map_err(|_| unavailable("read", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| unavailable("write", key))
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| unavailable("remove", key))
    }
}

/// Sleeps on `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooDelay;

impl Delay for GlooDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}
