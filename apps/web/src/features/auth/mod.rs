//! Browser wiring for the session component: `localStorage` as the durable
//! slot, browser timers for the simulated latency, and a Leptos context that
//! mirrors the component's state into signals. Passwords only pass through
//! the submit handlers and are never logged.

mod guards;
pub(crate) mod state;
pub(crate) mod storage;

pub(crate) use guards::{RedirectIfSignedIn, RequireAuth};
