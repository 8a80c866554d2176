//! # FinTrack core
//!
//! Platform-neutral building blocks shared by the `fintrack` CLI and the
//! `fintrack_web` front-end.
//!
//! ## Session lifecycle
//!
//! [`session::SessionStore`] owns the single signed-in identity of the process.
//! It starts in an *initializing* state, hydrates once from a durable
//! key-value slot ([`store::DurableStore`]), and afterwards only changes
//! through `login`, `signup` and `logout`. Every transition writes the durable
//! slot before the new state is published to subscribers, so the persisted
//! record and the in-memory session never disagree from the outside.
//!
//! ## Authentication seam
//!
//! There is no backend yet. [`auth::SimulatedAuthService`] stands in for it,
//! sleeping through an injected [`auth::Delay`] so the CLI can run on tokio and
//! the browser can run on its own timers. Tests substitute their own
//! [`auth::AuthService`] and never wait on a clock.
//!
//! Credentials are wrapped in `secrecy` types; callers must never log them.

pub mod advisor;
pub mod auth;
pub mod domain;
mod error;
pub mod predictor;
pub mod session;
pub mod store;
pub mod validation;

pub use error::Error;

/// Key of the durable slot holding the serialized session.
pub const SESSION_KEY: &str = "finTrackUser";
