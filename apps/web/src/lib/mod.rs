//! Shared frontend utilities: configuration, user-facing errors, and build
//! metadata. Nothing here holds secrets.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use errors::AppError;
