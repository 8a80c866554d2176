//! Domain-level frontend features. Routes import these so view code stays
//! focused on markup.

pub(crate) mod auth;
