//! # FinTrack
//!
//! Command-line companion to the FinTrack web front-end.
//!
//! ## Sessions
//!
//! `login`, `signup`, `logout` and `whoami` drive the same session component
//! the browser uses (`fintrack_core::session::SessionStore`). In the browser the
//! durable slot is `localStorage`; here it is one JSON file per key under the
//! data directory (`--data-dir`, default `.fintrack`), so a session survives
//! between invocations exactly like it survives a page reload.
//!
//! Authentication is simulated: requests wait a fixed latency and apply local
//! rules. Passwords are wrapped in `secrecy` types and never logged.
//!
//! ## Other commands
//!
//! - `predict` echoes the placeholder predictor.
//! - `advise` runs the rule-based loan/investment comparison and prints the
//!   matching language-model prompt.
//! - `serve` hosts the built web bundle with a single-page-app fallback and a
//!   `/health` endpoint.

pub mod cli;
pub mod fintrack;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
