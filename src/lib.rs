//! pr2doc - changelog fragments from the pull requests behind a merge commit
//!
//! Walks from a commit hash to its originating merge PR, then to the PRs
//! referenced by that merge's constituent commits, and emits each PR's
//! title together with the `share`-tagged block from its body.
//!
//! The crate splits into:
//! - [`extract`] - the two regex lookups (PR references, tagged blocks)
//! - [`collect`] - the sequential fetch-and-collect loop
//! - [`platform`] - the repository host trait and its GitHub implementation
//! - [`render`] - template-based output formatting

pub mod auth;
pub mod collect;
pub mod config;
pub mod error;
pub mod extract;
pub mod platform;
pub mod render;
pub mod types;
