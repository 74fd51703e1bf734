//! obsidian-tasks - integration test support.
//!
//! Re-exports the workspace crates so end-to-end tests can reach every layer
//! through one dependency.

pub mod component {
    pub use obtasks_core::{config, constants};
    pub use obtasks_service::{activation, definition};
}

pub use obtasks_app as app;
pub use obtasks_rfc as rfc;
