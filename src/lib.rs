//! Light Catcher (workspace facade crate).
//!
//! This package exposes the `light_catcher::{core,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`, plus the
//! environment-driven [`config`] used by the terminal binary.

pub mod config;

pub use light_catcher_core as core;
pub use light_catcher_input as input;
pub use light_catcher_term as term;
pub use light_catcher_types as types;

pub use config::GameConfig;
