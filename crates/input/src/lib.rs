//! Input module (engine-facing).
//!
//! This crate is independent of any UI framework and of the game core. It turns
//! raw input into [`crate::types::GameAction`]s:
//!
//! - [`map`]: `crossterm` key events for the terminal front end
//! - [`motion`]: a brightness-region heuristic over luma frames, for camera or
//!   other gesture sources

pub mod map;
pub mod motion;

pub use light_catcher_types as types;

pub use map::{handle_key_event, should_quit};
pub use motion::{LumaFrame, MotionConfig, MotionDetector, MotionError};
