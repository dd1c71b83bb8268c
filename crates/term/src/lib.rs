//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep [`GameView`] pure so screens can be asserted cell by cell
//! - Handle double-width (CJK) text for the Traditional Chinese locale

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use light_catcher_core as core;
pub use light_catcher_types as types;

pub use fb::{char_width, str_width, Cell, CellStyle, FrameBuffer, Rgb, WIDE_CONTINUATION};
pub use game_view::{view_fingerprint, wrap_lines, AnchorY, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
