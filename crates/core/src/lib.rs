//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the exposure rules, the scene catalog, scoring and the
//! round-based session. It has no dependency on terminal, camera or other I/O
//! beyond optionally reading a JSON scene catalog, making it:
//!
//! - **Deterministic**: The same inputs always produce the same score and text
//! - **Testable**: Every rule is a plain function over value types
//! - **Portable**: Any front end (terminal, motion input, headless) drives it
//!   through [`GameAction`](types::GameAction)
//!
//! # Module Structure
//!
//! - [`exposure`]: EV from aperture, shutter and ISO
//! - [`scene`]: Ordered catalog of weather scenes with their standard answers
//! - [`scoring`]: Score, five-way classification and outcome image selection
//! - [`feedback`]: Localized result-screen text with per-scene hints
//! - [`game_state`]: The Start -> Playing -> Result session
//! - [`error`]: Catalog and index errors
//!
//! # Game Rules
//!
//! - **EV**: `log2(N² / t) + log2(ISO / 100)`; higher means brighter
//! - **Score**: `100 - 15` per stop of error, floored at 0; 100 only for an exact match
//! - **Perfect**: within one stop; **Slight**: 1 to 1.5 stops; beyond that, over/under
//! - **Rounds**: each shot is scored, then the next scene loads with its
//!   standard answer pre-selected; the catalog wraps around
//!
//! # Example
//!
//! ```
//! use light_catcher_core::{GameSession, SceneCatalog};
//! use light_catcher_types::{Direction, GameAction, GamePhase, Locale, Parameter};
//!
//! let catalog = SceneCatalog::builtin();
//! let mut session = GameSession::new(&catalog, Locale::En).unwrap();
//!
//! session.apply_action(GameAction::Start).unwrap();
//! session
//!     .apply_action(GameAction::Adjust {
//!         parameter: Parameter::Aperture,
//!         direction: Direction::Decrease,
//!     })
//!     .unwrap();
//! session.apply_action(GameAction::Shutter).unwrap();
//!
//! assert_eq!(session.phase(), GamePhase::Result);
//! // One stop wider than the sunny standard answer.
//! assert_eq!(session.last_result().unwrap().score, 85);
//! ```

pub mod error;
pub mod exposure;
pub mod feedback;
pub mod game_state;
pub mod scene;
pub mod scoring;

pub use light_catcher_types as types;

// Re-export commonly used types for convenience
pub use error::{CoreError, Result};
pub use exposure::{compute_exposure_value, exposure_value};
pub use feedback::{generate_feedback, Feedback};
pub use game_state::GameSession;
pub use scene::{LocalizedText, Scene, SceneCatalog, SceneId};
pub use scoring::{classify, evaluate_round, preview_outcome, select_outcome, RoundResult};
