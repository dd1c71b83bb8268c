//! Game state module - the session driven by input events
//!
//! The session walks the cycle Start -> Playing -> Result -> Playing ... and owns
//! the current scene index, camera setting and last round result. It borrows the
//! scene catalog from the application driver; nothing here performs I/O.
//!
//! Events that the current phase does not accept are ignored (no state change).

use crate::error::Result;
use crate::exposure::exposure_value;
use crate::scene::{Scene, SceneCatalog};
use crate::scoring::{evaluate_round, preview_outcome, RoundResult};
use crate::types::{Direction, GameAction, GamePhase, Locale, OutcomeImage, Parameter, ParameterSet};

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    catalog: &'a SceneCatalog,
    locale: Locale,
    phase: GamePhase,
    scene_index: usize,
    scene: &'a Scene,
    params: ParameterSet,
    last_result: Option<RoundResult>,
    /// Shots taken this session.
    rounds_played: u32,
    /// Sum of all round scores this session (in memory only).
    total_score: u32,
}

impl<'a> GameSession<'a> {
    /// Create a session at the title screen, positioned on the first scene with
    /// its standard answer dialed in.
    pub fn new(catalog: &'a SceneCatalog, locale: Locale) -> Result<Self> {
        let scene = catalog.get_scene(0)?;
        Ok(Self {
            catalog,
            locale,
            phase: GamePhase::Start,
            scene_index: 0,
            scene,
            params: scene.standard,
            last_result: None,
            rounds_played: 0,
            total_score: 0,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn scene_index(&self) -> usize {
        self.scene_index
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn scene_count(&self) -> usize {
        self.catalog.scene_count()
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// EV of the current setting.
    pub fn current_ev(&self) -> f64 {
        exposure_value(&self.params)
    }

    /// EV of the current scene's standard answer.
    pub fn target_ev(&self) -> f64 {
        exposure_value(&self.scene.standard)
    }

    /// Coarse image the current setting would produce.
    pub fn preview(&self) -> OutcomeImage {
        preview_outcome(&self.params, self.scene)
    }

    /// Leave the title screen. Only valid in `Start`.
    pub fn on_start_trigger(&mut self) -> bool {
        if self.phase != GamePhase::Start {
            tracing::trace!(phase = self.phase.as_str(), "start trigger ignored");
            return false;
        }
        self.phase = GamePhase::Playing;
        tracing::debug!(scene = %self.scene.id, "game started");
        true
    }

    /// Move one parameter a single stop. Only valid in `Playing`.
    ///
    /// Returns `true` if the setting changed (`false` when clamped or ignored).
    pub fn on_parameter_adjust(&mut self, parameter: Parameter, direction: Direction) -> bool {
        if self.phase != GamePhase::Playing {
            tracing::trace!(
                phase = self.phase.as_str(),
                parameter = parameter.as_str(),
                "parameter adjust ignored"
            );
            return false;
        }
        let changed = self.params.adjust(parameter, direction);
        tracing::debug!(
            parameter = parameter.as_str(),
            ?direction,
            changed,
            params = %self.params,
            "parameter adjusted"
        );
        changed
    }

    /// Take the photo: score it and show the result. Only valid in `Playing`.
    pub fn on_shutter_trigger(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            tracing::trace!(phase = self.phase.as_str(), "shutter trigger ignored");
            return false;
        }
        let result = evaluate_round(&self.params, self.scene, self.locale);
        tracing::debug!(
            scene = %self.scene.id,
            params = %self.params,
            score = result.score,
            classification = result.classification.as_str(),
            ev_difference = result.ev_difference,
            "photo taken"
        );
        self.rounds_played = self.rounds_played.saturating_add(1);
        self.total_score = self.total_score.saturating_add(result.score as u32);
        self.last_result = Some(result);
        self.phase = GamePhase::Result;
        true
    }

    /// Advance to the next scene (wrapping to the first after the last), reset
    /// the setting to that scene's standard answer and resume play. Only valid
    /// in `Result`.
    pub fn on_next_round_trigger(&mut self) -> Result<bool> {
        if self.phase != GamePhase::Result {
            tracing::trace!(phase = self.phase.as_str(), "next round trigger ignored");
            return Ok(false);
        }
        let next_index = (self.scene_index + 1) % self.catalog.scene_count();
        let scene = self.catalog.get_scene(next_index)?;

        self.scene_index = next_index;
        self.scene = scene;
        self.params = scene.standard;
        self.last_result = None;
        self.phase = GamePhase::Playing;
        tracing::debug!(scene = %scene.id, index = next_index, "next round");
        Ok(true)
    }

    /// Dispatch one input event. Returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool> {
        match action {
            GameAction::Start => Ok(self.on_start_trigger()),
            GameAction::Adjust {
                parameter,
                direction,
            } => Ok(self.on_parameter_adjust(parameter, direction)),
            GameAction::Shutter => Ok(self.on_shutter_trigger()),
            GameAction::NextRound => self.on_next_round_trigger(),
        }
    }
}
