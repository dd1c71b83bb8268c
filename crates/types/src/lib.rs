//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, making them usable in any context
//! (scoring engine, terminal rendering, input heuristics).
//!
//! # Camera Settings
//!
//! Every camera parameter is restricted to a fixed, ordered stop table:
//!
//! | Parameter | Stops |
//! |-----------|-------|
//! | Aperture (f-number) | 1.8, 2.8, 4, 5.6, 8, 11, 16, 22 |
//! | Shutter (1/x s) | 1, 2, 4, 8, 15, 30, 60, 125, 250, 500, 1000, 2000 |
//! | ISO | 50, 100, 200, 400, 800, 1600, 3200, 6400 |
//!
//! A stop is stored as its index into the table, so an out-of-table value can
//! never be constructed. Adjustments move exactly one index and clamp at both ends.
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCORE_PER_EV` | 15 | Points lost per EV of difference |
//! | `PERFECT_BAND_EV` | 1.0 | `|diff|` below this is a perfect shot |
//! | `SLIGHT_BAND_EV` | 1.5 | `|diff|` up to this is only "slightly" off |
//! | `OUTCOME_IMAGE_THRESHOLD_EV` | 1.5 | Over/under image selection threshold |
//! | `EV_EPSILON` | 1e-9 | Differences below this count as an exact match |
//!
//! # Examples
//!
//! ```
//! use light_catcher_types::{Aperture, Direction, Parameter, ParameterSet, Shutter, Iso};
//!
//! let mut params = ParameterSet::new(
//!     Aperture::from_value(8.0).unwrap(),
//!     Shutter::from_value(125).unwrap(),
//!     Iso::from_value(200).unwrap(),
//! );
//!
//! // One stop faster.
//! assert!(params.adjust(Parameter::Shutter, Direction::Increase));
//! assert_eq!(params.shutter.denominator(), 250);
//!
//! // Clamped at the top of the table.
//! let fastest = Shutter::from_value(2000).unwrap();
//! assert_eq!(fastest.step(Direction::Increase), fastest);
//!
//! assert_eq!(params.to_string(), "f/8 1/250s ISO 200");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aperture stops (f-numbers), smallest f-number (widest opening) first.
pub const APERTURES: [f64; 8] = [1.8, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0];

/// Shutter denominators: `x` in "1/x second". `1` is one full second.
pub const SHUTTER_DENOMINATORS: [u32; 12] = [1, 2, 4, 8, 15, 30, 60, 125, 250, 500, 1000, 2000];

/// Sensor sensitivity stops.
pub const ISOS: [u32; 8] = [50, 100, 200, 400, 800, 1600, 3200, 6400];

/// Points deducted per EV of difference from the standard answer.
pub const SCORE_PER_EV: f64 = 15.0;

/// Maximum score for a round.
pub const MAX_SCORE: u8 = 100;

/// `|diff|` strictly below this is a perfect exposure.
pub const PERFECT_BAND_EV: f64 = 1.0;

/// `|diff|` above this is a full over/under exposure.
pub const SLIGHT_BAND_EV: f64 = 1.5;

/// Threshold used by the coarse three-way outcome image selection.
pub const OUTCOME_IMAGE_THRESHOLD_EV: f64 = 1.5;

/// EV differences with a smaller magnitude are treated as an exact match.
pub const EV_EPSILON: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_constants_are_pinned() {
        assert_eq!(SCORE_PER_EV, 15.0);
        assert_eq!(MAX_SCORE, 100);
        assert_eq!(PERFECT_BAND_EV, 1.0);
        assert_eq!(SLIGHT_BAND_EV, 1.5);
        assert_eq!(OUTCOME_IMAGE_THRESHOLD_EV, 1.5);
    }

    #[test]
    fn stop_tables_are_strictly_increasing() {
        assert!(APERTURES.windows(2).all(|w| w[0] < w[1]));
        assert!(SHUTTER_DENOMINATORS.windows(2).all(|w| w[0] < w[1]));
        assert!(ISOS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        let widest = Aperture::from_index(0).unwrap();
        assert_eq!(widest.step(Direction::Decrease), widest);
        let narrowest = Aperture::from_index(APERTURES.len() - 1).unwrap();
        assert_eq!(narrowest.step(Direction::Increase), narrowest);

        let slowest = Shutter::from_index(0).unwrap();
        assert_eq!(slowest.step(Direction::Decrease), slowest);
        let lowest = Iso::from_index(0).unwrap();
        assert_eq!(lowest.step(Direction::Decrease), lowest);
        let highest = Iso::from_index(ISOS.len() - 1).unwrap();
        assert_eq!(highest.step(Direction::Increase), highest);
    }

    #[test]
    fn steps_move_exactly_one_index() {
        let a = Aperture::from_value(5.6).unwrap();
        assert_eq!(a.step(Direction::Increase).f_number(), 8.0);
        assert_eq!(a.step(Direction::Decrease).f_number(), 4.0);

        let s = Shutter::from_value(125).unwrap();
        assert_eq!(s.step(Direction::Increase).denominator(), 250);
        assert_eq!(s.step(Direction::Decrease).denominator(), 60);
    }

    #[test]
    fn from_value_rejects_values_outside_the_tables() {
        assert!(Aperture::from_value(3.5).is_none());
        assert!(Shutter::from_value(3).is_none());
        assert!(Iso::from_value(300).is_none());
        assert!(Aperture::from_index(APERTURES.len()).is_none());
    }

    #[test]
    fn one_second_shutter_is_one_second() {
        let s = Shutter::from_value(1).unwrap();
        assert_eq!(s.seconds(), 1.0);
        assert_eq!(s.to_string(), "1s");
        assert_eq!(Shutter::from_value(500).unwrap().seconds(), 1.0 / 500.0);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Aperture::from_value(1.8).unwrap().to_string(), "f/1.8");
        assert_eq!(Aperture::from_value(22.0).unwrap().to_string(), "f/22");
        assert_eq!(Shutter::from_value(60).unwrap().to_string(), "1/60s");
        assert_eq!(Iso::from_value(3200).unwrap().to_string(), "ISO 3200");
    }

    #[test]
    fn adjust_reports_whether_anything_changed() {
        let mut params = ParameterSet::from_indices(0, 0, 0).unwrap();
        assert!(!params.adjust(Parameter::Iso, Direction::Decrease));
        assert!(params.adjust(Parameter::Iso, Direction::Increase));
        assert_eq!(params.iso.value(), 100);
    }

    #[test]
    fn parameter_set_serializes_as_numeric_values() {
        let params = ParameterSet::from_indices(3, 7, 2).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"aperture":5.6,"shutter":125,"iso":200}"#);

        let back: ParameterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);

        let bad = serde_json::from_str::<ParameterSet>(r#"{"aperture":5.0,"shutter":125,"iso":200}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn locale_parsing_accepts_common_spellings() {
        assert_eq!(Locale::from_str("zh-TW"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_str("zh_tw"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_str("EN"), Some(Locale::En));
        assert_eq!(Locale::from_str("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_str("fr"), None);
    }
}

/// Error for a numeric value that is not one of the fixed stops.
#[derive(Debug, Clone, PartialEq)]
pub struct StopError {
    pub parameter: Parameter,
    pub value: f64,
}

impl fmt::Display for StopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is not a valid {} stop",
            self.value,
            self.parameter.as_str()
        )
    }
}

impl std::error::Error for StopError {}

/// Which way to move along a stop table.
///
/// - **Increase**: next index (larger f-number, faster shutter, higher ISO)
/// - **Decrease**: previous index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increase,
    Decrease,
}

fn step_index(index: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Increase => (index + 1).min(len - 1),
        Direction::Decrease => index.saturating_sub(1),
    }
}

/// Lens aperture, one of [`APERTURES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Aperture(u8);

impl Aperture {
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < APERTURES.len() {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Look up an f-number in the stop table.
    pub fn from_value(f_number: f64) -> Option<Self> {
        APERTURES
            .iter()
            .position(|&v| (v - f_number).abs() < 1e-9)
            .and_then(Self::from_index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn f_number(self) -> f64 {
        APERTURES[self.index()]
    }

    pub fn step(self, direction: Direction) -> Self {
        Self(step_index(self.index(), APERTURES.len(), direction) as u8)
    }
}

impl TryFrom<f64> for Aperture {
    type Error = StopError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(StopError {
            parameter: Parameter::Aperture,
            value,
        })
    }
}

impl From<Aperture> for f64 {
    fn from(value: Aperture) -> Self {
        value.f_number()
    }
}

impl fmt::Display for Aperture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f/{}", self.f_number())
    }
}

/// Shutter speed, one of [`SHUTTER_DENOMINATORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Shutter(u8);

impl Shutter {
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SHUTTER_DENOMINATORS.len() {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn from_value(denominator: u32) -> Option<Self> {
        SHUTTER_DENOMINATORS
            .iter()
            .position(|&v| v == denominator)
            .and_then(Self::from_index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn denominator(self) -> u32 {
        SHUTTER_DENOMINATORS[self.index()]
    }

    /// Exposure time in seconds. A denominator of 1 is one full second.
    pub fn seconds(self) -> f64 {
        match self.denominator() {
            1 => 1.0,
            d => 1.0 / d as f64,
        }
    }

    pub fn step(self, direction: Direction) -> Self {
        Self(step_index(self.index(), SHUTTER_DENOMINATORS.len(), direction) as u8)
    }
}

impl TryFrom<u32> for Shutter {
    type Error = StopError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(StopError {
            parameter: Parameter::Shutter,
            value: value as f64,
        })
    }
}

impl From<Shutter> for u32 {
    fn from(value: Shutter) -> Self {
        value.denominator()
    }
}

impl fmt::Display for Shutter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.denominator() {
            1 => f.write_str("1s"),
            d => write!(f, "1/{}s", d),
        }
    }
}

/// Sensor sensitivity, one of [`ISOS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Iso(u8);

impl Iso {
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ISOS.len() {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn from_value(iso: u32) -> Option<Self> {
        ISOS.iter()
            .position(|&v| v == iso)
            .and_then(Self::from_index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn value(self) -> u32 {
        ISOS[self.index()]
    }

    pub fn step(self, direction: Direction) -> Self {
        Self(step_index(self.index(), ISOS.len(), direction) as u8)
    }
}

impl TryFrom<u32> for Iso {
    type Error = StopError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(StopError {
            parameter: Parameter::Iso,
            value: value as f64,
        })
    }
}

impl From<Iso> for u32 {
    fn from(value: Iso) -> Self {
        value.value()
    }
}

impl fmt::Display for Iso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ISO {}", self.value())
    }
}

/// The adjustable camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Aperture,
    Shutter,
    Iso,
}

impl Parameter {
    /// Parse parameter name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "aperture" => Some(Parameter::Aperture),
            "shutter" => Some(Parameter::Shutter),
            "iso" => Some(Parameter::Iso),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Aperture => "aperture",
            Parameter::Shutter => "shutter",
            Parameter::Iso => "iso",
        }
    }
}

/// A complete camera setting. Every field is a member of its stop table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterSet {
    pub aperture: Aperture,
    pub shutter: Shutter,
    pub iso: Iso,
}

impl ParameterSet {
    pub const fn new(aperture: Aperture, shutter: Shutter, iso: Iso) -> Self {
        Self {
            aperture,
            shutter,
            iso,
        }
    }

    /// Build from stop-table indices (aperture, shutter, iso).
    pub fn from_indices(aperture: usize, shutter: usize, iso: usize) -> Option<Self> {
        Some(Self {
            aperture: Aperture::from_index(aperture)?,
            shutter: Shutter::from_index(shutter)?,
            iso: Iso::from_index(iso)?,
        })
    }

    /// Move one parameter a single stop. Returns `true` if the value changed.
    pub fn adjust(&mut self, parameter: Parameter, direction: Direction) -> bool {
        let before = *self;
        match parameter {
            Parameter::Aperture => self.aperture = self.aperture.step(direction),
            Parameter::Shutter => self.shutter = self.shutter.step(direction),
            Parameter::Iso => self.iso = self.iso.step(direction),
        }
        *self != before
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.aperture, self.shutter, self.iso)
    }
}

/// Discrete input events the game reacts to.
///
/// These are produced by any input source (keyboard, motion heuristic, tests)
/// and delivered to the game session in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Leave the title screen
    Start,
    /// Move one camera parameter by one stop
    Adjust {
        parameter: Parameter,
        direction: Direction,
    },
    /// Take the photo and score it
    Shutter,
    /// Continue from the result screen to the next scene
    NextRound,
}

/// Game flow states. The cycle is Start -> Playing -> Result -> Playing ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Start,
    Playing,
    Result,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::Result => "result",
        }
    }
}

/// Five-way verdict on a shot, derived from the signed EV difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Perfect,
    SlightOver,
    Over,
    SlightUnder,
    Under,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Perfect => "perfect",
            Classification::SlightOver => "slightOver",
            Classification::Over => "over",
            Classification::SlightUnder => "slightUnder",
            Classification::Under => "under",
        }
    }
}

/// Coarse three-way image choice (independent of [`Classification`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeImage {
    OverExposed,
    UnderExposed,
    Balanced,
}

/// Language of player-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Traditional Chinese (Taiwan)
    ZhTw,
    #[default]
    En,
}

impl Locale {
    /// Parse a locale tag (case-insensitive, `-` or `_` separators).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "zh-tw" | "zh-hant" | "zh" => Some(Locale::ZhTw),
            "en" | "en-us" | "en-gb" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::En => "en",
        }
    }
}
