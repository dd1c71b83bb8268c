//! Brightness-region motion heuristic.
//!
//! Turns a stream of 8-bit luma frames (from a camera or any other source) into
//! [`GameAction`]s without real hand tracking:
//!
//! - Left strip: brightness maps to a hand height. A raised hand stops down the
//!   aperture, a lowered hand opens it up.
//! - Right strip: brightness maps to a horizontal hand position. Right is a
//!   faster shutter, left is slower.
//! - Center box: getting brighter lowers the ISO, getting darker raises it.
//! - Motion in all three regions for long enough fires the shutter once.
//!
//! The first frame (and any frame whose dimensions differ from the previous one)
//! only records baselines.

use arrayvec::ArrayVec;

use crate::types::{Direction, GameAction, Parameter};

/// Errors raised when building a [`LumaFrame`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MotionError {
    #[error("frame has zero width or height ({width}x{height})")]
    EmptyFrame { width: usize, height: usize },

    #[error("frame buffer holds {actual} pixels, expected at least {expected}")]
    FrameTooSmall { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, MotionError>;

/// A borrowed 8-bit grayscale frame in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct LumaFrame<'a> {
    width: usize,
    height: usize,
    pixels: &'a [u8],
}

impl<'a> LumaFrame<'a> {
    pub fn new(width: usize, height: usize, pixels: &'a [u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MotionError::EmptyFrame { width, height });
        }
        let expected = width.saturating_mul(height);
        if pixels.len() < expected {
            return Err(MotionError::FrameTooSmall {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Average luma of `[x0, x1) x [y0, y1)`, sampling every `step`th pixel on
    /// both axes.
    fn region_average(&self, x0: usize, x1: usize, y0: usize, y1: usize, step: usize) -> f64 {
        let step = step.max(1);
        let mut sum = 0u64;
        let mut count = 0u64;
        for y in (y0..y1.min(self.height)).step_by(step) {
            let row = &self.pixels[y * self.width..(y + 1) * self.width];
            for x in (x0..x1.min(self.width)).step_by(step) {
                sum += row[x] as u64;
                count += 1;
            }
        }
        if count == 0 {
            0.0
        } else {
            sum as f64 / count as f64
        }
    }
}

/// Tuning for [`MotionDetector`]. Fractions are relative to the frame size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Width of the left (aperture) and right (shutter) strips.
    pub side_strip: f64,
    /// Width and height of the centered ISO box.
    pub center_box: f64,
    /// Sample every n-th pixel on both axes.
    pub sample_step: usize,
    /// Luma change in a side strip that counts as motion.
    pub brightness_delta: f64,
    /// Luma change in the center box that counts as motion.
    pub iso_delta: f64,
    /// Minimum estimated hand travel (pixels) before the estimate is updated.
    pub movement_px: f64,
    /// Lerp factor toward the new hand estimate.
    pub smoothing: f64,
    /// Hand above this fraction of the height (or right of `1 - raise` of the
    /// width) steps the parameter up.
    pub raise: f64,
    /// Hand below this fraction of the height (or left of `1 - lower` of the
    /// width) steps the parameter down.
    pub lower: f64,
    /// Consecutive all-region motion frames required to fire the shutter.
    pub shutter_hold_frames: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            side_strip: 0.3,
            center_box: 0.4,
            sample_step: 5,
            brightness_delta: 5.0,
            iso_delta: 8.0,
            movement_px: 5.0,
            smoothing: 0.2,
            raise: 0.4,
            lower: 0.6,
            shutter_hold_frames: 20,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Baseline {
    width: usize,
    height: usize,
    left: f64,
    right: f64,
    center: f64,
}

/// Frame-to-frame motion state.
#[derive(Debug, Clone)]
pub struct MotionDetector {
    config: MotionConfig,
    baseline: Option<Baseline>,
    /// Smoothed hand height in the left strip (pixels from the top).
    hand_y: f64,
    /// Smoothed hand position in the right strip (pixels from the left).
    hand_x: f64,
    hold_frames: u32,
    shutter_latched: bool,
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn adjust(parameter: Parameter, direction: Direction) -> GameAction {
    GameAction::Adjust {
        parameter,
        direction,
    }
}

impl MotionDetector {
    pub fn new() -> Self {
        Self::with_config(MotionConfig::default())
    }

    pub fn with_config(config: MotionConfig) -> Self {
        Self {
            config,
            baseline: None,
            hand_y: 0.0,
            hand_x: 0.0,
            hold_frames: 0,
            shutter_latched: false,
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Forget baselines and the gesture timer.
    pub fn reset(&mut self) {
        self.baseline = None;
        self.hold_frames = 0;
        self.shutter_latched = false;
    }

    /// Feed one frame and collect the actions it triggers (at most one per
    /// parameter plus the shutter).
    pub fn process_frame(&mut self, frame: &LumaFrame<'_>) -> ArrayVec<GameAction, 4> {
        let mut actions = ArrayVec::new();
        let cfg = self.config;
        let (w, h) = (frame.width, frame.height);
        let (wf, hf) = (w as f64, h as f64);

        let strip = ((wf * cfg.side_strip).round() as usize).min(w);
        let box_w = ((wf * cfg.center_box).round() as usize).min(w);
        let box_h = ((hf * cfg.center_box).round() as usize).min(h);
        let box_x = (w - box_w) / 2;
        let box_y = (h - box_h) / 2;

        let left = frame.region_average(0, strip, 0, h, cfg.sample_step);
        let right = frame.region_average(w - strip, w, 0, h, cfg.sample_step);
        let center = frame.region_average(
            box_x,
            box_x + box_w,
            box_y,
            box_y + box_h,
            cfg.sample_step,
        );

        let prev = match self.baseline {
            Some(b) if b.width == w && b.height == h => b,
            _ => {
                self.hand_y = hf / 2.0;
                self.hand_x = wf / 2.0;
                self.hold_frames = 0;
                self.shutter_latched = false;
                self.baseline = Some(Baseline {
                    width: w,
                    height: h,
                    left,
                    right,
                    center,
                });
                return actions;
            }
        };

        // Left strip: brighter reads as a higher hand.
        let left_motion = (left - prev.left).abs() > cfg.brightness_delta;
        if left_motion {
            let estimate = hf * (1.0 - left / 255.0);
            if (estimate - self.hand_y).abs() > cfg.movement_px {
                self.hand_y = lerp(self.hand_y, estimate, cfg.smoothing);
                if self.hand_y < hf * cfg.raise {
                    actions.push(adjust(Parameter::Aperture, Direction::Increase));
                } else if self.hand_y > hf * cfg.lower {
                    actions.push(adjust(Parameter::Aperture, Direction::Decrease));
                }
            }
        }

        // Right strip: brighter reads as further right.
        let right_motion = (right - prev.right).abs() > cfg.brightness_delta;
        if right_motion {
            let estimate = wf * (right / 255.0);
            if (estimate - self.hand_x).abs() > cfg.movement_px {
                self.hand_x = lerp(self.hand_x, estimate, cfg.smoothing);
                if self.hand_x > wf * cfg.lower {
                    actions.push(adjust(Parameter::Shutter, Direction::Increase));
                } else if self.hand_x < wf * cfg.raise {
                    actions.push(adjust(Parameter::Shutter, Direction::Decrease));
                }
            }
        }

        let center_motion = (center - prev.center).abs() > cfg.iso_delta;
        if center_motion {
            if center > prev.center {
                actions.push(adjust(Parameter::Iso, Direction::Decrease));
            } else {
                actions.push(adjust(Parameter::Iso, Direction::Increase));
            }
        }

        if left_motion && right_motion && center_motion {
            self.hold_frames = self.hold_frames.saturating_add(1);
            if self.hold_frames > cfg.shutter_hold_frames && !self.shutter_latched {
                self.shutter_latched = true;
                actions.push(GameAction::Shutter);
            }
        } else {
            self.hold_frames = 0;
            self.shutter_latched = false;
        }

        self.baseline = Some(Baseline {
            width: w,
            height: h,
            left,
            right,
            center,
        });
        actions
    }
}
