//! Exposure model - maps camera settings to a single EV-like number.
//!
//! `EV = log2(N² / t) + log2(ISO / 100)` where `N` is the f-number and `t` the
//! exposure time in seconds. A larger value is treated as a brighter shot when
//! comparing against a scene's standard answer.

use crate::types::ParameterSet;

/// Compute the exposure value for raw stop values.
///
/// A shutter denominator of 1 means one full second; every other denominator
/// `x` means `1/x` seconds.
pub fn compute_exposure_value(aperture: f64, shutter_denominator: u32, iso: u32) -> f64 {
    let t = if shutter_denominator == 1 {
        1.0
    } else {
        1.0 / shutter_denominator as f64
    };
    (aperture * aperture / t).log2() + (iso as f64 / 100.0).log2()
}

/// Exposure value of a complete parameter set.
pub fn exposure_value(params: &ParameterSet) -> f64 {
    compute_exposure_value(
        params.aperture.f_number(),
        params.shutter.denominator(),
        params.iso.value(),
    )
}
