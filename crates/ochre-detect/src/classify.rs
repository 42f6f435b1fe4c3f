use crate::DetectConfig;
use std::f64::consts::TAU;

/// A color projected onto the chroma plane.
///
/// `hue` is the chroma angle in turns, in (-0.5, 0.5]; `sat` is the chroma
/// magnitude. This is a simplified chroma-angle transform, not standard HSV:
/// the plane axes are `alpha = r - (g+b)/2` and `beta = (g-b)·√3/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chroma {
    pub hue: f64,
    pub sat: f64,
}

/// Project a color onto the chroma plane.
///
/// The angle is invariant under uniform scaling of (r, g, b), so callers
/// may pass raw channel values or normalized ones; only `sat` carries the
/// input scale.
pub fn chroma(r: f64, g: f64, b: f64) -> Chroma {
    let alpha = r - (g + b) / 2.0;
    let beta = (g - b) * 3.0_f64.sqrt() / 2.0;
    Chroma {
        hue: beta.atan2(alpha) / TAU,
        sat: (alpha * alpha + beta * beta).sqrt(),
    }
}

/// Circular distance between two hues, in turns.
///
/// `rem_euclid` keeps the wraparound at ±0.5 symmetric: the result is the
/// shorter way around the circle regardless of the sign of `hue - target`.
pub fn hue_distance(hue: f64, target: f64) -> f64 {
    ((hue - target + 0.5).rem_euclid(1.0) - 0.5).abs()
}

/// Outcome of classifying one pixel against the configured target color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelClass {
    pub hue_good: bool,
    pub sat_good: bool,
}

impl PixelClass {
    pub fn is_foreground(&self) -> bool {
        self.hue_good && self.sat_good
    }
}

/// Classify one pixel's byte channels against the configuration snapshot.
///
/// Channels are normalized by 1/256 before the chroma transform. Both
/// comparisons are strict: a hue distance exactly at `hue_threshold / 2` or
/// a saturation exactly at `sat_threshold` classifies as background.
pub fn classify(r: u8, g: u8, b: u8, config: &DetectConfig) -> PixelClass {
    let c = chroma(r as f64 / 256.0, g as f64 / 256.0, b as f64 / 256.0);
    PixelClass {
        hue_good: hue_distance(c.hue, config.target_hue()) < config.hue_threshold() / 2.0,
        sat_good: c.sat > config.sat_threshold(),
    }
}

/// Debug-view channels for one classified pixel: every input channel is
/// halved, then 128 is added to red when the hue matched and to blue when
/// the saturation matched.
pub fn debug_rgb(r: u8, g: u8, b: u8, class: &PixelClass) -> (u8, u8, u8) {
    (
        r / 2 + if class.hue_good { 128 } else { 0 },
        g / 2,
        b / 2 + if class.sat_good { 128 } else { 0 },
    )
}
