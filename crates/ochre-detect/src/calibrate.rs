use crate::classify::chroma;

/// One sampled color, as delivered by a color picker. Alpha is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Hue of a sampled color, for use as the new classification target.
///
/// Applies the same chroma-angle transform as the classifier, but to the
/// raw channel values. The angle is invariant under uniform scaling of
/// (r, g, b), so it matches the classifier's 1/256-normalized hue for the
/// same color. Purely functional; writing the result into the live
/// configuration is the caller's job.
pub fn sample_hue(sample: &ColorSample) -> f64 {
    chroma(sample.r, sample.g, sample.b).hue
}
