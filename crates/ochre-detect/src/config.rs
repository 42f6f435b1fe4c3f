/// Per-frame configuration snapshot for the detection pipeline.
///
/// The core reads one snapshot per frame and never mutates it; writes (the
/// calibration path updating `target_hue`) go through whatever store owns
/// the live values.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectConfig {
    hue_threshold: f64,
    sat_threshold: f64,
    target_hue: f64,
    size_threshold: u32,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            hue_threshold: 0.04,
            sat_threshold: 0.8,
            target_hue: 0.0,
            size_threshold: 1024,
        }
    }
}

impl DetectConfig {
    /// Set the width of the accepted hue band, in turns. Range [0, 1]; a
    /// pixel matches when its circular hue distance from the target is
    /// strictly below half this value.
    pub fn with_hue_threshold(mut self, hue_threshold: f64) -> Self {
        self.hue_threshold = hue_threshold;
        self
    }

    /// Set the minimum chroma magnitude, exclusive. Range [0, 1].
    pub fn with_sat_threshold(mut self, sat_threshold: f64) -> Self {
        self.sat_threshold = sat_threshold;
        self
    }

    /// Set the target hue, in turns. Range [-0.5, 0.5].
    pub fn with_target_hue(mut self, target_hue: f64) -> Self {
        self.target_hue = target_hue;
        self
    }

    /// Set the minimum component pixel count, exclusive. Zero admits every
    /// component with at least one pixel.
    pub fn with_size_threshold(mut self, size_threshold: u32) -> Self {
        self.size_threshold = size_threshold;
        self
    }

    // Getters
    pub fn hue_threshold(&self) -> f64 {
        self.hue_threshold
    }

    pub fn sat_threshold(&self) -> f64 {
        self.sat_threshold
    }

    pub fn target_hue(&self) -> f64 {
        self.target_hue
    }

    pub fn size_threshold(&self) -> u32 {
        self.size_threshold
    }
}
