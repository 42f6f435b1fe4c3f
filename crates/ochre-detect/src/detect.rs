use crate::classify::{classify, debug_rgb};
use crate::config::DetectConfig;
use crate::grid::{CANDIDATE, LabelGrid};
use crate::label::label_components;
use ochre_frame::Frame;

/// One reported blob: centroid offset from the frame center and an
/// inverse-spread proxy for distance.
///
/// `z = 1 / sqrt(var_x + var_y)`. A component whose pixels all share one
/// coordinate has zero spread; such components are only reachable with a
/// zero size threshold, and report `z = +infinity` rather than dividing
/// by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Everything produced from one frame: the classification debug view and
/// the surviving detections, in component-id order.
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub debug: Frame,
    pub detections: Vec<Detection>,
}

/// The per-frame segmentation pipeline.
///
/// Stateless across frames except for the label grid buffer, which is
/// reused between calls and reallocated only when the frame dimensions
/// change. Processing is synchronous: one frame is fully classified,
/// labeled, accumulated, and filtered before the call returns.
#[derive(Debug, Default)]
pub struct BlobDetector {
    labels: LabelGrid,
}

impl BlobDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the full pipeline over one frame with the given configuration
    /// snapshot.
    ///
    /// Classification marks matching pixels as candidates in the label grid
    /// and writes the debug view; labeling floods candidates into
    /// components; components with more than `size_threshold` pixels become
    /// detections.
    pub fn process(&mut self, frame: &Frame, config: &DetectConfig) -> FrameReport {
        self.labels.reset(frame.width(), frame.height());
        let mut debug = frame.blank_like();

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let (r, g, b) = frame.rgb_at(x, y);
                let class = classify(r, g, b, config);
                if class.is_foreground() {
                    self.labels.set(x, y, CANDIDATE);
                }
                let (dr, dg, db) = debug_rgb(r, g, b, &class);
                debug.set_rgb(x, y, dr, dg, db);
            }
        }

        let blobs = label_components(&mut self.labels);

        // Offsets are relative to the integer half-dimensions
        let half_w = (frame.width() / 2) as f64;
        let half_h = (frame.height() / 2) as f64;

        let detections = blobs
            .iter()
            .filter(|blob| blob.n() > config.size_threshold())
            .map(|blob| {
                let spread = blob.var_x() + blob.var_y();
                let z = if spread == 0.0 {
                    f64::INFINITY
                } else {
                    1.0 / spread.sqrt()
                };
                Detection {
                    x: blob.mean_x() - half_w,
                    y: blob.mean_y() - half_h,
                    z,
                }
            })
            .collect();

        FrameReport { debug, detections }
    }
}
