use crate::params::ParamStore;
use crate::slot::FrameSlot;
use ochre_base::log::{debug, info, warn};
use ochre_detect::{BlobDetector, ColorSample, FrameReport, sample_hue};
use ochre_frame::{Frame, RawFrame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Frame-synchronous processing node.
///
/// Owns a [`BlobDetector`] and drives it from two inputs: frames from a
/// [`FrameSlot`] and calibration color samples from an mpsc channel. Each
/// accepted frame is processed against one parameter snapshot and produces
/// one [`FrameReport`] on the outbound channel. Frames with an unsupported
/// encoding or an invalid buffer are logged and dropped; the loop carries
/// on with the next frame.
pub struct BlobNode {
    detector: BlobDetector,
    params: Arc<ParamStore>,
    frames: Arc<FrameSlot>,
    colors: mpsc::Receiver<ColorSample>,
    reports: mpsc::Sender<FrameReport>,
}

impl BlobNode {
    pub fn new(
        params: Arc<ParamStore>,
        frames: Arc<FrameSlot>,
        colors: mpsc::Receiver<ColorSample>,
        reports: mpsc::Sender<FrameReport>,
    ) -> Self {
        Self {
            detector: BlobDetector::new(),
            params,
            frames,
            colors,
            reports,
        }
    }

    /// Run until the report receiver goes away.
    ///
    /// At most one frame is in flight: the next frame is only taken from
    /// the slot once the current one is fully processed and reported. A
    /// closed calibration channel disables that input but keeps the node
    /// running.
    pub async fn run(mut self) {
        let mut colors_open = true;
        loop {
            tokio::select! {
                raw = self.frames.take() => {
                    if !self.handle_frame(raw).await {
                        break;
                    }
                }
                color = self.colors.recv(), if colors_open => {
                    match color {
                        Some(sample) => self.handle_color(sample),
                        None => colors_open = false,
                    }
                }
            }
        }
        debug!("report channel closed, node stopping");
    }

    /// Process one raw frame. Returns false once reports can no longer be
    /// delivered.
    async fn handle_frame(&mut self, raw: RawFrame) -> bool {
        let frame = match Frame::try_from(raw) {
            Ok(frame) => frame,
            Err(err) => {
                warn!("dropping frame: {err}");
                return true;
            }
        };

        let config = self.params.snapshot();
        let report = self.detector.process(&frame, &config);
        debug!(
            "processed {}x{} frame: {} detections",
            frame.width(),
            frame.height(),
            report.detections.len()
        );
        self.reports.send(report).await.is_ok()
    }

    fn handle_color(&self, sample: ColorSample) {
        let hue = sample_hue(&sample);
        info!(
            "calibration sample ({}, {}, {}) -> target hue {:.4}",
            sample.r, sample.g, sample.b, hue
        );
        self.params.set_target_hue(hue);
    }
}
