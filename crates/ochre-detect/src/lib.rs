//! Colored-blob extraction from single color frames.
//!
//! The pipeline runs four stages over each frame, each consuming the
//! previous stage's full output:
//!
//! 1. per-pixel chroma classification against a calibrated target hue
//!    ([`classify`]),
//! 2. 4-connected component labeling via worklist flood fill ([`label`]),
//! 3. streaming centroid/spread statistics per component, Welford's online
//!    algorithm ([`blob`]),
//! 4. a size filter that turns surviving components into [`Detection`]s
//!    ([`detect`]).
//!
//! Frames are processed independently; the only state kept across frames is
//! the label grid buffer, reused to avoid per-frame allocation. The
//! [`calibrate`] module converts a sampled color into the hue representation
//! used for classification.

pub mod blob;
pub mod calibrate;
pub mod classify;
pub mod config;
pub mod detect;
pub mod grid;
pub mod label;

pub use blob::Blob;
pub use calibrate::{ColorSample, sample_hue};
pub use config::DetectConfig;
pub use detect::{BlobDetector, Detection, FrameReport};
