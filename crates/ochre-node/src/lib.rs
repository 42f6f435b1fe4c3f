//! Transport and runtime glue around the ochre detection core.
//!
//! The core's external collaborators are modeled as in-process channels:
//! a [`FrameSlot`] delivering at most one pending frame (newer frames
//! replace older undelivered ones), an mpsc channel for calibration color
//! samples, an outbound mpsc channel for per-frame reports, and a shared
//! [`ParamStore`] the node snapshots once per frame. [`BlobNode::run`]
//! ties them together in a frame-synchronous loop.

pub mod node;
pub mod params;
pub mod slot;

pub use node::BlobNode;
pub use params::ParamStore;
pub use slot::FrameSlot;
