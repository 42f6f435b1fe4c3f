use ochre_base::log::debug;
use ochre_frame::RawFrame;
use std::sync::Mutex;
use tokio::sync::Notify;

/// Latest-frame slot: holds at most one undelivered frame.
///
/// When the producer outruns the consumer, a newer frame replaces the
/// older one that was never taken; the consumer always sees the most
/// recent frame. This is the transport's backpressure policy from the
/// core's point of view: at most one frame in flight.
#[derive(Debug, Default)]
pub struct FrameSlot {
    inner: Mutex<Option<RawFrame>>,
    notify: Notify,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a frame, replacing any frame still waiting in the slot.
    pub fn publish(&self, frame: RawFrame) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.replace(frame).is_some() {
            debug!("frame slot full, replacing undelivered frame");
        }
        drop(inner);
        self.notify.notify_one();
    }

    /// Wait for and take the pending frame.
    ///
    /// Cancel-safe: the slot is checked before every wait, so a frame
    /// published between a cancelled `take` and the next call is not lost.
    pub async fn take(&self) -> RawFrame {
        loop {
            let pending = self.inner.lock().unwrap_or_else(|e| e.into_inner()).take();
            if let Some(frame) = pending {
                return frame;
            }
            self.notify.notified().await;
        }
    }
}
