use ochre_base::log::info;
use ochre_detect::DetectConfig;
use std::sync::Mutex;

/// Live detection parameters shared between the node and its operators.
///
/// The node reads one immutable snapshot per frame and never writes
/// through it mid-frame; calibration writes the target hue back here.
#[derive(Debug)]
pub struct ParamStore {
    inner: Mutex<DetectConfig>,
}

impl Default for ParamStore {
    fn default() -> Self {
        Self::new(DetectConfig::default())
    }
}

impl ParamStore {
    pub fn new(config: DetectConfig) -> Self {
        Self {
            inner: Mutex::new(config),
        }
    }

    /// The current configuration, cloned. Each frame is processed against
    /// exactly one snapshot.
    pub fn snapshot(&self) -> DetectConfig {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Replace the full configuration.
    pub fn replace(&self, config: DetectConfig) {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = config;
    }

    /// Write a new target hue, as produced by calibration.
    pub fn set_target_hue(&self, target_hue: f64) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *inner = inner.clone().with_target_hue(target_hue);
        info!("target_hue set to {:.4}", target_hue);
    }
}
