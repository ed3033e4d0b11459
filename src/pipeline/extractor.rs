use crate::error::TrackerError;
use crate::pipeline::types::{Frame, LandmarkSet};
use image::RgbImage;
use serde::Deserialize;
use std::sync::Mutex;

/// Parameters handed to the hand-pose backend at construction.
///
/// Temporal mode (`static_mode: false`) lets the backend reuse prior-frame
/// state to keep tracking stable between frames, which is also why a backend
/// instance must never see two frames at once.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    pub max_hands: usize,
    pub static_mode: bool,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            max_hands: 1,
            static_mode: false,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

/// The external hand-pose detection capability.
///
/// Implementations carry temporal tracking state across calls, so `detect`
/// takes `&mut self` and callers must serialize access. Images arrive in RGB
/// channel order. Hands are reported in the backend's own ranking order.
pub trait HandTracker: Send {
    fn detect(&mut self, image: &RgbImage) -> Result<Vec<LandmarkSet>, TrackerError>;
}

/// Stand-in backend for deployments where the real hand-pose capability is
/// injected by the embedding service; carries no state and reports no hands,
/// so every frame resolves to the no-hand sentinel.
pub struct IdleTracker;

impl IdleTracker {
    pub fn new(settings: &TrackerSettings) -> Box<dyn HandTracker> {
        tracing::debug!(
            max_hands = settings.max_hands,
            static_mode = settings.static_mode,
            min_detection_confidence = settings.min_detection_confidence as f64,
            min_tracking_confidence = settings.min_tracking_confidence as f64,
            "Idle hand tracker constructed"
        );
        Box::new(Self)
    }
}

impl HandTracker for IdleTracker {
    fn detect(&mut self, _image: &RgbImage) -> Result<Vec<LandmarkSet>, TrackerError> {
        Ok(Vec::new())
    }
}

/// Wraps the single shared tracker instance behind a mutex.
///
/// The lock is held for the full duration of each detect call; all
/// extraction work in the process is serialized through it.
pub struct LandmarkExtractor {
    tracker: Mutex<Box<dyn HandTracker>>,
}

impl LandmarkExtractor {
    pub fn new(tracker: Box<dyn HandTracker>) -> Self {
        Self {
            tracker: Mutex::new(tracker),
        }
    }

    /// Constructs the backend through `factory` with the resolved settings
    /// and wraps it. Wiring code goes through here so the configured
    /// parameters actually reach the backend.
    pub fn from_factory<F>(settings: &TrackerSettings, factory: F) -> Self
    where
        F: FnOnce(&TrackerSettings) -> Box<dyn HandTracker>,
    {
        Self::new(factory(settings))
    }

    /// Runs detection on one frame and returns the first reported hand.
    ///
    /// Multiple hands in frame are not an error; hands past the first are
    /// dropped. `Ok(None)` means no hand was found.
    pub fn extract(&self, frame: &Frame) -> Result<Option<LandmarkSet>, TrackerError> {
        let rgb = frame.to_rgb_image();
        let mut tracker = self.tracker.lock().map_err(|_| TrackerError::Poisoned)?;
        let hands = tracker.detect(&rgb)?;
        Ok(hands.into_iter().next())
    }
}
