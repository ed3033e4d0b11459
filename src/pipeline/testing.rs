//! Shared fixtures for the pipeline unit tests: scriptable tracker
//! backends, in-memory frame payloads, and throwaway model artifacts.

use crate::error::TrackerError;
use crate::pipeline::extractor::HandTracker;
use crate::pipeline::types::{
    FeatureVector, Frame, Landmark, LandmarkSet, FEATURE_LEN, LANDMARK_COUNT,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub fn uniform_landmarks(value: f32) -> LandmarkSet {
    let points = vec![
        Landmark {
            x: value,
            y: value,
            z: value,
        };
        LANDMARK_COUNT
    ];
    LandmarkSet::new(points).expect("fixture has exactly 21 points")
}

pub fn uniform_features(value: f32) -> FeatureVector {
    FeatureVector::new([value; FEATURE_LEN])
}

pub fn tiny_frame() -> Frame {
    Frame::from_bgr(2, 2, vec![0; 12])
}

/// Base64 payload of a PNG-encoded frame, with or without the data-URL tag.
pub fn encode_frame_payload(image: &RgbImage, with_prefix: bool) -> String {
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("in-memory PNG encode");
    let encoded = STANDARD.encode(bytes.into_inner());
    if with_prefix {
        format!("data:image/png;base64,{encoded}")
    } else {
        encoded
    }
}

/// Tracker stub that replays a fixed detection result on every call.
pub struct ScriptedTracker {
    hands: Vec<LandmarkSet>,
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedTracker {
    pub fn with_hands(hands: Vec<LandmarkSet>) -> Self {
        Self {
            hands,
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::with_hands(Vec::new())
    }

    pub fn failing(message: &str) -> Self {
        Self {
            hands: Vec::new(),
            failure: Some(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl HandTracker for ScriptedTracker {
    fn detect(&mut self, _image: &RgbImage) -> Result<Vec<LandmarkSet>, TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(TrackerError::Backend(message.clone())),
            None => Ok(self.hands.clone()),
        }
    }
}

/// Tracker stub that must never be reached; panics on first contact.
pub struct UnreachableTracker;

impl HandTracker for UnreachableTracker {
    fn detect(&mut self, _image: &RgbImage) -> Result<Vec<LandmarkSet>, TrackerError> {
        panic!("tracker was invoked on a path that should have exited earlier");
    }
}

/// Tracker stub that records whether two detect calls ever overlapped.
///
/// Detect holds an in-use flag across a short sleep; any unsynchronized
/// concurrent caller trips the overlap flag.
pub struct SerialProbeTracker {
    hands: Vec<LandmarkSet>,
    in_use: Arc<AtomicBool>,
    overlapped: Arc<AtomicBool>,
}

impl SerialProbeTracker {
    pub fn new(hands: Vec<LandmarkSet>) -> Self {
        Self {
            hands,
            in_use: Arc::new(AtomicBool::new(false)),
            overlapped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn overlap_flag(&self) -> Arc<AtomicBool> {
        self.overlapped.clone()
    }
}

impl HandTracker for SerialProbeTracker {
    fn detect(&mut self, _image: &RgbImage) -> Result<Vec<LandmarkSet>, TrackerError> {
        if self.in_use.swap(true, Ordering::SeqCst) {
            self.overlapped.store(true, Ordering::SeqCst);
        }
        std::thread::sleep(Duration::from_millis(2));
        self.in_use.store(false, Ordering::SeqCst);
        Ok(self.hands.clone())
    }
}

/// JSON artifact whose weights are all zero, so the class with the highest
/// bias always wins. `winner` picks that class.
pub fn bias_only_artifact(classes: usize, winner: usize, labels: Option<&[&str]>) -> String {
    let weights: Vec<Vec<f32>> = (0..classes).map(|_| vec![0.0; FEATURE_LEN]).collect();
    let bias: Vec<f32> = (0..classes)
        .map(|id| if id == winner { 1.0 } else { 0.0 })
        .collect();
    let model = serde_json::json!({ "weights": weights, "bias": bias });
    match labels {
        Some(labels) => serde_json::json!({ "model": model, "labels": labels }).to_string(),
        None => model.to_string(),
    }
}

/// Model artifact written under the system temp dir, removed on drop.
pub struct TempModelFile {
    path: PathBuf,
}

impl TempModelFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempModelFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub fn write_model_file(json: &str) -> TempModelFile {
    let path = std::env::temp_dir().join(format!("gesture-model-{}.json", Uuid::new_v4()));
    std::fs::write(&path, json).expect("temp model file write");
    TempModelFile { path }
}

pub fn open_palm_payload() -> String {
    encode_frame_payload(&RgbImage::from_pixel(16, 16, Rgb([200, 180, 160])), true)
}
