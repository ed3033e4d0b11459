use crate::pipeline::classifier::GestureModel;
use crate::pipeline::decoder::decode_frame;
use crate::pipeline::extractor::LandmarkExtractor;
use crate::pipeline::types::GestureOutcome;
use crate::pipeline::vectorizer::vectorize;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Runs one frame through the full recognition pipeline and maps every
/// branch to a terminal [`GestureOutcome`].
///
/// Stage order per request: model availability gate, payload presence,
/// decode, landmark extraction, vectorize, classify, label resolution.
/// Each branch is terminal; nothing is retried.
pub struct GestureRecognizer {
    model: Arc<GestureModel>,
    extractor: Arc<LandmarkExtractor>,
}

impl GestureRecognizer {
    pub fn new(model: Arc<GestureModel>, extractor: Arc<LandmarkExtractor>) -> Self {
        Self { model, extractor }
    }

    pub fn recognize(&self, frame_field: Option<&str>) -> GestureOutcome {
        // Cheapest fail-fast: a model that failed to load at startup will
        // not come back without a restart, so skip decode and extraction.
        if !self.model.is_available() {
            return GestureOutcome::ModelUnavailable;
        }

        let payload = match frame_field {
            Some(payload) if !payload.is_empty() => payload,
            _ => return GestureOutcome::MissingFrame,
        };

        let frame = match decode_frame(payload) {
            Ok(frame) => frame,
            Err(e) => {
                debug!("Frame decode failed: {e}");
                return GestureOutcome::DecodeFailed;
            }
        };

        let landmarks = match self.extractor.extract(&frame) {
            Ok(Some(landmarks)) => landmarks,
            Ok(None) => return GestureOutcome::NoHand,
            Err(e) => return GestureOutcome::Processing(e.to_string()),
        };

        let features = vectorize(&landmarks);
        match self.model.classify(&features) {
            Some(label) => {
                let elapsed_ms = (Utc::now() - frame.captured_at()).num_milliseconds();
                debug!(frame = %frame.id(), label = %label, elapsed_ms, "Gesture classified");
                GestureOutcome::Detected(label)
            }
            // Unreachable once the gate above passed; the model state never
            // changes after load. Mapped rather than unwrapped.
            None => GestureOutcome::ModelUnavailable,
        }
    }
}
