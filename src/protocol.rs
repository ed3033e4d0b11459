//! Payload shapes exchanged with the routing layer.
//!
//! Transport specifics (route, verb, status codes) live in the routing
//! layer; only the body shapes are fixed here. The canonical success field
//! is `text`, carried for both detected gestures and the no-hand sentinel.

use crate::pipeline::types::{GestureOutcome, NO_HAND_LABEL};
use serde::{Deserialize, Serialize};

/// One gesture request: a single camera frame as base64 image bytes,
/// optionally tagged with a `data:<mime>;base64,` prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureRequest {
    pub frame: Option<String>,
}

// Stable error codes, one per failure kind in the taxonomy.
pub const ERR_MODEL_UNAVAILABLE: &str = "model_unavailable";
pub const ERR_MISSING_FRAME: &str = "missing_frame";
pub const ERR_DECODE_FAILED: &str = "decode_failed";
pub const ERR_PROCESSING: &str = "processing_error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GestureResponse {
    fn text(label: String) -> Self {
        Self {
            text: Some(label),
            error: None,
            message: None,
        }
    }

    fn error(code: &str) -> Self {
        Self {
            text: None,
            error: Some(code.to_string()),
            message: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

impl From<GestureOutcome> for GestureResponse {
    fn from(outcome: GestureOutcome) -> Self {
        match outcome {
            GestureOutcome::Detected(label) => Self::text(label),
            GestureOutcome::NoHand => Self::text(NO_HAND_LABEL.to_string()),
            GestureOutcome::ModelUnavailable => Self::error(ERR_MODEL_UNAVAILABLE),
            GestureOutcome::MissingFrame => Self::error(ERR_MISSING_FRAME),
            GestureOutcome::DecodeFailed => Self::error(ERR_DECODE_FAILED),
            GestureOutcome::Processing(message) => Self {
                message: Some(message),
                ..Self::error(ERR_PROCESSING)
            },
        }
    }
}
