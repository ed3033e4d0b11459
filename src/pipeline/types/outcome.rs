/// Label reported when the tracker finds no hand in the frame. A normal
/// terminal outcome, not an error; the frontend shows it as empty subtitle.
pub const NO_HAND_LABEL: &str = "no_hand_detected";

/// Terminal outcome of one recognition request.
///
/// Every request ends in exactly one of these; no stage is retried and no
/// fault escapes the pipeline boundary unconverted.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// A hand was found and classified to this label.
    Detected(String),
    /// Valid frame, no detectable hand. The classifier is never consulted.
    NoHand,
    /// The model artifact failed to load at startup; permanent until restart.
    ModelUnavailable,
    /// The request carried no frame field.
    MissingFrame,
    /// The frame payload was not decodable into an image.
    DecodeFailed,
    /// Unexpected failure during extraction or classification.
    Processing(String),
}
