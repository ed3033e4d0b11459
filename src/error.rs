use thiserror::Error;

// Main application error type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Pipeline error: {0}")]
    Pipeline(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("The recognizer is no longer accepting requests.")]
    RecognizerGone,
}

// Frame decoding failures. Anything wrong with the payload bytes lands
// here; the mapper turns it into a decode_failed response.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Unsupported or corrupt image bytes: {0}")]
    Image(#[from] image::ImageError),
}

// Startup-time artifact loading failures. Determined once; the model stays
// unavailable for the rest of the process.
#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Model artifact is malformed: {0}")]
    Shape(String),
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Hand tracker backend failure: {0}")]
    Backend(String),
    #[error("Hand tracker lock poisoned by a panicked request")]
    Poisoned,
}
