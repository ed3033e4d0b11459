pub mod classifier;
pub mod decoder;
pub mod extractor;
pub mod recognizer;
pub mod service;
pub mod types;
pub mod vectorizer;

#[cfg(test)]
pub(crate) mod testing;

pub use recognizer::GestureRecognizer;
pub use service::GestureService;
pub use types::{FeatureVector, Frame, GestureOutcome, Landmark, LandmarkSet};
