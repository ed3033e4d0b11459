use crate::pipeline::types::{FeatureVector, LandmarkSet, FEATURE_LEN};

/// Flattens a landmark set into the classifier's input layout.
///
/// Pure and deterministic: landmark index order is preserved, each landmark
/// contributing (x, y, z) in that order.
pub fn vectorize(landmarks: &LandmarkSet) -> FeatureVector {
    let mut values = [0.0f32; FEATURE_LEN];
    for (i, lm) in landmarks.points().iter().enumerate() {
        values[i * 3] = lm.x;
        values[i * 3 + 1] = lm.y;
        values[i * 3 + 2] = lm.z;
    }
    FeatureVector::new(values)
}
