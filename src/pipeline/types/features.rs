use super::landmarks::LANDMARK_COUNT;

/// Length of the flattened landmark encoding: 21 landmarks times (x, y, z).
pub const FEATURE_LEN: usize = LANDMARK_COUNT * 3;

/// The fixed-length numeric encoding of a [`super::LandmarkSet`], laid out
/// landmark-major then coordinate-minor: `[x0, y0, z0, x1, y1, z1, ..]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f32; FEATURE_LEN]);

impl FeatureVector {
    pub(crate) fn new(values: [f32; FEATURE_LEN]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}
