/// A single 3-D point on the detected hand's pose skeleton.
///
/// `x` and `y` are normalized to `[0, 1]` in image space; `z` is a relative
/// depth with the wrist as reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Number of landmarks the tracker reports per hand.
pub const LANDMARK_COUNT: usize = 21;

// Well-known indices in the tracker's landmark order.
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// The full ordered set of 21 landmarks for one detected hand.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    /// Returns `None` unless exactly [`LANDMARK_COUNT`] points are given.
    pub fn new(points: Vec<Landmark>) -> Option<Self> {
        (points.len() == LANDMARK_COUNT).then_some(Self { points })
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}
