mod features;
mod frame;
mod landmarks;
mod outcome;

pub use features::{FeatureVector, FEATURE_LEN};
pub use frame::Frame;
pub use landmarks::{
    Landmark, LandmarkSet, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP,
    WRIST,
};
pub use outcome::{GestureOutcome, NO_HAND_LABEL};
