use chrono::{DateTime, Utc};
use image::{Rgb, RgbImage};
use uuid::Uuid;

/// One decoded camera frame as a blue-green-red raster.
///
/// Created per request by the decoder and dropped once the request is
/// answered; nothing holds frames across requests.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    bgr: Vec<u8>,
    captured_at: DateTime<Utc>,
    id: Uuid,
}

impl Frame {
    pub fn from_bgr(width: u32, height: u32, bgr: Vec<u8>) -> Self {
        debug_assert_eq!(bgr.len(), width as usize * height as usize * 3);
        Self {
            width,
            height,
            bgr,
            captured_at: Utc::now(),
            id: Uuid::new_v4(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bgr(&self) -> &[u8] {
        &self.bgr
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Channel-swapped copy in the order the hand tracker expects.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let i = (y as usize * self.width as usize + x as usize) * 3;
            Rgb([self.bgr[i + 2], self.bgr[i + 1], self.bgr[i]])
        })
    }
}
