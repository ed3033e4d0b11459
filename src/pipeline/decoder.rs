use crate::error::DecodeError;
use crate::pipeline::types::Frame;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Decodes a browser-captured frame payload into a BGR raster.
///
/// The payload is base64 image bytes, optionally prefixed with a
/// `data:<mime>;base64,` tag; everything up to the first comma is stripped.
pub fn decode_frame(payload: &str) -> Result<Frame, DecodeError> {
    let encoded = match payload.split_once(',') {
        Some((_prefix, rest)) => rest,
        None => payload,
    };
    let bytes = STANDARD.decode(encoded.trim())?;
    let decoded = image::load_from_memory(&bytes)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut bgr = Vec::with_capacity(rgb.as_raw().len());
    for px in rgb.as_raw().chunks_exact(3) {
        bgr.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    Ok(Frame::from_bgr(width, height, bgr))
}
