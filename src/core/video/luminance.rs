//! HSP 感知亮度重映射
//!
//! HSP ("perceived brightness") weighs the squared channels before taking the
//! root, which keeps more contrast on saturated inks than HSL lightness or HSV
//! value. See <https://alienryderflex.com/hsp.html>.

use image::imageops;
use image::{Rgba, RgbaImage};

use super::frame::Frame;
use crate::core::barcode::ScanError;

pub fn hsp_luminance(r: u8, g: u8, b: u8) -> f64 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt()
}

/// Stores a luminance value the way a clamped 8-bit canvas buffer does.
pub fn quantize(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Replaces r, g and b of every pixel with its HSP luminance. Alpha is kept.
pub fn apply_hsp_luminance(surface: &mut RgbaImage) {
    for pixel in surface.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let l = quantize(hsp_luminance(r, g, b));
        *pixel = Rgba([l, l, l, a]);
    }
}

/// Draws `frame` onto a fresh surface of `width` x `height` anchored at the
/// origin, remaps it in place and returns the result as a new frame.
///
/// Pixels of the frame outside the surface are clipped; surface pixels the
/// frame does not cover stay transparent black.
pub fn hsp_snapshot(frame: &Frame, width: u32, height: u32) -> Result<Frame, ScanError> {
    let source = frame.view()?;
    let mut surface = RgbaImage::new(width, height);
    imageops::replace(&mut surface, &source, 0, 0);
    apply_hsp_luminance(&mut surface);

    Ok(Frame::from_rgba_image(
        surface,
        frame.timestamp,
        frame.frame_number,
    ))
}
