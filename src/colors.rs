//! Anchor color constants and HSV helpers.
//!
//! Provides convenience functions for building anchor colors in HSV (Hue,
//! Saturation, Value), which is more intuitive for LED animations like color
//! wheels and hue rotations.
//!
//! All functions return opaque `palette::Srgba<u8>` ready to be used as
//! transition anchors.

use palette::{FromColor, Hsv, Srgb, Srgba, WithAlpha};

pub const RED: Srgba<u8> = Srgba::new(255, 0, 0, 255);
pub const GREEN: Srgba<u8> = Srgba::new(0, 255, 0, 255);
pub const BLUE: Srgba<u8> = Srgba::new(0, 0, 255, 255);
pub const WHITE: Srgba<u8> = Srgba::new(255, 255, 255, 255);
pub const BLACK: Srgba<u8> = Srgba::new(0, 0, 0, 255);

/// Creates an opaque 8-bit color from HSV (Hue, Saturation, Value) components.
///
/// Hue is in degrees, saturation and value in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgba<u8> {
    let hsv = Hsv::new(hue, saturation, value);
    let rgb: Srgb = Srgb::from_color(hsv);
    let rgb: Srgb<u8> = rgb.into_format();
    rgb.with_alpha(255)
}

/// Creates an opaque color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgba<u8> {
    hsv(hue, 1.0, 1.0)
}
