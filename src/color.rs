//! RGBA color with white-level bookkeeping.
//!
//! Provides [`Color`], a mutable `Srgba<u8>` wrapper that caches the white
//! level of its RGB channels, together with the channel algorithms used by
//! the transition code: dominance ordering, white-level extraction and
//! injection, and base-color normalization.
//!
//! The white level of a color is `255 * least / dominant`, where `dominant`
//! and `least` are the largest and smallest RGB channels. A color whose three
//! channels are equal is "true white": its hue is undefined.

use crate::types::Component;
use palette::Srgba;

/// Marker returned in place of a base color when the hue is undefined
/// (gray or black input). Alpha is carried over from the input.
pub const WHITE_MARKER: (u8, u8, u8) = (0xff, 0x00, 0xff);

/// Returns the value of a single channel.
#[inline]
pub fn channel(rgba: &Srgba<u8>, component: Component) -> u8 {
    match component {
        Component::R => rgba.red,
        Component::G => rgba.green,
        Component::B => rgba.blue,
    }
}

#[inline]
fn set_channel(rgba: &mut Srgba<u8>, component: Component, value: u8) {
    match component {
        Component::R => rgba.red = value,
        Component::G => rgba.green = value,
        Component::B => rgba.blue = value,
    }
}

#[inline]
fn white_marker(alpha: u8) -> Srgba<u8> {
    let (r, g, b) = WHITE_MARKER;
    Srgba::new(r, g, b, alpha)
}

/// Returns the RGB components sorted descending by value.
///
/// Ties keep their natural R, G, B order, so black yields `[R, G, B]`.
pub fn dominance(rgba: &Srgba<u8>) -> [Component; 3] {
    let mut order = Component::ALL;

    // Insertion sort, swapping only on strict inequality to stay stable.
    for i in 1..order.len() {
        let mut j = i;
        while j > 0 && channel(rgba, order[j - 1]) < channel(rgba, order[j]) {
            order.swap(j - 1, j);
            j -= 1;
        }
    }

    order
}

/// Returns true if all three RGB channels are equal.
#[inline]
pub fn is_white(rgba: &Srgba<u8>) -> bool {
    rgba.red == rgba.green && rgba.green == rgba.blue
}

/// Computes the white level (0-255) of a color's RGB channels.
pub fn white_level_of(rgba: &Srgba<u8>) -> u8 {
    let [dominant, _, least] = dominance(rgba);
    let dominant = channel(rgba, dominant);

    if dominant == 0 {
        return 0;
    }

    (255.0 * channel(rgba, least) as f32 / dominant as f32) as u8
}

/// Returns the portion of each channel that is attributable to white.
///
/// The dominant channel contributes nothing, the least channel contributes
/// its whole value, and the mid channel contributes whatever is left once
/// its share of the pure hue is removed. Alpha is zero.
fn white_component(rgba: &Srgba<u8>) -> Srgba<u8> {
    if is_white(rgba) {
        return *rgba;
    }

    let mut component = Srgba::new(rgba.red, rgba.green, rgba.blue, 0);
    let [dominant, mid, _] = dominance(&component);
    let level = white_level_of(&component) as i32;

    let dominant_value = channel(&component, dominant) as i32;
    let mid_value = channel(&component, mid) as i32;
    // Not true white, so level < 255.
    let mid_hue = (mid_value * 255 - dominant_value * level) / (255 - level);

    set_channel(&mut component, mid, (mid_value - mid_hue).clamp(0, 255) as u8);
    set_channel(&mut component, dominant, 0);

    component
}

/// Strips the white out of a color, then re-injects it at `level`.
///
/// Alpha is preserved. A level of zero returns the pure-hue residual.
pub fn apply_white_level(rgba: &Srgba<u8>, level: u8) -> Srgba<u8> {
    let white = white_component(rgba);
    let mut result = Srgba::new(
        rgba.red.saturating_sub(white.red),
        rgba.green.saturating_sub(white.green),
        rgba.blue.saturating_sub(white.blue),
        rgba.alpha,
    );

    if level == 0 {
        return result;
    }

    let order = dominance(&result);
    let top = channel(&result, order[0]) as u32;
    for component in order {
        let value = channel(&result, component) as u32;
        let adjustment = (top - value) * level as u32 / 255;
        set_channel(&mut result, component, (value + adjustment) as u8);
    }

    result
}

/// Scales the RGB channels so the dominant one reaches 255.
///
/// Black has no hue to scale and yields the white marker.
pub fn normalize_levels(rgba: &Srgba<u8>) -> Srgba<u8> {
    let [dominant, _, _] = dominance(rgba);
    let top = channel(rgba, dominant);

    if top == 0 {
        return white_marker(rgba.alpha);
    }

    let scale = 255.0 / top as f32;
    let mut result = *rgba;
    for component in Component::ALL {
        let scaled = channel(rgba, component) as f32 * scale;
        set_channel(&mut result, component, scaled as u8);
    }

    result
}

/// Removes white and black from a color, keeping only its hue.
///
/// Gray input (including black) yields the white marker with the original alpha.
pub fn base_color(rgba: &Srgba<u8>) -> Srgba<u8> {
    if is_white(rgba) {
        return white_marker(rgba.alpha);
    }

    normalize_levels(&apply_white_level(rgba, 0))
}

/// A mutable RGBA color that tracks its own white level.
///
/// Every full assignment recomputes the cached white level, and component
/// setters go through a full assignment, so the cache always matches the
/// stored channels after a setter returns. [`Color::set_white_level`] is the
/// one exception: it stores the requested level as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    rgba: Srgba<u8>,
    white_level: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            rgba: Srgba::new(0, 0, 0, 0),
            white_level: 0,
        }
    }
}

impl From<Srgba<u8>> for Color {
    fn from(rgba: Srgba<u8>) -> Self {
        Color::new(rgba)
    }
}

impl Color {
    /// Creates a color and computes its white level.
    pub fn new(rgba: Srgba<u8>) -> Self {
        let mut color = Self::default();
        color.set_color(rgba);
        color
    }

    /// Stores all four channels and recomputes the white level.
    pub fn set_color(&mut self, rgba: Srgba<u8>) {
        self.rgba = rgba;
        self.white_level = white_level_of(&rgba);
    }

    /// Overwrites the alpha (brightness) channel only.
    #[inline]
    pub fn set_brightness(&mut self, alpha: u8) {
        self.rgba.alpha = alpha;
    }

    /// Replaces the white contribution of the color with `level`.
    pub fn set_white_level(&mut self, level: u8) {
        self.white_level = level;
        self.rgba = apply_white_level(&self.rgba, level);
    }

    /// Returns the stored RGBA value.
    #[inline]
    pub fn rgba(&self) -> Srgba<u8> {
        self.rgba
    }

    /// Returns the cached white level.
    #[inline]
    pub fn white_level(&self) -> u8 {
        self.white_level
    }

    /// Returns the alpha (brightness) channel.
    #[inline]
    pub fn brightness(&self) -> u8 {
        self.rgba.alpha
    }

    /// Returns the RGB components sorted descending by value.
    pub fn dominance(&self) -> [Component; 3] {
        dominance(&self.rgba)
    }

    /// Returns the value of a single component.
    #[inline]
    pub fn component(&self, component: Component) -> u8 {
        channel(&self.rgba, component)
    }

    /// Sets a single component, then recomputes the white level.
    pub fn set_component(&mut self, component: Component, value: u8) {
        let mut rgba = self.rgba;
        set_channel(&mut rgba, component, value);
        self.set_color(rgba);
    }

    /// Returns the value of the component named `"R"`, `"G"` or `"B"`.
    ///
    /// # Panics
    /// Panics if `name` is not a component name.
    pub fn component_by_name(&self, name: &str) -> u8 {
        match name.parse() {
            Ok(component) => self.component(component),
            Err(_) => panic!("invalid color component name: {}", name),
        }
    }

    /// Sets the component named `"R"`, `"G"` or `"B"`.
    ///
    /// # Panics
    /// Panics if `name` is not a component name.
    pub fn set_component_by_name(&mut self, name: &str, value: u8) {
        match name.parse() {
            Ok(component) => self.set_component(component, value),
            Err(_) => panic!("invalid color component name: {}", name),
        }
    }

    /// Returns the hue of this color with white removed and the dominant
    /// channel scaled to 255.
    pub fn base_color(&self) -> Srgba<u8> {
        base_color(&self.rgba)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Color {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Color(r={=u8}, g={=u8}, b={=u8}, a={=u8}, white={=u8})",
            self.rgba.red,
            self.rgba.green,
            self.rgba.blue,
            self.rgba.alpha,
            self.white_level
        )
    }
}
