//! Blends color, brightness and white-level sequences into a single color.
//!
//! Provides [`Blender`], which advances one shared step counter through three
//! independent function sequences and composes their outputs on demand.

use crate::color::Color;
use crate::periodic::PeriodicFunction;
use crate::sequence::FunctionSequence;
use crate::transition::ColorTransition;
use crate::types::BlendError;

/// Scales a 0.0-1.0 function value to a 0-255 channel value.
///
/// Values outside the unit range saturate.
#[inline]
pub fn scale_unit(value: f32) -> u8 {
    (255.0 * value) as u8
}

/// Drives a color through three periodic function sequences.
///
/// The color sequence picks the transitioned base color, then the brightness
/// sequence sets alpha, then the white-level sequence sets the white level.
/// A sequence with no functions is skipped.
///
/// All three sequences share one step counter. Their periods are combined by
/// multiplying the non-zero ones, which is a common period but not
/// necessarily the least one.
///
/// # Type Parameters
/// * `N` - Maximum number of functions in each sequence
#[derive(Debug, Clone)]
pub struct Blender<const N: usize> {
    color_funcs: FunctionSequence<ColorTransition, N>,
    brightness_funcs: FunctionSequence<PeriodicFunction, N>,
    white_level_funcs: FunctionSequence<PeriodicFunction, N>,
    step: i64,
}

impl<const N: usize> Blender<N> {
    /// Creates a blender with three empty sequences at step zero.
    pub const fn new() -> Self {
        Self {
            color_funcs: FunctionSequence::new(),
            brightness_funcs: FunctionSequence::new(),
            white_level_funcs: FunctionSequence::new(),
            step: 0,
        }
    }

    /// Appends a color transition to the color sequence.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The color sequence already holds `N` functions
    pub fn append_color_func(&mut self, f: ColorTransition) -> Result<(), BlendError> {
        self.color_funcs.append(f)
    }

    /// Appends a function to the brightness sequence.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The brightness sequence already holds `N` functions
    pub fn append_brightness_func(&mut self, f: PeriodicFunction) -> Result<(), BlendError> {
        self.brightness_funcs.append(f)
    }

    /// Appends a function to the white-level sequence.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The white-level sequence already holds `N` functions
    pub fn append_white_level_func(&mut self, f: PeriodicFunction) -> Result<(), BlendError> {
        self.white_level_funcs.append(f)
    }

    /// Moves the step counter back to zero.
    pub fn reset_step(&mut self) {
        self.step = 0;
    }

    /// Moves the step counter by `num_steps`, wrapping at the combined period.
    ///
    /// A combined period of zero pins the step to zero. The remainder is
    /// truncating, so a negative result is floored to zero rather than
    /// wrapped to the end of the period.
    pub fn advance_step(&mut self, num_steps: i64) {
        let period = self.period();

        if period == 0 {
            #[cfg(feature = "defmt")]
            defmt::trace!("combined period is zero, step pinned to 0");
            self.step = 0;
            return;
        }

        let period = i64::try_from(period).unwrap_or(i64::MAX);
        self.step = self.step.saturating_add(num_steps) % period;

        if self.step < 0 {
            self.step = 0;
        }
    }

    /// Returns the current step.
    #[inline]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns the combined period of the three sequences.
    ///
    /// This is the product of the non-zero sequence periods, or zero when all
    /// three are zero.
    pub fn period(&self) -> u64 {
        [
            self.color_funcs.period(),
            self.brightness_funcs.period(),
            self.white_level_funcs.period(),
        ]
        .into_iter()
        .filter(|&p| p > 0)
        .fold(None, |acc: Option<u64>, p| {
            Some(acc.unwrap_or(1).saturating_mul(p as u64))
        })
        .unwrap_or(0)
    }

    /// Returns the brightness (0-255) at the current step, if any brightness
    /// functions are present.
    pub fn brightness_at_step(&self) -> Option<u8> {
        self.brightness_funcs
            .value_at(self.step)
            .map(|(value, _)| scale_unit(value))
    }

    /// Returns the white level (0-255) at the current step, if any
    /// white-level functions are present.
    pub fn white_level_at_step(&self) -> Option<u8> {
        self.white_level_funcs
            .value_at(self.step)
            .map(|(value, _)| scale_unit(value))
    }

    /// Computes the color for the current step.
    pub fn color(&self) -> Color {
        let mut result = Color::default();

        match self.color_funcs.value_at(self.step) {
            Some((progress, transition)) => result.set_color(transition.color_at(progress)),
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("no color functions, base color left at zero");
            }
        }

        if let Some(alpha) = self.brightness_at_step() {
            result.set_brightness(alpha);
        }

        if let Some(level) = self.white_level_at_step() {
            result.set_white_level(level);
        }

        result
    }

    /// Returns the color sequence.
    pub fn color_funcs(&self) -> &FunctionSequence<ColorTransition, N> {
        &self.color_funcs
    }

    /// Returns the brightness sequence.
    pub fn brightness_funcs(&self) -> &FunctionSequence<PeriodicFunction, N> {
        &self.brightness_funcs
    }

    /// Returns the white-level sequence.
    pub fn white_level_funcs(&self) -> &FunctionSequence<PeriodicFunction, N> {
        &self.white_level_funcs
    }
}

impl<const N: usize> Default for Blender<N> {
    fn default() -> Self {
        Self::new()
    }
}
