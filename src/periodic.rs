//! Periodic scalar functions.

use crate::types::InputRange;

/// A function of an absolute step number that repeats with a fixed period.
pub trait Periodic {
    /// Number of steps after which the function repeats. May be zero.
    fn period(&self) -> u32;

    /// Value of the function at an absolute step number.
    fn value_at(&self, step: i64) -> f32;
}

/// Wraps a scalar function over an input range, sampled once per step.
///
/// A period of `P` steps sweeps the input evenly across `[lo, hi)`, so step
/// `k` evaluates the function at `lo + (k mod P) / P * (hi - lo)`.
#[derive(Debug, Clone, Copy)]
pub struct PeriodicFunction {
    function: fn(f32) -> f32,
    period: u32,
    range: InputRange,
}

impl PeriodicFunction {
    /// Creates a periodic function.
    ///
    /// A range built from a slice that does not hold exactly two bounds
    /// becomes `[0, 0)`.
    pub fn new(function: fn(f32) -> f32, period: u32, range: impl Into<InputRange>) -> Self {
        Self {
            function,
            period,
            range: range.into(),
        }
    }

    /// Returns the wrapped scalar function.
    #[inline]
    pub fn function(&self) -> fn(f32) -> f32 {
        self.function
    }

    /// Returns the input range.
    #[inline]
    pub fn input_range(&self) -> InputRange {
        self.range
    }
}

impl Periodic for PeriodicFunction {
    #[inline]
    fn period(&self) -> u32 {
        self.period
    }

    fn value_at(&self, step: i64) -> f32 {
        if self.period == 0 {
            return (self.function)(self.range.lo);
        }

        let local_step = step.rem_euclid(self.period as i64);
        let position = local_step as f32 / self.period as f32;
        let input = position * self.range.span() + self.range.lo;

        (self.function)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_period_samples_lower_bound() {
        let f = PeriodicFunction::new(|x| x + 1.0, 0, (3.0, 8.0));
        assert_eq!(f.value_at(0), 4.0);
        assert_eq!(f.value_at(12), 4.0);
    }

    #[test]
    fn negative_steps_wrap_into_the_period() {
        let f = PeriodicFunction::new(|x| x, 4, (0.0, 4.0));
        assert_eq!(f.value_at(-1), 3.0);
        assert_eq!(f.value_at(-4), 0.0);
    }
}
