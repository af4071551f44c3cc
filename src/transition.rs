//! Color transitions between two anchor colors.
//!
//! A [`ColorTransition`] pairs two anchor colors with a [`TransitionType`] and a
//! periodic progress function. The progress value (0.0-1.0) is mapped onto a
//! traversal distance, and the color at that point of the path is computed
//! by [`traverse`].

use crate::color::{Color, channel, dominance};
use crate::periodic::{Periodic, PeriodicFunction};
use crate::types::{Component, TransitionType};
use core::cell::OnceCell;
use palette::Srgba;

/// Budget large enough to complete any traversal (four full channel sweeps).
pub const FULL_TRAVERSAL_BUDGET: i32 = 4 * 255;

/// Moves one component toward `target`, spending at most `max_dist` units.
///
/// Returns the distance actually travelled. A non-positive budget leaves the
/// color untouched.
pub fn set_component_with_constraint(
    color: &mut Color,
    component: Component,
    target: u8,
    max_dist: i32,
) -> i32 {
    if max_dist <= 0 {
        return 0;
    }

    let current = color.component(component) as i32;
    let change = target as i32 - current;
    let dist = change.abs();

    if dist <= max_dist {
        color.set_component(component, target);
        return dist;
    }

    let next = if change > 0 {
        current + max_dist
    } else {
        current - max_dist
    };
    color.set_component(component, next.clamp(0, 255) as u8);
    max_dist
}

/// Walks from `from` toward `to` changing a single channel at a time.
///
/// The path retires `from`'s second channel when it is not `to`'s dominant
/// one, then raises `to`'s dominant channel to full, drops its least channel
/// to zero and finally settles its mid channel. Stops once `max_dist` units
/// have been spent and returns the color reached and the distance travelled.
pub fn one_at_a_time(from: Srgba<u8>, to: Srgba<u8>, max_dist: i32) -> (Srgba<u8>, i32) {
    let mut dist = 0;
    let mut result = Color::new(from);

    let [_, from_mid, _] = dominance(&from);
    let [to_dominant, to_mid, to_least] = dominance(&to);

    if from_mid != to_dominant {
        dist += set_component_with_constraint(&mut result, from_mid, 0, max_dist - dist);
    }
    dist += set_component_with_constraint(&mut result, to_dominant, 255, max_dist - dist);
    dist += set_component_with_constraint(&mut result, to_least, 0, max_dist - dist);
    dist += set_component_with_constraint(
        &mut result,
        to_mid,
        channel(&to, to_mid),
        max_dist - dist,
    );

    (result.rgba(), dist)
}

/// Computes the color reached after travelling `max_dist` units along the
/// path selected by `kind`, and the distance actually travelled.
///
/// `AllAtOnce`, `ToWhite` and `ToBlack` have no path yet and yield a zero
/// color over a zero distance.
pub fn traverse(
    kind: TransitionType,
    from: Srgba<u8>,
    to: Srgba<u8>,
    max_dist: i32,
) -> (Srgba<u8>, i32) {
    match kind {
        TransitionType::OneAtATime => one_at_a_time(from, to, max_dist),
        TransitionType::AllAtOnce | TransitionType::ToWhite | TransitionType::ToBlack => {
            (Srgba::new(0, 0, 0, 0), 0)
        }
    }
}

/// A transition between two anchor colors driven by a periodic progress function.
///
/// The full traversal distance is computed on first use and cached.
#[derive(Debug, Clone)]
pub struct ColorTransition {
    from: Srgba<u8>,
    to: Srgba<u8>,
    kind: TransitionType,
    function: PeriodicFunction,
    distance: OnceCell<i32>,
}

impl ColorTransition {
    /// Creates a transition from `from` to `to`.
    ///
    /// `function` maps a step to a progress fraction in 0.0-1.0.
    pub fn new(
        from: Srgba<u8>,
        to: Srgba<u8>,
        kind: TransitionType,
        function: PeriodicFunction,
    ) -> Self {
        Self {
            from,
            to,
            kind,
            function,
            distance: OnceCell::new(),
        }
    }

    /// Returns the starting anchor color.
    pub fn from_color(&self) -> Srgba<u8> {
        self.from
    }

    /// Returns the target anchor color.
    pub fn to_color(&self) -> Srgba<u8> {
        self.to
    }

    /// Returns the transition type.
    pub fn transition_type(&self) -> TransitionType {
        self.kind
    }

    /// Returns the progress function.
    pub fn function(&self) -> &PeriodicFunction {
        &self.function
    }

    /// Full length of the transition path. Zero when both anchors are equal.
    pub fn distance(&self) -> i32 {
        *self.distance.get_or_init(|| {
            if self.from == self.to {
                0
            } else {
                traverse(self.kind, self.from, self.to, FULL_TRAVERSAL_BUDGET).1
            }
        })
    }

    /// Color at a fractional `progress` along the transition path.
    pub fn color_at(&self, progress: f32) -> Srgba<u8> {
        if self.from == self.to {
            return self.from;
        }

        let max_dist = libm::roundf(progress * self.distance() as f32) as i32;
        traverse(self.kind, self.from, self.to, max_dist).0
    }
}

impl Periodic for ColorTransition {
    #[inline]
    fn period(&self) -> u32 {
        self.function.period()
    }

    #[inline]
    fn value_at(&self, step: i64) -> f32 {
        self.function.value_at(step)
    }
}
