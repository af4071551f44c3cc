//! Core types shared by the color, sequence and blender modules.

use core::fmt;
use core::str::FromStr;

/// One of the three hue-bearing channels of a color.
///
/// Alpha is not a component; it is handled separately as brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Component {
    /// Red channel.
    R,

    /// Green channel.
    G,

    /// Blue channel.
    B,
}

impl Component {
    /// All components in their natural R, G, B order.
    pub const ALL: [Component; 3] = [Component::R, Component::G, Component::B];

    /// Returns the symbolic name of the component ("R", "G" or "B").
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Component::R => "R",
            Component::G => "G",
            Component::B => "B",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Component {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Component::R),
            "G" => Ok(Component::G),
            "B" => Ok(Component::B),
            _ => Err(BlendError::InvalidComponent),
        }
    }
}

/// How a color transition moves from its first anchor color to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionType {
    /// Changes a single color component at a time along the dominance path.
    #[default]
    OneAtATime,

    /// Changes all color components at the same time.
    ///
    /// Placeholder: always yields a zero color over a zero distance.
    AllAtOnce,

    /// Transitions through white on the way to the target color.
    ///
    /// Placeholder: always yields a zero color over a zero distance.
    ToWhite,

    /// Transitions through black on the way to the target color.
    ///
    /// Placeholder: always yields a zero color over a zero distance.
    ToBlack,
}

impl TransitionType {
    /// Returns the canonical display name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            TransitionType::OneAtATime => "OneAtATime",
            TransitionType::AllAtOnce => "AllAtOnce",
            TransitionType::ToWhite => "ToWhite",
            TransitionType::ToBlack => "ToBlack",
        }
    }
}

impl fmt::Display for TransitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransitionType {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OneAtATime" => Ok(TransitionType::OneAtATime),
            "AllAtOnce" => Ok(TransitionType::AllAtOnce),
            "ToWhite" => Ok(TransitionType::ToWhite),
            "ToBlack" => Ok(TransitionType::ToBlack),
            _ => Err(BlendError::UnknownTransitionType),
        }
    }
}

/// Input range of a periodic function, left inclusive and right exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputRange {
    /// Inclusive lower bound.
    pub lo: f32,

    /// Exclusive upper bound.
    pub hi: f32,
}

impl InputRange {
    /// Zero-width range at `[0, 0)`.
    pub const EMPTY: InputRange = InputRange { lo: 0.0, hi: 0.0 };

    /// Creates a new input range.
    #[inline]
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Width of the range.
    #[inline]
    pub fn span(&self) -> f32 {
        self.hi - self.lo
    }
}

impl From<(f32, f32)> for InputRange {
    fn from((lo, hi): (f32, f32)) -> Self {
        InputRange::new(lo, hi)
    }
}

impl From<[f32; 2]> for InputRange {
    fn from([lo, hi]: [f32; 2]) -> Self {
        InputRange::new(lo, hi)
    }
}

/// Anything other than exactly two bounds degenerates to `[0, 0)`.
impl From<&[f32]> for InputRange {
    fn from(bounds: &[f32]) -> Self {
        match bounds {
            [lo, hi] => InputRange::new(*lo, *hi),
            _ => InputRange::EMPTY,
        }
    }
}

/// Errors reported by the blending engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlendError {
    /// Function sequence capacity exceeded.
    CapacityExceeded,

    /// Unrecognized color component name.
    InvalidComponent,

    /// Unrecognized transition type name.
    UnknownTransitionType,
}

impl fmt::Display for BlendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlendError::CapacityExceeded => {
                write!(f, "function sequence capacity exceeded")
            }
            BlendError::InvalidComponent => {
                write!(f, "invalid color component name (expected R, G or B)")
            }
            BlendError::UnknownTransitionType => {
                write!(f, "unknown color transition type")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BlendError {}
