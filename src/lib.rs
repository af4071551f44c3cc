#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: An RGBA value that tracks its white level
//! - **`PeriodicFunction`**: A scalar function swept over an input range once per period
//! - **`FunctionSequence`**: Periodic functions played back to back
//! - **`ColorTransition`**: Two anchor colors, a `TransitionType` and a progress function
//! - **`TransitionType`**: How a transition moves between its anchors (`OneAtATime`, ...)
//! - **`Blender`**: Advances a shared step through color, brightness and white-level
//!   sequences and composes them into one `Color`
//!
//! The library works on `Srgba<u8>` (0-255 per channel) throughout, since the
//! transition path and white-level arithmetic are defined on 8-bit channels.

// Re-export Srgba from palette for user convenience
pub use palette::Srgba;

pub mod blender;
pub mod color;
pub mod colors;
pub mod periodic;
pub mod sequence;
pub mod transition;
pub mod types;

pub use blender::Blender;
pub use color::Color;
pub use colors::{BLACK, BLUE, GREEN, RED, WHITE};
pub use periodic::{Periodic, PeriodicFunction};
pub use sequence::FunctionSequence;
pub use transition::ColorTransition;
pub use types::{BlendError, Component, InputRange, TransitionType};
