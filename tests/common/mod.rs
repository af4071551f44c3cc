//! Shared test infrastructure for rgb-blender integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rgb_blender::{ColorTransition, PeriodicFunction, Srgba, TransitionType};

// ============================================================================
// Colors
// ============================================================================

/// Builds an RGB color with a zero alpha channel
pub fn rgb(r: u8, g: u8, b: u8) -> Srgba<u8> {
    Srgba::new(r, g, b, 0)
}

/// Builds an RGBA color
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Srgba<u8> {
    Srgba::new(r, g, b, a)
}

// ============================================================================
// Scalar functions
// ============================================================================

pub fn identity(x: f32) -> f32 {
    x
}

pub fn zero(_x: f32) -> f32 {
    0.0
}

pub fn one(_x: f32) -> f32 {
    1.0
}

/// 0 below 5, 1 from 5 on
pub fn step_at_5(x: f32) -> f32 {
    if x < 5.0 { 0.0 } else { 1.0 }
}

/// 0 below 10, 1 from 10 on
pub fn step_at_10(x: f32) -> f32 {
    if x < 10.0 { 0.0 } else { 1.0 }
}

// ============================================================================
// Builders
// ============================================================================

/// A periodic function over `[0, 1)` whose value does not matter
pub fn with_period(period: u32) -> PeriodicFunction {
    PeriodicFunction::new(zero, period, (0.0, 1.0))
}

/// One-at-a-time transition driven by `function`
pub fn one_at_a_time(from: Srgba<u8>, to: Srgba<u8>, function: PeriodicFunction) -> ColorTransition {
    ColorTransition::new(from, to, TransitionType::OneAtATime, function)
}
