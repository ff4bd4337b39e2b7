//! # Colorforge
//!
//! Colorforge implements pure, bidirectional conversions between the color
//! representations commonly found in design tools: RGB, HSL, HSV, CMYK, HSI,
//! CIE XYZ, CIE Lab, and hexadecimal strings.
//!
//! Its main abstractions are:
//!
//!   * One **value type per representation** — [`Rgb`], [`Hsl`], [`Hsv`],
//!     [`Cmyk`], [`Hsi`], [`Xyz`], and [`Lab`] — each an immutable aggregate
//!     of [`Float`] coordinates with conversion methods to its neighboring
//!     representations. All conversions are pure functions of their inputs:
//!     no caching, no shared state, no I/O.
//!   * [`Category`], a **perceptual classifier** that buckets any color into
//!     one of ten human-readable categories, from red through black.
//!   * [`fixed_round`], the **decimal rounding primitive** that every
//!     conversion routes its outputs through. It rounds half *away from
//!     zero* by explicit scaling and truncation, which keeps results stable
//!     across platforms and distinguishable from the half-to-even behavior
//!     of generic rounding helpers.
//!
//! Conversions between any two representations denote the same perceptual
//! color point and are approximate inverses of each other up to the
//! precision they round to. Chained conversions compose the direct ones;
//! for example, RGB to Lab goes through XYZ, which is also independently
//! exposed.
//!
//! Inputs are not validated. Callers that supply out-of-range coordinates
//! receive mathematically extrapolated results, not errors; only parsing a
//! malformed hexadecimal string fails, with a
//! [`ColorFormatError`](error::ColorFormatError).
//!
//!
//! ## Feature Flags
//!
//! Colorforge supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod category;
mod core;
pub mod error;
mod object;

pub use category::Category;
pub use crate::core::{fixed_round, fixed_round_with};
pub use object::{Cmyk, Hsi, Hsl, Hsv, Lab, Rgb, Xyz};
