//! Microsoft console texture remappers.
//!
//! This crate provides swizzle/unswizzle implementations for Microsoft
//! platforms:
//!
//! - Xbox 360 (XGAddress2DTiledOffset macro/micro tiling with the
//!   console's big-endian 16-bit byte order)

pub mod xbox360;

pub use xbox360::{swap_byte_order, Xbox360Remapper};
