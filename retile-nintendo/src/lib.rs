//! Nintendo console texture remappers.
//!
//! This crate provides swizzle/unswizzle implementations for Nintendo
//! platforms:
//!
//! - Nintendo 64 (odd-row 32-bit word interleave)
//! - GameCube and Wii (bpp-dependent cache-line tiles)
//! - Nintendo 3DS (8x8 Morton tiles)
//! - Wii U (GX2/AddrLib bank and pipe tiling)
//! - Switch (Tegra X1 block-linear GOBs)

pub mod gamecube;
pub mod n3ds;
pub mod n64;
pub mod switch;
pub mod wii;
pub mod wiiu;

pub use gamecube::GameCubeRemapper;
pub use n3ds::N3dsRemapper;
pub use n64::N64Remapper;
pub use switch::SwitchRemapper;
pub use wii::WiiRemapper;
pub use wiiu::{surface_format_bits, GX2TileMode, WiiURemapper};
