//! Sony console texture remappers.
//!
//! This crate provides swizzle/unswizzle implementations for Sony
//! platforms:
//!
//! - PlayStation 2 (GS page/block/column addressing, 8-bit and 4-bit
//!   with three selectable 4-bit variants, plus CLUT de-interleaving)
//! - PlayStation Portable (16-byte x 8-row block tiling)
//! - PlayStation Vita (rotated Morton)
//! - PlayStation 3 (plain Morton)
//! - PlayStation 4 (Morton within 8x8 sub-tiles)
//! - PlayStation 5 (Morton sub-tiles grouped into super-tiles)

pub mod ps2;
pub mod ps3;
pub mod ps4;
pub mod ps5;
pub mod psp;
pub mod vita;

pub use ps2::{swizzle_palette, Ps2Remapper, Ps2SwizzleVariant};
pub use ps3::Ps3Remapper;
pub use ps4::Ps4Remapper;
pub use ps5::Ps5Remapper;
pub use psp::PspRemapper;
pub use vita::VitaRemapper;
