//! Bit-exact texture memory swizzling for console platforms.
//!
//! Every supported console stores textures in a hardware-specific
//! memory order. This crate re-exports the per-vendor remappers and a
//! registry that picks one by [`Platform`], all implementing the shared
//! [`TextureRemapper`] contract from `retile-core`.
//!
//! ```
//! use retile::{remapper_for, BlockShape, ImageGeometry, Platform};
//!
//! let geo = ImageGeometry::new(128, 128, 32)?;
//! let block = BlockShape::pixels(4);
//! let remapper = remapper_for(Platform::Ps4);
//! # let swizzled = vec![0u8; 128 * 128 * 4];
//! let linear = remapper.unswizzle(&swizzled, &geo, &block)?;
//! # Ok::<(), retile::RemapError>(())
//! ```
//!
//! Remappers with platform parameters (PS2 swizzle variant, Wii U tile
//! mode and swizzle seeds, Switch block height, Xbox 360 byte order)
//! are returned with their common defaults; construct them directly
//! from the vendor crates to override.

pub use retile_core::{
    BlockShape, ImageGeometry, Platform, PlatformParseError, RemapError, SwizzleDirection,
    TextureRemapper,
};

pub use retile_microsoft::{swap_byte_order, Xbox360Remapper};
pub use retile_nintendo::{
    GX2TileMode, GameCubeRemapper, N3dsRemapper, N64Remapper, SwitchRemapper, WiiRemapper,
    WiiURemapper,
};
pub use retile_sega::DreamcastRemapper;
pub use retile_sony::{
    swizzle_palette, Ps2Remapper, Ps2SwizzleVariant, Ps3Remapper, Ps4Remapper, Ps5Remapper,
    PspRemapper, VitaRemapper,
};

/// Returns the remapper for `platform`, with default parameters where
/// the platform has any.
pub fn remapper_for(platform: Platform) -> Box<dyn TextureRemapper> {
    match platform {
        Platform::N64 => Box::new(N64Remapper::new()),
        Platform::GameCube => Box::new(GameCubeRemapper::new()),
        Platform::Wii => Box::new(WiiRemapper::new()),
        Platform::N3ds => Box::new(N3dsRemapper::new()),
        Platform::WiiU => Box::new(WiiURemapper::default()),
        Platform::Switch => Box::new(SwitchRemapper::new()),
        Platform::Ps2 => Box::new(Ps2Remapper::default()),
        Platform::Psp => Box::new(PspRemapper::new()),
        Platform::Vita => Box::new(VitaRemapper::new()),
        Platform::Ps3 => Box::new(Ps3Remapper::new()),
        Platform::Ps4 => Box::new(Ps4Remapper::new()),
        Platform::Ps5 => Box::new(Ps5Remapper::new()),
        Platform::Dreamcast => Box::new(DreamcastRemapper::new()),
        Platform::Xbox360 => Box::new(Xbox360Remapper::new()),
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
