//! Wii texture remapper.
//!
//! Hollywood kept Flipper's texture unit, so the Wii shares the
//! GameCube's cache-line tiling exactly; only the platform identity
//! differs.

use crate::gamecube;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

/// Remapper for Wii cache-line-tiled texture data.
#[derive(Debug, Default)]
pub struct WiiRemapper;

impl WiiRemapper {
    pub fn new() -> Self {
        Self
    }
}

impl TextureRemapper for WiiRemapper {
    fn swizzle(
        &self,
        linear: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        gamecube::remap(linear, geometry, block, SwizzleDirection::ToSwizzled)
    }

    fn unswizzle(
        &self,
        swizzled: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        gamecube::remap(swizzled, geometry, block, SwizzleDirection::ToLinear)
    }

    fn platform(&self) -> Platform {
        Platform::Wii
    }
}

#[cfg(test)]
#[path = "tests/wii_tests.rs"]
mod tests;
