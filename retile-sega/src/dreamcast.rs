//! Dreamcast (PowerVR2) texture remapper. PowerVR "twiddled" textures
//! follow the 90°-rotated Morton curve, the same curve the PS Vita
//! later reused, over the whole surface padded to power-of-two
//! dimensions.

use retile_core::blocks::{next_power_of_two, remap_tiles, TileOrder};
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

/// Remapper for Dreamcast twiddled texture data.
#[derive(Debug, Default)]
pub struct DreamcastRemapper;

impl DreamcastRemapper {
    pub fn new() -> Self {
        Self
    }

    fn remap(
        &self,
        src: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
        direction: SwizzleDirection,
    ) -> Result<Vec<u8>, RemapError> {
        let units_w = block.blocks_x(geometry);
        let units_h = block.blocks_y(geometry);
        let unit_len = block.block_byte_size as usize;
        validate_len(src, units_w * units_h * unit_len)?;

        let pw = next_power_of_two(units_w);
        let ph = next_power_of_two(units_h);
        Ok(remap_tiles(
            src,
            units_w,
            units_h,
            unit_len,
            pw,
            ph,
            TileOrder::MortonRotated,
            direction,
        ))
    }
}

impl TextureRemapper for DreamcastRemapper {
    fn swizzle(
        &self,
        linear: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        self.remap(linear, geometry, block, SwizzleDirection::ToSwizzled)
    }

    fn unswizzle(
        &self,
        swizzled: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        self.remap(swizzled, geometry, block, SwizzleDirection::ToLinear)
    }

    fn platform(&self) -> Platform {
        Platform::Dreamcast
    }
}

#[cfg(test)]
#[path = "tests/dreamcast_tests.rs"]
mod tests;
