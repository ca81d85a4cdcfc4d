//! PlayStation 3 (RSX) texture remapper: plain Morton order over the
//! whole surface, padded to power-of-two dimensions.

use retile_core::blocks::{next_power_of_two, remap_tiles, TileOrder};
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

/// Remapper for PS3 Morton-tiled texture data.
#[derive(Debug, Default)]
pub struct Ps3Remapper;

impl Ps3Remapper {
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

        // One Morton tile spanning the power-of-two padded surface.
        let pw = next_power_of_two(units_w);
        let ph = next_power_of_two(units_h);
        Ok(remap_tiles(
            src,
            units_w,
            units_h,
            unit_len,
            pw,
            ph,
            TileOrder::Morton,
            direction,
        ))
    }
}

impl TextureRemapper for Ps3Remapper {
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
        Platform::Ps3
    }
}

#[cfg(test)]
#[path = "tests/ps3_tests.rs"]
mod tests;
