//! PlayStation 4 (GNM) texture remapper: Morton order inside fixed 8x8
//! sub-tiles, sub-tiles laid out row-major.
//!
//! Units of an edge tile that fall outside the image occupy no slot in
//! the swizzled stream, so the stream stays compact and every geometry
//! round-trips; interior tiles are unaffected.

use retile_core::blocks::{remap_tiles, TileOrder};
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

const TILE_DIM: usize = 8;

/// Remapper for PS4 Morton-tiled texture data.
#[derive(Debug, Default)]
pub struct Ps4Remapper;

impl Ps4Remapper {
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

        Ok(remap_tiles(
            src,
            units_w,
            units_h,
            unit_len,
            TILE_DIM,
            TILE_DIM,
            TileOrder::Morton,
            direction,
        ))
    }
}

impl TextureRemapper for Ps4Remapper {
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
        Platform::Ps4
    }
}

#[cfg(test)]
#[path = "tests/ps4_tests.rs"]
mod tests;
