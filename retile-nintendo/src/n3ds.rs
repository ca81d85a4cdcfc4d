//! Nintendo 3DS (PICA200) texture remapper: 8x8 tiles with Morton
//! order inside each tile, tiles row-major across the surface.

use retile_core::blocks::{remap_tiles, TileOrder};
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

const TILE_DIM: usize = 8;

/// Remapper for 3DS Morton-tiled texture data.
#[derive(Debug, Default)]
pub struct N3dsRemapper;

impl N3dsRemapper {
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
        if block.block_width == 1
            && block.block_height == 1
            && geometry.bits_per_pixel % 8 != 0
        {
            return Err(RemapError::unsupported(format!(
                "3ds tiling needs whole-byte pixels, got {} bpp",
                geometry.bits_per_pixel
            )));
        }
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

impl TextureRemapper for N3dsRemapper {
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
        Platform::N3ds
    }
}

#[cfg(test)]
#[path = "tests/n3ds_tests.rs"]
mod tests;
