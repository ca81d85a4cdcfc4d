//! PlayStation Portable texture remapper.
//!
//! The PSP's GE reads textures in 16-byte-wide, 8-row blocks laid out
//! sequentially, so the remap is the generic row-major tiler at byte
//! granularity over the image's byte width.

use retile_core::blocks::{remap_tiles, TileOrder};
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

const BLOCK_WIDTH_BYTES: usize = 16;
const BLOCK_HEIGHT_ROWS: usize = 8;

/// Remapper for PSP GE block-tiled texture data.
#[derive(Debug, Default)]
pub struct PspRemapper;

impl PspRemapper {
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
        let row_bytes = block.blocks_x(geometry) * block.block_byte_size as usize;
        let rows = block.blocks_y(geometry);
        validate_len(src, row_bytes * rows)?;

        Ok(remap_tiles(
            src,
            row_bytes,
            rows,
            1,
            BLOCK_WIDTH_BYTES,
            BLOCK_HEIGHT_ROWS,
            TileOrder::RowMajor,
            direction,
        ))
    }
}

impl TextureRemapper for PspRemapper {
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
        Platform::Psp
    }
}

#[cfg(test)]
#[path = "tests/psp_tests.rs"]
mod tests;
