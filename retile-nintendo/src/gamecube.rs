//! GameCube (Flipper/GX) texture remapper.
//!
//! GX stores textures in 32-byte cache-line tiles whose pixel footprint
//! depends on the format depth:
//!
//! - 4 bpp: 8x8 pixels (4 bytes x 8 rows)
//! - 8 bpp: 8x4 pixels
//! - 16 bpp: 4x4 pixels
//! - 32 bpp: 4x4 pixels split over two cache lines, moved here as one
//!   4-byte unit per pixel
//! - CMPR and friends: 2x2 compressed blocks per tile
//!
//! Units inside a tile run row-major; tiles run row-major across the
//! surface. Dimensions that are not tile multiples are padded during
//! traversal and cropped on the way out.

use retile_core::blocks::{remap_tiles, TileOrder};
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

/// Unit grid and tile footprint for one surface.
struct TileLayout {
    units_w: usize,
    units_h: usize,
    unit_len: usize,
    tile_w: usize,
    tile_h: usize,
}

fn layout_for(geometry: &ImageGeometry, block: &BlockShape) -> Result<TileLayout, RemapError> {
    if block.block_width > 1 || block.block_height > 1 {
        return Ok(TileLayout {
            units_w: block.blocks_x(geometry),
            units_h: block.blocks_y(geometry),
            unit_len: block.block_byte_size as usize,
            tile_w: 2,
            tile_h: 2,
        });
    }
    let w = geometry.width as usize;
    let h = geometry.height as usize;
    match geometry.bits_per_pixel {
        // One byte holds two texels, so the unit grid is in bytes.
        4 => Ok(TileLayout {
            units_w: w.div_ceil(2),
            units_h: h,
            unit_len: 1,
            tile_w: 4,
            tile_h: 8,
        }),
        8 => Ok(TileLayout {
            units_w: w,
            units_h: h,
            unit_len: 1,
            tile_w: 8,
            tile_h: 4,
        }),
        16 => Ok(TileLayout {
            units_w: w,
            units_h: h,
            unit_len: 2,
            tile_w: 4,
            tile_h: 4,
        }),
        32 => Ok(TileLayout {
            units_w: w,
            units_h: h,
            unit_len: 4,
            tile_w: 4,
            tile_h: 4,
        }),
        bpp => Err(RemapError::unsupported(format!(
            "gamecube tiling is undefined for {} bpp",
            bpp
        ))),
    }
}

pub(crate) fn remap(
    src: &[u8],
    geometry: &ImageGeometry,
    block: &BlockShape,
    direction: SwizzleDirection,
) -> Result<Vec<u8>, RemapError> {
    let layout = layout_for(geometry, block)?;
    validate_len(src, layout.units_w * layout.units_h * layout.unit_len)?;
    Ok(remap_tiles(
        src,
        layout.units_w,
        layout.units_h,
        layout.unit_len,
        layout.tile_w,
        layout.tile_h,
        TileOrder::RowMajor,
        direction,
    ))
}

/// Remapper for GameCube cache-line-tiled texture data.
#[derive(Debug, Default)]
pub struct GameCubeRemapper;

impl GameCubeRemapper {
    pub fn new() -> Self {
        Self
    }
}

impl TextureRemapper for GameCubeRemapper {
    fn swizzle(
        &self,
        linear: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        remap(linear, geometry, block, SwizzleDirection::ToSwizzled)
    }

    fn unswizzle(
        &self,
        swizzled: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        remap(swizzled, geometry, block, SwizzleDirection::ToLinear)
    }

    fn platform(&self) -> Platform {
        Platform::GameCube
    }
}

#[cfg(test)]
#[path = "tests/gamecube_tests.rs"]
mod tests;
