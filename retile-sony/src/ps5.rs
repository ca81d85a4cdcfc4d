//! PlayStation 5 texture remapper.
//!
//! An extension of the PS4 scheme: Morton-ordered sub-tiles are grouped
//! into fixed super-tiles before the super-tiles are laid out row-major
//! over the image. Sub-tile and super-tile dimensions depend on the
//! block byte size — 16-byte blocks (BC3/BC7 class) use 16x16 sub-tiles
//! in 64x64 super-tiles, everything smaller uses 32x16 sub-tiles in
//! 128x128 super-tiles. Edge tiles store only their in-image units, the
//! same compact-stream rule as the PS4 remapper.

use retile_core::geometry::validate_len;
use retile_core::morton::morton_index;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

/// Remapper for PS5 super-tiled Morton texture data.
#[derive(Debug, Default)]
pub struct Ps5Remapper;

impl Ps5Remapper {
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

        let (sub_w, sub_h, super_dim) = if unit_len >= 16 {
            (16, 16, 64)
        } else {
            (32, 16, 128)
        };
        let subs_per_row = super_dim / sub_w;
        let subs_per_col = super_dim / sub_h;

        let mut out = vec![0u8; src.len()];
        let mut stream = 0usize;

        for sy in 0..units_h.div_ceil(super_dim) {
            for sx in 0..units_w.div_ceil(super_dim) {
                for by in 0..subs_per_col {
                    for bx in 0..subs_per_row {
                        for t in 0..sub_w * sub_h {
                            let p = morton_index(t, sub_w, sub_h);
                            let x = sx * super_dim + bx * sub_w + p % sub_w;
                            let y = sy * super_dim + by * sub_h + p / sub_w;

                            if x >= units_w || y >= units_h {
                                continue;
                            }
                            let tiled = stream;
                            stream += unit_len;
                            let linear = (y * units_w + x) * unit_len;

                            let (from, to) = match direction {
                                SwizzleDirection::ToSwizzled => (linear, tiled),
                                SwizzleDirection::ToLinear => (tiled, linear),
                            };
                            if from + unit_len <= src.len() && to + unit_len <= out.len() {
                                out[to..to + unit_len].copy_from_slice(&src[from..from + unit_len]);
                            }
                        }
                    }
                }
            }
        }
        Ok(out)
    }
}

impl TextureRemapper for Ps5Remapper {
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
        Platform::Ps5
    }
}

#[cfg(test)]
#[path = "tests/ps5_tests.rs"]
mod tests;
