//! Nintendo Switch (Tegra X1) block-linear remapper.
//!
//! Tiled data is built from 512-byte GOBs (64 bytes wide, 8 rows tall).
//! GOBs stack vertically into blocks of `block_height` GOBs, and blocks
//! run row-major across the surface. The GOB interior is a fixed
//! bit-masked shuffle of the low coordinate bits.
//!
//! Rows are addressed at byte granularity, so the unit grid is
//! `width_in_blocks * bytes_per_block` columns by `height_in_blocks`
//! rows.
//!
//! Known limitation: for dimensions that are not GOB multiples the
//! tiled stream is cropped to the linear buffer's length, and
//! re-swizzling after unswizzling does not always reproduce the
//! original padding bytes. Aligned surfaces round-trip exactly.

use log::debug;
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

const GOB_SIZE: usize = 512;
const GOB_WIDTH_BYTES: usize = 64;
const GOB_HEIGHT: usize = 8;

/// Default block height in GOBs for a surface height given in block
/// rows, following the driver's mip-0 heuristic.
pub fn auto_block_height(height_in_blocks: usize) -> usize {
    match height_in_blocks / GOB_HEIGHT {
        0..=1 => 1,
        2 => 2,
        3..=4 => 4,
        5..=12 => 8,
        _ => 16,
    }
}

fn gob_offset(x_bytes: usize, y: usize) -> usize {
    ((x_bytes % 64) / 32) * 256
        + ((y % 8) / 2) * 64
        + ((x_bytes % 32) / 16) * 32
        + (y % 2) * 16
        + (x_bytes % 16)
}

fn block_linear_address(
    x_bytes: usize,
    y: usize,
    block_height: usize,
    width_in_gobs: usize,
) -> usize {
    let rows_per_block = GOB_HEIGHT * block_height;
    let gob_base = (y / rows_per_block) * GOB_SIZE * block_height * width_in_gobs
        + (x_bytes / GOB_WIDTH_BYTES) * GOB_SIZE * block_height
        + ((y % rows_per_block) / GOB_HEIGHT) * GOB_SIZE;
    gob_base + gob_offset(x_bytes, y)
}

/// Remapper for Switch block-linear texture data.
#[derive(Debug, Default)]
pub struct SwitchRemapper {
    /// Block height in GOBs; `None` derives it from the surface height.
    pub block_height: Option<usize>,
}

impl SwitchRemapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a remapper with an explicit block height (1, 2, 4, 8, 16
    /// or 32 GOBs).
    pub fn with_block_height(block_height: usize) -> Self {
        Self {
            block_height: Some(block_height),
        }
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
        let width_bytes = units_w * unit_len;
        validate_len(src, width_bytes * units_h)?;

        let block_height = match self.block_height {
            Some(bh) => {
                if !bh.is_power_of_two() || bh > 32 {
                    return Err(RemapError::unsupported(format!(
                        "block height of {} gobs",
                        bh
                    )));
                }
                bh
            }
            None => auto_block_height(units_h),
        };
        let width_in_gobs = width_bytes.div_ceil(GOB_WIDTH_BYTES);
        debug!(
            "switch remap: {}x{} bytes, block height {} gobs, {} gobs per row",
            width_bytes, units_h, block_height, width_in_gobs
        );

        let mut out = vec![0u8; src.len()];
        for y in 0..units_h {
            for x_bytes in 0..width_bytes {
                let tiled = block_linear_address(x_bytes, y, block_height, width_in_gobs);
                let linear = y * width_bytes + x_bytes;
                let (from, to) = match direction {
                    SwizzleDirection::ToSwizzled => (linear, tiled),
                    SwizzleDirection::ToLinear => (tiled, linear),
                };
                // Addresses in the padding past the true buffer are
                // dropped; see the module-level limitation note.
                if from < src.len() && to < out.len() {
                    out[to] = src[from];
                }
            }
        }
        Ok(out)
    }
}

impl TextureRemapper for SwitchRemapper {
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
        Platform::Switch
    }
}

#[cfg(test)]
#[path = "tests/switch_tests.rs"]
mod tests;
