//! Nintendo 64 texture remapper.
//!
//! The RDP loads textures into TMEM as 64-bit words and interleaves the
//! two 32-bit halves of every word on odd rows to dodge bank conflicts.
//! The transform is its own inverse, so swizzling and unswizzling are
//! the same byte shuffle.

use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, TextureRemapper};

/// Remapper for N64 TMEM word-interleaved texture data.
#[derive(Debug, Default)]
pub struct N64Remapper;

impl N64Remapper {
    pub fn new() -> Self {
        Self
    }

    fn remap(
        &self,
        src: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        if block.block_width != 1 || block.block_height != 1 {
            return Err(RemapError::unsupported(
                "n64 textures are not block compressed",
            ));
        }
        let row_bits = geometry.width as usize * geometry.bits_per_pixel as usize;
        if row_bits % 8 != 0 {
            return Err(RemapError::invalid_geometry(format!(
                "row of {} pixels at {} bpp is not a whole number of bytes",
                geometry.width, geometry.bits_per_pixel
            )));
        }
        let row_bytes = row_bits / 8;
        let rows = geometry.height as usize;
        validate_len(src, row_bytes * rows)?;

        let mut out = src.to_vec();
        for y in (1..rows).step_by(2) {
            let row = &mut out[y * row_bytes..(y + 1) * row_bytes];
            // Full 64-bit words only; a short tail stays in place.
            for word in row.chunks_exact_mut(8) {
                for i in 0..4 {
                    word.swap(i, i + 4);
                }
            }
        }
        Ok(out)
    }
}

impl TextureRemapper for N64Remapper {
    fn swizzle(
        &self,
        linear: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        self.remap(linear, geometry, block)
    }

    fn unswizzle(
        &self,
        swizzled: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        self.remap(swizzled, geometry, block)
    }

    fn platform(&self) -> Platform {
        Platform::N64
    }
}

#[cfg(test)]
#[path = "tests/n64_tests.rs"]
mod tests;
