//! Xbox 360 texture remapper.
//!
//! The Xenos GPU stores 2D textures in a three-level tiling scheme:
//! 32x32-block macro tiles, 8x8 tiles inside them, and a bpp-dependent
//! micro layout inside those. The closed-form `XGAddress2DTiledOffset`
//! math below maps a row-major block offset to its tiled (x, y)
//! position; address calculations use the block width rounded up to a
//! multiple of 32, and blocks are stored by the rank of that position so
//! surfaces of any block dimensions round-trip exactly.
//!
//! Tiled data is big-endian on the console. The remapper swaps each
//! 16-bit pair by default so linear output is little-endian; set
//! `byte_swap` to `false` for data that has already been swapped.

use log::debug;
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

/// Swaps the two bytes of every 16-bit word in place. A trailing odd
/// byte is left untouched.
pub fn swap_byte_order(data: &mut [u8]) {
    for chunk in data.chunks_exact_mut(2) {
        chunk.swap(0, 1);
    }
}

fn xg_address_2d_tiled_x(
    block_offset: usize,
    width_in_blocks: usize,
    texel_byte_pitch: usize,
) -> usize {
    let aligned_width = (width_in_blocks + 31) & !31;
    let log_bpp = (texel_byte_pitch >> 2) + ((texel_byte_pitch >> 1) >> (texel_byte_pitch >> 2));
    let offset_byte = block_offset << log_bpp;
    let offset_tile =
        ((offset_byte & !0xFFF) >> 3) + ((offset_byte & 0x700) >> 2) + (offset_byte & 0x3F);
    let offset_macro = offset_tile >> (7 + log_bpp);

    let macro_x = (offset_macro % (aligned_width >> 5)) << 2;
    let tile = (((offset_tile >> (5 + log_bpp)) & 2) + (offset_byte >> 6)) & 3;
    let macro_pos = (macro_x + tile) << 3;
    let micro = ((((offset_tile >> 1) & !0xF) + (offset_tile & 0xF))
        & ((texel_byte_pitch << 3) - 1))
        >> log_bpp;

    macro_pos + micro
}

fn xg_address_2d_tiled_y(
    block_offset: usize,
    width_in_blocks: usize,
    texel_byte_pitch: usize,
) -> usize {
    let aligned_width = (width_in_blocks + 31) & !31;
    let log_bpp = (texel_byte_pitch >> 2) + ((texel_byte_pitch >> 1) >> (texel_byte_pitch >> 2));
    let offset_byte = block_offset << log_bpp;
    let offset_tile =
        ((offset_byte & !0xFFF) >> 3) + ((offset_byte & 0x700) >> 2) + (offset_byte & 0x3F);
    let offset_macro = offset_tile >> (7 + log_bpp);

    let macro_y = (offset_macro / (aligned_width >> 5)) << 2;
    let tile = ((offset_tile >> (6 + log_bpp)) & 1) + ((offset_byte & 0x800) >> 10);
    let macro_pos = (macro_y + tile) << 3;
    let micro = (((offset_tile & (((texel_byte_pitch << 6) - 1) & !0x1F))
        + ((offset_tile & 0xF) << 1))
        >> (3 + log_bpp))
        & !1;

    macro_pos + micro + ((offset_tile & 0x10) >> 4)
}

/// Remapper for Xbox 360 macro/micro-tiled texture data.
#[derive(Debug)]
pub struct Xbox360Remapper {
    /// Swap 16-bit byte order alongside the tiling transform.
    pub byte_swap: bool,
}

impl Default for Xbox360Remapper {
    fn default() -> Self {
        Self { byte_swap: true }
    }
}

impl Xbox360Remapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a remapper that leaves byte order alone.
    pub fn without_byte_swap() -> Self {
        Self { byte_swap: false }
    }

    fn remap(
        &self,
        src: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
        direction: SwizzleDirection,
    ) -> Result<Vec<u8>, RemapError> {
        let width_in_blocks = block.blocks_x(geometry);
        let height_in_blocks = block.blocks_y(geometry);
        let texel_byte_pitch = block.block_byte_size as usize;
        validate_len(src, width_in_blocks * height_in_blocks * texel_byte_pitch)?;

        debug!(
            "xbox 360 remap: {}x{} blocks, {} bytes per block, aligned width {}",
            width_in_blocks,
            height_in_blocks,
            texel_byte_pitch,
            (width_in_blocks + 31) & !31
        );

        let mut input;
        let src = if self.byte_swap && direction == SwizzleDirection::ToSwizzled {
            input = src.to_vec();
            swap_byte_order(&mut input);
            input.as_slice()
        } else {
            src
        };

        // Rank each block by its tiled position in the 32-aligned grid.
        // For 32-aligned widths the rank is the raw tiled block offset;
        // narrower surfaces compact to consecutive slots instead of
        // spilling edge blocks past the buffer, keeping the remap a
        // bijection for any geometry.
        let aligned_width = (width_in_blocks + 31) & !31;
        let mut pairs: Vec<(usize, usize)> =
            Vec::with_capacity(width_in_blocks * height_in_blocks);
        for j in 0..height_in_blocks {
            for i in 0..width_in_blocks {
                let block_offset = j * width_in_blocks + i;
                let x = xg_address_2d_tiled_x(block_offset, width_in_blocks, texel_byte_pitch);
                let y = xg_address_2d_tiled_y(block_offset, width_in_blocks, texel_byte_pitch);
                pairs.push((y * aligned_width + x, block_offset));
            }
        }
        pairs.sort_unstable();

        let mut out = vec![0u8; src.len()];
        for (slot, &(_, block_offset)) in pairs.iter().enumerate() {
            let linear_pos = block_offset * texel_byte_pitch;
            let tiled_pos = slot * texel_byte_pitch;
            let (from, to) = match direction {
                SwizzleDirection::ToSwizzled => (linear_pos, tiled_pos),
                SwizzleDirection::ToLinear => (tiled_pos, linear_pos),
            };
            out[to..to + texel_byte_pitch].copy_from_slice(&src[from..from + texel_byte_pitch]);
        }

        if self.byte_swap && direction == SwizzleDirection::ToLinear {
            swap_byte_order(&mut out);
        }
        Ok(out)
    }
}

impl TextureRemapper for Xbox360Remapper {
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
        Platform::Xbox360
    }
}

#[cfg(test)]
#[path = "tests/xbox360_tests.rs"]
mod tests;
