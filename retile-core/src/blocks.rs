//! Generic block/tile reordering.
//!
//! Most console layouts are "tiled": the swizzled stream stores one
//! whole tile of units after another, while linear data stores units in
//! row-major order. [`remap_tiles`] is the shared engine for that
//! family. The unit is whatever the caller's [`BlockShape`] describes —
//! a raw pixel, a BC compression block, or a single byte — and the
//! traversal order inside a tile is selectable, which covers the plain
//! tilers (GameCube, PSP) and the Morton-in-tile tilers (3DS, PS4)
//! with one loop.
//!
//! Dimensions that are not tile multiples are handled by visiting the
//! padded tile grid while giving units outside the true image no slot
//! in the stream: edge tiles store only their in-image units, packed in
//! traversal order. Both buffers stay at the caller's true size, the
//! crop preserves top-left-anchored row-major order, and the transform
//! is a bijection for every geometry. For tile-multiple dimensions the
//! stream coincides with whole hardware tiles.
//!
//! [`BlockShape`]: crate::geometry::BlockShape

use crate::geometry::SwizzleDirection;
use crate::morton::{morton_index, morton_index_rotated};

/// Unit traversal order inside one tile of the swizzled stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileOrder {
    RowMajor,
    Morton,
    MortonRotated,
}

/// Move units between row-major order and sequential-tile order.
///
/// `units_w`/`units_h` are the true image dimensions in units and
/// `unit_len` is the byte size of one unit. The output buffer always has
/// the same length as `src`; units of the padded grid with no home in
/// the true image occupy no stream slot, so every in-image unit keeps a
/// home and the remap is a strict bijection on the buffer's bytes for
/// any geometry.
pub fn remap_tiles(
    src: &[u8],
    units_w: usize,
    units_h: usize,
    unit_len: usize,
    tile_w: usize,
    tile_h: usize,
    order: TileOrder,
    direction: SwizzleDirection,
) -> Vec<u8> {
    let tiles_x = units_w.div_ceil(tile_w);
    let tiles_y = units_h.div_ceil(tile_h);
    let mut out = vec![0u8; src.len()];
    let mut stream = 0usize;

    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            for t in 0..tile_w * tile_h {
                let p = match order {
                    TileOrder::RowMajor => t,
                    TileOrder::Morton => morton_index(t, tile_w, tile_h),
                    TileOrder::MortonRotated => morton_index_rotated(t, tile_w, tile_h),
                };
                let x = tx * tile_w + p % tile_w;
                let y = ty * tile_h + p / tile_w;

                if x >= units_w || y >= units_h {
                    continue;
                }
                let tiled = stream;
                stream += unit_len;
                let linear = (y * units_w + x) * unit_len;

                let (from, to) = match direction {
                    SwizzleDirection::ToLinear => (tiled, linear),
                    SwizzleDirection::ToSwizzled => (linear, tiled),
                };
                if from + unit_len <= src.len() && to + unit_len <= out.len() {
                    out[to..to + unit_len].copy_from_slice(&src[from..from + unit_len]);
                }
            }
        }
    }

    out
}

/// Smallest power of two that is >= `n` (and at least 1).
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

#[cfg(test)]
#[path = "tests/blocks_tests.rs"]
mod tests;
