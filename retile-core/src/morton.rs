//! Morton (Z-order) index calculation.
//!
//! Several GPUs store texels along a Z-order space-filling curve. The
//! curve comes in three documented flavors that are not interchangeable:
//!
//! - [`morton_index`] — the plain curve (PS3 and general use)
//! - [`morton_index_rotated`] — the 90°-rotated curve used by the
//!   Dreamcast and PS Vita
//! - the PS4/PS5 super-tiled variant, built from [`morton_index`] over
//!   fixed-size sub-tiles by the platform remappers
//!
//! For square power-of-two dimensions the plain and rotated curves are
//! transposes of each other; for rectangular textures the dimension that
//! exhausts first changes which axis absorbs the high bits, so the two
//! must be kept distinct.

/// Map a sequential index `t` in `0..width * height` to its Z-order
/// position `y * width + x`.
///
/// Bits of `t` are dealt alternately to an x and a y accumulator for as
/// long as the corresponding dimension still has more than one remaining
/// unit, halving the dimension each step. Bijective over
/// `0..width * height` for power-of-two dimensions.
pub fn morton_index(t: usize, width: usize, height: usize) -> usize {
    let mut x_weight = 1;
    let mut y_weight = 1;
    let mut bits = t;
    let mut w = width;
    let mut h = height;
    let mut x = 0;
    let mut y = 0;

    while w > 1 || h > 1 {
        if w > 1 {
            x += x_weight * (bits & 1);
            bits >>= 1;
            x_weight *= 2;
            w >>= 1;
        }
        if h > 1 {
            y += y_weight * (bits & 1);
            bits >>= 1;
            y_weight *= 2;
            h >>= 1;
        }
    }

    y * width + x
}

/// The Dreamcast/PS Vita variant of [`morton_index`]: the halving order
/// and bit targets are swapped, so the first bit of `t` lands on the
/// y axis instead of the x axis.
pub fn morton_index_rotated(t: usize, width: usize, height: usize) -> usize {
    let mut x_weight = 1;
    let mut y_weight = 1;
    let mut bits = t;
    let mut w = width;
    let mut h = height;
    let mut x = 0;
    let mut y = 0;

    while w > 1 || h > 1 {
        if h > 1 {
            y += y_weight * (bits & 1);
            bits >>= 1;
            y_weight *= 2;
            h >>= 1;
        }
        if w > 1 {
            x += x_weight * (bits & 1);
            bits >>= 1;
            x_weight *= 2;
            w >>= 1;
        }
    }

    y * width + x
}

#[cfg(test)]
#[path = "tests/morton_tests.rs"]
mod tests;
