//! PlayStation 2 Graphics Synthesizer texture remapper.
//!
//! The GS addresses its local memory through a page -> block -> column
//! hierarchy: PSMCT32 pages are 64x32 texels, PSMT8 pages 128x64, and
//! PSMT4 pages 128x128, all built from 8x8-texel-equivalent blocks. The
//! closed forms below collapse that hierarchy into a per-texel byte (or
//! nibble) address, which keeps the transform a pure function of the
//! coordinates instead of materializing page tables.
//!
//! For 4-bit data three independently reverse-engineered layouts exist
//! in the wild. They were recovered from specific titles, not from
//! hardware documentation, and each is bit-exact-correct for the data it
//! was recovered from — so the caller selects one explicitly via
//! [`Ps2SwizzleVariant`] and nothing here ever guesses or unifies them.

use log::debug;
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

/// PSMT4 block layout within a 128x128 page: 4 blocks across, 8 down.
const PSMT4_BLOCK_TABLE: [usize; 32] = [
    0, 2, 8, 10, //
    1, 3, 9, 11, //
    4, 6, 12, 14, //
    5, 7, 13, 15, //
    16, 18, 24, 26, //
    17, 19, 25, 27, //
    20, 22, 28, 30, //
    21, 23, 29, 31, //
];

/// Nibbles per PSMT4 page (128x128 texels) and per 32x16 block.
const PSMT4_PAGE_NIBBLES: usize = 128 * 128;
const PSMT4_BLOCK_NIBBLES: usize = 32 * 16;

/// Which 4-bit layout to use. The three algorithms produce different —
/// and each individually correct — outputs for the same logical image;
/// the right one depends on which tool or title produced the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ps2SwizzleVariant {
    /// The standard GS layout (selector 1): 8-bit column addressing over
    /// texel pairs plus the even/odd nibble swap.
    #[default]
    Standard,
    /// The EA "type 3" page-table layout (selector 2), recovered from
    /// EA-published titles.
    EaType3,
    /// The Suba/ezSwizzle layout (selector 3), recovered from the
    /// ezSwizzle tool's output.
    Suba,
}

impl Ps2SwizzleVariant {
    /// Parse the numeric selector used by file containers (1, 2, or 3).
    pub fn from_selector(selector: u32) -> Result<Self, RemapError> {
        match selector {
            1 => Ok(Self::Standard),
            2 => Ok(Self::EaType3),
            3 => Ok(Self::Suba),
            other => Err(RemapError::unsupported(format!(
                "PS2 4-bit swizzle selector {} (expected 1, 2, or 3)",
                other
            ))),
        }
    }

    pub fn selector(&self) -> u32 {
        match self {
            Self::Standard => 1,
            Self::EaType3 => 2,
            Self::Suba => 3,
        }
    }
}

/// Remapper for PS2 GS-addressed texture data (PSMT8 and PSMT4).
#[derive(Debug, Default)]
pub struct Ps2Remapper {
    variant: Ps2SwizzleVariant,
}

impl Ps2Remapper {
    pub fn new(variant: Ps2SwizzleVariant) -> Self {
        Self { variant }
    }

    /// De-interleave an indexed-format palette (CLUT). Orthogonal to
    /// pixel swizzling and exposed separately; see [`swizzle_palette`].
    pub fn swizzle_palette(&self, data: &[u8], entry_size: usize) -> Result<Vec<u8>, RemapError> {
        swizzle_palette(data, entry_size)
    }
}

impl TextureRemapper for Ps2Remapper {
    fn swizzle(
        &self,
        linear: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        remap_ps2(linear, geometry, block, self.variant, SwizzleDirection::ToSwizzled)
    }

    fn unswizzle(
        &self,
        swizzled: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError> {
        remap_ps2(swizzled, geometry, block, self.variant, SwizzleDirection::ToLinear)
    }

    fn platform(&self) -> Platform {
        Platform::Ps2
    }
}

fn remap_ps2(
    src: &[u8],
    geometry: &ImageGeometry,
    block: &BlockShape,
    variant: Ps2SwizzleVariant,
    direction: SwizzleDirection,
) -> Result<Vec<u8>, RemapError> {
    if block.block_width != 1 || block.block_height != 1 {
        return Err(RemapError::unsupported(
            "PS2 GS addressing operates on raw texels, not compressed blocks",
        ));
    }
    debug!(
        "ps2 remap: {}x{} at {} bpp, variant {:?}",
        geometry.width, geometry.height, geometry.bits_per_pixel, variant
    );
    match geometry.bits_per_pixel {
        8 => remap_8bit(src, geometry, direction),
        4 => remap_4bit(src, geometry, variant, direction),
        other => Err(RemapError::unsupported(format!(
            "PS2 GS swizzling supports 4 and 8 bpp indexed data, got {} bpp",
            other
        ))),
    }
}

/// Byte address of texel (x, y) in the swizzled PSMT8 layout.
///
/// `width` is the stride in texels and must be a multiple of 16; the
/// callers guarantee that by padding. The formula folds the GS
/// block/column tables into shifts and masks: 16x16 texel blocks, eight
/// two-row columns per block, with the half-column swap selected by bit
/// 2 of (y + 2).
fn gs_index_8bit(x: usize, y: usize, width: usize) -> usize {
    let block_location = (y & !0xF) * width + (x & !0xF) * 2;
    let swap_selector = (((y + 2) >> 2) & 1) * 4;
    let pos_y = (((y & !3) >> 1) + (y & 1)) & 7;
    let column_location = pos_y * width * 2 + ((x + swap_selector) & 7) * 4;
    let byte_num = ((y >> 1) & 1) + ((x >> 2) & 2);
    block_location + column_location + byte_num
}

/// Linear texel indices in swizzled-stream order.
///
/// `index` is the platform address of texel (x, y) in the space padded
/// for the layout's block grid. Ranking the texels by that address
///// compacts the stream: padding positions occupy no slot, so every
/// in-image texel keeps a home and the remap is a bijection for any
/// geometry. For block-aligned images the rank equals the address and
/// the stream is the raw hardware layout.
fn stream_order(w: usize, h: usize, index: impl Fn(usize, usize) -> usize) -> Vec<usize> {
    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            pairs.push((index(x, y), y * w + x));
        }
    }
    pairs.sort_unstable();
    pairs.into_iter().map(|(_, linear)| linear).collect()
}

fn remap_8bit(
    src: &[u8],
    geometry: &ImageGeometry,
    direction: SwizzleDirection,
) -> Result<Vec<u8>, RemapError> {
    let w = geometry.width as usize;
    let h = geometry.height as usize;
    validate_len(src, w * h)?;

    // Address in space padded to the 16x16 block grid.
    let pw = w.next_multiple_of(16);
    let order = stream_order(w, h, |x, y| gs_index_8bit(x, y, pw));

    let mut out = vec![0u8; src.len()];
    for (slot, &linear) in order.iter().enumerate() {
        match direction {
            SwizzleDirection::ToSwizzled => out[slot] = src[linear],
            SwizzleDirection::ToLinear => out[linear] = src[slot],
        }
    }
    Ok(out)
}

fn get_nibble(data: &[u8], index: usize) -> u8 {
    (data[index >> 1] >> ((index & 1) * 4)) & 0xF
}

fn set_nibble(data: &mut [u8], index: usize, value: u8) {
    let shift = (index & 1) * 4;
    let byte = &mut data[index >> 1];
    *byte = (*byte & !(0xF << shift)) | (value << shift);
}

/// Nibble address for the standard GS 4-bit layout: texel pairs share a
/// byte, the byte follows the 8-bit column math at half width, and rows
/// 2..=3 of each 4-row group land on the opposite nibble (the even/odd
/// nibble swap of PSMT4).
fn psmt4_index_standard(x: usize, y: usize, width: usize) -> usize {
    let byte = gs_index_8bit(x >> 1, y, width / 2);
    let mut nibble = x & 1;
    if (y >> 1) & 1 == 1 {
        nibble ^= 1;
    }
    byte * 2 + nibble
}

/// Nibble address for the EA "type 3" layout: 128x128 pages, 32x16
/// blocks ordered by the PSMT4 block table, four 32x4 columns per block
/// stored row-major.
fn psmt4_index_ea(x: usize, y: usize, width: usize) -> usize {
    let pages_x = width / 128;
    let page = (y / 128) * pages_x + x / 128;
    let lx = x & 127;
    let ly = y & 127;
    let block = PSMT4_BLOCK_TABLE[(ly / 16) * 4 + lx / 32];
    let column = (ly & 15) / 4;
    let index = (ly & 3) * 32 + (lx & 31);
    page * PSMT4_PAGE_NIBBLES + block * PSMT4_BLOCK_NIBBLES + column * 128 + index
}

/// Nibble address for the Suba/ezSwizzle layout: same 128x128 pages but
/// blocks walked column-major, with the ezSwizzle column hash (swap
/// selector and all) inside each 32x16 block.
fn psmt4_index_suba(x: usize, y: usize, width: usize) -> usize {
    let pages_x = width / 128;
    let page = (y / 128) * pages_x + x / 128;
    let lx = x & 127;
    let ly = y & 127;
    let block = (lx / 32) * 8 + ly / 16;

    let xb = (lx & 31) >> 1;
    let yb = ly & 15;
    let swap_selector = (((yb + 2) >> 2) & 1) * 4;
    let pos_y = (((yb & !3) >> 1) + (yb & 1)) & 7;
    let byte = pos_y * 32 + ((xb + swap_selector) & 7) * 4 + ((yb >> 1) & 1) + ((xb >> 2) & 2);
    let nibble = lx & 1;

    page * PSMT4_PAGE_NIBBLES + block * PSMT4_BLOCK_NIBBLES + byte * 2 + nibble
}

fn remap_4bit(
    src: &[u8],
    geometry: &ImageGeometry,
    variant: Ps2SwizzleVariant,
    direction: SwizzleDirection,
) -> Result<Vec<u8>, RemapError> {
    let w = geometry.width as usize;
    let h = geometry.height as usize;
    if (w * h) % 2 != 0 {
        return Err(RemapError::invalid_geometry(format!(
            "4 bpp image must hold a whole number of bytes, got {}x{}",
            w, h
        )));
    }
    validate_len(src, w * h / 2)?;

    // The standard layout needs the half-width byte grid 16-aligned;
    // the paged layouts need whole 128x128 pages.
    let pw = match variant {
        Ps2SwizzleVariant::Standard => w.next_multiple_of(32),
        Ps2SwizzleVariant::EaType3 | Ps2SwizzleVariant::Suba => w.next_multiple_of(128),
    };
    let order = stream_order(w, h, |x, y| match variant {
        Ps2SwizzleVariant::Standard => psmt4_index_standard(x, y, pw),
        Ps2SwizzleVariant::EaType3 => psmt4_index_ea(x, y, pw),
        Ps2SwizzleVariant::Suba => psmt4_index_suba(x, y, pw),
    });

    let mut out = vec![0u8; src.len()];
    for (slot, &linear) in order.iter().enumerate() {
        let (from, to) = match direction {
            SwizzleDirection::ToSwizzled => (linear, slot),
            SwizzleDirection::ToLinear => (slot, linear),
        };
        let value = get_nibble(src, from);
        set_nibble(&mut out, to, value);
    }
    Ok(out)
}

/// De-interleave a PS2 CLUT.
///
/// The GS stores indexed-format palettes with the two middle 8-color
/// runs of every 32-color group crossed; swapping them back linearizes
/// the palette. The reorder is an involution, so the same call converts
/// in both directions. `entry_size` is the byte width of one color
/// entry (4 for RGBA32 palettes, 2 for 16-bit ones). A trailing group
/// shorter than 32 entries is passed through untouched.
pub fn swizzle_palette(data: &[u8], entry_size: usize) -> Result<Vec<u8>, RemapError> {
    if entry_size == 0 {
        return Err(RemapError::invalid_geometry("palette entry size must be positive"));
    }
    if data.len() % entry_size != 0 {
        return Err(RemapError::size_mismatch(
            data.len().next_multiple_of(entry_size),
            data.len(),
        ));
    }

    let group = 32 * entry_size;
    let run = 8 * entry_size;
    let mut out = data.to_vec();
    let mut base = 0;
    while base + group <= data.len() {
        out[base + run..base + 2 * run].copy_from_slice(&data[base + 2 * run..base + 3 * run]);
        out[base + 2 * run..base + 3 * run].copy_from_slice(&data[base + run..base + 2 * run]);
        base += group;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "tests/ps2_tests.rs"]
mod tests;
