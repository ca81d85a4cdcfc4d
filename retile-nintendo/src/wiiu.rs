//! Wii U (GX2/Latte) texture remapper.
//!
//! Latte is an AMD R700-class GPU; its AddrLib tiling spreads
//! micro-tiles across two pipes and four banks so consecutive fetches
//! hit different memory channels. The address of a unit depends on the
//! tile mode, the bits per unit, the surface pitch, and two swizzle
//! seeds baked into the texture registers:
//!
//! - linear modes (0, 1) lay units out row-major;
//! - micro-tiled mode (2) packs 8x8-unit micro-tiles row-major;
//! - macro-tiled thin modes (4-6, 8-10, 12, 14) group micro-tiles into
//!   pipe/bank-interleaved macro-tiles, with the `B` variants also
//!   rotating banks every bank-swap-width columns.
//!
//! Thick modes (3, 7, 11, 13, 15) and linear-special (16) address a
//! third texel dimension and are rejected here; this remapper covers 2D
//! surfaces only.
//!
//! Block-compressed formats pass their block as the unit, so a BC1
//! surface is addressed as width/4 x height/4 units of 64 bits each.

use log::debug;
use retile_core::geometry::validate_len;
use retile_core::{BlockShape, ImageGeometry, Platform, RemapError, SwizzleDirection, TextureRemapper};

const NUM_PIPES: usize = 2;
const NUM_BANKS: usize = 4;
const PIPE_BITS: usize = 1;
const BANK_BITS: usize = 2;
const GROUP_BITS: usize = 8;
const ROW_SIZE: usize = 2048;
const SWAP_SIZE: usize = 256;
const MICRO_TILE_DIM: usize = 8;
const MICRO_TILE_UNITS: usize = MICRO_TILE_DIM * MICRO_TILE_DIM;

const BANK_SWAP_ORDER: [usize; 8] = [0, 1, 3, 2, 6, 7, 5, 4];

/// GX2 tile mode register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GX2TileMode {
    LinearGeneral,
    LinearAligned,
    Tiled1dThin1,
    Tiled1dThick,
    Tiled2dThin1,
    Tiled2dThin2,
    Tiled2dThin4,
    Tiled2dThick,
    Tiled2bThin1,
    Tiled2bThin2,
    Tiled2bThin4,
    Tiled2bThick,
    Tiled3dThin1,
    Tiled3dThick,
    Tiled3bThin1,
    Tiled3bThick,
    LinearSpecial,
}

impl GX2TileMode {
    /// Maps the raw register value (0..=16) to a tile mode.
    pub fn from_code(code: u32) -> Result<Self, RemapError> {
        use GX2TileMode::*;
        Ok(match code {
            0 => LinearGeneral,
            1 => LinearAligned,
            2 => Tiled1dThin1,
            3 => Tiled1dThick,
            4 => Tiled2dThin1,
            5 => Tiled2dThin2,
            6 => Tiled2dThin4,
            7 => Tiled2dThick,
            8 => Tiled2bThin1,
            9 => Tiled2bThin2,
            10 => Tiled2bThin4,
            11 => Tiled2bThick,
            12 => Tiled3dThin1,
            13 => Tiled3dThick,
            14 => Tiled3bThin1,
            15 => Tiled3bThick,
            16 => LinearSpecial,
            _ => {
                return Err(RemapError::unsupported(format!(
                    "gx2 tile mode code {}",
                    code
                )));
            }
        })
    }

    pub fn code(self) -> u32 {
        use GX2TileMode::*;
        match self {
            LinearGeneral => 0,
            LinearAligned => 1,
            Tiled1dThin1 => 2,
            Tiled1dThick => 3,
            Tiled2dThin1 => 4,
            Tiled2dThin2 => 5,
            Tiled2dThin4 => 6,
            Tiled2dThick => 7,
            Tiled2bThin1 => 8,
            Tiled2bThin2 => 9,
            Tiled2bThin4 => 10,
            Tiled2bThick => 11,
            Tiled3dThin1 => 12,
            Tiled3dThick => 13,
            Tiled3bThin1 => 14,
            Tiled3bThick => 15,
            LinearSpecial => 16,
        }
    }

    fn is_linear(self) -> bool {
        matches!(self, Self::LinearGeneral | Self::LinearAligned)
    }

    fn is_thick(self) -> bool {
        matches!(
            self,
            Self::Tiled1dThick
                | Self::Tiled2dThick
                | Self::Tiled2bThick
                | Self::Tiled3dThick
                | Self::Tiled3bThick
                | Self::LinearSpecial
        )
    }

    fn is_macro_tiled(self) -> bool {
        self.code() >= 4 && self != Self::LinearSpecial
    }

    fn is_bank_swapped(self) -> bool {
        matches!(
            self,
            Self::Tiled2bThin1
                | Self::Tiled2bThin2
                | Self::Tiled2bThin4
                | Self::Tiled2bThick
                | Self::Tiled3bThin1
                | Self::Tiled3bThick
        )
    }

    /// Macro-tile aspect ratio for the thin2/thin4 shapes.
    fn aspect_ratio(self) -> usize {
        match self {
            Self::Tiled2dThin2 | Self::Tiled2bThin2 => 2,
            Self::Tiled2dThin4 | Self::Tiled2bThin4 => 4,
            _ => 1,
        }
    }
}

/// Bits per addressable unit for a GX2 surface format code, from the
/// hardware format table (low six bits of the register value).
pub fn surface_format_bits(format: u32) -> Result<usize, RemapError> {
    Ok(match format & 0x3F {
        0x01 | 0x02 => 8,
        0x06 | 0x07 | 0x08 | 0x0a | 0x0b | 0x0c => 16,
        0x0e | 0x0f | 0x19 | 0x1a | 0x1b => 32,
        0x1f | 0x22 => 64,
        0x23 => 128,
        // BC blocks address as one unit.
        0x31 | 0x34 => 64,
        0x32 | 0x33 | 0x35 => 128,
        other => {
            return Err(RemapError::unsupported(format!(
                "gx2 surface format 0x{:02x}",
                other
            )));
        }
    })
}

/// Unit position inside an 8x8 micro-tile, interleaved per the
/// displayable-order bit pattern for the unit's bit width.
fn pixel_index_in_micro_tile(x: usize, y: usize, bits_per_unit: usize) -> Result<usize, RemapError> {
    let (b0, b1, b2, b3, b4, b5) = match bits_per_unit {
        8 => (
            x & 1,
            (x & 2) >> 1,
            (x & 4) >> 2,
            (y & 2) >> 1,
            y & 1,
            (y & 4) >> 2,
        ),
        16 => (
            x & 1,
            (x & 2) >> 1,
            (x & 4) >> 2,
            y & 1,
            (y & 2) >> 1,
            (y & 4) >> 2,
        ),
        32 => (
            x & 1,
            (x & 2) >> 1,
            y & 1,
            (x & 4) >> 2,
            (y & 2) >> 1,
            (y & 4) >> 2,
        ),
        64 => (
            x & 1,
            y & 1,
            (x & 2) >> 1,
            (x & 4) >> 2,
            (y & 2) >> 1,
            (y & 4) >> 2,
        ),
        128 => (
            y & 1,
            x & 1,
            (x & 2) >> 1,
            (x & 4) >> 2,
            (y & 2) >> 1,
            (y & 4) >> 2,
        ),
        other => {
            return Err(RemapError::unsupported(format!(
                "gx2 micro tiling is undefined for {} bits per unit",
                other
            )));
        }
    };
    Ok(b5 << 5 | b4 << 4 | b3 << 3 | b2 << 2 | b1 << 1 | b0)
}

fn pipe_from_coord(x: usize, y: usize) -> usize {
    ((y >> 3) ^ (x >> 3)) & 1
}

fn bank_from_coord(x: usize, y: usize) -> usize {
    let bit0 = ((y / (16 * NUM_PIPES)) ^ (x >> 3)) & 1;
    let bit1 = ((y / (8 * NUM_PIPES)) ^ (x >> 4)) & 1;
    bit0 | (bit1 << 1)
}

/// Column width, in units, after which the `B` tile modes rotate their
/// bank assignment.
fn bank_swapped_width(mode: GX2TileMode, bits_per_unit: usize, pitch: usize) -> usize {
    let bytes_per_sample = 8 * bits_per_unit;
    let factor = mode.aspect_ratio();

    let swap_tiles = ((SWAP_SIZE >> 1) / bits_per_unit).max(1);
    let swap_width = swap_tiles * 8 * NUM_BANKS;
    let height_bytes = factor * NUM_PIPES * bits_per_unit;
    let swap_max = NUM_PIPES * NUM_BANKS * ROW_SIZE / height_bytes;
    let swap_min = 256 * 8 * NUM_BANKS / bytes_per_sample;

    let mut width = swap_max.min(swap_min.max(swap_width));
    while width >= 2 * pitch {
        width >>= 1;
    }
    width
}

fn micro_tiled_address(
    x: usize,
    y: usize,
    bits_per_unit: usize,
    pitch: usize,
) -> Result<usize, RemapError> {
    let micro_tile_bytes = (MICRO_TILE_UNITS * bits_per_unit).div_ceil(8);
    let micro_tiles_per_row = pitch / MICRO_TILE_DIM;
    let micro_tile_offset =
        micro_tile_bytes * ((x / MICRO_TILE_DIM) + (y / MICRO_TILE_DIM) * micro_tiles_per_row);

    let pixel_index = pixel_index_in_micro_tile(x, y, bits_per_unit)?;
    Ok(micro_tile_offset + (bits_per_unit * pixel_index) / 8)
}

#[allow(clippy::too_many_arguments)]
fn macro_tiled_address(
    x: usize,
    y: usize,
    bits_per_unit: usize,
    pitch: usize,
    mode: GX2TileMode,
    pipe_swizzle: usize,
    bank_swizzle: usize,
) -> Result<usize, RemapError> {
    let pixel_index = pixel_index_in_micro_tile(x, y, bits_per_unit)?;
    let elem_offset = (bits_per_unit * pixel_index) / 8;

    let mut pipe = pipe_from_coord(x, y);
    let mut bank = bank_from_coord(x, y);
    let mut bank_pipe = pipe + NUM_PIPES * bank;
    let swizzle = pipe_swizzle + NUM_PIPES * bank_swizzle;
    bank_pipe = (bank_pipe ^ swizzle) % (NUM_PIPES * NUM_BANKS);
    pipe = bank_pipe % NUM_PIPES;
    bank = bank_pipe / NUM_PIPES;

    let mut macro_tile_pitch = 8 * NUM_BANKS;
    let mut macro_tile_height = 8 * NUM_PIPES;
    match mode.aspect_ratio() {
        2 => {
            macro_tile_pitch /= 2;
            macro_tile_height *= 2;
        }
        4 => {
            macro_tile_pitch /= 4;
            macro_tile_height *= 4;
        }
        _ => {}
    }

    let macro_tiles_per_row = pitch / macro_tile_pitch;
    let macro_tile_bytes = (bits_per_unit * macro_tile_height * macro_tile_pitch).div_ceil(8);
    let macro_index_x = x / macro_tile_pitch;
    let macro_index_y = y / macro_tile_height;
    let macro_tile_offset = (macro_index_x + macro_tiles_per_row * macro_index_y) * macro_tile_bytes;

    if mode.is_bank_swapped() {
        let swap_width = bank_swapped_width(mode, bits_per_unit, pitch);
        let swap_index = macro_tile_pitch * macro_index_x / swap_width;
        bank ^= BANK_SWAP_ORDER[swap_index & (NUM_BANKS - 1)];
    }

    let group_mask = (1usize << GROUP_BITS) - 1;
    let swizzle_bits = BANK_BITS + PIPE_BITS;
    let total_offset = elem_offset + (macro_tile_offset >> swizzle_bits);
    let offset_high = (total_offset & !group_mask) << swizzle_bits;
    let offset_low = total_offset & group_mask;

    Ok((bank << (PIPE_BITS + GROUP_BITS)) | (pipe << GROUP_BITS) | offset_low | offset_high)
}

/// Remapper for Wii U GX2 tiled texture data.
#[derive(Debug)]
pub struct WiiURemapper {
    pub tile_mode: GX2TileMode,
    /// Pipe swizzle seed from the surface registers (one bit).
    pub pipe_swizzle: u32,
    /// Bank swizzle seed from the surface registers (two bits).
    pub bank_swizzle: u32,
}

impl Default for WiiURemapper {
    fn default() -> Self {
        Self {
            tile_mode: GX2TileMode::Tiled2dThin1,
            pipe_swizzle: 0,
            bank_swizzle: 0,
        }
    }
}

impl WiiURemapper {
    pub fn new(tile_mode: GX2TileMode) -> Self {
        Self {
            tile_mode,
            ..Self::default()
        }
    }

    /// Builds a remapper from the raw register values: the tile mode
    /// code and the surface swizzle word holding the pipe bit at bit 8
    /// and the bank bits at bits 9-10.
    pub fn from_registers(tile_mode_code: u32, swizzle: u32) -> Result<Self, RemapError> {
        Ok(Self {
            tile_mode: GX2TileMode::from_code(tile_mode_code)?,
            pipe_swizzle: (swizzle >> 8) & 1,
            bank_swizzle: (swizzle >> 9) & 3,
        })
    }

    fn remap(
        &self,
        src: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
        direction: SwizzleDirection,
    ) -> Result<Vec<u8>, RemapError> {
        if self.tile_mode.is_thick() {
            return Err(RemapError::unsupported(format!(
                "gx2 tile mode {:?} addresses a third texel dimension",
                self.tile_mode
            )));
        }
        let units_w = block.blocks_x(geometry);
        let units_h = block.blocks_y(geometry);
        let unit_len = block.block_byte_size as usize;
        let bits_per_unit = unit_len * 8;
        validate_len(src, units_w * units_h * unit_len)?;

        // Address math assumes a pitch aligned to the tiling footprint.
        let pitch = if self.tile_mode.is_macro_tiled() {
            let macro_pitch = (8 * NUM_BANKS) / self.tile_mode.aspect_ratio();
            units_w.next_multiple_of(macro_pitch)
        } else if self.tile_mode.is_linear() {
            units_w
        } else {
            units_w.next_multiple_of(MICRO_TILE_DIM)
        };
        debug!(
            "wii u remap: mode {:?}, {}x{} units at {} bits, pitch {}",
            self.tile_mode, units_w, units_h, bits_per_unit, pitch
        );

        // Rank the units by their address in the aligned-pitch surface.
        // For aligned surfaces the rank times the unit size is the raw
        // tiled byte offset; narrower surfaces compact to consecutive
        // slots so every unit keeps a home and the remap stays a
        // bijection.
        let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(units_w * units_h);
        for y in 0..units_h {
            for x in 0..units_w {
                let addr = if self.tile_mode.is_linear() {
                    (y * pitch + x) * bits_per_unit / 8
                } else if self.tile_mode.is_macro_tiled() {
                    macro_tiled_address(
                        x,
                        y,
                        bits_per_unit,
                        pitch,
                        self.tile_mode,
                        self.pipe_swizzle as usize,
                        self.bank_swizzle as usize,
                    )?
                } else {
                    micro_tiled_address(x, y, bits_per_unit, pitch)?
                };
                pairs.push((addr, y * units_w + x));
            }
        }
        pairs.sort_unstable();

        let mut out = vec![0u8; src.len()];
        for (slot, &(_, unit)) in pairs.iter().enumerate() {
            let linear = unit * unit_len;
            let tiled = slot * unit_len;
            let (from, to) = match direction {
                SwizzleDirection::ToSwizzled => (linear, tiled),
                SwizzleDirection::ToLinear => (tiled, linear),
            };
            out[to..to + unit_len].copy_from_slice(&src[from..from + unit_len]);
        }
        Ok(out)
    }
}

impl TextureRemapper for WiiURemapper {
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
        Platform::WiiU
    }
}

#[cfg(test)]
#[path = "tests/wiiu_tests.rs"]
mod tests;
