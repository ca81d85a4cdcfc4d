use serde::{Deserialize, Serialize};

use crate::error::RemapError;

/// Logical dimensions of a texture and the bit width of one pixel.
///
/// Width and height are the caller's true dimensions. They do not need
/// to be multiples of any hardware tile size — remappers pad internally
/// and crop back to these dimensions on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageGeometry {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
}

impl ImageGeometry {
    pub fn new(width: u32, height: u32, bits_per_pixel: u32) -> Result<Self, RemapError> {
        if width == 0 || height == 0 {
            return Err(RemapError::invalid_geometry(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if bits_per_pixel == 0 {
            return Err(RemapError::invalid_geometry(
                "bits per pixel must be positive",
            ));
        }
        Ok(Self {
            width,
            height,
            bits_per_pixel,
        })
    }

    /// Total byte length of a linear buffer holding this image.
    pub fn byte_len(&self) -> usize {
        (self.width as usize * self.height as usize * self.bits_per_pixel as usize) / 8
    }
}

/// The atomic unit a remapper moves: 1x1 pixels for linear formats,
/// 4x4 (or similar) for compressed-block formats, platform tile units
/// for the page/GOB-based layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockShape {
    pub block_width: u32,
    pub block_height: u32,
    pub block_byte_size: u32,
}

impl BlockShape {
    pub fn new(block_width: u32, block_height: u32, block_byte_size: u32) -> Result<Self, RemapError> {
        if block_width == 0 || block_height == 0 || block_byte_size == 0 {
            return Err(RemapError::invalid_geometry(format!(
                "block shape must be positive, got {}x{} ({} bytes)",
                block_width, block_height, block_byte_size
            )));
        }
        Ok(Self {
            block_width,
            block_height,
            block_byte_size,
        })
    }

    /// 1x1 block of `bytes` bytes — an uncompressed pixel format.
    pub fn pixels(bytes: u32) -> Self {
        Self {
            block_width: 1,
            block_height: 1,
            block_byte_size: bytes,
        }
    }

    /// A compressed block covering `width`x`height` pixels in `bytes` bytes
    /// (e.g. 4x4/8 for BC1, 4x4/16 for BC3/BC7).
    pub fn compressed(width: u32, height: u32, bytes: u32) -> Self {
        Self {
            block_width: width,
            block_height: height,
            block_byte_size: bytes,
        }
    }

    /// Number of blocks across the image, rounding partial blocks up.
    pub fn blocks_x(&self, geometry: &ImageGeometry) -> usize {
        (geometry.width as usize).div_ceil(self.block_width as usize)
    }

    /// Number of blocks down the image, rounding partial blocks up.
    pub fn blocks_y(&self, geometry: &ImageGeometry) -> usize {
        (geometry.height as usize).div_ceil(self.block_height as usize)
    }

    /// Expected buffer length for this geometry in block units.
    pub fn byte_len(&self, geometry: &ImageGeometry) -> usize {
        self.blocks_x(geometry) * self.blocks_y(geometry) * self.block_byte_size as usize
    }
}

/// Which way a remap runs. Every remapper is symmetric:
/// `remap(remap(data, ToSwizzled), ToLinear) == data` for any supported
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwizzleDirection {
    /// Row-major data in, hardware-native layout out.
    ToSwizzled,
    /// Hardware-native layout in, row-major data out.
    ToLinear,
}

/// Check a caller buffer against the expected length for the transform.
pub fn validate_len(buf: &[u8], expected: usize) -> Result<(), RemapError> {
    if buf.len() != expected {
        return Err(RemapError::size_mismatch(expected, buf.len()));
    }
    Ok(())
}
