use crate::error::RemapError;
use crate::geometry::{BlockShape, ImageGeometry, SwizzleDirection};
use crate::platform::Platform;

/// Trait for bidirectional linear <-> hardware-layout remapping.
///
/// Implementors relocate bytes between a row-major buffer and the
/// platform's native swizzled/tiled layout. The transform never changes
/// byte values, only positions; it allocates exactly one output buffer
/// of the input's length and never writes through the input.
///
/// Every implementation is a pure function of its inputs: no shared
/// state, no I/O, no randomness. Calls on independent buffers may run
/// concurrently without locking.
pub trait TextureRemapper: Send + Sync {
    /// Reorder row-major `linear` data into the platform's native layout.
    ///
    /// # Arguments
    /// * `linear` - Row-major block data; length must equal the
    ///   geometry/block product
    /// * `geometry` - True (unpadded) image dimensions and bit depth
    /// * `block` - The atomic unit moved by the transform
    ///
    /// # Returns
    /// * `Ok(bytes)` - A new buffer of identical length in swizzled order
    /// * `Err(RemapError)` - Bad geometry, wrong buffer length, or an
    ///   unsupported platform parameter
    fn swizzle(
        &self,
        linear: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError>;

    /// Reorder swizzled data back into row-major order.
    ///
    /// Inverse of [`swizzle`](TextureRemapper::swizzle) for every
    /// supported geometry.
    fn unswizzle(
        &self,
        swizzled: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
    ) -> Result<Vec<u8>, RemapError>;

    /// Dispatch on direction. `ToSwizzled` runs
    /// [`swizzle`](TextureRemapper::swizzle), `ToLinear` runs
    /// [`unswizzle`](TextureRemapper::unswizzle).
    fn remap(
        &self,
        data: &[u8],
        geometry: &ImageGeometry,
        block: &BlockShape,
        direction: SwizzleDirection,
    ) -> Result<Vec<u8>, RemapError> {
        match direction {
            SwizzleDirection::ToSwizzled => self.swizzle(data, geometry, block),
            SwizzleDirection::ToLinear => self.unswizzle(data, geometry, block),
        }
    }

    /// Returns the platform this remapper handles.
    fn platform(&self) -> Platform;

    /// Returns the full name of the platform this remapper handles.
    fn platform_name(&self) -> &'static str {
        self.platform().display_name()
    }
}
