use core::num::TryFromIntError;

/// An error from the `raster565` crate.
///
/// Drawing outside of the image is *not* an error. Those calls just report
/// `false` and leave the buffer alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum RasterError {
  /// The allocator couldn't give us enough space.
  Alloc,

  /// The requested (or declared) width and/or height of the image is 0.
  WidthOrHeightZero,

  /// A checked math operation failed.
  ///
  /// Usually this means the image is so big that its byte size doesn't fit in
  /// the 32-bit size fields of the header.
  CheckedMath,

  /// The byte buffer is shorter than the header says the image is.
  InsufficientBytes,

  /// The header bytes don't describe a bottom-up, 16bpp, 5-6-5 bitfield BMP.
  NotABmp565,

  /// Two buffers were expected to have the same width and height, but don't.
  GeometryMismatch,
}
impl core::fmt::Display for RasterError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let s = match self {
      Self::Alloc => "allocation failed",
      Self::WidthOrHeightZero => "width or height is zero",
      Self::CheckedMath => "image size overflows the header fields",
      Self::InsufficientBytes => "buffer is smaller than the declared image",
      Self::NotABmp565 => "bytes are not an RGB565 bitfield bitmap",
      Self::GeometryMismatch => "images have different dimensions",
    };
    f.write_str(s)
  }
}
#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for RasterError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
impl From<TryFromIntError> for RasterError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::CheckedMath
  }
}
