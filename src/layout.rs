#![forbid(unsafe_code)]

//! Row stride and byte position math for bottom-up 16bpp pixel data.
//!
//! Rows are stored bottom row first, and every row is padded so that its byte
//! length is a multiple of 4.

use crate::{format::PIXEL_DATA_OFFSET, RasterError};

/// Gets the number of bytes in one stored row of a 16bpp image, padding
/// included.
///
/// Each pixel is 2 bytes, so an even pixel count is always a multiple of 4
/// bytes already. Odd widths get one extra (padding) pixel.
///
/// This shortcut only works because the depth is exactly 16 bits. Any other
/// depth needs the general `ceil(width * bytes_per_pixel / 4) * 4` rule.
///
/// ## Panics
/// * If the result doesn't fit in a `u32` (`width` of `0x7FFF_FFFF` or more).
#[inline]
#[must_use]
pub const fn row_stride(width: u32) -> u32 {
  (width + (width & 1)) * 2
}

/// As [row_stride], but gives an error instead of overflowing.
#[inline]
pub const fn checked_row_stride(width: u32) -> Result<u32, RasterError> {
  let even_width = match width.checked_add(width & 1) {
    Some(w) => w,
    None => return Err(RasterError::CheckedMath),
  };
  match even_width.checked_mul(2) {
    Some(stride) => Ok(stride),
    None => Err(RasterError::CheckedMath),
  }
}

/// Converts an on-screen `(x,y)` position into the byte index of that pixel
/// within the whole buffer (header included).
///
/// `y == 0` is the top row on screen, which is the *last* row in memory.
///
/// The position must already be known to be in bounds.
#[inline]
#[must_use]
pub(crate) const fn pixel_byte_index(x: u32, y: u32, width: u32, height: u32) -> usize {
  let stride = row_stride(width) as usize;
  let stored_row = (height - 1 - y) as usize;
  PIXEL_DATA_OFFSET + stride * stored_row + (x as usize) * 2
}
