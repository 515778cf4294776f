//! The fixed format constants of an RGB565 bitmap.
//!
//! Every buffer this crate makes has the exact same header shape, only the
//! geometry fields change. All of the "magic numbers" of that shape live here.

/// Compression tag value for "uncompressed, channels given by bit masks".
pub const BI_BITFIELDS: u32 = 3;

/// Describes the fixed parts of the bitmap header that this crate writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb565Format {
  /// The two tag bytes at the very start of the file.
  pub tag: [u8; 2],
  pub file_header_size: u32,
  /// The `size` field of the info header. This counts the 40 byte info header
  /// *and* the 16 bytes of masks that follow it.
  pub info_header_size: u32,
  pub color_planes: u16,
  pub bits_per_pixel: u16,
  pub compression: u32,
  pub r_mask: u32,
  pub g_mask: u32,
  pub b_mask: u32,
  pub a_mask: u32,
}
impl Rgb565Format {
  /// Byte index of the first pixel, which is also the full header length.
  #[inline]
  #[must_use]
  pub const fn pixel_data_offset(&self) -> u32 {
    self.file_header_size + self.info_header_size
  }

  /// Bytes used by a single pixel.
  #[inline]
  #[must_use]
  pub const fn bytes_per_pixel(&self) -> u32 {
    self.bits_per_pixel as u32 / 8
  }
}

/// The one and only format this crate produces.
pub const RGB565: Rgb565Format = Rgb565Format {
  tag: *b"BM",
  file_header_size: 14,
  info_header_size: 40 + 16,
  color_planes: 1,
  bits_per_pixel: 16,
  compression: BI_BITFIELDS,
  r_mask: 0xF800,
  g_mask: 0x07E0,
  b_mask: 0x001F,
  a_mask: 0,
};

/// Byte index of the first pixel in every buffer (70).
pub const PIXEL_DATA_OFFSET: usize = RGB565.pixel_data_offset() as usize;
