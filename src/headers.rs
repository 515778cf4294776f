//! The 70 header bytes at the front of every buffer.
//!
//! ```text
//! offset 0x00  2 bytes  tag "BM"
//! offset 0x02  4 bytes  total file size
//! offset 0x06  2 bytes  reserved
//! offset 0x08  2 bytes  reserved
//! offset 0x0A  4 bytes  pixel data offset (70)
//! offset 0x0E  4 bytes  info header size (56)
//! offset 0x12  4 bytes  width
//! offset 0x16  4 bytes  height
//! offset 0x1A  2 bytes  color planes (1)
//! offset 0x1C  2 bytes  bits per pixel (16)
//! offset 0x1E  4 bytes  compression (3)
//! offset 0x22  4 bytes  image data size
//! offset 0x26  4 bytes  x pixels per meter (0)
//! offset 0x2A  4 bytes  y pixels per meter (0)
//! offset 0x2E  4 bytes  colors used (0)
//! offset 0x32  4 bytes  important colors (0)
//! offset 0x36  4 bytes  red mask
//! offset 0x3A  4 bytes  green mask
//! offset 0x3E  4 bytes  blue mask
//! offset 0x42  4 bytes  alpha mask (0)
//! ```
//!
//! All multi-byte values are little-endian.

use crate::{
  format::{PIXEL_DATA_OFFSET, RGB565},
  layout::checked_row_stride,
  parser_helpers::try_pull_pod,
  RasterError,
};
use bytemuck::bytes_of;
use core::mem::size_of;
use pack1::*;

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapFileHeader {
  pub ty: [u8; 2],
  pub file_size: U32LE,
  pub reserved1: U16LE,
  pub reserved2: U16LE,
  pub bitmap_offset: U32LE,
}

/// The 40 byte info header with the four bit masks right after it, which is
/// laid out just like a `BITMAPV3INFOHEADER`.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapV3InfoHeader {
  pub size: U32LE,
  pub width: I32LE,
  pub height: I32LE,
  pub planes: U16LE,
  pub bits_per_pixel: U16LE,
  pub compression: U32LE,
  pub image_size: U32LE,
  pub x_pixels_per_meter: I32LE,
  pub y_pixels_per_meter: I32LE,
  pub colors_used: U32LE,
  pub important_colors: U32LE,
  pub r_mask: U32LE,
  pub g_mask: U32LE,
  pub b_mask: U32LE,
  pub a_mask: U32LE,
}

const _: () = assert!(size_of::<BitmapFileHeader>() == 14);
const _: () = assert!(size_of::<BitmapV3InfoHeader>() == 56);
const _: () = assert!(size_of::<BitmapFileHeader>() + size_of::<BitmapV3InfoHeader>() == PIXEL_DATA_OFFSET);

impl BitmapV3InfoHeader {
  /// If all of the fields that never change match the RGB565 format.
  #[inline]
  #[must_use]
  fn is_rgb565(&self) -> bool {
    self.size.get() == RGB565.info_header_size
      && self.planes.get() == RGB565.color_planes
      && self.bits_per_pixel.get() == RGB565.bits_per_pixel
      && self.compression.get() == RGB565.compression
      && self.r_mask.get() == RGB565.r_mask
      && self.g_mask.get() == RGB565.g_mask
      && self.b_mask.get() == RGB565.b_mask
      && self.a_mask.get() == RGB565.a_mask
  }
}

/// The geometry of an RGB565 bitmap, along with the sizes that follow from it.
///
/// The other header fields are fixed by [RGB565](crate::format::RGB565), so
/// this is all the information there is in a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bmp565Header {
  /// Width in pixels.
  pub width: u32,
  /// Height in pixels.
  pub height: u32,
  /// Bytes of pixel data, row padding included.
  pub image_size: u32,
  /// Bytes of header plus pixel data.
  pub file_size: u32,
}
impl Bmp565Header {
  /// Computes the header for an image of the given size.
  ///
  /// ## Failure
  /// * Either dimension is 0.
  /// * Either dimension doesn't fit in an `i32`, or the total size doesn't fit
  ///   in a `u32`.
  #[inline]
  pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
    if width == 0 || height == 0 {
      return Err(RasterError::WidthOrHeightZero);
    }
    i32::try_from(width)?;
    i32::try_from(height)?;
    let image_size =
      checked_row_stride(width)?.checked_mul(height).ok_or(RasterError::CheckedMath)?;
    let file_size =
      image_size.checked_add(RGB565.pixel_data_offset()).ok_or(RasterError::CheckedMath)?;
    Ok(Self { width, height, image_size, file_size })
  }

  /// The row stride in bytes.
  #[inline]
  #[must_use]
  pub const fn row_stride(&self) -> u32 {
    crate::row_stride(self.width)
  }

  /// [file_size](Self::file_size) as a `usize`.
  #[inline]
  #[must_use]
  pub const fn file_len(&self) -> usize {
    self.file_size as usize
  }

  /// Encodes the header into its 70 bytes.
  #[must_use]
  pub fn to_bytes(&self) -> [u8; PIXEL_DATA_OFFSET] {
    let file_header = BitmapFileHeader {
      ty: RGB565.tag,
      file_size: U32LE::new(self.file_size),
      reserved1: U16LE::new(0),
      reserved2: U16LE::new(0),
      bitmap_offset: U32LE::new(RGB565.pixel_data_offset()),
    };
    // `new` already limited both of these to `i32::MAX`.
    let info_header = BitmapV3InfoHeader {
      size: U32LE::new(RGB565.info_header_size),
      width: I32LE::new(self.width as i32),
      height: I32LE::new(self.height as i32),
      planes: U16LE::new(RGB565.color_planes),
      bits_per_pixel: U16LE::new(RGB565.bits_per_pixel),
      compression: U32LE::new(RGB565.compression),
      image_size: U32LE::new(self.image_size),
      x_pixels_per_meter: I32LE::new(0),
      y_pixels_per_meter: I32LE::new(0),
      colors_used: U32LE::new(0),
      important_colors: U32LE::new(0),
      r_mask: U32LE::new(RGB565.r_mask),
      g_mask: U32LE::new(RGB565.g_mask),
      b_mask: U32LE::new(RGB565.b_mask),
      a_mask: U32LE::new(RGB565.a_mask),
    };
    let mut a = [0; PIXEL_DATA_OFFSET];
    let (fh, ih) = a.split_at_mut(size_of::<BitmapFileHeader>());
    fh.copy_from_slice(bytes_of(&file_header));
    ih.copy_from_slice(bytes_of(&info_header));
    a
  }

  /// Decodes and checks the header at the start of the bytes.
  ///
  /// This only looks at the header, it doesn't check that the bytes are long
  /// enough to hold the pixel data.
  ///
  /// ## Failure
  /// * Fewer than 70 bytes.
  /// * Any fixed field isn't the RGB565 value, or the image is top-down.
  /// * The declared sizes don't agree with the declared width and height.
  pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, RasterError> {
    let (file_header, rest) = try_pull_pod::<BitmapFileHeader>(bytes)?;
    let (info_header, _rest) = try_pull_pod::<BitmapV3InfoHeader>(rest)?;
    if file_header.ty != RGB565.tag
      || file_header.bitmap_offset.get() != RGB565.pixel_data_offset()
      || !info_header.is_rgb565()
    {
      log::debug!("rejected header: {file_header:?} {info_header:?}");
      return Err(RasterError::NotABmp565);
    }
    // negative height means a top-down image, which we don't make.
    let width = u32::try_from(info_header.width.get()).map_err(|_| RasterError::NotABmp565)?;
    let height = u32::try_from(info_header.height.get()).map_err(|_| RasterError::NotABmp565)?;
    let header = Self::new(width, height)?;
    if header.image_size != info_header.image_size.get()
      || header.file_size != file_header.file_size.get()
    {
      log::debug!(
        "rejected header sizes: expected {header:?}, found image {} and file {}",
        info_header.image_size.get(),
        file_header.file_size.get()
      );
      return Err(RasterError::NotABmp565);
    }
    Ok(header)
  }
}
