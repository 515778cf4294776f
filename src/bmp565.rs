#![forbid(unsafe_code)]

//! The bitmap buffer itself.
//!
//! A [Bmp565] is a thin wrapper over bytes that hold a complete RGB565 bitmap
//! file: the 70 byte header followed by the pixel data. Nothing is cached on
//! the side, every accessor re-reads the header fields it needs, so the header
//! is always the one source of truth for the image geometry.
//!
//! Any byte storage works. Use `Vec<u8>` (see [OwnedBmp565]) when you have an
//! allocator, or a static `[u8; N]` / `&mut [u8]` when you don't.
//!
//! A buffer has one owner at a time and no interior locking, so drawing from
//! more than one thread needs the caller to hand out exclusive access (which
//! `&mut self` already forces).

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use bytemuck::{cast_slice, cast_slice_mut, pod_read_unaligned};
use core::mem::size_of;
use pixel_formats::r8g8b8_Unorm;

use crate::{
  format::PIXEL_DATA_OFFSET,
  headers::{BitmapFileHeader, BitmapV3InfoHeader, Bmp565Header},
  layout::{pixel_byte_index, row_stride},
  RasterError, Rgb565,
};

const INFO_HEADER_START: usize = size_of::<BitmapFileHeader>();

/// A 16bpp RGB565 bitmap living inside of some byte storage.
#[derive(Clone)]
pub struct Bmp565<B> {
  bytes: B,
}

/// A bitmap that owns its heap allocation.
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub type OwnedBmp565 = Bmp565<Vec<u8>>;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl Bmp565<Vec<u8>> {
  /// Allocates a new, all black, bitmap.
  ///
  /// ## Failure
  /// * Either dimension is 0.
  /// * The image is too big for the header's size fields.
  /// * Allocation failure.
  pub fn try_new(width: u32, height: u32) -> Result<Self, RasterError> {
    let header = Bmp565Header::new(width, height)?;
    let mut bytes: Vec<u8> = Vec::new();
    bytes.try_reserve_exact(header.file_len()).map_err(|e| {
      log::debug!("couldn't allocate {} bytes for a {width}x{height} bitmap", header.file_len());
      RasterError::from(e)
    })?;
    bytes.resize(header.file_len(), 0);
    bytes[..PIXEL_DATA_OFFSET].copy_from_slice(&header.to_bytes());
    log::debug!("created {width}x{height} bitmap of {} bytes", header.file_size);
    Ok(Self { bytes })
  }
}

impl<B: AsRef<[u8]>> Bmp565<B> {
  /// Wraps bytes that already hold an RGB565 bitmap.
  ///
  /// The bytes can be longer than the bitmap, anything past the declared file
  /// size is ignored.
  ///
  /// ## Failure
  /// * The header isn't an RGB565 header (see [Bmp565Header::try_from_bytes]).
  /// * There's fewer bytes than the declared file size.
  #[inline]
  pub fn try_from_bytes(bytes: B) -> Result<Self, RasterError> {
    let header = Bmp565Header::try_from_bytes(bytes.as_ref())?;
    if bytes.as_ref().len() < header.file_len() {
      return Err(RasterError::InsufficientBytes);
    }
    Ok(Self { bytes })
  }

  /// Unwraps the byte storage.
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> B {
    self.bytes
  }

  #[inline]
  #[must_use]
  fn info_header(&self) -> BitmapV3InfoHeader {
    pod_read_unaligned(&self.bytes.as_ref()[INFO_HEADER_START..PIXEL_DATA_OFFSET])
  }

  /// Width in pixels, as declared in the header.
  #[inline]
  #[must_use]
  pub fn width(&self) -> u32 {
    self.info_header().width.get().unsigned_abs()
  }

  /// Height in pixels, as declared in the header.
  #[inline]
  #[must_use]
  pub fn height(&self) -> u32 {
    self.info_header().height.get().unsigned_abs()
  }

  /// The total size of the file, header included.
  #[inline]
  #[must_use]
  pub fn file_size(&self) -> u32 {
    let file_header: BitmapFileHeader =
      pod_read_unaligned(&self.bytes.as_ref()[..INFO_HEADER_START]);
    file_header.file_size.get()
  }

  /// The size of the pixel data, row padding included.
  #[inline]
  #[must_use]
  pub fn image_size(&self) -> u32 {
    self.info_header().image_size.get()
  }

  /// Bytes per stored row.
  #[inline]
  #[must_use]
  pub fn row_stride(&self) -> u32 {
    row_stride(self.width())
  }

  /// Re-reads the header.
  #[inline]
  #[must_use]
  pub fn header(&self) -> Bmp565Header {
    Bmp565Header {
      width: self.width(),
      height: self.height(),
      image_size: self.image_size(),
      file_size: self.file_size(),
    }
  }

  /// The complete file: header and then pixel data.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes.as_ref()[..self.file_size() as usize]
  }

  /// Just the pixel data, bottom row first, rows padded.
  ///
  /// Along with [width](Self::width) and [height](Self::height) this is
  /// everything a display needs to show the image.
  #[inline]
  #[must_use]
  pub fn pixel_data(&self) -> &[u8] {
    let end = PIXEL_DATA_OFFSET + self.image_size() as usize;
    &self.bytes.as_ref()[PIXEL_DATA_OFFSET..end]
  }

  /// Iterates the rows in screen order (top row first).
  ///
  /// Each row is exactly `width` pixels, the padding is skipped.
  #[inline]
  pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Rgb565]> + '_ {
    let row_len = self.width() as usize * size_of::<Rgb565>();
    self
      .pixel_data()
      .chunks_exact(self.row_stride() as usize)
      .rev()
      .map(move |row| cast_slice::<u8, Rgb565>(&row[..row_len]))
  }

  /// If the `(x,y)` position is within the image.
  #[inline]
  #[must_use]
  pub fn contains(&self, x: u32, y: u32) -> bool {
    x < self.width() && y < self.height()
  }

  /// Gets the packed pixel at the position, or `None` if the position is out
  /// of bounds.
  #[inline]
  #[must_use]
  pub fn get_pixel_565(&self, x: u32, y: u32) -> Option<Rgb565> {
    let (width, height) = (self.width(), self.height());
    if x < width && y < height {
      let i = pixel_byte_index(x, y, width, height);
      let bytes = self.bytes.as_ref();
      Some(Rgb565([bytes[i], bytes[i + 1]]))
    } else {
      None
    }
  }

  /// Gets the pixel at the position with each channel shifted back up to 8
  /// bits (see [Rgb565::to_rgb8]), or `None` if the position is out of bounds.
  #[inline]
  #[must_use]
  pub fn get_pixel(&self, x: u32, y: u32) -> Option<r8g8b8_Unorm> {
    self.get_pixel_565(x, y).map(Rgb565::to_rgb8)
  }

  /// Duplicates the bitmap into a new allocation.
  ///
  /// Only the declared file bytes are copied, so the clone is exactly
  /// [file_size](Self::file_size) long.
  #[cfg(feature = "alloc")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
  pub fn try_clone(&self) -> Result<Bmp565<Vec<u8>>, RasterError> {
    let src = self.as_bytes();
    let mut bytes: Vec<u8> = Vec::new();
    bytes.try_reserve_exact(src.len())?;
    bytes.extend_from_slice(src);
    Ok(Bmp565 { bytes })
  }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Bmp565<B> {
  /// Writes a new, all black, bitmap into the storage given.
  ///
  /// This is the allocation free way to make a bitmap. The storage must be at
  /// least `70 + row_stride(width) * height` bytes, any extra bytes are left
  /// alone.
  ///
  /// ## Failure
  /// * Either dimension is 0.
  /// * The image is too big for the header's size fields.
  /// * The storage is too small.
  pub fn try_init(mut bytes: B, width: u32, height: u32) -> Result<Self, RasterError> {
    let header = Bmp565Header::new(width, height)?;
    let buf = bytes.as_mut();
    if buf.len() < header.file_len() {
      return Err(RasterError::InsufficientBytes);
    }
    let (head, pixels) = buf[..header.file_len()].split_at_mut(PIXEL_DATA_OFFSET);
    head.copy_from_slice(&header.to_bytes());
    pixels.fill(0);
    log::debug!("initialized {width}x{height} bitmap of {} bytes", header.file_size);
    Ok(Self { bytes })
  }

  #[inline]
  #[must_use]
  fn pixel_data_mut(&mut self) -> &mut [u8] {
    let end = PIXEL_DATA_OFFSET + self.image_size() as usize;
    &mut self.bytes.as_mut()[PIXEL_DATA_OFFSET..end]
  }

  /// Decodes the geometry once and hands back the pixel data cut into rows.
  #[inline]
  #[must_use]
  pub(crate) fn canvas_mut(&mut self) -> Canvas<'_> {
    let (width, height) = (self.width(), self.height());
    Canvas { width, height, stride: row_stride(width) as usize, pixels: self.pixel_data_mut() }
  }

  /// Writes one pixel.
  ///
  /// Gives `false` and writes nothing if the position is out of bounds.
  #[inline]
  pub fn set_pixel(&mut self, x: u32, y: u32, color: impl Into<Rgb565>) -> bool {
    let mut canvas = self.canvas_mut();
    if x < canvas.width && y < canvas.height {
      canvas.row(y)[x as usize] = color.into();
      true
    } else {
      log::trace!("set_pixel({x}, {y}) is out of bounds");
      false
    }
  }

  /// Overwrites all of this bitmap's pixel data with the pixel data of `src`.
  ///
  /// ## Failure
  /// * The two bitmaps have a different width or height. Nothing is written.
  pub fn copy_pixels_from<C: AsRef<[u8]>>(&mut self, src: &Bmp565<C>) -> Result<(), RasterError> {
    if self.width() != src.width() || self.height() != src.height() {
      log::debug!(
        "can't copy a {}x{} bitmap into a {}x{} bitmap",
        src.width(),
        src.height(),
        self.width(),
        self.height()
      );
      return Err(RasterError::GeometryMismatch);
    }
    self.pixel_data_mut().copy_from_slice(src.pixel_data());
    Ok(())
  }
}

/// The pixel rows of a bitmap along with the geometry that was read out of its
/// header, so that a single drawing call only decodes the header once.
pub(crate) struct Canvas<'a> {
  pub width: u32,
  pub height: u32,
  stride: usize,
  pixels: &'a mut [u8],
}
impl Canvas<'_> {
  /// The on-screen row `y` as pixels, padding excluded.
  ///
  /// `y` must be in bounds.
  #[inline]
  #[must_use]
  pub fn row(&mut self, y: u32) -> &mut [Rgb565] {
    let start = self.stride * (self.height - 1 - y) as usize;
    let row_len = self.width as usize * size_of::<Rgb565>();
    cast_slice_mut(&mut self.pixels[start..start + row_len])
  }

  #[inline]
  #[must_use]
  pub fn contains_i32(&self, x: i32, y: i32) -> bool {
    match (u32::try_from(x), u32::try_from(y)) {
      (Ok(x), Ok(y)) => x < self.width && y < self.height,
      _ => false,
    }
  }
}

impl<B: AsRef<[u8]>> core::fmt::Debug for Bmp565<B> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Bmp565")
      .field("width", &self.width())
      .field("height", &self.height())
      .field("file_size", &self.file_size())
      .finish()
  }
}
