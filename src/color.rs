//! The 16-bit 5-6-5 color sample.
//!
//! Going down to 5-6-5 just keeps the top bits of each 8-bit channel. Going
//! back up has two options:
//! * [Rgb565::to_rgb8] shifts the bits back into place and leaves the low bits
//!   as zero. This is exactly the inverse of the reduction for any channel
//!   value that had zeros in its low bits, so `0xF8` comes back as `0xF8`.
//! * [Rgb565::to_rgb8_replicated] copies the high bits down into the low bits,
//!   so full intensity comes back as `0xFF` instead of `0xF8`.

use bitfrob::u8_replicate_bits;
use bytemuck::{Pod, Zeroable};
use pixel_formats::r8g8b8_Unorm;

/// A packed RGB565 pixel.
///
/// The data is stored as a two-byte array (little-endian) to keep the type's
/// overall alignment at only 1, so that rows of pixel data can be viewed as
/// `[Rgb565]` wherever they fall in the buffer.
///
/// Bits `15..=11` are red, `10..=5` are green, and `4..=0` are blue.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct Rgb565(pub [u8; 2]);
impl Rgb565 {
  pub const BLACK: Self = Self::new(0, 0, 0);
  pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

  /// Reduces 8-bit channels to a 5-6-5 sample, dropping the low bits.
  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    let bits = ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3);
    Self::from_bits(bits)
  }

  /// Reduces a `0x00RRGGBB` value. The top byte is ignored.
  #[inline]
  #[must_use]
  pub const fn from_rgb_u32(rgb: u32) -> Self {
    Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
  }

  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u16) -> Self {
    Self(bits.to_le_bytes())
  }

  #[inline]
  #[must_use]
  pub const fn to_bits(self) -> u16 {
    u16::from_le_bytes(self.0)
  }

  /// The 5 red bits.
  #[inline]
  #[must_use]
  pub const fn r5(self) -> u8 {
    (self.to_bits() >> 11) as u8
  }

  /// The 6 green bits.
  #[inline]
  #[must_use]
  pub const fn g6(self) -> u8 {
    ((self.to_bits() >> 5) & 0b11_1111) as u8
  }

  /// The 5 blue bits.
  #[inline]
  #[must_use]
  pub const fn b5(self) -> u8 {
    (self.to_bits() & 0b1_1111) as u8
  }

  /// Expands to 8-bit channels by shifting, the low bits are left as 0.
  #[inline]
  #[must_use]
  pub const fn to_rgb8(self) -> r8g8b8_Unorm {
    r8g8b8_Unorm { r: self.r5() << 3, g: self.g6() << 2, b: self.b5() << 3 }
  }

  /// Expands to 8-bit channels by bit replication, so the full `0..=255`
  /// range is reached.
  #[inline]
  #[must_use]
  pub fn to_rgb8_replicated(self) -> r8g8b8_Unorm {
    r8g8b8_Unorm {
      r: u8_replicate_bits(5, self.r5()),
      g: u8_replicate_bits(6, self.g6()),
      b: u8_replicate_bits(5, self.b5()),
    }
  }
}
impl core::fmt::Debug for Rgb565 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Rgb565")
      .field("r", &self.r5())
      .field("g", &self.g6())
      .field("b", &self.b5())
      .finish()
  }
}
impl From<r8g8b8_Unorm> for Rgb565 {
  #[inline]
  fn from(c: r8g8b8_Unorm) -> Self {
    Self::new(c.r, c.g, c.b)
  }
}
impl From<[u8; 3]> for Rgb565 {
  #[inline]
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self::new(r, g, b)
  }
}
impl From<Rgb565> for r8g8b8_Unorm {
  #[inline]
  fn from(c: Rgb565) -> Self {
    c.to_rgb8()
  }
}
impl From<Rgb565> for u16 {
  #[inline]
  fn from(c: Rgb565) -> Self {
    c.to_bits()
  }
}
