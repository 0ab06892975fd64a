//! Turning stored `[b, g, r]` bytes into HTML color codes.

use core::fmt;

use pixel_formats::r8g8b8a8_Srgb;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A color as a 6 digit `rrggbb` hex code, without the leading `#`.
///
/// Digits are lowercase and every channel is always two digits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorCode([u8; 6]);

impl ColorCode {
  /// Builds the code from red, green, and blue channel values.
  #[inline]
  #[must_use]
  pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
    let mut a = [0; 6];
    let channels = [r, g, b];
    let mut i = 0;
    while i < 3 {
      a[i * 2] = HEX_DIGITS[(channels[i] >> 4) as usize];
      a[i * 2 + 1] = HEX_DIGITS[(channels[i] & 0xF) as usize];
      i += 1;
    }
    Self(a)
  }

  /// The six hex digits.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 6] {
    &self.0
  }

  /// The six hex digits as a string.
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    // all bytes come from HEX_DIGITS
    core::str::from_utf8(&self.0).unwrap_or_default()
  }
}

impl From<r8g8b8a8_Srgb> for ColorCode {
  /// Alpha is dropped.
  #[inline]
  fn from(c: r8g8b8a8_Srgb) -> Self {
    Self::from_rgb(c.r, c.g, c.b)
  }
}

impl fmt::Debug for ColorCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ColorCode(\"{}\")", self.as_str())
  }
}
impl fmt::Display for ColorCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Stored `[b, g, r]` bytes as an opaque sRGB color.
#[inline]
#[must_use]
pub const fn bgr_to_srgb([b, g, r]: [u8; 3]) -> r8g8b8a8_Srgb {
  r8g8b8a8_Srgb { r, g, b, a: 0xFF }
}

/// Decodes one stored `[b, g, r]` pixel into its color code.
#[inline]
#[must_use]
pub fn decode_bgr(bgr: [u8; 3]) -> ColorCode {
  ColorCode::from(bgr_to_srgb(bgr))
}

/// Decodes the pixel at a stored `row` and `col` of the buffer into its color
/// code.
///
/// ## Failure
/// * [`PixelOutOfBounds`](crate::BmpError::PixelOutOfBounds) if the position
///   is outside the image.
#[cfg(feature = "alloc")]
#[inline]
pub fn decode_pixel(
  buffer: &crate::PixelBuffer, row: u32, col: u32,
) -> Result<ColorCode, crate::BmpError> {
  buffer.bgr(row, col).map(decode_bgr)
}
