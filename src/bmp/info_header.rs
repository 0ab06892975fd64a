use super::*;

/// The info header layouts this crate can read.
///
/// The discriminant is the header's size in bytes, which is also the first
/// `u32` of the header itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BmpHeaderVariant {
  /// `BITMAPCOREHEADER`, Windows 2.0 and OS/2 1.x. Dimensions are `u16`.
  Core = 12,

  /// `BITMAPINFOHEADER`, Windows 3.1 or later. The common case.
  Base = 40,

  /// `BITMAPV4HEADER`. Adds color masks and colorspace info after the base
  /// fields, none of which matter here.
  V4 = 108,

  /// `BITMAPV5HEADER`. Adds rendering intent and ICC profile info after the V4
  /// fields, none of which matter here.
  V5 = 124,
}
impl BmpHeaderVariant {
  /// The header size in bytes.
  #[inline]
  #[must_use]
  pub const fn byte_len(self) -> usize {
    self as usize
  }
}
impl TryFrom<u32> for BmpHeaderVariant {
  type Error = BmpError;
  #[inline]
  fn try_from(size: u32) -> Result<Self, Self::Error> {
    Ok(match size {
      12 => Self::Core,
      40 => Self::Base,
      108 => Self::V4,
      124 => Self::V5,
      _ => return Err(BmpError::UnsupportedHeaderSize(size)),
    })
  }
}

/// Various possible compression styles for Bmp files.
///
/// Only [`RgbNoCompression`](BmpCompression::RgbNoCompression) can be
/// converted, the rest are just named so that they show up nicely in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BmpCompression {
  /// RGB, No compression.
  RgbNoCompression = 0,

  /// RGB, Run-length encoded, 8bpp
  RgbRLE8 = 1,

  /// RGB, Run-length encoded, 4bpp
  RgbRLE4 = 2,

  /// Bitmasks locate each channel (or Huffman 1D on OS/2).
  Bitfields = 3,

  /// A jpeg image (or RLE24 on OS/2).
  Jpeg = 4,

  /// A png image.
  Png = 5,

  /// Bitmasks locate each channel, including alpha.
  AlphaBitfields = 6,

  /// CMYK, No compression.
  CmykNoCompression = 11,

  /// CMYK, Run-length encoded, 8bpp
  CmykRLE8 = 12,

  /// CMYK, Run-length encoded, 4bpp
  CmykRLE4 = 13,
}
impl TryFrom<u32> for BmpCompression {
  type Error = BmpError;
  #[inline]
  fn try_from(value: u32) -> Result<Self, Self::Error> {
    use BmpCompression::*;
    Ok(match value {
      0 => RgbNoCompression,
      1 => RgbRLE8,
      2 => RgbRLE4,
      3 => Bitfields,
      4 => Jpeg,
      5 => Png,
      6 => AlphaBitfields,
      11 => CmykNoCompression,
      12 => CmykRLE8,
      13 => CmykRLE4,
      _ => return Err(BmpError::UnsupportedCompression(value)),
    })
  }
}
impl From<BmpCompression> for u32 {
  #[inline]
  fn from(c: BmpCompression) -> Self {
    c as u32
  }
}

/// The info header, normalized across all the supported layouts.
///
/// A header returned by [`try_from_bytes`](BmpInfoHeader::try_from_bytes) has
/// been validated: it's a single plane of uncompressed 24bpp pixels with a
/// non-negative width. The fields are public, so a header built by hand
/// carries no such promise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BmpInfoHeader {
  /// Which layout the file used.
  pub variant: BmpHeaderVariant,

  /// Image pixel width. Never negative after validation.
  pub width: i32,

  /// Image pixel height.
  ///
  /// * A positive height indicates that the origin is the **bottom** left.
  /// * A negative height indicates that the image origin is the **top** left.
  pub height: i32,

  /// 1 after validation.
  pub planes: u16,

  /// 24 after validation.
  pub bits_per_pixel: u16,

  /// [`BmpCompression::RgbNoCompression`] after validation.
  pub compression: BmpCompression,
}

/// The fields we read before anything is checked.
struct RawInfoFields {
  width: i32,
  height: i32,
  planes: u16,
  bits_per_pixel: u16,
  compression: u32,
}
impl RawInfoFields {
  fn from_core(a: &[u8]) -> Result<Self, BmpError> {
    Ok(Self {
      width: i32::from(u16_le_at(a, 4)?),
      height: i32::from(u16_le_at(a, 6)?),
      planes: u16_le_at(a, 8)?,
      bits_per_pixel: u16_le_at(a, 10)?,
      compression: u32::from(BmpCompression::RgbNoCompression),
    })
  }

  /// The 40 byte prefix shared by the base, V4, and V5 layouts.
  fn from_info_prefix(a: &[u8]) -> Result<Self, BmpError> {
    Ok(Self {
      width: i32_le_at(a, 4)?,
      height: i32_le_at(a, 8)?,
      planes: u16_le_at(a, 12)?,
      bits_per_pixel: u16_le_at(a, 14)?,
      compression: u32_le_at(a, 16)?,
      // image size, resolution, and palette counts are ignored
    })
  }
}

impl BmpInfoHeader {
  /// Parses and validates the info header, returning it and the bytes after
  /// it.
  ///
  /// The size field is peeked first to pick the layout, then the whole layout
  /// is split off. Bytes past the 40 byte common prefix of the larger layouts
  /// are discarded.
  ///
  /// ## Failure
  /// * [`UnsupportedHeaderSize`](BmpError::UnsupportedHeaderSize) for any size
  ///   other than 12, 40, 108, or 124.
  /// * [`InsufficientBytes`](BmpError::InsufficientBytes) if the layout is
  ///   cut short.
  /// * [`UnsupportedPlanes`](BmpError::UnsupportedPlanes),
  ///   [`UnsupportedBitDepth`](BmpError::UnsupportedBitDepth), and
  ///   [`UnsupportedCompression`](BmpError::UnsupportedCompression), checked
  ///   in that order.
  /// * [`IllegalDimensions`](BmpError::IllegalDimensions) for a negative width.
  pub fn try_from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), BmpError> {
    let variant = BmpHeaderVariant::try_from(u32_le_at(bytes, 0)?)?;
    let len = variant.byte_len();
    let (a, rest) = match bytes.get(..len) {
      Some(a) => (a, &bytes[len..]),
      None => return Err(BmpError::InsufficientBytes),
    };
    let raw = match variant {
      BmpHeaderVariant::Core => RawInfoFields::from_core(a)?,
      BmpHeaderVariant::Base | BmpHeaderVariant::V4 | BmpHeaderVariant::V5 => {
        RawInfoFields::from_info_prefix(a)?
      }
    };
    Ok((Self::validate(variant, raw)?, rest))
  }

  fn validate(variant: BmpHeaderVariant, raw: RawInfoFields) -> Result<Self, BmpError> {
    if raw.planes != 1 {
      return Err(BmpError::UnsupportedPlanes(raw.planes));
    }
    if raw.bits_per_pixel != 24 {
      return Err(BmpError::UnsupportedBitDepth(raw.bits_per_pixel));
    }
    let compression = BmpCompression::try_from(raw.compression)?;
    if compression != BmpCompression::RgbNoCompression {
      return Err(BmpError::UnsupportedCompression(raw.compression));
    }
    if raw.width < 0 {
      return Err(BmpError::IllegalDimensions { width: raw.width, height: raw.height });
    }
    Ok(Self {
      variant,
      width: raw.width,
      height: raw.height,
      planes: raw.planes,
      bits_per_pixel: raw.bits_per_pixel,
      compression,
    })
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn pixel_width(&self) -> u32 {
    self.width.unsigned_abs()
  }

  /// Height in pixels, regardless of the row order.
  #[inline]
  #[must_use]
  pub const fn pixel_height(&self) -> u32 {
    self.height.unsigned_abs()
  }

  /// If the first stored scanline is the top of the image.
  #[inline]
  #[must_use]
  pub const fn origin_top_left(&self) -> bool {
    self.height.is_negative()
  }
}
