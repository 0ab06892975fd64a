#![forbid(unsafe_code)]

//! Module for Windows Bitmap files (BMP).
//!
//! ## Parsing The Format
//!
//! Note: All multi-byte values in BMP are always little-endian encoded.
//!
//! * A bitmap file always starts with a "file header". This is always 14 bytes.
//!   * A tag for the kind of bitmap you're expected to find
//!   * A total size of the file, to check if a file was unexpectedly truncated
//!   * The position of the pixel data within the file.
//! * Next is an "info header". There's many versions of this header. The first
//!   4 bytes are always the size of the full info header, and each version is a
//!   different size, so this lets you figure out what version is being used for
//!   this file. We accept the 12 byte core header and the 40, 108, and 124 byte
//!   info headers. The bigger two start with the same 40 bytes as the 40 byte
//!   one, and we only look at that part.
//! * Anything between the info header and the pixel data (bitmasks, a color
//!   table, a gap) is skipped by going straight to the pixel data offset given
//!   in the file header.
//! * Next there is the pixel array. Each row of the bitmap is padded to 4
//!   bytes. With 24 bits per pixel each pixel is `[b, g, r]`.
//!
//! Rows are stored bottom to top unless the height is negative, in which case
//! they're stored top to bottom.

use crate::{parser_helpers::*, AsciiArray, BmpError};

mod file_header;
pub use file_header::*;

mod info_header;
pub use info_header::*;

/// The most bytes [`bmp_parse_headers`] will ever look at.
pub const MAX_HEADERS_LEN: usize = BmpFileHeader::SIZE + BmpHeaderVariant::V5.byte_len();

/// Parses and validates the file header and info header at the start of the
/// bytes.
///
/// The bytes only need to cover the headers, not the whole file. At most
/// [`MAX_HEADERS_LEN`] bytes are examined.
#[inline]
pub fn bmp_parse_headers(bytes: &[u8]) -> Result<(BmpFileHeader, BmpInfoHeader), BmpError> {
  let (file_header, rest) = BmpFileHeader::try_from_bytes(bytes)?;
  let (info_header, _rest) = BmpInfoHeader::try_from_bytes(rest)?;
  log::debug!(
    "bmp: tag {} with {:?} header, {}x{}, pixel data at {}",
    file_header.tag,
    info_header.variant,
    info_header.width,
    info_header.height,
    file_header.pixel_data_offset
  );
  Ok((file_header, info_header))
}

/// Bytes per scanline of 24bpp pixels, including the padding up to a multiple
/// of 4.
#[inline]
pub fn row_stride(width: u32) -> Result<usize, BmpError> {
  let raw: usize = usize::try_from(width)?.checked_mul(3).ok_or(BmpError::CheckedMath)?;
  let padding = (4 - (raw % 4)) % 4;
  raw.checked_add(padding).ok_or(BmpError::CheckedMath)
}

/// Everything needed to find and index the pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpGeometry {
  /// Width in pixels.
  pub width: u32,
  /// Height in pixels.
  pub height: u32,
  /// Padded bytes per scanline.
  pub row_stride: usize,
  /// Where the pixel array starts, from the start of the file.
  pub data_offset: u64,
  /// If the first stored scanline is the top of the image.
  pub origin_top_left: bool,
}
impl BmpGeometry {
  /// Computes the geometry for a pair of parsed headers.
  #[inline]
  pub fn new(file_header: &BmpFileHeader, info_header: &BmpInfoHeader) -> Result<Self, BmpError> {
    let width = info_header.pixel_width();
    let height = info_header.pixel_height();
    let geometry = Self {
      width,
      height,
      row_stride: row_stride(width)?,
      data_offset: u64::from(file_header.pixel_data_offset),
      origin_top_left: info_header.origin_top_left(),
    };
    // make sure the full size is representable up front
    geometry.data_len()?;
    Ok(geometry)
  }

  /// Size of the whole padded pixel array: `row_stride * height`.
  #[inline]
  pub fn data_len(&self) -> Result<usize, BmpError> {
    self.row_stride.checked_mul(usize::try_from(self.height)?).ok_or(BmpError::CheckedMath)
  }
}
