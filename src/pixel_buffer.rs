#![forbid(unsafe_code)]

//! The in-memory pixel array of a 24bpp bitmap.
//!
//! The whole padded pixel array is read in one go and kept until the HTML is
//! done. Memory use is `row_stride * height` bytes; there's no streaming
//! decode.

use alloc::vec::Vec;
use bytemuck::cast_slice;

use crate::{
  bmp::{row_stride, BmpFileHeader, BmpGeometry, BmpInfoHeader},
  BmpError,
};

/// The raw, still padded, `[b, g, r]` pixel bytes of an image, along with the
/// geometry needed to index them.
///
/// Byte `(row, col, channel)` is at `row * row_stride + col * 3 + channel`,
/// where `row` is the *stored* scanline index and channel 0 is blue. The bytes
/// can't be changed once the buffer exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
  geometry: BmpGeometry,
  bytes: Vec<u8>,
}

impl PixelBuffer {
  /// Wraps already-read pixel bytes.
  ///
  /// Every scanline of a buffer is therefore exactly `width` pixels.
  ///
  /// ## Failure
  /// * [`RowStrideMismatch`](BmpError::RowStrideMismatch) if the geometry's
  ///   `row_stride` isn't the padded stride for its `width`.
  /// * [`InsufficientBytes`](BmpError::InsufficientBytes) if the length isn't
  ///   exactly `row_stride * height`.
  #[inline]
  pub fn from_vec(geometry: BmpGeometry, bytes: Vec<u8>) -> Result<Self, BmpError> {
    if geometry.row_stride != row_stride(geometry.width)? {
      return Err(BmpError::RowStrideMismatch {
        width: geometry.width,
        row_stride: geometry.row_stride,
      });
    }
    if bytes.len() != geometry.data_len()? {
      return Err(BmpError::InsufficientBytes);
    }
    Ok(Self { geometry, bytes })
  }

  /// Copies the pixel data out of the bytes of an entire BMP file.
  ///
  /// The headers should be the ones parsed from the same bytes.
  pub fn from_bmp_bytes(
    bytes: &[u8], file_header: &BmpFileHeader, info_header: &BmpInfoHeader,
  ) -> Result<Self, BmpError> {
    check_total_file_size(file_header, bytes.len() as u64);
    let geometry = BmpGeometry::new(file_header, info_header)?;
    let start = usize::try_from(geometry.data_offset)?;
    let end = start.checked_add(geometry.data_len()?).ok_or(BmpError::CheckedMath)?;
    let src = bytes.get(start..end).ok_or(BmpError::InsufficientBytes)?;
    let mut v = Vec::new();
    v.try_reserve_exact(src.len())?;
    v.extend_from_slice(src);
    Self::from_vec(geometry, v)
  }

  /// Seeks to the pixel data and reads all of it.
  ///
  /// The stream position doesn't need to be anywhere in particular beforehand.
  ///
  /// ## Failure
  /// * An `UnexpectedEof` I/O error if the stream ends before all the pixel
  ///   data is read. This is checked before allocating.
  /// * Any other I/O error from the stream.
  #[cfg(feature = "std")]
  pub fn read_from<R: std::io::Read + std::io::Seek>(
    reader: &mut R, file_header: &BmpFileHeader, info_header: &BmpInfoHeader,
  ) -> Result<Self, crate::ConvertError> {
    use std::io::{Error, ErrorKind, SeekFrom};

    let geometry = BmpGeometry::new(file_header, info_header)?;
    let data_len = geometry.data_len()?;
    let stream_len = reader.seek(SeekFrom::End(0))?;
    check_total_file_size(file_header, stream_len);
    let needed_end =
      geometry.data_offset.checked_add(u64::try_from(data_len).map_err(BmpError::from)?);
    if needed_end.map_or(true, |end| end > stream_len) {
      return Err(
        Error::new(
          ErrorKind::UnexpectedEof,
          "the file ends before the end of the pixel data",
        )
        .into(),
      );
    }
    reader.seek(SeekFrom::Start(geometry.data_offset))?;
    let mut v = Vec::new();
    v.try_reserve_exact(data_len).map_err(BmpError::from)?;
    v.resize(data_len, 0);
    reader.read_exact(&mut v)?;
    log::trace!("bmp: read {data_len} bytes of pixel data");
    Ok(Self::from_vec(geometry, v)?)
  }

  /// The geometry this buffer was read with.
  #[inline]
  #[must_use]
  pub const fn geometry(&self) -> &BmpGeometry {
    &self.geometry
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.geometry.width
  }

  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.geometry.height
  }

  /// The raw padded bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes
  }

  /// Converts a display row (0 is the top of the image) into the index of the
  /// stored scanline that holds it.
  ///
  /// Bottom-up images store the top row last.
  #[inline]
  #[must_use]
  pub const fn stored_row(&self, display_row: u32) -> u32 {
    if self.geometry.origin_top_left {
      display_row
    } else {
      self.geometry.height.saturating_sub(1).saturating_sub(display_row)
    }
  }

  /// The `[b, g, r]` pixels of one stored scanline, without the padding.
  ///
  /// ## Failure
  /// * [`PixelOutOfBounds`](BmpError::PixelOutOfBounds) if `row >= height`.
  #[inline]
  pub fn scanline(&self, row: u32) -> Result<&[[u8; 3]], BmpError> {
    if row >= self.geometry.height {
      return Err(BmpError::PixelOutOfBounds { row, col: 0 });
    }
    let start = (row as usize).checked_mul(self.geometry.row_stride).ok_or(BmpError::CheckedMath)?;
    let end = start.checked_add(self.geometry.width as usize * 3).ok_or(BmpError::CheckedMath)?;
    let line = self.bytes.get(start..end).ok_or(BmpError::InsufficientBytes)?;
    Ok(cast_slice(line))
  }

  /// The `[b, g, r]` bytes of a single pixel at a stored row and column.
  ///
  /// ## Failure
  /// * [`PixelOutOfBounds`](BmpError::PixelOutOfBounds) if `row >= height` or
  ///   `col >= width`.
  #[inline]
  pub fn bgr(&self, row: u32, col: u32) -> Result<[u8; 3], BmpError> {
    if row >= self.geometry.height || col >= self.geometry.width {
      return Err(BmpError::PixelOutOfBounds { row, col });
    }
    self.scanline(row)?.get(col as usize).copied().ok_or(BmpError::PixelOutOfBounds { row, col })
  }
}

fn check_total_file_size(file_header: &BmpFileHeader, actual: u64) {
  if u64::from(file_header.total_file_size) != actual {
    log::warn!(
      "bmp: file header says {} bytes but there are {actual}",
      file_header.total_file_size
    );
  }
}
