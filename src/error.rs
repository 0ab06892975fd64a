use core::{fmt, num::TryFromIntError};

use crate::AsciiArray;

/// An error from parsing or decoding a bitmap.
///
/// Each variant that rejects a header value carries that value, so the
/// caller can report exactly what the file contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum BmpError {
  /// The first two bytes aren't one of the known bitmap tags.
  InvalidSignature(AsciiArray<2>),

  /// The info header size isn't 12, 40, 108, or 124.
  UnsupportedHeaderSize(u32),

  /// The color plane count isn't 1.
  UnsupportedPlanes(u16),

  /// The image isn't 24 bits per pixel.
  UnsupportedBitDepth(u16),

  /// The image uses some compression style (raw header value).
  UnsupportedCompression(u32),

  /// The data ended before a header field could be read.
  InsufficientBytes,

  /// The width is negative, or a dimension is too big to work with.
  IllegalDimensions {
    /// Declared width.
    width: i32,
    /// Declared height.
    height: i32,
  },

  /// A pixel geometry's row stride isn't the padded stride for its width.
  RowStrideMismatch {
    /// Width in pixels.
    width: u32,
    /// Bytes per row given.
    row_stride: usize,
  },

  /// A checked math operation failed while sizing the pixel data.
  CheckedMath,

  /// The allocator couldn't give us enough space for the pixel data.
  Alloc,

  /// A pixel was requested outside of the image.
  PixelOutOfBounds {
    /// Requested row.
    row: u32,
    /// Requested column.
    col: u32,
  },
}

#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for BmpError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
impl From<TryFromIntError> for BmpError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::CheckedMath
  }
}

impl fmt::Display for BmpError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidSignature(tag) => {
        let value = u16::from_le_bytes(*tag.as_bytes());
        write!(f, "Can't read this BMP file (bfType: {value:#06X} {tag:?})")
      }
      Self::UnsupportedHeaderSize(size) => write!(f, "Header unsupported. Length {size}"),
      Self::UnsupportedPlanes(planes) => write!(f, "Unsupported number of planes ({planes})"),
      Self::UnsupportedBitDepth(bpp) => {
        write!(f, "Unsupported number of bits per pixel ({bpp})")
      }
      Self::UnsupportedCompression(c) => {
        write!(f, "Compressed image formats not supported (compression {c})")
      }
      Self::InsufficientBytes => f.write_str("The BMP file is truncated"),
      Self::IllegalDimensions { width, height } => {
        write!(f, "Illegal image dimensions ({width}x{height})")
      }
      Self::RowStrideMismatch { width, row_stride } => {
        write!(f, "Row stride {row_stride} doesn't fit an image {width} pixels wide")
      }
      Self::CheckedMath => f.write_str("Image dimensions overflow the pixel data size"),
      Self::Alloc => f.write_str("Couldn't allocate the pixel buffer"),
      Self::PixelOutOfBounds { row, col } => {
        write!(f, "Pixel (row {row}, col {col}) is outside the image")
      }
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpError {}

/// An error from converting a file, as seen by the top level driver.
#[cfg(feature = "std")]
#[derive(Debug)]
#[non_exhaustive]
pub enum ConvertError {
  /// The input bitmap couldn't be opened.
  InputOpen {
    /// Input path.
    path: std::path::PathBuf,
    /// Why it failed.
    source: std::io::Error,
  },

  /// The output HTML file couldn't be created.
  OutputOpen {
    /// Output path.
    path: std::path::PathBuf,
    /// Why it failed.
    source: std::io::Error,
  },

  /// Reading or writing failed partway, including a short read of the pixel
  /// data.
  Io(std::io::Error),

  /// The headers were rejected.
  Bmp(BmpError),
}
#[cfg(feature = "std")]
impl From<std::io::Error> for ConvertError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e)
  }
}
#[cfg(feature = "std")]
impl From<BmpError> for ConvertError {
  #[inline]
  fn from(e: BmpError) -> Self {
    Self::Bmp(e)
  }
}
#[cfg(feature = "std")]
impl fmt::Display for ConvertError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InputOpen { path, .. } => write!(f, "Error opening input BMP file {}", path.display()),
      Self::OutputOpen { path, .. } => {
        write!(f, "Error opening output HTML file {}", path.display())
      }
      Self::Io(e) => write!(f, "I/O error: {e}"),
      Self::Bmp(e) => fmt::Display::fmt(e, f),
    }
  }
}
#[cfg(feature = "std")]
impl std::error::Error for ConvertError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::InputOpen { source, .. } | Self::OutputOpen { source, .. } => Some(source),
      Self::Io(e) => Some(e),
      Self::Bmp(e) => Some(e),
    }
  }
}
