use super::*;

/// Two-letter file tags accepted at the start of a BMP file.
pub const COMMON_BMP_TAGS: &[AsciiArray<2>] = &[
  AsciiArray(*b"BM"),
  AsciiArray(*b"BA"),
  AsciiArray(*b"CI"),
  AsciiArray(*b"CP"),
  AsciiArray(*b"IC"),
  AsciiArray(*b"PT"),
];

/// The 14 byte header at the start of all BMP files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BmpFileHeader {
  /// One of the [`COMMON_BMP_TAGS`]:
  ///
  /// * BM: win3.1 or later
  /// * BA: OS/2 bitmap array
  /// * CI: OS/2 color icon
  /// * CP: OS/2 color pointer
  /// * IC: OS/2 icon
  /// * PT: OS/2 pointer
  pub tag: AsciiArray<2>,

  /// The total size of the file, as declared by the file.
  ///
  /// Nothing depends on this. A mismatch with the real size just gets logged.
  pub total_file_size: u32,

  /// The byte index within the file where the pixel array starts.
  pub pixel_data_offset: u32,
}
impl BmpFileHeader {
  /// Size of the file header in bytes.
  pub const SIZE: usize = 14;

  /// Parses the file header off the front of the bytes, checking the tag.
  ///
  /// The remaining bytes start with the info header.
  #[inline]
  pub fn try_from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), BmpError> {
    let tag = AsciiArray(try_split_off_byte_array::<2>(bytes)?.0);
    if !COMMON_BMP_TAGS.contains(&tag) {
      return Err(BmpError::InvalidSignature(tag));
    }
    let (a, rest) = try_split_off_byte_array::<14>(bytes)?;
    let header = Self {
      tag,
      total_file_size: u32_le_at(&a, 2)?,
      // 4 reserved bytes skipped
      pixel_data_offset: u32_le_at(&a, 10)?,
    };
    Ok((header, rest))
  }
}
