#![forbid(unsafe_code)]

//! Bounds-checked little-endian reads at fixed byte offsets.
//!
//! Every header field is pulled out one at a time with one of these, so a
//! short or malformed header turns into [`BmpError::InsufficientBytes`]
//! rather than a panic.

use crate::BmpError;

#[inline]
fn byte_array_at<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N], BmpError> {
  let end = offset.checked_add(N).ok_or(BmpError::InsufficientBytes)?;
  match bytes.get(offset..end) {
    Some(slice) => slice.try_into().map_err(|_| BmpError::InsufficientBytes),
    None => Err(BmpError::InsufficientBytes),
  }
}

#[inline]
pub(crate) fn u16_le_at(bytes: &[u8], offset: usize) -> Result<u16, BmpError> {
  byte_array_at(bytes, offset).map(u16::from_le_bytes)
}

#[inline]
pub(crate) fn u32_le_at(bytes: &[u8], offset: usize) -> Result<u32, BmpError> {
  byte_array_at(bytes, offset).map(u32::from_le_bytes)
}

#[inline]
pub(crate) fn i32_le_at(bytes: &[u8], offset: usize) -> Result<i32, BmpError> {
  byte_array_at(bytes, offset).map(i32::from_le_bytes)
}

/// Splits `N` bytes off the front of the slice, if there's enough.
#[inline]
pub(crate) fn try_split_off_byte_array<const N: usize>(
  bytes: &[u8],
) -> Result<([u8; N], &[u8]), BmpError> {
  let a = byte_array_at::<N>(bytes, 0)?;
  Ok((a, &bytes[N..]))
}
