use std::io::Cursor;

use bmp2html::{
  bmp::{bmp_parse_headers, BmpHeaderVariant},
  convert::read_headers,
  BmpError, ConvertError, PixelBuffer,
};
use walkdir::WalkDir;

use super::bmp_bytes;

#[test]
fn test_bmps_do_not_panic_parser() {
  // iter ALL files in the test folder, even non-bmp files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    if let Ok((file_header, info_header)) = bmp_parse_headers(&v) {
      let _ = PixelBuffer::from_bmp_bytes(&v, &file_header, &info_header);
    }
  }
  // even totally random data should never panic the parser!
  for _ in 0..100 {
    let mut v = super::rand_bytes(256);
    v[0..2].copy_from_slice(b"BM");
    v[14..18].copy_from_slice(&40_u32.to_le_bytes());
    if let Ok((file_header, info_header)) = bmp_parse_headers(&v) {
      let _ = PixelBuffer::from_bmp_bytes(&v, &file_header, &info_header);
    }
  }
}

#[test]
fn test_every_header_variant_parses() {
  for (size, variant) in [
    (12, BmpHeaderVariant::Core),
    (40, BmpHeaderVariant::Base),
    (108, BmpHeaderVariant::V4),
    (124, BmpHeaderVariant::V5),
  ] {
    let v = bmp_bytes(size, 3, 2, &[&[[1, 2, 3]; 3], &[[4, 5, 6]; 3]]);
    let (file_header, info_header) = bmp_parse_headers(&v).unwrap();
    assert_eq!(info_header.variant, variant);
    assert_eq!(file_header.pixel_data_offset, 14 + size);
    let pixels = PixelBuffer::from_bmp_bytes(&v, &file_header, &info_header).unwrap();
    assert_eq!(pixels.geometry().row_stride, 12);
    assert_eq!(pixels.as_bytes().len(), 24);
    assert_eq!(pixels.bgr(1, 2), Ok([4, 5, 6]));
  }
}

#[test]
fn test_row_padding() {
  let v = bmp_bytes(40, 3, 1, &[&[[0; 3]; 3]]);
  let (f, i) = bmp_parse_headers(&v).unwrap();
  assert_eq!(PixelBuffer::from_bmp_bytes(&v, &f, &i).unwrap().geometry().row_stride, 12);
  let v = bmp_bytes(40, 4, 1, &[&[[0; 3]; 4]]);
  let (f, i) = bmp_parse_headers(&v).unwrap();
  assert_eq!(PixelBuffer::from_bmp_bytes(&v, &f, &i).unwrap().geometry().row_stride, 12);
}

#[test]
fn test_rejections_carry_values() {
  let mut v = bmp_bytes(40, 1, 1, &[&[[0; 3]]]);
  v[14..18].copy_from_slice(&20_u32.to_le_bytes());
  assert_eq!(bmp_parse_headers(&v), Err(BmpError::UnsupportedHeaderSize(20)));

  let mut v = bmp_bytes(40, 1, 1, &[&[[0; 3]]]);
  v[28..30].copy_from_slice(&8_u16.to_le_bytes());
  assert_eq!(bmp_parse_headers(&v), Err(BmpError::UnsupportedBitDepth(8)));

  let mut v = bmp_bytes(40, 1, 1, &[&[[0; 3]]]);
  v[30..34].copy_from_slice(&1_u32.to_le_bytes());
  assert_eq!(bmp_parse_headers(&v), Err(BmpError::UnsupportedCompression(1)));

  let mut v = bmp_bytes(40, 1, 1, &[&[[0; 3]]]);
  v[26..28].copy_from_slice(&0_u16.to_le_bytes());
  assert_eq!(bmp_parse_headers(&v), Err(BmpError::UnsupportedPlanes(0)));

  let mut v = bmp_bytes(40, 1, 1, &[&[[0; 3]]]);
  v[0..2].copy_from_slice(b"MB");
  assert!(matches!(bmp_parse_headers(&v), Err(BmpError::InvalidSignature(tag)) if tag.0 == *b"MB"));
}

#[test]
fn test_fixture_with_8bpp_is_rejected() {
  let v = std::fs::read("tests/fixtures/4x1_8bpp.bmp").unwrap();
  assert_eq!(bmp_parse_headers(&v), Err(BmpError::UnsupportedBitDepth(8)));
}

#[test]
fn test_short_pixel_data_is_an_io_error() {
  let mut v = bmp_bytes(40, 2, 2, &[&[[0; 3]; 2], &[[0; 3]; 2]]);
  v.truncate(v.len() - 1);
  let mut cursor = Cursor::new(v.clone());
  let (f, i) = read_headers(&mut cursor).unwrap();
  match PixelBuffer::read_from(&mut cursor, &f, &i) {
    Err(ConvertError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
    other => panic!("expected a short read, got {other:?}"),
  }
  assert_eq!(PixelBuffer::from_bmp_bytes(&v, &f, &i), Err(BmpError::InsufficientBytes));
}

#[test]
fn test_stream_and_slice_reads_agree() {
  let v = bmp_bytes(108, 5, 3, &[&[[1, 2, 3]; 5], &[[4, 5, 6]; 5], &[[7, 8, 9]; 5]]);
  let mut cursor = Cursor::new(v.clone());
  let (f, i) = read_headers(&mut cursor).unwrap();
  let from_stream = PixelBuffer::read_from(&mut cursor, &f, &i).unwrap();
  let from_slice = PixelBuffer::from_bmp_bytes(&v, &f, &i).unwrap();
  assert_eq!(from_stream, from_slice);
}
