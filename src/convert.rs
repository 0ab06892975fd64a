//! Whole-file conversion: headers, then pixels, then HTML.
//!
//! Each stage finishes before the next starts. Nothing is written until the
//! headers are validated and the pixel data is fully read.

use std::{
  fs::File,
  io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write},
  path::Path,
  vec::Vec,
};

use crate::{
  bmp::{bmp_parse_headers, BmpFileHeader, BmpInfoHeader, MAX_HEADERS_LEN},
  ConvertError, HtmlTable, PixelBuffer,
};

/// Reads and validates the headers from the start of a stream.
pub fn read_headers<R: Read + Seek>(
  reader: &mut R,
) -> Result<(BmpFileHeader, BmpInfoHeader), ConvertError> {
  reader.seek(SeekFrom::Start(0))?;
  let mut bytes = Vec::with_capacity(MAX_HEADERS_LEN);
  reader.by_ref().take(MAX_HEADERS_LEN as u64).read_to_end(&mut bytes)?;
  Ok(bmp_parse_headers(&bytes)?)
}

/// Reads a bitmap from `reader` and writes its HTML table to `writer`.
///
/// The writer is flushed at the end.
pub fn convert<R: Read + Seek, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), ConvertError> {
  let (file_header, info_header) = read_headers(reader)?;
  let pixels = PixelBuffer::read_from(reader, &file_header, &info_header)?;
  HtmlTable::new(&pixels).write_io_to(writer)?;
  writer.flush()?;
  Ok(())
}

/// Converts the bitmap file at `input` into an HTML file at `output`.
///
/// The output file is only created (or truncated) once the input has been
/// fully read and validated, so a bad input never touches the output path.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConvertError> {
  let file = File::open(input)
    .map_err(|source| ConvertError::InputOpen { path: input.to_path_buf(), source })?;
  let mut reader = BufReader::new(file);
  let (file_header, info_header) = read_headers(&mut reader)?;
  let pixels = PixelBuffer::read_from(&mut reader, &file_header, &info_header)?;
  drop(reader);
  log::debug!("convert: {} is {}x{}", input.display(), pixels.width(), pixels.height());

  let file = File::create(output)
    .map_err(|source| ConvertError::OutputOpen { path: output.to_path_buf(), source })?;
  let mut writer = BufWriter::new(file);
  HtmlTable::new(&pixels).write_io_to(&mut writer)?;
  writer.flush()?;
  Ok(())
}
