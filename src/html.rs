#![forbid(unsafe_code)]

//! Writing a [`PixelBuffer`] out as an HTML table.
//!
//! Every pixel becomes an empty `<td>` whose `bgcolor` is the pixel's color,
//! and a style rule pins every cell to 1px by 1px. The output is produced as a
//! sequence of [`Fragment`]s, so it can go straight to a writer without the
//! whole document ever being in memory.

use core::{fmt, iter::FusedIterator, slice};

use crate::{color::decode_bgr, BmpError, ColorCode, PixelBuffer};

/// Everything before the first row.
pub const HTML_PREAMBLE: &str = concat!(
  "<html>\n",
  "<head>\n",
  "<style type=\"text/css\">\n",
  "td {\n",
  "    height:1px;\n",
  "    width:1px;\n",
  "}\n",
  "</style>\n",
  "</head>\n",
  "<body>\n",
  "<table border=\"0\" cellpadding=\"0\" cellspacing=\"0\">\n",
);

/// Everything after the last row.
pub const HTML_EPILOGUE: &str = "</table>\n</body>\n</html>\n";

/// One piece of the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
  /// [`HTML_PREAMBLE`]
  Preamble,
  /// `<tr>`
  RowStart,
  /// A single pixel's `<td>`.
  Cell(ColorCode),
  /// `</tr>`
  RowEnd,
  /// [`HTML_EPILOGUE`]
  Epilogue,
}
impl fmt::Display for Fragment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Preamble => f.write_str(HTML_PREAMBLE),
      Self::RowStart => f.write_str("<tr>\n"),
      Self::Cell(code) => write!(f, "<td bgcolor=\"#{code}\"></td>\n"),
      Self::RowEnd => f.write_str("</tr>\n"),
      Self::Epilogue => f.write_str(HTML_EPILOGUE),
    }
  }
}

/// An HTML table view of a pixel buffer.
///
/// This holds no iteration state of its own, so [`fragments`](Self::fragments)
/// and the `write_*` methods can be called any number of times and each call
/// produces the whole document from the start.
#[derive(Debug, Clone, Copy)]
pub struct HtmlTable<'a> {
  pixels: &'a PixelBuffer,
}
impl<'a> HtmlTable<'a> {
  /// Makes a table view of the pixels.
  #[inline]
  #[must_use]
  pub const fn new(pixels: &'a PixelBuffer) -> Self {
    Self { pixels }
  }

  /// Iterates the document's fragments in output order.
  ///
  /// Rows come out top to bottom as the image is displayed, regardless of the
  /// order the scanlines were stored in. Columns go left to right. If a
  /// scanline can't be read the error is yielded and iteration ends there.
  #[inline]
  #[must_use]
  pub fn fragments(&self) -> Fragments<'a> {
    Fragments { pixels: self.pixels, stage: Stage::Preamble, display_row: 0, cells: None }
  }

  /// Writes the document to a `fmt::Write`, such as a `String`.
  ///
  /// A pixel read error shows up as a plain `fmt::Error`.
  pub fn write_fmt_to<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
    self.fragments().try_for_each(|fragment| write!(w, "{}", fragment.map_err(|_| fmt::Error)?))
  }

  /// Writes the document to an `io::Write`.
  ///
  /// The writer isn't flushed. A pixel read error becomes an `InvalidData`
  /// I/O error.
  #[cfg(feature = "std")]
  pub fn write_io_to<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<()> {
    use std::io::{Error, ErrorKind};

    log::trace!("html: emitting {}x{} table", self.pixels.width(), self.pixels.height());
    self.fragments().try_for_each(|fragment| {
      let fragment = fragment.map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
      write!(w, "{fragment}")
    })
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
  Preamble,
  Rows,
  Done,
}

/// Iterator over the [`Fragment`]s of an [`HtmlTable`].
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
  pixels: &'a PixelBuffer,
  stage: Stage,
  display_row: u32,
  /// Remaining cells of the row being emitted, if a row is open.
  cells: Option<slice::Iter<'a, [u8; 3]>>,
}
impl<'a> Iterator for Fragments<'a> {
  type Item = Result<Fragment, BmpError>;

  fn next(&mut self) -> Option<Self::Item> {
    match self.stage {
      Stage::Preamble => {
        self.stage = Stage::Rows;
        Some(Ok(Fragment::Preamble))
      }
      Stage::Rows => {
        if let Some(cells) = self.cells.as_mut() {
          return Some(Ok(match cells.next() {
            Some(bgr) => Fragment::Cell(decode_bgr(*bgr)),
            None => {
              self.cells = None;
              self.display_row += 1;
              Fragment::RowEnd
            }
          }));
        }
        if self.display_row < self.pixels.height() {
          let stored_row = self.pixels.stored_row(self.display_row);
          match self.pixels.scanline(stored_row) {
            Ok(line) => {
              self.cells = Some(line.iter());
              Some(Ok(Fragment::RowStart))
            }
            Err(e) => {
              log::error!("html: scanline {stored_row} unreadable: {e}");
              self.stage = Stage::Done;
              Some(Err(e))
            }
          }
        } else {
          self.stage = Stage::Done;
          Some(Ok(Fragment::Epilogue))
        }
      }
      Stage::Done => None,
    }
  }
}
impl FusedIterator for Fragments<'_> {}
