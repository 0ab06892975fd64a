#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! Converts uncompressed 24-bit BMP images into HTML tables.
//!
//! Each pixel becomes one empty 1px by 1px table cell with the pixel's color
//! as its background. Conversion goes in three steps:
//!
//! 1) [`bmp_parse_headers`](bmp::bmp_parse_headers) reads and validates the
//!    file header and the info header (12, 40, 108, or 124 byte layouts).
//! 2) [`PixelBuffer`] reads the entire padded pixel array into memory.
//! 3) [`HtmlTable`] streams out the document, decoding each cell's
//!    [`ColorCode`] as it goes.
//!
//! With the `std` feature, [`convert_file`] does all of that between two paths.

#[cfg(any(feature = "alloc", test))]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

pub mod ascii_array;
pub use ascii_array::*;

mod parser_helpers;

pub mod bmp;

pub mod color;
pub use color::ColorCode;

#[cfg(feature = "alloc")]
pub mod pixel_buffer;
#[cfg(feature = "alloc")]
pub use pixel_buffer::PixelBuffer;

#[cfg(feature = "alloc")]
pub mod html;
#[cfg(feature = "alloc")]
pub use html::HtmlTable;

#[cfg(feature = "std")]
pub mod convert;
#[cfg(feature = "std")]
pub use convert::{convert, convert_file};
