#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]

//! A crate for drawing directly into 16-bit RGB565 bitmap (BMP) buffers.
//!
//! There's no separate "decoded" image here. A [Bmp565] *is* the bytes of a
//! complete bitmap file (a 70 byte header and then bottom-up pixel rows), and
//! every pixel write goes straight into those bytes. When you're done drawing,
//! hand [Bmp565::as_bytes] to anything that reads BMP files, or hand
//! [Bmp565::pixel_data] to a display.
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use raster565::{Bmp565, Rgb565};
//!
//! let mut bmp = Bmp565::try_new(64, 32).unwrap();
//! bmp.fill(Rgb565::WHITE);
//! bmp.draw_line(0, 16, 32, 0, Rgb565::BLACK);
//! bmp.draw_rect(22, 6, 42, 26, Rgb565::new(0xFF, 0xFF, 0));
//! assert_eq!(bmp.file_size(), 70 + 128 * 32);
//! # }
//! ```
//!
//! Drawing calls that go outside the image don't panic and don't clip, they
//! just do nothing and return `false`.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod format;

mod error;
pub use error::*;

mod parser_helpers;

mod headers;
pub use headers::Bmp565Header;

mod layout;
pub use layout::{checked_row_stride, row_stride};

mod color;
pub use color::*;

mod bmp565;
pub use bmp565::*;

mod draw;

pub use pixel_formats::r8g8b8_Unorm;
