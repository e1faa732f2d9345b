#![no_std]

//! `pixel-text` is a library for laying out text as a grid of on/off pixels
//! using a small hand-drawn pixel font.
//!
//! Text is rendered with the [Silkscreen](http://kottke.org/plus/type/silkscreen/)
//! font, via [pixel_text_silkscreen]. Lines can be word-wrapped to a pixel
//! width, stacked and centered, framed with rounded borders, and given a
//! speech balloon tail. The result is a [PixelGrid], ready to hand to an
//! image encoder.
//!
//! The library supports `no_std` environments but requires an allocator.
//!
//! ```
//! use pixel_text::{Padding, PixelFont};
//!
//! let mut font = PixelFont::new();
//! font.set_text("Hello\nWorld!");
//! font.to_pixels();
//! font.border(Padding::Symmetric { vertical: 2, horizontal: 4 })?;
//!
//! let rows = font.pixel_map().unwrap().to_strings();
//! assert!(rows.iter().all(|row| row.len() == rows[0].len()));
//! # Ok::<(), pixel_text::Error>(())
//! ```

extern crate alloc;

pub mod border;
pub mod config;
pub mod filename;
pub mod layout;
pub mod speech;

pub use border::{DEFAULT_PADDING, Padding, draw_border};
pub use config::LayoutConfig;
pub use layout::{PixelFont, compose_line};
pub use pixel_text_core::{Error, GLYPH_HEIGHT, Glyph, GlyphSource, PixelGrid, Result};
pub use pixel_text_silkscreen::{GlyphTable, fold};
pub use speech::{Compass, TailDirection, TailSet, attach_tail};
