//! Plain PPM (`P3`) codec.
//!
//! The encoding is byte-exact and a pure function of the pixels:
//!
//! ```text
//! P3 <width> <height> 255\n
//! r g b r g b ...\n        one line per row, single spaces
//! ```
//!
//! Every line, including the last row, ends with exactly one `\n`.

use crate::error::PpmError;
use crate::{Color, RasterBuffer};
use std::io;

/// Magic number of the plain (ASCII) pixmap variant.
pub const MAGIC: &str = "P3";

/// Largest channel value; channels are always 8-bit.
pub const MAX_VALUE: u32 = 255;

/// Header line without its terminating newline.
#[must_use]
pub fn header(buffer: &RasterBuffer) -> String {
    format!(
        "{MAGIC} {} {} {MAX_VALUE}",
        buffer.width(),
        buffer.height()
    )
}

/// Encode a buffer into a `P3` document.
#[must_use]
pub fn encode(buffer: &RasterBuffer) -> String {
    // "255 255 255 " is the widest pixel
    let per_row = buffer.width() as usize * 12 + 1;
    let mut out = String::with_capacity(per_row * buffer.height() as usize + 32);
    out.push_str(&header(buffer));
    out.push('\n');
    for row in buffer.rows() {
        push_row(&mut out, row);
        out.push('\n');
    }
    out
}

/// Stream the `P3` encoding row by row into `writer`.
///
/// Produces exactly the bytes of [`encode`].
pub fn write_to<W: io::Write>(buffer: &RasterBuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", header(buffer))?;
    let mut line = String::with_capacity(buffer.width() as usize * 12 + 1);
    for row in buffer.rows() {
        line.clear();
        push_row(&mut line, row);
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

fn push_row(out: &mut String, row: &[Color]) {
    for (i, color) in row.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let (r, g, b) = color.channels();
        push_channel(out, r);
        out.push(' ');
        push_channel(out, g);
        out.push(' ');
        push_channel(out, b);
    }
}

fn push_channel(out: &mut String, v: u8) {
    if v >= 100 {
        out.push(char::from(b'0' + v / 100));
    }
    if v >= 10 {
        out.push(char::from(b'0' + (v / 10) % 10));
    }
    out.push(char::from(b'0' + v % 10));
}

/// Decode a `P3` document.
///
/// Tokens may be separated by any ASCII whitespace, so this also reads plain
/// pixmaps wrapped differently from [`encode`]. Comments are not supported.
pub fn decode(text: &str) -> Result<RasterBuffer, PpmError> {
    let mut tokens = text.split_ascii_whitespace();

    let magic = tokens.next().ok_or(PpmError::UnexpectedEof("magic number"))?;
    if magic != MAGIC {
        return Err(PpmError::BadMagic(magic.to_string()));
    }

    let mut number = |field: &'static str| -> Result<u32, PpmError> {
        let token = tokens.next().ok_or(PpmError::UnexpectedEof(field))?;
        token.parse().map_err(|_| PpmError::InvalidNumber {
            field,
            token: token.to_string(),
        })
    };

    let width = number("width")?;
    let height = number("height")?;
    let max_value = number("max value")?;
    if max_value != MAX_VALUE {
        return Err(PpmError::UnsupportedMaxValue(max_value));
    }

    let channel = |v: u32| u8::try_from(v).map_err(|_| PpmError::ChannelOutOfRange(v));
    let expected = (width as usize).saturating_mul(height as usize);
    let mut pixels = Vec::with_capacity(expected.min(1 << 20));
    for _ in 0..expected {
        let r = channel(number("sample")?)?;
        let g = channel(number("sample")?)?;
        let b = channel(number("sample")?)?;
        pixels.push(Color::rgb(r, g, b));
    }

    if tokens.next().is_some() {
        return Err(PpmError::TrailingData {
            expected: expected * 3,
        });
    }

    RasterBuffer::from_pixels(width, height, pixels)
        .map_err(|_| PpmError::InvalidDimensions { width, height })
}
