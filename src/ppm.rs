// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a finished image to disk.
//!
//! The default output is the plain-text `P3` pixmap: a `P3` line, a
//! `width height 255` line, and then one `R G B` line per pixel.
//! The `image` crate's ASCII PNM encoder packs several pixels to a
//! line, so that one is written by hand; the binary pixmap and PNG
//! go through `image`.

use image::png::PNGEncoder;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use colors::{self, Rgb};
use errors::MandelbrotError;

/// The supported output encodings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    /// Plain-text `P3` pixmap, one pixel per line
    Plain,
    /// Binary `P6` pixmap
    Binary,
    /// Portable Network Graphics
    Png,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Plain
    }
}

impl OutputFormat {
    /// The file extension conventionally used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Plain | OutputFormat::Binary => "ppm",
            OutputFormat::Png => "png",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "binary" => Ok(OutputFormat::Binary),
            "png" => Ok(OutputFormat::Png),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            OutputFormat::Plain => "plain",
            OutputFormat::Binary => "binary",
            OutputFormat::Png => "png",
        };
        write!(f, "{}", name)
    }
}

/// Write the pixels as a plain-text pixmap.
pub fn write_plain<W: Write>(
    writer: &mut W,
    width: usize,
    height: usize,
    pixels: &[Rgb],
) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {} 255", width, height)?;
    for rgb in pixels {
        writeln!(writer, "{} {} {}", rgb.r, rgb.g, rgb.b)?;
    }
    writer.flush()
}

fn encode<W: Write>(
    writer: W,
    format: OutputFormat,
    width: usize,
    height: usize,
    pixels: &[Rgb],
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => {
            let mut writer = BufWriter::new(writer);
            write_plain(&mut writer, width, height, pixels)
        }
        OutputFormat::Binary => {
            let bytes = colors::to_bytes(pixels);
            let mut encoder = PNMEncoder::new(writer)
                .with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
            encoder.encode(&bytes[..], width as u32, height as u32, ColorType::RGB(8))
        }
        OutputFormat::Png => {
            let bytes = colors::to_bytes(pixels);
            PNGEncoder::new(writer).encode(&bytes, width as u32, height as u32, ColorType::RGB(8))
        }
    }
}

/// Create `path` and write the image to it.  Failing to create the
/// file is reported separately from failing to write it.
pub fn write_image<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
    width: usize,
    height: usize,
    pixels: &[Rgb],
) -> Result<(), MandelbrotError> {
    let path = path.as_ref();
    let output = File::create(path).map_err(|cause| MandelbrotError::FileOpen {
        path: path.display().to_string(),
        cause,
    })?;
    encode(output, format, width, height, pixels)?;
    info!("wrote {}x{} {} image to {}", width, height, format, path.display());
    Ok(())
}
