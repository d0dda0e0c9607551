// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between parsing the arguments and
//! closing the output file.

use failure::Fail;
use std::io;

/// The single error type for the renderer and its writers.
#[derive(Debug, Fail)]
pub enum MandelbrotError {
    /// The step between pixels is `span / (n - 1)`, so neither axis can
    /// be narrower than two pixels.
    #[fail(
        display = "Image must be at least 2x2 pixels; got {}x{}",
        width, height
    )]
    Degenerate {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// An iteration limit of zero would make every escape ratio infinite.
    #[fail(display = "Iteration limit must be at least 1")]
    NoIterations,

    /// The corners of the view window are in the wrong order.
    #[fail(display = "{}", _0)]
    View(String),

    /// The output destination could not be created.
    #[fail(display = "Could not open file: {}", path)]
    FileOpen {
        /// The file we tried to create
        path: String,
        /// Why the operating system refused
        #[cause]
        cause: io::Error,
    },

    /// The file opened but the image could not be written to it.
    #[fail(display = "Could not write image: {}", _0)]
    Write(#[cause] io::Error),

    /// One of the scoped render threads panicked.
    #[fail(display = "A render worker panicked")]
    WorkerPanic,
}

impl From<io::Error> for MandelbrotError {
    fn from(err: io::Error) -> Self {
        MandelbrotError::Write(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_open_message_names_the_file() {
        let err = MandelbrotError::FileOpen {
            path: "nowhere/image.ppm".to_string(),
            cause: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "Could not open file: nowhere/image.ppm");
        assert!(err.cause().is_some());
    }

    #[test]
    fn degenerate_message_names_the_size() {
        let err = MandelbrotError::Degenerate { width: 1, height: 40 };
        assert_eq!(err.to_string(), "Image must be at least 2x2 pixels; got 1x40");
    }
}
