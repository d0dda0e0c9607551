#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring a number and adding `c`, starting
//! from zero, never runs off to infinity.  Points outside the set do
//! run off, some faster than others, and that "velocity" is what
//! gives the familiar pictures their color.
//!
//! Every pixel of the image is independent of every other, so the
//! renderer splits the image into one contiguous run of pixels per
//! core and renders the runs in parallel, each thread writing only
//! into its own slice of a single shared buffer.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod colors;
pub mod errors;
pub mod escape;
pub mod partition;
pub mod planes;
pub mod ppm;
pub mod render;

pub use colors::Rgb;
pub use errors::MandelbrotError;
pub use ppm::{write_image, OutputFormat};
pub use render::{compute_image, MandelbrotRenderer, RenderConfig};
