// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps escape velocity to color.
//!
//! The palette is a trio of Bernstein polynomials over the ratio of
//! the escape iteration to the iteration limit.  Red peaks late, blue
//! peaks early, and green sits in the middle, which gives a smooth
//! gradient from deep blue at the edges of the image to hot orange
//! along the boundary of the set.

use num::clamp;

/// A single pixel.  The default is black, which is also the color of
/// every point inside the set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Constructor.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// The channels as bytes, in the order the binary encoders want them.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn channel(value: f64) -> u8 {
    clamp(value as i64, 0, 255) as u8
}

/// Given the iteration at which a point escaped and the limit we were
/// willing to go to, return its color.  Only meaningful for points
/// that actually escaped, i.e. `0 < iterations <= limit`.
pub fn bernstein(iterations: usize, limit: usize) -> Rgb {
    let t = (iterations as f64) / (limit as f64);
    let u = 1.0 - t;
    Rgb {
        r: channel(9.0 * u * t * t * t * 255.0),
        g: channel(15.0 * u * u * t * t * 255.0),
        b: channel(8.5 * u * u * u * t * 255.0),
    }
}

/// Flatten a pixel buffer into packed RGB bytes.
pub fn to_bytes(pixels: &[Rgb]) -> Vec<u8> {
    pixels.iter().flat_map(|p| p.to_bytes().to_vec()).collect()
}
