//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper left corner, and a rectangle on the complex plane defined
//! by its upper-left and lower-right corners.
//!
//! Pixels run left to right and top to bottom; the real axis runs left
//! to right, but the imaginary axis runs bottom to top, so row 0 is the
//! *highest* imaginary value in the window.
use itertools::iproduct;
use num::Complex;

use errors::MandelbrotError;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the upper-left and lower-right corners of the window on
/// the complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

impl Default for ComplexPlane {
    /// The whole of the interesting part of the set, and then some.
    fn default() -> Self {
        ComplexPlane(Complex::new(-2.0, 2.0), Complex::new(2.0, -2.0))
    }
}

/// The column and row of a pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes, an integral cartesian plane
/// and a window on the complex plane, and maps points from one to the
/// other.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The width and height of the integral plane.
    pub integral_plane: IntegralPlane,
    /// The upper-left and lower-right corners of the complex window.
    pub complex_plane: ComplexPlane,
    // The distance on the complex plane between two adjacent pixels,
    // horizontally and vertically.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and the two
    /// corners of the complex window.  The corner pixels land exactly
    /// on the corners of the window, so each axis needs at least two
    /// pixels.
    pub fn new(
        width: usize,
        height: usize,
        upperleft: Complex<f64>,
        lowerright: Complex<f64>,
    ) -> Result<PlaneMapper, MandelbrotError> {
        if width < 2 || height < 2 {
            return Err(MandelbrotError::Degenerate { width, height });
        }

        if lowerright.re <= upperleft.re {
            return Err(MandelbrotError::View(
                "The upper left corner is not to the left of the lower right corner".to_string(),
            ));
        }

        if lowerright.im >= upperleft.im {
            return Err(MandelbrotError::View(
                "The upper left corner is not above the lower right corner".to_string(),
            ));
        }

        let steps = (
            (lowerright.re - upperleft.re) / ((width as f64) - 1.0),
            (upperleft.im - lowerright.im) / ((height as f64) - 1.0),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(upperleft, lowerright),
            steps,
        })
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given the linear offset of a pixel in the image buffer, return
    /// its column and row.
    #[inline]
    pub fn index_to_pixel(&self, index: usize) -> Pixel {
        Pixel(index % self.integral_plane.0, index / self.integral_plane.0)
    }

    /// The linear offset of a pixel in the image buffer.
    #[inline]
    pub fn pixel_to_index(&self, pixel: &Pixel) -> usize {
        pixel.1 * self.integral_plane.0 + pixel.0
    }

    /// Given a pixel on the integral cartesian plane, map it to the
    /// equivalent point in the complex window.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.complex_plane.0.re + self.steps.0 * (pixel.0 as f64),
            self.complex_plane.0.im - self.steps.1 * (pixel.1 as f64),
        )
    }

    /// Every pixel in the integral plane, row by row.
    pub fn pixels<'a>(&'a self) -> impl Iterator<Item = Pixel> + 'a {
        iproduct!(0..self.integral_plane.1, 0..self.integral_plane.0)
            .map(|(row, column)| Pixel(column, row))
    }
}
