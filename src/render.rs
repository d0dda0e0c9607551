// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grid engine.
//!
//! Rendering a Mandelbrot image is embarrassingly parallel: every
//! pixel depends only on its own coordinate.  We allocate the image
//! once, carve it into one contiguous run per thread, and let each
//! thread fill in its own run.  The calling thread takes the last
//! run, the one with the leftover pixels, rather than sitting idle
//! while the others work, and then waits for everyone else at the end
//! of the crossbeam scope.

use crossbeam;
use num::Complex;
use num_cpus;
use std::time::Instant;

use colors::{bernstein, Rgb};
use errors::MandelbrotError;
use escape::{escape_time, DEFAULT_ESCAPE_RADIUS};
use partition::{partition, split_mut};
use planes::{ComplexPlane, PlaneMapper};

/// Everything needed to describe one image.
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// The maximum number of iterations before a point is considered
    /// to be in the set.
    pub limit: usize,
    /// The magnitude at which an orbit is considered to have escaped.
    pub radius: f64,
    /// The number of threads to render with.  `None` uses every core
    /// the machine has.
    pub threads: Option<usize>,
    /// The upper-left corner of the window on the complex plane.
    pub upperleft: Complex<f64>,
    /// The lower-right corner of the window on the complex plane.
    pub lowerright: Complex<f64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let window = ComplexPlane::default();
        RenderConfig {
            width: 1024,
            height: 1024,
            limit: 1024,
            radius: DEFAULT_ESCAPE_RADIUS,
            threads: None,
            upperleft: window.0,
            lowerright: window.1,
        }
    }
}

/// A validated render job.  Once built it is immutable and may be
/// rendered any number of times, always with the same result.
#[derive(Debug)]
pub struct MandelbrotRenderer {
    plane: PlaneMapper,
    limit: usize,
    radius: f64,
    threads: usize,
}

impl MandelbrotRenderer {
    /// Validates the configuration and settles on a thread count.
    pub fn new(config: RenderConfig) -> Result<Self, MandelbrotError> {
        if config.limit == 0 {
            return Err(MandelbrotError::NoIterations);
        }
        let plane = PlaneMapper::new(
            config.width,
            config.height,
            config.upperleft,
            config.lowerright,
        )?;
        let threads = config.threads.unwrap_or_else(num_cpus::get).max(1);
        Ok(MandelbrotRenderer {
            plane,
            limit: config.limit,
            radius: config.radius,
            threads,
        })
    }

    /// The plane this renderer maps onto.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The number of threads, including the calling thread, that
    /// `render` will use.
    pub fn threads(&self) -> usize {
        self.threads
    }

    #[inline]
    fn pixel_color(&self, index: usize) -> Option<Rgb> {
        let point = self.plane.pixel_to_point(&self.plane.index_to_pixel(index));
        escape_time(point, self.limit, self.radius).map(|i| bernstein(i, self.limit))
    }

    /// Fill in one run of the image.  `offset` is the index in the full
    /// image of the first pixel in `region`.  Points inside the set are
    /// left untouched, which means black.
    fn render_region(&self, offset: usize, region: &mut [Rgb]) {
        for (i, pixel) in region.iter_mut().enumerate() {
            if let Some(rgb) = self.pixel_color(offset + i) {
                *pixel = rgb;
            }
        }
    }

    /// The multi-threaded renderer.  Returns the complete image, row by
    /// row, or nothing at all if a thread died along the way.
    pub fn render(&self) -> Result<Vec<Rgb>, MandelbrotError> {
        let started = Instant::now();
        let mut pixels = vec![Rgb::default(); self.plane.len()];
        let chunks = partition(pixels.len(), self.threads);
        debug!(
            "rendering {} pixels on {} threads, {} pixels per thread",
            pixels.len(),
            chunks.len(),
            pixels.len() / chunks.len()
        );

        {
            let regions = split_mut(&mut pixels, &chunks);
            let last = chunks.len() - 1;
            crossbeam::scope(|spawner| {
                for (n, (chunk, region)) in chunks.iter().zip(regions).enumerate() {
                    if n == last {
                        trace!("rendering {}..{} locally", chunk.start, chunk.end);
                        self.render_region(chunk.start, region);
                    } else {
                        trace!("spawning worker for {}..{}", chunk.start, chunk.end);
                        spawner.spawn(move |_| self.render_region(chunk.start, region));
                    }
                }
            })
            .map_err(|_| MandelbrotError::WorkerPanic)?;
        }

        info!("rendered {} pixels in {:?}", pixels.len(), started.elapsed());
        Ok(pixels)
    }

    /// The single-threaded renderer.  Walks the plane in order; useful
    /// as a reference for the threaded version.
    pub fn render_single(&self) -> Vec<Rgb> {
        let mut pixels = vec![Rgb::default(); self.plane.len()];
        for pixel in self.plane.pixels() {
            let index = self.plane.pixel_to_index(&pixel);
            if let Some(rgb) = self.pixel_color(index) {
                pixels[index] = rgb;
            }
        }
        pixels
    }
}

/// Render the default window at the given size and iteration limit,
/// using every available core.
pub fn compute_image(
    width: usize,
    height: usize,
    limit: usize,
) -> Result<Vec<Rgb>, MandelbrotError> {
    let config = RenderConfig {
        width,
        height,
        limit,
        ..RenderConfig::default()
    };
    MandelbrotRenderer::new(config)?.render()
}
