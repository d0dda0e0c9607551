// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test at the heart of the Mandelbrot set.

use num::Complex;

/// The classic bound: once |z| reaches 2 the orbit is guaranteed to
/// run off to infinity.
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Iterate `z = z * z + c` from zero, counting each step.  If the
/// orbit reaches `radius` the point is not in the set, and we return
/// the step on which it got there, counting from one.  If we run out
/// of `limit` steps first, the point is assumed to be in the set and
/// we return nothing at all.
///
/// The update always happens at least once before the bound is
/// checked, so an escaping point never reports zero iterations.
#[inline]
pub fn escape_time(c: Complex<f64>, limit: usize, radius: f64) -> Option<usize> {
    let bound = radius * radius;
    let mut z = Complex { re: 0.0_f64, im: 0.0_f64 };
    for i in 1..=limit.max(1) {
        z = z * z + c;
        if z.norm_sqr() >= bound {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for limit in &[1, 2, 10, 1024] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), *limit, 2.0), None);
        }
    }

    #[test]
    fn far_point_escapes_on_first_iteration() {
        assert_eq!(escape_time(Complex::new(3.0, 3.0), 50, 2.0), Some(1));
        assert_eq!(escape_time(Complex::new(3.0, 3.0), 1, 2.0), Some(1));
    }

    #[test]
    fn bound_is_inclusive() {
        // z1 = 2 + 0i, which sits exactly on the radius.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 10, 2.0), Some(1));
    }

    #[test]
    fn cardioid_points_stay_bounded() {
        assert_eq!(escape_time(Complex::new(-0.5, 0.0), 1000, 2.0), None);
        assert_eq!(escape_time(Complex::new(0.25, 0.0), 1000, 2.0), None);
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 1000, 2.0), None);
    }

    #[test]
    fn slow_escape_counts_every_step() {
        // 1 -> 2: escapes on the second update.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 10, 2.0), Some(2));
        // ... but not if we only allow one.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 1, 2.0), None);
    }

    #[test]
    fn zero_limit_still_iterates_once() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 0, 2.0), Some(1));
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 0, 2.0), None);
    }

    #[test]
    fn larger_radius_takes_longer() {
        let c = Complex::new(0.5, 0.5);
        let near = escape_time(c, 1000, 2.0).unwrap();
        let far = escape_time(c, 1000, 100.0).unwrap();
        assert!(far > near);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let c = Complex::new(-0.7453, 0.1127);
        assert_eq!(escape_time(c, 500, 2.0), escape_time(c, 500, 2.0));
    }
}
