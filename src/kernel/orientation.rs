// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;

use rug::Rational;

use crate::geometry::Point2;

/// Relative error bound of the floating-point `orient2d` evaluation
/// (`(3 + 16 * eps) * eps` with `eps = 2^-53`).
const CCW_ERR_BOUND: f64 = 3.3306690738754716e-16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl From<Ordering> for Orientation {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Orientation::CounterClockwise,
            Ordering::Less => Orientation::Clockwise,
            Ordering::Equal => Orientation::Collinear,
        }
    }
}

/// Returns twice the signed area of `abc`:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
}

/// Exact sign of [`orient2d`].
///
/// The double-precision determinant is trusted when it clears the forward
/// error bound; otherwise the determinant is recomputed in exact rational
/// arithmetic.
pub fn orient2d_sign(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let left = (b.x() - a.x()) * (c.y() - a.y());
    let right = (b.y() - a.y()) * (c.x() - a.x());
    let det = left - right;
    let bound = CCW_ERR_BOUND * (left.abs() + right.abs());

    if det > bound || -det > bound {
        return if det > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        };
    }

    orient2d_exact(a, b, c)
}

fn orient2d_exact(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let exact = |v: f64| Rational::from_f64(v).unwrap_or_default();
    let (ax, ay) = (exact(a.x()), exact(a.y()));

    let mut bx = exact(b.x());
    bx -= &ax;
    let mut by = exact(b.y());
    by -= &ay;
    let mut cx = exact(c.x());
    cx -= &ax;
    let mut cy = exact(c.y());
    cy -= &ay;

    // (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
    let mut left = bx;
    left *= &cy;
    let mut right = by;
    right *= &cx;
    left -= &right;

    Orientation::from(left.cmp0())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);

        assert!(orient2d(&a, &b, &c) > 0.0);
        assert_eq!(orient2d_sign(&a, &b, &c), Orientation::CounterClockwise);
        assert_eq!(orient2d_sign(&a, &c, &b), Orientation::Clockwise);
    }

    #[test]
    fn collinear_is_exact() {
        // 0.1 steps are not representable; the filter must defer to exact
        // arithmetic instead of guessing a sign.
        let a = Point2::new(0.1, 0.1);
        let b = Point2::new(0.2, 0.2);
        let c = Point2::new(0.3, 0.3);
        let o = orient2d_sign(&a, &b, &c);
        assert_eq!(o, orient2d_exact(&a, &b, &c));

        let p = Point2::new(1.0, 1.0);
        let q = Point2::new(2.0, 2.0);
        let r = Point2::new(4.0, 4.0);
        assert_eq!(orient2d_sign(&p, &q, &r), Orientation::Collinear);
    }
}
