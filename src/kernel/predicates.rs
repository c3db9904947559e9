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

use crate::geometry::{Point2, point::PointOps};
use crate::kernel::orientation::{Orientation, orient2d_sign};

pub fn are_equal(p1: &Point2, p2: &Point2, eps: f64) -> bool {
    (p1.x() - p2.x()).abs() < eps && (p1.y() - p2.y()).abs() < eps
}

/// True when `c` lies within `eps` of the line through `a` and `b`.
pub fn are_collinear(a: &Point2, b: &Point2, c: &Point2, eps: f64) -> bool {
    let ab = a.distance_to(b);
    if ab <= eps {
        return true;
    }
    let cross = (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x());
    cross.abs() / ab <= eps
}

/// True when `c` is strictly left of the directed line `a -> b`.
pub fn is_left_of(a: &Point2, b: &Point2, c: &Point2) -> bool {
    orient2d_sign(a, b, c) == Orientation::CounterClockwise
}

/// True when `p` lies strictly inside triangle `abc` (either winding).
/// Points on an edge or a corner are not inside.
pub fn point_strictly_in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    let o1 = orient2d_sign(a, b, p);
    let o2 = orient2d_sign(b, c, p);
    let o3 = orient2d_sign(c, a, p);
    o1 != Orientation::Collinear && o1 == o2 && o2 == o3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_inside_excludes_boundary() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);

        assert!(point_strictly_in_triangle(&Point2::new(1.0, 1.0), &a, &b, &c));
        assert!(point_strictly_in_triangle(&Point2::new(1.0, 1.0), &a, &c, &b));
        assert!(!point_strictly_in_triangle(&Point2::new(2.0, 0.0), &a, &b, &c));
        assert!(!point_strictly_in_triangle(&Point2::new(2.0, 2.0), &a, &b, &c));
        assert!(!point_strictly_in_triangle(&a, &a, &b, &c));
        assert!(!point_strictly_in_triangle(&Point2::new(3.0, 3.0), &a, &b, &c));
    }

    #[test]
    fn collinearity_with_tolerance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert!(are_collinear(&a, &b, &Point2::new(5.0, 1e-12), 1e-9));
        assert!(!are_collinear(&a, &b, &Point2::new(5.0, 1e-3), 1e-9));
        assert!(is_left_of(&a, &b, &Point2::new(5.0, 1e-3)));
    }
}
