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

use std::f64::consts::TAU;

use crate::geometry::{Point2, point::PointOps, vector::VectorOps};

/// Default relative tolerance of the geometric tests.
pub const EPS: f64 = 1e-9;

pub const SQRT_3: f64 = 1.7320508075688772;

/// Counter-clockwise angle at `at` swept from the direction of `next` to the
/// direction of `prev`, in `[0, 2*pi)`.
///
/// For a boundary walked `prev -> at -> next` with the open region on the
/// left this is the angle inside the region.
pub fn interior_angle(prev: &Point2, at: &Point2, next: &Point2) -> f64 {
    let to_prev = at.vector_to(prev);
    let to_next = at.vector_to(next);
    let angle = to_prev.angle() - to_next.angle();
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Shoelace area; positive for counter-clockwise rings.
pub fn signed_area(ring: &[Point2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        sum += a.x() * b.y() - b.x() * a.y();
    }
    sum * 0.5
}

pub fn triangle_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    a.vector_to(b).cross(&a.vector_to(c)) * 0.5
}

pub fn centroid(a: &Point2, b: &Point2, c: &Point2) -> Point2 {
    Point2::new((a.x() + b.x() + c.x()) / 3.0, (a.y() + b.y() + c.y()) / 3.0)
}
