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

use crate::geometry::{
    point::{Point, PointOps},
    vector::Vector,
};

pub trait SegmentOps<const N: usize>: Sized {
    fn a(&self) -> &Point<N>;
    fn b(&self) -> &Point<N>;

    fn length(&self) -> f64 {
        self.a().distance_to(self.b())
    }

    fn direction(&self) -> Vector<N> {
        self.a().vector_to(self.b())
    }

    fn midpoint(&self) -> Point<N>;
    fn point_at(&self, t: f64) -> Option<Point<N>>;
    fn inverse(&self) -> Self;
}

/// A straight segment between two points. Equality is directed; use
/// [`Segment::same_endpoints`] for the undirected comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<const N: usize> {
    pub a: Point<N>,
    pub b: Point<N>,
}

impl<const N: usize> Segment<N> {
    pub fn new(a: &Point<N>, b: &Point<N>) -> Self {
        Self { a: *a, b: *b }
    }

    pub fn same_endpoints(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<const N: usize> SegmentOps<N> for Segment<N> {
    fn a(&self) -> &Point<N> {
        &self.a
    }

    fn b(&self) -> &Point<N> {
        &self.b
    }

    fn midpoint(&self) -> Point<N> {
        self.a.midpoint(&self.b)
    }

    /// Point at parameter `t` in `[0, 1]`; `None` outside that interval.
    fn point_at(&self, t: f64) -> Option<Point<N>> {
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some(self.a.lerp(&self.b, t))
    }

    fn inverse(&self) -> Self {
        Self::new(self.b(), self.a())
    }
}

impl Segment<2> {
    /// X coordinate where the segment's supporting line meets the horizontal
    /// line `y`. `None` for horizontal segments.
    pub fn x_at(&self, y: f64) -> Option<f64> {
        let dy = self.b.y() - self.a.y();
        if dy == 0.0 {
            return None;
        }
        Some(self.a.x() + (y - self.a.y()) * (self.b.x() - self.a.x()) / dy)
    }
}

pub type Segment2 = Segment<2>;
pub type Segment3 = Segment<3>;
