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

use crate::geometry::point::Point;

/// An axis-aligned bounding box in N dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<const N: usize> {
    pub min: Point<N>,
    pub max: Point<N>,
}

impl<const N: usize> Aabb<N> {
    pub fn new(min: Point<N>, max: Point<N>) -> Self {
        Aabb { min, max }
    }

    /// Smallest box containing every point; `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<N>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Aabb::new(*first, *first);
        for p in iter {
            aabb.expand(p);
        }
        Some(aabb)
    }

    pub fn expand(&mut self, p: &Point<N>) {
        for i in 0..N {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
        }
    }

    pub fn union(&self, other: &Aabb<N>) -> Aabb<N> {
        let mut out = *self;
        out.expand(&other.min);
        out.expand(&other.max);
        out
    }

    /// Center coordinate along axis `i`.
    pub fn center(&self, i: usize) -> f64 {
        (self.min[i] + self.max[i]) * 0.5
    }

    /// Length along axis `i`.
    pub fn extent(&self, i: usize) -> f64 {
        (self.max[i] - self.min[i]).abs()
    }

    pub fn max_extent(&self) -> f64 {
        (0..N).map(|i| self.extent(i)).fold(0.0, f64::max)
    }

    /// Half-open containment: `min <= p < max` on every axis.
    pub fn contains_half_open(&self, p: &Point<N>) -> bool {
        (0..N).all(|i| p[i] >= self.min[i] && p[i] < self.max[i])
    }

    pub fn intersects(&self, other: &Aabb<N>) -> bool {
        (0..N).all(|i| self.max[i] >= other.min[i] && other.max[i] >= self.min[i])
    }
}

pub type Aabb2 = Aabb<2>;
