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

//! Input contours and straight-line discretization.

use num_traits::ToPrimitive;

use crate::geometry::{Point3, point::PointOps};

/// Role of a contour in a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourKind {
    /// Outer boundary, meshed on its inside.
    Outer,
    /// Hole boundary, meshed on its outside.
    Inner,
}

/// Closed ordered loop of points. The closing point is not repeated.
#[derive(Debug, Clone)]
pub struct Contour {
    pub points: Vec<Point3>,
    pub kind: ContourKind,
}

/// How straight lines are split into elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Division {
    ElementSize(f64),
    ElementCount(usize),
}

impl Contour {
    pub fn new(points: Vec<Point3>, kind: ContourKind) -> Self {
        Contour { points, kind }
    }

    pub fn outer(points: Vec<Point3>) -> Self {
        Self::new(points, ContourKind::Outer)
    }

    pub fn inner(points: Vec<Point3>) -> Self {
        Self::new(points, ContourKind::Inner)
    }

    /// Builds a contour from chained straight lines, each divided according
    /// to `division`. The end of each line is the start of the next one and
    /// is only emitted once.
    ///
    /// With [`Division::ElementCount`] the count is shared among the lines in
    /// proportion to their length; every line gets at least one element.
    pub fn from_lines(lines: &[(Point3, Point3)], division: Division, kind: ContourKind) -> Self {
        let mut points = Vec::new();
        let counts = match division {
            Division::ElementCount(total) => Some(share_count(lines, total)),
            Division::ElementSize(_) => None,
        };

        for (i, (start, end)) in lines.iter().enumerate() {
            let mut divided = match (division, &counts) {
                (Division::ElementSize(size), _) => divide_by_size(start, end, size),
                (Division::ElementCount(_), Some(counts)) => divide_by_count(start, end, counts[i]),
                (Division::ElementCount(n), None) => divide_by_count(start, end, n),
            };
            divided.pop();
            points.extend(divided);
        }
        Contour { points, kind }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn share_count(lines: &[(Point3, Point3)], total: usize) -> Vec<usize> {
    let lengths: Vec<f64> = lines.iter().map(|(a, b)| a.distance_to(b)).collect();
    let sum: f64 = lengths.iter().sum();
    let mut counts = Vec::with_capacity(lines.len());
    let mut assigned = 0;
    for (i, len) in lengths.iter().enumerate() {
        let n = if i + 1 == lines.len() {
            total.saturating_sub(assigned)
        } else if sum > 0.0 {
            (total as f64 * len / sum).round().to_usize().unwrap_or(1)
        } else {
            1
        };
        let n = n.max(1);
        assigned += n;
        counts.push(n);
    }
    counts
}

/// Splits `start..end` into elements of `size`, both ends included. When the
/// last element would be shorter than half of `size` it is merged into the
/// previous one.
pub fn divide_by_size(start: &Point3, end: &Point3, size: f64) -> Vec<Point3> {
    let length = start.distance_to(end);
    let mut points = vec![*start];
    if size > 0.0 && length > 0.0 {
        let mut i = 1.0;
        while i * size < length {
            points.push(start.lerp(end, i * size / length));
            i += 1.0;
        }
    }
    points.push(*end);

    let n = points.len();
    if n > 2 && points[n - 1].distance_to(&points[n - 2]) < size / 2.0 {
        points.remove(n - 2);
    }
    points
}

/// Splits `start..end` into `count` equal elements, both ends included.
pub fn divide_by_count(start: &Point3, end: &Point3, count: usize) -> Vec<Point3> {
    let count = count.max(1);
    let mut points = Vec::with_capacity(count + 1);
    points.push(*start);
    for i in 1..count {
        points.push(start.lerp(end, i as f64 / count as f64));
    }
    points.push(*end);
    points
}

/// Planar domain: one or more outer contours plus any holes.
#[derive(Debug, Clone, Default)]
pub struct Region {
    pub contours: Vec<Contour>,
}

impl Region {
    pub fn new(contours: Vec<Contour>) -> Self {
        Region { contours }
    }

    pub fn with_contour(mut self, contour: Contour) -> Self {
        self.contours.push(contour);
        self
    }

    /// Region bounded by a single outer polygon.
    pub fn polygon(points: Vec<Point3>) -> Self {
        Region::new(vec![Contour::outer(points)])
    }

    pub fn points(&self) -> impl Iterator<Item = &Point3> {
        self.contours.iter().flat_map(|c| c.points.iter())
    }
}
