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

use smallvec::SmallVec;

use crate::geometry::{Point2, Point3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleId(pub usize);

impl PointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl SegmentId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl TriangleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A mesh point in working coordinates.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub position: Point2,
    /// Input coordinate of contour points; created points are lifted from
    /// `position` on output.
    pub original: Option<Point3>,
    /// Contour points are never merged away.
    pub is_boundary: bool,
    /// Set once the point has been merged into another one.
    pub removed: bool,
    pub segments: SmallVec<[SegmentId; 4]>,
    pub triangles: SmallVec<[TriangleId; 8]>,
}

impl Vertex {
    pub fn new(position: Point2, original: Option<Point3>, is_boundary: bool) -> Self {
        Vertex {
            position,
            original,
            is_boundary,
            removed: false,
            segments: SmallVec::new(),
            triangles: SmallVec::new(),
        }
    }
}

/// Directed front segment. The unmeshed region lies to its left.
///
/// Equality ignores direction: `(a, b) == (b, a)`.
#[derive(Debug, Clone)]
pub struct FrontSegment {
    pub start: PointId,
    pub end: PointId,
    pub length: f64,
    /// Generation in which the segment was last tried as a triangle base.
    pub tried_at: Option<u64>,
    pub removed: bool,
}

impl FrontSegment {
    pub fn new(start: PointId, end: PointId, length: f64) -> Self {
        FrontSegment {
            start,
            end,
            length,
            tried_at: None,
            removed: false,
        }
    }

    #[inline]
    pub fn is_checked(&self, generation: u64) -> bool {
        self.tried_at == Some(generation)
    }

    #[inline]
    pub fn mark_tried(&mut self, generation: u64) {
        self.tried_at = Some(generation);
    }

    pub fn connects(&self, a: PointId, b: PointId) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }

    pub fn has_endpoint(&self, p: PointId) -> bool {
        self.start == p || self.end == p
    }

    /// The endpoint opposite `p`.
    pub fn other(&self, p: PointId) -> PointId {
        if self.start == p { self.end } else { self.start }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl PartialEq for FrontSegment {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.start, other.end)
    }
}

impl Eq for FrontSegment {}

#[derive(Debug, Clone)]
pub struct Triangle {
    /// Counter-clockwise in working coordinates.
    pub corners: [PointId; 3],
    pub removed: bool,
}

impl Triangle {
    pub fn new(corners: [PointId; 3]) -> Self {
        Triangle {
            corners,
            removed: false,
        }
    }

    pub fn edges(&self) -> [(PointId, PointId); 3] {
        let [a, b, c] = self.corners;
        [(a, b), (b, c), (c, a)]
    }

    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.corners;
        a == b || b == c || c == a
    }
}

/// Total order over segment lengths for the front's ordered set.
#[derive(Clone, Copy, Debug)]
pub struct LengthKey(pub f64);

impl PartialEq for LengthKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LengthKey {}

impl PartialOrd for LengthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LengthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
