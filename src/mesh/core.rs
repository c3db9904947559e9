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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    geometry::{Point2, Point3, point::PointOps},
    mesh::basic_types::{FrontSegment, PointId, SegmentId, Triangle, TriangleId, Vertex},
};

/// Owner of every point, segment and triangle created during meshing.
///
/// Entities are never deallocated; removal only flags them so that handles
/// stay valid for the lifetime of the arena.
#[derive(Debug, Clone, Default)]
pub struct MeshArena {
    vertices: Vec<Vertex>,
    segments: Vec<FrontSegment>,
    triangles: Vec<Triangle>,
    lookup: AHashMap<[u64; 2], PointId>,
}

#[inline]
fn coord_key(p: &Point2) -> [u64; 2] {
    // adding 0.0 folds -0.0 into 0.0
    [(p.x() + 0.0).to_bits(), (p.y() + 0.0).to_bits()]
}

impl MeshArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point, returning the existing handle if a live point with the
    /// same coordinates is already present. The flag tells whether the point
    /// was created.
    pub fn add_point(
        &mut self,
        position: Point2,
        original: Option<Point3>,
        is_boundary: bool,
    ) -> (PointId, bool) {
        let key = coord_key(&position);
        if let Some(&id) = self.lookup.get(&key) {
            let v = &mut self.vertices[id.0];
            v.is_boundary |= is_boundary;
            if v.original.is_none() {
                v.original = original;
            }
            return (id, false);
        }

        let id = PointId(self.vertices.len());
        self.vertices
            .push(Vertex::new(position, original, is_boundary));
        self.lookup.insert(key, id);
        (id, true)
    }

    pub fn find_point(&self, position: &Point2) -> Option<PointId> {
        self.lookup.get(&coord_key(position)).copied()
    }

    #[inline]
    pub fn vertex(&self, id: PointId) -> &Vertex {
        &self.vertices[id.0]
    }

    #[inline]
    pub fn position(&self, id: PointId) -> Point2 {
        self.vertices[id.0].position
    }

    #[inline]
    pub fn is_boundary(&self, id: PointId) -> bool {
        self.vertices[id.0].is_boundary
    }

    #[cfg(test)]
    pub(crate) fn set_boundary(&mut self, id: PointId, is_boundary: bool) {
        self.vertices[id.0].is_boundary = is_boundary;
    }

    #[inline]
    pub fn segment(&self, id: SegmentId) -> &FrontSegment {
        &self.segments[id.0]
    }

    #[inline]
    pub fn segment_mut(&mut self, id: SegmentId) -> &mut FrontSegment {
        &mut self.segments[id.0]
    }

    #[inline]
    pub fn triangle(&self, id: TriangleId) -> &Triangle {
        &self.triangles[id.0]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn new_segment(&mut self, start: PointId, end: PointId) -> SegmentId {
        let length = self.position(start).distance_to(&self.position(end));
        let id = SegmentId(self.segments.len());
        self.segments.push(FrontSegment::new(start, end, length));
        self.vertices[start.0].segments.push(id);
        if end != start {
            self.vertices[end.0].segments.push(id);
        }
        id
    }

    /// Flags a segment as removed and drops its point back-references.
    pub fn retire_segment(&mut self, id: SegmentId) {
        let seg = &mut self.segments[id.0];
        if seg.removed {
            return;
        }
        seg.removed = true;
        let (start, end) = (seg.start, seg.end);
        self.vertices[start.0].segments.retain(|s| *s != id);
        self.vertices[end.0].segments.retain(|s| *s != id);
    }

    pub fn add_triangle(&mut self, corners: [PointId; 3]) -> TriangleId {
        let id = TriangleId(self.triangles.len());
        self.triangles.push(Triangle::new(corners));
        for c in corners {
            self.vertices[c.0].triangles.push(id);
        }
        id
    }

    /// Moves every reference of `from` onto `to` and retires `from`.
    ///
    /// Segment lengths are recomputed. Triangles that lose a corner are
    /// flagged as removed. Returns the segments whose endpoints changed.
    pub fn relabel_point(&mut self, from: PointId, to: PointId) -> SmallVec<[SegmentId; 4]> {
        if from == to {
            return SmallVec::new();
        }

        let moved_segments = std::mem::take(&mut self.vertices[from.0].segments);
        for &sid in &moved_segments {
            let seg = &mut self.segments[sid.0];
            if seg.start == from {
                seg.start = to;
            }
            if seg.end == from {
                seg.end = to;
            }
            let (start, end) = (seg.start, seg.end);
            seg.length = self.vertices[start.0]
                .position
                .distance_to(&self.vertices[end.0].position);
            if !self.vertices[to.0].segments.contains(&sid) {
                self.vertices[to.0].segments.push(sid);
            }
        }

        let moved_triangles = std::mem::take(&mut self.vertices[from.0].triangles);
        for tid in moved_triangles {
            let tri = &mut self.triangles[tid.0];
            for c in tri.corners.iter_mut() {
                if *c == from {
                    *c = to;
                }
            }
            if tri.is_degenerate() {
                tri.removed = true;
                let corners = tri.corners;
                for c in corners {
                    self.vertices[c.0].triangles.retain(|t| *t != tid);
                }
            } else {
                self.vertices[to.0].triangles.push(tid);
            }
        }

        let v = &mut self.vertices[from.0];
        v.removed = true;
        let key = coord_key(&v.position);
        if self.lookup.get(&key) == Some(&from) {
            self.lookup.remove(&key);
        }
        moved_segments
    }

    pub fn live_triangles(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> {
        self.triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.removed)
            .map(|(i, t)| (TriangleId(i), t))
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.iter().filter(|t| !t.removed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_deduplicated_by_value() {
        let mut arena = MeshArena::new();
        let (a, created_a) = arena.add_point(Point2::new(1.0, 2.0), None, false);
        let (b, created_b) = arena.add_point(Point2::new(1.0, 2.0), None, true);
        let (c, _) = arena.add_point(Point2::new(0.0, -0.0), None, false);

        assert!(created_a);
        assert!(!created_b);
        assert_eq!(a, b);
        assert!(arena.is_boundary(a));
        assert_eq!(arena.find_point(&Point2::new(-0.0, 0.0)), Some(c));
    }

    #[test]
    fn relabel_collapses_triangles() {
        let mut arena = MeshArena::new();
        let (a, _) = arena.add_point(Point2::new(0.0, 0.0), None, true);
        let (b, _) = arena.add_point(Point2::new(1.0, 0.0), None, false);
        let (c, _) = arena.add_point(Point2::new(0.0, 1.0), None, false);
        let s = arena.new_segment(b, c);
        let t = arena.add_triangle([a, b, c]);

        let moved = arena.relabel_point(b, a);
        assert_eq!(moved.as_slice(), &[s]);
        assert_eq!(arena.segment(s).start, a);
        assert!((arena.segment(s).length - 1.0).abs() < 1e-12);
        assert!(arena.vertex(b).removed);
        assert!(arena.triangle(t).removed);
        assert!(arena.vertex(c).triangles.is_empty());
        assert_eq!(arena.find_point(&Point2::new(1.0, 0.0)), None);
        assert_eq!(arena.triangle_count(), 0);
    }
}
