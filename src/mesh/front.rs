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

use std::collections::BTreeSet;

use ahash::AHashSet;
use smallvec::SmallVec;

use crate::{
    geometry::Point2,
    mesh::{
        basic_types::{LengthKey, PointId, SegmentId},
        core::MeshArena,
        spatial_index::SpatialIndex,
    },
};

/// Result of a horizontal ray cast against the segments of a front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crossings {
    pub left: usize,
    pub right: usize,
    /// A segment crosses the ray's line exactly at the query point.
    pub on_edge: bool,
}

impl Crossings {
    pub fn merge(self, other: Crossings) -> Crossings {
        Crossings {
            left: self.left + other.left,
            right: self.right + other.right,
            on_edge: self.on_edge || other.on_edge,
        }
    }

    /// Even-odd rule on the rightward ray.
    pub fn is_inside(&self) -> bool {
        !self.on_edge && self.right % 2 == 1
    }
}

/// A closed loop (or several loops after a join) of directed segments still to
/// be meshed, ordered by length, plus an index of the points on it.
#[derive(Debug, Clone)]
pub struct Front {
    segments: BTreeSet<(LengthKey, SegmentId)>,
    index: SpatialIndex,
    points: AHashSet<PointId>,
}

impl Front {
    pub fn new(index: SpatialIndex) -> Self {
        Front {
            segments: BTreeSet::new(),
            index,
            points: AHashSet::new(),
        }
    }

    pub fn add_segment(&mut self, arena: &mut MeshArena, start: PointId, end: PointId) -> SegmentId {
        let sid = arena.new_segment(start, end);
        self.track(arena, sid);
        sid
    }

    fn track(&mut self, arena: &MeshArena, sid: SegmentId) {
        let seg = arena.segment(sid);
        self.segments.insert((LengthKey(seg.length), sid));
        for p in [seg.start, seg.end] {
            self.track_point(arena, p);
        }
    }

    fn track_point(&mut self, arena: &MeshArena, p: PointId) {
        if self.points.insert(p) {
            self.index.insert(p, arena.position(p));
        }
    }

    /// Removes `sid` from the front and retires it. Endpoints that no other
    /// segment of this front references leave the point index.
    pub fn remove_segment(&mut self, arena: &mut MeshArena, sid: SegmentId) -> bool {
        let seg = arena.segment(sid);
        let (start, end) = (seg.start, seg.end);
        if !self.segments.remove(&(LengthKey(seg.length), sid)) {
            return false;
        }
        arena.retire_segment(sid);
        for p in [start, end] {
            self.evict_if_orphaned(arena, p);
        }
        true
    }

    fn evict_if_orphaned(&mut self, arena: &MeshArena, p: PointId) {
        let referenced = arena
            .vertex(p)
            .segments
            .iter()
            .any(|s| self.owns(arena, *s));
        if !referenced && self.points.remove(&p) {
            self.index.remove(p, &arena.position(p));
        }
    }

    pub fn owns(&self, arena: &MeshArena, sid: SegmentId) -> bool {
        let seg = arena.segment(sid);
        !seg.removed && self.segments.contains(&(LengthKey(seg.length), sid))
    }

    /// Shortest segment not yet tried in `generation`.
    pub fn shortest_unattempted(&self, arena: &MeshArena, generation: u64) -> Option<SegmentId> {
        self.segments
            .iter()
            .map(|(_, sid)| *sid)
            .find(|sid| !arena.segment(*sid).is_checked(generation))
    }

    /// Segment equal to `(a, b)` in either direction, searched among the
    /// segments incident on points within `proximity_rings` of `a`.
    pub fn find_segment(
        &self,
        arena: &MeshArena,
        a: PointId,
        b: PointId,
        proximity_rings: usize,
    ) -> Option<SegmentId> {
        self.index
            .points_within_rings(&arena.position(a), proximity_rings)
            .into_iter()
            .filter(|p| *p == a)
            .flat_map(move |p| arena.vertex(p).segments.iter().copied())
            .find(|s| arena.segment(*s).connects(a, b) && self.owns(arena, *s))
    }

    pub fn contains(&self, arena: &MeshArena, a: PointId, b: PointId, proximity_rings: usize) -> bool {
        self.find_segment(arena, a, b, proximity_rings).is_some()
    }

    /// Casts a horizontal ray through `p` and counts segment crossings on
    /// either side of it.
    pub fn crossings(&self, arena: &MeshArena, p: &Point2) -> Crossings {
        let mut out = Crossings::default();
        for (_, sid) in &self.segments {
            let seg = arena.segment(*sid);
            let a = arena.position(seg.start);
            let b = arena.position(seg.end);
            if (a.y() > p.y()) == (b.y() > p.y()) {
                continue;
            }
            let x = a.x() + (p.y() - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
            if x == p.x() {
                out.on_edge = true;
            } else if x > p.x() {
                out.right += 1;
            } else {
                out.left += 1;
            }
        }
        out
    }

    pub fn is_point_inside(&self, arena: &MeshArena, p: &Point2) -> bool {
        self.crossings(arena, p).is_inside()
    }

    /// Replaces `p1` and `p2` by `merged` in every segment of the front and in
    /// the point index. Triangle corners are relabelled by the arena.
    pub fn replace_points(&mut self, arena: &mut MeshArena, p1: PointId, p2: PointId, merged: PointId) {
        let mut affected: SmallVec<[SegmentId; 8]> = SmallVec::new();
        for p in [p1, p2] {
            for sid in &arena.vertex(p).segments {
                if self.owns(arena, *sid) && !affected.contains(sid) {
                    affected.push(*sid);
                }
            }
        }
        for sid in &affected {
            self.segments
                .remove(&(LengthKey(arena.segment(*sid).length), *sid));
        }

        for p in [p1, p2] {
            if p == merged {
                continue;
            }
            if self.points.remove(&p) {
                self.index.remove(p, &arena.position(p));
            }
            arena.relabel_point(p, merged);
        }

        self.track_point(arena, merged);
        for sid in affected {
            self.segments
                .insert((LengthKey(arena.segment(sid).length), sid));
        }
    }

    /// Absorbs every segment and point of `other`.
    pub fn join(&mut self, other: Front, arena: &MeshArena) {
        self.segments.extend(other.segments);
        let mut absorbed: Vec<PointId> = other.points.into_iter().collect();
        absorbed.sort_unstable();
        for p in absorbed {
            self.track_point(arena, p);
        }
    }

    /// Segments of this front leaving `p`.
    pub fn outgoing(&self, arena: &MeshArena, p: PointId) -> SmallVec<[SegmentId; 4]> {
        arena
            .vertex(p)
            .segments
            .iter()
            .copied()
            .filter(|s| arena.segment(*s).start == p && self.owns(arena, *s))
            .collect()
    }

    /// Segment ids in ascending length order.
    pub fn segments(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.segments.iter().map(|(_, sid)| *sid)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Points on the front, in index order.
    pub fn points(&self) -> Vec<PointId> {
        self.index.all_points()
    }

    pub fn has_point(&self, p: PointId) -> bool {
        self.points.contains(&p)
    }

    pub fn longest_segment(&self) -> f64 {
        self.segments.last().map_or(0.0, |(len, _)| len.0)
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Aabb2;

    fn square_front(arena: &mut MeshArena) -> (Front, Vec<PointId>) {
        let coords = [(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)];
        let ids: Vec<PointId> = coords
            .iter()
            .map(|&(x, y)| arena.add_point(Point2::new(x, y), None, true).0)
            .collect();
        let bounds = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0));
        let mut front = Front::new(SpatialIndex::with_bounds(&bounds, 1.0, 1.3));
        for i in 0..ids.len() {
            front.add_segment(arena, ids[i], ids[(i + 1) % ids.len()]);
        }
        (front, ids)
    }

    #[test]
    fn shortest_first_and_generation_reset() {
        let mut arena = MeshArena::new();
        let (front, ids) = square_front(&mut arena);

        let first = front.shortest_unattempted(&arena, 0).unwrap();
        assert!((arena.segment(first).length - 1.0).abs() < 1e-12);
        arena.segment_mut(first).mark_tried(0);

        let second = front.shortest_unattempted(&arena, 0).unwrap();
        assert_ne!(first, second);
        assert!((arena.segment(second).length - 1.0).abs() < 1e-12);
        arena.segment_mut(second).mark_tried(0);

        let third = front.shortest_unattempted(&arena, 0).unwrap();
        assert!((arena.segment(third).length - 2.0).abs() < 1e-12);

        // a new generation makes every segment eligible again
        assert_eq!(front.shortest_unattempted(&arena, 1), Some(first));
        assert!(front.contains(&arena, ids[1], ids[0], 1));
        assert!(!front.contains(&arena, ids[0], ids[2], 1));
    }

    #[test]
    fn removal_evicts_orphaned_points() {
        let mut arena = MeshArena::new();
        let (mut front, ids) = square_front(&mut arena);
        let s = front.find_segment(&arena, ids[0], ids[1], 1).unwrap();

        assert!(front.remove_segment(&mut arena, s));
        assert!(!front.remove_segment(&mut arena, s));
        assert!(front.has_point(ids[0]));

        let s = front.find_segment(&arena, ids[3], ids[0], 1).unwrap();
        front.remove_segment(&mut arena, s);
        assert!(!front.has_point(ids[0]));
        assert_eq!(front.points().len(), 3);
        assert_eq!(front.segment_count(), 2);
    }

    #[test]
    fn ray_cast_inside_test() {
        let mut arena = MeshArena::new();
        let (front, _) = square_front(&mut arena);

        assert!(front.is_point_inside(&arena, &Point2::new(0.5, 0.5)));
        assert!(!front.is_point_inside(&arena, &Point2::new(3.0, 0.5)));
        assert!(!front.is_point_inside(&arena, &Point2::new(-1.0, 0.5)));
        // exactly on the right edge
        assert!(!front.is_point_inside(&arena, &Point2::new(2.0, 0.5)));

        let c = front.crossings(&arena, &Point2::new(1.0, 0.25));
        assert_eq!((c.left, c.right), (1, 1));
    }

    #[test]
    fn replace_points_retargets_segments() {
        let mut arena = MeshArena::new();
        let (mut front, ids) = square_front(&mut arena);
        let (m, _) = arena.add_point(Point2::new(1.0, 0.5), None, false);

        front.replace_points(&mut arena, ids[2], ids[3], m);
        assert!(!front.has_point(ids[2]));
        assert!(!front.has_point(ids[3]));
        assert!(front.has_point(m));
        assert!(front.contains(&arena, ids[1], m, 1));
        assert!(front.contains(&arena, m, ids[0], 1));
        assert_eq!(front.segment_count(), 4);

        // the former top edge collapsed to a zero-length segment
        let shortest = front.segments().next().unwrap();
        assert!(arena.segment(shortest).is_degenerate());
    }

    #[test]
    fn join_absorbs_other_front() {
        let mut arena = MeshArena::new();
        let (mut a, _) = square_front(&mut arena);
        let (p, _) = arena.add_point(Point2::new(0.5, 0.5), None, false);
        let (q, _) = arena.add_point(Point2::new(1.0, 0.5), None, false);
        let bounds = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0));
        let mut b = Front::new(SpatialIndex::with_bounds(&bounds, 1.0, 1.3));
        b.add_segment(&mut arena, p, q);

        a.join(b, &arena);
        assert_eq!(a.segment_count(), 5);
        assert!(a.has_point(p));
        assert!(a.has_point(q));
        assert_eq!(a.points().len(), 6);
    }
}
