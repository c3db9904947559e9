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

//! Front reduction, run when no front segment can be advanced.

use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace, warn};

use crate::{
    error::{MeshError, MeshResult},
    geometry::{Point2, point::PointOps, util::interior_angle},
    kernel::{Orientation, orient2d, orient2d_sign},
    mesh::{PointId, SegmentId, TriangleId},
    operations::triangulation::advancing_front::TriangulationEngine,
};

/// What a reduction step did to the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// A directed 3-cycle was closed by a triangle.
    ClosedCycle(TriangleId),
    /// A sharp corner was cut off by a triangle.
    Bridged(TriangleId),
    /// No sharp corner could be contracted, so the fullest valid corner was
    /// cut off by a triangle.
    ClippedEar(TriangleId),
    /// The two neighbours of a sharp corner were merged into this point.
    Merged(PointId),
    /// Zero-length segments and 2-cycles were removed.
    Purged(usize),
}

impl Reduction {
    pub fn triangle(&self) -> Option<TriangleId> {
        match self {
            Reduction::ClosedCycle(t) | Reduction::Bridged(t) | Reduction::ClippedEar(t) => {
                Some(*t)
            }
            Reduction::Merged(_) | Reduction::Purged(_) => None,
        }
    }
}

impl TriangulationEngine {
    /// Applies the first applicable reduction: degenerate purge, 3-cycle
    /// closure, sharp-angle contraction, then ear clipping.
    pub fn reduce(&mut self) -> MeshResult<Reduction> {
        let remaining = self.segment_count();
        warn!(remaining, generation = self.generation, "front stalled, reducing");

        let purged = self.purge_degenerate();
        if purged > 0 {
            self.finish_reduction();
            return Ok(Reduction::Purged(purged));
        }

        if remaining < 3 {
            return Err(MeshError::FrontInconsistent {
                remaining,
                detail: "fewer than three segments left".into(),
            });
        }

        for fi in 0..self.fronts.len() {
            if let Some(t) = self.close_three_cycle(fi) {
                return Ok(Reduction::ClosedCycle(t));
            }
        }
        for fi in 0..self.fronts.len() {
            if let Some(r) = self.contract_sharp_angle(fi) {
                return Ok(r);
            }
        }
        if let Some(t) = self.clip_ear() {
            return Ok(Reduction::ClippedEar(t));
        }

        Err(MeshError::FrontInconsistent {
            remaining,
            detail: "no 3-cycle, sharp corner or ear to contract".into(),
        })
    }

    fn finish_reduction(&mut self) {
        self.generation += 1;
        self.fronts.retain(|f| !f.is_empty());
    }

    /// Removes zero-length segments and pairs of opposite segments.
    fn purge_degenerate(&mut self) -> usize {
        let mut removed = 0;
        for fi in 0..self.fronts.len() {
            let ids: Vec<SegmentId> = self.fronts[fi].segments().collect();
            for sid in ids {
                if !self.fronts[fi].owns(&self.arena, sid) {
                    continue;
                }
                let seg = self.arena.segment(sid);
                if seg.is_degenerate() {
                    self.fronts[fi].remove_segment(&mut self.arena, sid);
                    removed += 1;
                    continue;
                }

                let (start, end) = (seg.start, seg.end);
                let twin = self.fronts[fi]
                    .outgoing(&self.arena, end)
                    .into_iter()
                    .find(|t| *t != sid && self.arena.segment(*t).end == start);
                if let Some(twin) = twin {
                    self.fronts[fi].remove_segment(&mut self.arena, sid);
                    self.fronts[fi].remove_segment(&mut self.arena, twin);
                    removed += 2;
                }
            }
        }
        if removed > 0 {
            debug!(removed, "degenerate front segments purged");
        }
        removed
    }

    fn close_three_cycle(&mut self, fi: usize) -> Option<TriangleId> {
        let ids: Vec<SegmentId> = self.fronts[fi].segments().collect();
        for s1 in ids {
            let seg = self.arena.segment(s1);
            let (a, b) = (seg.start, seg.end);
            for s2 in self.fronts[fi].outgoing(&self.arena, b) {
                let c = self.arena.segment(s2).end;
                if c == a || c == b {
                    continue;
                }
                for s3 in self.fronts[fi].outgoing(&self.arena, c) {
                    if self.arena.segment(s3).end != a {
                        continue;
                    }
                    let pa = self.arena.position(a);
                    let pb = self.arena.position(b);
                    let pc = self.arena.position(c);
                    if orient2d_sign(&pa, &pb, &pc) != Orientation::CounterClockwise
                        || self.encloses_front_point(&pa, &pb, &pc, &[a, b, c])
                    {
                        continue;
                    }

                    for s in [s1, s2, s3] {
                        self.fronts[fi].remove_segment(&mut self.arena, s);
                    }
                    let t = self.arena.add_triangle([a, b, c]);
                    self.stats.three_cycles += 1;
                    self.finish_reduction();
                    debug!(triangle = t.0, "3-cycle closed");
                    return Some(t);
                }
            }
        }
        None
    }

    fn contract_sharp_angle(&mut self, fi: usize) -> Option<Reduction> {
        let threshold = self.params.sharp_angle();
        let ids: Vec<SegmentId> = self.fronts[fi].segments().collect();
        for s1 in ids {
            let seg = self.arena.segment(s1);
            let (p, q) = (seg.start, seg.end);
            for s2 in self.fronts[fi].outgoing(&self.arena, q) {
                let r = self.arena.segment(s2).end;
                if r == p || r == q {
                    continue;
                }
                let angle = interior_angle(
                    &self.arena.position(p),
                    &self.arena.position(q),
                    &self.arena.position(r),
                );
                if angle >= threshold {
                    continue;
                }

                if !(self.arena.is_boundary(p) && self.arena.is_boundary(r)) {
                    if let Some(m) = self.merge(fi, p, r) {
                        return Some(Reduction::Merged(m));
                    }
                }
                if let Some(t) = self.bridge(fi, [s1, s2], [p, q, r]) {
                    self.stats.bridges += 1;
                    return Some(Reduction::Bridged(t));
                }
            }
        }
        None
    }

    /// Cuts off the fullest valid corner of any front, by triangle area over
    /// squared longest side.
    fn clip_ear(&mut self) -> Option<TriangleId> {
        let mut ears: Vec<(f64, usize, [SegmentId; 2], [PointId; 3])> = Vec::new();
        for (fi, front) in self.fronts.iter().enumerate() {
            for s1 in front.segments() {
                let (p, q) = (self.arena.segment(s1).start, self.arena.segment(s1).end);
                for s2 in front.outgoing(&self.arena, q) {
                    let r = self.arena.segment(s2).end;
                    if r == p || r == q {
                        continue;
                    }
                    let pp = self.arena.position(p);
                    let pq = self.arena.position(q);
                    let pr = self.arena.position(r);
                    let longest = pp
                        .distance_to(&pq)
                        .max(pq.distance_to(&pr))
                        .max(pp.distance_to(&pr));
                    let fullness = orient2d(&pp, &pq, &pr) / (longest * longest);
                    ears.push((fullness, fi, [s1, s2], [p, q, r]));
                }
            }
        }
        ears.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (_, fi, sides, corners) in ears {
            if let Some(t) = self.bridge(fi, sides, corners) {
                self.stats.ear_clips += 1;
                return Some(t);
            }
        }
        None
    }

    /// Cuts off the corner `p -> q -> r` with triangle `(p, q, r)`, leaving
    /// the bridge `p -> r` on the front.
    fn bridge(&mut self, fi: usize, sides: [SegmentId; 2], [p, q, r]: [PointId; 3]) -> Option<TriangleId> {
        let pp = self.arena.position(p);
        let pq = self.arena.position(q);
        let pr = self.arena.position(r);
        if orient2d_sign(&pp, &pq, &pr) != Orientation::CounterClockwise {
            return None;
        }

        let closing = match self.find_on_fronts(p, r) {
            Some((f, s)) => {
                let seg = self.arena.segment(s);
                if seg.start != r || seg.end != p {
                    return None;
                }
                Some((f, s))
            }
            None => {
                if !self.edge_is_free(&pp, &pr, Some(p), Some(r)) || !self.is_inside(&pp.midpoint(&pr)) {
                    return None;
                }
                None
            }
        };
        if self.encloses_front_point(&pp, &pq, &pr, &[p, q, r]) {
            return None;
        }

        for s in sides {
            self.fronts[fi].remove_segment(&mut self.arena, s);
        }
        match closing {
            Some((f, s)) => {
                self.fronts[f].remove_segment(&mut self.arena, s);
            }
            None => {
                let s = self.fronts[fi].add_segment(&mut self.arena, p, r);
                self.max_edge = self.max_edge.max(self.arena.segment(s).length);
            }
        }

        let t = self.arena.add_triangle([p, q, r]);
        self.finish_reduction();
        debug!(triangle = t.0, "corner bridged");
        Some(t)
    }

    /// Merges `p` and `r` into the boundary one of them, or into their
    /// midpoint when neither is a boundary point. When the midpoint would
    /// fold the mesh, `p` and then `r` are tried as targets instead.
    fn merge(&mut self, fi: usize, p: PointId, r: PointId) -> Option<PointId> {
        let target = self
            .merge_targets(p, r)
            .into_iter()
            .find(|t| self.merge_keeps_mesh_valid(t))?;

        let merged = match target.id {
            Some(id) => id,
            None => {
                let (id, created) = self.arena.add_point(target.position, None, false);
                if created {
                    self.stats.created_points += 1;
                }
                id
            }
        };

        self.fronts[fi].replace_points(&mut self.arena, p, r, merged);
        let longest = self
            .arena
            .vertex(merged)
            .segments
            .iter()
            .map(|s| self.arena.segment(*s).length)
            .fold(self.max_edge, f64::max);
        self.max_edge = longest;

        self.stats.merges += 1;
        self.stats.merged_points += target.moving.len();
        self.purge_degenerate();
        self.finish_reduction();
        debug!(merged = merged.0, moved = target.moving.len(), "sharp corner contracted");
        Some(merged)
    }

    fn merge_targets(&self, p: PointId, r: PointId) -> SmallVec<[MergeTarget; 3]> {
        let at = |id: PointId, other: PointId| MergeTarget {
            id: Some(id),
            position: self.arena.position(id),
            moving: smallvec![other],
        };
        if self.arena.is_boundary(p) {
            return smallvec![at(p, r)];
        }
        if self.arena.is_boundary(r) {
            return smallvec![at(r, p)];
        }

        let mid = self.arena.position(p).midpoint(&self.arena.position(r));
        let mut targets = SmallVec::new();
        match self.arena.find_point(&mid) {
            None => targets.push(MergeTarget {
                id: None,
                position: mid,
                moving: smallvec![p, r],
            }),
            Some(id) if id != p && id != r && self.owner_of(id).is_some() => {
                targets.push(MergeTarget {
                    id: Some(id),
                    position: mid,
                    moving: smallvec![p, r],
                })
            }
            Some(_) => {}
        }
        targets.push(at(p, r));
        targets.push(at(r, p));
        targets
    }

    /// Checks a merge before anything moves: every triangle on a moving
    /// point must stay counter-clockwise, and every relabelled front segment
    /// must neither cross the mesh nor sweep over a front point.
    fn merge_keeps_mesh_valid(&self, target: &MergeTarget) -> bool {
        let moving = &target.moving[..];
        let label = |x: PointId| if moving.contains(&x) { target.id } else { Some(x) };
        let position = |x: PointId| {
            if moving.contains(&x) {
                target.position
            } else {
                self.arena.position(x)
            }
        };

        for &m in moving {
            for &t in &self.arena.vertex(m).triangles {
                let corners = self.arena.triangle(t).corners;
                let [a, b, c] = corners.map(label);
                if a == b || b == c || a == c {
                    continue;
                }
                let [pa, pb, pc] = corners.map(position);
                if orient2d_sign(&pa, &pb, &pc) != Orientation::CounterClockwise {
                    trace!(triangle = t.0, "merge would fold a triangle");
                    return false;
                }
            }
        }

        let mut moved: SmallVec<[(SegmentId, PointId, PointId); 8]> = SmallVec::new();
        for &m in moving {
            for &sid in &self.arena.vertex(m).segments {
                if !moved.iter().any(|(s, _, _)| *s == sid) {
                    moved.push((sid, m, self.arena.segment(sid).other(m)));
                }
            }
        }
        let relabelled: SmallVec<[(Option<PointId>, Option<PointId>); 8]> = moved
            .iter()
            .map(|(sid, _, _)| {
                let seg = self.arena.segment(*sid);
                (label(seg.start), label(seg.end))
            })
            .filter(|(a, b)| a != b)
            .collect();

        let mut skip: SmallVec<[PointId; 4]> = moving.iter().copied().collect();
        skip.extend(target.id);
        for &(sid, m, u) in &moved {
            let seg = self.arena.segment(sid);
            let (a, b) = (label(seg.start), label(seg.end));
            if a == b || relabelled.contains(&(b, a)) {
                continue;
            }
            if relabelled.iter().filter(|e| **e == (a, b)).count() > 1 {
                return false;
            }
            if let Some(t) = target.id {
                if let Some((_, existing)) = self.find_on_fronts(u, t) {
                    if Some(self.arena.segment(existing).start) == b {
                        continue;
                    }
                    return false;
                }
            }

            let pu = self.arena.position(u);
            if !self.edge_is_free_except(&pu, &target.position, Some(u), target.id, &skip) {
                trace!(segment = sid.0, "merged segment would cross the mesh");
                return false;
            }
            let pm = self.arena.position(m);
            if orient2d_sign(&pu, &pm, &target.position) != Orientation::Collinear {
                let mut exclude = skip.clone();
                exclude.push(u);
                if self.encloses_front_point(&pu, &pm, &target.position, &exclude) {
                    trace!(segment = sid.0, "merged segment would sweep a front point");
                    return false;
                }
            }
        }
        true
    }
}

/// Where a merge sends its moving points. `id` is `None` for a midpoint that
/// does not exist yet.
#[derive(Debug, Clone)]
struct MergeTarget {
    id: Option<PointId>,
    position: Point2,
    moving: SmallVec<[PointId; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        contour::Region,
        geometry::{Point2, Point3},
        params::AdvancingFrontParams,
    };

    fn engine(points: &[(f64, f64)]) -> TriangulationEngine {
        let region = Region::polygon(
            points
                .iter()
                .map(|&(x, y)| Point3::new(x, y, 0.0))
                .collect(),
        );
        TriangulationEngine::new(&region, AdvancingFrontParams::default()).unwrap()
    }

    #[test]
    fn triangle_front_closes_as_cycle() {
        let mut e = engine(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let r = e.reduce().unwrap();
        assert!(matches!(r, Reduction::ClosedCycle(_)));
        assert_eq!(e.segment_count(), 0);
        assert_eq!(e.stats().three_cycles, 1);
        assert_eq!(e.arena().triangle_count(), 1);
    }

    #[test]
    fn sharp_boundary_corner_is_bridged() {
        let mut e = engine(&[(0.0, 0.0), (10.0, -1.0), (11.0, 0.0), (10.0, 1.0)]);
        let r = e.reduce().unwrap();
        assert!(matches!(r, Reduction::Bridged(_)));
        assert_eq!(e.segment_count(), 3);
        assert_eq!(e.arena().triangle_count(), 1);
        assert_eq!(e.stats().bridges, 1);
    }

    #[test]
    fn interior_corner_is_merged() {
        let mut e = engine(&[(0.0, 0.0), (10.0, -1.0), (11.0, 0.0), (10.0, 1.0)]);
        let far = e.arena.find_point(&Point2::new(10.0, 1.0)).unwrap();
        e.arena.set_boundary(far, false);

        let r = e.reduce().unwrap();
        let Reduction::Merged(m) = r else {
            panic!("expected a merge, got {r:?}");
        };
        // (10, -1) stays a boundary point and absorbs (10, 1)
        assert_eq!(e.arena().position(m), Point2::new(10.0, -1.0));
        assert!(e.arena().vertex(far).removed);
        assert_eq!(e.stats().merged_points, 1);
        // the spike collapsed into two 2-cycles that were purged
        assert_eq!(e.segment_count(), 0);
    }

    #[test]
    fn interior_pair_merges_at_midpoint() {
        let mut e = engine(&[(0.0, 0.0), (10.0, -1.0), (11.0, 0.0), (10.0, 1.0)]);
        for (x, y) in [(10.0, 1.0), (10.0, -1.0)] {
            let id = e.arena.find_point(&Point2::new(x, y)).unwrap();
            e.arena.set_boundary(id, false);
        }

        let Reduction::Merged(m) = e.reduce().unwrap() else {
            panic!("expected a merge");
        };
        assert_eq!(e.arena().position(m), Point2::new(10.0, 0.0));
        assert_eq!(e.stats().created_points, 1);
        assert_eq!(e.stats().merged_points, 2);
        assert_eq!(e.segment_count(), 0);
    }

    #[test]
    fn merge_that_would_fold_a_triangle_is_refused() {
        // (9, 0) is a reflex corner and the notch behind it is already meshed
        let mut e = engine(&[(0.0, 0.0), (10.0, -1.0), (9.0, 0.0), (10.0, 1.0)]);
        let id = |e: &TriangulationEngine, x, y| e.arena.find_point(&Point2::new(x, y)).unwrap();
        let (b, c, d) = (id(&e, 10.0, -1.0), id(&e, 9.0, 0.0), id(&e, 10.0, 1.0));
        e.arena.set_boundary(d, false);
        let (z, _) = e.arena.add_point(Point2::new(10.5, 0.0), None, false);
        e.arena.add_triangle([d, c, z]);
        e.arena.add_triangle([c, b, z]);

        // (10, 1) moved onto (10, -1) would turn (d, c, z) clockwise
        assert_eq!(e.merge(0, d, b), None);
        assert!(!e.arena().vertex(d).removed);
        assert_eq!(e.stats().merges, 0);
        assert_eq!(e.segment_count(), 4);

        let r = e.reduce().unwrap();
        assert!(matches!(r, Reduction::ClippedEar(_)), "got {r:?}");
        assert_eq!(e.stats().merges, 0);
        for (t, tri) in e.arena().live_triangles() {
            let [pa, pb, pc] = tri.corners.map(|c| e.arena().position(c));
            assert_eq!(
                orient2d_sign(&pa, &pb, &pc),
                Orientation::CounterClockwise,
                "triangle {t:?} folded"
            );
        }
    }

    #[test]
    fn merge_raises_the_longest_edge() {
        let mut e = engine(&[(0.0, 0.0), (10.0, -1.0), (20.0, 5.0), (10.0, 11.0), (10.0, 1.0)]);
        let d = e.arena.find_point(&Point2::new(10.0, 1.0)).unwrap();
        e.arena.set_boundary(d, false);
        let before = e.max_edge;

        let r = e.reduce().unwrap();
        assert!(matches!(r, Reduction::Merged(_)), "got {r:?}");
        // (10, 11) -> (10, 1) is now (10, 11) -> (10, -1)
        assert_eq!(e.segment_count(), 3);
        assert!(before < 12.0);
        assert!((e.max_edge - 12.0).abs() < 1e-12);
        assert!(e.max_edge >= e.fronts[0].longest_segment());
    }

    #[test]
    fn square_without_sharp_corner_is_clipped() {
        let mut e = engine(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let r = e.reduce().unwrap();
        assert!(matches!(r, Reduction::ClippedEar(_)), "got {r:?}");
        assert_eq!(e.segment_count(), 3);
        assert_eq!(e.arena().triangle_count(), 1);
        assert_eq!(e.stats().ear_clips, 1);
        assert_eq!(e.stats().reductions(), 1);
    }

    #[test]
    fn two_segments_are_inconsistent() {
        let mut e = engine(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let ids: Vec<SegmentId> = e.fronts[0].segments().collect();
        let arena = &mut e.arena;
        e.fronts[0].remove_segment(arena, ids[0]);

        let err = e.reduce().unwrap_err();
        assert!(matches!(err, MeshError::FrontInconsistent { remaining: 2, .. }));
    }
}
