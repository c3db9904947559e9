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

//! Advancing front triangulation.
//!
//! Triangles are grown inward from the boundary: the shortest front segment
//! that has not been tried since the last commit is used as a base, and the
//! apex is picked among nearby front points (closest to the ideal equilateral
//! apex first) or, failing that, created at the ideal position. When no
//! segment can be advanced the front is reduced (see `reduction`).

use ahash::AHashSet;
use num_traits::ToPrimitive;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::{
    contour::{ContourKind, Region},
    error::{MeshError, MeshResult},
    geometry::{
        Aabb2, PlanarFrame, Point2, Point3, Segment2, SegmentIntersection,
        point::PointOps,
        segment::SegmentOps,
        segment_segment_intersection,
        util::{SQRT_3, centroid, signed_area},
        vector::VectorOps,
    },
    kernel::{Orientation, orient2d, orient2d_sign, point_strictly_in_triangle},
    mesh::{Crossings, Front, LengthKey, MeshArena, PointId, SegmentId, SpatialIndex, TriangleId},
    operations::triangulation::{MeshStats, Triangulation},
    params::AdvancingFrontParams,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Advancing,
    Reducing,
}

/// Apex candidate for a base segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Apex {
    Existing(PointId),
    New(Point2),
}

pub struct TriangulationEngine {
    pub(super) arena: MeshArena,
    pub(super) fronts: Vec<Front>,
    pub(super) params: AdvancingFrontParams,
    pub(super) spacing: f64,
    pub(super) tolerance: f64,
    pub(super) generation: u64,
    pub(super) stats: MeshStats,
    /// Longest segment ever placed on a front; bounds the search window of
    /// the intersection test.
    pub(super) max_edge: f64,
    state: EngineState,
    frame: PlanarFrame,
    max_iterations: u64,
}

impl TriangulationEngine {
    /// Validates the region and builds one front per contour.
    pub fn new(region: &Region, params: AdvancingFrontParams) -> MeshResult<Self> {
        params.validate()?;
        if region.points().next().is_none() {
            return Err(MeshError::EmptyRegion);
        }

        let all: Vec<Point3> = region.points().copied().collect();
        let frame = PlanarFrame::fit(&all, params.coplanar_tolerance)?;

        let mut rings = Vec::with_capacity(region.contours.len());
        for (ci, contour) in region.contours.iter().enumerate() {
            let mut flat: Vec<Point2> = Vec::with_capacity(contour.points.len());
            let mut original: Vec<Point3> = Vec::with_capacity(contour.points.len());
            for p in &contour.points {
                let q = frame.project(p);
                if !q.is_finite() {
                    return Err(MeshError::DegenerateContour { contour: ci });
                }
                if flat.last() == Some(&q) {
                    continue;
                }
                flat.push(q);
                original.push(*p);
            }
            while flat.len() > 1 && flat.first() == flat.last() {
                flat.pop();
                original.pop();
            }
            if flat.len() < 3 {
                return Err(MeshError::TooFewPoints {
                    contour: ci,
                    count: flat.len(),
                });
            }

            let area = signed_area(&flat);
            let extent = Aabb2::from_points(flat.iter()).map_or(0.0, |b| b.max_extent());
            if area.abs() <= f64::EPSILON * extent * extent {
                return Err(MeshError::DegenerateContour { contour: ci });
            }
            let wants_ccw = contour.kind == ContourKind::Outer;
            if (area > 0.0) != wants_ccw {
                flat.reverse();
                original.reverse();
            }
            rings.push((flat, original, area.abs(), contour.kind));
        }

        let shortest = rings
            .iter()
            .flat_map(|(flat, _, _, _)| {
                flat.iter()
                    .zip(flat.iter().cycle().skip(1))
                    .map(|(a, b)| a.distance_to(b))
            })
            .fold(f64::INFINITY, f64::min);
        let spacing = params.ideal_spacing.unwrap_or(shortest);

        let bounds = Aabb2::from_points(rings.iter().flat_map(|(flat, _, _, _)| flat.iter()))
            .ok_or(MeshError::EmptyRegion)?;

        let mut arena = MeshArena::new();
        let mut fronts = Vec::with_capacity(rings.len());
        let mut boundary_points = 0u64;
        let mut area = 0.0;
        for (flat, original, ring_area, kind) in &rings {
            let index = SpatialIndex::with_bounds(&bounds, spacing, params.bounds_margin);
            let mut front = Front::new(index);
            let ids: Vec<PointId> = flat
                .iter()
                .zip(original)
                .map(|(p, o)| arena.add_point(*p, Some(*o), true).0)
                .collect();
            for (i, &start) in ids.iter().enumerate() {
                let end = ids[(i + 1) % ids.len()];
                if start != end {
                    front.add_segment(&mut arena, start, end);
                }
            }
            boundary_points += ids.len() as u64;
            area += match kind {
                ContourKind::Outer => *ring_area,
                ContourKind::Inner => -*ring_area,
            };
            fronts.push(front);
        }

        let estimated_triangles = (area.abs() / (SQRT_3 / 4.0 * spacing * spacing))
            .ceil()
            .to_u64()
            .unwrap_or(u64::MAX);
        let max_iterations = params.max_iterations.unwrap_or_else(|| {
            64u64
                .saturating_mul(estimated_triangles.saturating_add(16))
                .saturating_mul(boundary_points.saturating_add(16))
        });
        let max_edge = fronts.iter().map(Front::longest_segment).fold(0.0, f64::max);
        let tolerance = params.epsilon * spacing;

        debug!(
            contours = rings.len(),
            boundary_points,
            spacing,
            max_iterations,
            "advancing front initialised"
        );

        Ok(TriangulationEngine {
            arena,
            fronts,
            spacing,
            tolerance,
            generation: 0,
            stats: MeshStats {
                ideal_spacing: spacing,
                ..MeshStats::default()
            },
            max_edge,
            state: EngineState::Advancing,
            frame,
            max_iterations,
            params,
        })
    }

    /// Runs to completion, calling `progress` once per committed triangle.
    pub fn run<F: FnMut()>(mut self, mut progress: F) -> MeshResult<Triangulation> {
        let mut iterations = 0u64;
        while self.segment_count() > 0 {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(MeshError::IterationLimit {
                    iterations: self.max_iterations,
                });
            }

            match self.state {
                EngineState::Advancing => {
                    if self.advance().is_some() {
                        progress();
                    }
                }
                EngineState::Reducing => {
                    let reduction = self.reduce()?;
                    if reduction.triangle().is_some() {
                        progress();
                    }
                    self.state = EngineState::Advancing;
                }
            }
        }
        self.stats.iterations = iterations;

        let mesh = self.into_triangulation();
        info!(
            triangles = mesh.triangles.len(),
            points = mesh.points.len(),
            created = mesh.stats.created_points,
            merges = mesh.stats.merges,
            "advancing front finished"
        );
        Ok(mesh)
    }

    /// One advancing step on the shortest untried segment. Switches to
    /// [`EngineState::Reducing`] when every segment has been tried.
    pub fn advance(&mut self) -> Option<TriangleId> {
        let Some((fi, sid)) = self.shortest_unattempted() else {
            self.state = EngineState::Reducing;
            return None;
        };

        self.arena.segment_mut(sid).mark_tried(self.generation);
        let seg = self.arena.segment(sid);
        let (a, b) = (seg.start, seg.end);
        let pa = self.arena.position(a);
        let pb = self.arena.position(b);
        let ideal = self.ideal_apex(&pa, &pb);

        for apex in self.candidates(&ideal, &pa, &pb, a, b) {
            if let Some(t) = self.form_triangle(fi, sid, apex) {
                return Some(t);
            }
        }
        trace!(segment = sid.0, "no apex accepted");
        None
    }

    fn shortest_unattempted(&self) -> Option<(usize, SegmentId)> {
        self.fronts
            .iter()
            .enumerate()
            .filter_map(|(fi, f)| {
                f.shortest_unattempted(&self.arena, self.generation)
                    .map(|s| (fi, s))
            })
            .min_by(|(_, x), (_, y)| {
                LengthKey(self.arena.segment(*x).length)
                    .cmp(&LengthKey(self.arena.segment(*y).length))
                    .then(x.cmp(y))
            })
    }

    /// Apex of the equilateral triangle of side `h` over the base, on the
    /// region side.
    pub fn ideal_apex(&self, pa: &Point2, pb: &Point2) -> Point2 {
        let normal = pa.vector_to(pb).perp_left().normalized();
        pa.midpoint(pb)
            .add_vector(&normal.scale(self.spacing * SQRT_3 / 2.0))
    }

    /// Front points near the ideal apex sorted by distance to it, followed by
    /// the ideal apex itself.
    pub fn candidates(
        &self,
        ideal: &Point2,
        pa: &Point2,
        pb: &Point2,
        a: PointId,
        b: PointId,
    ) -> Vec<Apex> {
        let Some(first) = self.fronts.first() else {
            return vec![Apex::New(*ideal)];
        };
        let index = first.index();
        let center = if index.covers(ideal) {
            *ideal
        } else {
            pa.midpoint(pb)
        };
        // long bases search at least their own half-length
        let radius = (self.params.radius_multiplier * self.spacing).max(pa.distance_to(pb) * 0.5);
        let rings = self
            .params
            .search_rings
            .max(index.rings_for_radius(radius));

        let mut seen = AHashSet::new();
        let mut found: Vec<(f64, PointId)> = Vec::new();
        for front in &self.fronts {
            for p in front.index().points_within_rings(&center, rings) {
                if p == a || p == b || !seen.insert(p) {
                    continue;
                }
                found.push((self.arena.position(p).distance_to(ideal), p));
            }
        }
        found.sort_by(|x, y| x.0.total_cmp(&y.0));

        let mut out: Vec<Apex> = found.into_iter().map(|(_, p)| Apex::Existing(p)).collect();
        out.push(Apex::New(*ideal));
        out
    }

    /// Validates the triangle over `sid` with the given apex and commits it.
    /// Nothing is mutated when the triangle is rejected.
    pub fn form_triangle(&mut self, fi: usize, sid: SegmentId, apex: Apex) -> Option<TriangleId> {
        let seg = self.arena.segment(sid);
        if seg.removed {
            return None;
        }
        let (a, b, len) = (seg.start, seg.end, seg.length);
        let pa = self.arena.position(a);
        let pb = self.arena.position(b);

        let (apex_id, pc) = match apex {
            Apex::Existing(id) => (Some(id), self.arena.position(id)),
            Apex::New(p) => match self.arena.find_point(&p) {
                Some(id) if self.owner_of(id).is_some() => (Some(id), p),
                Some(_) => {
                    trace!("new apex coincides with a meshed point");
                    return None;
                }
                None => (None, p),
            },
        };
        if apex_id == Some(a) || apex_id == Some(b) {
            return None;
        }

        if orient2d_sign(&pa, &pb, &pc) != Orientation::CounterClockwise {
            trace!(segment = sid.0, "apex not left of the base");
            return None;
        }
        let longest = len.max(pa.distance_to(&pc)).max(pb.distance_to(&pc));
        if orient2d(&pa, &pb, &pc) <= self.params.sliver_ratio * longest * longest {
            trace!(segment = sid.0, "sliver rejected");
            return None;
        }
        if apex_id.is_none() && !self.fronts[fi].index().covers(&pc) {
            trace!(segment = sid.0, "new apex outside the index");
            return None;
        }

        let mut closing: SmallVec<[(usize, SegmentId); 2]> = SmallVec::new();
        for (p, q, pp, pq) in [(Some(a), apex_id, pa, pc), (apex_id, Some(b), pc, pb)] {
            if let (Some(p), Some(q)) = (p, q) {
                if let Some((f, s)) = self.find_on_fronts(p, q) {
                    let existing = self.arena.segment(s);
                    if existing.start == q && existing.end == p {
                        closing.push((f, s));
                        continue;
                    }
                    trace!(segment = sid.0, "edge runs along the front");
                    return None;
                }
            }
            if !self.edge_is_free(&pp, &pq, p, q) {
                trace!(segment = sid.0, "edge intersects the mesh");
                return None;
            }
            if !self.is_inside(&pp.midpoint(&pq)) {
                trace!(segment = sid.0, "edge leaves the region");
                return None;
            }
        }

        let corners: SmallVec<[PointId; 3]> =
            [Some(a), Some(b), apex_id].into_iter().flatten().collect();
        if self.encloses_front_point(&pa, &pb, &pc, &corners) {
            trace!(segment = sid.0, "triangle encloses a front point");
            return None;
        }

        Some(self.commit(fi, sid, apex_id, pc, &closing))
    }

    fn commit(
        &mut self,
        fi: usize,
        sid: SegmentId,
        apex_id: Option<PointId>,
        pc: Point2,
        closing: &[(usize, SegmentId)],
    ) -> TriangleId {
        let seg = self.arena.segment(sid);
        let (a, b) = (seg.start, seg.end);
        self.fronts[fi].remove_segment(&mut self.arena, sid);

        let apex = match apex_id {
            Some(id) => id,
            None => {
                let (id, _) = self.arena.add_point(pc, None, false);
                self.stats.created_points += 1;
                id
            }
        };

        for (p, q) in [(a, apex), (apex, b)] {
            let closes = closing
                .iter()
                .any(|(_, s)| self.arena.segment(*s).connects(p, q));
            if !closes {
                let s = self.fronts[fi].add_segment(&mut self.arena, p, q);
                self.max_edge = self.max_edge.max(self.arena.segment(s).length);
            }
        }
        for &(f, s) in closing {
            self.fronts[f].remove_segment(&mut self.arena, s);
        }

        let tri = self.arena.add_triangle([a, b, apex]);
        self.generation += 1;
        self.unite_fronts(apex);
        self.fronts.retain(|f| !f.is_empty());
        trace!(triangle = tri.0, apex = apex.0, closed = closing.len(), "triangle committed");
        tri
    }

    /// Joins every front that contains `p` into the first of them.
    pub(super) fn unite_fronts(&mut self, p: PointId) {
        let owners: Vec<usize> = self
            .fronts
            .iter()
            .enumerate()
            .filter(|(_, f)| f.has_point(p))
            .map(|(i, _)| i)
            .collect();
        let Some((&target, rest)) = owners.split_first() else {
            return;
        };
        for &j in rest.iter().rev() {
            let other = self.fronts.remove(j);
            self.fronts[target].join(other, &self.arena);
        }
        if !rest.is_empty() {
            debug!(joined = rest.len(), fronts = self.fronts.len(), "fronts joined");
        }
    }

    pub(super) fn owner_of(&self, p: PointId) -> Option<usize> {
        self.fronts.iter().position(|f| f.has_point(p))
    }

    pub(super) fn find_on_fronts(&self, p: PointId, q: PointId) -> Option<(usize, SegmentId)> {
        self.fronts
            .iter()
            .enumerate()
            .find_map(|(fi, f)| f.find_segment(&self.arena, p, q, 1).map(|s| (fi, s)))
    }

    /// True when the edge `pp -> pq` crosses no front segment and no edge of a
    /// placed triangle near it. Touching at a shared endpoint is allowed.
    pub(super) fn edge_is_free(
        &self,
        pp: &Point2,
        pq: &Point2,
        p: Option<PointId>,
        q: Option<PointId>,
    ) -> bool {
        self.edge_is_free_except(pp, pq, p, q, &[])
    }

    /// [`Self::edge_is_free`] ignoring every edge with an endpoint in `skip`.
    pub(super) fn edge_is_free_except(
        &self,
        pp: &Point2,
        pq: &Point2,
        p: Option<PointId>,
        q: Option<PointId>,
        skip: &[PointId],
    ) -> bool {
        let mid = pp.midpoint(pq);
        let radius = pp.distance_to(pq) * 0.5 + self.max_edge;

        let mut edges: Vec<(PointId, PointId)> = Vec::new();
        let mut seen_triangles = AHashSet::new();
        for front in &self.fronts {
            for v in front.index().points_near(&mid, radius) {
                let vertex = self.arena.vertex(v);
                for s in &vertex.segments {
                    let seg = self.arena.segment(*s);
                    edges.push((seg.start, seg.end));
                }
                for t in &vertex.triangles {
                    if seen_triangles.insert(*t) {
                        edges.extend(self.arena.triangle(*t).edges());
                    }
                }
            }
        }

        !edges
            .into_iter()
            .filter(|(u, w)| !skip.contains(u) && !skip.contains(w))
            .any(|(u, w)| self.edges_conflict(pp, pq, p, q, u, w))
    }

    fn edges_conflict(
        &self,
        pp: &Point2,
        pq: &Point2,
        p: Option<PointId>,
        q: Option<PointId>,
        u: PointId,
        w: PointId,
    ) -> bool {
        if let (Some(p), Some(q)) = (p, q) {
            if (u == p && w == q) || (u == q && w == p) {
                return true;
            }
        }

        let pu = self.arena.position(u);
        let pw = self.arena.position(w);
        let shared: SmallVec<[Point2; 2]> = [(u, pu), (w, pw)]
            .into_iter()
            .filter(|(id, _)| Some(*id) == p || Some(*id) == q)
            .map(|(_, pos)| pos)
            .collect();

        match segment_segment_intersection(
            &Segment2::new(pp, pq),
            &Segment2::new(&pu, &pw),
            self.tolerance,
        ) {
            SegmentIntersection::None => false,
            SegmentIntersection::Point(x) => !shared
                .iter()
                .any(|s| s.distance_to(&x) <= self.tolerance),
            SegmentIntersection::Overlapping(overlap) => overlap.length() > self.tolerance,
        }
    }

    /// Even-odd test against every front of the region.
    pub fn is_inside(&self, p: &Point2) -> bool {
        self.fronts
            .iter()
            .fold(Crossings::default(), |acc, f| {
                acc.merge(f.crossings(&self.arena, p))
            })
            .is_inside()
    }

    /// True when a front point other than those in `exclude` lies strictly
    /// inside the triangle.
    pub(super) fn encloses_front_point(
        &self,
        pa: &Point2,
        pb: &Point2,
        pc: &Point2,
        exclude: &[PointId],
    ) -> bool {
        let c = centroid(pa, pb, pc);
        let radius = [pa, pb, pc]
            .iter()
            .map(|p| c.distance_to(p))
            .fold(0.0, f64::max);
        self.fronts.iter().any(|front| {
            front
                .index()
                .points_near(&c, radius)
                .into_iter()
                .filter(|v| !exclude.contains(v))
                .any(|v| point_strictly_in_triangle(&self.arena.position(v), pa, pb, pc))
        })
    }

    fn into_triangulation(self) -> Triangulation {
        let vertices = self.arena.vertices();
        let mut map: Vec<Option<usize>> = vec![None; vertices.len()];
        let mut points = Vec::new();
        let mut boundary = Vec::new();
        for (i, v) in vertices.iter().enumerate() {
            if v.removed || (!v.is_boundary && v.triangles.is_empty()) {
                continue;
            }
            map[i] = Some(points.len());
            points.push(v.original.unwrap_or_else(|| self.frame.lift(&v.position)));
            boundary.push(v.is_boundary);
        }

        let triangles: Vec<[usize; 3]> = self
            .arena
            .live_triangles()
            .filter_map(|(_, t)| {
                let [a, b, c] = t.corners;
                Some([map[a.0]?, map[b.0]?, map[c.0]?])
            })
            .collect();

        let mut stats = self.stats;
        stats.triangles = triangles.len();
        Triangulation {
            points,
            triangles,
            boundary,
            stats,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.fronts.iter().map(Front::segment_count).sum()
    }

    pub fn fronts(&self) -> &[Front] {
        &self.fronts
    }

    pub fn arena(&self) -> &MeshArena {
        &self.arena
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn stats(&self) -> &MeshStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::Contour;

    fn unit_square() -> TriangulationEngine {
        let region = Region::new(vec![Contour::outer(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])]);
        TriangulationEngine::new(&region, AdvancingFrontParams::default()).unwrap()
    }

    fn id(engine: &TriangulationEngine, x: f64, y: f64) -> PointId {
        engine.arena().find_point(&Point2::new(x, y)).unwrap()
    }

    #[test]
    fn ideal_apex_is_equilateral() {
        let engine = unit_square();
        assert_eq!(engine.spacing(), 1.0);
        let apex = engine.ideal_apex(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0));
        assert!((apex.x() - 0.5).abs() < 1e-15);
        assert!((apex.y() - SQRT_3 / 2.0).abs() < 1e-15);
    }

    #[test]
    fn candidates_end_with_the_ideal_point() {
        let engine = unit_square();
        let (pa, pb) = (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let ideal = engine.ideal_apex(&pa, &pb);
        let (a, b) = (id(&engine, 0.0, 0.0), id(&engine, 1.0, 0.0));

        let candidates = engine.candidates(&ideal, &pa, &pb, a, b);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates.last(), Some(&Apex::New(ideal)));
        assert!(candidates.contains(&Apex::Existing(id(&engine, 1.0, 1.0))));
        assert!(candidates.contains(&Apex::Existing(id(&engine, 0.0, 1.0))));
    }

    #[test]
    fn rejected_apex_mutates_nothing() {
        let mut engine = unit_square();
        let (a, b) = (id(&engine, 0.0, 0.0), id(&engine, 1.0, 0.0));
        let sid = engine.find_on_fronts(a, b).unwrap().1;

        assert!(engine.form_triangle(0, sid, Apex::New(Point2::new(0.5, -0.5))).is_none());
        // crosses the top edge
        assert!(engine.form_triangle(0, sid, Apex::New(Point2::new(0.5, 1.1))).is_none());

        assert_eq!(engine.segment_count(), 4);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.arena().triangle_count(), 0);
        assert_eq!(engine.stats().created_points, 0);
    }

    #[test]
    fn closing_edge_leaves_the_front() {
        let mut engine = unit_square();
        let (a, b) = (id(&engine, 0.0, 0.0), id(&engine, 1.0, 0.0));
        let c = id(&engine, 1.0, 1.0);
        let sid = engine.find_on_fronts(a, b).unwrap().1;

        let t = engine.form_triangle(0, sid, Apex::Existing(c)).unwrap();
        assert_eq!(engine.arena().triangle(t).corners, [a, b, c]);
        assert_eq!(engine.segment_count(), 3);
        assert_eq!(engine.generation(), 1);
        assert!(engine.find_on_fronts(a, c).is_some());
        assert!(engine.find_on_fronts(b, c).is_none());
        assert!(!engine.fronts()[0].has_point(b));
    }

    #[test]
    fn square_closes_without_reduction() {
        let mut engine = unit_square();
        while engine.segment_count() > 0 && engine.state() == EngineState::Advancing {
            engine.advance();
        }
        assert_eq!(engine.segment_count(), 0);
        assert_eq!(engine.arena().triangle_count(), 2);
    }
}
