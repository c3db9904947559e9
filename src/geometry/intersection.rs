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
    Point2, Segment2,
    point::PointOps,
    segment::SegmentOps,
    vector::VectorOps,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection {
    None,
    Point(Point2),
    Overlapping(Segment2),
}

impl SegmentIntersection {
    pub fn is_none(&self) -> bool {
        matches!(self, SegmentIntersection::None)
    }
}

/// Intersects two 2D segments with an absolute length tolerance `eps`.
///
/// Parallel segments only intersect when they are collinear; the result is
/// then the overlap of their projections (a single point when the overlap
/// collapses to one). Endpoint touches are reported as intersections; the
/// caller decides whether a shared endpoint counts.
pub fn segment_segment_intersection(
    seg1: &Segment2,
    seg2: &Segment2,
    eps: f64,
) -> SegmentIntersection {
    let p = seg1.a;
    let r = seg1.direction();
    let q = seg2.a;
    let s = seg2.direction();

    let r_len = r.norm();
    let s_len = s.norm();
    if r_len <= eps || s_len <= eps {
        return SegmentIntersection::None;
    }

    let qp = p.vector_to(&q);
    let denom = r.cross(&s);

    if denom.abs() <= eps * r_len.max(s_len) {
        // parallel: only coincident lines can meet
        if qp.cross(&r).abs() / r_len > eps {
            return SegmentIntersection::None;
        }

        let rr = r.dot(&r);
        let t0 = qp.dot(&r) / rr;
        let t1 = t0 + s.dot(&r) / rr;
        let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        let lo = lo.max(0.0);
        let hi = hi.min(1.0);
        let t_eps = eps / r_len;

        if lo > hi + t_eps {
            return SegmentIntersection::None;
        }
        if hi - lo <= t_eps {
            let t = ((lo + hi) * 0.5).clamp(0.0, 1.0);
            return SegmentIntersection::Point(p.lerp(&seg1.b, t));
        }
        return SegmentIntersection::Overlapping(Segment2::new(
            &p.lerp(&seg1.b, lo),
            &p.lerp(&seg1.b, hi),
        ));
    }

    let t = qp.cross(&s) / denom;
    let u = qp.cross(&r) / denom;
    let t_eps = eps / r_len;
    let u_eps = eps / s_len;

    if t < -t_eps || t > 1.0 + t_eps || u < -u_eps || u > 1.0 + u_eps {
        return SegmentIntersection::None;
    }

    SegmentIntersection::Point(p.lerp(&seg1.b, t.clamp(0.0, 1.0)))
}
