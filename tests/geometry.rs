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

use approx::assert_relative_eq;

use frontmesh::MeshError;
use frontmesh::geometry::{
    PlanarFrame, Point2, Point3, Segment2, SegmentIntersection,
    point::PointOps,
    segment::SegmentOps,
    segment_segment_intersection,
    util::{interior_angle, signed_area, triangle_area},
};

fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment2 {
    Segment2::new(&Point2::new(ax, ay), &Point2::new(bx, by))
}

#[test]
fn crossing_segments() {
    let r = segment_segment_intersection(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 2.0, 2.0, 0.0), 1e-9);
    assert_eq!(r, SegmentIntersection::Point(Point2::new(1.0, 1.0)));
}

#[test]
fn shared_endpoint_is_reported_as_a_point() {
    let r = segment_segment_intersection(&seg(0.0, 0.0, 1.0, 0.0), &seg(1.0, 0.0, 1.0, 1.0), 1e-9);
    assert_eq!(r, SegmentIntersection::Point(Point2::new(1.0, 0.0)));

    let r = segment_segment_intersection(&seg(0.0, 0.0, 1.0, 0.0), &seg(1.0, 0.0, 2.0, 0.0), 1e-9);
    assert_eq!(r, SegmentIntersection::Point(Point2::new(1.0, 0.0)));
}

#[test]
fn parallel_and_disjoint() {
    let r = segment_segment_intersection(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0), 1e-9);
    assert!(r.is_none());

    let r = segment_segment_intersection(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, 0.0, 3.0, 0.0), 1e-9);
    assert!(r.is_none());

    let r = segment_segment_intersection(&seg(0.0, 0.0, 1.0, 1.0), &seg(2.0, 0.0, 3.0, -5.0), 1e-9);
    assert!(r.is_none());
}

#[test]
fn collinear_overlap() {
    let r = segment_segment_intersection(&seg(0.0, 0.0, 2.0, 0.0), &seg(3.0, 0.0, 1.0, 0.0), 1e-9);
    match r {
        SegmentIntersection::Overlapping(s) => {
            assert!(s.same_endpoints(&seg(1.0, 0.0, 2.0, 0.0)));
            assert_relative_eq!(s.length(), 1.0);
        }
        other => panic!("expected overlap, got {other:?}"),
    }
}

#[test]
fn interior_angles() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    assert_relative_eq!(
        interior_angle(&a, &b, &Point2::new(1.0, 1.0)),
        std::f64::consts::FRAC_PI_2,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        interior_angle(&a, &b, &Point2::new(2.0, -1.0)),
        225f64.to_radians(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        interior_angle(&a, &b, &Point2::new(2.0, 0.0)),
        std::f64::consts::PI,
        epsilon = 1e-12
    );
}

#[test]
fn areas() {
    let ring = [
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(2.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    assert_relative_eq!(signed_area(&ring), 2.0);
    let mut reversed = ring;
    reversed.reverse();
    assert_relative_eq!(signed_area(&reversed), -2.0);
    assert_relative_eq!(triangle_area(&ring[0], &ring[1], &ring[2]), 1.0);
}

#[test]
fn constant_z_keeps_coordinates() {
    let pts = [
        Point3::new(0.0, 0.0, 2.0),
        Point3::new(1.0, 0.0, 2.0),
        Point3::new(0.0, 1.0, 2.0),
    ];
    let frame = PlanarFrame::fit(&pts, 1e-6).unwrap();
    assert_eq!(frame.project(&Point3::new(3.0, 4.0, 2.0)), Point2::new(3.0, 4.0));
    assert_eq!(frame.lift(&Point2::new(3.0, 4.0)), Point3::new(3.0, 4.0, 2.0));
}

#[test]
fn tilted_frame_round_trips() {
    let pts = [
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.25, 0.25, 0.5),
    ];
    let frame = PlanarFrame::fit(&pts, 1e-6).unwrap();
    for p in &pts {
        let back = frame.lift(&frame.project(p));
        assert!(back.distance_to(p) < 1e-12);
    }

    // distances are preserved in the working plane
    let a = frame.project(&pts[0]);
    let b = frame.project(&pts[1]);
    assert_relative_eq!(a.distance_to(&b), pts[0].distance_to(&pts[1]), epsilon = 1e-12);
}

#[test]
fn frame_rejects_bad_input() {
    let pts = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(1.0, 1.0, 0.5),
    ];
    assert!(matches!(
        PlanarFrame::fit(&pts, 1e-6),
        Err(MeshError::NonCoplanar { .. })
    ));

    let line = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 2.0),
    ];
    assert!(matches!(
        PlanarFrame::fit(&line, 1e-6),
        Err(MeshError::DegenerateContour { .. })
    ));
    assert!(matches!(PlanarFrame::fit(&[], 1e-6), Err(MeshError::EmptyRegion)));
}
