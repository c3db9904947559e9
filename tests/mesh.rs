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

use rand::{Rng, SeedableRng, rngs::StdRng};

use frontmesh::geometry::{Aabb2, Point2, point::PointOps};
use frontmesh::mesh::{Front, MeshArena, PointId, SpatialIndex};

#[test]
fn points_near_covers_the_disc() {
    let mut rng = StdRng::seed_from_u64(17);
    let bounds = Aabb2::new(Point2::new(-3.0, -2.0), Point2::new(5.0, 4.0));
    let mut index = SpatialIndex::with_bounds(&bounds, 0.35, 1.3);

    let points: Vec<Point2> = (0..400)
        .map(|_| Point2::new(rng.random_range(-3.0..5.0), rng.random_range(-2.0..4.0)))
        .collect();
    for (i, p) in points.iter().enumerate() {
        assert!(index.insert(PointId(i), *p));
    }
    assert_eq!(index.len(), points.len());

    for _ in 0..50 {
        let q = Point2::new(rng.random_range(-3.0..5.0), rng.random_range(-2.0..4.0));
        let radius = rng.random_range(0.0..1.5);
        let found = index.points_near(&q, radius);

        for (i, p) in points.iter().enumerate() {
            if p.distance_to(&q) <= radius {
                assert!(found.contains(&PointId(i)), "{p:?} missed around {q:?}");
            }
        }
        let mut unique = found.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), found.len());
    }
}

#[test]
fn removed_points_are_not_found() {
    let bounds = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0));
    let mut index = SpatialIndex::with_bounds(&bounds, 0.5, 1.3);
    let p = Point2::new(2.0, 2.0);
    index.insert(PointId(0), p);
    index.insert(PointId(1), Point2::new(2.1, 2.0));
    assert!(index.remove(PointId(0), &p));

    assert_eq!(index.points_within_rings(&p, 2), vec![PointId(1)]);
    assert_eq!(index.all_points(), vec![PointId(1)]);
}

/// Counter-clockwise rectangle `0..4 x 0..1` split at x = 1 on the bottom.
fn rectangle_front() -> (MeshArena, Front, Vec<PointId>) {
    let corners = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    let bounds = Aabb2::from_points(corners.iter()).unwrap();
    let mut arena = MeshArena::new();
    let mut front = Front::new(SpatialIndex::with_bounds(&bounds, 1.0, 1.3));
    let ids: Vec<PointId> = corners
        .iter()
        .map(|p| arena.add_point(*p, None, true).0)
        .collect();
    for i in 0..ids.len() {
        front.add_segment(&mut arena, ids[i], ids[(i + 1) % ids.len()]);
    }
    (arena, front, ids)
}

#[test]
fn front_orders_by_length_and_generation() {
    let (mut arena, front, ids) = rectangle_front();
    assert_eq!(front.segment_count(), 5);

    let lengths: Vec<f64> = front.segments().map(|s| arena.segment(s).length).collect();
    assert_eq!(lengths, vec![1.0, 1.0, 1.0, 3.0, 4.0]);

    // ties resolve by creation order
    let first = front.shortest_unattempted(&arena, 0).unwrap();
    assert_eq!(arena.segment(first).start, ids[0]);

    arena.segment_mut(first).mark_tried(0);
    let second = front.shortest_unattempted(&arena, 0).unwrap();
    assert_ne!(first, second);
    assert_eq!(arena.segment(second).length, 1.0);

    // a new generation makes every segment eligible again
    assert_eq!(front.shortest_unattempted(&arena, 1), Some(first));
}

#[test]
fn front_containment_is_undirected() {
    let (arena, front, ids) = rectangle_front();
    assert!(front.contains(&arena, ids[1], ids[2], 1));
    assert!(front.contains(&arena, ids[2], ids[1], 1));
    assert!(!front.contains(&arena, ids[0], ids[2], 1));
    assert_eq!(front.outgoing(&arena, ids[1]).len(), 1);
}

#[test]
fn front_point_inside() {
    let (arena, front, _) = rectangle_front();
    assert!(front.is_point_inside(&arena, &Point2::new(2.0, 0.5)));
    assert!(!front.is_point_inside(&arena, &Point2::new(5.0, 0.5)));
    assert!(!front.is_point_inside(&arena, &Point2::new(-1.0, 0.5)));
    // on the right edge
    assert!(!front.is_point_inside(&arena, &Point2::new(4.0, 0.5)));
}

#[test]
fn removing_segments_evicts_orphans() {
    let (mut arena, mut front, ids) = rectangle_front();
    let bottom = front.find_segment(&arena, ids[0], ids[1], 1).unwrap();
    assert!(front.remove_segment(&mut arena, bottom));
    assert!(!front.remove_segment(&mut arena, bottom));

    // both endpoints still have a neighbouring segment
    assert!(front.has_point(ids[0]));
    assert!(front.has_point(ids[1]));

    let next = front.find_segment(&arena, ids[1], ids[2], 1).unwrap();
    front.remove_segment(&mut arena, next);
    assert!(!front.has_point(ids[1]));
    assert!(!front.index().points_within_rings(&Point2::new(1.0, 0.0), 0).contains(&ids[1]));
    assert_eq!(front.points().len(), 4);
}
