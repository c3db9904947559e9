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

//! Region quadtree over working coordinates.
//!
//! The tree is subdivided uniformly until the leaf side drops below the
//! requested resolution, so every leaf has the same size and the leaves form
//! a regular grid. Leaves are linked to their west, north, east and south
//! neighbours, which lets ring queries walk the grid without descending from
//! the root for every cell.

use num_traits::ToPrimitive;

use crate::{
    geometry::{Aabb2, Point2},
    mesh::basic_types::PointId,
};

/// Depth at which subdivision stops regardless of the resolution.
pub const MAX_DEPTH: u32 = 10;

const WEST: usize = 0;
const NORTH: usize = 1;
const EAST: usize = 2;
const SOUTH: usize = 3;

#[derive(Debug, Clone)]
enum NodeKind {
    /// Children in NE, NW, SW, SE order.
    Interior { children: [usize; 4] },
    Leaf {
        points: Vec<(PointId, Point2)>,
        /// West, north, east, south.
        neighbours: [Option<usize>; 4],
    },
}

#[derive(Debug, Clone)]
struct QuadNode {
    bounds: Aabb2,
    kind: NodeKind,
}

#[derive(Debug, Clone)]
pub struct SpatialIndex {
    nodes: Vec<QuadNode>,
    leaf_size: f64,
    cells_per_side: usize,
    len: usize,
}

impl SpatialIndex {
    /// Builds an index whose root square covers `points`.
    pub fn build(points: &[Point2], resolution: f64, margin: f64) -> Option<Self> {
        let bounds = Aabb2::from_points(points.iter())?;
        Some(Self::with_bounds(&bounds, resolution, margin))
    }

    /// Builds an empty index over a square `margin` times the larger extent of
    /// `bounds`, centred on it.
    pub fn with_bounds(bounds: &Aabb2, resolution: f64, margin: f64) -> Self {
        let side = (bounds.max_extent() * margin).max(resolution).max(f64::MIN_POSITIVE);
        let half = side * 0.5;
        let cx = bounds.center(0);
        let cy = bounds.center(1);
        let root_bounds = Aabb2::new(
            Point2::new(cx - half, cy - half),
            Point2::new(cx + half, cy + half),
        );

        let mut depth = 0;
        let mut leaf_size = side;
        while leaf_size >= resolution && depth < MAX_DEPTH {
            leaf_size *= 0.5;
            depth += 1;
        }

        let mut index = SpatialIndex {
            nodes: Vec::new(),
            leaf_size,
            cells_per_side: 1 << depth,
            len: 0,
        };
        index.subdivide(root_bounds, depth);
        index.link_neighbours();
        index
    }

    fn subdivide(&mut self, bounds: Aabb2, depth: u32) -> usize {
        let id = self.nodes.len();
        if depth == 0 {
            self.nodes.push(QuadNode {
                bounds,
                kind: NodeKind::Leaf {
                    points: Vec::new(),
                    neighbours: [None; 4],
                },
            });
            return id;
        }

        self.nodes.push(QuadNode {
            bounds,
            kind: NodeKind::Interior { children: [0; 4] },
        });

        let (x0, y0) = (bounds.min.x(), bounds.min.y());
        let (x1, y1) = (bounds.max.x(), bounds.max.y());
        let (mx, my) = (bounds.center(0), bounds.center(1));
        let quadrants = [
            Aabb2::new(Point2::new(mx, my), Point2::new(x1, y1)),
            Aabb2::new(Point2::new(x0, my), Point2::new(mx, y1)),
            Aabb2::new(Point2::new(x0, y0), Point2::new(mx, my)),
            Aabb2::new(Point2::new(mx, y0), Point2::new(x1, my)),
        ];

        let mut children = [0; 4];
        for (slot, quadrant) in children.iter_mut().zip(quadrants) {
            *slot = self.subdivide(quadrant, depth - 1);
        }
        self.nodes[id].kind = NodeKind::Interior { children };
        id
    }

    fn link_neighbours(&mut self) {
        let step = self.leaf_size;
        for id in 0..self.nodes.len() {
            if !matches!(self.nodes[id].kind, NodeKind::Leaf { .. }) {
                continue;
            }
            let cx = self.nodes[id].bounds.center(0);
            let cy = self.nodes[id].bounds.center(1);
            let mut links = [None; 4];
            links[WEST] = self.find_leaf(&Point2::new(cx - step, cy));
            links[NORTH] = self.find_leaf(&Point2::new(cx, cy + step));
            links[EAST] = self.find_leaf(&Point2::new(cx + step, cy));
            links[SOUTH] = self.find_leaf(&Point2::new(cx, cy - step));
            if let NodeKind::Leaf { neighbours, .. } = &mut self.nodes[id].kind {
                *neighbours = links;
            }
        }
    }

    /// Leaf containing `p`; `None` outside the root square (half-open).
    fn find_leaf(&self, p: &Point2) -> Option<usize> {
        let root = self.nodes.first()?;
        if !root.bounds.contains_half_open(p) {
            return None;
        }

        let mut current = 0;
        loop {
            match &self.nodes[current].kind {
                NodeKind::Leaf { .. } => return Some(current),
                NodeKind::Interior { children } => {
                    let b = &self.nodes[current].bounds;
                    let east = p.x() >= b.center(0);
                    let north = p.y() >= b.center(1);
                    current = match (east, north) {
                        (true, true) => children[0],
                        (false, true) => children[1],
                        (false, false) => children[2],
                        (true, false) => children[3],
                    };
                }
            }
        }
    }

    fn neighbour(&self, leaf: usize, direction: usize) -> Option<usize> {
        match &self.nodes[leaf].kind {
            NodeKind::Leaf { neighbours, .. } => neighbours[direction],
            NodeKind::Interior { .. } => None,
        }
    }

    /// Returns `false` when `p` lies outside the root square.
    pub fn insert(&mut self, id: PointId, p: Point2) -> bool {
        let Some(leaf) = self.find_leaf(&p) else {
            return false;
        };
        if let NodeKind::Leaf { points, .. } = &mut self.nodes[leaf].kind {
            points.push((id, p));
            self.len += 1;
            return true;
        }
        false
    }

    pub fn remove(&mut self, id: PointId, p: &Point2) -> bool {
        let Some(leaf) = self.find_leaf(p) else {
            return false;
        };
        if let NodeKind::Leaf { points, .. } = &mut self.nodes[leaf].kind {
            if let Some(pos) = points.iter().position(|(pid, _)| *pid == id) {
                points.remove(pos);
                self.len -= 1;
                return true;
            }
        }
        false
    }

    /// All points whose leaf lies within `rings` steps in x and in y of the
    /// leaf containing `p`, in south-to-north, west-to-east cell order.
    pub fn points_within_rings(&self, p: &Point2, rings: usize) -> Vec<PointId> {
        let mut out = Vec::new();
        let Some(center) = self.find_leaf(p) else {
            return out;
        };

        let mut corner = center;
        let mut west_steps = 0;
        while west_steps < rings {
            match self.neighbour(corner, WEST) {
                Some(next) => corner = next,
                None => break,
            }
            west_steps += 1;
        }
        let mut south_steps = 0;
        while south_steps < rings {
            match self.neighbour(corner, SOUTH) {
                Some(next) => corner = next,
                None => break,
            }
            south_steps += 1;
        }

        let columns = west_steps + rings + 1;
        let rows = south_steps + rings + 1;

        let mut row_start = Some(corner);
        for _ in 0..rows {
            let Some(start) = row_start else { break };
            let mut cell = Some(start);
            for _ in 0..columns {
                let Some(c) = cell else { break };
                if let NodeKind::Leaf { points, .. } = &self.nodes[c].kind {
                    out.extend(points.iter().map(|(id, _)| *id));
                }
                cell = self.neighbour(c, EAST);
            }
            row_start = self.neighbour(start, NORTH);
        }
        out
    }

    /// Points within the ring window that covers a disc of `radius` around `p`.
    pub fn points_near(&self, p: &Point2, radius: f64) -> Vec<PointId> {
        self.points_within_rings(p, self.rings_for_radius(radius))
    }

    /// Number of rings whose window covers a disc of `radius` around any
    /// point of the centre leaf.
    pub fn rings_for_radius(&self, radius: f64) -> usize {
        let cells = (radius.max(0.0) / self.leaf_size)
            .ceil()
            .to_usize()
            .unwrap_or(self.cells_per_side);
        (cells + 1).min(self.cells_per_side)
    }

    pub fn covers(&self, p: &Point2) -> bool {
        self.find_leaf(p).is_some()
    }

    /// Every stored point, in leaf order.
    pub fn all_points(&self) -> Vec<PointId> {
        self.nodes
            .iter()
            .filter_map(|n| match &n.kind {
                NodeKind::Leaf { points, .. } => Some(points.iter().map(|(id, _)| *id)),
                NodeKind::Interior { .. } => None,
            })
            .flatten()
            .collect()
    }

    pub fn leaf_size(&self) -> f64 {
        self.leaf_size
    }

    pub fn cells_per_side(&self) -> usize {
        self.cells_per_side
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bounds(&self) -> Option<&Aabb2> {
        self.nodes.first().map(|n| &n.bounds)
    }
}
