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

use crate::{
    contour::Region,
    error::MeshResult,
    geometry::{Point3, point::PointOps, vector::VectorOps},
    params::AdvancingFrontParams,
};

pub mod advancing_front;
pub mod reduction;

pub use advancing_front::{Apex, EngineState, TriangulationEngine};
pub use reduction::Reduction;

pub trait Triangulate2D {
    fn triangulate(region: &Region, params: &AdvancingFrontParams) -> MeshResult<Triangulation>;
}

/// Advancing front mesher.
pub struct AdvancingFront;

impl Triangulate2D for AdvancingFront {
    fn triangulate(region: &Region, params: &AdvancingFrontParams) -> MeshResult<Triangulation> {
        triangulate(region, params)
    }
}

/// Counters collected during a meshing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeshStats {
    pub ideal_spacing: f64,
    pub triangles: usize,
    pub created_points: usize,
    pub merged_points: usize,
    pub three_cycles: usize,
    pub bridges: usize,
    pub merges: usize,
    /// Last-resort corner cuts taken when no sharp corner could be contracted.
    pub ear_clips: usize,
    pub iterations: u64,
}

impl MeshStats {
    /// Number of front reductions that changed the front.
    pub fn reductions(&self) -> usize {
        self.three_cycles + self.bridges + self.merges + self.ear_clips
    }
}

/// Output mesh. Triangle corners index into `points` and are
/// counter-clockwise in the working plane.
#[derive(Debug, Clone)]
pub struct Triangulation {
    pub points: Vec<Point3>,
    pub triangles: Vec<[usize; 3]>,
    /// `true` for points of the input contours.
    pub boundary: Vec<bool>,
    pub stats: MeshStats,
}

impl Triangulation {
    pub fn triangle_area(&self, t: usize) -> f64 {
        let [a, b, c] = self.triangles[t];
        let pa = &self.points[a];
        pa.vector_to(&self.points[b])
            .cross(&pa.vector_to(&self.points[c]))
            .norm()
            * 0.5
    }

    pub fn area(&self) -> f64 {
        (0..self.triangles.len()).map(|t| self.triangle_area(t)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Meshes `region` with the advancing front method.
pub fn triangulate(region: &Region, params: &AdvancingFrontParams) -> MeshResult<Triangulation> {
    triangulate_with_progress(region, params, || {})
}

/// Like [`triangulate`], calling `progress` after every committed triangle.
pub fn triangulate_with_progress<F: FnMut()>(
    region: &Region,
    params: &AdvancingFrontParams,
    progress: F,
) -> MeshResult<Triangulation> {
    TriangulationEngine::new(region, params.clone())?.run(progress)
}
