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
    error::{MeshError, MeshResult},
    geometry::{
        Point2, Point3,
        point::PointOps,
        vector::{Vector3, VectorOps},
    },
};

#[derive(Clone, Debug)]
pub struct Plane {
    pub normal: Vector3,
    pub d: f64,
}

impl Plane {
    pub fn new(normal: Vector3, d: f64) -> Self {
        Plane { normal, d }
    }

    /// Plane through three points; the normal is not normalized and is zero
    /// for collinear input.
    pub fn from_points(p1: &Point3, p2: &Point3, p3: &Point3) -> Self {
        let v1 = p1.vector_to(p2);
        let v2 = p1.vector_to(p3);
        let normal = v1.cross(&v2);
        let d = -normal.dot(&Vector3::from_vals(p1.coords));
        Plane::new(normal, d)
    }

    pub fn is_degenerate(&self) -> bool {
        self.normal.norm() == 0.0
    }

    pub fn signed_distance(&self, p: &Point3) -> f64 {
        let n = self.normal.norm();
        (self.normal.dot(&Vector3::from_vals(p.coords)) + self.d) / n
    }

    pub fn contains(&self, p: &Point3, tolerance: f64) -> bool {
        self.signed_distance(p).abs() <= tolerance
    }

    pub fn basis(&self) -> (Vector3, Vector3) {
        let n = self.normal.normalized();
        let u = n.any_perpendicular();
        let v = n.cross(&u);
        (u, v)
    }
}

/// Maps the plane of the input contours to 2D working coordinates and back.
///
/// Planes of constant z keep the x/y axes so that planar input is meshed in
/// its own coordinates.
#[derive(Clone, Debug)]
pub struct PlanarFrame {
    origin: Point3,
    u: Vector3,
    v: Vector3,
}

impl PlanarFrame {
    pub fn identity(z: f64) -> Self {
        PlanarFrame {
            origin: Point3::new(0.0, 0.0, z),
            u: Vector3::new(1.0, 0.0, 0.0),
            v: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    /// Fits the frame to `points`, failing when any point lies farther than
    /// `tolerance` from the plane through the first three non-collinear ones.
    pub fn fit(points: &[Point3], tolerance: f64) -> MeshResult<Self> {
        let first = points.first().ok_or(MeshError::EmptyRegion)?;
        let scale = points
            .iter()
            .map(|p| first.distance_to(p))
            .fold(0.0, f64::max);

        let plane = Self::supporting_plane(points, scale)
            .ok_or(MeshError::DegenerateContour { contour: 0 })?;

        for p in points {
            let distance = plane.signed_distance(p).abs();
            if distance > tolerance {
                return Err(MeshError::NonCoplanar { distance });
            }
        }

        let n = plane.normal.normalized();
        if n.coords[0].abs() <= f64::EPSILON && n.coords[1].abs() <= f64::EPSILON {
            return Ok(Self::identity(first.z()));
        }

        let (u, v) = plane.basis();
        Ok(PlanarFrame {
            origin: *first,
            u,
            v,
        })
    }

    fn supporting_plane(points: &[Point3], scale: f64) -> Option<Plane> {
        let p0 = points.first()?;
        let p1 = points.iter().find(|p| p0.distance_to(p) > scale * 1e-9)?;
        let threshold = scale * scale * 1e-9;
        points
            .iter()
            .map(|p2| Plane::from_points(p0, p1, p2))
            .find(|plane| plane.normal.norm() > threshold)
    }

    pub fn project(&self, p: &Point3) -> Point2 {
        let w = self.origin.vector_to(p);
        Point2::new(w.dot(&self.u), w.dot(&self.v))
    }

    pub fn lift(&self, p: &Point2) -> Point3 {
        self.origin
            .add_vector(&(self.u.scale(p.x()) + self.v.scale(p.y())))
    }
}
