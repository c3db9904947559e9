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

//! Planar unstructured triangle meshing with the advancing front method.
//!
//! A [`Region`] of closed contours (one or more outer boundaries plus holes)
//! is meshed by growing triangles inward from the boundary until the front of
//! unmeshed segments is consumed:
//!
//! ```no_run
//! use frontmesh::{AdvancingFrontParams, Region, geometry::Point3, triangulate};
//!
//! let square = Region::polygon(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ]);
//! let mesh = triangulate(&square, &AdvancingFrontParams::default()).unwrap();
//! assert_eq!(mesh.triangles.len(), 2);
//! ```

pub mod contour;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod operations;
pub mod params;

pub use contour::{Contour, ContourKind, Division, Region};
pub use error::{MeshError, MeshResult};
pub use operations::triangulation::{
    AdvancingFront, MeshStats, Triangulate2D, Triangulation, TriangulationEngine, triangulate,
    triangulate_with_progress,
};
pub use params::AdvancingFrontParams;
