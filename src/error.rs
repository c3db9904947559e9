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

//! Error types for mesh generation.

use thiserror::Error;

/// Errors that abort a meshing pass.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The region has no contours or no points.
    #[error("region has no contours")]
    EmptyRegion,

    /// A contour has fewer than three distinct points.
    #[error("contour {contour} has {count} distinct points (at least 3 required)")]
    TooFewPoints { contour: usize, count: usize },

    /// A contour has zero area, zero-length edges or no supporting plane.
    #[error("contour {contour} is degenerate")]
    DegenerateContour { contour: usize },

    /// Not every input point lies in the plane of the region.
    #[error("input points are not coplanar (deviation {distance:e})")]
    NonCoplanar { distance: f64 },

    /// A tunable is out of its valid range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Front reduction found nothing to close or contract.
    #[error("front cannot be reduced ({remaining} segments remain): {detail}")]
    FrontInconsistent { remaining: usize, detail: String },

    /// The main loop exceeded its iteration guard.
    #[error("meshing did not finish within {iterations} iterations")]
    IterationLimit { iterations: u64 },

    /// Writing mesh output failed.
    #[error("failed to write mesh output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for meshing operations.
pub type MeshResult<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::TooFewPoints {
            contour: 1,
            count: 2,
        };
        assert_eq!(
            format!("{err}"),
            "contour 1 has 2 distinct points (at least 3 required)"
        );

        let err = MeshError::FrontInconsistent {
            remaining: 2,
            detail: "2-cycle".into(),
        };
        assert!(format!("{err}").contains("2 segments remain"));
    }
}
