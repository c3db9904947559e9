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

//! Advancing front parameters.

use crate::error::{MeshError, MeshResult};
use crate::geometry::util::{EPS, SQRT_3};

/// Tunables of the advancing front engine.
#[derive(Debug, Clone)]
pub struct AdvancingFrontParams {
    /// Candidate search radius as a multiple of the ideal spacing.
    pub radius_multiplier: f64,

    /// Minimum number of index rings searched around the ideal apex.
    pub search_rings: usize,

    /// Interior angle (degrees) below which front reduction contracts a corner.
    pub sharp_angle_degrees: f64,

    /// Relative tolerance; scaled by the ideal spacing for length tests.
    pub epsilon: f64,

    /// Smallest accepted ratio of twice the triangle area to its squared
    /// longest edge (`sqrt(3)/2` for an equilateral triangle).
    pub sliver_ratio: f64,

    /// Maximum distance of an input point from the region plane.
    pub coplanar_tolerance: f64,

    /// Spatial index square size relative to the input bounding box.
    pub bounds_margin: f64,

    /// Ideal spacing override. `None` uses the shortest input edge.
    pub ideal_spacing: Option<f64>,

    /// Iteration guard. `None` derives one from the input size.
    pub max_iterations: Option<u64>,
}

impl Default for AdvancingFrontParams {
    fn default() -> Self {
        Self {
            radius_multiplier: 0.7,
            search_rings: 2,
            sharp_angle_degrees: 25.0,
            epsilon: EPS,
            sliver_ratio: 1e-3,
            coplanar_tolerance: 1e-6,
            bounds_margin: 1.3,
            ideal_spacing: None,
            max_iterations: None,
        }
    }
}

impl AdvancingFrontParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ideal spacing instead of deriving it from the contours.
    #[must_use]
    pub const fn with_ideal_spacing(mut self, spacing: f64) -> Self {
        self.ideal_spacing = Some(spacing);
        self
    }

    #[must_use]
    pub const fn with_sharp_angle(mut self, degrees: f64) -> Self {
        self.sharp_angle_degrees = degrees;
        self
    }

    #[must_use]
    pub const fn with_search_rings(mut self, rings: usize) -> Self {
        self.search_rings = rings;
        self
    }

    #[must_use]
    pub const fn with_radius_multiplier(mut self, multiplier: f64) -> Self {
        self.radius_multiplier = multiplier;
        self
    }

    #[must_use]
    pub const fn with_max_iterations(mut self, iterations: u64) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Sharp angle threshold in radians.
    pub fn sharp_angle(&self) -> f64 {
        self.sharp_angle_degrees.to_radians()
    }

    /// Checks every tunable against its valid range.
    pub fn validate(&self) -> MeshResult<()> {
        let positive = |name: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(MeshError::InvalidParameter { name, value })
            }
        };

        positive("radius_multiplier", self.radius_multiplier)?;
        positive("epsilon", self.epsilon)?;
        if !(self.sliver_ratio >= 0.0 && self.sliver_ratio < SQRT_3 / 2.0) {
            return Err(MeshError::InvalidParameter {
                name: "sliver_ratio",
                value: self.sliver_ratio,
            });
        }
        if self.search_rings == 0 {
            return Err(MeshError::InvalidParameter {
                name: "search_rings",
                value: 0.0,
            });
        }
        if !(self.sharp_angle_degrees > 0.0 && self.sharp_angle_degrees < 180.0) {
            return Err(MeshError::InvalidParameter {
                name: "sharp_angle_degrees",
                value: self.sharp_angle_degrees,
            });
        }
        if !(self.coplanar_tolerance >= 0.0) {
            return Err(MeshError::InvalidParameter {
                name: "coplanar_tolerance",
                value: self.coplanar_tolerance,
            });
        }
        if !(self.bounds_margin > 1.0 && self.bounds_margin.is_finite()) {
            return Err(MeshError::InvalidParameter {
                name: "bounds_margin",
                value: self.bounds_margin,
            });
        }
        if let Some(h) = self.ideal_spacing {
            positive("ideal_spacing", h)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = AdvancingFrontParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.search_rings, 2);
        assert!((params.sharp_angle() - 25f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let params = AdvancingFrontParams::new().with_sharp_angle(200.0);
        assert!(matches!(
            params.validate(),
            Err(MeshError::InvalidParameter {
                name: "sharp_angle_degrees",
                ..
            })
        ));

        let params = AdvancingFrontParams::new().with_ideal_spacing(-1.0);
        assert!(params.validate().is_err());

        let params = AdvancingFrontParams::new().with_search_rings(0);
        assert!(params.validate().is_err());
    }
}
