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

use std::{
    array::from_fn,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut, Sub},
};

use crate::geometry::vector::Vector;

/// A point with `N` `f64` coordinates.
///
/// Equality is by coordinate value (`0.0 == -0.0`); hashing normalizes the
/// sign of zero so that equal points always hash alike.
#[derive(Clone, Copy, Debug)]
pub struct Point<const N: usize> {
    pub coords: [f64; N],
}

pub trait PointOps<const N: usize>: Sized {
    fn distance_to(&self, other: &Self) -> f64;
    fn distance_squared_to(&self, other: &Self) -> f64;
    fn vector_to(&self, other: &Self) -> Vector<N>;
    fn add_vector(&self, v: &Vector<N>) -> Self;
    fn midpoint(&self, other: &Self) -> Self;
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl<const N: usize> Point<N> {
    pub fn from_vals<V: Into<f64>>(vals: [V; N]) -> Self {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn coords(&self) -> &[f64; N] {
        &self.coords
    }

    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl Point<2> {
    pub fn new(x: f64, y: f64) -> Self {
        Point { coords: [x, y] }
    }

    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.coords[1]
    }
}

impl Point<3> {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point { coords: [x, y, z] }
    }

    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    #[inline(always)]
    pub fn z(&self) -> f64 {
        self.coords[2]
    }

    /// Drops the z coordinate.
    pub fn xy(&self) -> Point<2> {
        Point::<2>::new(self.coords[0], self.coords[1])
    }
}

impl<const N: usize> PointOps<N> for Point<N> {
    fn distance_to(&self, other: &Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    fn distance_squared_to(&self, other: &Self) -> f64 {
        (0..N)
            .map(|i| {
                let d = other.coords[i] - self.coords[i];
                d * d
            })
            .sum()
    }

    fn vector_to(&self, other: &Self) -> Vector<N> {
        Vector::from_vals(from_fn(|i| other.coords[i] - self.coords[i]))
    }

    fn add_vector(&self, v: &Vector<N>) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i] + v.coords[i]),
        }
    }

    fn midpoint(&self, other: &Self) -> Self {
        Point {
            coords: from_fn(|i| (self.coords[i] + other.coords[i]) * 0.5),
        }
    }

    fn lerp(&self, other: &Self, t: f64) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i] + t * (other.coords[i] - self.coords[i])),
        }
    }
}

impl<const N: usize> Default for Point<N> {
    fn default() -> Self {
        Point { coords: [0.0; N] }
    }
}

impl<const N: usize> Index<usize> for Point<N> {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<const N: usize> IndexMut<usize> for Point<N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, const N: usize> Sub<&'b Point<N>> for &'a Point<N> {
    type Output = Vector<N>;
    fn sub(self, rhs: &'b Point<N>) -> Self::Output {
        rhs.vector_to(self)
    }
}

impl<const N: usize> From<[f64; N]> for Point<N> {
    fn from(coords: [f64; N]) -> Self {
        Point { coords }
    }
}

impl<const N: usize> From<Point<N>> for [f64; N] {
    fn from(p: Point<N>) -> Self {
        p.coords
    }
}

impl<const N: usize> PartialEq for Point<N> {
    fn eq(&self, other: &Self) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a == b)
    }
}

impl<const N: usize> Hash for Point<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for coord in &self.coords {
            // -0.0 + 0.0 == +0.0
            (coord + 0.0).to_bits().hash(state);
        }
    }
}

impl<const N: usize> PartialOrd for Point<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        for i in 0..N {
            match self.coords[i].partial_cmp(&other.coords[i]) {
                Some(std::cmp::Ordering::Equal) => continue,
                other => return other,
            }
        }
        Some(std::cmp::Ordering::Equal)
    }
}

pub type Point2 = Point<2>;
pub type Point3 = Point<3>;
