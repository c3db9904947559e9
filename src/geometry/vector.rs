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

use std::array::from_fn;
use std::ops::{Add, Mul, Neg, Sub};

pub trait VectorOps<const N: usize>: Sized {
    type Cross;

    fn dot(&self, other: &Self) -> f64;
    fn cross(&self, other: &Self) -> Self::Cross;
    fn norm(&self) -> f64;
    fn normalized(&self) -> Self;
    fn scale(&self, s: f64) -> Self;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize> {
    pub coords: [f64; N],
}

impl<const N: usize> Vector<N> {
    pub fn from_vals(coords: [f64; N]) -> Self {
        Vector { coords }
    }

    pub fn zero() -> Self {
        Vector { coords: [0.0; N] }
    }
}

impl Vector<2> {
    pub fn new(x: f64, y: f64) -> Self {
        Vector { coords: [x, y] }
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    pub fn perp_left(&self) -> Self {
        Vector::<2>::new(-self.coords[1], self.coords[0])
    }

    /// Polar angle in `(-pi, pi]`.
    pub fn angle(&self) -> f64 {
        self.coords[1].atan2(self.coords[0])
    }
}

impl Vector<3> {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { coords: [x, y, z] }
    }

    /// Some unit vector perpendicular to `self`.
    pub fn any_perpendicular(&self) -> Self {
        let [x, y, z] = self.coords;
        let candidate = if x.abs() <= y.abs() && x.abs() <= z.abs() {
            Vector::<3>::new(0.0, -z, y)
        } else if y.abs() <= z.abs() {
            Vector::<3>::new(-z, 0.0, x)
        } else {
            Vector::<3>::new(-y, x, 0.0)
        };
        candidate.normalized()
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl VectorOps<2> for Vector<2> {
    type Cross = f64;

    fn dot(&self, other: &Self) -> f64 {
        self.coords[0] * other.coords[0] + self.coords[1] * other.coords[1]
    }

    fn cross(&self, other: &Self) -> f64 {
        self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0]
    }

    fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return *self;
        }
        self.scale(1.0 / n)
    }

    fn scale(&self, s: f64) -> Self {
        Vector::<2>::new(self.coords[0] * s, self.coords[1] * s)
    }
}

impl VectorOps<3> for Vector<3> {
    type Cross = Vector<3>;

    fn dot(&self, other: &Self) -> f64 {
        (0..3).map(|i| self.coords[i] * other.coords[i]).sum()
    }

    fn cross(&self, other: &Self) -> Vector<3> {
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Vector::<3>::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return *self;
        }
        self.scale(1.0 / n)
    }

    fn scale(&self, s: f64) -> Self {
        Vector {
            coords: self.coords.map(|c| c * s),
        }
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Vector<N>;
    fn add(self, rhs: Vector<N>) -> Self::Output {
        Vector {
            coords: from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Vector<N>;
    fn sub(self, rhs: Vector<N>) -> Self::Output {
        Vector {
            coords: from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Vector<N>;
    fn mul(self, rhs: f64) -> Self::Output {
        Vector {
            coords: self.coords.map(|c| c * rhs),
        }
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Vector<N>;
    fn neg(self) -> Self::Output {
        Vector {
            coords: self.coords.map(|c| -c),
        }
    }
}

pub type Vector2 = Vector<2>;
pub type Vector3 = Vector<3>;
