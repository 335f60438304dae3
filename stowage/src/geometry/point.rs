use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Geometric primitive representing a point in 3D space
#[derive(Debug, Clone, PartialEq, Copy, Serialize, Deserialize)]
pub struct Point(pub [f64; 3]);

impl Point {
    pub const ORIGIN: Point = Point([0.0; 3]);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point([x, y, z])
    }

    /// Returns a copy of `self` moved by `delta` along `axis`.
    pub fn shifted(mut self, axis: usize, delta: f64) -> Self {
        self.0[axis] += delta;
        self
    }

    /// Rearranges the coordinates: the i-th coordinate of the result is `self[axes[i]]`.
    pub fn permuted(&self, axes: [usize; 3]) -> Self {
        Point([self.0[axes[0]], self.0[axes[1]], self.0[axes[2]]])
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[f64; 3]> for Point {
    fn from(p: [f64; 3]) -> Self {
        Point(p)
    }
}

impl From<Point> for [f64; 3] {
    fn from(p: Point) -> Self {
        p.0
    }
}
