use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Index;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::util::FPA;

/// Extents of an axis-aligned box: `[length, width, height]`.
/// No axis order is implied, use [`Dimensions::sorted_desc`] or [`Dimensions::sorted_asc`] to compare shapes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions(pub [f64; 3]);

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Dimensions([length, width, height])
    }

    pub fn length(&self) -> f64 {
        self.0[0]
    }

    pub fn width(&self) -> f64 {
        self.0[1]
    }

    pub fn height(&self) -> f64 {
        self.0[2]
    }

    pub fn volume(&self) -> f64 {
        self.0.iter().product()
    }

    /// Sum of the three extents, used as secondary ranking key after the volume
    pub fn perimeter_sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Sample standard deviation of the three extents, 0 for a cube.
    pub fn std_dev(&self) -> f64 {
        let n = self.0.len() as f64;
        let mean = self.perimeter_sum() / n;
        let sum_sqr = self.0.iter().map(|x| x * x).sum::<f64>();
        ((sum_sqr - n * mean * mean) / (n - 1.0)).abs().sqrt()
    }

    pub fn sorted_desc(&self) -> Self {
        let mut d = self.0;
        d.sort_by(|a, b| b.total_cmp(a));
        Dimensions(d)
    }

    pub fn sorted_asc(&self) -> Self {
        let mut d = self.0;
        d.sort_by(|a, b| a.total_cmp(b));
        Dimensions(d)
    }

    /// Axis indices ordered by descending extent (stable for equal extents).
    pub fn axes_desc(&self) -> [usize; 3] {
        let mut axes = [0, 1, 2];
        axes.sort_by(|&a, &b| self.0[b].total_cmp(&self.0[a]));
        axes
    }

    /// True if `self` fits inside `other` without any rotation, axis by axis.
    pub fn fits_in(&self, other: &Dimensions) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(s, o)| FPA(*s) <= FPA(*o))
    }

    /// True if `self` fits inside `other` after sorting both, i.e. under some axis permutation.
    pub fn fits_in_any_order(&self, other: &Dimensions) -> bool {
        self.sorted_asc().fits_in(&other.sorted_asc())
    }

    /// True if any extent is (approximately) zero.
    pub fn is_degenerate(&self) -> bool {
        self.0.iter().any(|e| FPA(*e).is_zero())
    }

    /// Rearranges the extents: the i-th extent of the result is `self[axes[i]]`.
    pub fn permuted(&self, axes: [usize; 3]) -> Self {
        Dimensions([self.0[axes[0]], self.0[axes[1]], self.0[axes[2]]])
    }

    /// Lexicographic comparison of the descending-sorted extents (largest extent first).
    pub fn cmp_largest_first(&self, other: &Self) -> Ordering {
        cmp_lexicographic(&self.sorted_desc(), &other.sorted_desc())
    }

    /// Lexicographic comparison of the ascending-sorted extents (smallest extent first).
    pub fn cmp_smallest_first(&self, other: &Self) -> Ordering {
        cmp_lexicographic(&self.sorted_asc(), &other.sorted_asc())
    }

    /// Ranking key used when ordering candidate containers: volume, then perimeter sum.
    pub fn size_key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (
            OrderedFloat(self.volume()),
            OrderedFloat(self.perimeter_sum()),
        )
    }
}

fn cmp_lexicographic(a: &Dimensions, b: &Dimensions) -> Ordering {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl Index<usize> for Dimensions {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[f64; 3]> for Dimensions {
    fn from(d: [f64; 3]) -> Self {
        Dimensions(d)
    }
}

impl From<Dimensions> for [f64; 3] {
    fn from(d: Dimensions) -> Self {
        d.0
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}
