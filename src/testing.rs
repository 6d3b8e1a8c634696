// This module contains strategies for:
//  * points
//  * point clouds
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, PointCloud};

use proptest::collection::*;
use proptest::prelude::*;

///////////////////////////////////////////////////////////////////////////////
// Point strategies

// Integer coordinates on a small grid. Every cross product of such points is
// computed exactly, and the grid is small enough for co-linear triples and
// duplicates to show up often.
pub fn any_small() -> impl Strategy<Value = Point<f64>> {
  (-20i32..=20, -20i32..=20).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

// Coordinates in the unit square.
pub fn any_unit() -> impl Strategy<Value = Point<f64>> {
  (0f64..1.0, 0f64..1.0).prop_map(|(x, y)| Point::new([x, y]))
}

///////////////////////////////////////////////////////////////////////////////
// Point cloud strategies

pub fn any_cloud(size: std::ops::Range<usize>) -> impl Strategy<Value = PointCloud<f64>> {
  vec(any_small(), size).prop_map(PointCloud::new)
}
