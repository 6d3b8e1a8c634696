use std::iter::FromIterator;
use std::ops::Index;

use crate::algorithms::convex_hull::{self, Algorithm};
use crate::data::{Hull, Point};
use crate::HullScalar;

/// An immutable, ordered collection of points.
///
/// The points are stored exactly as given: order and duplicates are
/// preserved. Every hull method is a pure function of the cloud and may be
/// called any number of times, in any order, from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud<T = f64> {
  points: Vec<Point<T>>,
  tolerance: T,
}

impl<T> PointCloud<T>
where
  T: HullScalar,
{
  pub fn new(points: Vec<Point<T>>) -> PointCloud<T> {
    PointCloud {
      points,
      tolerance: T::zero(),
    }
  }

  /// Treat turns whose cross product is within `tolerance` of zero as
  /// co-linear.
  ///
  /// The default tolerance is zero, which makes every predicate exact.
  /// Negative and NaN tolerances are replaced by zero.
  ///
  /// ```rust
  /// # use hullcloud::data::{Point, PointCloud};
  /// let cloud = PointCloud::new(vec![
  ///   Point::new([0., 0.]),
  ///   Point::new([1., -1e-12]),
  ///   Point::new([2., 0.]),
  ///   Point::new([1., 1.]),
  /// ]);
  /// assert_eq!(cloud.monotone_chain().len(), 4);
  /// assert_eq!(cloud.with_tolerance(1e-9).monotone_chain().len(), 3);
  /// ```
  #[must_use]
  pub fn with_tolerance(mut self, tolerance: T) -> PointCloud<T> {
    self.tolerance = if tolerance > T::zero() {
      tolerance
    } else {
      T::zero()
    };
    self
  }

  pub fn tolerance(&self) -> T {
    self.tolerance
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.points.iter()
  }

  /// $O(n \log n)$ Copy of the points in lexicographic order.
  ///
  /// The sort is stable; the cloud itself is left untouched.
  pub fn sorted(&self) -> Vec<Point<T>> {
    let mut pts = self.points.clone();
    pts.sort_by(Point::lexicographic_cmp);
    pts
  }

  /// See [`graham_scan::convex_hull`](convex_hull::graham_scan::convex_hull).
  pub fn graham_scan(&self) -> Hull<T> {
    convex_hull::graham_scan::convex_hull(self)
  }

  /// See [`gift_wrapping::convex_hull`](convex_hull::gift_wrapping::convex_hull).
  pub fn jarvis_march(&self) -> Hull<T> {
    convex_hull::gift_wrapping::convex_hull(self)
  }

  /// See [`quickhull::convex_hull`](convex_hull::quickhull::convex_hull).
  pub fn quickhull(&self) -> Hull<T> {
    convex_hull::quickhull::convex_hull(self)
  }

  /// See [`monotone_chain::convex_hull`](convex_hull::monotone_chain::convex_hull).
  pub fn monotone_chain(&self) -> Hull<T> {
    convex_hull::monotone_chain::convex_hull(self)
  }

  pub fn convex_hull(&self, algorithm: Algorithm) -> Hull<T> {
    convex_hull::convex_hull(self, algorithm)
  }
}

impl<T: HullScalar> From<Vec<Point<T>>> for PointCloud<T> {
  fn from(points: Vec<Point<T>>) -> PointCloud<T> {
    PointCloud::new(points)
  }
}

impl<T: HullScalar> From<&[Point<T>]> for PointCloud<T> {
  fn from(points: &[Point<T>]) -> PointCloud<T> {
    PointCloud::new(points.to_vec())
  }
}

impl<T: HullScalar> FromIterator<Point<T>> for PointCloud<T> {
  fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> PointCloud<T> {
    PointCloud::new(iter.into_iter().collect())
  }
}

impl<T: HullScalar> FromIterator<(T, T)> for PointCloud<T> {
  fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> PointCloud<T> {
    PointCloud::new(iter.into_iter().map(Point::from).collect())
  }
}

impl<T> Index<usize> for PointCloud<T> {
  type Output = Point<T>;
  fn index(&self, key: usize) -> &Point<T> {
    self.points.index(key)
  }
}

impl<'a, T> IntoIterator for &'a PointCloud<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::collection::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn keeps_order_and_duplicates() {
    let pts = vec![
      Point::new([3., 1.]),
      Point::new([0., 0.]),
      Point::new([3., 1.]),
    ];
    let cloud = PointCloud::new(pts.clone());
    assert_eq!(cloud.points(), &pts[..]);
    assert_eq!(cloud.len(), 3);
    assert_eq!(cloud[2], Point::new([3., 1.]));
  }

  #[test]
  fn sorted_does_not_mutate() {
    let cloud: PointCloud = vec![(2., 0.), (0., 5.), (0., -1.), (2., -3.)]
      .into_iter()
      .collect();
    assert_eq!(
      cloud.sorted(),
      vec![
        Point::new([0., -1.]),
        Point::new([0., 5.]),
        Point::new([2., -3.]),
        Point::new([2., 0.]),
      ]
    );
    assert_eq!(cloud[0], Point::new([2., 0.]));
  }

  #[test]
  fn empty_cloud() {
    let cloud: PointCloud<f64> = PointCloud::new(vec![]);
    assert!(cloud.is_empty());
    assert!(cloud.sorted().is_empty());
  }

  #[test]
  fn tolerance_is_clamped() {
    let cloud: PointCloud = PointCloud::new(vec![]);
    assert_eq!(cloud.tolerance(), 0.);
    assert_eq!(cloud.clone().with_tolerance(-1.).tolerance(), 0.);
    assert_eq!(cloud.clone().with_tolerance(f64::NAN).tolerance(), 0.);
    assert_eq!(cloud.with_tolerance(0.25).tolerance(), 0.25);
  }

  #[proptest]
  fn sorted_is_permutation(#[strategy(vec(any_small(), 0..50))] pts: Vec<Point<f64>>) {
    let cloud = PointCloud::new(pts.clone());
    let sorted = cloud.sorted();
    prop_assert_eq!(sorted.len(), pts.len());
    for window in sorted.windows(2) {
      prop_assert!(window[0].lexicographic_cmp(&window[1]).is_le());
    }
    for pt in pts.iter() {
      let expected = pts.iter().filter(|other| *other == pt).count();
      let found = sorted.iter().filter(|other| *other == pt).count();
      prop_assert_eq!(expected, found);
    }
  }
}
