use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation, TotalOrd};

/// A point in the plane.
///
/// Equality is exact, coordinate by coordinate. Two points that differ only in
/// the sign of a zero coordinate compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Point<T = f64> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> T
  where
    T: Copy,
  {
    self.array[0]
  }

  pub fn y_coord(&self) -> T
  where
    T: Copy,
  {
    self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Copy,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0]), f(self.array[1])],
    }
  }
}

impl<T> Point<T>
where
  T: HullScalar,
{
  /// Lexicographic order: by x-coordinate, ties broken by y-coordinate.
  ///
  /// Uses the IEEE total order so it is safe to sort with, even in the
  /// presence of NaN.
  pub fn lexicographic_cmp(&self, other: &Point<T>) -> Ordering {
    TotalOrd::total_cmp(
      &(self.x_coord(), self.y_coord()),
      &(other.x_coord(), other.y_coord()),
    )
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T {
    let dx = self.x_coord() - rhs.x_coord();
    let dy = self.y_coord() - rhs.y_coord();
    dx * dx + dy * dy
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    TotalOrd::total_cmp(
      &self.squared_euclidean_distance(p),
      &self.squared_euclidean_distance(q),
    )
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(self, q, r)
  }

  pub fn is_finite(&self) -> bool {
    self.x_coord().is_finite() && self.y_coord().is_finite()
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T> From<Point<T>> for (T, T) {
  fn from(point: Point<T>) -> (T, T) {
    let [x, y] = point.array;
    (x, y)
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.array[0], self.array[1])
  }
}
