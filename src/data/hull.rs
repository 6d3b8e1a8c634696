use std::ops::Deref;

use crate::data::{Point, PointLocation};
use crate::{cross, HullScalar};

/// Boundary of a convex hull as an open sequence of vertices.
///
/// The last vertex is not a repeat of the first; use [`Hull::closed`] to walk
/// the boundary as a closed polygon. Winding direction and starting vertex
/// depend on the algorithm that produced the hull. Degenerate inputs give
/// degenerate hulls with zero, one or two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull<T = f64> {
  points: Vec<Point<T>>,
}

impl<T> Default for Hull<T> {
  fn default() -> Self {
    Hull { points: Vec::new() }
  }
}

impl<T> Hull<T> {
  /// $O(1)$ Assume that the points describe a convex boundary.
  pub fn new_unchecked(points: Vec<Point<T>>) -> Hull<T> {
    Hull { points }
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  /// Vertices followed by the first vertex again, ready to be drawn as a
  /// closed polygon.
  pub fn closed(&self) -> impl Iterator<Item = &Point<T>> + '_ {
    self.points.iter().chain(self.points.first())
  }

  /// $O(n)$ Iterate over the boundary edges, including the closing edge.
  ///
  /// Hulls with fewer than two vertices have no edges.
  pub fn edges(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
    let n = if self.points.len() < 2 {
      0
    } else {
      self.points.len()
    };
    (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
  }
}

impl<T> Hull<T>
where
  T: HullScalar,
{
  /// $O(n)$ Area of the enclosed polygon, positive for counter-clockwise
  /// boundaries and negative for clockwise ones.
  pub fn signed_area(&self) -> T {
    let two = T::one() + T::one();
    self.edges().fold(T::zero(), |acc, (p, q)| {
      acc + (p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord())
    }) / two
  }

  pub fn is_ccw(&self) -> bool {
    self.signed_area() > T::zero()
  }

  pub fn is_cw(&self) -> bool {
    self.signed_area() < T::zero()
  }

  /// $O(n)$ Locate a point relative to the closed hull polygon.
  ///
  /// Works for either winding direction. Hulls with one or two vertices are
  /// treated as a point and a line segment respectively.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.points.as_slice() {
      [] => PointLocation::Outside,
      [a] => {
        if a == pt {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      [a, b] => {
        if cross(a, b, pt) == T::zero() && within_box(a, b, pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {
        let sign = if self.is_cw() { -T::one() } else { T::one() };
        let mut on_boundary = false;
        for (p, q) in self.edges() {
          let turn = cross(p, q, pt) * sign;
          if turn < T::zero() {
            return PointLocation::Outside;
          }
          if turn == T::zero() {
            on_boundary = true;
          }
        }
        if on_boundary {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  /// $O(n^2)$ True if both hulls trace the same closed boundary, allowing for
  /// a different starting vertex and the opposite winding direction.
  pub fn same_boundary(&self, other: &Hull<T>) -> bool {
    let n = self.points.len();
    if n != other.points.len() {
      return false;
    }
    if n == 0 {
      return true;
    }
    let rotated_eq = |reverse: bool, offset: usize| {
      (0..n).all(|i| {
        let j = if reverse {
          (offset + n - i) % n
        } else {
          (offset + i) % n
        };
        self.points[i] == other.points[j]
      })
    };
    (0..n).any(|offset| rotated_eq(false, offset) || rotated_eq(true, offset))
  }
}

fn within_box<T: HullScalar>(a: &Point<T>, b: &Point<T>, pt: &Point<T>) -> bool {
  let (lo_x, hi_x) = (a.x_coord().min(b.x_coord()), a.x_coord().max(b.x_coord()));
  let (lo_y, hi_y) = (a.y_coord().min(b.y_coord()), a.y_coord().max(b.y_coord()));
  lo_x <= pt.x_coord() && pt.x_coord() <= hi_x && lo_y <= pt.y_coord() && pt.y_coord() <= hi_y
}

impl<T> Deref for Hull<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.points
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.points
  }
}

impl<T> IntoIterator for Hull<T> {
  type Item = Point<T>;
  type IntoIter = std::vec::IntoIter<Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}
