use std::cmp::Ordering;

use crate::algorithms::convex_hull::monotone_chain::monotone_chains;
use crate::data::{Hull, Point, PointCloud};
use crate::{cross, HullScalar, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    Output is clockwise, starting at the lexicographically smallest point.
//    No points are outside the resulting hull.
/// Convex hull of a point cloud.
///
/// [Gift Wrapping][wiki] (Jarvis march) algorithm: starting from the leftmost
/// point, repeatedly pick the point that leaves every other point on its
/// right until the walk is back at the start.
///
/// When several candidates are co-linear with the current point, the farthest
/// one is taken so that boundary points between two hull vertices are
/// skipped.
///
/// A positive tolerance may stop the walk from ever returning to its start.
/// The hull is then taken from the monotone chains with the same tolerance,
/// listed clockwise.
///
/// # Degenerate input
/// * Fewer than three points: empty hull.
/// * Only copies of one point: that point.
/// * Only co-linear points: the two extreme points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
///
/// # Time complexity
/// $O(n h)$ where h is the number of points on the convex hull.
///
/// # Examples
///
/// ```rust
/// # use hullcloud::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use hullcloud::data::{Point, PointCloud};
/// let cloud: PointCloud = vec![(0., 0.), (4., 0.), (4., 4.), (0., 4.), (2., 2.)]
///   .into_iter()
///   .collect();
/// assert_eq!(
///   convex_hull(&cloud).points(),
///   &[
///     Point::new([0., 0.]),
///     Point::new([0., 4.]),
///     Point::new([4., 4.]),
///     Point::new([4., 0.]),
///   ]
/// );
///
/// let too_small: PointCloud = vec![(0., 0.), (1., 1.)].into_iter().collect();
/// assert!(convex_hull(&too_small).is_empty());
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(cloud: &PointCloud<T>) -> Hull<T>
where
  T: HullScalar,
{
  let pts = cloud.points();
  let tolerance = cloud.tolerance();
  let n = pts.len();
  let leftmost = match leftmost_point_index(pts) {
    Some(leftmost) if n >= 3 => leftmost,
    _ => return Hull::default(),
  };

  // Without a strict winner for the next vertex the walk is not guaranteed
  // to close, so co-linear clouds are answered directly.
  if let Some(extremes) = colinear_extremes(pts, leftmost, tolerance) {
    log::debug!(
      "gift wrapping: all {} points are co-linear, returning {} extreme point(s)",
      n,
      extremes.len()
    );
    return Hull::new_unchecked(extremes);
  }

  match wrap(pts, leftmost, tolerance) {
    Some(hull) if is_convex_cw(&hull) => Hull::new_unchecked(hull),
    _ => {
      // A positive tolerance can make the walk skip the starting vertex and
      // circle a sub-polygon. The chains honour the same tolerance.
      log::debug!(
        "gift wrapping: walk did not close with tolerance {}, using monotone chains",
        tolerance
      );
      let mut hull = monotone_chains(&cloud.sorted(), tolerance);
      if hull.len() > 1 {
        hull[1..].reverse();
      }
      Hull::new_unchecked(hull)
    }
  }
}

// Walks the boundary clockwise from `leftmost`. None if the walk comes back
// to any vertex other than the start.
// O(nh)
fn wrap<T>(pts: &[Point<T>], leftmost: usize, tolerance: T) -> Option<Vec<Point<T>>>
where
  T: HullScalar,
{
  let n = pts.len();
  let mut hull: Vec<Point<T>> = Vec::new();
  let mut p = leftmost;

  loop {
    hull.push(pts[p]);
    let mut q = (p + 1) % n;

    for i in 0..n {
      let orientation = Orientation::with_tolerance(&pts[p], &pts[i], &pts[q], tolerance);
      // Co-linear candidates: keep the farthest, as we want the minimal number of points on the hull.
      if orientation == Orientation::ClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }

    p = q;
    // Copies of the starting point close the walk as well.
    if p == leftmost || pts[p] == pts[leftmost] {
      return Some(hull);
    }
    if hull.contains(&pts[p]) {
      return None;
    }
  }
}

// Strict clockwise turns everywhere, and the x-coordinates rise then fall
// exactly once, so the boundary winds around a single time.
fn is_convex_cw<T>(hull: &[Point<T>]) -> bool
where
  T: HullScalar,
{
  let n = hull.len();
  if n < 3 {
    return false;
  }
  let turns_cw = (0..n).all(|i| cross(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]) < T::zero());
  let mut heading_left = false;
  for edge in hull.windows(2) {
    if edge[1].x_coord() < edge[0].x_coord() {
      heading_left = true;
    } else if heading_left && edge[1].x_coord() > edge[0].x_coord() {
      return false;
    }
  }
  turns_cw
}

// Finds the index of the smallest point in lexicographic order, ie. the
// leftmost point with ties going to the lowest one. Among copies, the first
// occurrence wins.
// O(n)
fn leftmost_point_index<T>(pts: &[Point<T>]) -> Option<usize>
where
  T: HullScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.lexicographic_cmp(b))
    .map(|(index, _)| index)
}

// The hull of a co-linear cloud: the leftmost point and the point farthest
// away from it. None if the cloud spans a proper polygon.
// O(n)
fn colinear_extremes<T>(pts: &[Point<T>], leftmost: usize, tolerance: T) -> Option<Vec<Point<T>>>
where
  T: HullScalar,
{
  let origin = &pts[leftmost];
  let farthest = pts
    .iter()
    .fold(origin, |best, pt| {
      if origin.cmp_distance_to(pt, best) == Ordering::Greater {
        pt
      } else {
        best
      }
    });
  if farthest == origin {
    return Some(vec![*origin]);
  }
  pts
    .iter()
    .all(|pt| Orientation::with_tolerance(origin, farthest, pt, tolerance).is_colinear())
    .then(|| vec![*origin, *farthest])
}
