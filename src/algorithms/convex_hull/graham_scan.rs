use crate::algorithms::convex_hull::monotone_chain::monotone_chains;
use crate::data::{Hull, PointCloud};
use crate::HullScalar;

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    Output is counter-clockwise, starting at the lexicographically smallest point.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a point cloud.
///
/// [Graham scan][wiki] over lexicographically sorted points: a stack is swept
/// left to right for the lower half of the hull and right to left for the
/// upper half, popping every point that does not make a strict left turn.
/// The chain construction is shared with
/// [`monotone_chain`](super::monotone_chain::convex_hull), so both always
/// return the same hull.
///
/// # Degenerate input
/// * No points: empty hull.
/// * One point, or only copies of one point: that point.
/// * Only co-linear points: the two extreme points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
/// * Co-linear points on the boundary are not part of the hull.
///
/// # Examples
///
/// ```rust
/// # use hullcloud::algorithms::convex_hull::graham_scan::convex_hull;
/// # use hullcloud::data::{Point, PointCloud};
/// let empty_set: PointCloud = PointCloud::new(vec![]);
/// assert!(convex_hull(&empty_set).is_empty());
///
/// let dups: PointCloud = PointCloud::new(vec![Point::new([0., 0.])].repeat(3));
/// assert_eq!(convex_hull(&dups).points(), &[Point::new([0., 0.])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(cloud: &PointCloud<T>) -> Hull<T>
where
  T: HullScalar,
{
  Hull::new_unchecked(monotone_chains(&cloud.sorted(), cloud.tolerance()))
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::algorithms::convex_hull::monotone_chain;
  use crate::data::{Point, PointLocation};
  use crate::testing::*;

  use proptest::collection::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn convex_hull_colinear_rev() {
    let cloud: PointCloud = vec![(0., 0.), (1., 0.), (0., 9.), (0., 8.), (0., 7.), (0., 6.)]
      .into_iter()
      .collect();
    assert_eq!(
      convex_hull(&cloud).points(),
      &[Point::new([0., 0.]), Point::new([1., 0.]), Point::new([0., 9.])]
    );
  }

  #[test]
  fn convex_hull_two_points() {
    let cloud: PointCloud = vec![(5., 5.), (1., 9.)].into_iter().collect();
    assert_eq!(
      convex_hull(&cloud).points(),
      &[Point::new([1., 9.]), Point::new([5., 5.])]
    );
  }

  #[test]
  fn convex_hull_leaves_cloud_untouched() {
    let pts = vec![
      Point::new([3., 0.]),
      Point::new([0., 0.]),
      Point::new([1., 1.]),
      Point::new([0., 3.]),
    ];
    let cloud = PointCloud::new(pts.clone());
    let _ = convex_hull(&cloud);
    assert_eq!(cloud.points(), &pts[..]);
  }

  #[test]
  fn unit_1() {
    let cloud: PointCloud = vec![(0., 0.), (-1., 1.), (0., 1.), (-717193444., 1.)]
      .into_iter()
      .collect();
    let hull = convex_hull(&cloud);
    assert_eq!(
      hull.points(),
      &[
        Point::new([-717193444., 1.]),
        Point::new([0., 0.]),
        Point::new([0., 1.]),
      ]
    );
  }

  #[proptest]
  fn matches_monotone_chain(#[strategy(vec(any_small(), 0..100))] pts: Vec<Point<f64>>) {
    let cloud = PointCloud::new(pts);
    prop_assert_eq!(convex_hull(&cloud), monotone_chain::convex_hull(&cloud));
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(vec(any_small(), 0..100))] pts: Vec<Point<f64>>) {
    let hull = convex_hull(&PointCloud::new(pts.clone()));
    // Prop #1: Results are counter-clockwise.
    if hull.len() >= 3 {
      prop_assert!(hull.is_ccw());
    }
    // Prop #2: No points from the input set are outside the hull.
    for pt in pts.iter() {
      prop_assert_ne!(hull.locate(pt), PointLocation::Outside)
    }
    // Prop #3: All vertices are in the input set.
    for pt in hull.iter() {
      prop_assert!(pts.contains(pt))
    }
  }
}
