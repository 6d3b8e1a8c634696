use crate::data::{Hull, Point, PointCloud};
use crate::{cross, HullScalar};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

// Properties:
//    No panics.
//    Output is counter-clockwise, starting at the lexicographically smallest point.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a point cloud.
///
/// Andrew's [monotone chain][wiki] algorithm. The points are sorted
/// lexicographically and the lower and upper halves of the hull are built by
/// a left-to-right and a right-to-left sweep.
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
/// # use hullcloud::algorithms::convex_hull::monotone_chain::convex_hull;
/// # use hullcloud::data::{Point, PointCloud};
/// let cloud: PointCloud = vec![(0., 0.), (2., 0.), (1., 0.), (1., 3.)]
///   .into_iter()
///   .collect();
/// assert_eq!(
///   convex_hull(&cloud).points(),
///   &[Point::new([0., 0.]), Point::new([2., 0.]), Point::new([1., 3.])]
/// );
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull<T>(cloud: &PointCloud<T>) -> Hull<T>
where
  T: HullScalar,
{
  Hull::new_unchecked(monotone_chains(&cloud.sorted(), cloud.tolerance()))
}

// Joins the lower and upper chains of lexicographically sorted points.
// Shared with the Graham scan.
pub(crate) fn monotone_chains<T>(sorted: &[Point<T>], tolerance: T) -> Vec<Point<T>>
where
  T: HullScalar,
{
  if sorted.len() < 2 {
    return sorted.to_vec();
  }
  let lower = half_hull(sorted.iter(), tolerance);
  let upper = half_hull(sorted.iter().rev(), tolerance);

  // Both chains hold at least two points. Their last points are the first
  // points of the other chain.
  let mut hull = Vec::with_capacity(lower.len() + upper.len() - 2);
  hull.extend_from_slice(&lower[..lower.len() - 1]);
  hull.extend_from_slice(&upper[..upper.len() - 1]);

  // Every point is a copy of the same point.
  if hull.len() == 2 && hull[0] == hull[1] {
    hull.truncate(1);
  }
  hull
}

// Keep only strict left turns.
fn half_hull<'a, T, I>(pts: I, tolerance: T) -> Vec<Point<T>>
where
  T: HullScalar,
  I: Iterator<Item = &'a Point<T>>,
{
  let mut chain: Vec<Point<T>> = Vec::new();
  for pt in pts {
    while chain.len() >= 2 && cross(&chain[chain.len() - 2], &chain[chain.len() - 1], pt) <= tolerance
    {
      chain.pop();
    }
    chain.push(*pt);
  }
  chain
}
