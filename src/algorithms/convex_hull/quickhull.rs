use std::ops::Range;

use crate::data::{Hull, Point, PointCloud};
use crate::{cross, HullScalar};

// https://en.wikipedia.org/wiki/Quickhull

// Properties:
//    No panics.
//    Output is clockwise, starting at the lexicographically smallest point.
//    No points are outside the resulting hull.
//    Constant stack depth.
/// Convex hull of a point cloud.
///
/// [Quickhull][wiki] algorithm. The segment between the lexicographically
/// smallest and largest points splits the cloud in two. For each side, the
/// point farthest from the segment is a hull vertex; the points outside the
/// two new segments are processed the same way until no candidates remain.
///
/// Points exactly on a splitting segment are discarded, so co-linear
/// boundary points are not part of the hull. The first of several equally
/// far points (in lexicographic order) is picked.
///
/// Recursion is replaced by an explicit work-list over a single buffer, so
/// even adversarial inputs cannot exhaust the call stack.
///
/// # Degenerate input
/// * No points: empty hull.
/// * Only copies of one point: that point.
/// * Only co-linear points: the two extreme points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
///
/// # Time complexity
/// $O(n \log n)$ expected, $O(n^2)$ in the worst case.
///
/// # Examples
///
/// ```rust
/// # use hullcloud::algorithms::convex_hull::quickhull::convex_hull;
/// # use hullcloud::data::{Point, PointCloud};
/// let cloud: PointCloud = vec![(0., 0.), (1., 1.), (2., 2.), (2., 0.), (0., 2.)]
///   .into_iter()
///   .collect();
/// assert_eq!(
///   convex_hull(&cloud).points(),
///   &[
///     Point::new([0., 0.]),
///     Point::new([0., 2.]),
///     Point::new([2., 2.]),
///     Point::new([2., 0.]),
///   ]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Quickhull
pub fn convex_hull<T>(cloud: &PointCloud<T>) -> Hull<T>
where
  T: HullScalar,
{
  let tolerance = cloud.tolerance();
  let sorted = cloud.sorted();
  let (min, max) = match (sorted.first(), sorted.last()) {
    (Some(&min), Some(&max)) => (min, max),
    _ => return Hull::default(),
  };
  if min == max {
    return Hull::new_unchecked(vec![min]);
  }

  // Candidates on either side of min->max, each side kept in sorted order.
  let mut buffer: Vec<Point<T>> = sorted
    .iter()
    .filter(|&pt| cross(&min, &max, pt) > tolerance)
    .copied()
    .collect();
  let upper = 0..buffer.len();
  buffer.extend(
    sorted
      .iter()
      .filter(|&pt| cross(&max, &min, pt) > tolerance),
  );
  let lower = upper.end..buffer.len();

  let mut hull = vec![min];
  let mut tasks = vec![
    Task::Split {
      from: max,
      to: min,
      range: lower,
    },
    Task::Emit(max),
    Task::Split {
      from: min,
      to: max,
      range: upper,
    },
  ];
  let mut scratch = Vec::new();
  let mut splits = 0usize;

  while let Some(task) = tasks.pop() {
    match task {
      Task::Emit(pt) => hull.push(pt),
      Task::Split { from, to, range } => {
        let far = match farthest_point(&buffer[range.clone()], &from, &to) {
          Some(far) => far,
          None => continue,
        };
        splits += 1;
        let (left, right) = partition(&mut buffer, range, &from, &far, &to, tolerance, &mut scratch);
        // Pushed in reverse: the left side is emitted first.
        tasks.push(Task::Split {
          from: far,
          to,
          range: right,
        });
        tasks.push(Task::Emit(far));
        tasks.push(Task::Split {
          from,
          to: far,
          range: left,
        });
      }
    }
  }
  log::trace!(
    "quickhull: {} points, {} splits, {} hull points",
    sorted.len(),
    splits,
    hull.len()
  );

  Hull::new_unchecked(hull)
}

// Hull points left of `from->to` are found among `buffer[range]`.
enum Task<T> {
  Split {
    from: Point<T>,
    to: Point<T>,
    range: Range<usize>,
  },
  Emit(Point<T>),
}

// The point farthest from the line through `from` and `to`. Ties go to the
// first such point.
fn farthest_point<T>(candidates: &[Point<T>], from: &Point<T>, to: &Point<T>) -> Option<Point<T>>
where
  T: HullScalar,
{
  let mut best: Option<(T, Point<T>)> = None;
  for pt in candidates {
    let dist = cross(from, to, pt).abs();
    match best {
      Some((best_dist, _)) if dist <= best_dist => {}
      _ => best = Some((dist, *pt)),
    }
  }
  best.map(|(_, pt)| pt)
}

// Stable partition of `buffer[range]` into the points outside `from->far`
// followed by the points outside `far->to`. Everything else is dropped.
// Returns the two sub-ranges.
fn partition<T>(
  buffer: &mut [Point<T>],
  range: Range<usize>,
  from: &Point<T>,
  far: &Point<T>,
  to: &Point<T>,
  tolerance: T,
  scratch: &mut Vec<Point<T>>,
) -> (Range<usize>, Range<usize>)
where
  T: HullScalar,
{
  scratch.clear();
  let candidates = &buffer[range.clone()];
  scratch.extend(
    candidates
      .iter()
      .filter(|&pt| cross(from, far, pt) > tolerance),
  );
  let left_len = scratch.len();
  // A point is never on both sides; the first test wins should rounding disagree.
  scratch.extend(
    candidates
      .iter()
      .filter(|&pt| cross(from, far, pt) <= tolerance && cross(far, to, pt) > tolerance),
  );
  let start = range.start;
  buffer[start..start + scratch.len()].copy_from_slice(scratch.as_slice());
  (
    start..start + left_len,
    start + left_len..start + scratch.len(),
  )
}
