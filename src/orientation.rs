use crate::data::Point;
use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p`
  /// to `q` to `r`.
  ///
  /// The classification is exact: the triple is co-linear only if the
  /// floating point turn value is exactly zero.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullcloud::data::Point;
  /// # use hullcloud::Orientation;
  /// let p1 = Point::new([ 0., 0. ]);
  /// let p2 = Point::new([ 0., 1. ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0., 2. ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1., 2. ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1., 2. ])).is_cw());
  /// ```
  pub fn new<T>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: HullScalar,
  {
    Orientation::with_tolerance(p, q, r, T::zero())
  }

  /// Like [`Orientation::new`] but turn values within `tolerance` of zero
  /// are reported as [`Orientation::CoLinear`].
  ///
  /// A tolerance of zero gives exactly the classification of
  /// [`Orientation::new`].
  pub fn with_tolerance<T>(p: &Point<T>, q: &Point<T>, r: &Point<T>, tolerance: T) -> Orientation
  where
    T: HullScalar,
  {
    let val = turn_value(p, q, r);
    if val.abs() <= tolerance {
      CoLinear
    } else if val > T::zero() {
      ClockWise
    } else {
      CounterClockWise
    }
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

// Positive for clockwise turns.
fn turn_value<T>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> T
where
  T: HullScalar,
{
  (q.y_coord() - p.y_coord()) * (r.x_coord() - q.x_coord())
    - (q.x_coord() - p.x_coord()) * (r.y_coord() - q.y_coord())
}

/// Cross product of the vectors `o->a` and `o->b`.
///
/// Positive when `o`, `a`, `b` make a counter-clockwise turn, negative when
/// they turn clockwise and zero when co-linear. Its magnitude is twice the
/// area of the triangle, which makes it usable as a distance from the line
/// `o->a`.
pub fn cross<T>(o: &Point<T>, a: &Point<T>, b: &Point<T>) -> T
where
  T: HullScalar,
{
  (a.x_coord() - o.x_coord()) * (b.y_coord() - o.y_coord())
    - (a.y_coord() - o.y_coord()) * (b.x_coord() - o.x_coord())
}
