#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar convex hulls of point clouds.
//!
//! Four classical algorithms are provided over the same [`PointCloud`](data::PointCloud):
//!
//! * [Graham scan](algorithms::convex_hull::graham_scan)
//! * [Jarvis march](algorithms::convex_hull::gift_wrapping) (gift wrapping)
//! * [Quickhull](algorithms::convex_hull::quickhull)
//! * [Monotone chain](algorithms::convex_hull::monotone_chain)
//!
//! ```rust
//! # use hullcloud::data::{Point, PointCloud};
//! let cloud = PointCloud::new(vec![
//!   Point::new([0., 0.]),
//!   Point::new([4., 0.]),
//!   Point::new([4., 4.]),
//!   Point::new([0., 4.]),
//!   Point::new([2., 2.]),
//! ]);
//! let hull = cloud.graham_scan();
//! assert_eq!(hull.len(), 4);
//! assert!(!hull.contains(&Point::new([2., 2.])));
//! ```
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

pub mod algorithms;
pub mod data;
pub mod io;
pub mod random;
pub mod render;
mod orientation;

#[cfg(test)]
pub mod testing;

pub use orientation::{cross, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  Io(std::io::ErrorKind),
  /// A data line holds fewer than two coordinates.
  MissingCoordinate { line: usize },
  /// A data line holds more than two coordinates.
  ExtraCoordinate { line: usize },
  InvalidNumber { line: usize },
  /// Coordinates must be finite; NaN and infinities are rejected.
  NonFinite { line: usize },
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::Io(kind) => write!(f, "I/O error: {}", kind),
      Error::MissingCoordinate { line } => write!(f, "Line {}: expected two coordinates", line),
      Error::ExtraCoordinate { line } => {
        write!(f, "Line {}: more than two coordinates", line)
      }
      Error::InvalidNumber { line } => write!(f, "Line {}: invalid number", line),
      Error::NonFinite { line } => write!(f, "Line {}: coordinate is not finite", line),
    }
  }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Error {
    Error::Io(err.kind())
  }
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type of points, hulls and clouds.
///
/// Arithmetic is plain floating point: predicates are as exact as the
/// hardware makes them, with an optional tolerance on each
/// [`PointCloud`](data::PointCloud).
pub trait HullScalar: Float + TotalOrd + Debug + Display + Send + Sync + 'static {}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl HullScalar for $ty {}
    )*
  };
}

floating_precision!(f32, f64);
