mod hull;
pub(crate) mod point;
mod point_cloud;

pub use hull::Hull;
pub use point::Point;
pub use point_cloud::PointCloud;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
