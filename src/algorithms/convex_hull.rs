use std::fmt;
use std::str::FromStr;

use crate::data::{Hull, PointCloud};
use crate::HullScalar;

pub mod gift_wrapping;
pub mod graham_scan;
pub mod monotone_chain;
pub mod quickhull;

/// The convex hull algorithms offered by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
  GrahamScan,
  JarvisMarch,
  Quickhull,
  MonotoneChain,
}

impl Algorithm {
  pub const ALL: [Algorithm; 4] = [
    Algorithm::GrahamScan,
    Algorithm::JarvisMarch,
    Algorithm::Quickhull,
    Algorithm::MonotoneChain,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Algorithm::GrahamScan => "Graham Scan",
      Algorithm::JarvisMarch => "Jarvis March",
      Algorithm::Quickhull => "Quickhull",
      Algorithm::MonotoneChain => "Monotone Chain",
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Algorithm {
  type Err = String;

  /// Accepts short names (`graham`, `jarvis`, `quickhull`, `monotone`) as
  /// well as the snake case spelling of each variant.
  fn from_str(s: &str) -> Result<Algorithm, String> {
    match s.trim().to_ascii_lowercase().as_str() {
      "graham" | "graham_scan" => Ok(Algorithm::GrahamScan),
      "jarvis" | "jarvis_march" | "gift_wrapping" => Ok(Algorithm::JarvisMarch),
      "quickhull" | "quick_hull" => Ok(Algorithm::Quickhull),
      "monotone" | "monotone_chain" => Ok(Algorithm::MonotoneChain),
      other => Err(format!("unknown convex hull algorithm: {:?}", other)),
    }
  }
}

/// Convex hull of a point cloud using the given algorithm.
///
/// # Examples
///
/// ```rust
/// # use hullcloud::algorithms::{convex_hull, Algorithm};
/// # use hullcloud::data::PointCloud;
/// let cloud: PointCloud = vec![(0., 0.), (1., 1.), (2., 2.), (2., 0.), (0., 2.)]
///   .into_iter()
///   .collect();
/// let reference = convex_hull(&cloud, Algorithm::GrahamScan);
/// for algorithm in Algorithm::ALL {
///   assert!(convex_hull(&cloud, algorithm).same_boundary(&reference));
/// }
/// ```
pub fn convex_hull<T>(cloud: &PointCloud<T>, algorithm: Algorithm) -> Hull<T>
where
  T: HullScalar,
{
  match algorithm {
    Algorithm::GrahamScan => graham_scan::convex_hull(cloud),
    Algorithm::JarvisMarch => gift_wrapping::convex_hull(cloud),
    Algorithm::Quickhull => quickhull::convex_hull(cloud),
    Algorithm::MonotoneChain => monotone_chain::convex_hull(cloud),
  }
}
