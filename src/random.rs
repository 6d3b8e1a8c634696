//! Random point clouds.
use std::fmt;
use std::str::FromStr;

use rand::distributions::Uniform;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::data::{Point, PointCloud};

/// Coordinate distributions for generated clouds. Both coordinates are drawn
/// independently from the same distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
  /// Uniform in `[0, 1)`.
  UniformUnit,
  /// Uniform in `[-5, 5)`.
  UniformFive,
  /// Standard normal: mean 0, variance 1.
  Gaussian,
}

impl Distribution {
  pub const ALL: [Distribution; 3] = [
    Distribution::UniformUnit,
    Distribution::UniformFive,
    Distribution::Gaussian,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Distribution::UniformUnit => "uniform-unit",
      Distribution::UniformFive => "uniform-five",
      Distribution::Gaussian => "gaussian",
    }
  }

  pub fn sample_point<R: Rng + ?Sized>(self, rng: &mut R) -> Point<f64> {
    match self {
      Distribution::UniformUnit => {
        let range = Uniform::new(0.0, 1.0);
        Point::new([rng.sample(range), rng.sample(range)])
      }
      Distribution::UniformFive => {
        let range = Uniform::new(-5.0, 5.0);
        Point::new([rng.sample(range), rng.sample(range)])
      }
      Distribution::Gaussian => Point::new([rng.sample(StandardNormal), rng.sample(StandardNormal)]),
    }
  }

  /// `n` points drawn from `rng`.
  pub fn sample_points<R: Rng + ?Sized>(self, rng: &mut R, n: usize) -> Vec<Point<f64>> {
    (0..n).map(|_| self.sample_point(rng)).collect()
  }
}

impl fmt::Display for Distribution {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Distribution {
  type Err = String;

  fn from_str(s: &str) -> Result<Distribution, String> {
    match s.trim().to_ascii_lowercase().as_str() {
      "uniform-unit" | "unit" | "uniform" => Ok(Distribution::UniformUnit),
      "uniform-five" | "five" => Ok(Distribution::UniformFive),
      "gaussian" | "normal" | "gauss" => Ok(Distribution::Gaussian),
      other => Err(format!("unknown distribution: {:?}", other)),
    }
  }
}

/// A cloud of `n` points. The same seed always gives the same cloud.
///
/// # Examples
///
/// ```rust
/// # use hullcloud::random::{random_cloud, Distribution};
/// let cloud = random_cloud(100, Distribution::UniformFive, 7);
/// assert_eq!(cloud.len(), 100);
/// assert_eq!(cloud, random_cloud(100, Distribution::UniformFive, 7));
/// ```
pub fn random_cloud(n: usize, distribution: Distribution, seed: u64) -> PointCloud<f64> {
  let mut rng = SmallRng::seed_from_u64(seed);
  PointCloud::new(distribution.sample_points(&mut rng, n))
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use claims::assert_ok_eq;

  #[test]
  fn parse_names() {
    for distribution in Distribution::ALL {
      assert_ok_eq!(distribution.name().parse::<Distribution>(), distribution);
    }
    assert_ok_eq!("Normal".parse::<Distribution>(), Distribution::Gaussian);
    assert!("poisson".parse::<Distribution>().is_err());
  }

  #[test]
  fn uniform_bounds() {
    let unit = random_cloud(1000, Distribution::UniformUnit, 1);
    assert!(unit
      .iter()
      .all(|pt| pt.iter().all(|&c| (0.0..1.0).contains(&c))));
    let five = random_cloud(1000, Distribution::UniformFive, 1);
    assert!(five
      .iter()
      .all(|pt| pt.iter().all(|&c| (-5.0..5.0).contains(&c))));
    // Not squeezed into the unit square.
    assert!(five.iter().any(|pt| pt.x_coord() < -1.0));
  }

  #[test]
  fn gaussian_is_centered() {
    let cloud = random_cloud(10_000, Distribution::Gaussian, 3);
    let n = cloud.len() as f64;
    let mean_x = cloud.iter().map(|pt| pt.x_coord()).sum::<f64>() / n;
    let mean_y = cloud.iter().map(|pt| pt.y_coord()).sum::<f64>() / n;
    let var_x = cloud
      .iter()
      .map(|pt| (pt.x_coord() - mean_x).powi(2))
      .sum::<f64>()
      / n;
    assert!(mean_x.abs() < 0.1, "{}", mean_x);
    assert!(mean_y.abs() < 0.1, "{}", mean_y);
    assert!((var_x - 1.0).abs() < 0.1, "{}", var_x);
    assert!(cloud.iter().all(|pt| pt.is_finite()));
  }

  #[test]
  fn seeds() {
    for distribution in Distribution::ALL {
      assert_eq!(
        random_cloud(20, distribution, 11),
        random_cloud(20, distribution, 11)
      );
      assert_ne!(
        random_cloud(20, distribution, 11),
        random_cloud(20, distribution, 12)
      );
    }
    assert!(random_cloud(0, Distribution::Gaussian, 0).is_empty());
  }
}
