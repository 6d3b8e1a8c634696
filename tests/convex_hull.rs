mod convex_hull {
  use hullcloud::algorithms::Algorithm;
  use hullcloud::data::*;
  use hullcloud::io::{read_points, write_points};
  use hullcloud::random::{random_cloud, Distribution};
  use hullcloud::*;

  #[test]
  fn random_clouds_agree() {
    for distribution in Distribution::ALL {
      for seed in 0..5 {
        let cloud = random_cloud(300, distribution, seed);
        let reference = cloud.graham_scan();
        assert!(reference.len() >= 3);
        for algorithm in Algorithm::ALL {
          let hull = cloud.convex_hull(algorithm);
          assert!(
            hull.same_boundary(&reference),
            "{} disagrees on {} seed {}",
            algorithm,
            distribution,
            seed
          );
        }
      }
    }
  }

  #[test]
  fn random_clouds_are_contained() {
    let cloud = random_cloud(500, Distribution::UniformFive, 42);
    for algorithm in Algorithm::ALL {
      let hull = cloud.convex_hull(algorithm);
      for pt in cloud.iter() {
        assert_ne!(hull.locate(pt), PointLocation::Outside, "{}", algorithm);
      }
    }
  }

  #[test]
  fn hull_from_point_file() -> Result<(), Error> {
    let text = "X Y\n0 0\n1 1\n2 2\n2 0\n0 2\n";
    let cloud = PointCloud::new(read_points(text.as_bytes())?);
    let hull = cloud.monotone_chain();
    assert_eq!(
      hull.points(),
      &[
        Point::new([0., 0.]),
        Point::new([2., 0.]),
        Point::new([2., 2.]),
        Point::new([0., 2.]),
      ]
    );

    let mut buf = Vec::new();
    write_points(&mut buf, hull.points())?;
    assert_eq!(
      String::from_utf8_lossy(&buf),
      "X Y\n0 0\n2 0\n2 2\n0 2\n"
    );
    Ok(())
  }

  #[test]
  fn malformed_point_file() {
    let text = "X Y\n0 0\n1\n";
    assert_eq!(
      read_points(text.as_bytes()),
      Err(Error::MissingCoordinate { line: 3 })
    );
  }

  #[test]
  fn single_precision() {
    let cloud: PointCloud<f32> = vec![(0f32, 0f32), (4., 0.), (4., 4.), (0., 4.), (2., 2.)]
      .into_iter()
      .collect();
    for algorithm in Algorithm::ALL {
      assert_eq!(cloud.convex_hull(algorithm).len(), 4, "{}", algorithm);
    }
  }
}
