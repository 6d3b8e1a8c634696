use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hullcloud::algorithms::{convex_hull, Algorithm};
use hullcloud::random::{random_cloud, Distribution};

const SIZES: [usize; 7] = [10, 50, 100, 200, 400, 800, 1000];

pub fn criterion_benchmark(c: &mut Criterion) {
  for distribution in Distribution::ALL {
    let mut group = c.benchmark_group(format!("convex_hull/{}", distribution));
    for &n in &SIZES {
      let cloud = random_cloud(n, distribution, 1);
      for algorithm in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &cloud, |b, cloud| {
          b.iter(|| convex_hull(cloud, algorithm))
        });
      }
    }
    group.finish();
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
