use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use regrid_core::{resample, resample_grouped, Table};

fn gen_table(n: usize, groups: usize) -> Table {
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut grp = Vec::with_capacity(n);
    let per_group = n / groups.max(1);
    for i in 0..n {
        // irregular spacing so interpolation actually runs
        let local = (i % per_group.max(1)) as f64;
        x.push(local * 2.0 + (local * 0.37).sin());
        y.push((i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001);
        grp.push((i / per_group.max(1)) as f64);
    }
    Table::new()
        .with_float("x", x)
        .with_float("y", y)
        .with_float("grp", grp)
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_table(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &data, |b, d| {
            b.iter(|| {
                let _ = black_box(resample(d, "x", 1.0).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_resample_grouped(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_grouped");
    for &g in &[4usize, 32usize] {
        let data = gen_table(100_000, g);
        group.bench_with_input(BenchmarkId::from_parameter(format!("g{g}")), &data, |b, d| {
            b.iter(|| {
                let _ = black_box(resample_grouped(d, "x", 1.0, "grp").unwrap());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resample, bench_resample_grouped);
criterion_main!(benches);
