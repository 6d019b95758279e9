use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knapsack::instance::Item;
use knapsack::real::Real;
use knapsack::vector::CostVector;
use knapsack::{solve_bi, solve_tri, Instance, OrderName};

fn bi_objective_instance(n: usize) -> Instance {
    let items: Vec<Item> = (0..n)
        .map(|i| {
            let a = Real::new(((i * 37 + 5) % 97) as f64 + 1.0);
            let b = Real::new(((i * 59 + 11) % 83) as f64 + 1.0);
            let w = Real::new(((i * 23 + 3) % 29) as f64 + 1.0);
            Item::new(i, CostVector::from_vec(vec![a, b]), w)
        })
        .collect();
    Instance::new(items, Real::new((n as f64) * 10.0), 2).unwrap()
}

fn tri_objective_instance(n: usize) -> Instance {
    let items: Vec<Item> = (0..n)
        .map(|i| {
            let a = Real::new(((i * 37 + 5) % 97) as f64 + 1.0);
            let b = Real::new(((i * 59 + 11) % 83) as f64 + 1.0);
            let c = Real::new(((i * 71 + 13) % 61) as f64 + 1.0);
            let w = Real::new(((i * 23 + 3) % 29) as f64 + 1.0);
            Item::new(i, CostVector::from_vec(vec![a, b, c]), w)
        })
        .collect();
    Instance::new(items, Real::new((n as f64) * 10.0), 3).unwrap()
}

fn bench_bi(c: &mut Criterion) {
    let instance = bi_objective_instance(20);
    c.bench_function("solve_bi", |b| b.iter(|| solve_bi(black_box(&instance)).unwrap()));
}

fn bench_tri(c: &mut Criterion) {
    let instance = tri_objective_instance(14);
    c.bench_function("solve_tri", |b| b.iter(|| solve_tri(black_box(&instance), OrderName::Topological).unwrap()));
}

criterion_group!(benches, bench_bi, bench_tri);
criterion_main!(benches);
