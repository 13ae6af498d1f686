use criterion::{black_box, criterion_group, criterion_main, Criterion};

use linalgebra::{Line, LinearSystem, Plane, Vector};

fn line(normal: [&str; 2], constant: &str) -> Line {
    Line::new(Vector::parse(normal).unwrap(), constant.parse::<linalgebra::Decimal>().unwrap())
        .unwrap()
}

fn bench_vector(c: &mut Criterion) {
    let a = Vector::parse(["8.462", "7.893", "-8.187"]).unwrap();
    let b = Vector::parse(["6.984", "-5.975", "4.778"]).unwrap();

    c.bench_function("vector_is_parallel_to", |bench| {
        bench.iter(|| black_box(&a).is_parallel_to(black_box(&b)))
    });
    c.bench_function("vector_cross", |bench| {
        bench.iter(|| black_box(&a).cross(black_box(&b)))
    });
    c.bench_function("vector_projected_onto", |bench| {
        bench.iter(|| black_box(&a).projected_onto(black_box(&b)))
    });
}

fn bench_lines(c: &mut Criterion) {
    let crossing = (line(["7.204", "3.182"], "8.68"), line(["8.172", "4.114"], "9.883"));
    let coincident = (line(["4.046", "2.836"], "1.21"), line(["10.115", "7.09"], "3.025"));

    c.bench_function("line_intersection_point", |bench| {
        bench.iter(|| black_box(&crossing.0).intersection_with(black_box(&crossing.1)))
    });
    c.bench_function("line_intersection_coincident", |bench| {
        bench.iter(|| black_box(&coincident.0).intersection_with(black_box(&coincident.1)))
    });
}

fn bench_row_operations(c: &mut Criterion) {
    let planes: Vec<Plane> = vec![
        "x_1 + x_2 + x_3 = 1".parse().unwrap(),
        "x_2 = 2".parse().unwrap(),
        "x_1 + x_2 - x_3 = 3".parse().unwrap(),
        "x_1 - 2x_3 = 2".parse().unwrap(),
    ];

    c.bench_function("linsys_add_scaled_row_to_row", |bench| {
        bench.iter(|| {
            let mut s: LinearSystem = LinearSystem::new(planes.clone());
            s.add_scaled_row_to_row(-1, 0, 2).unwrap();
            s.add_scaled_row_to_row(-1, 0, 3).unwrap();
            black_box(s.indices_of_first_nonzero_terms())
        })
    });
}

criterion_group!(benches, bench_vector, bench_lines, bench_row_operations);
criterion_main!(benches);
