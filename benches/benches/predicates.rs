// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use tussle_geom::{
    Aabb, Direction, Point, Polygon, Segment, Shape, Vec2, overlaps, tangent_offset,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn point(&mut self, extent: f64) -> Point {
        Point::new(self.next_f64() * extent, self.next_f64() * extent)
    }
}

/// Regular polygon with `n` vertices around `center`.
fn regular_polygon(n: usize, center: Point, radius: f64) -> Polygon {
    Polygon::new((0..n).map(|i| {
        let a = core::f64::consts::TAU * i as f64 / n as f64;
        Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
    }))
}

/// One random shape of each kind, repeated.
fn gen_mixed_shapes(count: usize, extent: f64) -> Vec<Shape> {
    let mut rng = Rng::new(0x5EED_1234_ABCD_0001);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let p = rng.point(extent);
        let q = rng.point(extent);
        out.push(match i % 4 {
            0 => Shape::Point(p),
            1 => Shape::Aabb(Aabb::from_origin_size(p, 20.0, 12.0)),
            2 => Shape::Segment(Segment::new(p, q)),
            _ => Shape::Polygon(regular_polygon(6, p, 15.0)),
        });
    }
    out
}

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlaps");
    let shapes = gen_mixed_shapes(256, 500.0);
    group.throughput(Throughput::Elements((shapes.len() * shapes.len()) as u64));
    group.bench_function("mixed_all_pairs_256", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for a in &shapes {
                for s in &shapes {
                    hits += overlaps(black_box(a), black_box(s)) as usize;
                }
            }
            hits
        });
    });

    let seg_a = Shape::Segment(Segment::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0)));
    let seg_b = Shape::Segment(Segment::new(Point::new(1.0, 2.0), Point::new(6.0, 2.1)));
    group.bench_function("segment_segment", |b| {
        b.iter(|| overlaps(black_box(&seg_a), black_box(&seg_b)));
    });

    let bx = Shape::Aabb(Aabb::new(Point::new(0.0, 0.0), Point::new(6.0, 5.0)));
    group.bench_function("aabb_segment", |b| {
        b.iter(|| overlaps(black_box(&bx), black_box(&seg_b)));
    });
    group.finish();
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[8_usize, 64, 512] {
        let poly = regular_polygon(n, Point::new(0.0, 0.0), 100.0);
        let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
        // Query points in a square around the polygon, about half of them inside.
        let queries: Vec<Point> = (0..256)
            .map(|_| rng.point(240.0) - Vec2::new(120.0, 120.0))
            .collect();
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("contains_n{n}"), |b| {
            b.iter(|| queries.iter().filter(|p| poly.contains(**p)).count());
        });

        let other = Shape::Polygon(regular_polygon(n, Point::new(150.0, 0.0), 100.0));
        let shape = Shape::Polygon(poly.clone());
        group.bench_function(format!("polygon_polygon_n{n}"), |b| {
            b.iter(|| overlaps(black_box(&shape), black_box(&other)));
        });

        group.bench_function(format!("tangent_up_n{n}"), |b| {
            b.iter(|| tangent_offset(black_box(&shape), Point::new(10.0, -300.0), Direction::Up));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pairs, bench_polygon);
criterion_main!(benches);
