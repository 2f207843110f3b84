// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::convert::Infallible;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use tussle_actors::actors::Actors;
use tussle_actors::dispatch::Dispatcher;
use tussle_actors::registry::Registry;
use tussle_actors::types::{Capabilities, Contact};
use tussle_geom::{Aabb, Point, Shape};

/// Entities laid out on a grid; every cell overlaps its right and upper neighbor.
struct Grid {
    cells: Vec<Aabb>,
    contacts: usize,
}

impl Grid {
    fn new(n: usize, cell: f64) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        for y in 0..n {
            for x in 0..n {
                let origin = Point::new(x as f64 * cell, y as f64 * cell);
                cells.push(Aabb::from_origin_size(origin, cell * 1.2, cell * 1.2));
            }
        }
        Self { cells, contacts: 0 }
    }
}

impl Actors<usize> for Grid {
    type Error = Infallible;

    fn colliders(&self, actor: &usize) -> Vec<Shape> {
        vec![Shape::Aabb(self.cells[*actor])]
    }

    fn on_collision(
        &mut self,
        _contact: &Contact<'_, usize>,
        _registry: &mut Registry<usize>,
    ) -> Result<(), Self::Error> {
        self.contacts += 1;
        Ok(())
    }

    fn on_tick(&mut self, _actor: usize, _registry: &mut Registry<usize>) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn dispatcher_for(grid: &Grid) -> Dispatcher<usize> {
    let mut d = Dispatcher::new();
    for id in 0..grid.cells.len() {
        d.registry_mut()
            .add(id, Capabilities::COLLIDABLE | Capabilities::TICK);
    }
    d
}

fn bench_collide(c: &mut Criterion) {
    let mut group = c.benchmark_group("collide");
    for &n in &[4_usize, 8, 16] {
        let count = n * n;
        group.throughput(Throughput::Elements((count * count) as u64));
        group.bench_function(format!("grid_step_n{count}"), |b| {
            b.iter_batched(
                || {
                    let grid = Grid::new(n, 10.0);
                    let d = dispatcher_for(&grid);
                    (grid, d)
                },
                |(mut grid, mut d)| {
                    let Ok(contacts) = d.step(&mut grid);
                    contacts
                },
                BatchSize::SmallInput,
            );
        });

        let grid = Grid::new(n, 10.0);
        let d = dispatcher_for(&grid);
        group.bench_function(format!("grid_contacts_n{count}"), |b| {
            b.iter(|| d.contacts(&grid).len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_collide);
criterion_main!(benches);
