// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape basics.
//!
//! Build one shape of each kind, print the overlap table, then use tangent
//! offsets to rest a point on top of each shape.
//!
//! Run:
//! - `cargo run -p tussle_demos --example shapes_basics`

use kurbo::{Point, Vec2};
use tussle_geom::{Aabb, Direction, Polygon, Segment, Shape, Translate, overlaps};

fn main() {
    let shapes = [
        ("point", Shape::Point(Point::new(2.0, 3.0))),
        (
            "box",
            Shape::Aabb(Aabb::new(Point::new(1.0, 1.0), Point::new(5.0, 3.0))),
        ),
        (
            "segment",
            Shape::Segment(Segment::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0))),
        ),
        (
            "quad",
            Shape::Polygon(Polygon::new([
                Point::new(0.0, 0.0),
                Point::new(3.0, 0.1),
                Point::new(2.0, 4.0),
                Point::new(0.0, 4.0),
            ])),
        ),
    ];

    println!("== Overlap table ==");
    print!("{:>9}", "");
    for (name, _) in &shapes {
        print!("{name:>9}");
    }
    println!();
    for (name, a) in &shapes {
        print!("{name:>9}");
        for (_, b) in &shapes {
            print!("{:>9}", if overlaps(a, b) { "yes" } else { "-" });
        }
        println!();
    }

    println!("== Resting a point on each shape ==");
    let above = Point::new(1.5, 10.0);
    for (name, shape) in &shapes {
        let offset = shape.tangent_offset(above, Direction::Down);
        let landed = above.translated(offset);
        println!(
            "  {name:>8}: offset=({:.2}, {:.2})  landed=({:.2}, {:.2})  touching={}",
            offset.x,
            offset.y,
            landed.x,
            landed.y,
            shape.contains(landed)
        );
    }

    println!("== Moving the quad ==");
    let (_, quad) = &shapes[3];
    let moved = quad.clone().translated(Vec2::new(10.0, 0.0));
    println!("  bounds before: {:?}", quad.bounds().to_rect());
    println!("  bounds after:  {:?}", moved.bounds().to_rect());
    println!("  still overlaps the box: {}", moved.overlaps(&shapes[1].1));
}
