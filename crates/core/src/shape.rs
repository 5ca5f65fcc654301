//! Wireframe shape catalog.
//!
//! Shapes are described with the same parameters a scene-graph library
//! would take (box extents, torus radii, segment counts) and expanded into
//! line segments in model space, centered on the origin.

use glam::Vec3;
use std::collections::HashSet;
use std::f32::consts::{PI, TAU};

/// A model-space line segment.
pub type Edge = [Vec3; 2];

/// Segment counts above this are decimated when building line lists.
pub const MAX_WIRE_SEGMENTS: u32 = 24;

/// Parametric shape that can be expanded into wireframe edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned box.
    Box {
        /// Extent along x.
        width: f32,
        /// Extent along y.
        height: f32,
        /// Extent along z.
        depth: f32,
    },
    /// Y-aligned (truncated) cylinder.
    Cylinder {
        /// Radius of the +y cap.
        radius_top: f32,
        /// Radius of the -y cap.
        radius_bottom: f32,
        /// Extent along y.
        height: f32,
        /// Segments around the axis.
        segments: u32,
    },
    /// Y-aligned cone, apex at +y.
    Cone {
        /// Base radius.
        radius: f32,
        /// Extent along y.
        height: f32,
        /// Segments around the axis.
        segments: u32,
    },
    /// UV sphere.
    Sphere {
        /// Radius.
        radius: f32,
        /// Segments around the y axis.
        segments: u32,
    },
    /// Torus lying in the XY plane.
    Torus {
        /// Distance from the center to the middle of the tube.
        radius: f32,
        /// Tube radius.
        tube: f32,
        /// Segments around the tube cross-section.
        radial_segments: u32,
        /// Segments around the main ring.
        tubular_segments: u32,
    },
    /// Geodesic sphere built by subdividing an icosahedron.
    Icosahedron {
        /// Circumscribed radius.
        radius: f32,
        /// Subdivision level (0 = plain icosahedron).
        detail: u32,
    },
    /// Square grid on the XZ plane.
    Grid {
        /// Side length.
        size: f32,
        /// Cells per side.
        divisions: u32,
    },
}

impl Shape {
    /// Expand into model-space line segments.
    pub fn edges(&self) -> Vec<Edge> {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
            } => box_edges(Vec3::new(width, height, depth) * 0.5),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => cylinder_edges(radius_top, radius_bottom, height, segments),
            Shape::Cone {
                radius,
                height,
                segments,
            } => cylinder_edges(0.0, radius, height, segments),
            Shape::Sphere { radius, segments } => sphere_edges(radius, segments),
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus_edges(radius, tube, radial_segments, tubular_segments),
            Shape::Icosahedron { radius, detail } => icosahedron_edges(radius, detail),
            Shape::Grid { size, divisions } => grid_edges(size, divisions),
        }
    }
}

fn wire_segments(segments: u32) -> u32 {
    segments.clamp(3, MAX_WIRE_SEGMENTS)
}

fn box_edges(half: Vec3) -> Vec<Edge> {
    let corner = |x: f32, y: f32, z: f32| Vec3::new(x * half.x, y * half.y, z * half.z);
    let mut edges = Vec::with_capacity(12);
    for &s in &[-1.0, 1.0] {
        for &t in &[-1.0, 1.0] {
            edges.push([corner(-1.0, s, t), corner(1.0, s, t)]);
            edges.push([corner(s, -1.0, t), corner(s, 1.0, t)]);
            edges.push([corner(s, t, -1.0), corner(s, t, 1.0)]);
        }
    }
    edges
}

fn ring(center: Vec3, radius: f32, segments: u32) -> Vec<Vec3> {
    (0..segments)
        .map(|i| {
            let a = i as f32 / segments as f32 * TAU;
            center + Vec3::new(a.cos() * radius, 0.0, a.sin() * radius)
        })
        .collect()
}

fn close_loop(points: &[Vec3], edges: &mut Vec<Edge>) {
    for (i, &p) in points.iter().enumerate() {
        edges.push([p, points[(i + 1) % points.len()]]);
    }
}

fn cylinder_edges(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Vec<Edge> {
    let segments = wire_segments(segments);
    let top = ring(Vec3::Y * height * 0.5, radius_top, segments);
    let bottom = ring(-Vec3::Y * height * 0.5, radius_bottom, segments);
    let mut edges = Vec::with_capacity(segments as usize * 3);
    if radius_top > 0.0 {
        close_loop(&top, &mut edges);
    }
    if radius_bottom > 0.0 {
        close_loop(&bottom, &mut edges);
    }
    for (t, b) in top.iter().zip(&bottom) {
        edges.push([*t, *b]);
    }
    edges
}

fn sphere_edges(radius: f32, segments: u32) -> Vec<Edge> {
    let segments = wire_segments(segments);
    let rings = (segments / 2).max(2);
    let mut edges = Vec::new();

    // Latitudes
    for j in 1..rings {
        let phi = j as f32 / rings as f32 * PI;
        let points = ring(Vec3::Y * radius * phi.cos(), radius * phi.sin(), segments);
        close_loop(&points, &mut edges);
    }

    // Meridians
    for i in 0..segments {
        let theta = i as f32 / segments as f32 * TAU;
        let point = |phi: f32| {
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            )
        };
        for j in 0..rings {
            let a = j as f32 / rings as f32 * PI;
            let b = (j + 1) as f32 / rings as f32 * PI;
            edges.push([point(a), point(b)]);
        }
    }
    edges
}

fn torus_edges(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Vec<Edge> {
    let radial = wire_segments(radial_segments);
    let tubular = wire_segments(tubular_segments);
    let point = |u: f32, v: f32| {
        Vec3::new(
            (radius + tube * v.cos()) * u.cos(),
            (radius + tube * v.cos()) * u.sin(),
            tube * v.sin(),
        )
    };

    let mut edges = Vec::with_capacity((radial * tubular * 2) as usize);
    for i in 0..tubular {
        let u0 = i as f32 / tubular as f32 * TAU;
        let u1 = (i + 1) as f32 / tubular as f32 * TAU;
        for j in 0..radial {
            let v0 = j as f32 / radial as f32 * TAU;
            let v1 = (j + 1) as f32 / radial as f32 * TAU;
            edges.push([point(u0, v0), point(u0, v1)]);
            edges.push([point(u0, v0), point(u1, v0)]);
        }
    }
    edges
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

fn icosahedron_edges(radius: f32, detail: u32) -> Vec<Edge> {
    let base = icosahedron_vertices();
    let n = detail + 1;
    let mut points: Vec<Vec3> = Vec::new();
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut edges = Vec::new();

    let mut push = |a: Vec3, b: Vec3| {
        let ia = vertex_index(&mut points, a);
        let ib = vertex_index(&mut points, b);
        if seen.insert((ia.min(ib), ia.max(ib))) {
            edges.push([a, b]);
        }
    };

    for face in ICOSAHEDRON_FACES {
        let (a, b, c) = (base[face[0]], base[face[1]], base[face[2]]);
        let vertex = |i: u32, j: u32| {
            let p = a + (b - a) * (i as f32 / n as f32) + (c - a) * (j as f32 / n as f32);
            p.normalize() * radius
        };
        for i in 0..n {
            for j in 0..(n - i) {
                let p0 = vertex(i, j);
                let p1 = vertex(i + 1, j);
                let p2 = vertex(i, j + 1);
                push(p0, p1);
                push(p1, p2);
                push(p2, p0);
                if i + j + 1 < n {
                    let p3 = vertex(i + 1, j + 1);
                    push(p1, p3);
                    push(p3, p2);
                }
            }
        }
    }
    edges
}

/// Index of `p` in `points`, welding vertices closer than a small tolerance.
fn vertex_index(points: &mut Vec<Vec3>, p: Vec3) -> usize {
    if let Some(index) = points.iter().position(|q| q.distance_squared(p) < 1e-8) {
        return index;
    }
    points.push(p);
    points.len() - 1
}

fn grid_edges(size: f32, divisions: u32) -> Vec<Edge> {
    let divisions = divisions.max(1);
    let half = size * 0.5;
    let step = size / divisions as f32;
    let mut edges = Vec::with_capacity((divisions as usize + 1) * 2);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        edges.push([Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k)]);
        edges.push([Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half)]);
    }
    edges
}
