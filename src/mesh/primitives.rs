use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::{MeshData, MeshVertex};

/// UV sphere. Rows run pole to pole, columns around +Y.
pub(super) fn sphere(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let dir = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.vertices.push(MeshVertex::new(dir * radius, dir.normalize()));
        }
    }

    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // Pole rows collapse to a point; skip their degenerate halves.
            if iy != 0 {
                mesh.indices.extend([a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend([b, c, d]);
            }
        }
    }
    mesh
}

/// Axis-aligned box centered on the origin, 4 vertices per face.
pub(super) fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) * 0.5;
    // (normal, u, v) with u × v = normal.
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.base();
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = (n + u * su + v * sv) * half;
            mesh.vertices.push(MeshVertex::new(corner, n));
        }
        mesh.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Cone with apex at `+height/2` and a closed base at `-height/2`.
pub(super) fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segs = radial_segments.max(3);
    let half_h = height * 0.5;
    let apex = Vec3::new(0.0, half_h, 0.0);
    let mut mesh = MeshData::default();

    let ring = |i: f32| {
        let theta = i / segs as f32 * TAU;
        Vec3::new(theta.sin(), 0.0, theta.cos())
    };
    let side_normal = |dir: Vec3| (dir * height + Vec3::Y * radius).normalize();

    // Side: one apex vertex per segment so the apex normal follows the slope.
    for i in 0..segs {
        let base = mesh.base();
        let d0 = ring(i as f32);
        let d1 = ring(i as f32 + 1.0);
        let mid = ring(i as f32 + 0.5);
        mesh.vertices.extend([
            MeshVertex::new(apex, side_normal(mid)),
            MeshVertex::new(d0 * radius - Vec3::Y * half_h, side_normal(d0)),
            MeshVertex::new(d1 * radius - Vec3::Y * half_h, side_normal(d1)),
        ]);
        mesh.indices.extend([base, base + 1, base + 2]);
    }

    // Base cap.
    let center = mesh.base();
    mesh.vertices
        .push(MeshVertex::new(Vec3::new(0.0, -half_h, 0.0), Vec3::NEG_Y));
    for i in 0..=segs {
        let p = ring(i as f32) * radius - Vec3::Y * half_h;
        mesh.vertices.push(MeshVertex::new(p, Vec3::NEG_Y));
    }
    for i in 0..segs {
        let p = center + 1 + i;
        mesh.indices.extend([center, p + 1, p]);
    }
    mesh
}

/// Torus in the XY plane around the Z axis.
pub(super) fn torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> MeshData {
    let rs = radial_segments.max(3);
    let ts = tubular_segments.max(3);
    let mut mesh = MeshData::default();

    for j in 0..=rs {
        let v = j as f32 / rs as f32 * TAU;
        for i in 0..=ts {
            let u = i as f32 / ts as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices.push(MeshVertex::new(p, (p - center).normalize()));
        }
    }

    let row = ts + 1;
    for j in 1..=rs {
        for i in 1..=ts {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend([a, b, d, b, c, d]);
        }
    }
    mesh
}
