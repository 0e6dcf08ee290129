use glam::Vec3;

use super::{MeshData, MeshVertex};

const PHI: f32 = 1.618_034;

/// Regular octahedron: vertices on the axes, one face per octant.
pub(super) fn octahedron(radius: f32) -> MeshData {
    let vertices = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    let mut normals = Vec::with_capacity(8);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                normals.push(Vec3::new(x, y, z));
            }
        }
    }
    convex_hull_faces(&vertices, &normals, radius)
}

/// Regular dodecahedron: cube corners plus three golden rectangles, with
/// face normals along the dual icosahedron's vertices.
pub(super) fn dodecahedron(radius: f32) -> MeshData {
    let inv = 1.0 / PHI;
    let mut vertices = Vec::with_capacity(20);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                vertices.push(Vec3::new(x, y, z));
            }
        }
    }
    let mut normals = Vec::with_capacity(12);
    for a in [-1.0, 1.0] {
        for b in [-1.0, 1.0] {
            vertices.extend([
                Vec3::new(0.0, a * inv, b * PHI),
                Vec3::new(a * inv, b * PHI, 0.0),
                Vec3::new(a * PHI, 0.0, b * inv),
            ]);
            normals.extend([
                Vec3::new(0.0, a * PHI, b),
                Vec3::new(a, 0.0, b * PHI),
                Vec3::new(a * PHI, b, 0.0),
            ]);
        }
    }
    convex_hull_faces(&vertices, &normals, radius)
}

/// Flat-shaded faces of a convex polyhedron centered on the origin.
///
/// Each face is the set of vertices furthest along its normal, ordered
/// counter-clockwise about the normal and fan-triangulated.
fn convex_hull_faces(vertices: &[Vec3], normals: &[Vec3], radius: f32) -> MeshData {
    let points: Vec<Vec3> =
        vertices.iter().map(|v| v.normalize() * radius).collect();
    let mut mesh = MeshData::default();

    for normal in normals.iter().map(|n| n.normalize()) {
        let max = points
            .iter()
            .map(|p| p.dot(normal))
            .fold(f32::MIN, f32::max);
        let eps = radius.abs().max(1.0) * 1e-4;
        let mut face: Vec<Vec3> = points
            .iter()
            .copied()
            .filter(|p| p.dot(normal) > max - eps)
            .collect();
        if face.len() < 3 {
            continue;
        }

        let centroid = face.iter().copied().sum::<Vec3>() / face.len() as f32;
        let tangent = (face[0] - centroid).normalize();
        let bitangent = normal.cross(tangent);
        face.sort_by(|a, b| {
            let angle = |p: &Vec3| {
                let d = *p - centroid;
                d.dot(bitangent).atan2(d.dot(tangent))
            };
            angle(a).total_cmp(&angle(b))
        });

        let base = mesh.base();
        mesh.vertices
            .extend(face.iter().map(|&p| MeshVertex::new(p, normal)));
        for k in 1..face.len() as u32 - 1 {
            mesh.indices.extend([base, base + k, base + k + 1]);
        }
    }
    mesh
}
