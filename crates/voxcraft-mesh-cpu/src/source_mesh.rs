//! Per-shape face geometry, flattened once at startup.
//!
//! Each shape is authored as a list of rectangles per face direction. The
//! builder flattens them into shared vertex/UV/triangle arrays and records,
//! per shape and face, where that face's quads start and how many there are.
//! The mesher copies quads out of these arrays instead of generating geometry.

use voxcraft_blocks::Shape;
use voxcraft_geom::Vec3;

use crate::face::Face;

/// One authored rectangle: face-plane extents `[u0,u1]×[v0,v1]` at depth `d`.
#[derive(Clone, Copy, Debug)]
struct Rect {
    face: Face,
    u0: f32,
    v0: f32,
    u1: f32,
    v1: f32,
    d: f32,
}

const fn rect(face: Face, u0: f32, v0: f32, u1: f32, v1: f32, d: f32) -> Rect {
    Rect {
        face,
        u0,
        v0,
        u1,
        v1,
        d,
    }
}

const fn full(face: Face) -> Rect {
    let d = match face {
        Face::PosY | Face::PosX | Face::PosZ => 1.0,
        _ => 0.0,
    };
    rect(face, 0.0, 0.0, 1.0, 1.0, d)
}

const CUBE: [Rect; 6] = [
    full(Face::PosY),
    full(Face::NegY),
    full(Face::PosX),
    full(Face::NegX),
    full(Face::PosZ),
    full(Face::NegZ),
];

// Low step toward -Z (front), tall back toward +Z.
const STAIRS: [Rect; 10] = [
    rect(Face::PosY, 0.0, 0.0, 1.0, 0.5, 0.5),
    rect(Face::PosY, 0.0, 0.5, 1.0, 1.0, 1.0),
    full(Face::NegY),
    rect(Face::PosX, 0.0, 0.0, 1.0, 0.5, 1.0),
    rect(Face::PosX, 0.5, 0.5, 1.0, 1.0, 1.0),
    rect(Face::NegX, 0.0, 0.0, 1.0, 0.5, 0.0),
    rect(Face::NegX, 0.5, 0.5, 1.0, 1.0, 0.0),
    full(Face::PosZ),
    rect(Face::NegZ, 0.0, 0.0, 1.0, 0.5, 0.0),
    rect(Face::NegZ, 0.0, 0.5, 1.0, 1.0, 0.5),
];

fn authored(shape: Shape) -> &'static [Rect] {
    match shape {
        // grass shares the cube geometry; only its per-face tiles differ
        Shape::Cube | Shape::Grass => &CUBE,
        Shape::Stairs => &STAIRS,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceRange {
    /// First quad index into the flat arrays.
    pub start: usize,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapeEntry {
    pub faces: [FaceRange; 6],
    pub quad_start: usize,
    pub quad_count: usize,
}

impl ShapeEntry {
    #[inline]
    pub fn face(&self, f: Face) -> FaceRange {
        self.faces[f.index()]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.quad_count * 4
    }
}

#[derive(Clone, Debug)]
pub struct SourceMeshTable {
    /// Unit-cube positions, 4 per quad.
    pub vertices: Vec<Vec3>,
    /// Tile-local UVs, 4 per quad.
    pub uvs: Vec<[f32; 2]>,
    /// 6 per quad, referencing `vertices`.
    pub triangles: Vec<u32>,
    entries: [ShapeEntry; 3],
}

impl Default for SourceMeshTable {
    fn default() -> Self {
        Self::build()
    }
}

impl SourceMeshTable {
    pub fn build() -> Self {
        let mut table = SourceMeshTable {
            vertices: Vec::new(),
            uvs: Vec::new(),
            triangles: Vec::new(),
            entries: [ShapeEntry::default(); 3],
        };
        for shape in Shape::ALL {
            let quad_start = table.quad_count();
            let mut entry = ShapeEntry {
                quad_start,
                ..Default::default()
            };
            // group authored rects by face so each face is one contiguous run
            for face in Face::ALL {
                let start = table.quad_count();
                for r in authored(shape).iter().filter(|r| r.face == face) {
                    table.push_rect(r);
                }
                entry.faces[face.index()] = FaceRange {
                    start,
                    count: table.quad_count() - start,
                };
            }
            entry.quad_count = table.quad_count() - quad_start;
            table.entries[shape.index()] = entry;
        }
        log::debug!(target: "mesh", "source mesh table built: {} quads", table.quad_count());
        table
    }

    fn push_rect(&mut self, r: &Rect) {
        let f = r.face;
        let mut corners = [
            (r.u0, r.v0),
            (r.u1, r.v0),
            (r.u1, r.v1),
            (r.u0, r.v1),
        ];
        let mut pos = corners.map(|(u, v)| f.plane_point(u, v, r.d));
        // counter-clockwise seen from outside
        let n = f.normal();
        if (pos[1] - pos[0]).cross(pos[2] - pos[0]).dot(n) < 0.0 {
            pos.swap(1, 3);
            corners.swap(1, 3);
        }
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&pos);
        self.uvs.extend(corners.iter().map(|&(u, v)| [u, v]));
        self.triangles
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    #[inline]
    pub fn entry(&self, shape: Shape) -> &ShapeEntry {
        &self.entries[shape.index()]
    }

    /// Largest vertex count any single block can emit.
    pub fn max_vertices_per_block(&self) -> usize {
        self.entries
            .iter()
            .map(ShapeEntry::vertex_count)
            .max()
            .unwrap_or(0)
    }

    #[inline]
    pub fn quad_vertices(&self, q: usize) -> &[Vec3] {
        &self.vertices[q * 4..q * 4 + 4]
    }

    #[inline]
    pub fn quad_uvs(&self, q: usize) -> &[[f32; 2]] {
        &self.uvs[q * 4..q * 4 + 4]
    }

    #[inline]
    pub fn quad_triangles(&self, q: usize) -> &[u32] {
        &self.triangles[q * 6..q * 6 + 6]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_one_quad_per_face() {
        let t = SourceMeshTable::build();
        for shape in [Shape::Cube, Shape::Grass] {
            let e = t.entry(shape);
            assert_eq!(e.quad_count, 6);
            for f in Face::ALL {
                assert_eq!(e.face(f).count, 1);
            }
        }
    }

    #[test]
    fn stairs_face_counts() {
        let t = SourceMeshTable::build();
        let e = t.entry(Shape::Stairs);
        assert_eq!(e.face(Face::NegZ).count, 2);
        assert_eq!(e.face(Face::PosZ).count, 1);
        assert_eq!(e.face(Face::NegX).count, 2);
        assert_eq!(e.face(Face::PosX).count, 2);
        assert_eq!(e.face(Face::PosY).count, 2);
        assert_eq!(e.face(Face::NegY).count, 1);
        assert_eq!(e.quad_count, 10);
        assert_eq!(t.max_vertices_per_block(), 40);
    }

    #[test]
    fn quads_wind_outward() {
        let t = SourceMeshTable::build();
        for shape in Shape::ALL {
            let e = t.entry(shape);
            for f in Face::ALL {
                let r = e.face(f);
                for q in r.start..r.start + r.count {
                    let v = t.quad_vertices(q);
                    let n = (v[1] - v[0]).cross(v[2] - v[0]);
                    assert!(n.dot(f.normal()) > 0.0, "{:?} {:?} quad {}", shape, f, q);
                }
            }
        }
    }

    #[test]
    fn triangles_reference_own_quad() {
        let t = SourceMeshTable::build();
        assert_eq!(t.triangles.len(), t.quad_count() * 6);
        for q in 0..t.quad_count() {
            for &i in t.quad_triangles(q) {
                assert!((q * 4..q * 4 + 4).contains(&(i as usize)));
            }
        }
    }
}
