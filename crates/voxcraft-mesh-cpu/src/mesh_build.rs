use voxcraft_geom::Vec3;

/// Used sizes of a mesh buffer: faces (quads), vertices and triangle indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshCounts {
    pub faces: usize,
    pub vertices: usize,
    pub indices: usize,
}

impl MeshCounts {
    #[inline]
    pub fn add(&mut self, other: MeshCounts) {
        self.faces += other.faces;
        self.vertices += other.vertices;
        self.indices += other.indices;
    }
}

/// Renderable surface: flat positions (xyz), UVs (uv) and `u32` triangle indices.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuffer {
    pub pos: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
    faces: usize,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all arrays but retains capacity for reuse across frames.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.uv.clear();
        self.idx.clear();
        self.faces = 0;
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn counts(&self) -> MeshCounts {
        MeshCounts {
            faces: self.faces,
            vertices: self.vertex_count(),
            indices: self.idx.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Appends one face. `tris` index into `verts` starting at `tri_base`.
    pub fn push_quad(&mut self, verts: &[Vec3], uvs: &[(f32, f32)], tris: &[u32], tri_base: u32) {
        debug_assert_eq!(verts.len(), 4);
        debug_assert_eq!(uvs.len(), 4);
        debug_assert_eq!(tris.len(), 6);
        let base = self.vertex_count() as u32;
        for v in verts {
            self.pos.extend_from_slice(&[v.x, v.y, v.z]);
        }
        for &(u, v) in uvs {
            self.uv.extend_from_slice(&[u, v]);
        }
        self.idx.extend(tris.iter().map(|&t| base + (t - tri_base)));
        self.faces += 1;
    }

    /// Appends `other`, rebasing its indices past this buffer's vertices.
    pub fn append(&mut self, other: &MeshBuffer) {
        let base = self.vertex_count() as u32;
        self.pos.extend_from_slice(&other.pos);
        self.uv.extend_from_slice(&other.uv);
        self.idx.extend(other.idx.iter().map(|&i| i + base));
        self.faces += other.faces;
    }

    /// Returns the vertex position at `i`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    /// Checks the buffer layout: matching UV count, whole triangles, indices in range.
    pub fn is_well_formed(&self) -> bool {
        let n = self.vertex_count();
        self.pos.len() % 3 == 0
            && self.uv.len() == n * 2
            && self.idx.len() % 3 == 0
            && self.idx.iter().all(|&i| (i as usize) < n)
            && self.idx.len() == self.faces * 6
            && n == self.faces * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> ([Vec3; 4], [(f32, f32); 4], [u32; 6]) {
        (
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            [8, 9, 10, 8, 10, 11],
        )
    }

    #[test]
    fn push_quad_rebases_source_indices() {
        let (v, uv, t) = unit_quad();
        let mut m = MeshBuffer::new();
        m.push_quad(&v, &uv, &t, 8);
        m.push_quad(&v, &uv, &t, 8);
        assert_eq!(m.idx, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        assert_eq!(
            m.counts(),
            MeshCounts {
                faces: 2,
                vertices: 8,
                indices: 12
            }
        );
        assert!(m.is_well_formed());
    }

    #[test]
    fn append_offsets_indices() {
        let (v, uv, t) = unit_quad();
        let mut a = MeshBuffer::new();
        a.push_quad(&v, &uv, &t, 8);
        let b = a.clone();
        a.append(&b);
        assert_eq!(&a.idx[6..], &[4, 5, 6, 4, 6, 7]);
        assert!(a.is_well_formed());
    }

    #[test]
    fn clear_keeps_capacity() {
        let (v, uv, t) = unit_quad();
        let mut m = MeshBuffer::new();
        m.push_quad(&v, &uv, &t, 8);
        let cap = m.pos.capacity();
        m.clear_keep_capacity();
        assert!(m.is_empty());
        assert_eq!(m.counts(), MeshCounts::default());
        assert_eq!(m.pos.capacity(), cap);
    }
}
