//! Non-indexed triangle soup, the canonical mesh representation.

// Soup coordinates are f32 by contract; widening is lossless, narrowing is intended
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use nalgebra::Point3;

use crate::{Aabb, IndexedMesh, MeshBounds, MeshError, Triangle, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Triangle count above which a mesh is considered too heavy for interactive use.
pub const DEFAULT_TRIANGLE_BUDGET: usize = 500_000;

/// A non-indexed triangle mesh.
///
/// Every triangle stores its three vertices inline, so `positions` holds
/// 9 floats per triangle and vertices shared by neighbouring triangles are
/// physically duplicated. This is the form produced by mesh loaders and
/// consumed by the viewport, and the only form that crosses a stage
/// boundary.
///
/// `normals`, when present, mirrors `positions` float for float.
///
/// # Invariants
///
/// `vertex_count() == 3 * triangle_count()` holds for any well-formed soup;
/// [`TriangleSoup::check`] reports a soup that violates it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleSoup {
    /// Vertex positions, `[x0, y0, z0, x1, y1, z1, ...]`, three vertices per triangle.
    pub positions: Vec<f32>,

    /// Optional per-vertex normals, same layout as `positions`.
    pub normals: Option<Vec<f32>>,
}

impl TriangleSoup {
    /// Floats stored per triangle (3 vertices × 3 coordinates).
    pub const FLOATS_PER_TRIANGLE: usize = 9;

    /// Create an empty soup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: None,
        }
    }

    /// Wrap a position buffer without normals.
    #[must_use]
    pub const fn from_positions(positions: Vec<f32>) -> Self {
        Self {
            positions,
            normals: None,
        }
    }

    /// Wrap a position buffer together with its normal buffer.
    #[must_use]
    pub const fn with_normals(positions: Vec<f32>, normals: Vec<f32>) -> Self {
        Self {
            positions,
            normals: Some(normals),
        }
    }

    /// Number of vertices (three per triangle).
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of whole triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / Self::FLOATS_PER_TRIANGLE
    }

    /// Check whether the soup holds no triangle.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    /// Validate the buffer layout.
    ///
    /// # Errors
    ///
    /// - [`MeshError::MalformedPositions`] if the positions do not form whole triangles
    /// - [`MeshError::NormalLengthMismatch`] if a normal buffer is present with a different length
    /// - [`MeshError::NonFinite`] if any coordinate is NaN or infinite
    pub fn check(&self) -> Result<(), MeshError> {
        if self.positions.len() % Self::FLOATS_PER_TRIANGLE != 0 {
            return Err(MeshError::MalformedPositions {
                len: self.positions.len(),
            });
        }
        if let Some(normals) = &self.normals {
            if normals.len() != self.positions.len() {
                return Err(MeshError::NormalLengthMismatch {
                    positions: self.positions.len(),
                    normals: normals.len(),
                });
            }
        }
        if let Some(index) = self.positions.iter().position(|c| !c.is_finite()) {
            return Err(MeshError::NonFinite { index });
        }
        Ok(())
    }

    /// Position of the vertex at `index`, widened to `f64`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<Point3<f64>> {
        let c = self.positions.get(index * 3..index * 3 + 3)?;
        Some(Point3::new(
            f64::from(c[0]),
            f64::from(c[1]),
            f64::from(c[2]),
        ))
    }

    /// Iterate over every vertex position in buffer order.
    pub fn points(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| Point3::new(f64::from(c[0]), f64::from(c[1]), f64::from(c[2])))
    }

    /// The triangle at `index`.
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        let start = index * Self::FLOATS_PER_TRIANGLE;
        Triangle::from_f32(self.positions.get(start..start + Self::FLOATS_PER_TRIANGLE)?)
    }

    /// Iterate over every whole triangle. Trailing floats are ignored.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.positions
            .chunks_exact(Self::FLOATS_PER_TRIANGLE)
            .filter_map(Triangle::from_f32)
    }

    /// Weld bit-identical positions into shared vertices.
    ///
    /// Vertex indices are assigned in order of first appearance, so
    /// duplicated corners of adjacent triangles map to the same index and
    /// edge keys built from the result identify shared edges. `-0.0` and
    /// `0.0` are treated as the same coordinate. Normals are not carried
    /// over.
    #[must_use]
    pub fn to_indexed(&self) -> IndexedMesh {
        let mut lookup: HashMap<[u32; 3], u32> = HashMap::with_capacity(self.vertex_count());
        let mut mesh = IndexedMesh::with_capacity(self.vertex_count() / 2, self.triangle_count());

        for tri in self.positions.chunks_exact(Self::FLOATS_PER_TRIANGLE) {
            let mut face = [0u32; 3];
            for (corner, slot) in tri.chunks_exact(3).zip(face.iter_mut()) {
                // Adding +0.0 folds -0.0 into +0.0 before taking the bits
                let key = [
                    (corner[0] + 0.0).to_bits(),
                    (corner[1] + 0.0).to_bits(),
                    (corner[2] + 0.0).to_bits(),
                ];
                let next = mesh.vertices.len() as u32;
                *slot = *lookup.entry(key).or_insert_with(|| {
                    mesh.vertices.push(Vertex::from_coords(
                        f64::from(corner[0]),
                        f64::from(corner[1]),
                        f64::from(corner[2]),
                    ));
                    next
                });
            }
            mesh.faces.push(face);
        }

        mesh
    }

    /// Expand an indexed mesh back into a soup.
    ///
    /// Normals are emitted when any vertex carries one; vertices without a
    /// normal contribute a zero vector. Faces with out-of-range indices are
    /// skipped.
    #[must_use]
    pub fn from_indexed(mesh: &IndexedMesh) -> Self {
        let with_normals = mesh.vertices.iter().any(|v| v.normal.is_some());
        let capacity = mesh.faces.len() * Self::FLOATS_PER_TRIANGLE;
        let mut positions = Vec::with_capacity(capacity);
        let mut normals = if with_normals {
            Vec::with_capacity(capacity)
        } else {
            Vec::new()
        };

        for face in &mesh.faces {
            let Some(corners) = face
                .iter()
                .map(|&i| mesh.vertices.get(i as usize))
                .collect::<Option<Vec<_>>>()
            else {
                continue;
            };

            for vertex in corners {
                let p = vertex.position;
                positions.extend([p.x as f32, p.y as f32, p.z as f32]);
                if with_normals {
                    let n = vertex.normal.unwrap_or_else(nalgebra::Vector3::zeros);
                    normals.extend([n.x as f32, n.y as f32, n.z as f32]);
                }
            }
        }

        Self {
            positions,
            normals: with_normals.then_some(normals),
        }
    }

    /// Replace the normal buffer with freshly computed normals.
    ///
    /// Corners of a soup are never shared, so the area-weighted
    /// accumulation over a vertex's neighbourhood reduces to the normal of
    /// the one triangle it belongs to. Zero-area triangles get zero normals.
    pub fn recompute_normals(&mut self) {
        let mut normals = Vec::with_capacity(self.triangle_count() * Self::FLOATS_PER_TRIANGLE);
        for tri in self.triangles() {
            let n = tri.normal().unwrap_or_else(nalgebra::Vector3::zeros);
            for _ in 0..3 {
                normals.extend([n.x as f32, n.y as f32, n.z as f32]);
            }
        }
        self.normals = Some(normals);
    }
}

impl MeshBounds for TriangleSoup {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.points())
    }
}

impl From<&IndexedMesh> for TriangleSoup {
    fn from(mesh: &IndexedMesh) -> Self {
        Self::from_indexed(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_cube;

    fn right_triangle() -> TriangleSoup {
        TriangleSoup::from_positions(vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0])
    }

    #[test]
    fn counts_follow_buffer_length() {
        let soup = right_triangle();
        assert_eq!(soup.triangle_count(), 1);
        assert_eq!(soup.vertex_count(), 3);
        assert!(!soup.is_empty());
        assert!(TriangleSoup::new().is_empty());
    }

    #[test]
    fn check_rejects_partial_triangle() {
        let soup = TriangleSoup::from_positions(vec![0.0; 10]);
        assert_eq!(soup.check(), Err(MeshError::MalformedPositions { len: 10 }));
    }

    #[test]
    fn check_rejects_mismatched_normals() {
        let soup = TriangleSoup::with_normals(vec![0.0; 9], vec![0.0; 6]);
        assert_eq!(
            soup.check(),
            Err(MeshError::NormalLengthMismatch {
                positions: 9,
                normals: 6
            })
        );
    }

    #[test]
    fn check_rejects_nan() {
        let mut positions = vec![0.0; 9];
        positions[4] = f32::NAN;
        let soup = TriangleSoup::from_positions(positions);
        assert_eq!(soup.check(), Err(MeshError::NonFinite { index: 4 }));
    }

    #[test]
    fn cube_round_trips_through_indexed() {
        let cube = unit_cube();
        let soup = TriangleSoup::from_indexed(&cube);
        assert_eq!(soup.triangle_count(), 12);
        assert_eq!(soup.vertex_count(), 36);
        assert!(soup.normals.is_none());

        let welded = soup.to_indexed();
        assert_eq!(welded.vertex_count(), 8);
        assert_eq!(welded.face_count(), 12);
    }

    #[test]
    fn negative_zero_welds_with_zero() {
        let soup = TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            -0.0, 0.0, -0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0,
        ]);
        let welded = soup.to_indexed();
        assert_eq!(welded.vertex_count(), 4);
        assert_eq!(welded.faces[1][0], 0);
        assert_eq!(welded.faces[1][1], 2);
    }

    #[test]
    fn recompute_normals_is_flat() {
        let mut soup = right_triangle();
        soup.recompute_normals();
        let normals = soup.normals.unwrap_or_default();
        assert_eq!(normals, vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn from_indexed_emits_normals_when_present() {
        let mut cube = unit_cube();
        cube.compute_vertex_normals();
        let soup = TriangleSoup::from(&cube);
        assert_eq!(soup.normals.as_ref().map(Vec::len), Some(soup.positions.len()));
        assert!(soup.check().is_ok());
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let soup = TriangleSoup::from_indexed(&unit_cube());
        let bounds = soup.bounds();
        assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(1.0, 1.0, 1.0));
    }
}
