//! Edge occurrence counting.
//!
//! Edges are keyed by the unordered pair of their vertex indices, so two
//! triangles share an edge regardless of their winding.

use hashbrown::HashMap;

/// Edge occurrence counts for a set of indexed faces.
///
/// An edge used once is a boundary edge (the surface has a hole), an edge
/// used more than twice is non-manifold, and an edge used exactly twice is a
/// healthy interior edge.
#[derive(Debug, Clone, Default)]
pub struct MeshAdjacency {
    /// Maps edge (v0, v1) to the number of faces using it. v0 < v1.
    edge_counts: HashMap<(u32, u32), u32>,
}

impl MeshAdjacency {
    /// Count edge occurrences over a list of faces.
    ///
    /// A face with two welded corners contributes no edge between them, so
    /// a collapsed sliver never reports a hole on its own.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_repair::MeshAdjacency;
    ///
    /// let faces = vec![[0, 1, 2], [1, 3, 2]];
    /// let adj = MeshAdjacency::build(&faces);
    ///
    /// assert_eq!(adj.edge_count(), 5);
    /// assert_eq!(adj.boundary_edge_count(), 4);
    /// ```
    #[must_use]
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);

        for face in faces {
            let edges = [
                normalize_edge(face[0], face[1]),
                normalize_edge(face[1], face[2]),
                normalize_edge(face[2], face[0]),
            ];

            for edge in edges.into_iter().filter(|&(a, b)| a != b) {
                *edge_counts.entry(edge).or_insert(0) += 1;
            }
        }

        Self { edge_counts }
    }

    /// Number of faces using the edge between `v0` and `v1`, in either direction.
    #[must_use]
    pub fn occurrences(&self, v0: u32, v1: u32) -> u32 {
        self.edge_counts
            .get(&normalize_edge(v0, v1))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate over all boundary edges (edges with exactly one adjacent face).
    pub fn boundary_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edge_counts
            .iter()
            .filter(|&(_, &count)| count == 1)
            .map(|(&edge, _)| edge)
    }

    /// Count the number of boundary edges.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_counts.values().filter(|&&count| count == 1).count()
    }

    /// Iterate over all non-manifold edges (edges with more than two adjacent faces).
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edge_counts
            .iter()
            .filter(|&(_, &count)| count > 2)
            .map(|(&edge, _)| edge)
    }

    /// Count the number of non-manifold edges.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_counts.values().filter(|&&count| count > 2).count()
    }

    /// Check that every edge is used by exactly two faces.
    #[must_use]
    pub fn is_closed_manifold(&self) -> bool {
        self.edge_counts.values().all(|&count| count == 2)
    }

    /// Get the total number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_counts.len()
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}
