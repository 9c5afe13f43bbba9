//! Unit-disk graph construction.
//!
//! Vertices are points in the plane; an edge connects any pair within
//! Euclidean distance 1.0, threshold inclusive. The graph is built once
//! from coordinates and is immutable afterwards — the annealing chain
//! only ever reads it.

/// Adjacency distance threshold for unit-disk graphs.
pub const UNIT_DISTANCE: f64 = 1.0;

/// A vertex: identity index plus plane coordinates. Immutable after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position of this vertex in the graph's vertex sequence.
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    /// Euclidean distance to another vertex.
    pub fn distance(&self, other: &Vertex) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Geometric graph with unit-distance adjacency.
///
/// Invariants: the adjacency relation is symmetric, has no self-loops,
/// and holds exactly for pairs within [`UNIT_DISTANCE`] (inclusive).
#[derive(Debug, Clone)]
pub struct UnitDiskGraph {
    vertices: Vec<Vertex>,
    /// Row-major `n × n` adjacency matrix.
    adjacency: Vec<bool>,
    /// Per-vertex neighbor lists, the O(degree) access path for the
    /// energy model's flip delta.
    neighbors: Vec<Vec<usize>>,
    num_edges: usize,
}

impl UnitDiskGraph {
    /// Builds the graph from `(x, y)` coordinate pairs.
    ///
    /// All vertex pairs are checked against the unit-distance threshold,
    /// so construction is quadratic in the number of points. Zero or one
    /// point yields a valid edge-free graph.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let vertices: Vec<Vertex> = points
            .iter()
            .enumerate()
            .map(|(index, &(x, y))| Vertex { index, x, y })
            .collect();

        let mut adjacency = vec![false; n * n];
        let mut neighbors = vec![Vec::new(); n];
        let mut num_edges = 0;

        // Compare squared distances; the threshold 1.0 squares to itself,
        // so the inclusive boundary is preserved exactly.
        let threshold_sq = UNIT_DISTANCE * UNIT_DISTANCE;
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = vertices[i].x - vertices[j].x;
                let dy = vertices[i].y - vertices[j].y;
                if dx * dx + dy * dy <= threshold_sq {
                    adjacency[i * n + j] = true;
                    adjacency[j * n + i] = true;
                    neighbors[i].push(j);
                    neighbors[j].push(i);
                    num_edges += 1;
                }
            }
        }

        Self {
            vertices,
            adjacency,
            neighbors,
            num_edges,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// The vertex sequence, in construction order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Whether vertices `i` and `j` are adjacent. Always false for
    /// `i == j`.
    #[inline]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adjacency[i * self.vertices.len() + j]
    }

    /// Indices of the vertices adjacent to `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.neighbors[i]
    }

    /// Degree of vertex `i`.
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.neighbors[i].len()
    }
}
