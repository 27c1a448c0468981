//! A directed graph over a fixed pool of vertex slots, stored as a dense
//! adjacency matrix.
//!
//! Labels are bound to integer slots on insertion; removing a vertex returns
//! its slot to a free stack so a later insertion can reuse it.  Edge lookup is
//! O(1) either way.  The matrix the shortest-path solver consumes is extracted
//! with [`Graph::distance_matrix`].

mod distance;
mod floyd;

pub use distance::Distance;
pub use floyd::{PathError, PathResult, ShortestPaths};

use std::{collections::HashMap, fmt::Display};

/// Adjacency-matrix directed graph with a fixed vertex capacity.
///
/// Every mutation that cannot proceed (duplicate label, exhausted capacity,
/// missing endpoint) is a no-op signalled through the return value, so callers
/// are expected to check what they get back.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Label to slot bindings for the vertices currently present.
    labels: HashMap<String, usize>,
    /// Slot to label bindings; `None` marks a free slot.
    slots: Vec<Option<String>>,
    /// Stack of free slots, lowest index on top.
    free: Vec<usize>,
    /// Directed edge weights; `edges[from][to]` is `None` when no edge exists.
    edges: Vec<Vec<Option<i64>>>,
}

impl Graph {
    /// Create an empty graph able to hold up to `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            labels: HashMap::new(),
            slots: vec![None; capacity],
            free: (0..capacity).rev().collect(),
            edges: vec![vec![None; capacity]; capacity],
        }
    }

    /// Bind `label` to the lowest free slot and return it.
    ///
    /// Returns `None` without touching the graph if the label is already
    /// present or every slot is taken.
    pub fn add_vertex(&mut self, label: &str) -> Option<usize> {
        if self.labels.contains_key(label) {
            return None;
        }
        let slot = self.free.pop()?;

        self.labels.insert(label.to_string(), slot);
        self.slots[slot] = Some(label.to_string());

        Some(slot)
    }

    /// Remove `label` from the graph, clearing every edge into or out of its
    /// slot and freeing the slot for reuse.  Returns the removed label, or
    /// `None` if it was not present.
    pub fn remove_vertex(&mut self, label: &str) -> Option<String> {
        let slot = self.labels.remove(label)?;

        for other in 0..self.capacity() {
            self.edges[slot][other] = None;
            self.edges[other][slot] = None;
        }
        self.free.push(slot);

        self.slots[slot].take()
    }

    /// Store a directed edge from `from` to `to`, overwriting any existing
    /// weight.  Self-loops are allowed.  Returns false (and stores nothing)
    /// if either endpoint is missing.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(from), Some(to)) => {
                self.edges[from][to] = Some(weight);
                true
            }
            _ => false,
        }
    }

    /// Clear the edge from `from` to `to` and return its weight.  Returns
    /// `None` if either endpoint is missing or no edge was stored.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Option<i64> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;

        self.edges[from][to].take()
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edge(from, to).is_some()
    }

    /// Weight of the edge from `from` to `to`, if both vertices and the edge
    /// exist.
    pub fn edge(&self, from: &str, to: &str) -> Option<i64> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;

        self.edges[from][to]
    }

    /// Slot index bound to `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.get(label).copied()
    }

    /// Labels of the vertices currently present, in ascending slot order.
    ///
    /// This order is what [`Graph::distance_matrix`] indexes by, so it is the
    /// translation table between matrix indices and labels.
    pub fn vertices(&self) -> Vec<&str> {
        self.slots.iter().flatten().map(String::as_str).collect()
    }

    /// Number of vertices currently present.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Total number of vertex slots, free or bound.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Dense distance matrix over the present vertices, rows and columns in
    /// [`Graph::vertices`] order: the stored edge weight where one exists,
    /// otherwise zero on the diagonal and unreachable off it.
    pub fn distance_matrix(&self) -> Vec<Vec<Distance>> {
        let names = self.vertices();

        names
            .iter()
            .map(|from| {
                names
                    .iter()
                    .map(|to| match self.edge(from, to) {
                        Some(weight) => Distance::Finite(weight),
                        None if from == to => Distance::Finite(0),
                        None => Distance::Unreachable,
                    })
                    .collect()
            })
            .collect()
    }
}

impl Display for Graph {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for from in self.vertices() {
            for to in self.vertices() {
                if let Some(weight) = self.edge(from, to) {
                    writeln!(fmt, "{from} -{weight}-> {to}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_vertices() -> Graph {
        let mut graph = Graph::with_capacity(5);
        graph.add_vertex("A");
        graph.add_vertex("B");

        graph
    }

    #[test]
    fn test_add_vertex() {
        let mut graph = Graph::with_capacity(5);
        assert!(graph.is_empty());

        assert_eq!(graph.add_vertex("A"), Some(0));
        assert_eq!(graph.add_vertex("B"), Some(1));

        assert_eq!(graph.len(), 2);
        assert!(graph.contains_vertex("A"));
        assert!(graph.contains_vertex("B"));
        assert!(!graph.contains_vertex("C"));
    }

    #[test]
    fn test_add_duplicate_vertex_is_noop() {
        let mut graph = two_vertices();

        assert_eq!(graph.add_vertex("A"), None);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.index_of("A"), Some(0));
    }

    #[test]
    fn test_capacity_exhaustion_is_noop() {
        let mut graph = Graph::with_capacity(2);
        graph.add_vertex("A");
        graph.add_vertex("B");

        assert_eq!(graph.add_vertex("C"), None);
        assert_eq!(graph.len(), 2);
        assert!(!graph.contains_vertex("C"));
    }

    #[test]
    fn test_remove_vertex() {
        let mut graph = two_vertices();

        assert_eq!(graph.remove_vertex("B"), Some("B".to_string()));
        assert!(!graph.contains_vertex("B"));
        assert_eq!(graph.len(), 1);

        assert_eq!(graph.remove_vertex("B"), None);
    }

    #[test]
    fn test_remove_vertex_clears_edges() {
        let mut graph = two_vertices();
        graph.add_vertex("C");
        graph.add_edge("A", "B", 5);
        graph.add_edge("B", "C", 7);
        graph.add_edge("C", "B", 2);

        graph.remove_vertex("B");

        // The slot gets reused, but no stale edge may survive into the
        // reincarnated vertex.
        assert_eq!(graph.add_vertex("B2"), Some(1));
        assert_eq!(graph.edge("A", "B2"), None);
        assert_eq!(graph.edge("B2", "C"), None);
        assert_eq!(graph.edge("C", "B2"), None);
    }

    #[test]
    fn test_slot_reuse() {
        let mut graph = Graph::with_capacity(2);
        graph.add_vertex("A");
        graph.remove_vertex("A");

        assert!(graph.is_empty());
        assert_eq!(graph.add_vertex("B"), Some(0));
    }

    #[test]
    fn test_add_edge_requires_both_endpoints() {
        let mut graph = two_vertices();

        assert!(graph.add_edge("A", "B", 5));
        assert!(!graph.add_edge("A", "Z", 5));
        assert!(!graph.add_edge("Z", "B", 5));

        assert!(graph.contains_edge("A", "B"));
        assert!(!graph.contains_edge("B", "A"));
        assert_eq!(graph.edge("A", "B"), Some(5));
    }

    #[test]
    fn test_edge_overwrite_keeps_last_weight() {
        let mut graph = two_vertices();

        graph.add_edge("A", "B", 5);
        graph.add_edge("A", "B", 9);

        assert_eq!(graph.edge("A", "B"), Some(9));
    }

    #[test]
    fn test_self_loop() {
        let mut graph = two_vertices();

        assert!(graph.add_edge("A", "A", 0));
        assert!(graph.contains_edge("A", "A"));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = two_vertices();
        graph.add_edge("A", "B", 5);

        assert_eq!(graph.remove_edge("A", "B"), Some(5));
        assert_eq!(graph.edge("A", "B"), None);
        assert_eq!(graph.remove_edge("A", "B"), None);
        assert_eq!(graph.remove_edge("A", "Z"), None);
    }

    #[test]
    fn test_vertices_in_slot_order() {
        let mut graph = Graph::with_capacity(4);
        graph.add_vertex("C");
        graph.add_vertex("A");
        graph.add_vertex("B");

        assert_eq!(graph.vertices(), vec!["C", "A", "B"]);

        // Removing the middle vertex frees slot 1, which the next insertion
        // takes over; the order stays by slot, not by insertion.
        graph.remove_vertex("A");
        graph.add_vertex("D");
        assert_eq!(graph.vertices(), vec!["C", "D", "B"]);
    }

    #[test]
    fn test_distance_matrix() {
        let mut graph = two_vertices();
        graph.add_vertex("C");
        graph.add_edge("A", "B", 3);
        graph.add_edge("B", "C", 1);

        let matrix = graph.distance_matrix();

        assert_eq!(matrix.len(), 3);
        for (i, row) in matrix.iter().enumerate() {
            assert_eq!(row[i], Distance::Finite(0));
        }
        assert_eq!(matrix[0][1], Distance::Finite(3));
        assert_eq!(matrix[1][2], Distance::Finite(1));
        assert_eq!(matrix[0][2], Distance::Unreachable);
        assert_eq!(matrix[1][0], Distance::Unreachable);
    }

    #[test]
    fn test_distance_matrix_self_loop_overrides_diagonal() {
        let mut graph = two_vertices();
        graph.add_edge("A", "A", 4);

        let matrix = graph.distance_matrix();

        assert_eq!(matrix[0][0], Distance::Finite(4));
        assert_eq!(matrix[1][1], Distance::Finite(0));
    }
}
