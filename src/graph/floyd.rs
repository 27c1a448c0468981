//! All-pairs shortest paths computed with the Floyd-Warshall algorithm.
//!
//! The solver takes a snapshot of a dense [`Distance`] matrix and keeps a
//! next-hop table next to the distances, so any shortest path can be walked
//! back out without re-running the search.

use thiserror::Error;

use super::distance::Distance;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("vertex index {index} out of range for {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },
    #[error("expected {expected} vertex names, got {actual}")]
    NameCountMismatch { expected: usize, actual: usize },
    #[error("next-hop walk from {start} stalled before reaching {goal}")]
    NextHopWalkStalled { start: usize, goal: usize },
}

pub type PathResult<T> = Result<T, PathError>;

/// All-pairs shortest distances and first-hop routing over a fixed vertex set.
///
/// Queries are only meaningful after [`ShortestPaths::compute`] has run;
/// before that they report the seeded single-edge distances.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// Shortest known distance for every ordered vertex pair.
    dist: Vec<Vec<Distance>>,
    /// First hop on the shortest known path, `None` while no path is known.
    next: Vec<Vec<Option<usize>>>,
}

impl ShortestPaths {
    /// Snapshot the distance matrix and seed the next-hop table: the first
    /// hop from `i` to `j` is `j` itself exactly when the input holds a
    /// finite distance between two distinct vertices.
    pub fn new(matrix: Vec<Vec<Distance>>) -> Self {
        let next = matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, d)| (i != j && d.is_finite()).then_some(j))
                    .collect()
            })
            .collect();

        ShortestPaths { dist: matrix, next }
    }

    /// Number of vertices covered by the matrices.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Relax every ordered pair through every intermediate vertex.
    ///
    /// The intermediate vertex `k` must be the outermost loop: after round
    /// `k`, `dist[i][j]` is optimal among paths whose interior vertices are
    /// all below `k + 1`.  Running this twice changes nothing, since
    /// relaxation only ever lowers a distance.
    pub fn compute(&mut self) {
        let n = self.len();
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = self.dist[i][k] + self.dist[k][j];
                    if through < self.dist[i][j] {
                        self.dist[i][j] = through;
                        self.next[i][j] = self.next[i][k];
                    }
                }
            }
        }
    }

    /// Shortest known distance from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> PathResult<Distance> {
        Ok(self.dist[self.checked(from)?][self.checked(to)?])
    }

    /// Vertex indices along the shortest path from `from` to `to`, both
    /// endpoints included, or `None` when the destination is unreachable.
    ///
    /// A vertex always has the trivial path to itself, whatever the edges
    /// say.  The next-hop walk is bounded by the vertex count; a table that
    /// fails to reach the goal within that bound is reported as an error
    /// instead of looping.
    pub fn path(&self, from: usize, to: usize) -> PathResult<Option<Vec<usize>>> {
        self.checked(from)?;
        self.checked(to)?;

        if from == to {
            return Ok(Some(vec![from]));
        }
        if self.next[from][to].is_none() || !self.dist[from][to].is_finite() {
            return Ok(None);
        }

        let stalled = || PathError::NextHopWalkStalled {
            start: from,
            goal: to,
        };

        let mut path = vec![from];
        let mut at = from;
        while at != to {
            if path.len() >= self.len() {
                return Err(stalled());
            }
            at = self.next[at][to].ok_or_else(stalled)?;
            path.push(at);
        }

        Ok(Some(path))
    }

    /// Greatest finite distance from `of` to any other vertex, or
    /// `Unreachable` when it cannot reach anything.
    pub fn eccentricity(&self, of: usize) -> PathResult<Distance> {
        self.checked(of)?;

        Ok(self.dist[of]
            .iter()
            .enumerate()
            .filter(|&(j, d)| j != of && d.is_finite())
            .map(|(_, &d)| d)
            .max()
            .unwrap_or(Distance::Unreachable))
    }

    /// Name of the vertex with the smallest eccentricity.
    ///
    /// `names` must hold one name per vertex, in matrix index order.  The
    /// scan keeps the first strict improvement, so ties go to the lowest
    /// index.  A graph in which every vertex has infinite eccentricity has no
    /// center and yields `None`.
    pub fn center<'a>(&self, names: &'a [&str]) -> PathResult<Option<&'a str>> {
        if names.len() != self.len() {
            return Err(PathError::NameCountMismatch {
                expected: self.len(),
                actual: names.len(),
            });
        }

        let mut best: Option<(&str, Distance)> = None;
        for (i, name) in names.iter().copied().enumerate() {
            let ecc = self.eccentricity(i)?;
            if !ecc.is_finite() {
                continue;
            }
            match best {
                Some((_, least)) if ecc >= least => {}
                _ => best = Some((name, ecc)),
            }
        }

        Ok(best.map(|(name, _)| name))
    }

    fn checked(&self, index: usize) -> PathResult<usize> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(PathError::VertexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}
