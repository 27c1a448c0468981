//! The fixed example route network used by the console front end and tests.

use crate::graph::Graph;

/// Station labels paired with the place each one stands for.
pub const STATIONS: [(&str, &str); 5] = [
    ("A", "Ciudad de Guatemala"),
    ("B", "Zacapa"),
    ("C", "Chiquimula"),
    ("D", "Quetzaltenango"),
    ("E", "Cobán"),
];

/// Directed routes between stations and their distances.
pub const ROUTES: [(&str, &str, i64); 12] = [
    ("A", "A", 0),
    ("A", "B", 3),
    ("A", "D", 7),
    ("B", "B", 0),
    ("B", "C", 1),
    ("B", "E", 8),
    ("C", "C", 0),
    ("C", "D", 2),
    ("D", "D", 0),
    ("D", "E", 3),
    ("E", "E", 0),
    ("E", "A", 4),
];

/// Build the example network: one vertex per station, one edge per route.
pub fn example_network() -> Graph {
    let mut graph = Graph::with_capacity(STATIONS.len());

    for (label, _) in STATIONS {
        graph.add_vertex(label);
    }
    for (from, to, distance) in ROUTES {
        graph.add_edge(from, to, distance);
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_network() {
        let graph = example_network();

        assert_eq!(graph.len(), STATIONS.len());
        assert_eq!(graph.vertices(), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(graph.edge("A", "B"), Some(3));
        assert_eq!(graph.edge("E", "A"), Some(4));
        assert_eq!(graph.edge("B", "A"), None);

        println!("{graph}");
        assert!(graph.to_string().contains("A -3-> B"));
    }
}
