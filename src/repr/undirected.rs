use fxhash::FxHashSet;

use super::*;

/// An undirected simple graph on the fixed node set `0..n`.
///
/// Every node owns a hash set of its neighbors, giving O(1) membership tests, insertions and
/// removals. The number of edges is maintained alongside the adjacency table so that
/// [`GraphEdgeOrder::number_of_edges`] never has to recount.
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph {
    nbs: Vec<FxHashSet<Node>>,
    num_edges: NumEdges,
}

/// Representation using one adjacency-set per node
pub type AdjSet = UndirectedGraph;

impl GraphNodeOrder for UndirectedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for UndirectedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for UndirectedGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for UndirectedGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].contains(&v)
    }
}

impl GraphNew for UndirectedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![FxHashSet::default(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for UndirectedGraph {
    fn connect(&mut self, u: Node, v: Node) {
        debug_assert_ne!(u, v, "self-loops are not allowed");
        debug_assert!(!self.has_edge(u, v), "edge {{{u},{v}}} already present");

        self.nbs[u as usize].insert(v);
        self.nbs[v as usize].insert(u);
        self.num_edges += 1;
    }

    fn disconnect(&mut self, u: Node, v: Node) {
        debug_assert!(self.has_edge(u, v), "edge {{{u},{v}}} not present");

        self.nbs[u as usize].remove(&v);
        self.nbs[v as usize].remove(&u);
        self.num_edges -= 1;
    }

    fn try_connect(&mut self, u: Node, v: Node) -> bool {
        if u == v || !self.nbs[u as usize].insert(v) {
            return false;
        }

        assert!(self.nbs[v as usize].insert(u));
        self.num_edges += 1;
        true
    }

    fn try_disconnect(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].remove(&v) {
            return false;
        }

        assert!(self.nbs[v as usize].remove(&u));
        self.num_edges -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn connect_and_disconnect_keep_symmetry() {
        let mut g = AdjSet::new(4);
        g.connect(0, 1);
        g.connect(2, 1);
        g.connect(3, 0);

        assert_eq!(g.number_of_edges(), 3);
        assert!(g.has_edge(1, 0) && g.has_edge(0, 1));
        assert!(g.has_edge(1, 2) && g.has_edge(2, 1));
        assert_eq!(g.degree_of(1), 2);
        assert_eq!(g.ordered_neighbors_of(0), vec![1, 3]);

        g.disconnect(1, 0);
        assert_eq!(g.number_of_edges(), 2);
        assert!(!g.has_edge(0, 1) && !g.has_edge(1, 0));
        assert_eq!(g.degree_of(0), 1);
        assert_eq!(
            g.ordered_edges(true).collect_vec(),
            vec![Edge(0, 3), Edge(1, 2)]
        );
    }

    #[test]
    fn checked_editing_reports_changes() {
        let mut g = AdjSet::new(3);
        assert!(g.try_connect(0, 2));
        assert!(!g.try_connect(2, 0));
        assert!(!g.try_connect(1, 1));
        assert_eq!(g.number_of_edges(), 1);
        assert!(!g.has_self_loop(1));

        assert!(!g.try_disconnect(0, 1));
        assert!(g.try_disconnect(2, 0));
        assert!(!g.try_disconnect(0, 2));
        assert!(g.is_singleton());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn connect_rejects_duplicates_in_debug() {
        let mut g = AdjSet::new(2);
        g.connect(0, 1);
        g.connect(1, 0);
    }

    #[test]
    fn degree_statistics() {
        let g = AdjSet::from_edges(5, [(0u32, 1u32), (0, 2), (0, 3), (1, 2)].into_iter());

        assert_eq!(g.max_degree(), 3);
        assert_eq!(g.min_degree(), 0);
        assert_eq!(g.degrees().collect_vec(), vec![3, 2, 2, 1, 0]);
        assert_eq!(
            g.degree_distribution(),
            vec![(0, 1), (1, 1), (2, 2), (3, 1)]
        );
    }
}

crate::testing::test_graph_ops!(
    adj_set_graph_ops,
    AdjSet,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
