use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all vertices.
    /// In contrast to self.vertices(), the returned range does not borrow self and hence may be used
    /// where additional mutable references of self are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    ///
    /// This is a maintained counter and not recomputed from the adjacency structure.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighborhood of a given vertex.
    /// The order of the neighbors is unspecified.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the neighbors of `u` in ascending order.
    /// ** Panics if `u >= n` **
    fn ordered_neighbors_of(&self, u: Node) -> Vec<Node> {
        let mut nbs = self.neighbors_of(u).collect_vec();
        nbs.sort_unstable();
        nbs
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes in index order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns a distribution `(degree, number of nodes)` sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the minimum degree in the graph
    fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over edges incident to a given vertex in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn ordered_edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges_of(u, only_normalized).collect_vec();
        edges.sort_unstable();
        edges.into_iter()
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.ordered_edges_of(u, only_normalized))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde {u,v} exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
///
/// There are two flavours of editing:
/// - [`connect`](GraphEdgeEditing::connect) / [`disconnect`](GraphEdgeEditing::disconnect) adjust
///   the edge counter unconditionally. The caller has to guarantee that the edge is absent (resp.
///   present) and not a loop; otherwise the counter diverges from the adjacency structure.
/// - [`try_connect`](GraphEdgeEditing::try_connect) / [`try_disconnect`](GraphEdgeEditing::try_disconnect)
///   check first and only touch the counter if the graph actually changed.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the undirected edge {u,v} and increments the edge counter.
    /// ** Requires `u != v` and the edge to be absent; panics in debug builds otherwise **
    /// ** Panics if `u >= n || v >= n` **
    fn connect(&mut self, u: Node, v: Node);

    /// Removes the undirected edge {u,v} and decrements the edge counter.
    /// ** Requires the edge to be present; panics in debug builds otherwise **
    /// ** Panics if `u >= n || v >= n` **
    fn disconnect(&mut self, u: Node, v: Node);

    /// Adds the edge {u,v} to the graph.
    /// Returns *true* exactly if the edge was not present previously and `u != v`.
    /// ** Panics if `u >= n || v >= n` **
    fn try_connect(&mut self, u: Node, v: Node) -> bool;

    /// Removes the edge {u,v} from the graph.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn try_disconnect(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection, skipping loops and duplicates
    fn connect_edges(&mut self, edges: impl Iterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.map(|e| e.into()) {
            self.try_connect(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl Iterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl Iterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.connect_edges(edges);
        graph
    }
}
