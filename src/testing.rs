#[cfg(test)]
use crate::{ops::*, *};

/// Asserts that `graph` is a simple undirected graph whose maintained edge counter matches its
/// adjacency structure: no loops, symmetric neighborhoods and `sum(deg) = 2m`.
#[cfg(test)]
pub(crate) fn assert_simple_undirected<G>(graph: &G)
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
{
    let mut degree_sum = 0u64;
    for u in graph.vertices() {
        assert!(!graph.has_self_loop(u), "node {u} has a self-loop");
        for v in graph.neighbors_of(u) {
            assert!(graph.has_edge(v, u), "edge ({u},{v}) is not symmetric");
        }
        degree_sum += graph.degree_of(u) as u64;
    }

    assert_eq!(degree_sum, 2 * graph.number_of_edges() as u64);
    assert_eq!(
        graph.edges(true).count(),
        graph.number_of_edges() as usize
    );
}

/// Every graph should implement `GraphNew`, `AdjacencyList` and `GraphEdgeEditing`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::*, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random normalized non-loop edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        Edge(u, v).normalized()
                    })
                    .filter(|e| !e.is_loop())
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.degrees().all(|d| d == 0));
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix = vec![vec![false; n as usize]; n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize][v as usize] = true;
                            adj_matrix[v as usize][u as usize] = true;
                        }

                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges(true).collect_vec());
                        assert_simple_undirected(&graph);

                        for u in 0..n {
                            let expected = (0..n)
                                .filter(|&v| adj_matrix[u as usize][v as usize])
                                .collect_vec();
                            assert_eq!(graph.ordered_neighbors_of(u), expected);
                            assert_eq!(graph.degree_of(u), expected.len() as NumNodes);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);
                        let mut adj_matrix = vec![vec![false; n as usize]; n as usize];

                        for &Edge(u, v) in &edges {
                            graph.connect(u, v);
                            adj_matrix[u as usize][v as usize] = true;
                            adj_matrix[v as usize][u as usize] = true;
                        }
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if adj_matrix[u as usize][v as usize] {
                                graph.disconnect(u, v);
                                adj_matrix[u as usize][v as usize] = false;
                                adj_matrix[v as usize][u as usize] = false;
                                m -= 1;
                            } else {
                                assert!(!graph.try_disconnect(u, v));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        assert_simple_undirected(&graph);

                        for Edge(u, v) in graph.ordered_edges(true).collect_vec() {
                            assert!(graph.try_disconnect(v, u));
                        }
                        assert!(graph.is_singleton());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
