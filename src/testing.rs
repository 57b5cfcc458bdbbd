/// Every graph representation should pass the same battery of basic operation tests.
///
/// `test_graph_ops!(module_name, GraphType, is_undirected)` expands into a test module
/// comparing the representation against a plain list of weighted edges.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates `m` random edges with small integral weights for nodes `0..n`.
            /// Parallel edges and loops are intended.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| {
                        Edge(
                            rng.random_range(0..n),
                            rng.random_range(0..n),
                            rng.random_range(-5..=10) as Weight,
                        )
                    })
                    .collect_vec()
            }

            fn expected_edges(edges: &[Edge]) -> Vec<Edge> {
                let mut edges = edges
                    .iter()
                    .map(|e| if $undirected { e.normalized() } else { *e })
                    .collect_vec();
                edges.sort_by(Edge::cmp_by_endpoints);
                edges
            }

            fn connects(e: &Edge, u: Node, v: Node) -> bool {
                if $undirected {
                    e.normalized().endpoints() == (u.min(v), u.max(v))
                } else {
                    e.endpoints() == (u, v)
                }
            }

            #[test]
            fn graph_new() {
                for n in 0..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert!(graph.is_singleton_graph());
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m in [n * 2, n * 5] {
                        let edges = random_edges(rng, n, m);
                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(
                            graph.ordered_edges($undirected).collect_vec(),
                            expected_edges(&edges)
                        );
                        assert_eq!(graph.to_edge_list().len(), m as usize);

                        let mut degrees = vec![0 as NumNodes; n as usize];
                        for e in &edges {
                            degrees[e.source() as usize] += 1;
                            if $undirected && !e.is_loop() {
                                degrees[e.target() as usize] += 1;
                            }
                        }
                        assert_eq!(graph.degrees().collect_vec(), degrees);

                        for e in &edges {
                            let lightest = edges
                                .iter()
                                .filter(|f| connects(f, e.source(), e.target()))
                                .map(|f| f.weight())
                                .min_by(|a, b| a.total_cmp(b));
                            assert_eq!(graph.edge_weight(e.source(), e.target()), lightest);
                            assert!(graph.has_edge(e.source(), e.target()));
                        }
                    }
                }
            }

            #[test]
            fn edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    let mut edges = random_edges(rng, n, n * 3);
                    let mut graph = <$graph>::new(n);
                    for e in &edges {
                        graph.try_add_edge(e.source(), e.target(), e.weight()).unwrap();
                    }

                    while !edges.is_empty() {
                        let Edge(u, v, _) = edges[rng.random_range(0..edges.len())];

                        // the first inserted edge between `u` and `v` is removed
                        let pos = edges.iter().position(|e| connects(e, u, v)).unwrap();
                        let removed = edges.remove(pos);

                        assert_eq!(graph.try_remove_edge(u, v), Some(removed.weight()));
                        assert_eq!(graph.number_of_edges() as usize, edges.len());
                        assert_eq!(
                            graph.ordered_edges($undirected).collect_vec(),
                            expected_edges(&edges)
                        );
                    }

                    assert!(graph.is_singleton_graph());
                    assert_eq!(graph.try_remove_edge(0, n - 1), None);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
