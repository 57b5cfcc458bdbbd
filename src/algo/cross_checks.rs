//! Solvers that answer the same question must agree on random instances.

use itertools::Itertools;
use proptest::prelude::*;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use super::*;
use crate::gens::*;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A random connected undirected graph: a random spanning tree plus `G(n,p)` edges
fn connected_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64, weights: WeightRange) -> AdjArrayUndir {
    let tree = RandomTree::new().nodes(n).weights(weights).generate(rng);
    let extra = Gnp::new()
        .nodes(n)
        .prob(p)
        .weights(weights)
        .generate(rng)
        .into_iter()
        .filter(|e| e.is_normalized());

    AdjArrayUndir::from_edges(n, tree.into_iter().chain(extra))
}

/// A random DAG whose nodes are shuffled, so `0..n` is usually no topological order
fn shuffled_dag<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> AdjArray {
    let mut labels = (0..n).collect_vec();
    labels.shuffle(rng);

    let dag = AdjArray::random_dag(rng, n, p, WeightRange::integral(-5, 10));
    AdjArray::from_edges(
        n,
        dag.edges(false)
            .map(|Edge(u, v, w)| Edge(labels[u as usize], labels[v as usize], w)),
    )
}

fn reachability<G: AdjacencyList>(graph: &G) -> Vec<NodeBitSet> {
    graph
        .vertices()
        .map(|u| NodeBitSet::new_with_bits_set(graph.number_of_nodes(), graph.bfs(u)))
        .collect()
}

#[test]
fn shortest_path_solvers_agree() {
    init_logging();
    let rng = &mut Pcg64Mcg::seed_from_u64(3);

    for _ in 0..40 {
        let n = rng.random_range(1..30);
        let p = rng.random_range(0.02..0.3);
        let directed = AdjArray::gnp(rng, n, p, WeightRange::integral(0, 20));
        let undirected = AdjArrayUndir::gnp(rng, n, p, WeightRange::integral(0, 20));

        let apsp_dir = directed.floyd_warshall();
        let apsp_undir = undirected.floyd_warshall();
        assert!(!apsp_dir.has_negative_cycle());

        for s in directed.vertices() {
            let dist = directed.dijkstra(s);
            assert_eq!(directed.bellman_ford(s).as_ref(), Some(&dist));
            assert_eq!(apsp_dir.distances().row(s), dist.as_slice());

            let dist = undirected.dijkstra(s);
            assert_eq!(undirected.bellman_ford(s).as_ref(), Some(&dist));
            assert_eq!(apsp_undir.distances().row(s), dist.as_slice());
        }
    }
}

#[test]
fn paths_realize_distances() {
    let rng = &mut Pcg64Mcg::seed_from_u64(3);

    for _ in 0..20 {
        let n = rng.random_range(2..30);
        let graph = AdjArray::gnp_no_loops(rng, n, 0.15, WeightRange::integral(1, 9));
        let apsp = FloydWarshall::from_graph(&graph).track_paths(true).run();

        for s in graph.vertices() {
            let tree = graph.dijkstra_tree(s);
            for t in graph.vertices() {
                let path = tree.path_to(t);
                if !tree.is_reachable(t) {
                    assert!(path.is_empty());
                    assert!(apsp.path(s, t).is_empty());
                    continue;
                }

                let length: Weight = path
                    .iter()
                    .tuple_windows()
                    .map(|(&u, &v)| graph.edge_weight(u, v).unwrap())
                    .sum();
                assert_eq!(length, tree.distance_to(t));

                let fw_length: Weight = apsp
                    .path(s, t)
                    .iter()
                    .tuple_windows()
                    .map(|(&u, &v)| graph.edge_weight(u, v).unwrap())
                    .sum();
                assert_eq!(fw_length, apsp.distance(s, t));
            }
        }
    }
}

#[test]
fn negative_cycles_are_detected() {
    init_logging();
    let rng = &mut Pcg64Mcg::seed_from_u64(3);

    for _ in 0..30 {
        let n = rng.random_range(3..30);
        let mut graph = shuffled_dag(rng, n, 0.2);

        // negative weights but no cycle at all
        assert!(!graph.has_negative_cycle());
        assert!(!graph.floyd_warshall().has_negative_cycle());
        for s in graph.vertices() {
            assert!(graph.bellman_ford(s).is_some());
        }

        let cycle = rand::seq::index::sample(rng, n as usize, 3)
            .into_iter()
            .map(|u| u as Node)
            .collect_vec();
        graph.connect_cycle(cycle.iter().copied(), -1.0);

        assert!(graph.has_negative_cycle());
        assert!(graph.bellman_ford(cycle[0]).is_none());

        let apsp = graph.floyd_warshall();
        assert!(apsp.has_negative_cycle());
        let on_cycles = apsp.nodes_on_negative_cycles().collect_vec();
        assert!(cycle.iter().all(|u| on_cycles.contains(u)));
    }
}

#[test]
fn spanning_tree_weights_agree() {
    init_logging();
    let rng = &mut Pcg64Mcg::seed_from_u64(3);

    for _ in 0..40 {
        let n = rng.random_range(1..50);
        let graph = connected_graph(rng, n, 0.1, WeightRange::integral(-10, 30));

        let kruskal = Kruskal::new(&graph).run();
        let heap = Kruskal::new(&graph).strategy(KruskalStrategy::Heap).run();
        assert!(kruskal.is_spanning());
        assert_eq!(kruskal.number_of_edges(), n - 1);
        assert_eq!(heap.total_weight(), kruskal.total_weight());

        let start = rng.random_range(0..n);
        for strategy in [PrimStrategy::Lazy, PrimStrategy::Indexed] {
            let prim = Prim::new(&graph).start(start).strategy(strategy).run();
            assert!(prim.is_spanning());
            assert_eq!(prim.total_weight(), kruskal.total_weight());
        }
    }
}

#[test]
fn scc_partition_is_mutual_reachability() {
    init_logging();
    let rng = &mut Pcg64Mcg::seed_from_u64(3);

    for _ in 0..30 {
        let n = rng.random_range(1..40);
        let graph = AdjArray::gnp(rng, n, (1.5 / n as f64).min(1.0), WeightRange::default());
        let part = graph.scc_partition();
        let reach = reachability(&graph);

        // every node appears in exactly one component
        let mut members = part.components().iter().flatten().copied().collect_vec();
        members.sort_unstable();
        assert_eq!(members, (0..n).collect_vec());

        for (id, comp) in part.components().iter().enumerate() {
            assert!(comp.iter().all(|&u| part.component_of(u) == id as Node));
        }

        for u in graph.vertices() {
            for v in graph.vertices() {
                let mutual = reach[u as usize].get_bit(v) && reach[v as usize].get_bit(u);
                assert_eq!(part.same_component(u, v), mutual, "u={u} v={v}");
            }
        }

        assert!(part.condensation(&graph).is_acyclic());
    }
}

#[test]
fn topological_orders_are_valid() {
    let rng = &mut Pcg64Mcg::seed_from_u64(3);

    for _ in 0..30 {
        let n = rng.random_range(1..60);
        let graph = shuffled_dag(rng, n, 0.1);

        for order in [graph.topological_sort_dfs(), graph.topological_sort_kahn()] {
            let order = order.unwrap();
            let mut rank = vec![0; n as usize];
            for (i, &u) in order.iter().enumerate() {
                rank[u as usize] = i;
            }
            assert!(graph
                .edges(false)
                .all(|Edge(u, v, _)| rank[u as usize] < rank[v as usize]));
        }

        // a DAG's components are all singletons
        assert_eq!(graph.scc_partition().number_of_components(), n);
    }
}

#[test]
fn astar_matches_dijkstra_on_grids() {
    init_logging();
    let rng = &mut Pcg64Mcg::seed_from_u64(3);

    for _ in 0..30 {
        let (rows, cols) = (rng.random_range(1..20), rng.random_range(1..20));
        let start = GridNode::new(rng.random_range(0..rows), rng.random_range(0..cols));
        let goal = GridNode::new(rng.random_range(0..rows), rng.random_range(0..cols));

        let grid = RandomGrid::new(rows, cols)
            .density(rng.random_range(0.0..0.4))
            .keep_free([start, goal])
            .generate(rng);
        let expected = grid.to_graph().dijkstra(grid.node_id(start))[grid.node_id(goal) as usize];

        for h in [euclidean as Heuristic, octile, chebyshev] {
            let result = grid.astar_with(start, goal, h);
            if expected.is_finite() {
                assert!((result.cost - expected).abs() < 1e-9);
                assert!(result
                    .path
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| grid.neighbors_of(a.node).contains(&b.node)));
            } else {
                assert!(!result.is_found());
            }
        }
    }
}

fn edge_lists(
    max_n: NumNodes,
    weights: std::ops::RangeInclusive<i32>,
) -> impl Strategy<Value = (NumNodes, Vec<Edge>)> {
    (1..max_n).prop_flat_map(move |n| {
        let edges = proptest::collection::vec(
            (0..n, 0..n, weights.clone()).prop_map(|(u, v, w)| Edge(u, v, w as Weight)),
            0..(4 * n as usize),
        );
        (Just(n), edges)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_dijkstra_equals_bellman_ford((n, edges) in edge_lists(25, 0..=15)) {
        let graph = AdjArray::from_edges(n, edges.iter());
        let source = edges.first().map_or(0, |e| e.source());

        let dist = graph.dijkstra(source);
        let apsp = graph.floyd_warshall();
        prop_assert_eq!(graph.bellman_ford(source), Some(dist.clone()));
        prop_assert_eq!(apsp.distances().row(source), dist.as_slice());
    }

    #[test]
    fn prop_bellman_ford_early_exit_is_invisible((n, edges) in edge_lists(20, -5..=10)) {
        let eager = BellmanFord::from_edges(n, edges.iter()).early_exit(false).distances();
        let lazy = BellmanFord::from_edges(n, edges.iter()).distances();
        prop_assert_eq!(eager, lazy);
    }

    #[test]
    fn prop_kruskal_equals_prim((n, edges) in edge_lists(25, -10..=10)) {
        // close the graph with a heavy path so it is connected
        let path = (1..n).map(|u| Edge(u - 1, u, 1000.0));
        let graph = AdjArrayUndir::from_edges(n, edges.iter().copied().chain(path));

        let kruskal = graph.kruskal();
        prop_assert!(kruskal.is_spanning());
        prop_assert_eq!(graph.prim(n - 1).total_weight(), kruskal.total_weight());
    }

    #[test]
    fn prop_union_find_agrees_with_components((n, edges) in edge_lists(30, 0..=0)) {
        let graph = AdjArrayUndir::from_edges(n, edges.iter());
        let reach = reachability(&graph);

        let mut uf = UnionFind::new(n);
        for e in &edges {
            uf.union(e.source(), e.target());
        }

        for u in graph.vertices() {
            for v in graph.vertices() {
                prop_assert_eq!(uf.same_set(u, v), reach[u as usize].get_bit(v));
            }
        }
    }
}
