//! Property tests for the decomposition and the generator.

use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rgg_scc_analyzer::domain::config::GeneratorConfig;
use rgg_scc_analyzer::domain::graph::Graph;
use rgg_scc_analyzer::infrastructure::geometric_generator::generate_geometric_graph;
use rgg_scc_analyzer::infrastructure::scc_kosaraju::find_sccs;
use std::collections::HashSet;

/// Strategy for small directed graphs, self-loops and parallel edges included.
fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1usize..24).prop_flat_map(|n| {
        vec((0..n, 0..n), 0..(n * 3)).prop_map(move |pairs| {
            let mut g = Graph::with_node_count(n);
            for (u, v) in pairs {
                g.add_edge(u, v, 1, 1).expect("edge");
            }
            g
        })
    })
}

/// Reachability sets by breadth-first search from every node.
fn reachability(g: &Graph) -> Vec<Vec<bool>> {
    let n = g.node_count();
    let mut succ = vec![Vec::new(); n];
    for e in g.edges.iter() {
        succ[e.from].push(e.to);
    }

    (0..n)
        .map(|s| {
            let mut seen = vec![false; n];
            seen[s] = true;
            let mut queue = vec![s];
            while let Some(v) = queue.pop() {
                for &w in succ[v].iter() {
                    if !seen[w] {
                        seen[w] = true;
                        queue.push(w);
                    }
                }
            }
            seen
        })
        .collect()
}

proptest! {
    #[test]
    fn partition_is_complete_and_disjoint(g in graph_strategy()) {
        let p = find_sccs(&g).expect("scc");

        let mut seen = HashSet::new();
        for comp in p.components.iter() {
            for &v in comp {
                prop_assert!(seen.insert(v), "node {} appears twice", v);
            }
        }
        prop_assert_eq!(seen.len(), g.node_count());

        let largest = p.largest_component().len();
        prop_assert!(largest >= 1 && largest <= g.node_count());
        prop_assert!(p.components.iter().all(|c| c.len() <= largest));
        let first_max = p.components.iter().position(|c| c.len() == largest);
        prop_assert_eq!(first_max, p.largest);
    }

    #[test]
    fn groups_are_exactly_mutual_reachability(g in graph_strategy()) {
        let p = find_sccs(&g).expect("scc");
        let reach = reachability(&g);

        for u in 0..g.node_count() {
            for v in 0..g.node_count() {
                let mutual = reach[u][v] && reach[v][u];
                prop_assert_eq!(p.same_component(u, v), mutual, "u={} v={}", u, v);
            }
        }
    }

    #[test]
    fn generated_graphs_never_link_a_pair_twice(
        seed in any::<u64>(),
        nodes in 1usize..60,
        radius in 0.05f64..1.4,
    ) {
        let cfg = GeneratorConfig::new(nodes, radius, 8, 5);
        let g = generate_geometric_graph(&cfg, &mut StdRng::seed_from_u64(seed)).expect("gen");

        let mut pairs = HashSet::new();
        for e in g.edges.iter() {
            prop_assert_ne!(e.from, e.to);
            prop_assert!(pairs.insert((e.from.min(e.to), e.from.max(e.to))));
            prop_assert!(g.nodes[e.from].distance_to(&g.nodes[e.to]) <= radius);
        }
    }

    #[test]
    fn radius_below_every_distance_gives_no_edges(seed in any::<u64>(), nodes in 1usize..40) {
        let mut rng = StdRng::seed_from_u64(seed);
        let probe = generate_geometric_graph(&GeneratorConfig::new(nodes, 1e-3, 1, 1), &mut rng)
            .expect("gen");

        let mut min_distance = f64::INFINITY;
        for (i, a) in probe.nodes.iter().enumerate() {
            for b in probe.nodes.iter().skip(i + 1) {
                min_distance = min_distance.min(a.distance_to(b));
            }
        }
        prop_assume!(min_distance.is_finite() && min_distance > 2e-9);

        let cfg = GeneratorConfig::new(nodes, min_distance / 2.0, 1, 1);
        // Same seed, same node placement.
        let g = generate_geometric_graph(&cfg, &mut StdRng::seed_from_u64(seed)).expect("gen");
        prop_assert_eq!(g.edge_count(), 0);
    }
}
