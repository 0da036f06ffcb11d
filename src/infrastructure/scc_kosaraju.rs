use crate::domain::error::GraphResult;
use crate::domain::graph::{AdjacencyIndex, Graph, Incidence, SccPartition};
use crate::domain::traits::SccDetector;

/// Two-pass Kosaraju decomposition with explicit work stacks, so path
/// length never turns into call-stack depth.
pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, index: &AdjacencyIndex) -> SccPartition {
        kosaraju_scc(index)
    }
}

/// Validates `graph`, builds its adjacency index and decomposes it.
pub fn find_sccs(graph: &Graph) -> GraphResult<SccPartition> {
    let index = AdjacencyIndex::build(graph)?;
    Ok(kosaraju_scc(&index))
}

fn kosaraju_scc(index: &AdjacencyIndex) -> SccPartition {
    let n = index.node_count();

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        iterative_finish_order(start, &index.forward, &mut seen, &mut order);
    }

    let mut component_of = vec![usize::MAX; n];
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut largest: Option<usize> = None;

    seen.fill(false);
    while let Some(v) = order.pop() {
        if seen[v] {
            continue;
        }

        let comp = iterative_collect(v, &index.reverse, &mut seen);
        let cid = components.len();
        for &x in comp.iter() {
            component_of[x] = cid;
        }

        // Strictly greater: an equal-sized later group never displaces the first.
        let is_larger = match largest {
            Some(l) => comp.len() > components[l].len(),
            None => true,
        };
        if is_larger {
            largest = Some(cid);
        }
        components.push(comp);
    }

    SccPartition {
        component_of,
        components,
        largest,
    }
}

/// Postorder of the subtree rooted at `start`, appended to `order`.
fn iterative_finish_order(
    start: usize,
    adj: &[Vec<Incidence>],
    seen: &mut [bool],
    order: &mut Vec<usize>,
) {
    let mut stack: Vec<(usize, usize)> = Vec::new();
    stack.push((start, 0));

    while let Some((v, next_i)) = stack.pop() {
        if !seen[v] {
            seen[v] = true;
        }

        if next_i < adj[v].len() {
            let to = adj[v][next_i].node;
            stack.push((v, next_i + 1));
            if !seen[to] {
                stack.push((to, 0));
            }
            continue;
        }

        order.push(v);
    }
}

/// Every unseen node reachable from `start` over `adj`, in discovery order.
fn iterative_collect(start: usize, adj: &[Vec<Incidence>], seen: &mut [bool]) -> Vec<usize> {
    let mut comp = Vec::new();
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    seen[start] = true;
    comp.push(start);

    while let Some((v, next_i)) = stack.pop() {
        if next_i >= adj[v].len() {
            continue;
        }
        let to = adj[v][next_i].node;
        stack.push((v, next_i + 1));
        if !seen[to] {
            seen[to] = true;
            comp.push(to);
            stack.push((to, 0));
        }
    }

    comp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::with_node_count(n);
        for &(u, v) in edges {
            g.add_edge(u, v, 1, 1).expect("edge");
        }
        g
    }

    #[test]
    fn finish_order_is_postorder() {
        // 0 -> 1 -> 2, 0 -> 3
        let g = graph(4, &[(0, 1), (1, 2), (0, 3)]);
        let idx = AdjacencyIndex::build(&g).expect("index");
        let mut seen = vec![false; 4];
        let mut order = Vec::new();
        iterative_finish_order(0, &idx.forward, &mut seen, &mut order);
        assert_eq!(order, vec![2, 1, 3, 0]);
    }

    #[test]
    fn collect_follows_depth_first_discovery_order() {
        // reverse edges of 1 -> 0, 2 -> 1, 3 -> 0 seen from 0: 0, 1, 2, 3
        let g = graph(4, &[(1, 0), (2, 1), (3, 0)]);
        let idx = AdjacencyIndex::build(&g).expect("index");
        let mut seen = vec![false; 4];
        let comp = iterative_collect(0, &idx.reverse, &mut seen);
        assert_eq!(comp, vec![0, 1, 2, 3]);
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let n = 200_000;
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        let p = find_sccs(&graph(n, &edges)).expect("scc");
        assert_eq!(p.component_count(), 1);
        assert_eq!(p.largest_component().len(), n);
    }

    #[test]
    fn empty_graph_yields_empty_partition() {
        let p = find_sccs(&Graph::new()).expect("scc");
        assert!(p.is_empty());
        assert_eq!(p.largest, None);
    }
}
