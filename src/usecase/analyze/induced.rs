use crate::domain::error::{GraphError, GraphResult};
use crate::domain::graph::Graph;

/// The subgraph induced by `group`: its nodes in `group` order, and the
/// edges of `graph` (in their original order) with both endpoints inside it.
pub fn build_induced(group: &[usize], graph: &Graph) -> GraphResult<Graph> {
    let position_of = graph.validate_dense_ids()?;

    let n = graph.node_count();
    let mut member = vec![false; n];
    for &id in group {
        if id >= n {
            return Err(GraphError::UnknownNode { id, node_count: n });
        }
        member[id] = true;
    }

    let edges = graph
        .edges
        .iter()
        .filter(|e| member[e.from] && member[e.to])
        .copied()
        .collect();
    let nodes = group.iter().map(|&id| graph.nodes[position_of[id]]).collect();

    Ok(Graph { nodes, edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Node;

    #[test]
    fn keeps_internal_edges_and_group_order() {
        let mut g = Graph::with_node_count(4);
        g.add_edge(0, 1, 2, 1).expect("edge");
        g.add_edge(1, 2, 1, 3).expect("edge");
        g.add_edge(2, 0, 1, 1).expect("edge");
        g.add_edge(2, 3, 1, 1).expect("edge");

        let sub = build_induced(&[2, 0, 1], &g).expect("induced");
        assert_eq!(sub.nodes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![2, 0, 1]);
        assert_eq!(sub.edges, g.edges[..3].to_vec());
    }

    #[test]
    fn looks_nodes_up_by_id_not_position() {
        let g = Graph {
            nodes: vec![Node::new(1, 0.5, 0.5), Node::new(0, 0.25, 0.75)],
            edges: vec![],
        };
        let sub = build_induced(&[0], &g).expect("induced");
        assert_eq!(sub.nodes, vec![Node::new(0, 0.25, 0.75)]);
    }

    #[test]
    fn group_member_outside_the_graph_is_an_error() {
        let g = Graph::with_node_count(2);
        assert_eq!(
            build_induced(&[0, 5], &g).unwrap_err(),
            GraphError::UnknownNode { id: 5, node_count: 2 }
        );
    }

    #[test]
    fn empty_group_gives_empty_graph() {
        let mut g = Graph::with_node_count(2);
        g.add_edge(0, 1, 1, 1).expect("edge");
        let sub = build_induced(&[], &g).expect("induced");
        assert_eq!(sub, Graph::new());
    }
}
