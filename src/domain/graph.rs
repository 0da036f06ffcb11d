use crate::domain::error::{GraphError, GraphResult};
use crate::domain::model::{Edge, Node};

/// Nodes and directed edges, both kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// `n` unplaced nodes with ids `0..n` and no edges.
    pub fn with_node_count(n: usize) -> Self {
        Self {
            nodes: (0..n).map(Node::unplaced).collect(),
            edges: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Appends a node, assigning the next dense id.
    pub fn add_node(&mut self, x: f64, y: f64) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, x, y));
        id
    }

    pub fn add_edge(&mut self, from: usize, to: usize, capacity: i64, cost: i64) -> GraphResult<()> {
        self.edges.push(Edge::new(from, to, capacity, cost)?);
        Ok(())
    }

    /// Checks that node ids are a permutation of `0..n` and that every edge
    /// endpoint names one of them. Returns the position of each id in `nodes`.
    pub fn validate_dense_ids(&self) -> GraphResult<Vec<usize>> {
        let n = self.nodes.len();
        let mut position_of = vec![usize::MAX; n];

        for (pos, node) in self.nodes.iter().enumerate() {
            if node.id >= n {
                return Err(GraphError::NonContiguousNodeId {
                    id: node.id,
                    node_count: n,
                });
            }
            if position_of[node.id] != usize::MAX {
                return Err(GraphError::DuplicateNodeId { id: node.id });
            }
            position_of[node.id] = pos;
        }

        for e in self.edges.iter() {
            for endpoint in [e.from, e.to] {
                if endpoint >= n {
                    return Err(GraphError::DanglingEdge {
                        from: e.from,
                        to: e.to,
                        missing: endpoint,
                        node_count: n,
                    });
                }
            }
        }

        Ok(position_of)
    }
}

/// One adjacency entry: the edge's index in `Graph::edges` and the node at
/// its far end (`to` in the forward index, `from` in the reverse index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    pub edge: usize,
    pub node: usize,
}

/// Forward and reverse adjacency, indexed by node id. Built once per
/// analysis and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    pub forward: Vec<Vec<Incidence>>,
    pub reverse: Vec<Vec<Incidence>>,
}

impl AdjacencyIndex {
    pub fn build(graph: &Graph) -> GraphResult<Self> {
        graph.validate_dense_ids()?;

        let n = graph.node_count();
        let mut forward: Vec<Vec<Incidence>> = vec![Vec::new(); n];
        let mut reverse: Vec<Vec<Incidence>> = vec![Vec::new(); n];

        for (i, e) in graph.edges.iter().enumerate() {
            forward[e.from].push(Incidence { edge: i, node: e.to });
            reverse[e.to].push(Incidence {
                edge: i,
                node: e.from,
            });
        }

        Ok(Self { forward, reverse })
    }

    pub fn node_count(&self) -> usize {
        self.forward.len()
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.forward[v].len()
    }

    pub fn in_degree(&self, v: usize) -> usize {
        self.reverse[v].len()
    }
}

/// Disjoint node groups covering every node exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SccPartition {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    /// Index into `components` of the first-discovered group of maximal size.
    pub largest: Option<usize>,
}

impl SccPartition {
    pub fn largest_component(&self) -> &[usize] {
        match self.largest {
            Some(i) => self.components[i].as_slice(),
            None => &[],
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn same_component(&self, u: usize, v: usize) -> bool {
        self.component_of[u] == self.component_of[v]
    }
}
