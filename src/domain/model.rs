use crate::domain::error::{GraphError, GraphResult};
use serde::Serialize;

/// A graph vertex. `id` doubles as an array index once the owning graph has
/// been validated; `x`/`y` lie in `[0, 1]` and only matter to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Node {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// A node without a meaningful position, e.g. one recovered from an edge list.
    pub fn unplaced(id: usize) -> Self {
        Self { id, x: 0.0, y: 0.0 }
    }

    pub fn distance_to(&self, other: &Node) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A directed, capacitated edge. Capacity and cost are always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    capacity: u32,
    cost: u32,
}

impl Edge {
    pub fn new(from: usize, to: usize, capacity: i64, cost: i64) -> GraphResult<Self> {
        Ok(Self {
            from,
            to,
            capacity: checked_attribute(from, to, "capacity", capacity)?,
            cost: checked_attribute(from, to, "cost", cost)?,
        })
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

fn checked_attribute(from: usize, to: usize, field: &'static str, value: i64) -> GraphResult<u32> {
    if value <= 0 {
        return Err(GraphError::NonPositiveAttribute {
            from,
            to,
            field,
            value,
        });
    }
    u32::try_from(value).map_err(|_| GraphError::AttributeOutOfRange {
        from,
        to,
        field,
        value,
    })
}
