use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;

use crate::{
    cost::{Cost, PathCost},
    map::{CampusMap, Node},
};

struct PrioComp(Vec<PathCost>);

impl Compare<Node> for PrioComp {
    fn compare(&self, l: &Node, r: &Node) -> Ordering {
        self.0[r.id()].cmp(&self.0[l.id()]).then(r.cmp(l))
    }
}

/// Computes shortest routes over the path network from `source` to every
/// landmark of the map.
///
/// Landmarks with no route stay [`PathCost::Unreachable`]; that is a result,
/// not an error. Passing a `source` outside the map is a caller bug and
/// panics.
pub fn shortest_paths(map: &CampusMap, source: Node) -> Paths {
    let n = map.n();
    assert!(source.id() < n, "source landmark out of range");

    let mut costs = vec![PathCost::Unreachable; n];
    let mut prev: Vec<Option<Node>> = vec![None; n];
    costs[source.id()] = PathCost::Path(Cost::new(0));

    let nodes: Vec<Node> = map.nodes().collect();
    let mut heap = BinaryHeap::from_vec_cmp(nodes, PrioComp(costs.clone()));

    while let Some(u) = heap.pop() {
        let dist_u = match costs[u.id()].finite() {
            Some(cost) => cost,
            // the minimum remaining tentative cost is unreachable
            None => break,
        };

        for v in map.nodes() {
            if let Some(edge) = map.edge_cost(u, v) {
                let update = PathCost::Path(dist_u + edge);
                if update < costs[v.id()] {
                    costs[v.id()] = update;
                    prev[v.id()] = Some(u);
                }
            }
        }
        heap.replace_cmp(PrioComp(costs.clone()));
    }

    Paths { source, costs, prev }
}

/// Single-source shortest-route results for every landmark of a map.
pub struct Paths {
    source: Node,
    costs: Vec<PathCost>,
    prev: Vec<Option<Node>>,
}

impl Paths {
    pub fn source(&self) -> Node {
        self.source
    }

    pub fn n(&self) -> usize {
        self.costs.len()
    }

    /// The length of a shortest route to `to`, or `None` if no route exists.
    pub fn cost_to(&self, to: Node) -> Option<Cost> {
        self.costs[to.id()].finite()
    }

    /// One shortest route to `to`, both endpoints included. The route to the
    /// source itself is the single-element sequence.
    pub fn path_to(&self, to: Node) -> Option<Vec<Node>> {
        self.costs[to.id()].finite()?;

        let mut path = vec![to];
        let mut node = to;
        while node != self.source {
            node = self.prev[node.id()]?;
            path.push(node);
        }
        path.reverse();
        Some(path)
    }

    /// Results in landmark order: `(node, Some((cost, route)))` for reachable
    /// landmarks, `(node, None)` otherwise.
    pub fn results(&self) -> impl Iterator<Item = (Node, Option<(Cost, Vec<Node>)>)> + '_ {
        (0..self.costs.len()).map(move |i| {
            let node = Node::new(i);
            let result = self
                .path_to(node)
                .and_then(|path| self.cost_to(node).map(|cost| (cost, path)));
            (node, result)
        })
    }
}
