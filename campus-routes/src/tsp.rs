use std::str::FromStr;

use fixedbitset::FixedBitSet;

use crate::{
    cost::Cost,
    map::{Node, Tour, TravelCosts},
};

/// How a multi-stop route is planned.
#[derive(Debug, Copy, Clone)]
pub enum TourPolicy {
    /// Always walk to the nearest unvisited stop. Fast, not minimal.
    Greedy,
    /// Exhaust all visiting orders and keep the shortest. Factorial.
    Exact,
}

impl Default for TourPolicy {
    fn default() -> Self {
        TourPolicy::Greedy
    }
}

impl FromStr for TourPolicy {
    type Err = String;
    fn from_str(policy: &str) -> Result<Self, Self::Err> {
        match policy {
            "greedy" => Ok(TourPolicy::Greedy),
            "exact" => Ok(TourPolicy::Exact),
            _ => Err(format!("unknown tour policy: {}", policy)),
        }
    }
}

/// Plans a tour by repeatedly walking to the nearest not-yet-visited target.
///
/// `targets[0]` is the fixed start; duplicate targets are visited once per
/// occurrence. With the campus map as the cost source, targets without a
/// remaining direct path are unreachable and the tour truncates at that
/// point, covering only the legs actually walked; with a distance matrix
/// every target is priced and the tour always completes. The returning leg
/// closes the tour whenever the source prices it, otherwise the tour stays
/// open.
///
/// O(k²) for k targets. The result is not guaranteed minimal.
pub fn nearest_neighbor_tour<C: TravelCosts>(costs: &C, targets: &[Node]) -> Tour {
    assert!(targets.len() >= 2, "a tour needs at least two targets");

    let k = targets.len();
    let mut visited = FixedBitSet::with_capacity(k);
    visited.insert(0);

    let mut order = vec![targets[0]];
    let mut total = Cost::new(0);
    let mut current = targets[0];

    for _ in 1..k {
        let mut next: Option<(usize, Cost)> = None;
        for candidate in 0..k {
            if visited.contains(candidate) {
                continue;
            }
            if let Some(cost) = costs.travel_cost(current, targets[candidate]) {
                if next.map_or(true, |(_, best)| cost < best) {
                    next = Some((candidate, cost));
                }
            }
        }

        match next {
            Some((candidate, cost)) => {
                visited.insert(candidate);
                order.push(targets[candidate]);
                total += cost;
                current = targets[candidate];
            }
            None => {
                log::info!(
                    "Nearest-neighbor tour truncated after {} of {} targets.",
                    order.len(),
                    k
                );
                return Tour::open(order, total);
            }
        }
    }

    match costs.travel_cost(current, targets[0]) {
        Some(back) => Tour::closed(order, total + back),
        None => {
            log::info!("No returning leg to {}; leaving the tour open.", targets[0]);
            Tour::open(order, total)
        }
    }
}

/// Finds a minimum-length closed tour over `targets` by exhausting visiting
/// orders.
///
/// The start stays fixed: every rotation of a closed tour has the same
/// length, so only the remaining positions are permuted. Orders touching a
/// pair the source does not price are skipped. Returns `None` when no order
/// closes finitely.
///
/// Factorial in the number of targets; callers keep k to a handful of stops.
pub fn exhaustive_tour<C: TravelCosts>(costs: &C, targets: &[Node]) -> Option<Tour> {
    assert!(targets.len() >= 2, "a tour needs at least two targets");

    log::trace!("Exhausting visiting orders over {} targets.", targets.len());

    let mut rest: Vec<usize> = (1..targets.len()).collect();
    let mut best: Option<(Cost, Vec<Node>)> = None;
    permute(&mut rest, 0, &mut |order| {
        if let Some((cost, nodes)) = price_closed(costs, targets, order) {
            if best.as_ref().map_or(true, |(current, _)| cost < *current) {
                best = Some((cost, nodes));
            }
        }
    });

    match &best {
        Some((cost, _)) => log::trace!("Minimum tour length: {}.", cost),
        None => log::info!("No visiting order closes; there is no valid tour."),
    }

    best.map(|(cost, nodes)| Tour::closed(nodes, cost))
}

/// Prices one visiting order including the returning leg; `None` as soon as
/// a leg is not priced by the source.
fn price_closed<C: TravelCosts>(
    costs: &C,
    targets: &[Node],
    order: &[usize],
) -> Option<(Cost, Vec<Node>)> {
    let mut total = Cost::new(0);
    let mut nodes = Vec::with_capacity(targets.len());
    nodes.push(targets[0]);
    let mut current = targets[0];

    for &position in order {
        let next = targets[position];
        total += costs.travel_cost(current, next)?;
        nodes.push(next);
        current = next;
    }
    total += costs.travel_cost(current, targets[0])?;

    Some((total, nodes))
}

fn permute<F: FnMut(&[usize])>(positions: &mut [usize], k: usize, visit: &mut F) {
    if k == positions.len() {
        visit(positions);
        return;
    }
    for i in k..positions.len() {
        positions.swap(k, i);
        permute(positions, k + 1, visit);
        positions.swap(k, i);
    }
}
