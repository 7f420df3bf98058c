pub mod baselines;
mod generator;
pub use generator::*;
mod table;

use crate::{SolverError, SolverResult};
use qsel_structs::core::{ItemData, SolutionData, SolveRequest};
use serde_json::Value;
use std::fmt;
use table::DpTable;
use tracing::{debug, trace};

/// A selectable unit. `payload` is whatever the caller wants handed back for
/// a selected item, typically a reference to its own record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<I, P> {
    pub id: I,
    pub value: u32,
    pub weight: u32,
    pub payload: P,
}

impl<I, P> Item<I, P> {
    pub fn new(id: I, value: u32, weight: u32, payload: P) -> Self {
        Self {
            id,
            value,
            weight,
            payload,
        }
    }
}

/// The chosen subset, borrowed from the solved items and kept in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<'a, I, P> {
    pub selected: Vec<&'a Item<I, P>>,
    pub total_value: u64,
    pub total_weight: u64,
}

impl<'a, I, P> Solution<'a, I, P> {
    pub fn empty() -> Self {
        Self {
            selected: Vec::new(),
            total_value: 0,
            total_weight: 0,
        }
    }

    fn from_selected(selected: Vec<&'a Item<I, P>>) -> Self {
        let total_value = selected.iter().map(|item| item.value as u64).sum();
        let total_weight = selected.iter().map(|item| item.weight as u64).sum();
        Self {
            selected,
            total_value,
            total_weight,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> Vec<&I> {
        self.selected.iter().map(|item| &item.id).collect()
    }
}

/// Exact 0/1 knapsack. Returns a maximum value subset of `items` whose total
/// weight fits in `capacity`.
///
/// Among equally valuable subsets the one picked is fixed by the backward
/// scan over the table: starting at `(n, capacity)`, item `i` is taken iff
/// `dp[i][w] != dp[i - 1][w]`. Items with zero weight are treated as free
/// and taken whenever their value is positive.
pub fn solve<I, P>(items: &[Item<I, P>], capacity: u32) -> Solution<'_, I, P> {
    if items.is_empty() {
        debug!(capacity, "no items to select from");
        return Solution::empty();
    }

    debug!(num_items = items.len(), capacity, "building knapsack table");
    let table = DpTable::build(items, capacity);
    debug_assert_eq!(table.num_rows(), items.len() + 1);

    // Scans while i > 0 rather than stopping once w hits zero, so free items
    // ahead of that point are still picked up.
    let mut selected = Vec::new();
    let mut w = capacity as usize;
    for i in (1..=items.len()).rev() {
        if table.get(i, w) != table.get(i - 1, w) {
            let item = &items[i - 1];
            trace!(index = i - 1, weight = item.weight, remaining = w, "item selected");
            w -= item.weight as usize;
            selected.push(item);
        }
    }
    selected.reverse();

    let solution = Solution::from_selected(selected);
    debug_assert_eq!(
        solution.total_value,
        table.get(items.len(), capacity as usize)
    );
    debug!(
        num_selected = solution.selected.len(),
        total_value = solution.total_value,
        total_weight = solution.total_weight,
        "knapsack solved"
    );
    solution
}

/// Optimal value only, using a single rolling row of `capacity + 1` cells.
/// Cannot tell which items were chosen.
pub fn max_value<I, P>(items: &[Item<I, P>], capacity: u32) -> u64 {
    let capacity = capacity as usize;
    let mut dp = vec![0u64; capacity + 1];
    for item in items {
        let weight = item.weight as usize;
        if weight > capacity {
            continue;
        }
        let value = item.value as u64;
        for w in (weight..=capacity).rev() {
            dp[w] = dp[w].max(dp[w - weight] + value);
        }
    }
    dp[capacity]
}

/// Recomputes the totals of `solution` and checks them against what it
/// reports, against `capacity`, and for repeated entries.
pub fn verify_solution<I, P>(solution: &Solution<'_, I, P>, capacity: u32) -> SolverResult<()> {
    let total_value: u64 = solution.selected.iter().map(|item| item.value as u64).sum();
    let total_weight: u64 = solution.selected.iter().map(|item| item.weight as u64).sum();

    if total_value != solution.total_value {
        return Err(SolverError::InvalidSolution {
            reason: format!(
                "reported total value {} but selected items sum to {}",
                solution.total_value, total_value
            ),
        });
    }
    if total_weight != solution.total_weight {
        return Err(SolverError::InvalidSolution {
            reason: format!(
                "reported total weight {} but selected items sum to {}",
                solution.total_weight, total_weight
            ),
        });
    }
    if total_weight > capacity as u64 {
        return Err(SolverError::InvalidSolution {
            reason: format!(
                "total weight {} exceeds capacity {}",
                total_weight, capacity
            ),
        });
    }
    for (i, a) in solution.selected.iter().enumerate() {
        if solution.selected[..i].iter().any(|b| std::ptr::eq(*a, *b)) {
            return Err(SolverError::InvalidSolution {
                reason: format!("item at position {} is selected more than once", i),
            });
        }
    }
    Ok(())
}

/// Rebuilds a selection from item ids. Each id claims the first unclaimed
/// item carrying it; the result is put back into input order.
pub fn select_by_ids<'a, I, P>(
    items: &'a [Item<I, P>],
    ids: &[I],
) -> SolverResult<Solution<'a, I, P>>
where
    I: PartialEq + fmt::Debug,
{
    let mut claimed = vec![false; items.len()];
    for id in ids {
        match (0..items.len()).find(|&i| !claimed[i] && items[i].id == *id) {
            Some(i) => claimed[i] = true,
            None if items.iter().any(|item| item.id == *id) => {
                return Err(SolverError::InvalidSolution {
                    reason: format!("item {:?} is selected more than once", id),
                })
            }
            None => {
                return Err(SolverError::InvalidSolution {
                    reason: format!("item {:?} does not exist", id),
                })
            }
        }
    }
    let selected = items
        .iter()
        .zip(claimed)
        .filter_map(|(item, claimed)| claimed.then_some(item))
        .collect();
    Ok(Solution::from_selected(selected))
}

pub fn request_items(request: &SolveRequest) -> Vec<Item<&Value, &ItemData>> {
    request
        .items
        .iter()
        .map(|data| Item::new(&data.id, data.value, data.weight, data))
        .collect()
}

pub fn solve_request(request: &SolveRequest) -> SolutionData {
    let items = request_items(request);
    let solution = solve(&items, request.capacity);
    SolutionData {
        ids: solution.selected.iter().map(|item| item.id.clone()).collect(),
        total_value: solution.total_value,
        total_weight: solution.total_weight,
    }
}

/// Checks a submitted solution against the request it claims to solve.
/// Optimality is not checked here; compare `total_value` with [`max_value`].
pub fn verify_solution_data(request: &SolveRequest, data: &SolutionData) -> SolverResult<()> {
    let items = request_items(request);
    let ids: Vec<&Value> = data.ids.iter().collect();
    let mut solution = select_by_ids(&items, &ids)?;
    solution.total_value = data.total_value;
    solution.total_weight = data.total_weight;
    verify_solution(&solution, request.capacity)
}
