use crate::knapsack::Item;
use crate::{SolverError, SolverResult};

pub const MAX_ITEMS: usize = 20;

/// Best achievable value found by enumerating every subset. Only usable for
/// small instances, it exists to check the DP against.
pub fn solve<I, P>(items: &[Item<I, P>], capacity: u32) -> SolverResult<u64> {
    if items.len() > MAX_ITEMS {
        return Err(SolverError::TooManyItemsForBruteForce {
            num_items: items.len(),
            max_items: MAX_ITEMS,
        });
    }

    let mut best_value = 0u64;
    for mask in 0u32..(1u32 << items.len()) {
        let mut total_value = 0u64;
        let mut total_weight = 0u64;
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                total_value += item.value as u64;
                total_weight += item.weight as u64;
            }
        }
        if total_weight <= capacity as u64 {
            best_value = best_value.max(total_value);
        }
    }
    Ok(best_value)
}
