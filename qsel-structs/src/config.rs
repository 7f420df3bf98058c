use serde::{Deserialize, Serialize};

/// Limits and policies applied around a solve. Every field is optional in
/// json; missing ones fall back to [`SolverConfig::default`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest capacity accepted, in weight units (minutes for quizzes).
    pub max_capacity: u32,
    /// Ceiling on `num_items * (capacity + 1)`, the size of the DP table.
    pub max_table_cells: u64,
    /// Admit items with zero weight as free items instead of rejecting them.
    pub allow_zero_weight: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_080,
            max_table_cells: 50_000_000,
            allow_zero_weight: false,
        }
    }
}

impl SolverConfig {
    pub fn table_cells(num_items: usize, capacity: u32) -> u64 {
        (num_items as u64).saturating_mul(capacity as u64 + 1)
    }
}
