use crate::{SolverError, SolverResult};
use qsel_structs::config::SolverConfig;
use tracing::warn;

/// Rejects requests whose table would be too big to build. Runs before any
/// allocation; [`crate::knapsack::solve`] itself never refuses work.
pub fn check_limits(num_items: usize, capacity: u32, config: &SolverConfig) -> SolverResult<()> {
    if capacity > config.max_capacity {
        warn!(capacity, max_capacity = config.max_capacity, "capacity above limit");
        return Err(SolverError::CapacityAboveLimit {
            capacity,
            max_capacity: config.max_capacity,
        });
    }
    let cells = SolverConfig::table_cells(num_items, capacity);
    if cells > config.max_table_cells {
        warn!(num_items, capacity, cells, "request too large");
        return Err(SolverError::RequestTooLarge {
            num_items,
            capacity,
            max_table_cells: config.max_table_cells,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limits() {
        assert_eq!(check_limits(4, 13, &SolverConfig::default()), Ok(()));
        assert_eq!(check_limits(0, 0, &SolverConfig::default()), Ok(()));
    }

    #[test]
    fn test_capacity_above_limit() {
        let config = SolverConfig {
            max_capacity: 60,
            ..SolverConfig::default()
        };
        assert_eq!(
            check_limits(1, 61, &config),
            Err(SolverError::CapacityAboveLimit {
                capacity: 61,
                max_capacity: 60
            })
        );
    }

    #[test]
    fn test_table_cell_ceiling() {
        let config = SolverConfig {
            max_table_cells: 100,
            ..SolverConfig::default()
        };
        // 10 items * 10 columns fits exactly, one more column does not
        assert_eq!(check_limits(10, 9, &config), Ok(()));
        assert_eq!(
            check_limits(10, 10, &config),
            Err(SolverError::RequestTooLarge {
                num_items: 10,
                capacity: 10,
                max_table_cells: 100
            })
        );
    }
}
