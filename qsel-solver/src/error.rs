use std::fmt;

/// One rejected field of a raw request, e.g. `items[2].weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    CapacityAboveLimit {
        capacity: u32,
        max_capacity: u32,
    },
    InvalidCapacity {
        reason: String,
    },
    InvalidItems {
        errors: Vec<FieldError>,
    },
    InvalidShape {
        reason: String,
    },
    InvalidSolution {
        reason: String,
    },
    RequestTooLarge {
        num_items: usize,
        capacity: u32,
        max_table_cells: u64,
    },
    TooManyItemsForBruteForce {
        num_items: usize,
        max_items: usize,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::CapacityAboveLimit {
                capacity,
                max_capacity,
            } => write!(
                f,
                "Capacity '{}' is above the allowed maximum '{}'",
                capacity, max_capacity
            ),
            SolverError::InvalidCapacity { reason } => {
                write!(f, "Capacity is invalid: {}", reason)
            }
            SolverError::InvalidItems { errors } => {
                let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(
                    f,
                    "{} invalid item field(s): {}",
                    errors.len(),
                    details.join("; ")
                )
            }
            SolverError::InvalidShape { reason } => {
                write!(f, "Request has an invalid shape: {}", reason)
            }
            SolverError::InvalidSolution { reason } => {
                write!(f, "Solution is invalid: {}", reason)
            }
            SolverError::RequestTooLarge {
                num_items,
                capacity,
                max_table_cells,
            } => write!(
                f,
                "Request too large: {} items with capacity '{}' exceeds the limit of {} table cells",
                num_items, capacity, max_table_cells
            ),
            SolverError::TooManyItemsForBruteForce {
                num_items,
                max_items,
            } => write!(
                f,
                "Brute force supports at most {} items, got {}",
                max_items, num_items
            ),
        }
    }
}

impl std::error::Error for SolverError {}

pub type SolverResult<T> = std::result::Result<T, SolverError>;
