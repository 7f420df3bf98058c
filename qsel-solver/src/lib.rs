mod error;
pub use error::*;
pub mod knapsack;
pub mod limits;
pub mod recommend;
pub mod validate;
