use qsel_structs::core::{ItemData, SolveRequest};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const MAX_ITEM_MINUTES: u32 = 30;
pub const MAX_ITEM_SCORE: u32 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub num_items: usize,
    /// Capacity as a percentage of the summed item weights.
    pub budget_percent: u32,
}

/// Builds a random quiz-shaped request: minutes in `1..=30`, scores in
/// `0..=100`. The same seed and track always give the same request.
pub fn generate_instance(seed: &[u8; 32], track: &Track) -> SolveRequest {
    let mut rng = SmallRng::from_seed(*seed);

    let items: Vec<ItemData> = (0..track.num_items)
        .map(|i| ItemData {
            id: Value::from(i as u64 + 1),
            value: rng.gen_range(0..=MAX_ITEM_SCORE),
            weight: rng.gen_range(1..=MAX_ITEM_MINUTES),
            payload: Some(json!({ "text": format!("Question {}", i + 1) })),
        })
        .collect();

    let total_weight: u64 = items.iter().map(|item| item.weight as u64).sum();
    let capacity = (track.budget_percent as u64 * total_weight / 100).min(u32::MAX as u64) as u32;

    SolveRequest { items, capacity }
}
