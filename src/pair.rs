// Pairs are the competing units: two players entering a category together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{CategoryId, PairId};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct Pair {
    pub id: PairId,
    pub player1: String,
    pub player2: String,

    // The lower the value, the stronger the pair is considered.
    // Unseeded pairs sort after every seeded one.
    pub seed: Option<u16>,
    pub category_id: CategoryId,
}

impl Pair {
    // Build a Pair element.
    pub fn build(player1: &str, player2: &str, seed: Option<u16>, category_id: CategoryId) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1: player1.to_string(),
            player2: player2.to_string(),
            seed: seed,
            category_id: category_id,
        }
    }

    // Get the display name of the pair.
    pub fn display_name(&self) -> String {
        format!("{} / {}", self.player1, self.player2)
    }
}
