// The progression engine: groups, fixtures, standings, qualification and brackets.
// Everything in here is a pure function over the collections the caller passes in;
// the caller owns storage and hands the current state back in on every call.

pub mod group_generator;
pub mod round_robin;
pub mod ranking;
pub mod qualification;
pub mod bracket_generator;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::Result, match_event::Match, pair::Pair, types::{GroupId, PairId}};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub pair_ids: Vec<PairId>,   // Stored order drives fixture generation.
}

impl Group {
    // Build a Group element.
    pub fn build(name: &str, pair_ids: Vec<PairId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            pair_ids: pair_ids,
        }
    }

    pub fn len(&self) -> usize {
        self.pair_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pair_ids.is_empty()
    }
}

// Get the name for the group at the given position: A, B, ..., Z, AA, AB, ...
pub fn group_name(index: usize) -> String {
    let mut letters = String::new();
    let mut n = index;

    loop {
        letters.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 { break; }
        n = n / 26 - 1;
    }

    format!("Group {letters}")
}

// Bounds for group sizes within a category.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GroupRules {
    pub min_group_size: usize,
    pub max_group_size: usize,
}

impl GroupRules {
    // Build a GroupRules element.
    pub fn build(min_group_size: usize, max_group_size: usize) -> Self {
        Self {
            min_group_size: min_group_size,
            max_group_size: max_group_size,
        }
    }

    // Make sure the rules do not have illegal values.
    pub fn is_valid(&self) -> bool {
        self.min_group_size >= 2 && self.min_group_size <= self.max_group_size
    }
}

// How many points each result is worth when calculating standings.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub points_for_win: u32,
    pub points_for_loss: u32,
}

impl Default for ScoringRules {
    // Group stages award 2 points per win.
    fn default() -> Self {
        Self::build(2, 0)
    }
}

impl ScoringRules {
    // Build a ScoringRules element.
    pub fn build(points_for_win: u32, points_for_loss: u32) -> Self {
        Self {
            points_for_win: points_for_win,
            points_for_loss: points_for_loss,
        }
    }

    // Elimination stages award 3 points per win.
    pub fn elimination() -> Self {
        Self::build(3, 0)
    }
}

// Regenerate the group stage wholesale: new groups plus their full fixture list.
// Match identity is derived from group membership, so the caller must discard
// all old groups and group stage matches together when adopting this output.
pub fn regenerate(pairs: &[Pair], rules: &GroupRules) -> Result<(Vec<Group>, Vec<Match>)> {
    let groups = group_generator::generate(pairs, rules)?;

    let mut matches = Vec::new();
    for group in groups.iter() {
        matches.append(&mut round_robin::generate_matches(group, pairs));
    }

    return Ok((groups, matches));
}
