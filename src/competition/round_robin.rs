// Fixture generation for round robin groups.

use log::warn;

use crate::{
    competition::Group,
    match_event::{Match, Stage},
    pair::Pair,
    types::PairId,
};

// Generate one match per unique pairing within the group, in stored member order.
// Groups with fewer than two resolvable members yield no matches.
pub fn generate_matches(group: &Group, pairs: &[Pair]) -> Vec<Match> {
    let members = resolve_members(group, pairs);

    let mut matches = Vec::new();
    for (i, pair_a) in members.iter().enumerate() {
        for pair_b in members.iter().skip(i + 1) {
            // Upstream data corruption. Never emit a pair against itself.
            if pair_a == pair_b {
                warn!("group {} lists pair {pair_a} twice, skipping the self-pairing", group.name);
                continue;
            }

            matches.push(Match::build(Stage::Group, Some(group.id), *pair_a, *pair_b));
        }
    }

    return matches;
}

// Keep only the member ids that resolve against the supplied roster.
fn resolve_members(group: &Group, pairs: &[Pair]) -> Vec<PairId> {
    let mut members = Vec::new();
    for pair_id in group.pair_ids.iter() {
        match pairs.iter().any(|pair| pair.id == *pair_id) {
            true => members.push(*pair_id),
            _ => warn!("group {} references pair {pair_id} missing from the roster", group.name),
        }
    }

    return members;
}

// How many matches a full round robin needs for the given member count.
pub fn expected_match_count(members: usize) -> usize {
    members * members.saturating_sub(1) / 2
}

// Confirm that the generated matches cover the group completely:
// every unordered pairing of members appears exactly once, and nothing else does.
pub fn verify_group_matches(group: &Group, matches: &[Match]) -> bool {
    let group_matches: Vec<&Match> = matches.iter()
        .filter(|game| game.group_id == Some(group.id))
        .collect();

    if group_matches.len() != expected_match_count(group.len()) {
        return false;
    }

    for (i, pair_a) in group.pair_ids.iter().enumerate() {
        for pair_b in group.pair_ids.iter().skip(i + 1) {
            let found = group_matches.iter()
                .filter(|game| game.involves(*pair_a) && game.involves(*pair_b))
                .count();

            if found != 1 { return false; }
        }
    }

    return true;
}
