// Functions for partitioning a category's pairs into balanced groups.

use serde::{Deserialize, Serialize};

use crate::{
    competition::{group_name, Group, GroupRules},
    error::{Error, Result},
    pair::Pair,
    types::{convert, PairId},
};

// Advisory output of validate: the split whose sizes deviate least from their mean.
// The generator is not bound by it.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct GroupConfiguration {
    pub group_count: usize,
    pub group_sizes: Vec<usize>,
}

// Partition the pairs into groups honoring the size bounds.
// Seeds are interleaved across the groups: seed 1 to Group A, seed 2 to Group B,
// and so on around again. This is not a snake draft.
pub fn generate(pairs: &[Pair], rules: &GroupRules) -> Result<Vec<Group>> {
    validate(pairs.len(), rules)?;

    let sorted = sort_by_seed(pairs);
    let mut members = fill_groups(&sorted, rules);
    dissolve_undersized_groups(&mut members, rules);

    // Name the groups alphabetically in final order.
    let groups = members.into_iter().enumerate()
        .map(|(i, pair_ids)| Group::build(&group_name(i), pair_ids))
        .collect();

    return Ok(groups);
}

// Check that the pairs can be split at all, and suggest the most balanced split.
pub fn validate(total_pairs: usize, rules: &GroupRules) -> Result<GroupConfiguration> {
    if !rules.is_valid() {
        return Err(infeasible(total_pairs, rules));
    }
    if total_pairs < rules.min_group_size {
        return Err(Error::InsufficientPairs { total: total_pairs, min: rules.min_group_size });
    }

    let fewest = total_pairs.div_ceil(rules.max_group_size);
    let most = total_pairs / rules.min_group_size;
    if fewest > most {
        return Err(infeasible(total_pairs, rules));
    }

    // Pick the group count whose sizes deviate least from their mean.
    let mut best = fewest;
    for count in fewest..=most {
        if squared_deviation(total_pairs, count) < squared_deviation(total_pairs, best) {
            best = count;
        }
    }

    Ok(GroupConfiguration {
        group_count: best,
        group_sizes: balanced_sizes(total_pairs, best),
    })
}

fn infeasible(total_pairs: usize, rules: &GroupRules) -> Error {
    Error::InfeasibleConfiguration {
        total: total_pairs,
        min: rules.min_group_size,
        max: rules.max_group_size,
    }
}

// Sum of squared deviations of the group sizes from the mean, for a given count.
fn squared_deviation(total_pairs: usize, count: usize) -> f64 {
    let mean = convert::usize_to_f64(total_pairs) / convert::usize_to_f64(count);

    balanced_sizes(total_pairs, count).iter()
        .map(|size| {
            let deviation = convert::usize_to_f64(*size) - mean;
            deviation * deviation
        })
        .sum()
}

// The sizes a round-robin fill produces: the leading groups get the remainder.
fn balanced_sizes(total_pairs: usize, count: usize) -> Vec<usize> {
    let base = total_pairs / count;
    let remainder = total_pairs % count;

    (0..count).map(|i| if i < remainder { base + 1 } else { base }).collect()
}

// Sort pairs by seed, best seed first.
// The sort is stable: unseeded pairs keep their relative order at the end.
fn sort_by_seed(pairs: &[Pair]) -> Vec<&Pair> {
    let mut sorted: Vec<&Pair> = pairs.iter().collect();
    sorted.sort_by_key(|pair| match pair.seed {
        Some(seed) => (0, seed),
        None => (1, 0),
    });

    return sorted;
}

// Place each pair into the next group in rotation that still has room,
// opening the rotation with as few groups as the maximum size allows.
fn fill_groups(sorted: &[&Pair], rules: &GroupRules) -> Vec<Vec<PairId>> {
    let group_count = sorted.len().div_ceil(rules.max_group_size).max(1);
    let mut members: Vec<Vec<PairId>> = vec![Vec::new(); group_count];

    for (i, pair) in sorted.iter().enumerate() {
        let mut index = i % group_count;

        // Full groups pass their turn to the next one with room.
        while members[index].len() >= rules.max_group_size {
            index = (index + 1) % group_count;
        }

        members[index].push(pair.id);
    }

    return members;
}

// Dissolve groups that ended up below the minimum size, redistributing their
// members one by one into groups with spare capacity. A fresh group is opened
// only when no existing group has room; overflow groups are not re-dissolved.
fn dissolve_undersized_groups(members: &mut Vec<Vec<PairId>>, rules: &GroupRules) {
    let mut orphans = Vec::new();
    let mut index = 0;
    while index < members.len() {
        if members[index].len() < rules.min_group_size {
            orphans.extend(members.remove(index));
        }
        else {
            index += 1;
        }
    }

    for pair_id in orphans {
        match members.iter_mut().find(|group| group.len() < rules.max_group_size) {
            Some(group) => group.push(pair_id),
            _ => members.push(vec![pair_id]),
        }
    }
}
