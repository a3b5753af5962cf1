// Qualification out of the groups and seeding into the elimination bracket.

use ordinal::Ordinal;
use serde::{Deserialize, Serialize};

use crate::{
    competition::{ranking::{self, RankCriteria, SortContext, Standing}, ScoringRules},
    error::{Error, Result},
    types::PairId,
};

// Criteria for ranking qualifiers across groups: points, then set and game
// difference. Head-to-head is meaningless between pairs from different groups.
pub const CROSS_GROUP_CASCADE: [RankCriteria; 3] = [
    RankCriteria::Points,
    RankCriteria::SetDifference,
    RankCriteria::GameDifference,
];

// One ranked group table, as produced by the standings calculator.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone)]
pub struct GroupTable {
    pub group_name: String,
    pub standings: Vec<Standing>,
}

impl GroupTable {
    // Build a GroupTable element.
    pub fn build(group_name: &str, standings: Vec<Standing>) -> Self {
        Self {
            group_name: group_name.to_string(),
            standings: standings,
        }
    }
}

// A pair advancing to the elimination stage.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct Qualifier {
    pub pair_id: PairId,
    pub seed: usize,     // 1 is the strongest.
    pub source: String,  // E.g. "1st Group A".
}

// Select the advancing pairs and assign their bracket seeds.
// Every group winner qualifies; remaining slots go to the best second places.
pub fn resolve(tables: &[GroupTable], bracket_size: usize, rules: &ScoringRules) -> Result<Vec<Qualifier>> {
    if tables.len() > bracket_size {
        // Group winners are guaranteed qualifiers and cannot be cut down to size.
        return Err(Error::InvalidBracketSize { size: bracket_size });
    }

    let mut advancing = ranked_finishers(tables, 0, rules);

    if advancing.len() < bracket_size {
        let runners_up = ranked_finishers(tables, 1, rules);
        let open_slots = bracket_size - advancing.len();

        if runners_up.len() < open_slots {
            // The search never looks past second place.
            return Err(Error::InsufficientQualifiers {
                required: bracket_size,
                available: advancing.len() + runners_up.len(),
            });
        }

        advancing.extend(runners_up.into_iter().take(open_slots));
    }

    let qualifiers = advancing.into_iter().enumerate()
        .map(|(i, (standing, source))| Qualifier {
            pair_id: standing.pair_id,
            seed: i + 1,
            source: source,
        })
        .collect();

    return Ok(qualifiers);
}

// Collect the finishers at one table position from every group,
// ranked against each other with the cross-group criteria.
fn ranked_finishers(tables: &[GroupTable], position: usize, rules: &ScoringRules) -> Vec<(Standing, String)> {
    let mut finishers = Vec::new();
    for table in tables.iter() {
        if let Some(standing) = table.standings.get(position) {
            let source = format!("{} {}", Ordinal(position + 1), table.group_name);
            finishers.push((standing.clone(), source));
        }
    }

    // No match log: head-to-head cannot apply across groups.
    let ctx = SortContext { rules: rules, matches: &[] };
    finishers.sort_by(|a, b| ranking::compare_with(&a.0, &b.0, &CROSS_GROUP_CASCADE, &ctx));

    return finishers;
}
