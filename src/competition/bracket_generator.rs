// Functions for generating the elimination stage.

use serde::{Deserialize, Serialize};

use crate::{
    competition::qualification::Qualifier,
    error::{Error, Result},
    match_event::{Match, Stage},
    types::PairId,
};

// Which stages the elimination bracket plays out.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KnockoutFormat {
    pub third_place_match: bool,
}

impl KnockoutFormat {
    // Build a KnockoutFormat element.
    pub fn build(third_place_match: bool) -> Self {
        Self { third_place_match: third_place_match }
    }
}

// One round of the bracket skeleton.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct BracketRound {
    pub stage: Stage,
    pub matches: usize,
}

// A generated bracket: the full round skeleton plus the concrete first round.
// Later rounds stay empty until their feeder matches complete.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone)]
pub struct Bracket {
    pub rounds: Vec<BracketRound>,
    pub first_round: Vec<Match>,
}

// Get the stage that opens a bracket of the given size.
// The stage vocabulary ends at quarterfinals, which caps the supported sizes.
fn first_round_stage(size: usize) -> Result<Stage> {
    match size {
        2 => Ok(Stage::Final),
        4 => Ok(Stage::Semifinal),
        8 => Ok(Stage::Quarterfinal),
        _ => Err(Error::InvalidBracketSize { size: size }),
    }
}

// Define the round skeleton for a bracket of the given size.
pub fn round_structure(size: usize, format: &KnockoutFormat) -> Result<Vec<BracketRound>> {
    first_round_stage(size)?;

    let mut rounds = Vec::new();
    let mut remaining = size;
    while remaining >= 2 {
        rounds.push(BracketRound {
            stage: first_round_stage(remaining)?,
            matches: remaining / 2,
        });
        remaining /= 2;
    }

    // The bronze match is decided between the semifinal losers, before the final.
    if format.third_place_match && size >= 4 {
        let last = rounds.len() - 1;
        rounds.insert(last, BracketRound { stage: Stage::ThirdPlace, matches: 1 });
    }

    return Ok(rounds);
}

// Generate the bracket from the seeded qualifier list:
// seed 1 plays the weakest seed, seed 2 the next weakest, and so on.
pub fn build(qualifiers: &[Qualifier], format: &KnockoutFormat) -> Result<Bracket> {
    let size = qualifiers.len();
    let stage = first_round_stage(size)?;

    let matchups: Vec<(PairId, PairId)> = (0..size / 2)
        .map(|k| (qualifiers[k].pair_id, qualifiers[size - 1 - k].pair_id))
        .collect();
    validate_matchups(&matchups)?;

    Ok(Bracket {
        rounds: round_structure(size, format)?,
        first_round: build_matches(&matchups, stage),
    })
}

// Operator-picked matchups from the qualified pairs. Seeding order is not
// enforced here, but the duplicate and self-matchup rules still are.
pub fn build_manual(matchups: &[(PairId, PairId)], qualified: &[PairId]) -> Result<Vec<Match>> {
    let stage = first_round_stage(matchups.len() * 2)?;
    validate_matchups(matchups)?;

    for (pair_a, pair_b) in matchups.iter() {
        for pair_id in [pair_a, pair_b] {
            if !qualified.contains(pair_id) {
                return Err(Error::UnknownPair { pair_id: *pair_id });
            }
        }
    }

    Ok(build_matches(matchups, stage))
}

// Make sure no pair appears twice and no pair faces itself.
fn validate_matchups(matchups: &[(PairId, PairId)]) -> Result<()> {
    // Keep track of consumed pairs to deny duplicates.
    let mut consumed: Vec<PairId> = Vec::new();

    for (pair_a, pair_b) in matchups.iter() {
        if pair_a == pair_b {
            return Err(Error::SelfMatchup { pair_id: *pair_a });
        }

        for pair_id in [*pair_a, *pair_b] {
            if consumed.contains(&pair_id) {
                return Err(Error::DuplicatePairInBracket { pair_id: pair_id });
            }
            consumed.push(pair_id);
        }
    }

    Ok(())
}

fn build_matches(matchups: &[(PairId, PairId)], stage: Stage) -> Vec<Match> {
    matchups.iter()
        .map(|(pair_a, pair_b)| Match::build(stage, None, *pair_a, *pair_b))
        .collect()
}

// Advance the winners of a completed round into the next one.
// Bracket slot topology is preserved: the winners of the first two matches
// meet, then the next two, and so on. Nothing is re-seeded.
pub fn advance_round(round: &[Match], format: &KnockoutFormat) -> Result<Vec<Match>> {
    let next_stage = match round.first().map(|game| game.stage) {
        Some(Stage::Quarterfinal) => Stage::Semifinal,
        Some(Stage::Semifinal) => Stage::Final,
        // Finals feed nothing.
        _ => return Ok(Vec::new()),
    };

    if round.len() % 2 != 0 {
        return Err(Error::InvalidBracketSize { size: round.len() * 2 });
    }

    let mut winners = Vec::new();
    let mut losers = Vec::new();
    for game in round.iter() {
        match (game.winner(), game.loser()) {
            (Some(winner), Some(loser)) => {
                winners.push(winner);
                losers.push(loser);
            }
            _ => return Err(Error::MatchNotCompleted { match_id: game.id }),
        }
    }

    let mut matches = Vec::new();
    for slot in winners.chunks(2) {
        matches.push(Match::build(next_stage, None, slot[0], slot[1]));
    }

    // Semifinal losers meet for the bronze.
    if next_stage == Stage::Final && format.third_place_match && losers.len() == 2 {
        matches.push(Match::build(Stage::ThirdPlace, None, losers[0], losers[1]));
    }

    return Ok(matches);
}
