// Error types for the progression engine.
// Everything here is recoverable, and every validation runs before any output
// is emitted, so a failed call never leaves partial state behind.

use thiserror::Error;

use crate::types::{MatchId, PairId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{total} pairs cannot fill a single group of {min}")]
    InsufficientPairs { total: usize, min: usize },

    #[error("no group count fits {total} pairs with sizes in {min}..={max}")]
    InfeasibleConfiguration { total: usize, min: usize, max: usize },

    #[error("bracket needs {required} pairs but only {available} qualify")]
    InsufficientQualifiers { required: usize, available: usize },

    #[error("{size} is not a supported bracket size")]
    InvalidBracketSize { size: usize },

    #[error("pair {pair_id} appears more than once in the bracket")]
    DuplicatePairInBracket { pair_id: PairId },

    #[error("pair {pair_id} cannot face itself")]
    SelfMatchup { pair_id: PairId },

    #[error("pair {pair_id} is not among the qualified pairs")]
    UnknownPair { pair_id: PairId },

    #[error("score does not produce a winner")]
    ScoreWithoutWinner,

    #[error("match {match_id} is already completed")]
    MatchAlreadyCompleted { match_id: MatchId },

    #[error("match {match_id} has not been completed yet")]
    MatchNotCompleted { match_id: MatchId },
}
