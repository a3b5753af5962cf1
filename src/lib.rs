// Tournament progression engine for padel pair competitions.
// Groups, fixtures, standings, qualification and elimination brackets as pure
// functions over the collections the caller passes in. Persistence, scheduling
// and presentation live outside this crate.

pub mod competition;
pub mod error;
pub mod match_event;
pub mod pair;
pub mod types;

pub use competition::{Group, GroupRules, ScoringRules};
pub use error::{Error, Result};
pub use match_event::{score::{Score, SetScore}, Match, Stage, Status};
pub use pair::Pair;
