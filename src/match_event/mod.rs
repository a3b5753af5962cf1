// Matches are single fixtures between two distinct pairs.

pub mod score;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::{Error, Result}, types::{GroupId, MatchId, PairId}};

use self::score::{Score, Side};

// Which stage of the tournament a match belongs to.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Group,
    Quarterfinal,
    Semifinal,
    Final,
    ThirdPlace,
}

// Match statuses only ever move forward.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    Scheduled,
    Completed,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub stage: Stage,
    pub group_id: Option<GroupId>,   // Only group stage matches carry a group reference.
    pub pair_a: PairId,
    pub pair_b: PairId,
    pub status: Status,
    pub score: Option<Score>,
}

// Basics.
impl Match {
    // Build a Match element.
    pub fn build(stage: Stage, group_id: Option<GroupId>, pair_a: PairId, pair_b: PairId) -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: stage,
            group_id: group_id,
            pair_a: pair_a,
            pair_b: pair_b,
            status: Status::default(),
            score: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    // Check whether the given pair plays in this match.
    pub fn involves(&self, pair_id: PairId) -> bool {
        self.pair_a == pair_id || self.pair_b == pair_id
    }

    // Get the side the given pair plays on, if it plays at all.
    pub fn side_of(&self, pair_id: PairId) -> Option<Side> {
        if self.pair_a == pair_id { return Some(Side::A); }
        if self.pair_b == pair_id { return Some(Side::B); }

        return None;
    }
}

// Lifecycle.
impl Match {
    // Move the match from pending to scheduled.
    pub fn schedule(&mut self) -> Result<()> {
        if self.is_completed() {
            return Err(Error::MatchAlreadyCompleted { match_id: self.id });
        }

        self.status = Status::Scheduled;
        Ok(())
    }

    // Record the final score and complete the match.
    // The score must produce an unambiguous winner.
    pub fn complete(&mut self, score: Score) -> Result<()> {
        if self.is_completed() {
            return Err(Error::MatchAlreadyCompleted { match_id: self.id });
        }
        if score.winner().is_none() {
            return Err(Error::ScoreWithoutWinner);
        }

        self.score = Some(score);
        self.status = Status::Completed;
        Ok(())
    }

    // Get the winning pair of a completed match.
    pub fn winner(&self) -> Option<PairId> {
        if !self.is_completed() { return None; }

        match self.score.as_ref()?.winner()? {
            Side::A => Some(self.pair_a),
            Side::B => Some(self.pair_b),
        }
    }

    // Get the losing pair of a completed match.
    pub fn loser(&self) -> Option<PairId> {
        match self.winner()? == self.pair_a {
            true => Some(self.pair_b),
            _ => Some(self.pair_a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_event::score::SetScore;

    fn test_match() -> Match {
        Match::build(Stage::Group, None, Uuid::new_v4(), Uuid::new_v4())
    }

    fn straight_sets_a() -> Score {
        Score::build(vec![SetScore::build(6, 2), SetScore::build(6, 4)])
    }

    #[test]
    fn test_status_moves_forward() {
        let mut game = test_match();
        assert_eq!(game.status, Status::Pending);

        game.schedule().unwrap();
        assert_eq!(game.status, Status::Scheduled);

        game.complete(straight_sets_a()).unwrap();
        assert_eq!(game.status, Status::Completed);

        // No regression once completed.
        assert_eq!(game.schedule(), Err(Error::MatchAlreadyCompleted { match_id: game.id }));
        assert_eq!(
            game.complete(straight_sets_a()),
            Err(Error::MatchAlreadyCompleted { match_id: game.id })
        );
    }

    #[test]
    fn test_completing_skips_scheduled() {
        let mut game = test_match();
        game.complete(straight_sets_a()).unwrap();

        assert!(game.is_completed());
    }

    #[test]
    fn test_tied_score_is_rejected() {
        let mut game = test_match();
        let split = Score::build(vec![SetScore::build(6, 4), SetScore::build(4, 6)]);

        assert_eq!(game.complete(split), Err(Error::ScoreWithoutWinner));
        assert_eq!(game.status, Status::Pending);
        assert!(game.score.is_none());
    }

    #[test]
    fn test_winner_and_loser() {
        let mut game = test_match();
        assert_eq!(game.winner(), None);

        game.complete(Score::build(vec![SetScore::build(3, 6), SetScore::build(2, 6)])).unwrap();

        assert_eq!(game.winner(), Some(game.pair_b));
        assert_eq!(game.loser(), Some(game.pair_a));
    }
}
