// Scores are ordered lists of set results.

use serde::{Deserialize, Serialize};

// Which side of a match a pair plays on.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

// A single set: games for pair A against games for pair B.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct SetScore {
    pub a: u16,
    pub b: u16,
}

impl SetScore {
    // Build a SetScore element.
    pub fn build(a: u16, b: u16) -> Self {
        Self { a: a, b: b }
    }

    // Get the set winner. A tied set decides for neither side.
    pub fn winner(&self) -> Option<Side> {
        if self.a > self.b { return Some(Side::A); }
        if self.b > self.a { return Some(Side::B); }

        return None;
    }

    // Get the games one side took in this set.
    pub fn games(&self, side: Side) -> u16 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Score {
    pub sets: Vec<SetScore>,
}

impl Score {
    // Build a Score element.
    pub fn build(sets: Vec<SetScore>) -> Self {
        Self { sets: sets }
    }

    // Count the sets taken by one side.
    pub fn sets_won(&self, side: Side) -> usize {
        self.sets.iter().filter(|set| set.winner() == Some(side)).count()
    }

    // Sum the games taken by one side across all sets.
    pub fn games_won(&self, side: Side) -> u16 {
        self.sets.iter().map(|set| set.games(side)).sum()
    }

    // Get the match winner: the side holding the majority of sets.
    // A score that splits the sets, or decides none of them, has no winner.
    pub fn winner(&self) -> Option<Side> {
        let a = self.sets_won(Side::A);
        let b = self.sets_won(Side::B);

        if a > b { return Some(Side::A); }
        if b > a { return Some(Side::B); }

        return None;
    }
}
