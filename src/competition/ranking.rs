// Functions and methods for ranking pairs from a set of matches.
// Standings are recomputed projections: always derived from the match log
// handed in, never stored as a source of truth.

use std::{cmp::Ordering, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::{
    competition::ScoringRules,
    match_event::{score::Side, Match},
    types::{convert, PairId},
};

// What ranking criteria the standings can be sorted by.
#[derive(Debug)]
#[derive(Eq, Hash, PartialEq)]
#[derive(Clone)]
pub enum RankCriteria {
    Points,
    SetDifference,
    GameDifference,
    HeadToHead,
    SetsWon,
    GamesWon,
}

// The full tie-break cascade, applied in this exact order.
// Ties that survive every criterium keep their prior relative order.
pub const CASCADE: [RankCriteria; 6] = [
    RankCriteria::Points,
    RankCriteria::SetDifference,
    RankCriteria::GameDifference,
    RankCriteria::HeadToHead,
    RankCriteria::SetsWon,
    RankCriteria::GamesWon,
];

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Standing {
    pub pair_id: PairId,
    pub wins: u32,
    pub losses: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub games_won: u32,
    pub games_lost: u32,
}

// Basics.
impl Standing {
    // Build a Standing element.
    pub fn build(pair_id: PairId) -> Self {
        Self {
            pair_id: pair_id,
            ..Default::default()
        }
    }

    // Matches played is always wins plus losses.
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn points(&self, rules: &ScoringRules) -> u32 {
        self.wins * rules.points_for_win + self.losses * rules.points_for_loss
    }

    pub fn set_difference(&self) -> i64 {
        convert::int::<u32, i64>(self.sets_won) - convert::int::<u32, i64>(self.sets_lost)
    }

    pub fn game_difference(&self) -> i64 {
        convert::int::<u32, i64>(self.games_won) - convert::int::<u32, i64>(self.games_lost)
    }
}

// Accumulation.
impl Standing {
    // Fold one completed match into the row.
    fn record(&mut self, game: &Match, side: Side) {
        let score = match game.score.as_ref() {
            Some(score) => score,
            _ => return,
        };

        match game.winner() == Some(self.pair_id) {
            true => self.wins += 1,
            _ => self.losses += 1,
        }

        let other = side.opposite();
        self.sets_won += convert::int::<usize, u32>(score.sets_won(side));
        self.sets_lost += convert::int::<usize, u32>(score.sets_won(other));
        self.games_won += convert::int::<u16, u32>(score.games_won(side));
        self.games_lost += convert::int::<u16, u32>(score.games_won(other));
    }
}

// Calculate standings for the given pairs from the supplied match log.
// Pairs without a single completed match still get an all-zero row.
pub fn calculate(pair_ids: &[PairId], matches: &[Match], rules: &ScoringRules) -> Vec<Standing> {
    let mut standings: Vec<Standing> = pair_ids.iter().map(|id| Standing::build(*id)).collect();

    for game in matches {
        // Only completed matches with a resolvable winner count.
        if game.winner().is_none() { continue; }

        for standing in standings.iter_mut() {
            if let Some(side) = game.side_of(standing.pair_id) {
                standing.record(game, side);
            }
        }
    }

    let ctx = SortContext { rules: rules, matches: matches };
    sort_standings(&mut standings, &CASCADE, &ctx);

    return standings;
}

// Context the compare functions need: the scoring rules,
// and the match log for head-to-head lookups.
pub struct SortContext<'a> {
    pub rules: &'a ScoringRules,
    pub matches: &'a [Match],
}

type CmpFunc = fn(&Standing, &Standing, &SortContext<'_>) -> Ordering;

// Compare functions here.

fn compare_points(a: &Standing, b: &Standing, ctx: &SortContext<'_>) -> Ordering {
    b.points(ctx.rules).cmp(&a.points(ctx.rules))
}

fn compare_set_difference(a: &Standing, b: &Standing, _ctx: &SortContext<'_>) -> Ordering {
    b.set_difference().cmp(&a.set_difference())
}

fn compare_game_difference(a: &Standing, b: &Standing, _ctx: &SortContext<'_>) -> Ordering {
    b.game_difference().cmp(&a.game_difference())
}

// The pair that won the direct encounter ranks higher.
// A split series, or no encounter within the match set, decides nothing.
fn compare_head_to_head(a: &Standing, b: &Standing, ctx: &SortContext<'_>) -> Ordering {
    let mut a_wins = 0;
    let mut b_wins = 0;

    for game in ctx.matches {
        if !(game.involves(a.pair_id) && game.involves(b.pair_id)) { continue; }

        match game.winner() {
            Some(id) if id == a.pair_id => a_wins += 1,
            Some(id) if id == b.pair_id => b_wins += 1,
            _ => {}
        }
    }

    b_wins.cmp(&a_wins)
}

fn compare_sets_won(a: &Standing, b: &Standing, _ctx: &SortContext<'_>) -> Ordering {
    b.sets_won.cmp(&a.sets_won)
}

fn compare_games_won(a: &Standing, b: &Standing, _ctx: &SortContext<'_>) -> Ordering {
    b.games_won.cmp(&a.games_won)
}

// Get the available sort functions.
pub fn get_sort_functions() -> HashMap<RankCriteria, CmpFunc> {
    let mut functions: HashMap<RankCriteria, CmpFunc> = HashMap::new();
    functions.insert(RankCriteria::Points, compare_points);
    functions.insert(RankCriteria::SetDifference, compare_set_difference);
    functions.insert(RankCriteria::GameDifference, compare_game_difference);
    functions.insert(RankCriteria::HeadToHead, compare_head_to_head);
    functions.insert(RankCriteria::SetsWon, compare_sets_won);
    functions.insert(RankCriteria::GamesWon, compare_games_won);
    return functions;
}

// Compare two standings with a criteria cascade, stopping at the first difference.
pub fn compare_with(a: &Standing, b: &Standing, criteria: &[RankCriteria], ctx: &SortContext<'_>) -> Ordering {
    let sort_functions = get_sort_functions();

    let mut order = Ordering::Equal;
    for criterium in criteria.iter() {
        order = sort_functions[criterium](a, b, ctx);
        if order.is_ne() { break; }
    }

    return order;
}

// Sort the standings with the given criteria cascade. The sort is stable.
pub fn sort_standings(standings: &mut [Standing], criteria: &[RankCriteria], ctx: &SortContext<'_>) {
    let sort_functions = get_sort_functions();

    standings.sort_by(|a, b| {
        let mut order = Ordering::Equal;
        for criterium in criteria.iter() {
            order = sort_functions[criterium](a, b, ctx);
            if order.is_ne() { break; }
        }
        order
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::match_event::{score::{Score, SetScore}, Stage};

    fn completed(pair_a: PairId, pair_b: PairId, sets: Vec<(u16, u16)>) -> Match {
        let mut game = Match::build(Stage::Group, None, pair_a, pair_b);
        let score = Score::build(sets.into_iter().map(|(a, b)| SetScore::build(a, b)).collect());
        game.complete(score).unwrap();
        return game;
    }

    #[test]
    fn test_pairs_without_matches_get_zero_rows() {
        let ids: Vec<PairId> = (0..3).map(|_| Uuid::new_v4()).collect();
        let standings = calculate(&ids, &[], &ScoringRules::default());

        assert_eq!(standings.len(), 3);
        for standing in standings.iter() {
            assert_eq!(standing.matches_played(), 0);
            assert_eq!(standing.points(&ScoringRules::default()), 0);
            assert_eq!(standing.set_difference(), 0);
        }
    }

    #[test]
    fn test_wins_are_conserved() {
        let ids: Vec<PairId> = (0..4).map(|_| Uuid::new_v4()).collect();
        let mut matches = vec![
            completed(ids[0], ids[1], vec![(6, 2), (6, 3)]),
            completed(ids[2], ids[3], vec![(4, 6), (6, 4), (3, 6)]),
            completed(ids[0], ids[2], vec![(6, 0), (6, 0)]),
        ];
        // A pending match must not count.
        matches.push(Match::build(Stage::Group, None, ids[1], ids[3]));

        let standings = calculate(&ids, &matches, &ScoringRules::default());

        let total_wins: u32 = standings.iter().map(|s| s.wins).sum();
        assert_eq!(total_wins, 3);

        for standing in standings.iter() {
            assert_eq!(standing.matches_played(), standing.wins + standing.losses);
        }
    }

    #[test]
    fn test_set_and_game_accumulation() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let matches = vec![completed(a, b, vec![(6, 4), (3, 6), (7, 5)])];

        let standings = calculate(&[a, b], &matches, &ScoringRules::default());

        let row_a = standings.iter().find(|s| s.pair_id == a).unwrap();
        assert_eq!(row_a.wins, 1);
        assert_eq!(row_a.sets_won, 2);
        assert_eq!(row_a.sets_lost, 1);
        assert_eq!(row_a.games_won, 16);
        assert_eq!(row_a.games_lost, 15);
        assert_eq!(row_a.set_difference(), 1);
        assert_eq!(row_a.game_difference(), 1);
    }

    #[test]
    fn test_set_difference_breaks_point_ties() {
        // Both pairs on equal points; A holds the better set difference.
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let filler_a = Uuid::new_v4();
        let filler_b = Uuid::new_v4();

        let matches = vec![
            completed(a, filler_a, vec![(6, 0), (6, 0)]),
            completed(b, filler_b, vec![(6, 4), (4, 6), (6, 4)]),
        ];

        let standings = calculate(&[b, a], &matches, &ScoringRules::default());

        assert_eq!(standings[0].pair_id, a);
        assert_eq!(standings[1].pair_id, b);
    }

    #[test]
    fn test_head_to_head_breaks_full_stat_ties() {
        // A and B end with identical points, set and game totals against the
        // rest of the field, but A took the direct encounter.
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let filler_c = Uuid::new_v4();
        let filler_d = Uuid::new_v4();

        let matches = vec![
            completed(a, b, vec![(6, 4), (4, 6), (6, 4)]),
            completed(b, filler_c, vec![(6, 4), (4, 6), (6, 4)]),
            completed(filler_d, a, vec![(6, 4), (4, 6), (6, 4)]),
        ];

        let standings = calculate(&[b, a], &matches, &ScoringRules::default());

        let row_a = &standings[0];
        let row_b = &standings[1];
        assert_eq!(row_a.pair_id, a);
        assert_eq!(row_b.pair_id, b);

        // The tie really does survive every earlier criterium.
        assert_eq!(row_a.points(&ScoringRules::default()), row_b.points(&ScoringRules::default()));
        assert_eq!(row_a.set_difference(), row_b.set_difference());
        assert_eq!(row_a.game_difference(), row_b.game_difference());
        assert_eq!(row_a.sets_won, row_b.sets_won);
        assert_eq!(row_a.games_won, row_b.games_won);
    }

    #[test]
    fn test_split_series_skips_head_to_head() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let matches = vec![
            completed(a, b, vec![(6, 4), (6, 4)]),
            completed(b, a, vec![(6, 4), (6, 4)]),
        ];

        let ctx = SortContext { rules: &ScoringRules::default(), matches: &matches };
        let row_a = Standing::build(a);
        let row_b = Standing::build(b);

        assert_eq!(compare_with(&row_a, &row_b, &[RankCriteria::HeadToHead], &ctx), Ordering::Equal);
    }

    #[test]
    fn test_unbroken_ties_keep_their_prior_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let standings = calculate(&[b, a], &[], &ScoringRules::default());

        assert_eq!(standings[0].pair_id, b);
        assert_eq!(standings[1].pair_id, a);
    }

    #[test]
    fn test_points_follow_the_scoring_rules() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let matches = vec![completed(a, b, vec![(6, 2), (6, 2)])];

        let group_stage = calculate(&[a, b], &matches, &ScoringRules::default());
        assert_eq!(group_stage[0].points(&ScoringRules::default()), 2);

        let elimination = calculate(&[a, b], &matches, &ScoringRules::elimination());
        assert_eq!(elimination[0].points(&ScoringRules::elimination()), 3);
    }
}
