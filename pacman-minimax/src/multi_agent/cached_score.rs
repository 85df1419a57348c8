use dashmap::DashMap;

use super::{Scorable, Score};

use std::hash::Hash;

#[derive(Debug, Clone)]
/// Cache the score of every game state we evaluate
///
/// Transpositions (the same state reached through different move orders) are common once the
/// ghosts get a turn, so this can save a lot of evaluation work. The cache only ever returns what
/// the wrapped scorer returned for an equal state, it never changes the result of a search.
pub struct CachedScore<'cache, ScorableType, GameType>
where
    GameType: Eq + Hash + Clone,
{
    scorable: ScorableType,
    cache: &'cache DashMap<GameType, Score>,
}

impl<'cache, ScorableType, GameType> CachedScore<'cache, ScorableType, GameType>
where
    ScorableType: Scorable<GameType>,
    GameType: Eq + Hash + Clone,
{
    /// Wrap `scorable`, storing results in `cache`
    ///
    /// The cache is borrowed so it can outlive a single search and be reused for the next turn.
    pub fn new(scorable: ScorableType, cache: &'cache DashMap<GameType, Score>) -> Self {
        Self { scorable, cache }
    }

    /// Number of distinct states scored so far
    pub fn cached_states(&self) -> usize {
        self.cache.len()
    }
}

impl<'cache, ScorableType, GameType> Scorable<GameType>
    for CachedScore<'cache, ScorableType, GameType>
where
    ScorableType: Scorable<GameType>,
    GameType: Eq + Hash + Clone,
{
    fn score(&self, game: &GameType) -> Score {
        if let Some(score) = self.cache.get(game) {
            return *score;
        }

        let score = self.scorable.score(game);
        self.cache.insert(game.clone(), score);
        score
    }
}
