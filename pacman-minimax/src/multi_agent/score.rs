/// The numeric value the search propagates up the tree
///
/// Higher is better for agent `0`.
pub type Score = f64;

/// This trait is used to control something that can return a score from a game state
///
/// We use this trait to be able to layer in different scoring approaches, such as caching
pub trait Scorable<GameType> {
    /// Convert the given GameType into a [Score]
    fn score(&self, game: &GameType) -> Score;
}

impl<GameType, FnLike: Fn(&GameType) -> Score> Scorable<GameType> for FnLike {
    fn score(&self, game: &GameType) -> Score {
        (self)(game)
    }
}
