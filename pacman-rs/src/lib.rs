use itertools::Itertools;
use pacman_minimax::multi_agent::SearchMode;

pub use game::{Direction, GameState, Position, WireGame};

pub mod config;
pub mod evaluation;
pub mod game;
pub mod reflex_agent;
pub mod search_agent;
pub mod types;

use crate::{
    config::{AgentConfig, ConfigError},
    reflex_agent::ReflexAgentFactory,
    search_agent::SearchAgentFactory,
};

pub type BoxedAgent = Box<dyn PacmanAI + Send + Sync>;
pub type BoxedFactory = Box<dyn PacmanFactory + Send + Sync>;

pub trait PacmanAI {
    fn choose_action(&self) -> anyhow::Result<Direction>;
}

pub trait PacmanFactory {
    fn name(&self) -> String;
    fn from_game(&self, game: GameState) -> BoxedAgent;
}

/// Every agent we know how to build
///
/// The config is checked up front, so a bad evaluation function name fails here and not in the
/// middle of a game.
pub fn all_factories(config: &AgentConfig) -> Result<Vec<BoxedFactory>, ConfigError> {
    let config = config.resolve()?;

    Ok(vec![
        Box::new(ReflexAgentFactory),
        Box::new(SearchAgentFactory::new(SearchMode::Minimax, config)),
        Box::new(SearchAgentFactory::new(SearchMode::AlphaBeta, config)),
        Box::new(SearchAgentFactory::new(SearchMode::Expectimax, config)),
    ])
}

pub fn factory_by_name(name: &str, config: &AgentConfig) -> Result<BoxedFactory, ConfigError> {
    let factories = all_factories(config)?;
    let known = factories.iter().map(|factory| factory.name()).join(", ");

    factories
        .into_iter()
        .find(|factory| factory.name() == name)
        .ok_or_else(|| ConfigError::UnknownAgent {
            name: name.to_owned(),
            known,
        })
}
