use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::AgentIndex;

/// How the adversaries are modelled while searching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// Every adversary picks the move that is worst for agent `0`
    #[default]
    Minimax,
    /// Same values as [SearchMode::Minimax], but branches that can not change the result are
    /// pruned
    AlphaBeta,
    /// Every adversary picks uniformly at random from its legal moves
    Expectimax,
}

impl SearchMode {
    /// The kind of node `agent_index` produces under this mode
    pub fn node_kind(&self, agent_index: AgentIndex) -> NodeKind {
        match (agent_index, self) {
            (0, _) => NodeKind::Max,
            (_, SearchMode::Expectimax) => NodeKind::Chance,
            (_, SearchMode::Minimax | SearchMode::AlphaBeta) => NodeKind::Min,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Minimax => "minimax",
            SearchMode::AlphaBeta => "alphabeta",
            SearchMode::Expectimax => "expectimax",
        };

        write!(f, "{}", name)
    }
}

/// Returned when parsing a [SearchMode] from an unknown name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search mode `{0}`, expected one of minimax, alphabeta or expectimax")]
pub struct UnknownSearchMode(pub String);

impl FromStr for SearchMode {
    type Err = UnknownSearchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchMode::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(SearchMode::AlphaBeta),
            "expectimax" => Ok(SearchMode::Expectimax),
            _ => Err(UnknownSearchMode(s.to_owned())),
        }
    }
}

/// The rule used to combine the children of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Take the highest child, agent `0` is moving
    Max,
    /// Take the lowest child, an adversary is moving
    Min,
    /// Take the mean of the children, a chance agent is moving
    Chance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Optional properties that can be defined for a [super::MinimaxAgent]
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use pacman_minimax::multi_agent::{SearchMode, SearchOptions};
///
/// let defaults: SearchOptions = Default::default();
///
/// assert_eq!(defaults.depth, 2);
/// assert_eq!(defaults.mode, SearchMode::Minimax);
/// ```
pub struct SearchOptions {
    /// How many full plies to look ahead. One ply is a move by every agent.
    ///
    /// Defaults to 2
    pub depth: usize,
    /// How the adversaries are modelled
    pub mode: SearchMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: 2,
            mode: SearchMode::Minimax,
        }
    }
}
