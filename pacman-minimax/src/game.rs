//! The contract between the search and the game it is searching
//!
//! The search never looks inside a game state. It only asks for the number of agents, the legal
//! actions of the agent to move, the successor after one of those actions and whether the state
//! is already won or lost.

use std::fmt::Debug;

use thiserror::Error;

/// Index of an agent in the turn order
///
/// Agent `0` is always the maximizing agent. Every other index is an adversary, which is either
/// minimizing or a chance agent depending on the search mode.
pub type AgentIndex = usize;

/// Returned by [AdversarialGame::generate_successor] when asked to apply an action that is not in
/// the current legal set of that agent
///
/// This is always a bug in the caller, so the search surfaces it instead of skipping the branch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("agent {agent_index} cannot play {action}")]
pub struct IllegalAction {
    /// The agent that was asked to move
    pub agent_index: AgentIndex,
    /// The `Debug` rendering of the rejected action
    pub action: String,
}

impl IllegalAction {
    /// Build the error for the given agent and action
    pub fn new<A: Debug>(agent_index: AgentIndex, action: &A) -> Self {
        Self {
            agent_index,
            action: format!("{:?}", action),
        }
    }
}

/// A game state that can be searched
///
/// Implementations must treat `self` as an immutable snapshot. Every transition returns a new
/// state, the search relies on siblings never observing each others moves.
pub trait AdversarialGame: Sized {
    /// The move token handed back by [AdversarialGame::legal_actions]
    type Action: Clone + Debug + PartialEq;

    /// Total number of agents taking turns, always at least one
    fn num_agents(&self) -> usize;

    /// The actions `agent_index` may take from this state, in a stable order
    ///
    /// An empty list is valid and means the agent has nothing to do here.
    fn legal_actions(&self, agent_index: AgentIndex) -> Vec<Self::Action>;

    /// The state after `agent_index` plays `action`
    fn generate_successor(
        &self,
        agent_index: AgentIndex,
        action: &Self::Action,
    ) -> Result<Self, IllegalAction>;

    /// Has the maximizing agent won in this state
    fn is_win(&self) -> bool;

    /// Has the maximizing agent lost in this state
    fn is_lose(&self) -> bool;

    /// Is this state the end of the game
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}
