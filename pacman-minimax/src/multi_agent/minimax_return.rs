use std::fmt::Debug;
use text_trees::StringTreeNode;

use super::{NodeKind, Score};
use crate::AgentIndex;

/// Why the search stopped expanding at a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafReason {
    /// We completed as many plies as we were asked to
    DepthLimit,
    /// The game is won or lost in this state
    Terminal,
    /// The agent to move has no legal actions
    NoLegalActions,
}

#[derive(Debug, Clone, PartialEq)]
/// This is returned from a run of the search
/// It contains all the information we generated about the game tree
pub enum MinMaxReturn<Action: Clone + Debug> {
    /// This is a non-leaf node in the game tree
    /// We have information about all the options we looked at as well as the chosen score
    Node {
        /// Whether this node maximized, minimized or averaged its children
        kind: NodeKind,
        /// Which agent was moving at this node
        agent_index: AgentIndex,
        /// A 'recursive' look at all the moves under us, in the order they were explored
        /// Pruned siblings do not appear here
        options: Vec<(Action, Self)>,
        /// The action that produced `score`
        ///
        /// For chance nodes this is the last explored action and carries no meaning
        best_action: Option<Action>,
        /// The chosen score
        score: Score,
        /// Whether alpha-beta stopped exploring this node early
        pruned: bool,
    },
    /// Represents a leaf node in the game tree
    /// This happens when we reach a terminal state, the depth limit, or an agent that can not
    /// move
    Leaf {
        #[allow(missing_docs)]
        score: Score,
        #[allow(missing_docs)]
        reason: LeafReason,
    },
}

impl<Action: Clone + Debug + PartialEq> MinMaxReturn<Action> {
    /// Returns the score for this node
    pub fn score(&self) -> Score {
        match self {
            MinMaxReturn::Node { score, .. } => *score,
            MinMaxReturn::Leaf { score, .. } => *score,
        }
    }

    /// Returns the action chosen at this node
    /// If we are a leaf node, this will return None
    pub fn best_action(&self) -> Option<&Action> {
        match self {
            MinMaxReturn::Node { best_action, .. } => best_action.as_ref(),
            MinMaxReturn::Leaf { .. } => None,
        }
    }

    /// Returns the subtree reached through the chosen action
    pub fn chosen_child(&self) -> Option<&Self> {
        match self {
            MinMaxReturn::Leaf { .. } => None,
            MinMaxReturn::Node {
                options,
                best_action,
                ..
            } => {
                let best_action = best_action.as_ref()?;
                options
                    .iter()
                    .find(|(action, _)| action == best_action)
                    .map(|(_, child)| child)
            }
        }
    }

    /// Returns all the moves in the 'route' through the game tree that the search took
    /// This is useful for debugging as it shows each of the moves we and our opponents made during
    /// the simulation
    pub fn chosen_route(&self) -> Vec<(AgentIndex, Action)> {
        let mut route = vec![];
        let mut current = self;

        while let MinMaxReturn::Node {
            agent_index,
            best_action: Some(best_action),
            ..
        } = current
        {
            route.push((*agent_index, best_action.clone()));

            match current.chosen_child() {
                Some(child) => current = child,
                None => break,
            }
        }

        route
    }

    /// Number of leaves that were evaluated to build this tree
    pub fn leaf_count(&self) -> usize {
        match self {
            MinMaxReturn::Leaf { .. } => 1,
            MinMaxReturn::Node { options, .. } => {
                options.iter().map(|(_, child)| child.leaf_count()).sum()
            }
        }
    }

    /// Number of interior nodes that were expanded to build this tree
    pub fn node_count(&self) -> usize {
        match self {
            MinMaxReturn::Leaf { .. } => 0,
            MinMaxReturn::Node { options, .. } => {
                1 + options
                    .iter()
                    .map(|(_, child)| child.node_count())
                    .sum::<usize>()
            }
        }
    }

    /// The longest number of moves between this node and any of its leaves
    pub fn max_moves_to_leaf(&self) -> usize {
        match self {
            MinMaxReturn::Leaf { .. } => 0,
            MinMaxReturn::Node { options, .. } => options
                .iter()
                .map(|(_, child)| 1 + child.max_moves_to_leaf())
                .max()
                .unwrap_or(0),
        }
    }

    /// This returns a visual representation of the game tree that the search generated
    /// It shows the chosen score, the moving agent and the move at each level
    pub fn to_text_tree(&self) -> Option<String> {
        let tree_node = self.to_text_tree_node("".to_owned())?;
        Some(format!("{}", tree_node))
    }

    fn to_text_tree_node(&self, label: String) -> Option<StringTreeNode> {
        match self {
            MinMaxReturn::Leaf { .. } => None,
            MinMaxReturn::Node {
                agent_index,
                options,
                score,
                kind,
                ..
            } => {
                let mut node = StringTreeNode::new(format!("{} {:?} {}", label, kind, score));
                for (m, result) in options {
                    let child_label = format!("{:?} agent {}", m, agent_index);
                    match result.to_text_tree_node(child_label.clone()) {
                        Some(next_node) => node.push_node(next_node),
                        None => node.push_node(StringTreeNode::new(format!(
                            "{} {}",
                            child_label,
                            result.score()
                        ))),
                    }
                }

                Some(node)
            }
        }
    }
}
