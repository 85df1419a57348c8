//! Small hand-built games used to pin down the behaviour of the search

use crate::{AdversarialGame, AgentIndex, IllegalAction};

/// An explicit game tree
///
/// Every variant carries the value the evaluation function reports for that state. For interior
/// nodes this plays the role of a heuristic that is only used when the depth limit cuts the
/// search off there.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Leaf(f64),
    Node(f64, Vec<Tree>),
    Won(f64, Vec<Tree>),
}

pub fn leaf(score: f64) -> Tree {
    Tree::Leaf(score)
}

pub fn node(children: Vec<Tree>) -> Tree {
    Tree::Node(0.0, children)
}

/// A node whose children are all leaves
pub fn leaves(scores: &[f64]) -> Tree {
    node(scores.iter().map(|s| leaf(*s)).collect())
}

#[derive(Debug, Clone)]
pub struct TreeGame {
    pub tree: Tree,
    pub num_agents: usize,
    /// When set every successor request is refused, even for listed actions
    pub refuse_successors: bool,
}

impl TreeGame {
    pub fn new(tree: Tree, num_agents: usize) -> Self {
        Self {
            tree,
            num_agents,
            refuse_successors: false,
        }
    }

    fn children(&self) -> &[Tree] {
        match &self.tree {
            Tree::Leaf(_) => &[],
            Tree::Node(_, children) | Tree::Won(_, children) => children.as_slice(),
        }
    }
}

pub fn tree_score(game: &TreeGame) -> f64 {
    match &game.tree {
        Tree::Leaf(score) | Tree::Node(score, _) | Tree::Won(score, _) => *score,
    }
}

impl AdversarialGame for TreeGame {
    type Action = usize;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent_index: AgentIndex) -> Vec<usize> {
        (0..self.children().len()).collect()
    }

    fn generate_successor(
        &self,
        agent_index: AgentIndex,
        action: &usize,
    ) -> Result<Self, IllegalAction> {
        if self.refuse_successors {
            return Err(IllegalAction::new(agent_index, action));
        }

        let child = self
            .children()
            .get(*action)
            .ok_or_else(|| IllegalAction::new(agent_index, action))?;

        Ok(Self {
            tree: child.clone(),
            num_agents: self.num_agents,
            refuse_successors: false,
        })
    }

    fn is_win(&self) -> bool {
        matches!(self.tree, Tree::Won(..))
    }

    fn is_lose(&self) -> bool {
        false
    }
}

/// A game that never ends and records who moved
///
/// Every agent always has `branching` moves. The turn log makes it easy to check how many agent
/// turns the search played before cutting off.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountingGame {
    pub num_agents: usize,
    pub branching: usize,
    pub turns: Vec<AgentIndex>,
}

impl CountingGame {
    pub fn new(num_agents: usize, branching: usize) -> Self {
        Self {
            num_agents,
            branching,
            turns: vec![],
        }
    }
}

pub fn turns_taken(game: &CountingGame) -> f64 {
    game.turns.len() as f64
}

impl AdversarialGame for CountingGame {
    type Action = usize;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent_index: AgentIndex) -> Vec<usize> {
        (0..self.branching).collect()
    }

    fn generate_successor(
        &self,
        agent_index: AgentIndex,
        action: &usize,
    ) -> Result<Self, IllegalAction> {
        if *action >= self.branching {
            return Err(IllegalAction::new(agent_index, action));
        }

        let mut next = self.clone();
        next.turns.push(agent_index);
        Ok(next)
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }
}
