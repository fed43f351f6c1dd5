use crate::assignment::{Assignment, NodeKey};

/// Decimal precision of the objective value carried by a node.
pub const OBJECTIVE_DECIMALS: u32 = 2;

/// A node of the branch and bound tree: the outcome of one LP subproblem.
#[derive(Debug, Clone, PartialEq)]
pub enum BBNode {
    /// The oracle reported an optimal basic solution
    Solved {
        objective: f64,
        assignment: Assignment,
    },
    /// The oracle reported the subproblem infeasible, a normal terminal
    /// state that is recorded but never expanded
    Infeasible,
}

impl BBNode {
    pub fn objective(&self) -> Option<f64> {
        match self {
            Self::Solved { objective, .. } => Some(*objective),
            Self::Infeasible => None,
        }
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Solved { assignment, .. } => Some(assignment),
            Self::Infeasible => None,
        }
    }

    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible)
    }

    /// True iff the node's assignment is fully 0/1, an infeasible node is
    /// never integral
    pub fn is_integral(&self) -> bool {
        self.assignment().is_some_and(Assignment::is_integral)
    }

    pub fn key(&self) -> NodeKey {
        match self {
            Self::Solved { assignment, .. } => assignment.key(),
            Self::Infeasible => NodeKey::Infeasible,
        }
    }
}
