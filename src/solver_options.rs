use crate::branch_strategy::BranchStrategySelection;
use crate::branch_subproblem::SubProblemSelection;
use crate::frontier::FrontierSelection;

/// How child subproblems relate to their ancestors.
pub enum BoundMode {
    /// Every child is re-derived from the full model: only the branch
    /// variable is fixed, all other variables relax back to [0, 1].
    Anchored,
    /// Children inherit every ancestor's fixing, so each node's feasible
    /// region is the intersection of all restrictions on its path, as in
    /// textbook branch and bound.
    Cumulative,
}

/// Options for a branch and bound run
pub struct SolverOptions {
    pub branch_strategy: BranchStrategySelection,
    pub sub_problem_solver: SubProblemSelection,
    pub frontier: FrontierSelection,
    pub bound_mode: BoundMode,
    /// When set, both children anchor on their own assignment instead of the
    /// left child inheriting the parent's anchor
    pub symmetric_anchors: bool,
    pub verbose: usize,
}

impl SolverOptions {
    pub fn new() -> Self {
        Self {
            branch_strategy: BranchStrategySelection::MostFractional,
            sub_problem_solver: SubProblemSelection::Clarabel,
            frontier: FrontierSelection::Fifo,
            bound_mode: BoundMode::Anchored,
            symmetric_anchors: false,
            verbose: 0,
        }
    }

    pub fn set_branch_strategy(&mut self, strategy: Option<String>) {
        if let Some(s) = strategy {
            match s.as_str() {
                "MostFractional" => self.branch_strategy = BranchStrategySelection::MostFractional,
                "FirstFractional" => {
                    self.branch_strategy = BranchStrategySelection::FirstFractional;
                }
                _ => {}
            }
        }
    }

    pub fn set_frontier(&mut self, frontier: Option<String>) {
        if let Some(s) = frontier {
            match s.as_str() {
                "Fifo" => self.frontier = FrontierSelection::Fifo,
                "BestFirst" => self.frontier = FrontierSelection::BestFirst,
                _ => {}
            }
        }
    }

    pub fn set_bound_mode(&mut self, mode: Option<String>) {
        if let Some(s) = mode {
            match s.as_str() {
                "Anchored" => self.bound_mode = BoundMode::Anchored,
                "Cumulative" => self.bound_mode = BoundMode::Cumulative,
                _ => {}
            }
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::new()
    }
}
