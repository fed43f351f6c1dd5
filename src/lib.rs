//! ramify is a branch and bound search engine for 0/1 linear programs.
//!
//! The engine enumerates the branching tree of a validated model instead of
//! racing to a single optimum: LP relaxations bound each node, duplicate
//! assignments are suppressed, and the caller gets back either the distinct
//! feasible assignments visited or the full search tree with its production
//! edges.

pub mod assignment;
pub mod branch_node;
pub mod branch_strategy;
pub mod branch_subproblem;
pub mod branchbound;
pub mod branchbound_utils;
pub mod branchboundlogger;
pub mod error;
pub mod frontier;
pub mod model;
pub mod node_generator;
pub mod search_tree;
pub mod solver_options;
pub mod subproblemsolvers;

pub use crate::assignment::{Assignment, NodeKey};
pub use crate::branch_node::BBNode;
pub use crate::branchbound::BBSolver;
pub use crate::error::{ModelError, SolverError};
pub use crate::model::{ConstraintOp, Direction, LinearModel};
pub use crate::search_tree::SearchTree;
pub use crate::solver_options::SolverOptions;

#[cfg(test)]
pub mod tests {
    use crate::model::{Direction, LinearModel};
    use smolprng::{JsfLarge, PRNG};

    pub fn make_test_prng() -> PRNG<JsfLarge> {
        PRNG {
            generator: JsfLarge::default(),
        }
    }

    /// A loose knapsack whose box relaxation is already integral at (1, 1)
    pub fn make_knapsack_model() -> LinearModel {
        LinearModel::new(
            Direction::Maximize,
            vec![5.0, 4.0],
            vec![vec![6.0, 4.0], vec![1.0, 2.0]],
            &["<=", "<="],
            &["24", "6"],
            vec!["x1".to_string(), "x2".to_string()],
        )
        .unwrap()
    }

    /// A tight knapsack whose relaxation lands on (1, 3/4)
    pub fn make_fractional_model() -> LinearModel {
        LinearModel::new(
            Direction::Maximize,
            vec![5.0, 4.0],
            vec![vec![6.0, 4.0]],
            &["<="],
            &["9"],
            vec!["x1".to_string(), "x2".to_string()],
        )
        .unwrap()
    }

    /// A zero-capacity row that pins every variable to 0
    pub fn make_forced_zero_model() -> LinearModel {
        LinearModel::new(
            Direction::Maximize,
            vec![5.0, 4.0],
            vec![vec![6.0, 4.0]],
            &["<="],
            &["0"],
            vec!["x1".to_string(), "x2".to_string()],
        )
        .unwrap()
    }

    mod smoke {
        use super::make_test_prng;
        use crate::assignment::Assignment;
        use crate::branchbound::BBSolver;
        use crate::model::LinearModel;
        use crate::solver_options::SolverOptions;

        #[test]
        fn test_random_model_search_terminates() {
            let mut prng = make_test_prng();
            let model = LinearModel::make_random_model(4, 3, &mut prng);

            let mut solver = BBSolver::new(model, SolverOptions::new());
            let visited = solver.solve().unwrap();

            let mut keys = visited.iter().map(Assignment::key).collect::<Vec<_>>();
            let before = keys.len();
            keys.dedup();
            assert_eq!(keys.len(), before);
        }
    }
}
