use crate::error::SolverError;
use crate::model::LinearModel;
use ndarray::Array1;

pub use crate::subproblemsolvers::clarabel_lp::ClarabelLpSolver;

/// Type hint attached to a per-variable bound. The hint never changes the
/// feasible set, the bounds carry any fixing; it is preserved because the
/// upstream solver request format distinguishes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Continuous,
    Binary,
}

/// The bound and type specification of one variable in an LP request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarBound {
    pub lower: f64,
    pub upper: f64,
    pub kind: VarKind,
}

impl VarBound {
    /// The fully relaxed bound [0, 1]
    pub const fn free() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
            kind: VarKind::Continuous,
        }
    }

    /// A bound fixing the variable to a single value
    pub const fn fixed(value: f64, kind: VarKind) -> Self {
        Self {
            lower: value,
            upper: value,
            kind,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.lower == self.upper
    }
}

/// Outcome of one LP subproblem. Any non-optimal solver status maps to
/// `Infeasible`; only transport and setup faults become errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LpSolution {
    Optimal {
        objective: f64,
        values: Array1<f64>,
    },
    Infeasible,
}

/// The LP oracle seam of the search engine. The driver only ever needs an
/// optimal basic solution or an infeasibility signal for a bounded
/// relaxation of the model.
pub trait SubProblemSolver {
    fn solve_relaxation(
        &self,
        model: &LinearModel,
        bounds: &[VarBound],
    ) -> Result<LpSolution, SolverError>;
}

pub enum SubProblemSelection {
    Clarabel,
}

pub const fn get_sub_problem_solver(selection: &SubProblemSelection) -> ClarabelLpSolver {
    match selection {
        SubProblemSelection::Clarabel => ClarabelLpSolver::new(),
    }
}
