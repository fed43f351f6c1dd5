use crate::branch_subproblem::{LpSolution, SubProblemSolver, VarBound};
use crate::error::SolverError;
use crate::model::{ConstraintOp, Direction, LinearModel};
use clarabel::algebra::CscMatrix;
use clarabel::solver::{
    DefaultSettings, DefaultSolver, IPSolver, NonnegativeConeT, SolverStatus, ZeroConeT,
};
use ndarray::Array1;
use sprs::{CsMat, TriMat};

/// Interior point answers land within solver tolerance of an active bound.
/// Values this close to 0 or 1 are snapped onto the bound so that the exact
/// 0/1 comparisons of the search engine hold.
const UNIT_SNAP_EPSILON: f64 = 1E-6;

fn snap_unit(value: f64) -> f64 {
    if value.abs() <= UNIT_SNAP_EPSILON {
        0.0
    } else if (value - 1.0).abs() <= UNIT_SNAP_EPSILON {
        1.0
    } else {
        value
    }
}

/// LP oracle backed by the Clarabel interior point solver.
///
/// Each request is assembled as `Ax + s = b` with a zero cone block for the
/// equality rows (`==` constraints and fixed variables) followed by a
/// nonnegative cone block for the inequality rows and the box bounds of the
/// remaining variables. The quadratic term is zero, so Clarabel solves a
/// plain LP.
#[derive(Clone)]
pub struct ClarabelLpSolver;

impl ClarabelLpSolver {
    pub const fn new() -> Self {
        Self
    }

    /// Converts a sprs matrix into the Clarabel storage format
    pub fn make_cb_form(p0: &CsMat<f64>) -> CscMatrix {
        let (t, y, u) = p0.to_csc().into_raw_storage();
        CscMatrix::new(p0.rows(), p0.cols(), t, y, u)
    }
}

impl Default for ClarabelLpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SubProblemSolver for ClarabelLpSolver {
    fn solve_relaxation(
        &self,
        model: &LinearModel,
        bounds: &[VarBound],
    ) -> Result<LpSolution, SolverError> {
        let num_x = model.num_x();

        // count the rows of each cone block up front
        let num_eq = model
            .operators
            .iter()
            .filter(|op| **op == ConstraintOp::Eq)
            .count();
        let num_fixed = bounds.iter().filter(|b| b.is_fixed()).count();
        let num_ineq = model.num_constraints() - num_eq;
        let num_boxed = num_x - num_fixed;

        let zero_rows = num_eq + num_fixed;
        let nonneg_rows = num_ineq + 2 * num_boxed;
        let total_rows = zero_rows + nonneg_rows;

        let mut a = TriMat::new((total_rows, num_x));
        let mut b = Array1::<f64>::zeros(total_rows);
        let mut offset = 0;

        // zero cone: equality constraint rows
        for (i, row) in model.constraints.outer_iterator().enumerate() {
            if model.operators[i] == ConstraintOp::Eq {
                for (j, &coeff) in row.iter() {
                    a.add_triplet(offset, j, coeff);
                }
                b[offset] = model.rhs[i];
                offset += 1;
            }
        }

        // zero cone: fixed variables
        for (j, bound) in bounds.iter().enumerate() {
            if bound.is_fixed() {
                a.add_triplet(offset, j, 1.0);
                b[offset] = bound.lower;
                offset += 1;
            }
        }

        // nonnegative cone: inequality constraint rows, with `>=` negated
        for (i, row) in model.constraints.outer_iterator().enumerate() {
            let sign = match model.operators[i] {
                ConstraintOp::Le => 1.0,
                ConstraintOp::Ge => -1.0,
                ConstraintOp::Eq => continue,
            };

            for (j, &coeff) in row.iter() {
                a.add_triplet(offset, j, sign * coeff);
            }
            b[offset] = sign * model.rhs[i];
            offset += 1;
        }

        // nonnegative cone: box bounds of the un-fixed variables
        for (j, bound) in bounds.iter().enumerate() {
            if !bound.is_fixed() {
                a.add_triplet(offset, j, 1.0);
                b[offset] = bound.upper;
                a.add_triplet(offset + 1, j, -1.0);
                b[offset + 1] = -bound.lower;
                offset += 2;
            }
        }

        let a_clara = Self::make_cb_form(&a.to_csc());
        let p = CscMatrix::zeros((num_x, num_x));

        // Clarabel minimizes, so a maximization model enters sign flipped
        let sign = match model.direction {
            Direction::Maximize => -1.0,
            Direction::Minimize => 1.0,
        };
        let q = model.objective.iter().map(|&c| sign * c).collect::<Vec<_>>();

        let cones = [ZeroConeT(zero_rows), NonnegativeConeT(nonneg_rows)];

        let settings = DefaultSettings {
            verbose: false,
            ..Default::default()
        };

        let mut solver = DefaultSolver::new(
            &p,
            &q,
            &a_clara,
            b.as_slice()
                .ok_or_else(|| SolverError::OracleTransport("non-contiguous rhs".to_string()))?,
            &cones,
            settings,
        );

        solver.solve();

        match solver.solution.status {
            SolverStatus::Solved => Ok(LpSolution::Optimal {
                objective: sign * solver.solution.obj_val,
                values: solver.solution.x.iter().map(|&v| snap_unit(v)).collect(),
            }),
            _ => Ok(LpSolution::Infeasible),
        }
    }
}
