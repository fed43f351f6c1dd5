use crate::assignment::Assignment;
use crate::branch_node::{BBNode, OBJECTIVE_DECIMALS};
use crate::branch_subproblem::{LpSolution, SubProblemSolver, VarBound, VarKind};
use crate::branchbound_utils::round_decimals;
use crate::error::SolverError;
use crate::model::LinearModel;
use std::collections::HashMap;

/// Solves the fully relaxed LP of the model, every variable free in [0, 1].
///
/// Only the assignment is of interest here, it seeds the first branching
/// variable selection; the objective value is discarded. Returns `None` when
/// the relaxation itself is infeasible.
pub fn solve_relaxed(
    model: &LinearModel,
    oracle: &impl SubProblemSolver,
) -> Result<Option<Assignment>, SolverError> {
    let bounds = vec![VarBound::free(); model.num_x()];

    match oracle.solve_relaxation(model, &bounds)? {
        LpSolution::Optimal { values, .. } => Ok(Some(to_assignment(model, &values))),
        LpSolution::Infeasible => Ok(None),
    }
}

/// Generates the root node: every variable relaxed to [0, 1], with the
/// pre-selected branching variable additionally marked binary typed. The
/// mark does not change the feasible set, it reproduces the upstream request
/// shape for the root.
pub fn generate_root(
    model: &LinearModel,
    oracle: &impl SubProblemSolver,
    branch_var: Option<&str>,
) -> Result<BBNode, SolverError> {
    let bounds = model
        .variables
        .iter()
        .map(|name| {
            let mut bound = VarBound::free();
            if Some(name.as_str()) == branch_var {
                bound.kind = VarKind::Binary;
            }
            bound
        })
        .collect::<Vec<_>>();

    solve_node(model, oracle, &bounds)
}

/// Generates the two children of a node for the chosen branching variable.
///
/// The fixing of the branch variable is decided by its value in the anchor
/// assignment: a fractional or absent value sends the left child to 1 and
/// the right child to 0; an exact 0 or 1 mirrors accordingly, and anything
/// outside [0, 1] is an `InvalidAssignment` fault. Non-branch variables take
/// their inherited bound where one exists and are otherwise relaxed back to
/// [0, 1], so with an empty `inherited` map each child is re-derived from
/// the full model.
pub fn generate_children(
    model: &LinearModel,
    oracle: &impl SubProblemSolver,
    anchor: &Assignment,
    branch_var: &str,
    inherited: &HashMap<String, (f64, f64)>,
) -> Result<(BBNode, BBNode), SolverError> {
    let (left_fix, right_fix) = branch_bounds(anchor, branch_var)?;

    let left = solve_node(
        model,
        oracle,
        &child_bounds(model, branch_var, left_fix, inherited),
    )?;
    let right = solve_node(
        model,
        oracle,
        &child_bounds(model, branch_var, right_fix, inherited),
    )?;

    Ok((left, right))
}

/// The pair of branch variable fixings (left, right) implied by the anchor
/// value of the branching variable.
pub fn branch_bounds(
    anchor: &Assignment,
    branch_var: &str,
) -> Result<(VarBound, VarBound), SolverError> {
    let value = anchor.get(branch_var);

    match value {
        // fractional or absent: left fixes high, right fixes low
        None => Ok((
            VarBound::fixed(1.0, VarKind::Binary),
            VarBound::fixed(0.0, VarKind::Binary),
        )),
        Some(v) if 0.0 < v && v < 1.0 => Ok((
            VarBound::fixed(1.0, VarKind::Binary),
            VarBound::fixed(0.0, VarKind::Binary),
        )),
        // already at 1: the right child re-fixes low as a continuous variable
        Some(v) if v == 1.0 => Ok((
            VarBound::fixed(1.0, VarKind::Binary),
            VarBound::fixed(0.0, VarKind::Continuous),
        )),
        // already at 0: the sides swap
        Some(v) if v == 0.0 => Ok((
            VarBound::fixed(0.0, VarKind::Binary),
            VarBound::fixed(1.0, VarKind::Binary),
        )),
        Some(v) => Err(SolverError::InvalidAssignment {
            variable: branch_var.to_string(),
            value: v,
        }),
    }
}

fn child_bounds(
    model: &LinearModel,
    branch_var: &str,
    branch_fix: VarBound,
    inherited: &HashMap<String, (f64, f64)>,
) -> Vec<VarBound> {
    model
        .variables
        .iter()
        .map(|name| {
            if name == branch_var {
                branch_fix
            } else if let Some(&(lower, upper)) = inherited.get(name) {
                VarBound {
                    lower,
                    upper,
                    kind: VarKind::Binary,
                }
            } else {
                VarBound::free()
            }
        })
        .collect()
}

fn solve_node(
    model: &LinearModel,
    oracle: &impl SubProblemSolver,
    bounds: &[VarBound],
) -> Result<BBNode, SolverError> {
    match oracle.solve_relaxation(model, bounds)? {
        LpSolution::Optimal { objective, values } => Ok(BBNode::Solved {
            objective: round_decimals(objective, OBJECTIVE_DECIMALS),
            assignment: to_assignment(model, &values),
        }),
        LpSolution::Infeasible => Ok(BBNode::Infeasible),
    }
}

fn to_assignment(model: &LinearModel, values: &ndarray::Array1<f64>) -> Assignment {
    Assignment::from_pairs(
        model
            .variables
            .iter()
            .zip(values.iter())
            .map(|(name, &value)| (name.clone(), value))
            .collect(),
    )
}
