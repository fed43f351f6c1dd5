use std::fmt;

/// Errors raised while validating a [`crate::model::LinearModel`], always
/// before any subproblem solver is constructed or called.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A coefficient row (objective or constraint) does not match the
    /// variable count
    LengthMismatch {
        row: String,
        expected: usize,
        found: usize,
    },
    /// The rows, operators, and right hand sides do not agree in length
    ConstraintCountMismatch {
        rows: usize,
        operators: usize,
        rhs: usize,
    },
    /// An operator outside of "<=", ">=", "=="
    UnknownOperator(String),
    /// A right hand side that does not parse as an integer
    InvalidRhs(String),
    /// An objective direction outside of "MAXIMIZE" and "MINIMIZE"
    UnknownDirection(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "coefficient row '{row}' has {found} entries, expected {expected}"
            ),
            Self::ConstraintCountMismatch {
                rows,
                operators,
                rhs,
            } => write!(
                f,
                "constraint lists disagree in length: {rows} rows, {operators} operators, {rhs} right hand sides"
            ),
            Self::UnknownOperator(op) => write!(f, "unknown constraint operator '{op}'"),
            Self::InvalidRhs(value) => {
                write!(f, "right hand side '{value}' is not an integer")
            }
            Self::UnknownDirection(dir) => write!(f, "unknown objective direction '{dir}'"),
        }
    }
}

impl std::error::Error for ModelError {}

/// Fatal errors of a branch and bound run. Infeasible LP outcomes are not
/// errors, they are normal terminal node states.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The linear model failed validation
    Model(ModelError),
    /// A branch variable value in the anchor assignment is outside of [0, 1],
    /// which indicates an oracle or bookkeeping inconsistency
    InvalidAssignment { variable: String, value: f64 },
    /// The LP solver could not be set up or run
    OracleTransport(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(e) => write!(f, "model error: {e}"),
            Self::InvalidAssignment { variable, value } => {
                write!(f, "invalid value {value} for variable '{variable}'")
            }
            Self::OracleTransport(msg) => write!(f, "lp solver failure: {msg}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelError> for SolverError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}
