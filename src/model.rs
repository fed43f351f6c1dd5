use crate::error::ModelError;
use ndarray::Array1;
use smolprng::{Algorithm, PRNG};
use sprs::{CsMat, TriMat};

/// Objective direction of a linear model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        match text {
            "MAXIMIZE" => Ok(Self::Maximize),
            "MINIMIZE" => Ok(Self::Minimize),
            _ => Err(ModelError::UnknownDirection(text.to_string())),
        }
    }
}

/// Relational operator of a constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    Le,
    Ge,
    Eq,
}

impl ConstraintOp {
    pub fn parse(symbol: &str) -> Result<Self, ModelError> {
        match symbol {
            "<=" => Ok(Self::Le),
            ">=" => Ok(Self::Ge),
            "==" => Ok(Self::Eq),
            _ => Err(ModelError::UnknownOperator(symbol.to_string())),
        }
    }
}

/// An immutable 0/1 linear model: an objective over an ordered list of binary
/// decision variables, subject to linear constraint rows.
///
/// The model is validated on construction; a [`LinearModel`] value that exists
/// is well formed, so the search engine never re-checks it.
pub struct LinearModel {
    pub direction: Direction,
    pub objective: Array1<f64>,
    pub constraints: CsMat<f64>,
    pub operators: Vec<ConstraintOp>,
    pub rhs: Array1<f64>,
    pub variables: Vec<String>,
}

impl LinearModel {
    /// Builds a model from the raw pieces handed over by the parsing layer.
    ///
    /// Operators and right hand sides arrive as text, matching the upstream
    /// contract: operators must be one of `<=`, `>=`, `==` and every right
    /// hand side must parse as an integer.
    pub fn new(
        direction: Direction,
        objective: Vec<f64>,
        constraint_rows: Vec<Vec<f64>>,
        operators: &[&str],
        rhs: &[&str],
        variables: Vec<String>,
    ) -> Result<Self, ModelError> {
        let num_x = variables.len();

        if objective.len() != num_x {
            return Err(ModelError::LengthMismatch {
                row: "objective".to_string(),
                expected: num_x,
                found: objective.len(),
            });
        }

        if constraint_rows.len() != operators.len() || constraint_rows.len() != rhs.len() {
            return Err(ModelError::ConstraintCountMismatch {
                rows: constraint_rows.len(),
                operators: operators.len(),
                rhs: rhs.len(),
            });
        }

        for (index, row) in constraint_rows.iter().enumerate() {
            if row.len() != num_x {
                return Err(ModelError::LengthMismatch {
                    row: format!("constraint_{}", index + 1),
                    expected: num_x,
                    found: row.len(),
                });
            }
        }

        let operators = operators
            .iter()
            .map(|symbol| ConstraintOp::parse(symbol))
            .collect::<Result<Vec<_>, _>>()?;

        let rhs_values = rhs
            .iter()
            .map(|value| {
                value
                    .trim()
                    .parse::<i64>()
                    .map(|v| v as f64)
                    .map_err(|_| ModelError::InvalidRhs((*value).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // store the rows sparsely, dropping explicit zeros
        let mut rows = TriMat::new((constraint_rows.len(), num_x));
        for (i, row) in constraint_rows.iter().enumerate() {
            for (j, &coeff) in row.iter().enumerate() {
                if coeff != 0.0 {
                    rows.add_triplet(i, j, coeff);
                }
            }
        }

        Ok(Self {
            direction,
            objective: Array1::from_vec(objective),
            constraints: rows.to_csr(),
            operators,
            rhs: Array1::from_vec(rhs_values),
            variables,
        })
    }

    /// Number of decision variables of the model
    pub fn num_x(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraint rows of the model
    pub fn num_constraints(&self) -> usize {
        self.operators.len()
    }

    /// Evaluates the objective at a point
    pub fn eval(&self, x: &Array1<f64>) -> f64 {
        self.objective.dot(x)
    }

    /// Generates a random `<=` model for tests and benchmarks. Coefficients
    /// are small nonnegative integers and every right hand side is at least
    /// as large as one coefficient, so the all-zero point is always feasible.
    pub fn make_random_model<T: Algorithm>(
        num_x: usize,
        num_constraints: usize,
        prng: &mut PRNG<T>,
    ) -> Self {
        let variables = (0..num_x).map(|i| format!("x{}", i + 1)).collect::<Vec<_>>();

        let mut objective = Vec::with_capacity(num_x);
        for _ in 0..num_x {
            objective.push((prng.gen_u64() % 9 + 1) as f64);
        }

        let mut rows = Vec::with_capacity(num_constraints);
        let mut rhs = Vec::with_capacity(num_constraints);
        for _ in 0..num_constraints {
            let mut row = Vec::with_capacity(num_x);
            for _ in 0..num_x {
                row.push((prng.gen_u64() % 7) as f64);
            }
            rows.push(row);
            rhs.push(((prng.gen_u64() % 10) + 5).to_string());
        }

        let operators = vec!["<="; num_constraints];
        let rhs_refs = rhs.iter().map(String::as_str).collect::<Vec<_>>();

        // the inputs are well formed by construction
        Self::new(
            Direction::Maximize,
            objective,
            rows,
            &operators,
            &rhs_refs,
            variables,
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ModelError;
    use crate::model::{ConstraintOp, Direction, LinearModel};
    use crate::tests::make_test_prng;
    use ndarray::Array1;

    #[test]
    fn test_valid_model() {
        let model = LinearModel::new(
            Direction::Maximize,
            vec![5.0, 4.0],
            vec![vec![6.0, 4.0], vec![1.0, 2.0]],
            &["<=", "<="],
            &["24", "6"],
            vec!["x1".to_string(), "x2".to_string()],
        )
        .unwrap();

        assert_eq!(model.num_x(), 2);
        assert_eq!(model.num_constraints(), 2);
        assert_eq!(model.operators, vec![ConstraintOp::Le, ConstraintOp::Le]);
        assert_eq!(model.rhs, Array1::from_vec(vec![24.0, 6.0]));
        assert_eq!(model.eval(&Array1::from_vec(vec![1.0, 1.0])), 9.0);
    }

    #[test]
    fn test_row_length_mismatch() {
        let result = LinearModel::new(
            Direction::Maximize,
            vec![5.0, 4.0],
            vec![vec![6.0, 4.0, 1.0]],
            &["<="],
            &["24"],
            vec!["x1".to_string(), "x2".to_string()],
        );

        assert_eq!(
            result.err(),
            Some(ModelError::LengthMismatch {
                row: "constraint_1".to_string(),
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn test_objective_length_mismatch() {
        let result = LinearModel::new(
            Direction::Maximize,
            vec![5.0],
            vec![vec![6.0, 4.0]],
            &["<="],
            &["24"],
            vec!["x1".to_string(), "x2".to_string()],
        );

        assert!(matches!(result, Err(ModelError::LengthMismatch { .. })));
    }

    #[test]
    fn test_unknown_operator() {
        let result = LinearModel::new(
            Direction::Maximize,
            vec![5.0, 4.0],
            vec![vec![6.0, 4.0]],
            &["<"],
            &["24"],
            vec!["x1".to_string(), "x2".to_string()],
        );

        assert_eq!(
            result.err(),
            Some(ModelError::UnknownOperator("<".to_string()))
        );
    }

    #[test]
    fn test_non_integer_rhs() {
        let result = LinearModel::new(
            Direction::Maximize,
            vec![5.0, 4.0],
            vec![vec![6.0, 4.0]],
            &["<="],
            &["24.5"],
            vec!["x1".to_string(), "x2".to_string()],
        );

        assert_eq!(
            result.err(),
            Some(ModelError::InvalidRhs("24.5".to_string()))
        );
    }

    #[test]
    fn test_constraint_count_mismatch() {
        let result = LinearModel::new(
            Direction::Maximize,
            vec![5.0, 4.0],
            vec![vec![6.0, 4.0]],
            &["<=", ">="],
            &["24"],
            vec!["x1".to_string(), "x2".to_string()],
        );

        assert!(matches!(
            result,
            Err(ModelError::ConstraintCountMismatch { .. })
        ));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("MAXIMIZE"), Ok(Direction::Maximize));
        assert_eq!(Direction::parse("MINIMIZE"), Ok(Direction::Minimize));
        assert!(Direction::parse("maximize").is_err());
    }

    #[test]
    fn test_make_random_model() {
        let mut prng = make_test_prng();
        let model = LinearModel::make_random_model(6, 3, &mut prng);

        assert_eq!(model.num_x(), 6);
        assert_eq!(model.num_constraints(), 3);
        // the all-zero point is feasible by construction
        for (i, &b) in model.rhs.iter().enumerate() {
            assert_eq!(model.operators[i], ConstraintOp::Le);
            assert!(b >= 0.0);
        }
    }
}
