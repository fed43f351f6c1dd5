use crate::assignment::Assignment;

/// Deterministic rules for picking the next branching variable from a
/// fractional assignment.
pub enum BranchStrategy {
    MostFractional,
    FirstFractional,
}

pub enum BranchStrategySelection {
    MostFractional,
    FirstFractional,
}

impl BranchStrategy {
    /// Selects the branching variable, or `None` when the assignment is
    /// fully integral and the node is a leaf.
    pub fn select_branch_variable<'a>(&self, assignment: &'a Assignment) -> Option<&'a str> {
        match self {
            Self::MostFractional => most_fractional(assignment),
            Self::FirstFractional => first_fractional(assignment),
        }
    }

    pub const fn get_branch_strategy(selection: &BranchStrategySelection) -> Self {
        match selection {
            BranchStrategySelection::MostFractional => Self::MostFractional,
            BranchStrategySelection::FirstFractional => Self::FirstFractional,
        }
    }
}

/// Picks the fractional variable with the largest value, breaking ties by
/// first occurrence in the assignment's iteration order.
fn most_fractional(assignment: &Assignment) -> Option<&str> {
    let mut best: Option<&str> = None;
    let mut best_value = -1.0;

    for (name, value) in assignment.iter() {
        if 0.0 < value && value < 1.0 && value > best_value {
            best = Some(name);
            best_value = value;
        }
    }

    best
}

/// Picks the first fractional variable in the assignment's iteration order.
fn first_fractional(assignment: &Assignment) -> Option<&str> {
    assignment
        .iter()
        .find(|(_, value)| 0.0 < *value && *value < 1.0)
        .map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use crate::assignment::Assignment;
    use crate::branch_strategy::BranchStrategy;

    fn assignment(pairs: &[(&str, f64)]) -> Assignment {
        Assignment::from_pairs(
            pairs
                .iter()
                .map(|(n, v)| ((*n).to_string(), *v))
                .collect(),
        )
    }

    #[test]
    fn test_integral_assignment_has_no_branch_variable() {
        let a = assignment(&[("x1", 1.0), ("x2", 0.0), ("x3", 1.0)]);

        assert_eq!(
            BranchStrategy::MostFractional.select_branch_variable(&a),
            None
        );
        assert_eq!(
            BranchStrategy::FirstFractional.select_branch_variable(&a),
            None
        );
    }

    #[test]
    fn test_most_fractional_picks_largest() {
        let a = assignment(&[("x1", 0.3), ("x2", 1.0), ("x3", 0.9), ("x4", 0.5)]);

        assert_eq!(
            BranchStrategy::MostFractional.select_branch_variable(&a),
            Some("x3")
        );
    }

    #[test]
    fn test_most_fractional_breaks_ties_by_first_occurrence() {
        let a = assignment(&[("x1", 0.0), ("x2", 0.5), ("x3", 0.5)]);

        assert_eq!(
            BranchStrategy::MostFractional.select_branch_variable(&a),
            Some("x2")
        );
    }

    #[test]
    fn test_exact_bounds_are_not_fractional() {
        // values at exactly 0 or 1 must never be branched on
        let a = assignment(&[("x1", 0.0), ("x2", 1.0), ("x3", 0.0001)]);

        assert_eq!(
            BranchStrategy::MostFractional.select_branch_variable(&a),
            Some("x3")
        );
    }

    #[test]
    fn test_first_fractional_order() {
        let a = assignment(&[("x1", 1.0), ("x2", 0.2), ("x3", 0.9)]);

        assert_eq!(
            BranchStrategy::FirstFractional.select_branch_variable(&a),
            Some("x2")
        );
    }
}
