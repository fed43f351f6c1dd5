use crate::branchbound_utils::round_decimals;

/// Decimal precision used when a variable value becomes part of a
/// deduplication key. LP solvers answer the same subproblem with values that
/// differ at solver tolerance, so raw bit equality would mint false new
/// nodes; rounding at 6 decimals collapses those while staying far above the
/// solver's own accuracy.
pub const KEY_DECIMALS: u32 = 6;

/// An ordered mapping from variable name to a value in [0, 1], in the
/// model's variable order. Two assignments are equal iff their ordered
/// (name, value) pairs are equal, with exact value equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    entries: Vec<(String, f64)>,
}

impl Assignment {
    pub fn from_pairs(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff every value is exactly 0 or 1, which makes the owning node a
    /// leaf of the search.
    pub fn is_integral(&self) -> bool {
        self.entries.iter().all(|(_, v)| *v == 0.0 || *v == 1.0)
    }

    /// The order independent deduplication key of this assignment: name
    /// sorted pairs with values rounded at [`KEY_DECIMALS`] places.
    pub fn key(&self) -> NodeKey {
        let mut pairs = self
            .entries
            .iter()
            .map(|(n, v)| (n.clone(), quantize(*v)))
            .collect::<Vec<_>>();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        NodeKey::Assignment(pairs)
    }
}

/// Identity of a node in the visited set and the search tree. Every
/// infeasible node shares the single `Infeasible` key, matching the original
/// sentinel semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Infeasible,
    Assignment(Vec<(String, i64)>),
}

fn quantize(value: f64) -> i64 {
    let scale = 10.0f64.powi(KEY_DECIMALS as i32);
    (round_decimals(value, KEY_DECIMALS) * scale).round() as i64
}

#[cfg(test)]
mod tests {
    use crate::assignment::{Assignment, NodeKey};

    fn assignment(pairs: &[(&str, f64)]) -> Assignment {
        Assignment::from_pairs(
            pairs
                .iter()
                .map(|(n, v)| ((*n).to_string(), *v))
                .collect(),
        )
    }

    #[test]
    fn test_integrality() {
        assert!(assignment(&[("x1", 1.0), ("x2", 0.0)]).is_integral());
        assert!(!assignment(&[("x1", 1.0), ("x2", 0.5)]).is_integral());
        assert!(assignment(&[]).is_integral());
    }

    #[test]
    fn test_key_is_order_independent() {
        let a = assignment(&[("x1", 1.0), ("x2", 0.75)]);
        let b = assignment(&[("x2", 0.75), ("x1", 1.0)]);

        // the assignments differ as ordered values but share one key
        assert_ne!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_key_absorbs_solver_noise() {
        let a = assignment(&[("x1", 0.8333333331), ("x2", 1.0)]);
        let b = assignment(&[("x1", 0.8333333337), ("x2", 0.9999999998)]);

        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_key_separates_distinct_values() {
        let a = assignment(&[("x1", 0.75)]);
        let b = assignment(&[("x1", 0.25)]);

        assert_ne!(a.key(), b.key());
        assert_ne!(a.key(), NodeKey::Infeasible);
    }

    #[test]
    fn test_get() {
        let a = assignment(&[("x1", 0.75), ("x2", 0.0)]);
        assert_eq!(a.get("x1"), Some(0.75));
        assert_eq!(a.get("x3"), None);
    }
}
