use crate::assignment::NodeKey;
use std::collections::{HashMap, HashSet};

/// The recorded branch and bound tree: every produced node keyed by its
/// assignment, with its objective value as an attribute, plus the
/// parent-to-child edges created during traversal.
///
/// Edges are added whenever a child is produced, even when that child was
/// already discovered elsewhere, so a node can end up with more than one
/// incoming edge. That contradicts the name, and it is kept on purpose: the
/// structure mirrors what the traversal actually produced, and consumers can
/// tell first discovery (node insertion order) apart from re-discovery
/// (extra incoming edges).
#[derive(Debug, Default)]
pub struct SearchTree {
    order: Vec<NodeKey>,
    objectives: HashMap<NodeKey, Option<f64>>,
    edges: Vec<(NodeKey, NodeKey)>,
    edge_set: HashSet<(NodeKey, NodeKey)>,
    root: Option<NodeKey>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a node on its first discovery; later insertions of the same
    /// key keep the original attribute.
    pub fn add_node(&mut self, key: NodeKey, objective: Option<f64>) {
        if self.objectives.contains_key(&key) {
            return;
        }

        if self.root.is_none() {
            self.root = Some(key.clone());
        }
        self.order.push(key.clone());
        self.objectives.insert(key, objective);
    }

    /// Records a parent to child edge; duplicate parallel edges collapse, as
    /// in a simple directed graph.
    pub fn add_edge(&mut self, parent: NodeKey, child: NodeKey) {
        let edge = (parent, child);
        if self.edge_set.insert(edge.clone()) {
            self.edges.push(edge);
        }
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.objectives.contains_key(key)
    }

    /// The objective attribute of a node; the outer `Option` distinguishes
    /// an unknown key from a recorded infeasible node (`Some(None)`).
    pub fn objective(&self, key: &NodeKey) -> Option<Option<f64>> {
        self.objectives.get(key).copied()
    }

    pub fn root(&self) -> Option<&NodeKey> {
        self.root.as_ref()
    }

    /// Node keys in first-discovery order
    pub fn nodes(&self) -> &[NodeKey] {
        &self.order
    }

    pub fn edges(&self) -> &[(NodeKey, NodeKey)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn in_degree(&self, key: &NodeKey) -> usize {
        self.edges.iter().filter(|(_, child)| child == key).count()
    }

    pub fn out_degree(&self, key: &NodeKey) -> usize {
        self.edges
            .iter()
            .filter(|(parent, _)| parent == key)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use crate::assignment::NodeKey;
    use crate::search_tree::SearchTree;

    fn key(pairs: &[(&str, i64)]) -> NodeKey {
        NodeKey::Assignment(pairs.iter().map(|(n, v)| ((*n).to_string(), *v)).collect())
    }

    #[test]
    fn test_first_discovery_wins() {
        let mut tree = SearchTree::new();

        tree.add_node(key(&[("x1", 1_000_000)]), Some(9.0));
        tree.add_node(key(&[("x1", 1_000_000)]), Some(3.0));

        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.objective(&key(&[("x1", 1_000_000)])), Some(Some(9.0)));
    }

    #[test]
    fn test_root_is_first_node() {
        let mut tree = SearchTree::new();

        let root = key(&[("x1", 750_000)]);
        let child = key(&[("x1", 1_000_000)]);
        tree.add_node(root.clone(), Some(8.0));
        tree.add_node(child.clone(), Some(5.0));
        tree.add_edge(root.clone(), child.clone());

        assert_eq!(tree.root(), Some(&root));
        assert_eq!(tree.in_degree(&root), 0);
        assert_eq!(tree.in_degree(&child), 1);
        assert_eq!(tree.out_degree(&root), 1);
    }

    #[test]
    fn test_parallel_edges_collapse() {
        let mut tree = SearchTree::new();

        let a = key(&[("x1", 0)]);
        let b = key(&[("x1", 1_000_000)]);
        tree.add_node(a.clone(), Some(1.0));
        tree.add_node(b.clone(), Some(2.0));
        tree.add_edge(a.clone(), b.clone());
        tree.add_edge(a.clone(), b.clone());

        assert_eq!(tree.edge_count(), 1);
    }

    #[test]
    fn test_multiple_incoming_edges_allowed() {
        let mut tree = SearchTree::new();

        let a = key(&[("x1", 0)]);
        let b = key(&[("x1", 500_000)]);
        let c = key(&[("x1", 1_000_000)]);
        for k in [&a, &b, &c] {
            tree.add_node(k.clone(), None);
        }
        tree.add_edge(a.clone(), c.clone());
        tree.add_edge(b.clone(), c.clone());

        assert_eq!(tree.in_degree(&c), 2);
    }

    #[test]
    fn test_infeasible_attribute() {
        let mut tree = SearchTree::new();

        tree.add_node(NodeKey::Infeasible, None);

        assert_eq!(tree.objective(&NodeKey::Infeasible), Some(None));
        assert_eq!(tree.objective(&key(&[("x1", 1)])), None);
    }
}
