use crate::assignment::{Assignment, NodeKey};
use crate::branch_node::BBNode;
use crate::branch_strategy::BranchStrategy;
use crate::branch_subproblem::{get_sub_problem_solver, ClarabelLpSolver};
use crate::branchbound_utils::get_current_time;
use crate::branchboundlogger::SolverOutputLogger;
use crate::error::SolverError;
use crate::frontier::{Frontier, FrontierEntry};
use crate::model::LinearModel;
use crate::node_generator;
use crate::search_tree::SearchTree;
use crate::solver_options::{BoundMode, SolverOptions};
use std::collections::{HashMap, HashSet};

/// The branch and bound search driver.
///
/// Owns the frontier and the visited set for the duration of one run; a run
/// is a plain breadth-first (or best-first, if selected) enumeration of the
/// branching tree, bounded by LP feasibility and duplicate suppression only.
/// There is no incumbent pruning: every admitted node is expanded.
pub struct BBSolver {
    pub model: LinearModel,
    pub subproblem_solver: ClarabelLpSolver,
    pub branch_strategy: BranchStrategy,
    pub options: SolverOptions,
    pub nodes_generated: usize,
    pub nodes_expanded: usize,
    pub time_start: f64,
    pub solver_logger: SolverOutputLogger,
    frontier: Frontier,
    visited: HashSet<NodeKey>,
    seq: usize,
}

impl BBSolver {
    /// Creates a new search driver for a validated model
    pub fn new(model: LinearModel, options: SolverOptions) -> Self {
        let subproblem_solver = get_sub_problem_solver(&options.sub_problem_solver);
        let branch_strategy = BranchStrategy::get_branch_strategy(&options.branch_strategy);
        let frontier = Frontier::new(&options.frontier, model.direction);
        let output_level = options.verbose;

        Self {
            model,
            subproblem_solver,
            branch_strategy,
            options,
            nodes_generated: 0,
            nodes_expanded: 0,
            time_start: get_current_time(),
            solver_logger: SolverOutputLogger::new(output_level),
            frontier,
            visited: HashSet::new(),
            seq: 0,
        }
    }

    /// Runs the search and returns the distinct feasible assignments visited,
    /// in first-discovery order.
    pub fn solve(&mut self) -> Result<Vec<Assignment>, SolverError> {
        self.search(None)
    }

    /// Runs the search and returns the recorded search tree
    pub fn build_tree(&mut self) -> Result<SearchTree, SolverError> {
        let mut tree = SearchTree::new();
        self.search(Some(&mut tree))?;
        Ok(tree)
    }

    /// The traversal shared by both modes: flat when `tree` is `None`,
    /// recording when it is present.
    fn search(
        &mut self,
        mut tree: Option<&mut SearchTree>,
    ) -> Result<Vec<Assignment>, SolverError> {
        self.reset();
        self.solver_logger.output_header(self);

        // the pre-root relaxation only exists to seed the first branch
        // variable selection, its objective value is discarded
        let relaxation = node_generator::solve_relaxed(&self.model, &self.subproblem_solver)?;
        let branch_var = relaxation
            .as_ref()
            .and_then(|a| self.branch_strategy.select_branch_variable(a))
            .map(str::to_string);

        let root =
            node_generator::generate_root(&self.model, &self.subproblem_solver, branch_var.as_deref())?;
        self.nodes_generated += 1;
        self.solver_logger.node_report("root", &root);

        let root_key = root.key();
        self.visited.insert(root_key.clone());
        if let Some(t) = tree.as_deref_mut() {
            t.add_node(root_key.clone(), root.objective());
        }

        let mut discovered = Vec::new();

        let root_assignment = match root.assignment() {
            Some(a) => a.clone(),
            None => {
                // an infeasible root is recorded but there is nothing to expand
                self.solver_logger.generate_exit_line(self);
                return Ok(discovered);
            }
        };

        discovered.push(root_assignment.clone());
        self.push_entry(root, root_assignment, HashMap::new());

        while let Some(entry) = self.frontier.pop() {
            self.nodes_expanded += 1;

            let Some(assignment) = entry.node.assignment() else {
                continue;
            };

            // the branch variable comes from the node's own assignment;
            // `None` marks an integral leaf
            let Some(branch_var) = self.branch_strategy.select_branch_variable(assignment) else {
                continue;
            };

            let (left, right) = node_generator::generate_children(
                &self.model,
                &self.subproblem_solver,
                &entry.anchor,
                branch_var,
                &entry.bounds,
            )?;
            self.nodes_generated += 2;
            self.solver_logger.node_report("left child", &left);
            self.solver_logger.node_report("right child", &right);

            let (left_bounds, right_bounds) = match self.options.bound_mode {
                BoundMode::Anchored => (HashMap::new(), HashMap::new()),
                BoundMode::Cumulative => {
                    let (left_fix, right_fix) =
                        node_generator::branch_bounds(&entry.anchor, branch_var)?;
                    let mut left_bounds = entry.bounds.clone();
                    left_bounds.insert(branch_var.to_string(), (left_fix.lower, left_fix.upper));
                    let mut right_bounds = entry.bounds.clone();
                    right_bounds.insert(branch_var.to_string(), (right_fix.lower, right_fix.upper));
                    (left_bounds, right_bounds)
                }
            };

            let (left_anchor, right_anchor) =
                child_anchors(self.options.symmetric_anchors, &entry.anchor, &left, &right);

            let parent_key = entry.node.key();
            self.admit(
                left,
                left_anchor,
                left_bounds,
                &parent_key,
                tree.as_deref_mut(),
                &mut discovered,
            );
            self.admit(
                right,
                right_anchor,
                right_bounds,
                &parent_key,
                tree.as_deref_mut(),
                &mut discovered,
            );
        }

        self.solver_logger.generate_exit_line(self);

        Ok(discovered)
    }

    /// Admission of a produced child: the tree records every production,
    /// the frontier only takes feasible first discoveries.
    fn admit(
        &mut self,
        child: BBNode,
        anchor: Assignment,
        bounds: HashMap<String, (f64, f64)>,
        parent_key: &NodeKey,
        tree: Option<&mut SearchTree>,
        discovered: &mut Vec<Assignment>,
    ) {
        let key = child.key();

        if let Some(t) = tree {
            t.add_node(key.clone(), child.objective());
            t.add_edge(parent_key.clone(), key.clone());
        }

        // strict deduplication on the rounded assignment key
        if !self.visited.insert(key) {
            return;
        }

        if let Some(assignment) = child.assignment() {
            discovered.push(assignment.clone());
            self.push_entry(child, anchor, bounds);
        }
        // infeasible children stay recorded in the visited set but are
        // terminal and never queued
    }

    fn push_entry(
        &mut self,
        node: BBNode,
        anchor: Assignment,
        bounds: HashMap<String, (f64, f64)>,
    ) {
        let seq = self.seq;
        self.seq += 1;
        self.frontier.push(FrontierEntry {
            node,
            anchor,
            bounds,
            seq,
        });
    }

    fn reset(&mut self) {
        self.frontier = Frontier::new(&self.options.frontier, self.model.direction);
        self.visited = HashSet::new();
        self.nodes_generated = 0;
        self.nodes_expanded = 0;
        self.seq = 0;
        self.time_start = get_current_time();
    }
}

/// The anchors threaded to the two children of an expanded node. In the
/// default asymmetric policy the left child inherits the parent entry's
/// anchor while the right child anchors on its own assignment; the symmetric
/// policy anchors both children on their own assignment. An infeasible child
/// is never queued, so its anchor falls back to the parent's.
pub fn child_anchors(
    symmetric: bool,
    parent_anchor: &Assignment,
    left: &BBNode,
    right: &BBNode,
) -> (Assignment, Assignment) {
    let left_anchor = if symmetric {
        left.assignment()
            .cloned()
            .unwrap_or_else(|| parent_anchor.clone())
    } else {
        parent_anchor.clone()
    };

    let right_anchor = right
        .assignment()
        .cloned()
        .unwrap_or_else(|| parent_anchor.clone());

    (left_anchor, right_anchor)
}
