use crate::branch_node::BBNode;
use crate::branchbound::BBSolver;
use crate::branchbound_utils::get_current_time;

/// Console output of the search driver.
///
/// It has varying levels of output, where 0 means nothing is displayed to
/// the screen, and each additional level includes everything previous
///
/// 0 - Nothing
/// 1 - Header and exit summary
/// 2 - A line for every produced node
///
pub struct SolverOutputLogger {
    pub output_level: usize,
}

impl SolverOutputLogger {
    pub const fn new(level: usize) -> Self {
        Self {
            output_level: level,
        }
    }

    pub fn output_header(&self, solver_instance: &BBSolver) {
        if self.output_level < 1 {
            return;
        }

        let version_number = env!("CARGO_PKG_VERSION");
        let num_variables = solver_instance.model.num_x();
        let num_constraints = solver_instance.model.num_constraints();

        println!("Ramify: A Branch and Bound Search Engine for 0/1 Linear Programs");
        println!("Version number {version_number}");
        println!("Problem size: {num_variables}");
        println!("Constraints: {num_constraints}");
        println!("------------------------------------------------------");
    }

    /// One line per produced node, labeled root / left child / right child
    pub fn node_report(&self, label: &str, node: &BBNode) {
        if self.output_level < 2 {
            return;
        }

        match node {
            BBNode::Solved {
                objective,
                assignment,
            } => {
                println!("{label} node");
                println!("Optimal Objective Value: {objective}");
                for (name, value) in assignment.iter() {
                    println!("{name}: {value}");
                }
            }
            BBNode::Infeasible => {
                println!("{label} node");
                println!("Optimal Objective Value: infeasible");
            }
        }
        println!("-------------------");
    }

    pub fn generate_exit_line(&self, solver_instance: &BBSolver) {
        if self.output_level < 1 {
            return;
        }

        let nodes_generated = solver_instance.nodes_generated;
        let nodes_expanded = solver_instance.nodes_expanded;
        let current_time = get_current_time();
        let time_passed = current_time - solver_instance.time_start;
        println!("------------------------------------------------------");
        println!("Branch and Bound Search Finished");
        println!("Nodes Generated: {nodes_generated}");
        println!("Nodes Expanded: {nodes_expanded}");
        println!("Time to Solve: {time_passed}");
        println!("------------------------------------------------------");
    }
}

#[cfg(test)]
mod tests {
    use crate::branchbound::BBSolver;
    use crate::branchboundlogger::SolverOutputLogger;
    use crate::solver_options::SolverOptions;
    use crate::tests::make_knapsack_model;

    #[test]
    fn test_logger_levels_do_not_panic() {
        let mut options = SolverOptions::new();
        options.verbose = 2;

        let mut solver = BBSolver::new(make_knapsack_model(), options);
        solver.solve().unwrap();

        let quiet = SolverOutputLogger::new(0);
        quiet.output_header(&solver);
        quiet.generate_exit_line(&solver);
    }
}
