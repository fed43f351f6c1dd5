use crate::assignment::Assignment;
use crate::branch_node::BBNode;
use crate::model::Direction;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

/// One queued, not yet expanded node together with the state its expansion
/// needs: the anchor assignment consulted when fixing the next branch
/// variable, and (in cumulative bound mode) the bounds accumulated along the
/// path from the root.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub node: BBNode,
    pub anchor: Assignment,
    pub bounds: HashMap<String, (f64, f64)>,
    pub seq: usize,
}

pub enum FrontierSelection {
    Fifo,
    BestFirst,
}

/// The frontier of the search. FIFO gives the default strict level order
/// traversal; best-first orders by the node objective bound, max-first when
/// maximizing and min-first when minimizing, with the insertion sequence
/// breaking ties so the traversal stays deterministic.
pub enum Frontier {
    Fifo(VecDeque<FrontierEntry>),
    BestFirst {
        heap: BinaryHeap<Prioritized>,
        direction: Direction,
    },
}

impl Frontier {
    pub fn new(selection: &FrontierSelection, direction: Direction) -> Self {
        match selection {
            FrontierSelection::Fifo => Self::Fifo(VecDeque::new()),
            FrontierSelection::BestFirst => Self::BestFirst {
                heap: BinaryHeap::new(),
                direction,
            },
        }
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        match self {
            Self::Fifo(queue) => queue.push_back(entry),
            Self::BestFirst { heap, direction } => {
                let objective = entry.node.objective().unwrap_or(f64::NEG_INFINITY);
                let priority = match direction {
                    Direction::Maximize => objective,
                    Direction::Minimize => -objective,
                };
                heap.push(Prioritized { priority, entry });
            }
        }
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::BestFirst { heap, .. } => heap.pop().map(|p| p.entry),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo(queue) => queue.len(),
            Self::BestFirst { heap, .. } => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Heap adapter giving a total order over (priority, insertion sequence).
#[derive(Debug)]
pub struct Prioritized {
    priority: f64,
    entry: FrontierEntry,
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        // higher priority wins; equal priorities pop in insertion order
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.entry.seq.cmp(&self.entry.seq))
    }
}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Prioritized {}
