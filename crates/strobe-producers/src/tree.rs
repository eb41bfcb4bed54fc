//! Binary-search-tree mutation producer.

use crate::expect_tree;
use strobe_core::tree::{TreeNode, TreeSnapshot, INITIAL_SPAN, LEVEL_HEIGHT, ROOT_X, ROOT_Y};
use strobe_core::{ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Operation for the [`TreeProducer`], fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeOp {
    /// Insert a value by BST descent (`<` goes left, else right).
    Insert(i64),
    /// Search for a value; a hit ends in a found marker, a miss
    /// exhausts the trace silently.
    Search(i64),
}

/// Tree-mutation producer.
///
/// `Insert` into an empty tree emits a single `Create` at the root
/// layout position. Otherwise it emits `Select` at the root, then
/// alternating `Compare`/`Visit` while descending, and on reaching a
/// missing child a `Create` (layout offset halving per depth) followed
/// by a `Link` from parent to the new node.
///
/// `Search` emits `Select`, then `Compare`/`Visit` pairs, ending in a
/// found marker (the `Sorted` kind, repurposed) on a hit. A miss
/// leaves the trace exhausted with no terminal step.
#[derive(Clone, Copy, Debug)]
pub struct TreeProducer {
    op: TreeOp,
}

impl TreeProducer {
    /// A producer performing `op`.
    pub fn new(op: TreeOp) -> Self {
        Self { op }
    }
}

impl StepProducer for TreeProducer {
    fn name(&self) -> &str {
        "tree"
    }

    fn run(
        &self,
        snapshot: &mut Snapshot,
        recorder: &mut TraceRecorder,
    ) -> Result<(), ProduceError> {
        let tree = expect_tree(self.name(), snapshot)?;
        match self.op {
            TreeOp::Insert(value) => insert(tree, value, recorder),
            TreeOp::Search(value) => search(tree, value, recorder),
        }
        Ok(())
    }
}

fn insert(tree: &mut TreeSnapshot, value: i64, recorder: &mut TraceRecorder) {
    let new_id = tree.allocate_id();

    let root = match tree.root() {
        Some(root) => root,
        None => {
            recorder.record(
                Step::create_node_at(new_id, value, ROOT_X, ROOT_Y)
                    .describe(format!("Creating root node {value}")),
            );
            tree.insert(new_id, TreeNode::leaf(value, ROOT_X, ROOT_Y));
            return;
        }
    };

    let mut current = root;
    let mut span = INITIAL_SPAN;

    let root_value = tree.get(root).map(|n| n.value).unwrap_or_default();
    recorder.record(Step::select_node(root).describe(format!("Starting at root: {root_value}")));

    loop {
        let node = match tree.get(current) {
            Some(n) => n.clone(),
            None => return,
        };
        let next_span = span / 2.0;

        recorder.record(
            Step::compare_node(current)
                .describe(format!("Comparing {value} with {}", node.value)),
        );

        if value < node.value {
            match node.left {
                None => {
                    let x = node.x - next_span;
                    let y = node.y + LEVEL_HEIGHT;
                    recorder.record(Step::create_node_at(new_id, value, x, y).describe(
                        format!("{value} < {}, inserting left", node.value),
                    ));
                    recorder.record(Step::link(current, new_id).describe(format!(
                        "Linking {} to {value}",
                        node.value
                    )));
                    tree.insert(new_id, TreeNode::leaf(value, x, y));
                    if let Some(parent) = tree.get_mut(current) {
                        parent.left = Some(new_id);
                    }
                    return;
                }
                Some(left) => {
                    recorder.record(Step::visit_node(left).describe(format!(
                        "{value} < {}, moving left",
                        node.value
                    )));
                    current = left;
                    span = next_span;
                }
            }
        } else {
            match node.right {
                None => {
                    let x = node.x + next_span;
                    let y = node.y + LEVEL_HEIGHT;
                    recorder.record(Step::create_node_at(new_id, value, x, y).describe(
                        format!("{value} >= {}, inserting right", node.value),
                    ));
                    recorder.record(Step::link(current, new_id).describe(format!(
                        "Linking {} to {value}",
                        node.value
                    )));
                    tree.insert(new_id, TreeNode::leaf(value, x, y));
                    if let Some(parent) = tree.get_mut(current) {
                        parent.right = Some(new_id);
                    }
                    return;
                }
                Some(right) => {
                    recorder.record(Step::visit_node(right).describe(format!(
                        "{value} >= {}, moving right",
                        node.value
                    )));
                    current = right;
                    span = next_span;
                }
            }
        }
    }
}

fn search(tree: &TreeSnapshot, value: i64, recorder: &mut TraceRecorder) {
    let root = match tree.root() {
        Some(root) => root,
        None => return,
    };

    recorder.record(Step::select_node(root).describe(format!("Searching for {value}")));

    let mut current = root;
    loop {
        let node = match tree.get(current) {
            Some(n) => n,
            None => return,
        };

        recorder.record(
            Step::compare_node(current)
                .describe(format!("Comparing {value} with {}", node.value)),
        );

        if node.value == value {
            recorder.record(Step::found_node(current).describe(format!("Found {value}!")));
            return;
        }

        let child = if value < node.value {
            node.left
        } else {
            node.right
        };
        match child {
            Some(next) => {
                let direction = if value < node.value { "left" } else { "right" };
                recorder.record(Step::visit_node(next).describe(format!(
                    "{value} vs {}, going {direction}",
                    node.value
                )));
                current = next;
            }
            // Silent miss: the trace simply ends.
            None => return,
        }
    }
}
