//! Single-step application: the pure `(snapshot, step) -> snapshot'`
//! transition the replay engine is built on.

use strobe_core::tree::{TreeNode, ROOT_X, ROOT_Y};
use strobe_core::{ChainSnapshot, GridSnapshot, Snapshot, Step, StepKind, TreeSnapshot};

/// Apply one step to a working snapshot.
///
/// Total by design: observational step kinds (`Compare`, `Pivot`,
/// `Explore`, `Select`, and `Sorted`), steps addressing unknown ids or
/// out-of-range positions, and steps whose kind has no meaning in the
/// snapshot's domain all degrade to no-ops. This protects navigation
/// from producer bugs at the cost of silently masking a malformed
/// trace.
///
/// Tree `Link` steps carry no direction: left-vs-right is inferred by
/// re-comparing the target's value against the source's (`<` goes
/// left, else right), the same rule the tree producer descends by.
/// A producer with a different ordering rule would desynchronize here.
pub fn apply_step(snapshot: &mut Snapshot, step: &Step) {
    match snapshot {
        Snapshot::Array(arr) => match step.kind {
            StepKind::Swap if step.positions.len() >= 2 => {
                arr.swap(step.positions[0] as usize, step.positions[1] as usize);
            }
            StepKind::Write => {
                if let (Some(&pos), Some(value)) = (step.positions.first(), step.write_value) {
                    arr.set(pos as usize, value);
                }
            }
            _ => {}
        },
        Snapshot::Grid(grid) => apply_grid(grid, step),
        Snapshot::Chain(chain) => apply_chain(chain, step),
        Snapshot::Tree(tree) => apply_tree(tree, step),
    }
}

fn apply_grid(grid: &mut GridSnapshot, step: &Step) {
    if step.positions.len() < 2 {
        return;
    }
    let (row, col) = (step.positions[0], step.positions[1]);
    match step.kind {
        StepKind::Visit => {
            if let Some(cell) = grid.cell_mut(row, col) {
                cell.is_visited = true;
            }
        }
        StepKind::Path => {
            if let Some(cell) = grid.cell_mut(row, col) {
                cell.is_path = true;
            }
        }
        _ => {}
    }
}

fn apply_chain(chain: &mut ChainSnapshot, step: &Step) {
    match step.kind {
        StepKind::Create => {
            if let (Some(id), Some(value)) = (step.node, step.value) {
                chain.insert(id, value);
            }
        }
        StepKind::Link => {
            // A targetless link announces headship; the Create already
            // established it, so there is nothing to write.
            if let (Some(id), Some(target)) = (step.node, step.target) {
                if chain.get(target).is_some() {
                    chain.set_next(id, Some(target));
                }
            }
        }
        StepKind::Unlink => {
            if let Some(id) = step.node {
                chain.set_next(id, None);
            }
        }
        StepKind::Delete => {
            if let Some(id) = step.node {
                chain.remove(id);
            }
        }
        _ => {}
    }
}

fn apply_tree(tree: &mut TreeSnapshot, step: &Step) {
    match step.kind {
        StepKind::Create => {
            if let (Some(id), Some(value)) = (step.node, step.value) {
                let (x, y) = step.layout.unwrap_or((ROOT_X, ROOT_Y));
                tree.insert(id, TreeNode::leaf(value, x, y));
            }
        }
        StepKind::Link => {
            let (Some(id), Some(target)) = (step.node, step.target) else {
                return;
            };
            let Some(child_value) = tree.get(target).map(|n| n.value) else {
                return;
            };
            let Some(parent) = tree.get_mut(id) else {
                return;
            };
            if child_value < parent.value {
                parent.left = Some(target);
            } else {
                parent.right = Some(target);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_core::{ArraySnapshot, NodeId};

    #[test]
    fn swap_and_write_mutate_the_array() {
        let mut snapshot = Snapshot::from(ArraySnapshot::new(vec![1, 2, 3]));
        apply_step(&mut snapshot, &Step::swap(0, 2));
        apply_step(&mut snapshot, &Step::write(1, 9));
        assert_eq!(snapshot.as_array().unwrap().values(), &[3, 9, 1]);
    }

    #[test]
    fn observational_kinds_are_no_ops() {
        let mut snapshot = Snapshot::from(ArraySnapshot::new(vec![1, 2]));
        let before = snapshot.clone();
        for step in [
            Step::compare(&[0, 1]),
            Step::pivot(0),
            Step::sorted(0),
            Step::explore_cell(0, 1),
        ] {
            apply_step(&mut snapshot, &step);
        }
        assert_eq!(snapshot, before);
    }

    #[test]
    fn grid_flags_set_by_visit_and_path() {
        let grid = GridSnapshot::new(3, 3, (0, 0), (2, 2)).unwrap();
        let mut snapshot = Snapshot::from(grid);
        apply_step(&mut snapshot, &Step::visit_cell(1, 1));
        apply_step(&mut snapshot, &Step::path_cell(1, 1));
        let cell = snapshot.as_grid().unwrap().cell(1, 1).unwrap();
        assert!(cell.is_visited);
        assert!(cell.is_path);
    }

    #[test]
    fn out_of_range_grid_step_is_ignored() {
        let grid = GridSnapshot::new(3, 3, (0, 0), (2, 2)).unwrap();
        let mut snapshot = Snapshot::from(grid);
        let before = snapshot.clone();
        apply_step(&mut snapshot, &Step::visit_cell(9, 9));
        assert_eq!(snapshot, before);
    }

    #[test]
    fn unknown_id_link_is_a_no_op() {
        let mut snapshot = Snapshot::from(ChainSnapshot::from_values(&[1]));
        let before = snapshot.clone();
        apply_step(&mut snapshot, &Step::link(NodeId(50), NodeId(51)));
        assert_eq!(snapshot, before);
    }

    #[test]
    fn tree_link_infers_direction_from_values() {
        let mut snapshot = Snapshot::from(TreeSnapshot::new());
        apply_step(&mut snapshot, &Step::create_node_at(NodeId(0), 5, 50.0, 10.0));
        apply_step(&mut snapshot, &Step::create_node_at(NodeId(1), 3, 37.5, 25.0));
        apply_step(&mut snapshot, &Step::link(NodeId(0), NodeId(1)));
        apply_step(&mut snapshot, &Step::create_node_at(NodeId(2), 7, 62.5, 25.0));
        apply_step(&mut snapshot, &Step::link(NodeId(0), NodeId(2)));

        let tree = snapshot.as_tree().unwrap();
        let root = tree.get(tree.root().unwrap()).unwrap();
        assert_eq!(root.left, Some(NodeId(1)));
        assert_eq!(root.right, Some(NodeId(2)));
    }

    #[test]
    fn first_tree_create_sets_the_root() {
        let mut snapshot = Snapshot::from(TreeSnapshot::new());
        apply_step(&mut snapshot, &Step::create_node_at(NodeId(0), 4, 50.0, 10.0));
        assert_eq!(snapshot.as_tree().unwrap().root(), Some(NodeId(0)));
    }

    #[test]
    fn wrong_domain_step_is_ignored() {
        let mut snapshot = Snapshot::from(ArraySnapshot::new(vec![1, 2]));
        let before = snapshot.clone();
        apply_step(&mut snapshot, &Step::create_node(NodeId(0), 5));
        assert_eq!(snapshot, before);
    }
}
