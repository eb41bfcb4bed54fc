//! The atomic step record emitted by producers and replayed by the engine.

use crate::id::NodeId;
use smallvec::SmallVec;
use std::fmt;

/// Discriminant for a [`Step`].
///
/// The meaning of the step's payload fields depends on the kind and on
/// the domain it is applied to; see the per-kind documentation and the
/// replay engine's application rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Two (or more) elements were compared. Observational only.
    Compare,
    /// Two array positions exchanged their values.
    Swap,
    /// A value was installed at an array position, overwriting it.
    Write,
    /// An array position was marked as the active pivot. Observational.
    Pivot,
    /// An element reached its final position (or, for a tree search,
    /// the searched value was found). Observational.
    Sorted,
    /// A grid cell or structural node was visited during traversal.
    Visit,
    /// A frontier neighbour was discovered. Observational.
    Explore,
    /// A grid cell was confirmed to lie on the start-to-end path.
    Path,
    /// A new structural node came into existence.
    Create,
    /// A structural node was removed from its snapshot.
    Delete,
    /// A node's outgoing reference was pointed at a target node.
    Link,
    /// A node's outgoing reference was cleared.
    Unlink,
    /// A node was selected as the traversal starting point. Observational.
    Select,
}

impl StepKind {
    /// Lower-case wire-style name, used in narration and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::Write => "write",
            Self::Pivot => "pivot",
            Self::Sorted => "sorted",
            Self::Visit => "visit",
            Self::Explore => "explore",
            Self::Path => "path",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Link => "link",
            Self::Unlink => "unlink",
            Self::Select => "select",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One atomic, typed record of an observed or applied mutation.
///
/// A step carries a [`StepKind`] plus a handful of optional payload
/// fields whose meaning is producer-specific: array steps address
/// `positions` as array indices, grid steps as `[row, col]`, and
/// structural steps use `node`/`target` ids instead. The
/// `description` is narration for presentation and is never consumed
/// by the replay engine.
///
/// # Examples
///
/// ```
/// use strobe_core::{Step, StepKind};
///
/// let step = Step::swap(2, 3).describe("Swapping 7 and 4");
/// assert_eq!(step.kind, StepKind::Swap);
/// assert_eq!(step.positions.as_slice(), &[2, 3]);
/// assert!(step.node.is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// What happened.
    pub kind: StepKind,
    /// Ordered integer positions; array indices or `[row, col]`.
    pub positions: SmallVec<[u32; 3]>,
    /// Structural node the step acts on.
    pub node: Option<NodeId>,
    /// Structural node a `Link` step points at.
    pub target: Option<NodeId>,
    /// Value carried by a `Create` step.
    pub value: Option<i64>,
    /// Value a `Write` step installs at `positions[0]`.
    pub write_value: Option<i64>,
    /// Layout hint `(x, y)` emitted by tree `Create` steps. Presentation only.
    pub layout: Option<(f32, f32)>,
    /// Human-readable narration. Presentation only.
    pub description: Option<String>,
}

impl Step {
    fn bare(kind: StepKind) -> Self {
        Self {
            kind,
            positions: SmallVec::new(),
            node: None,
            target: None,
            value: None,
            write_value: None,
            layout: None,
            description: None,
        }
    }

    /// A comparison over the given positions.
    pub fn compare(positions: &[u32]) -> Self {
        let mut step = Self::bare(StepKind::Compare);
        step.positions.extend_from_slice(positions);
        step
    }

    /// An exchange of the values at positions `i` and `j`.
    pub fn swap(i: u32, j: u32) -> Self {
        let mut step = Self::bare(StepKind::Swap);
        step.positions.extend_from_slice(&[i, j]);
        step
    }

    /// An overwrite of position `i` with `value`.
    pub fn write(i: u32, value: i64) -> Self {
        let mut step = Self::bare(StepKind::Write);
        step.positions.push(i);
        step.write_value = Some(value);
        step
    }

    /// Position `i` marked as the active pivot.
    pub fn pivot(i: u32) -> Self {
        let mut step = Self::bare(StepKind::Pivot);
        step.positions.push(i);
        step
    }

    /// Position `i` marked as settled in its final place.
    pub fn sorted(i: u32) -> Self {
        let mut step = Self::bare(StepKind::Sorted);
        step.positions.push(i);
        step
    }

    /// Grid cell `(row, col)` visited.
    pub fn visit_cell(row: u32, col: u32) -> Self {
        let mut step = Self::bare(StepKind::Visit);
        step.positions.extend_from_slice(&[row, col]);
        step
    }

    /// Grid cell `(row, col)` discovered as a frontier neighbour.
    pub fn explore_cell(row: u32, col: u32) -> Self {
        let mut step = Self::bare(StepKind::Explore);
        step.positions.extend_from_slice(&[row, col]);
        step
    }

    /// Grid cell `(row, col)` confirmed on the final path.
    pub fn path_cell(row: u32, col: u32) -> Self {
        let mut step = Self::bare(StepKind::Path);
        step.positions.extend_from_slice(&[row, col]);
        step
    }

    /// A new chain node with `value`.
    pub fn create_node(id: NodeId, value: i64) -> Self {
        let mut step = Self::bare(StepKind::Create);
        step.node = Some(id);
        step.value = Some(value);
        step
    }

    /// A new tree node with `value` and a layout hint.
    pub fn create_node_at(id: NodeId, value: i64, x: f32, y: f32) -> Self {
        let mut step = Self::create_node(id, value);
        step.layout = Some((x, y));
        step
    }

    /// Node `id` selected as the traversal starting point.
    pub fn select_node(id: NodeId) -> Self {
        let mut step = Self::bare(StepKind::Select);
        step.node = Some(id);
        step
    }

    /// Structural node `id` visited during traversal.
    pub fn visit_node(id: NodeId) -> Self {
        let mut step = Self::bare(StepKind::Visit);
        step.node = Some(id);
        step
    }

    /// A value comparison against node `id`.
    pub fn compare_node(id: NodeId) -> Self {
        let mut step = Self::bare(StepKind::Compare);
        step.node = Some(id);
        step
    }

    /// The searched value found at node `id`.
    pub fn found_node(id: NodeId) -> Self {
        let mut step = Self::bare(StepKind::Sorted);
        step.node = Some(id);
        step
    }

    /// Node `id`'s outgoing reference pointed at `target`.
    pub fn link(id: NodeId, target: NodeId) -> Self {
        let mut step = Self::bare(StepKind::Link);
        step.node = Some(id);
        step.target = Some(target);
        step
    }

    /// Node `id` installed as the chain head. Carries no target; the
    /// replay engine applies it as a no-op because the matching
    /// `Create` step already established headship.
    pub fn head_link(id: NodeId) -> Self {
        let mut step = Self::bare(StepKind::Link);
        step.node = Some(id);
        step
    }

    /// Node `id`'s outgoing reference cleared.
    pub fn unlink(id: NodeId) -> Self {
        let mut step = Self::bare(StepKind::Unlink);
        step.node = Some(id);
        step
    }

    /// Node `id` removed from its structure.
    pub fn delete_node(id: NodeId) -> Self {
        let mut step = Self::bare(StepKind::Delete);
        step.node = Some(id);
        step
    }

    /// Attach a list position (chain steps carry the node's index in
    /// presentation order).
    pub fn at(mut self, position: u32) -> Self {
        self.positions.push(position);
        self
    }

    /// Attach narration text.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Structural equality ignoring narration.
    ///
    /// Two steps are shape-equal when everything the replay engine can
    /// observe is equal; `description` is excluded. Used by the
    /// determinism tests.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.positions == other.positions
            && self.node == other.node
            && self.target == other.target
            && self.value == other.value
            && self.write_value == other.write_value
            && self.layout == other.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_expected_fields() {
        let w = Step::write(4, 17);
        assert_eq!(w.kind, StepKind::Write);
        assert_eq!(w.positions.as_slice(), &[4]);
        assert_eq!(w.write_value, Some(17));

        let c = Step::create_node_at(NodeId(3), 9, 50.0, 10.0);
        assert_eq!(c.node, Some(NodeId(3)));
        assert_eq!(c.value, Some(9));
        assert_eq!(c.layout, Some((50.0, 10.0)));
    }

    #[test]
    fn same_shape_ignores_description() {
        let a = Step::swap(0, 1).describe("first");
        let b = Step::swap(0, 1).describe("second");
        assert_ne!(a, b);
        assert!(a.same_shape(&b));
    }

    #[test]
    fn head_link_has_no_target() {
        let step = Step::head_link(NodeId(1));
        assert_eq!(step.kind, StepKind::Link);
        assert!(step.target.is_none());
    }
}
