//! Linked-chain mutation producer.

use crate::expect_chain;
use strobe_core::{ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Operation for the [`ChainProducer`], fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainOp {
    /// Append a value at the tail, traversing from the head.
    Append(i64),
    /// Delete the first node holding the value.
    Delete(i64),
}

/// Chain-mutation producer.
///
/// `Append` emits one `Create`, then — for a non-empty chain — a
/// `Select` at the head, one `Visit` per traversed node, and a `Link`
/// tying the former tail to the new node. Appending to an empty chain
/// emits `Create` followed by a targetless head `Link` with no
/// intermediate traversal.
///
/// `Delete` emits `Select` at the head, a `Compare` on the match, then
/// `Unlink` (clearing the predecessor's reference), `Link`
/// (re-pointing the predecessor at the successor, if any), and
/// `Delete`. Deleting the head short-circuits straight to `Delete`.
/// A value absent from the chain exhausts the trace after the
/// traversal `Visit`s.
#[derive(Clone, Copy, Debug)]
pub struct ChainProducer {
    op: ChainOp,
}

impl ChainProducer {
    /// A producer performing `op`.
    pub fn new(op: ChainOp) -> Self {
        Self { op }
    }
}

impl StepProducer for ChainProducer {
    fn name(&self) -> &str {
        "chain"
    }

    fn run(
        &self,
        snapshot: &mut Snapshot,
        recorder: &mut TraceRecorder,
    ) -> Result<(), ProduceError> {
        let chain = expect_chain(self.name(), snapshot)?;
        match self.op {
            ChainOp::Append(value) => append(chain, value, recorder),
            ChainOp::Delete(value) => delete(chain, value, recorder),
        }
        Ok(())
    }
}

fn append(chain: &mut strobe_core::ChainSnapshot, value: i64, recorder: &mut TraceRecorder) {
    let new_id = chain.allocate_id();
    recorder.record(
        Step::create_node(new_id, value)
            .describe(format!("Creating new node with value {value}")),
    );

    if chain.is_empty() {
        chain.insert(new_id, value);
        recorder.record(Step::head_link(new_id).describe("Setting as head node"));
        return;
    }

    let head = match chain.head() {
        Some(id) => id,
        None => return,
    };
    chain.insert(new_id, value);

    let mut current = head;
    let head_value = chain.get(head).map(|n| n.value).unwrap_or_default();
    recorder.record(
        Step::select_node(head)
            .at(0)
            .describe(format!("Starting at head: {head_value}")),
    );

    while let Some(next) = chain.get(current).and_then(|n| n.next) {
        let position = chain.position_of(next).unwrap_or_default() as u32;
        let next_value = chain.get(next).map(|n| n.value).unwrap_or_default();
        recorder.record(
            Step::visit_node(next)
                .at(position)
                .describe(format!("Traversing to next node: {next_value}")),
        );
        current = next;
    }

    let tail_value = chain.get(current).map(|n| n.value).unwrap_or_default();
    chain.set_next(current, Some(new_id));
    recorder.record(
        Step::link(current, new_id)
            .describe(format!("Linking node {tail_value} to new node {value}")),
    );
}

fn delete(chain: &mut strobe_core::ChainSnapshot, value: i64, recorder: &mut TraceRecorder) {
    let head = match chain.head() {
        Some(id) => id,
        None => return,
    };

    recorder.record(
        Step::select_node(head)
            .at(0)
            .describe(format!("Searching for {value} starting at head")),
    );

    // Head deletion short-circuits: no unlink/relink is needed because
    // removing the first node promotes its successor to head.
    if chain.get(head).is_some_and(|n| n.value == value) {
        recorder.record(
            Step::compare_node(head)
                .at(0)
                .describe(format!("Found match at head: {value}")),
        );
        recorder.record(
            Step::delete_node(head).describe(format!("Deleting head node {value}")),
        );
        chain.remove(head);
        return;
    }

    let mut prev: Option<strobe_core::NodeId> = None;
    let mut current = head;
    loop {
        let node = match chain.get(current) {
            Some(n) => n.clone(),
            None => return,
        };

        if node.value == value {
            let position = chain.position_of(current).unwrap_or_default() as u32;
            recorder.record(
                Step::compare_node(current)
                    .at(position)
                    .describe(format!("Found match: {value}")),
            );

            if let Some(prev_id) = prev {
                recorder.record(Step::unlink(prev_id).describe("Unlinking previous node"));
                chain.set_next(prev_id, None);

                if let Some(next_id) = node.next {
                    recorder.record(
                        Step::link(prev_id, next_id)
                            .describe("Linking previous node to next node"),
                    );
                    chain.set_next(prev_id, Some(next_id));
                }
            }

            recorder.record(Step::delete_node(current).describe(format!("Deleting node {value}")));
            chain.remove(current);
            return;
        }

        prev = Some(current);
        match node.next {
            Some(next_id) if chain.get(next_id).is_some() => {
                current = next_id;
                let position = chain.position_of(current).unwrap_or_default() as u32;
                let visited = chain.get(current).map(|n| n.value).unwrap_or_default();
                recorder.record(
                    Step::visit_node(current)
                        .at(position)
                        .describe(format!("Visiting {visited}")),
                );
            }
            _ => return,
        }
    }
}
