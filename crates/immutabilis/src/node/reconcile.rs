//! Per-entry reconciliation shared by map and list nodes.

use super::Node;
use crate::data::Data;
use crate::factory;

pub(super) enum Change {
    /// The existing child absorbed the data without change.
    Unchanged,
    /// The existing child produced a different node.
    Replaced(Node),
    /// There was no child; a fresh one was built.
    Added(Node),
}

impl Change {
    pub(super) fn into_node(self) -> Option<Node> {
        match self {
            Change::Unchanged => None,
            Change::Replaced(node) | Change::Added(node) => Some(node),
        }
    }
}

pub(super) fn reconcile(current: Option<&Node>, data: Data) -> Change {
    match current {
        Some(child) => {
            let next = child.update(Some(data));
            if Node::ptr_eq(&next, child) {
                Change::Unchanged
            } else {
                Change::Replaced(next)
            }
        }
        None => Change::Added(factory::create_sub(data, None)),
    }
}
