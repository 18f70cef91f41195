use tracing::trace;

use super::reconcile::{reconcile, Change};
use super::{Node, Repr};
use crate::data::{Data, Key, Shape};

pub(super) fn set(node: &Node, children: &[Node], shape: Shape) -> Node {
    match shape {
        Shape::Node(other) => other,
        Shape::List(items) => reconcile_all(node, children, items),
        shape => node.convert(shape),
    }
}

/// Update one slot. Writing past the end pads the gap with null scalars.
///
/// An index whose padded list cannot be allocated leaves the node unchanged.
pub(super) fn set_at(node: &Node, children: &[Node], key: &Key, data: Data) -> Node {
    let Some(index) = key.as_index() else {
        return node.clone();
    };
    let Some(len) = index.checked_add(1).map(|end| end.max(children.len())) else {
        return node.clone();
    };
    let mut next: Vec<Node> = Vec::new();
    if next.try_reserve_exact(len).is_err() {
        trace!(index, "list index out of reach");
        return node.clone();
    }
    let Some(child) = reconcile(children.get(index), data).into_node() else {
        return node.clone();
    };
    next.extend_from_slice(children);
    if index < next.len() {
        next[index] = child;
    } else {
        next.resize_with(index, Node::null);
        next.push(child);
    }
    trace!(index, len = next.len(), "list rebuilt");
    node.derive(Repr::List(next))
}

fn reconcile_all(node: &Node, children: &[Node], items: Vec<Data>) -> Node {
    let mut changed = items.len() != children.len();
    let mut next = Vec::with_capacity(items.len());
    for (index, data) in items.into_iter().enumerate() {
        let current = children.get(index);
        match reconcile(current, data) {
            Change::Unchanged => next.extend(current.cloned()),
            Change::Replaced(child) | Change::Added(child) => {
                changed = true;
                next.push(child);
            }
        }
    }
    if !changed {
        return node.clone();
    }
    trace!(from = children.len(), len = next.len(), "list rebuilt");
    node.derive(Repr::List(next))
}
