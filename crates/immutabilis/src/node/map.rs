use indexmap::IndexMap;
use tracing::trace;

use super::reconcile::reconcile;
use super::{Node, Repr};
use crate::data::{Data, Key, Shape};

pub(super) fn set(node: &Node, children: &IndexMap<String, Node>, shape: Shape) -> Node {
    match shape {
        Shape::Node(other) => other,
        Shape::Map(entries) => merge(node, children, entries),
        shape => node.convert(shape),
    }
}

pub(super) fn set_at(
    node: &Node,
    children: &IndexMap<String, Node>,
    key: &Key,
    data: Data,
) -> Node {
    let key = key.as_name();
    let Some(child) = reconcile(children.get(&*key), data).into_node() else {
        return node.clone();
    };
    let mut next = children.clone();
    next.insert(key.into_owned(), child);
    trace!(changed = 1, len = next.len(), "map rebuilt");
    node.derive(Repr::Map(next))
}

/// Overlay every key of `entries`; keys absent from `entries` are kept.
fn merge(node: &Node, children: &IndexMap<String, Node>, entries: IndexMap<String, Data>) -> Node {
    let mut changed = Vec::new();
    for (key, data) in entries {
        if let Some(child) = reconcile(children.get(&key), data).into_node() {
            changed.push((key, child));
        }
    }
    if changed.is_empty() {
        return node.clone();
    }
    trace!(changed = changed.len(), len = children.len(), "map rebuilt");
    let mut next = children.clone();
    next.extend(changed);
    node.derive(Repr::Map(next))
}
