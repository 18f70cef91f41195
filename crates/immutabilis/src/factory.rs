//! Builds nodes from raw data.

use crate::computed::ComputedProps;
use crate::data::{Data, Shape};
use crate::node::{Node, Repr};

/// Build the node for `data`.
///
/// Existing nodes are adopted as-is (and keep their own computed props),
/// lists and maps are converted child by child, everything else is wrapped
/// in a scalar. `computed` attaches only to the returned node.
pub fn create_sub(data: Data, computed: Option<ComputedProps>) -> Node {
    build(data.into_shape(), computed)
}

pub(crate) fn build(shape: Shape, computed: Option<ComputedProps>) -> Node {
    match shape {
        Shape::Node(node) => node,
        Shape::List(items) => Node::new(
            Repr::List(items.into_iter().map(|item| create_sub(item, None)).collect()),
            computed,
        ),
        Shape::Map(entries) => Node::new(
            Repr::Map(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, create_sub(item, None)))
                    .collect(),
            ),
            computed,
        ),
        Shape::Scalar(value) => Node::new(Repr::Scalar(value), computed),
    }
}
