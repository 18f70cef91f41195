use super::{Node, Repr};
use crate::data::Shape;
use crate::value::Value;

/// Scalars wrap whatever non-node data they are given, containers included.
pub(super) fn set(node: &Node, current: &Value, shape: Shape) -> Node {
    let value = match shape {
        Shape::Node(other) => return other,
        Shape::Scalar(value) if value.is_identical(current) => return node.clone(),
        shape => shape.into_value(),
    };
    node.derive(Repr::Scalar(value))
}
