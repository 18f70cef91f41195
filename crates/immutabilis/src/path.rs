use crate::node::Node;

/// Resolve a dot-delimited `selector` below `node`.
///
/// Each segment is looked up with [`Node::sub`]; the walk stops at the first
/// missing segment. A missing node yields `None`, a missing selector yields
/// `node` itself.
///
/// # Example
///
/// ```
/// use immutabilis::{find, from_data};
/// use serde_json::json;
///
/// let data = from_data(json!({"a": {"b": [{"c": 1}]}}), None);
/// assert_eq!(*find(Some(&data), Some("a.b.0.c")).unwrap().val(), json!(1));
/// assert!(find(Some(&data), Some("a.b.0.z")).is_none());
/// ```
pub fn find(node: Option<&Node>, selector: Option<&str>) -> Option<Node> {
    let node = node?;
    let Some(selector) = selector else {
        return Some(node.clone());
    };
    selector
        .split('.')
        .try_fold(node.clone(), |current, segment| current.sub(segment))
}
