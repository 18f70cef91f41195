//! Persistent immutable data trees.
//!
//! Wraps nested data (scalars, lists, maps) in a tree of immutable nodes.
//! Updates are copy-on-write with maximal structural sharing, so reference
//! identity tells whether a subtree changed without comparing it.
//!
//! # Example
//!
//! ```
//! use immutabilis::{find, from_data, Node};
//! use serde_json::json;
//!
//! let state = from_data(json!({"todos": [{"done": false}], "filter": "all"}), None);
//!
//! let next = state.set(json!({"filter": "open"}));
//! assert!(!Node::ptr_eq(&next, &state));
//! assert!(Node::ptr_eq(&next.sub("todos").unwrap(), &state.sub("todos").unwrap()));
//!
//! // Setting the current value again is a no-op.
//! assert!(Node::ptr_eq(&next.set(json!({"filter": "open"})), &next));
//!
//! let done = find(Some(&next), Some("todos.0.done")).unwrap();
//! assert_eq!(*done.val(), json!(false));
//! ```

mod computed;
mod data;
mod each;
mod error;
mod factory;
mod node;
mod path;
mod value;

pub use computed::{ComputedFn, ComputedProps};
pub use data::{Data, Key};
pub use error::Error;
pub use factory::create_sub;
pub use node::{Node, NodeKind};
pub use path::find;
pub use value::{Opaque, Value};

/// Build a persistent tree from raw data.
///
/// `computed` attaches to the top-level node only.
pub fn from_data(data: impl Into<Data>, computed: Option<ComputedProps>) -> Node {
    create_sub(data.into(), computed)
}

/// Parse JSON text and build a persistent tree from it.
///
/// # Errors
///
/// Returns [`Error::Json`] if `text` is not valid JSON.
pub fn from_json_str(text: &str, computed: Option<ComputedProps>) -> Result<Node, Error> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_data(json, computed))
}
