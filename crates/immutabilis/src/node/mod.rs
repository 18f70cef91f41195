//! Persistent tree nodes.
//!
//! # Node Variants
//!
//! | Variant  | Children               | Rollup                               |
//! |----------|------------------------|--------------------------------------|
//! | `Scalar` | none                   | the wrapped value itself             |
//! | `Map`    | `IndexMap<String, _>`  | `Value::Map`, assembled lazily       |
//! | `List`   | `Vec<_>`               | `Value::List`, assembled lazily      |
//!
//! A [`Node`] is never mutated after construction. `set` either hands back
//! the receiver (nothing changed) or a new node that shares every untouched
//! child with the receiver, so `Node::ptr_eq` is an exact change signal.

mod list;
mod map;
mod reconcile;
mod scalar;

use std::fmt;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use tracing::trace;

use crate::computed::ComputedProps;
use crate::data::{Data, Key, Shape};
use crate::each;
use crate::factory;
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Map,
    List,
}

pub(crate) enum Repr {
    Scalar(Value),
    Map(IndexMap<String, Node>),
    List(Vec<Node>),
}

struct NodeInner {
    repr: Repr,
    computed: Option<ComputedProps>,
    /// Single-assignment rollup memo for composite nodes.
    rollup: OnceLock<Value>,
}

/// A handle to an immutable tree node. Cloning copies the reference.
#[derive(Clone)]
pub struct Node(Arc<NodeInner>);

impl Node {
    pub(crate) fn new(repr: Repr, computed: Option<ComputedProps>) -> Self {
        Node(Arc::new(NodeInner {
            repr,
            computed,
            rollup: OnceLock::new(),
        }))
    }

    pub(crate) fn null() -> Self {
        Node::new(Repr::Scalar(Value::Null), None)
    }

    /// `true` if both handles refer to the same node.
    pub fn ptr_eq(a: &Node, b: &Node) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub fn kind(&self) -> NodeKind {
        match &self.0.repr {
            Repr::Scalar(_) => NodeKind::Scalar,
            Repr::Map(_) => NodeKind::Map,
            Repr::List(_) => NodeKind::List,
        }
    }

    /// Number of direct children; always 0 for scalars.
    pub fn len(&self) -> usize {
        match &self.0.repr {
            Repr::Scalar(_) => 0,
            Repr::Map(children) => children.len(),
            Repr::List(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn computed_props(&self) -> Option<&ComputedProps> {
        self.0.computed.as_ref()
    }

    /// The rolled-up value of this node.
    ///
    /// Composite nodes assemble it from their children on first call and
    /// return the cached value afterwards.
    pub fn val(&self) -> &Value {
        match &self.0.repr {
            Repr::Scalar(value) => value,
            Repr::Map(children) => self.0.rollup.get_or_init(|| {
                Value::Map(Arc::new(
                    children
                        .iter()
                        .map(|(key, child)| (key.clone(), child.val().clone()))
                        .collect(),
                ))
            }),
            Repr::List(children) => self.0.rollup.get_or_init(|| {
                Value::List(Arc::new(
                    children.iter().map(|child| child.val().clone()).collect(),
                ))
            }),
        }
    }

    /// The rolled-up value of the child at `key`, or else the computed
    /// property registered under that name.
    ///
    /// Returns `None` when neither exists.
    pub fn val_at(&self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        if let Some(child) = self.child(&key) {
            return Some(child.val().clone());
        }
        self.0.computed.as_ref()?.eval(&key.as_name(), self.val())
    }

    /// The direct child at `key`. Never looks further than one level down.
    pub fn sub(&self, key: impl Into<Key>) -> Option<Node> {
        self.child(&key.into()).cloned()
    }

    pub(crate) fn child(&self, key: &Key) -> Option<&Node> {
        match &self.0.repr {
            Repr::Scalar(_) => None,
            Repr::Map(children) => children.get(&*key.as_name()),
            Repr::List(children) => key.as_index().and_then(|index| children.get(index)),
        }
    }

    /// Transform every child with `f` and feed the result back through
    /// [`set`](Node::set).
    ///
    /// Returning `None` from `f` drops the entry. List entries after a dropped
    /// one move up; dropped map keys are simply not updated.
    pub fn each<F>(&self, mut f: F) -> Node
    where
        F: FnMut(&Node, &Key) -> Option<Data>,
    {
        self.each_with(&(), &(), |node, key, _, _| f(node, key))
    }

    /// Like [`each`](Node::each), threading `scope` and `extra` through to
    /// every callback invocation.
    pub fn each_with<S, E, F>(&self, scope: &S, extra: &E, f: F) -> Node
    where
        S: ?Sized,
        E: ?Sized,
        F: FnMut(&Node, &Key, &S, &E) -> Option<Data>,
    {
        self.update(each::map_children(&self.0.repr, scope, extra, f))
    }

    /// Replace this node's whole value.
    ///
    /// Nodes are adopted unchanged. Data of the same shape is reconciled
    /// against the current children; data of a different shape converts the
    /// node into the matching variant. Scalars wrap any data they are given,
    /// containers included.
    pub fn set(&self, data: impl Into<Data>) -> Node {
        self.update(Some(data.into()))
    }

    /// Update the single child at `key`.
    ///
    /// Invalid list indices and scalar receivers leave the node unchanged.
    pub fn set_at(&self, key: impl Into<Key>, data: impl Into<Data>) -> Node {
        let key = key.into();
        match &self.0.repr {
            Repr::Scalar(_) => self.clone(),
            Repr::Map(children) => map::set_at(self, children, &key, data.into()),
            Repr::List(children) => list::set_at(self, children, &key, data.into()),
        }
    }

    /// [`set`](Node::set) with optional data; `None` returns the receiver.
    pub fn update(&self, data: Option<Data>) -> Node {
        let Some(data) = data else {
            return self.clone();
        };
        let shape = data.into_shape();
        match &self.0.repr {
            Repr::Scalar(current) => scalar::set(self, current, shape),
            Repr::Map(children) => map::set(self, children, shape),
            Repr::List(children) => list::set(self, children, shape),
        }
    }

    /// Build a replacement for this node from `shape`, carrying the computed
    /// props forward.
    fn convert(&self, shape: Shape) -> Node {
        let next = factory::build(shape, self.0.computed.clone());
        trace!(from = ?self.kind(), to = ?next.kind(), "replacing node");
        next
    }

    fn derive(&self, repr: Repr) -> Node {
        Node::new(repr, self.0.computed.clone())
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Node::ptr_eq(self, other)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.repr {
            Repr::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Repr::Map(children) => {
                f.write_str("Map ")?;
                f.debug_map().entries(children.iter()).finish()
            }
            Repr::List(children) => {
                f.write_str("List ")?;
                f.debug_list().entries(children.iter()).finish()
            }
        }
    }
}
