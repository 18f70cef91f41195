//! Shape-preserving map/filter over a node's children.

use crate::data::{Data, Key};
use crate::node::{Node, Repr};

/// Call `f` once per child in order and collect the results into a
/// collection of the same kind. Entries for which `f` returns `None` are
/// left out; list entries are compacted.
///
/// Scalars have no children and yield `None`.
pub(crate) fn map_children<S, E, F>(repr: &Repr, scope: &S, extra: &E, mut f: F) -> Option<Data>
where
    S: ?Sized,
    E: ?Sized,
    F: FnMut(&Node, &Key, &S, &E) -> Option<Data>,
{
    match repr {
        Repr::Scalar(_) => None,
        Repr::Map(children) => Some(Data::Map(
            children
                .iter()
                .filter_map(|(name, child)| {
                    let key = Key::Name(name.clone());
                    f(child, &key, scope, extra).map(|data| (name.clone(), data))
                })
                .collect(),
        )),
        Repr::List(children) => Some(Data::List(
            children
                .iter()
                .enumerate()
                .filter_map(|(index, child)| f(child, &Key::from(index), scope, extra))
                .collect(),
        )),
    }
}
