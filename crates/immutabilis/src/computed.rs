use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::value::Value;

/// A derived-value function. Receives the rolled-up value of the node it is
/// attached to.
pub type ComputedFn = dyn Fn(&Value) -> Value + Send + Sync;

/// Named computed properties attached to a node.
///
/// Cloning is cheap; every node derived from the owner through `set` shares
/// the same registry.
///
/// # Example
///
/// ```
/// use immutabilis::{from_data, ComputedProps, Value};
///
/// let props = ComputedProps::new().with("size", |v: &Value| {
///     Value::from(serde_json::json!(v.as_str().map_or(0, str::len)))
/// });
/// let node = from_data("foo", Some(props));
/// assert_eq!(node.val_at("size"), Some(Value::from(serde_json::json!(3))));
/// ```
#[derive(Clone, Default)]
pub struct ComputedProps {
    props: Arc<IndexMap<String, Arc<ComputedFn>>>,
}

impl ComputedProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` under `name`, replacing any previous registration.
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Arc::make_mut(&mut self.props).insert(name.into(), Arc::new(f));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ComputedFn> {
        self.props.get(name).map(|f| &**f)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub(crate) fn eval(&self, name: &str, value: &Value) -> Option<Value> {
        self.get(name).map(|f| f(value))
    }
}

impl fmt::Debug for ComputedProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_eval() {
        let props = ComputedProps::new()
            .with("double", |v: &Value| {
                Value::Number((v.as_i64().unwrap_or(0) * 2).into())
            })
            .with("is_null", |v: &Value| Value::Bool(v.is_null()));

        assert_eq!(props.len(), 2);
        assert!(props.contains("double"));
        assert_eq!(props.names().collect::<Vec<_>>(), vec!["double", "is_null"]);
        assert_eq!(
            props.eval("double", &Value::Number(21.into())),
            Some(Value::Number(42.into()))
        );
        assert_eq!(props.eval("is_null", &Value::Null), Some(Value::Bool(true)));
        assert_eq!(props.eval("missing", &Value::Null), None);
    }

    #[test]
    fn test_clones_share_registry() {
        let a = ComputedProps::new().with("x", |_: &Value| Value::Null);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.props, &b.props));

        let c = b.with("y", |_: &Value| Value::Null);
        assert_eq!(a.len(), 1);
        assert_eq!(c.len(), 2);
    }
}
