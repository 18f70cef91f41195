mod common;

use common::{assert_new, assert_same};
use immutabilis::{from_data, ComputedProps, Data, Node, NodeKind, Opaque, Value};
use serde_json::json;

fn len_prop() -> ComputedProps {
    ComputedProps::new().with("size", |v: &Value| {
        let len = match v {
            Value::String(s) => s.len(),
            Value::List(items) => items.len(),
            Value::Map(entries) => entries.len(),
            _ => 0,
        };
        Value::from(json!(len))
    })
}

#[test]
fn ingest_all_shapes() {
    assert_eq!(from_data(json!({"foo": "foo"}), None).kind(), NodeKind::Map);
    assert_eq!(from_data(json!([1, 2, 3]), None).kind(), NodeKind::List);
    assert_eq!(from_data(1, None).kind(), NodeKind::Scalar);
    assert_eq!(from_data("foo", None).kind(), NodeKind::Scalar);
    assert_eq!(
        from_data(Opaque::new(|| ()), None).kind(),
        NodeKind::Scalar
    );
}

#[test]
fn scalar_matrix() {
    let originals = [Data::from(1), Data::from("foo"), Data::opaque(|| 1)];
    let changes = [Data::from(2), Data::from("bar"), Data::opaque(|| 2)];

    for (original, change) in originals.into_iter().zip(changes) {
        let value1 = from_data(original.clone(), None);
        let value2 = value1.set(original);
        let value3 = value1.set(change);

        assert_same(&value1, &value2);
        assert_new(&value1, &value3);
        assert!(value1.val_at("foo").is_none());
        assert!(value1.sub("foo").is_none());
    }
}

#[test]
fn computed_properties_on_every_variant() {
    assert_eq!(
        from_data("foo", Some(len_prop())).val_at("size"),
        Some(Value::from(json!(3)))
    );
    assert_eq!(
        from_data(json!({"foo": {}, "bar": {}}), Some(len_prop())).val_at("size"),
        Some(Value::from(json!(2)))
    );
    assert_eq!(
        from_data(json!(["foo", "bar", "baz"]), Some(len_prop())).val_at("size"),
        Some(Value::from(json!(3)))
    );
}

#[test]
fn change_propagates_along_the_path_only() {
    let root = from_data(
        json!({
            "left": {"deep": {"x": 1}, "side": [1, 2]},
            "right": {"y": 2}
        }),
        None,
    );
    let deep = root.sub("left").unwrap().sub("deep").unwrap();
    let next_deep = deep.set_at("x", 10);
    let next_left = root.sub("left").unwrap().set_at("deep", &next_deep);
    let next = root.set_at("left", &next_left);

    assert_new(&next, &root);
    assert_new(&next.sub("left").unwrap(), &root.sub("left").unwrap());
    assert_same(&next.sub("left").unwrap().sub("deep").unwrap(), &next_deep);
    assert_same(
        &next.sub("left").unwrap().sub("side").unwrap(),
        &root.sub("left").unwrap().sub("side").unwrap(),
    );
    assert_same(&next.sub("right").unwrap(), &root.sub("right").unwrap());
    assert_eq!(
        *next.val(),
        json!({"left": {"deep": {"x": 10}, "side": [1, 2]}, "right": {"y": 2}})
    );
}

#[test]
fn whole_value_update_keeps_unchanged_subtrees() {
    let root = from_data(json!({"a": {"b": 1}, "c": [1, 2, {"d": 3}]}), None);
    let next = root.set(json!({"a": {"b": 1}, "c": [1, 2, {"d": 4}]}));

    assert_new(&next, &root);
    assert_same(&next.sub("a").unwrap(), &root.sub("a").unwrap());
    let (old_c, new_c) = (root.sub("c").unwrap(), next.sub("c").unwrap());
    assert_new(&new_c, &old_c);
    assert_same(&new_c.sub(0).unwrap(), &old_c.sub(0).unwrap());
    assert_same(&new_c.sub(1).unwrap(), &old_c.sub(1).unwrap());
    assert_new(&new_c.sub(2).unwrap(), &old_c.sub(2).unwrap());
}

#[test]
fn snapshots_are_independent() {
    let v1 = from_data(json!({"count": 0, "items": []}), None);
    let v2 = v1.set_at("count", 1);
    let v3 = v2.set(json!({"items": ["x"]}));

    assert_eq!(*v1.val(), json!({"count": 0, "items": []}));
    assert_eq!(*v2.val(), json!({"count": 1, "items": []}));
    assert_eq!(*v3.val(), json!({"count": 1, "items": ["x"]}));
    assert_same(&v2.sub("items").unwrap(), &v1.sub("items").unwrap());
}

#[test]
fn list_guard_rails() {
    let list = from_data(json!(["foo", "bar"]), None);
    assert_same(&list.set_at(-1, "x"), &list);
    assert_same(&list.set_at("notanumber", "x"), &list);
    assert_same(&list.set_at(0, "foo"), &list);
    assert_same(&list.update(None), &list);
}

#[test]
fn variant_conversion_and_adoption() {
    let map = from_data(json!({"foo": "bar"}), None);
    let list = from_data(json!([1, 2, 3]), None);
    let scalar = from_data("bar", None);

    assert_eq!(*map.set(json!(["a"])).val(), json!(["a"]));
    assert_eq!(*list.set(json!({"a": 1})).val(), json!({"a": 1}));
    for node in [&map, &list, &scalar] {
        let other = from_data(json!({"other": true}), None);
        assert_same(&node.set(&other), &other);
        assert_same(&node.set(node), node);
    }
}

#[test]
fn filtering_via_each() {
    let list = from_data(json!([1, 2, 3, 4]), None);
    let odd = list.each(|n, _| (n.val().as_i64().unwrap_or(0) % 2 != 0).then(|| Data::from(n)));
    assert_eq!(*odd.val(), json!([1, 3]));
    assert_same(&odd.sub(0).unwrap(), &list.sub(0).unwrap());
}

#[test]
fn rollup_of_nested_nodes_converts_to_json() {
    let node = from_data(json!({"a": [1, {"b": null}]}), None);
    assert_eq!(node.val().to_json().unwrap(), json!({"a": [1, {"b": null}]}));

    let with_fn = node.set_at("f", Data::opaque(|| ()));
    assert!(with_fn.val().to_json().is_err());
    assert!(Node::ptr_eq(&with_fn.sub("a").unwrap(), &node.sub("a").unwrap()));
}
