#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("immutabilis=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

/// Assert that two handles point at the same node.
#[track_caller]
pub fn assert_same(a: &immutabilis::Node, b: &immutabilis::Node) {
    assert!(immutabilis::Node::ptr_eq(a, b), "expected same node:\n{a:?}\nvs\n{b:?}");
}

/// Assert that two handles point at different nodes.
#[track_caller]
pub fn assert_new(a: &immutabilis::Node, b: &immutabilis::Node) {
    assert!(!immutabilis::Node::ptr_eq(a, b), "expected a new node, got the same:\n{a:?}");
}
