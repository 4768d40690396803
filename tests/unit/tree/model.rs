use super::*;

fn sample_spec() -> TreeSpec {
    TreeSpec::leaf("5")
        .with_left(TreeSpec::leaf("3").with_right(TreeSpec::leaf("4")))
        .with_right(TreeSpec::leaf("8"))
}

#[test]
fn from_spec_links_parents_and_children() {
    let tree = BinaryTree::from_spec(&sample_spec()).unwrap();
    assert_eq!(tree.len(), 4);

    let root = tree.root().unwrap();
    assert_eq!(root.value(), "5");
    assert!(!root.has_parent());

    let three = root.left().unwrap();
    assert_eq!(three.to_string(), "3");
    assert_eq!(three.parent(), Some(root));
    assert!(three.left().is_none());

    let four = three.right().unwrap();
    assert_eq!(four.depth(), 2);
    assert_eq!(tree.height(), Some(2));
}

#[test]
fn json_values_are_stringified() {
    let tree = BinaryTree::from_json_str(
        r#"{ "value": 10, "left": { "value": true }, "right": { "value": "x" } }"#,
    )
    .unwrap();
    let root = tree.root().unwrap();
    assert_eq!(root.label(), "10");
    assert_eq!(root.left().unwrap().label(), "true");
    assert_eq!(root.right().unwrap().label(), "x");
}

#[test]
fn node_without_value_is_missing_capability() {
    let err = BinaryTree::from_json_str(r#"{ "value": 1, "left": {} }"#).unwrap_err();
    match err {
        TreevizError::MissingNodeCapability(msg) => assert!(msg.contains("root.left")),
        other => panic!("unexpected error: {other}"),
    }

    let err = BinaryTree::from_json_str(r#"{ "value": [1, 2] }"#).unwrap_err();
    assert!(matches!(err, TreevizError::MissingNodeCapability(_)));
}

#[test]
fn malformed_json_is_serde_error() {
    let err = BinaryTree::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, TreevizError::Serde(_)));
}

#[test]
fn bst_insert_orders_by_string_and_skips_duplicates() {
    let tree = BinaryTree::bst_from_values(["m", "c", "x", "a", "e", "c"]);
    assert_eq!(tree.len(), 5);

    let root = tree.root().unwrap();
    assert_eq!(root.value(), "m");
    let c = root.left().unwrap();
    assert_eq!(c.value(), "c");
    assert_eq!(c.left().unwrap().value(), "a");
    assert_eq!(c.right().unwrap().value(), "e");
    assert_eq!(root.right().unwrap().value(), "x");
}

#[test]
fn node_identity_is_per_slot_not_per_label() {
    let tree = BinaryTree::from_spec(&TreeSpec::leaf("a").with_left(TreeSpec::leaf("a"))).unwrap();
    let root = tree.root().unwrap();
    let child = root.left().unwrap();
    assert_eq!(root.label(), child.label());
    assert_ne!(root, child);
    assert_eq!(tree.node(1), Some(child));
    assert!(tree.node(2).is_none());
}

#[test]
fn empty_tree_has_no_root() {
    let tree = BinaryTree::new();
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(tree.height(), None);
}
