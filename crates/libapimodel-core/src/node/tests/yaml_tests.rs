use crate::Value;
use crate::index::LoadError;
use crate::node::Document;
use crate::node::NodeType;
use crate::node::NodeView;
use crate::node::ScalarKind;
use crate::node::DocumentId;

fn root_view(document: &Document) -> NodeView<'_> {
    NodeView::new(document, DocumentId::from_raw(0), document.root())
}

#[test]
fn mapping_entries_keep_source_order() -> Result<(), LoadError> {
    let document = Document::from_yaml_str("api.yaml", concat!(
        "zeta: 1\n",
        "alpha: 2\n",
        "mid: 3\n",
    ))?;

    let keys: Vec<_> = root_view(&document)
        .entries()
        .filter_map(|(key, _)| key.as_str())
        .collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

    Ok(())
}

#[test]
fn scalar_kinds_are_inferred() -> Result<(), LoadError> {
    let document = Document::from_yaml_str("api.yaml", concat!(
        "int: 42\n",
        "float: 1.5\n",
        "bool: true\n",
        "null: ~\n",
        "string: hello\n",
    ))?;
    let root = root_view(&document);

    let kind = |key: &str| root.get(key).and_then(|node| node.as_scalar()).map(|s| s.kind());
    assert_eq!(kind("int"), Some(ScalarKind::Int));
    assert_eq!(kind("float"), Some(ScalarKind::Float));
    assert_eq!(kind("bool"), Some(ScalarKind::Bool));
    assert_eq!(kind("null"), Some(ScalarKind::Null));
    assert_eq!(kind("string"), Some(ScalarKind::String));

    Ok(())
}

#[test]
fn quoted_scalars_stay_strings() -> Result<(), LoadError> {
    let document = Document::from_yaml_str("api.yaml", concat!(
        "example: \"007\"\n",
        "x-version: '1.0'\n",
        "x-flag: \"true\"\n",
        "x-null: '~'\n",
        "plain: 007\n",
    ))?;
    let root = root_view(&document);

    let kind = |key: &str| root.get(key).and_then(|node| node.as_scalar()).map(|s| s.kind());
    assert_eq!(kind("example"), Some(ScalarKind::String));
    assert_eq!(kind("x-version"), Some(ScalarKind::String));
    assert_eq!(kind("x-flag"), Some(ScalarKind::String));
    assert_eq!(kind("x-null"), Some(ScalarKind::String));
    assert_eq!(kind("plain"), Some(ScalarKind::Int));
    assert_eq!(Value::from_node(root.get("example").expect("example")), Value::String("007".to_string()));
    assert_eq!(Value::from_node(root.get("x-flag").expect("x-flag")), Value::String("true".to_string()));

    Ok(())
}

#[test]
fn json_strings_stay_strings() -> Result<(), LoadError> {
    let document = Document::from_yaml_str("api.json", r#"{"x-id": "123", "x-count": 123}"#)?;
    let root = root_view(&document);

    assert_eq!(Value::from_node(root.get("x-id").expect("x-id")), Value::String("123".to_string()));
    assert_eq!(Value::from_node(root.get("x-count").expect("x-count")), Value::Int(123));

    Ok(())
}

#[test]
fn positions_point_at_source_lines() -> Result<(), LoadError> {
    let document = Document::from_yaml_str("api.yaml", concat!(
        "first: 1\n",
        "second:\n",
        "  nested: value\n",
    ))?;
    let root = root_view(&document);

    let second = root.get("second").expect("second");
    assert_eq!(second.node_type(), NodeType::Mapping);
    let nested = second.get("nested").expect("nested");
    assert_eq!(nested.position().line(), 3);
    assert!(nested.position().line() > root.get("first").expect("first").position().line());

    Ok(())
}

#[test]
fn reference_nodes_are_recognized() -> Result<(), LoadError> {
    let document = Document::from_yaml_str("api.yaml", concat!(
        "plain:\n",
        "  type: string\n",
        "ref:\n",
        "  $ref: '#/plain'\n",
    ))?;
    let root = root_view(&document);

    assert!(!root.get("plain").expect("plain").is_reference());
    let reference = root.get("ref").expect("ref");
    assert!(reference.is_reference());
    assert_eq!(reference.reference(), Some("#/plain"));

    Ok(())
}

#[test]
fn unparsable_text_is_a_load_error() {
    let result = Document::from_yaml_str("broken.yaml", "key: [unclosed\n");
    assert!(matches!(
        result,
        Err(LoadError::Unparsable { location, .. }) if location == "broken.yaml"
    ));
}
