use crate::index::DocumentIndex;
use crate::loc::SourcePosition;
use crate::low;
use crate::low::BuildError;
use crate::low::OpenApi;
use crate::node::DocumentBuilder;
use crate::node::NodeType;
use crate::tests::test_utils;
use std::sync::Arc;

fn scopes_of(openapi: &OpenApi) -> Vec<Vec<(String, Vec<String>)>> {
    let security = openapi.security.as_ref().expect("security").value();
    security.requirements
        .iter()
        .map(|entry| {
            entry.value()
                .iter()
                .map(|(name, scopes)| (
                    name.value().clone(),
                    scopes.value().iter().map(|scope| scope.value().clone()).collect(),
                ))
                .collect()
        })
        .collect()
}

#[test]
fn empty_requirement_entry_is_preserved() {
    // security:
    //   - petstore_auth: [write:pets, read:pets]
    //   - {}
    let pos = SourcePosition::unknown();
    let mut builder = DocumentBuilder::new("api.yaml");
    let write = builder.scalar("write:pets", pos);
    let read = builder.scalar("read:pets", pos);
    let scopes = builder.sequence(vec![write, read], pos);
    let scheme = builder.scalar("petstore_auth", pos);
    let first = builder.mapping(vec![(scheme, scopes)], pos);
    let second = builder.mapping(vec![], pos);
    let requirements = builder.sequence(vec![first, second], pos);
    let security = builder.scalar("security", pos);
    let root = builder.mapping(vec![(security, requirements)], pos);

    let (index, errors) = DocumentIndex::build(vec![builder.finish(root)]);
    assert_eq!(errors, vec![]);
    let index = Arc::new(index);
    let (openapi, errors) = low::build::<OpenApi>(&index, index.root().expect("root"));

    assert_eq!(errors, vec![]);
    assert_eq!(scopes_of(&openapi), vec![
        vec![(
            "petstore_auth".to_string(),
            vec!["write:pets".to_string(), "read:pets".to_string()],
        )],
        vec![],
    ]);

    let security = openapi.security.as_ref().expect("security").value();
    assert_eq!(security.len(), 2);
    assert_eq!(security.find_requirement("petstore_auth"), Some(vec!["write:pets", "read:pets"]));
    assert_eq!(security.find_requirement("api_key"), None);
}

#[test]
fn multiple_schemes_in_one_entry_are_all_retained() {
    let (index, _) = test_utils::build_index("
security:
  - a:
      - x
    b:
      - y
  - c: []
");
    let (openapi, errors) = low::build::<OpenApi>(&index, index.root().expect("root"));

    assert_eq!(errors, vec![]);
    assert_eq!(scopes_of(&openapi), vec![
        vec![
            ("a".to_string(), vec!["x".to_string()]),
            ("b".to_string(), vec!["y".to_string()]),
        ],
        vec![("c".to_string(), vec![])],
    ]);

    let security = openapi.security.as_ref().expect("security").value();
    assert_eq!(security.find_requirement("b"), Some(vec!["y"]));
    assert_eq!(security.find_requirement("c"), Some(vec![]));
}

#[test]
fn malformed_requirement_entries_are_structural_errors() {
    let (index, _) = test_utils::build_index("
security:
  - just_a_name
  - oauth: read
  - api_key:
      - one
      - nested:
          - two
");
    let (openapi, errors) = low::build::<OpenApi>(&index, index.root().expect("root"));

    assert_eq!(errors.len(), 3, "{errors:#?}");
    assert!(matches!(
        &errors[0],
        BuildError::Structural { field, expected: NodeType::Mapping, .. } if field == "security[0]",
    ));
    assert!(matches!(
        &errors[1],
        BuildError::Structural { field, expected: NodeType::Sequence, .. } if field == "security[1].oauth",
    ));
    assert!(matches!(
        &errors[2],
        BuildError::Structural { field, expected: NodeType::Scalar, .. } if field == "security[2].api_key[1]",
    ));

    // The bad entry is skipped, the entry with a bad key is kept without it,
    // and the partially bad scope list keeps its good scopes.
    assert_eq!(scopes_of(&openapi), vec![
        vec![],
        vec![("api_key".to_string(), vec!["one".to_string()])],
    ]);
}

#[test]
fn security_must_be_a_sequence() {
    let (index, _) = test_utils::build_index("
security:
  petstore_auth: []
");
    let (openapi, errors) = low::build::<OpenApi>(&index, index.root().expect("root"));

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        BuildError::Structural { expected: NodeType::Sequence, found: NodeType::Mapping, .. },
    ));
    assert!(openapi.security.is_none());
}
